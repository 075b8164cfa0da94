mod page;
mod sections;
mod view_model;

pub use page::RestaurantInfoDetails;
