mod page;
mod tabs;
mod view_model;

pub use page::RestaurantDetails;
