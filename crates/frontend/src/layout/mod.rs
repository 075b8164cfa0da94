mod header;

pub use header::AppHeader;
