mod branches;
mod menu;

pub use branches::BranchesSection;
pub use menu::MenuSection;
