pub mod resource_category;
pub mod resource_icon;
