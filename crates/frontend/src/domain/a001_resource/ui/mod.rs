pub mod categories;
pub mod filters;
pub mod grid;
pub mod map;
pub mod search;
