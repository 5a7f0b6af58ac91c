pub mod config;
pub mod dom;
pub mod icons;
pub mod map;
