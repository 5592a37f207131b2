pub mod cache;
pub mod vendors;
