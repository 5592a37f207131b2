pub mod prelude;

pub mod google_vendors;
pub mod instagram_vendors;
pub mod vendor_cache;
pub mod vendors;
