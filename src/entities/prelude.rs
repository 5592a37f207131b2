pub use super::google_vendors::Entity as GoogleVendors;
pub use super::instagram_vendors::Entity as InstagramVendors;
pub use super::vendor_cache::Entity as VendorCache;
pub use super::vendors::Entity as Vendors;
