pub mod category;
pub mod listing;

pub use category::VendorCategory;
pub use listing::{
    DatabaseListing, GoogleListing, InstagramListing, Rating, SearchResult, VendorListing,
    VendorSource,
};
