pub mod dataforseo;

pub use dataforseo::{Credentials, DataForSeoClient, ProviderError, VendorSearchProvider};
