//! Resource discovery and URL normalization for symbols

pub mod extract;
pub mod url;

pub use extract::{get_external_resources, ResourceDescriptor};
pub use url::{convert_resource_url, convert_resource_url_in_place};
