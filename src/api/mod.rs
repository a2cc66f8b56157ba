pub mod client;
pub mod models;
pub mod source;

pub use client::{AdminApiClient, ApiError};
pub use models::*;
pub use source::{decode_data, decode_page, CollectionSource};
