mod client;
mod error;
pub mod http;
mod types;

pub use client::CatalogClient;
pub use error::ApiError;
pub use http::{HttpClient, HttpResponse, ReqwestClient};
pub use types::*;
