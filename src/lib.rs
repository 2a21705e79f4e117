//! Configured HTTP client for the short URL service.
//!
//! One shared [`ApiClient`] carries the resolved base URL, a fixed
//! 10 second timeout, a JSON content type and the request/response hooks.
//! [`ShortUrlApi`] puts typed calls for the service endpoints on top of it.

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod presentation;
pub mod state;

pub use api::ShortUrlApi;
pub use domain::error::{ApiError, ErrorResponse};
pub use domain::traits::{RequestInterceptor, ResponseInterceptor};
pub use infrastructure::config::{BuildMode, ClientOptions, ClientSettings};
pub use infrastructure::network::{init_shared, shared, ApiClient, ApiClientBuilder};
