pub mod client;
pub mod http;
pub mod interceptors;
pub mod shared;

pub use client::{ApiClient, ApiClientBuilder};
pub use shared::{init_shared, shared};
