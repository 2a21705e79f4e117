pub mod shorturl;

// Re-export for convenience
pub use shorturl::ShortUrlApi;
