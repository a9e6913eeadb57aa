//! Media resolver abstraction
//!
//! A resolver turns a canonical video URL plus a requested format into a
//! direct download URL. The heavy lifting happens in an external conversion
//! service; implementations only speak its protocol.

use crate::{
    error::AppResult,
    models::{FormatCatalog, Resolution},
};

pub mod http;
pub mod limited;

pub use http::HttpMediaResolver;
pub use limited::LimitedResolver;

/// Trait for media resolvers
///
/// `Ok(Resolution::Failed { .. })` means the resolver answered and declined.
/// `Err` is reserved for replies that could not be understood at all.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MediaResolver: Send + Sync {
    async fn resolve(&self, video_url: &str, format: &str) -> AppResult<Resolution>;

    /// Formats this resolver can produce
    fn supported_formats(&self) -> FormatCatalog;

    /// Resolver name for logging and debugging
    fn name(&self) -> &'static str;
}
