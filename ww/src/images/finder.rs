//! ImageFinder trait definition

use async_trait::async_trait;
use tracing::debug;

use super::ImageError;

/// Image search collaborator
///
/// Implementations own auth and request details. Failures are returned as
/// errors; substituting a fallback image is the caller's concern.
#[async_trait]
pub trait ImageFinder: Send + Sync {
    /// Find an image url for a free-text query such as a destination name
    async fn find_image(&self, query: &str) -> Result<String, ImageError>;
}

/// Finder that never searches and always answers with one fixed url
///
/// Used when image lookup is disabled (`images.provider: none`).
pub struct FallbackImageFinder {
    url: String,
}

impl FallbackImageFinder {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait]
impl ImageFinder for FallbackImageFinder {
    async fn find_image(&self, query: &str) -> Result<String, ImageError> {
        debug!(%query, "FallbackImageFinder::find_image: called");
        Ok(self.url.clone())
    }
}
