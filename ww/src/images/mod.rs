//! Image lookup for recommendation cards

use std::sync::Arc;

use tracing::debug;

mod error;
pub mod finder;
mod unsplash;

pub use error::ImageError;
pub use finder::{FallbackImageFinder, ImageFinder};
pub use unsplash::UnsplashClient;

use crate::config::ImageConfig;

/// Create an image finder based on the provider specified in config
///
/// Supports "unsplash", and "none" which always yields the fallback image.
pub fn create_finder(config: &ImageConfig) -> Result<Arc<dyn ImageFinder>, ImageError> {
    debug!(provider = %config.provider, "create_finder: called");
    match config.provider.as_str() {
        "unsplash" => Ok(Arc::new(UnsplashClient::from_config(config)?)),
        "none" => Ok(Arc::new(FallbackImageFinder::new(config.fallback_url.clone()))),
        other => Err(ImageError::Config(format!(
            "Unknown image provider: '{}'. Supported: unsplash, none",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_finder_none() {
        let config = ImageConfig {
            provider: "none".to_string(),
            fallback_url: "https://img.example.com/x.jpg".to_string(),
            ..Default::default()
        };
        let finder = create_finder(&config).unwrap();
        assert_eq!(finder.find_image("Kyoto").await.unwrap(), "https://img.example.com/x.jpg");
    }

    #[test]
    fn test_create_finder_unknown() {
        let config = ImageConfig {
            provider: "polaroid".to_string(),
            ..Default::default()
        };
        assert!(matches!(create_finder(&config), Err(ImageError::Config(_))));
    }
}
