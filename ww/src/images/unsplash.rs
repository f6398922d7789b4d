//! Unsplash photo search client

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use super::{ImageError, ImageFinder};
use crate::config::ImageConfig;

/// Unsplash `/search/photos` client returning the first result's regular-size url
pub struct UnsplashClient {
    access_key: String,
    base_url: String,
    orientation: String,
    http: Client,
}

impl UnsplashClient {
    /// Create a new client from configuration
    pub fn from_config(config: &ImageConfig) -> Result<Self, ImageError> {
        debug!(base_url = %config.base_url, "UnsplashClient::from_config: called");
        let access_key = config.get_api_key().map_err(|e| ImageError::Config(e.to_string()))?;

        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent("WanderWise/0.1")
            .build()
            .map_err(ImageError::Network)?;

        Ok(Self {
            access_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            orientation: config.orientation.clone(),
            http,
        })
    }

    fn first_url(query: &str, response: SearchResponse) -> Result<String, ImageError> {
        response
            .results
            .into_iter()
            .next()
            .map(|photo| photo.urls.regular)
            .ok_or_else(|| ImageError::NoResults(query.to_string()))
    }
}

#[async_trait]
impl ImageFinder for UnsplashClient {
    async fn find_image(&self, query: &str) -> Result<String, ImageError> {
        debug!(%query, "UnsplashClient::find_image: called");
        let url = format!("{}/search/photos", self.base_url);

        let response = self
            .http
            .get(&url)
            .header("Authorization", format!("Client-ID {}", self.access_key))
            .header("Accept-Version", "v1")
            .query(&[
                ("query", query),
                ("orientation", self.orientation.as_str()),
                ("per_page", "1"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            debug!(%status, "UnsplashClient::find_image: API error");
            let message = response.text().await.unwrap_or_default();
            return Err(ImageError::ApiError { status, message });
        }

        let body: SearchResponse = response.json().await?;
        Self::first_url(query, body)
    }
}

// Unsplash API response types

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
struct Photo {
    urls: PhotoUrls,
}

#[derive(Debug, Deserialize)]
struct PhotoUrls {
    regular: String,
}
