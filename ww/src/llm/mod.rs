//! LLM client module for WanderWise
//!
//! Provides the generation trait, the Gemini implementation and the adapter
//! that turns a conversation history into model input.

use std::sync::Arc;

use tracing::debug;

mod adapter;
pub mod client;
mod error;
mod gemini;
mod types;

pub use adapter::{adapt, emphasize};
pub use client::LlmClient;
pub use error::LlmError;
pub use gemini::GeminiClient;
pub use types::{ModelContent, ModelInput, ModelRole};

use crate::config::LlmConfig;

/// Create an LLM client based on the provider specified in config
///
/// Currently supports the "gemini" provider.
pub fn create_client(config: &LlmConfig) -> Result<Arc<dyn LlmClient>, LlmError> {
    debug!(provider = %config.provider, model = %config.model, "create_client: called");
    match config.provider.as_str() {
        "gemini" => {
            debug!("create_client: creating Gemini client");
            Ok(Arc::new(GeminiClient::from_config(config)?))
        }
        other => {
            debug!(provider = %other, "create_client: unknown provider");
            Err(LlmError::Config(format!(
                "Unknown LLM provider: '{}'. Supported: gemini",
                other
            )))
        }
    }
}
