//! LlmClient trait definition

use async_trait::async_trait;

use super::{LlmError, ModelInput};

/// Text-completion collaborator
///
/// The client owns everything about the call itself: model selection, auth,
/// token and temperature limits. Callers only hand over the adapted
/// conversation and get text back.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Generate the next assistant reply for the given conversation
    async fn generate(&self, input: ModelInput) -> Result<String, LlmError>;
}
