//! Model-facing request types
//!
//! The shape mirrors the `contents` array of Gemini-style chat APIs: an
//! ordered list of role-tagged entries, each carrying one or more text
//! parts, and no dedicated system slot.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Role of an entry as the model sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelRole {
    User,
    Model,
}

/// One entry of the model input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelContent {
    pub role: ModelRole,
    pub parts: Vec<String>,
}

impl ModelContent {
    /// Create a user entry with a single text part
    pub fn user(text: impl Into<String>) -> Self {
        debug!("ModelContent::user: called");
        Self {
            role: ModelRole::User,
            parts: vec![text.into()],
        }
    }

    /// Create a model entry with a single text part
    pub fn model(text: impl Into<String>) -> Self {
        debug!("ModelContent::model: called");
        Self {
            role: ModelRole::Model,
            parts: vec![text.into()],
        }
    }
}

/// Everything sent to the model for one generation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInput {
    pub contents: Vec<ModelContent>,
}
