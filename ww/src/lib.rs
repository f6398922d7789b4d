//! WanderWise - conversational trip planner
//!
//! WanderWise drives a multi-turn dialogue with a language model. When a
//! reply contains a lettered list of destination or activity options, the
//! options are extracted into records and laid out as illustrated cards.
//!
//! # Pipeline
//!
//! One user turn runs, in order:
//!
//! 1. append the user turn to the [`conversation::ConversationHistory`]
//! 2. [`llm::adapt`] the history into model input
//! 3. [`llm::LlmClient::generate`] the reply and append it
//! 4. [`recommend::looks_like_option_list`] gates extraction
//! 5. [`recommend::extract`] parses records
//! 6. [`layout::CardLayout`] assigns columns and looks up one image per record
//!
//! # Modules
//!
//! - [`conversation`] - Append-only transcript
//! - [`llm`] - Generation trait, Gemini client, history adapter
//! - [`recommend`] - Option detection, heading cleanup, extraction
//! - [`images`] - Image lookup trait and Unsplash client
//! - [`layout`] - Column assignment and card building
//! - [`session`] - Explicit per-user session running the pipeline
//! - [`repl`] - Terminal render surface
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface

pub mod cli;
pub mod config;
pub mod conversation;
pub mod images;
pub mod layout;
pub mod llm;
pub mod prompts;
pub mod recommend;
pub mod repl;
pub mod session;

// Re-export commonly used types
pub use config::{Config, ImageConfig, LayoutConfig, LlmConfig};
pub use conversation::{ConversationHistory, HistoryError, Role, Turn};
pub use images::{FallbackImageFinder, ImageError, ImageFinder, UnsplashClient, create_finder};
pub use layout::{CardLayout, LayoutError, RenderCard, column_for, group_by_column};
pub use llm::{GeminiClient, LlmClient, LlmError, ModelContent, ModelInput, ModelRole, adapt, create_client};
pub use recommend::{
    RecommendationRecord, extract, looks_like_option_list, looks_like_preference_question, sanitize,
};
pub use session::{APOLOGY, SessionError, TripSession, TurnOutcome};
