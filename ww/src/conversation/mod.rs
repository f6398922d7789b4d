//! Conversation transcript for a single trip-planning session
//!
//! The history is the literal chat transcript: append-only, insertion order
//! is causal order, and the system instruction (if any) is always turn one.

mod error;
mod history;

pub use error::HistoryError;
pub use history::{ConversationHistory, Role, Turn};
