//! Conversation history to model input adaptation
//!
//! The model has no system slot, so the system instruction rides along in
//! the first entry. Two cases:
//!
//! - nothing but a system turn: one synthesized user entry carrying the
//!   emphasized instruction
//! - real turns exist: the emphasized instruction becomes the leading part
//!   of the first entry, never a separate entry

use tracing::debug;

use super::{ModelContent, ModelInput};
use crate::conversation::{ConversationHistory, Role};

/// Wrap the system instruction in emphasis markers
pub fn emphasize(system_prompt: &str) -> String {
    format!("*{}*", system_prompt)
}

/// Build the model input for the current history
pub fn adapt(history: &ConversationHistory) -> ModelInput {
    debug!(turns = history.len(), "adapt: called");
    let mut system_prompt = String::new();
    let mut contents = Vec::with_capacity(history.len());

    for turn in history.to_list() {
        match turn.role() {
            Role::System => system_prompt = turn.content().to_string(),
            Role::User => contents.push(ModelContent::user(turn.content())),
            Role::Assistant => contents.push(ModelContent::model(turn.content())),
        }
    }

    if !system_prompt.is_empty() {
        let emphasized = emphasize(&system_prompt);
        match contents.first_mut() {
            None => {
                debug!("adapt: no turns yet, synthesizing instruction entry");
                contents.push(ModelContent::user(emphasized));
            }
            Some(first) => {
                debug!("adapt: prepending instruction to first entry");
                first.parts.insert(0, emphasized);
            }
        }
    }

    ModelInput { contents }
}
