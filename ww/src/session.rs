//! Trip-planning session: one user's conversation and its pipeline
//!
//! Each call to [`TripSession::submit`] runs one full turn:
//! append user turn, adapt, generate, append assistant turn, detect,
//! extract, lay out. `submit` takes `&mut self`, so runs against one history
//! never overlap.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::conversation::{ConversationHistory, HistoryError, Turn};
use crate::images::ImageFinder;
use crate::layout::{CardLayout, LayoutError, RenderCard};
use crate::llm::{LlmClient, adapt};
use crate::recommend::{PREFERENCE_CHOICES, extract, looks_like_option_list, looks_like_preference_question};

/// Assistant turn recorded when generation fails
pub const APOLOGY: &str = "An error occurred while processing your request.";

/// Errors that abort a pipeline run
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    History(#[from] HistoryError),

    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// Everything the render surface needs for one assistant reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    /// Assistant reply as recorded in the history
    pub reply: String,

    /// True when the reply is the apology for a failed generation
    pub generation_failed: bool,

    /// Preference chooser labels, when the reply asks for that preference
    pub preference_choices: Option<[&'static str; 2]>,

    /// Recommendation cards in reply order
    pub cards: Vec<RenderCard>,
}

/// One user's trip-planning conversation
pub struct TripSession {
    id: Uuid,
    history: ConversationHistory,
    llm: Arc<dyn LlmClient>,
    images: Arc<dyn ImageFinder>,
    layout: CardLayout,
}

impl TripSession {
    /// Start a session seeded with the system instruction
    pub fn new(
        system_prompt: &str,
        llm: Arc<dyn LlmClient>,
        images: Arc<dyn ImageFinder>,
        layout: CardLayout,
    ) -> Result<Self, SessionError> {
        let id = Uuid::now_v7();
        info!(session = %id, "session started");
        Ok(Self {
            id,
            history: ConversationHistory::with_system_prompt(system_prompt)?,
            llm,
            images,
            layout,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    pub fn num_columns(&self) -> usize {
        self.layout.num_columns()
    }

    /// Run one user turn through the pipeline
    ///
    /// Generation failures are recovered by recording [`APOLOGY`] as the
    /// assistant turn. If the returned future is dropped while the model
    /// call is in flight, no assistant turn is recorded.
    pub async fn submit(&mut self, user_input: &str) -> Result<TurnOutcome, SessionError> {
        debug!(session = %self.id, input_len = user_input.len(), "submit: called");
        self.history.append(Turn::user(user_input)?)?;

        let input = adapt(&self.history);
        let (reply, generation_failed) = match self.llm.generate(input).await {
            Ok(text) if !text.trim().is_empty() => (text, false),
            Ok(_) => {
                warn!(session = %self.id, "generation returned empty text");
                (APOLOGY.to_string(), true)
            }
            Err(e) => {
                warn!(session = %self.id, error = %e, "generation failed");
                (APOLOGY.to_string(), true)
            }
        };
        self.history.append(Turn::assistant(reply.as_str())?)?;

        let preference_choices = looks_like_preference_question(&reply).then_some(PREFERENCE_CHOICES);

        let cards = if looks_like_option_list(&reply) {
            let records = extract(&reply);
            debug!(session = %self.id, count = records.len(), "submit: extracted recommendations");
            self.layout.layout(&records, self.images.as_ref()).await
        } else {
            Vec::new()
        };

        info!(
            session = %self.id,
            turns = self.history.len(),
            cards = cards.len(),
            generation_failed,
            "turn complete"
        );

        Ok(TurnOutcome {
            reply,
            generation_failed,
            preference_choices,
            cards,
        })
    }
}

impl Drop for TripSession {
    fn drop(&mut self) {
        info!(session = %self.id, turns = self.history.len(), "session ended");
    }
}
