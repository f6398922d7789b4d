//! Interactive REPL for WanderWise
//!
//! The terminal render surface: prints replies, the preference chooser and
//! recommendation cards grouped by column.

pub mod render;
mod session;

pub use session::ReplSession;

use eyre::{Context, Result};

use crate::config::Config;
use crate::images::create_finder;
use crate::layout::CardLayout;
use crate::llm::create_client;
use crate::prompts;
use crate::session::TripSession;

/// Run the interactive REPL
///
/// This is the main entry point for `ww chat`.
pub async fn run_interactive(config: &Config, initial_message: Option<String>) -> Result<()> {
    config.validate()?;

    let llm = create_client(&config.llm).context("Failed to create LLM client")?;
    let images = create_finder(&config.images).context("Failed to create image finder")?;
    let layout = CardLayout::from_config(&config.layout, &config.images)?;

    let session = TripSession::new(prompts::WANDERWISE, llm, images, layout)?;
    let mut repl = ReplSession::new(session);
    repl.run(initial_message).await
}
