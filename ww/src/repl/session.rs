//! REPL session management

use colored::Colorize;
use eyre::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::{debug, info};

use super::render::{CHOOSER_TITLE, render_cards, render_choices};
use crate::conversation::{ConversationHistory, Role};
use crate::session::{TripSession, TurnOutcome};

/// Interactive REPL around one trip-planning session
pub struct ReplSession {
    session: TripSession,
}

impl ReplSession {
    pub fn new(session: TripSession) -> Self {
        Self { session }
    }

    /// Run the REPL main loop
    pub async fn run(&mut self, initial_message: Option<String>) -> Result<()> {
        self.print_welcome();

        if let Some(message) = initial_message {
            println!("{} {}", ">".bright_green(), message);
            self.process_user_input(&message).await?;
        }

        let mut rl = DefaultEditor::new().map_err(|e| eyre::eyre!("Failed to initialize readline: {}", e))?;

        loop {
            let readline = rl.readline(&format!("{} ", ">".bright_green()));

            match readline {
                Ok(line) => {
                    let input = line.trim();
                    if input.is_empty() {
                        continue;
                    }

                    let _ = rl.add_history_entry(input);

                    if input.starts_with('/') {
                        match self.handle_slash_command(input) {
                            SlashResult::Continue => continue,
                            SlashResult::Quit => break,
                        }
                    } else {
                        self.process_user_input(input).await?;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    // Ctrl+C - just show new prompt
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!();
                    break;
                }
                Err(err) => {
                    return Err(eyre::eyre!("Readline error: {}", err));
                }
            }
        }

        println!("Happy travels!");
        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("{}", "WanderWise: Your Travel Planner".bright_cyan().bold());
        println!("Where would you love to go for your next adventure?");
        println!("Type {} for help, {} to quit", "/help".yellow(), "/quit".yellow());
        println!();
    }

    fn handle_slash_command(&self, input: &str) -> SlashResult {
        let cmd = input.split_whitespace().next().unwrap_or("");
        debug!(%cmd, "handle_slash_command: called");

        match cmd {
            "/help" | "/h" => {
                self.print_help();
                SlashResult::Continue
            }
            "/quit" | "/q" | "/exit" => SlashResult::Quit,
            "/history" => {
                self.print_history();
                SlashResult::Continue
            }
            _ => {
                println!("{} Unknown command: {}", "?".yellow(), cmd);
                println!("Type {} for available commands", "/help".yellow());
                SlashResult::Continue
            }
        }
    }

    fn print_help(&self) {
        println!();
        println!("{}", "Available Commands:".bright_cyan());
        println!("  {:14} Show this help", "/help".yellow());
        println!("  {:14} Exit WanderWise", "/quit".yellow());
        println!("  {:14} Show conversation history", "/history".yellow());
        println!();
        println!("Press Ctrl+C while WanderWise is thinking to cancel that request.");
        println!();
    }

    fn print_history(&self) {
        println!();
        println!("{}", "Conversation History:".bright_cyan());
        for (i, turn) in self.session.history().to_list().iter().enumerate() {
            let role = match turn.role() {
                Role::System => "System".dimmed(),
                Role::User => "You".bright_green(),
                Role::Assistant => "WanderWise".bright_blue(),
            };
            let preview: String = turn.content().trim().chars().take(60).collect();
            let ellipsis = if turn.content().trim().chars().count() > 60 { "..." } else { "" };
            println!("  {}. {}: {}{}", i + 1, role, preview.replace('\n', " "), ellipsis);
        }
        println!();
    }

    /// Send one message, cancelling the request on Ctrl+C
    async fn process_user_input(&mut self, input: &str) -> Result<()> {
        println!("{}", "thinking...".dimmed());
        let turns_before = self.session.history().len();

        let outcome = tokio::select! {
            outcome = self.session.submit(input) => outcome?,
            _ = tokio::signal::ctrl_c() => {
                info!(session = %self.session.id(), "request cancelled by user");
                // Image lookups can be cut short after the reply was already recorded
                if let Some(reply) = reply_recorded_since(self.session.history(), turns_before) {
                    println!();
                    println!("{} {}", "WanderWise:".bright_blue().bold(), reply);
                    println!();
                }
                println!("{}", "Request cancelled.".yellow());
                return Ok(());
            }
        };

        self.print_outcome(&outcome);
        Ok(())
    }

    fn print_outcome(&self, outcome: &TurnOutcome) {
        println!();
        let reply = if outcome.generation_failed {
            outcome.reply.red().to_string()
        } else {
            outcome.reply.clone()
        };
        println!("{} {}", "WanderWise:".bright_blue().bold(), reply);
        println!();

        if let Some(choices) = outcome.preference_choices {
            print!("{}", render_choices(CHOOSER_TITLE, &choices));
            println!();
        }

        if !outcome.cards.is_empty() {
            print!("{}", render_cards(&outcome.cards, self.session.num_columns()));
        }
    }
}

/// Result of handling a slash command
enum SlashResult {
    Continue,
    Quit,
}

/// Assistant reply appended after `turns_before`, if the turn got that far
fn reply_recorded_since(history: &ConversationHistory, turns_before: usize) -> Option<&str> {
    history
        .to_list()
        .get(turns_before..)?
        .iter()
        .find(|turn| turn.role() == Role::Assistant)
        .map(|turn| turn.content())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::Turn;

    fn history_with(turns: &[(Role, &str)]) -> ConversationHistory {
        let mut history = ConversationHistory::with_system_prompt("Plan trips").unwrap();
        for (role, content) in turns {
            history.append(Turn::new(*role, *content).unwrap()).unwrap();
        }
        history
    }

    #[test]
    fn test_reply_recorded_since_finds_new_reply() {
        let history = history_with(&[(Role::User, "Peru"), (Role::Assistant, "A) **Lima**:** Food.")]);
        assert_eq!(reply_recorded_since(&history, 1), Some("A) **Lima**:** Food."));
    }

    #[test]
    fn test_reply_recorded_since_ignores_earlier_replies() {
        let history = history_with(&[
            (Role::User, "Peru"),
            (Role::Assistant, "Tourist spot or off the beaten path?"),
            (Role::User, "Off the beaten path"),
        ]);
        // Cancelled during generation: only the new user turn was added
        assert_eq!(reply_recorded_since(&history, 3), None);
    }

    #[test]
    fn test_reply_recorded_since_past_end() {
        let history = history_with(&[]);
        assert_eq!(reply_recorded_since(&history, 5), None);
    }
}
