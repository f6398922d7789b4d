//! Turns and the append-only conversation history

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::HistoryError;

/// Who authored a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl FromStr for Role {
    type Err = HistoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        debug!(%s, "Role::from_str: called");
        match s {
            "system" => Ok(Self::System),
            "user" => Ok(Self::User),
            "assistant" => Ok(Self::Assistant),
            other => {
                debug!(%other, "Role::from_str: unknown role");
                Err(HistoryError::InvalidTurn(format!("unknown role '{}'", other)))
            }
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::System => write!(f, "system"),
            Self::User => write!(f, "user"),
            Self::Assistant => write!(f, "assistant"),
        }
    }
}

/// One role-tagged message in the transcript
///
/// Fields are private so a turn can only be built through [`Turn::new`],
/// which rejects empty content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    role: Role,
    content: String,
}

impl Turn {
    /// Create a turn, rejecting empty or whitespace-only content
    pub fn new(role: Role, content: impl Into<String>) -> Result<Self, HistoryError> {
        let content = content.into();
        debug!(%role, content_len = content.len(), "Turn::new: called");
        if content.trim().is_empty() {
            debug!("Turn::new: empty content");
            return Err(HistoryError::InvalidTurn(format!("{} turn has empty content", role)));
        }
        Ok(Self { role, content })
    }

    /// Create a turn from a role name such as `"user"`
    pub fn parse(role: &str, content: impl Into<String>) -> Result<Self, HistoryError> {
        Self::new(role.parse()?, content)
    }

    pub fn system(content: impl Into<String>) -> Result<Self, HistoryError> {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Result<Self, HistoryError> {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Result<Self, HistoryError> {
        Self::new(Role::Assistant, content)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Ordered, append-only log of turns
///
/// There is deliberately no way to remove or reorder turns.
#[derive(Debug, Clone, Default)]
pub struct ConversationHistory {
    turns: Vec<Turn>,
}

impl ConversationHistory {
    /// Create an empty history
    pub fn new() -> Self {
        debug!("ConversationHistory::new: called");
        Self::default()
    }

    /// Create a history seeded with its system instruction
    pub fn with_system_prompt(prompt: impl Into<String>) -> Result<Self, HistoryError> {
        let mut history = Self::new();
        history.append(Turn::system(prompt)?)?;
        Ok(history)
    }

    /// Append a turn at the end of the transcript
    ///
    /// A system turn is only accepted as the very first turn. Validation
    /// happens before mutation, so a rejected turn leaves the history intact.
    pub fn append(&mut self, turn: Turn) -> Result<(), HistoryError> {
        debug!(role = %turn.role(), len = self.turns.len(), "ConversationHistory::append: called");
        if turn.role() == Role::System && !self.turns.is_empty() {
            debug!("ConversationHistory::append: system turn after start");
            return Err(HistoryError::InvalidTurn(
                "system turn must be the first and only system turn".to_string(),
            ));
        }
        self.turns.push(turn);
        Ok(())
    }

    /// Read-only view of every turn in order
    pub fn to_list(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    /// Content of the system turn, if the history was seeded with one
    pub fn system_prompt(&self) -> Option<&str> {
        self.turns
            .first()
            .filter(|t| t.role() == Role::System)
            .map(|t| t.content())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_order() {
        let mut history = ConversationHistory::with_system_prompt("You are WanderWise").unwrap();
        history.append(Turn::user("Japan").unwrap()).unwrap();
        history.append(Turn::assistant("Tourist or off the beaten path?").unwrap()).unwrap();
        history.append(Turn::user("Off the beaten path").unwrap()).unwrap();

        let roles: Vec<Role> = history.to_list().iter().map(|t| t.role()).collect();
        assert_eq!(roles, vec![Role::System, Role::User, Role::Assistant, Role::User]);
        assert_eq!(history.last().unwrap().content(), "Off the beaten path");
        assert_eq!(history.len(), 4);
    }

    #[test]
    fn test_empty_content_rejected() {
        assert!(matches!(Turn::user(""), Err(HistoryError::InvalidTurn(_))));
        assert!(matches!(Turn::assistant("   \n"), Err(HistoryError::InvalidTurn(_))));
    }

    #[test]
    fn test_unknown_role_rejected() {
        let result = Turn::parse("narrator", "Once upon a time");
        assert!(matches!(result, Err(HistoryError::InvalidTurn(_))));

        let turn = Turn::parse("assistant", "Hello").unwrap();
        assert_eq!(turn.role(), Role::Assistant);
    }

    #[test]
    fn test_second_system_turn_rejected_without_mutation() {
        let mut history = ConversationHistory::with_system_prompt("first").unwrap();
        history.append(Turn::user("hi").unwrap()).unwrap();

        let result = history.append(Turn::system("second").unwrap());
        assert!(matches!(result, Err(HistoryError::InvalidTurn(_))));
        assert_eq!(history.len(), 2);
        assert_eq!(history.system_prompt(), Some("first"));
    }

    #[test]
    fn test_system_prompt_absent() {
        let mut history = ConversationHistory::new();
        assert!(history.is_empty());
        history.append(Turn::user("hi").unwrap()).unwrap();
        assert_eq!(history.system_prompt(), None);
    }

    #[test]
    fn test_role_roundtrip_names() {
        for role in [Role::System, Role::User, Role::Assistant] {
            assert_eq!(role.to_string().parse::<Role>().unwrap(), role);
        }
    }
}
