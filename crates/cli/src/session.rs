//! In-memory conversation state for an interactive chat session.
//!
//! A session is a single linear, append-only log of turns that lives for
//! the duration of one `campus chat` run. It is an explicitly passed
//! value, not ambient global state. No persistence, no per-turn edits.

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Display label for the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "you",
            Self::Assistant => "assistant",
        }
    }
}

/// A single conversation turn.
#[derive(Debug, Clone)]
pub struct Turn {
    pub role: Role,
    pub text: String,
}

/// Append-only turn history for one chat session.
#[derive(Debug, Default)]
pub struct ChatSession {
    turns: Vec<Turn>,
}

impl ChatSession {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a user question.
    pub fn push_user(&mut self, text: impl Into<String>) {
        self.turns.push(Turn {
            role: Role::User,
            text: text.into(),
        });
    }

    /// Record an assistant answer.
    pub fn push_assistant(&mut self, text: impl Into<String>) {
        self.turns.push(Turn {
            role: Role::Assistant,
            text: text.into(),
        });
    }

    /// Drop all turns.
    pub fn clear(&mut self) {
        self.turns.clear();
    }

    /// All turns in order.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Number of recorded turns.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Whether the session has no turns.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turns_are_appended_in_order() {
        let mut session = ChatSession::new();
        session.push_user("What is the fee?");
        session.push_assistant("The fee is listed in the prospectus.");
        session.push_user("And the hostel?");

        assert_eq!(session.len(), 3);
        assert_eq!(session.turns()[0].role, Role::User);
        assert_eq!(session.turns()[1].role, Role::Assistant);
        assert_eq!(session.turns()[2].text, "And the hostel?");
    }

    #[test]
    fn test_clear_resets_turn_count() {
        let mut session = ChatSession::new();
        session.push_user("hello");
        session.push_assistant("hi");
        assert!(!session.is_empty());

        session.clear();
        assert!(session.is_empty());
        assert_eq!(session.len(), 0);
    }

    #[test]
    fn test_role_labels() {
        assert_eq!(Role::User.as_str(), "you");
        assert_eq!(Role::Assistant.as_str(), "assistant");
    }
}
