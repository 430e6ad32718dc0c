//! In-memory conversation with the assistant.
//!
//! DESIGN
//! ======
//! Messages live only for the lifetime of the page. Replies are canned and
//! picked from the mode captured at send time; the delay is owned by the
//! drawer component, this module only appends.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use std::time::Duration;

use super::ui::Mode;

/// Display name of the assistant.
pub const ASSISTANT_NAME: &str = "Bobby";

/// First message shown when the page loads.
pub const GREETING: &str = "I’m here. What do you need right now?";

/// Delay between a user message and the assistant's canned reply.
pub const REPLY_DELAY: Duration = Duration::from_millis(250);

const CRISIS_REPLY: &str =
    "Under Crisis mode: give me the single most urgent blocker. I’ll propose 3 actions.";
const DEFAULT_REPLY: &str = "Got it. Want a summary first, or should I challenge your assumptions?";

/// Who wrote a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

impl Sender {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Sender::User => "You",
            Sender::Assistant => ASSISTANT_NAME,
        }
    }
}

/// A single chat message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub from: Sender,
    pub text: String,
}

/// Ordered transcript shared through a `RwSignal<ChatState>` context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            messages: vec![ChatMessage {
                from: Sender::Assistant,
                text: GREETING.to_owned(),
            }],
        }
    }
}

impl ChatState {
    /// Append the user's trimmed input.
    ///
    /// Returns `false` (and appends nothing) when the input is empty or
    /// whitespace-only.
    pub fn submit(&mut self, input: &str) -> bool {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.messages.push(ChatMessage {
            from: Sender::User,
            text: trimmed.to_owned(),
        });
        true
    }

    /// Submit the user's input while the UI is in `mode`.
    ///
    /// Returns the mode the reply must be generated for, or `None` when the
    /// input was discarded. Later mode changes do not affect that reply.
    pub fn send(&mut self, input: &str, mode: Mode) -> Option<Mode> {
        self.submit(input).then_some(mode)
    }

    /// Append the assistant's canned reply for `mode`.
    pub fn push_reply(&mut self, mode: Mode) {
        self.messages.push(ChatMessage {
            from: Sender::Assistant,
            text: canned_reply(mode).to_owned(),
        });
    }
}

/// The assistant's reply, which depends only on the mode.
#[must_use]
pub fn canned_reply(mode: Mode) -> &'static str {
    match mode {
        Mode::Crisis => CRISIS_REPLY,
        Mode::Focus | Mode::Review => DEFAULT_REPLY,
    }
}
