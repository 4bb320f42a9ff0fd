//! Conversation state for the agent chat page.
//!
//! DESIGN
//! ======
//! Every transition is a method on `ChatState` that returns what the page has
//! to do next (send a request, start or stop capture, speak a reply). The page
//! owns those side effects, so the lifecycle below is testable without a
//! browser:
//!
//! ```text
//! Idle --submit--> AwaitingResponse --reply/failure--> Idle
//! Idle --toggle_listening--> Listening --transcript/end/error--> Idle
//! ```
//!
//! The session id is adopted from the first reply and survives `clear`.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::api::ApiError;
use crate::net::types::{ChatResponse, PropertyRecommendation};

pub const CONNECT_FAILED_TEXT: &str = "Unable to connect to the server. Please check your connection and try again.";
pub const RATE_LIMITED_TEXT: &str = "You're sending too many messages. Please wait a moment and try again.";
pub const GENERIC_FAILURE_TEXT: &str = "Sorry, there was an error processing your request. Please try again.";

/// Who authored a message in the conversation log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Agent,
    System,
}

/// One entry in the conversation log. Never mutated after creation.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChatMessage {
    /// Client-side render key.
    pub id: String,
    pub role: ChatRole,
    pub content: String,
    /// ISO-8601 creation time.
    pub timestamp: String,
}

impl ChatMessage {
    pub fn new(role: ChatRole, content: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: timestamp.into(),
        }
    }
}

/// Where the chat page is in its request/capture lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChatPhase {
    #[default]
    Idle,
    AwaitingResponse,
    Listening,
}

/// A chat turn the page must send to the backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub text: String,
    pub session_id: Option<String>,
}

/// What the page must do with the speech recognizer after a toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListenCommand {
    Start,
    Stop,
    Ignore,
}

/// State for the chat page.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub input: String,
    pub session_id: Option<String>,
    pub recommendations: Vec<PropertyRecommendation>,
    pub phase: ChatPhase,
    /// Text of the last failed turn; cleared by the next submit.
    pub error: Option<String>,
    /// Whether replies are read aloud.
    pub voice_output: bool,
    pub can_listen: bool,
    pub can_speak: bool,
}

impl ChatState {
    /// Record the platform speech capabilities detected at mount.
    pub fn set_voice_support(&mut self, can_listen: bool, can_speak: bool) {
        self.can_listen = can_listen;
        self.can_speak = can_speak;
        if !can_speak {
            self.voice_output = false;
        }
        if !can_listen {
            self.listening_stopped();
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == ChatPhase::AwaitingResponse
    }

    pub fn is_listening(&self) -> bool {
        self.phase == ChatPhase::Listening
    }

    pub fn can_submit(&self) -> bool {
        !self.is_loading() && !self.input.trim().is_empty()
    }

    /// Move the current input into the log and hand back the request to send.
    ///
    /// Returns `None` (and changes nothing) for blank input or while a request
    /// is already in flight.
    pub fn submit(&mut self, now: &str) -> Option<OutgoingMessage> {
        if self.is_loading() {
            return None;
        }
        let text = self.input.trim();
        if text.is_empty() {
            return None;
        }
        let text = text.to_owned();

        self.messages.push(ChatMessage::new(ChatRole::User, text.clone(), now));
        self.input.clear();
        self.recommendations.clear();
        self.error = None;
        self.phase = ChatPhase::AwaitingResponse;

        Some(OutgoingMessage { text, session_id: self.session_id.clone() })
    }

    /// Record the agent's reply. Returns the text to speak, if any.
    pub fn receive_reply(&mut self, response: ChatResponse, now: &str) -> Option<String> {
        if !self.is_loading() {
            return None;
        }
        if self.session_id.is_none() && !response.session_id.is_empty() {
            self.session_id = Some(response.session_id);
        }
        if !response.properties.is_empty() {
            self.recommendations = response.properties;
        }
        let spoken = self.speakable(&response.message);
        self.messages.push(ChatMessage::new(ChatRole::Agent, response.message, now));
        self.phase = ChatPhase::Idle;
        spoken
    }

    /// Record a failed turn as a system message. Returns the text to speak, if any.
    pub fn receive_failure(&mut self, error: &ApiError, now: &str) -> Option<String> {
        if !self.is_loading() {
            return None;
        }
        let text = classify_failure(error);
        self.messages.push(ChatMessage::new(ChatRole::System, text, now));
        self.error = Some(text.to_owned());
        self.phase = ChatPhase::Idle;
        self.speakable(text)
    }

    /// Flip speech capture on or off.
    pub fn toggle_listening(&mut self) -> ListenCommand {
        match self.phase {
            ChatPhase::AwaitingResponse => ListenCommand::Ignore,
            ChatPhase::Listening => {
                self.phase = ChatPhase::Idle;
                ListenCommand::Stop
            }
            ChatPhase::Idle if self.can_listen => {
                self.phase = ChatPhase::Listening;
                ListenCommand::Start
            }
            ChatPhase::Idle => ListenCommand::Ignore,
        }
    }

    /// Put a recognized transcript into the input.
    ///
    /// Returns `true` when the page should auto-submit it.
    pub fn receive_transcript(&mut self, transcript: &str) -> bool {
        if !self.is_listening() {
            return false;
        }
        self.phase = ChatPhase::Idle;
        let transcript = transcript.trim();
        if transcript.is_empty() {
            return false;
        }
        self.input = transcript.to_owned();
        true
    }

    /// Recognition ended or errored without a usable transcript.
    pub fn listening_stopped(&mut self) {
        if self.is_listening() {
            self.phase = ChatPhase::Idle;
        }
    }

    /// Empty the log and recommendations, keeping the session.
    ///
    /// Refused while a request is in flight. Returns whether anything was
    /// cleared, in which case the page also cancels speech output.
    pub fn clear(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        self.messages.clear();
        self.recommendations.clear();
        self.error = None;
        true
    }

    /// Flip reading replies aloud. Stays off without synthesis support.
    /// Returns the new setting.
    pub fn toggle_voice_output(&mut self) -> bool {
        self.voice_output = self.can_speak && !self.voice_output;
        self.voice_output
    }

    fn speakable(&self, text: &str) -> Option<String> {
        (self.voice_output && self.can_speak).then(|| text.to_owned())
    }
}

/// Map a failed chat call to the text shown in the log.
pub fn classify_failure(error: &ApiError) -> &'static str {
    match error {
        ApiError::Transport(_) => CONNECT_FAILED_TEXT,
        ApiError::HttpStatus { status: 429 } => RATE_LIMITED_TEXT,
        ApiError::HttpStatus { .. } | ApiError::Decode(_) => GENERIC_FAILURE_TEXT,
    }
}
