//! Conversational-agent collaborator seam.
//!
//! The hosted agent that turns a task description into generated content is
//! external to this crate. The pipeline only needs one capability from it:
//! send a prompt, get a plain string back. [`IntentDetector`] is that seam,
//! constructor-injected into the pipeline (never an ambient global), so the
//! real client, the CLI's canned responder, and test doubles all plug in the
//! same way.
//!
//! Sessions, authentication, retries and timeouts belong to the
//! implementation behind the trait, not to this crate.

use crate::error::Result;

/// Sentinel returned when the caller has no agent response to supply.
///
/// Treated as an ordinary response string by the post-processor and the
/// renderer, never as an error.
pub const NO_RESPONSE: &str = "No response received from the agent.";

/// The conversational-agent collaborator.
pub trait IntentDetector {
    /// Send `text` to the agent under the given session identifier and
    /// return the agent's fulfillment text.
    fn detect_intent(&self, session: &str, text: &str) -> Result<String>;
}

/// An [`IntentDetector`] that returns a fixed response.
///
/// Used by the CLI (which receives the agent response out of band, as a
/// string or file) and by tests.
pub struct CannedResponder {
    response: String,
}

impl CannedResponder {
    /// Create a responder that always returns `response`.
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }

    /// Create a responder that returns the [`NO_RESPONSE`] sentinel.
    pub fn no_response() -> Self {
        Self::new(NO_RESPONSE)
    }
}

impl IntentDetector for CannedResponder {
    fn detect_intent(&self, _session: &str, _text: &str) -> Result<String> {
        Ok(self.response.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canned_responder_echoes_its_response() {
        let agent = CannedResponder::new("Q1\nAnswer: B");
        let reply = agent.detect_intent("session-1", "any prompt").unwrap();
        assert_eq!(reply, "Q1\nAnswer: B");
    }

    #[test]
    fn no_response_sentinel_is_a_plain_string() {
        let agent = CannedResponder::no_response();
        let reply = agent.detect_intent("session-1", "any prompt").unwrap();
        assert_eq!(reply, NO_RESPONSE);
    }
}
