//! Error types for sanitization operations.
//!
//! Propagation and presentation are kept separate: [`SanitizeError`] and
//! [`FormattedError`] propagate through `Result` like any other error, while
//! [`render_html`] is a pure projection callers opt into when they want an
//! HTML rendering instead of the raw message.

use smol_str::SmolStr;
use thiserror::Error;

/// Render a message in the fixed HTML error template.
///
/// Output is exactly `<strong>{message}</strong><br />\n`. The message is
/// interpolated verbatim - no escaping is performed here, so callers embedding
/// the result in a larger document own any escaping of untrusted content.
pub fn render_html(message: &str) -> String {
    format!("<strong>{message}</strong><br />\n")
}

/// An underlying failure decorated with an HTML rendering capability.
///
/// Wraps the message of a lower-level failure (a transport error, a library
/// error) at the point it is reported. The wrapped message and the cause chain
/// are carried forward unchanged; [`FormattedError::error_message`] adds a
/// presentation-layer rendering without altering propagation semantics.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct FormattedError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl FormattedError {
    /// Wrap a message with no underlying cause.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Wrap a message together with the failure it is reporting on behalf of.
    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// The wrapped message, unchanged.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The HTML rendering of the wrapped message.
    ///
    /// Pure projection through [`render_html`]; calling it does not mutate
    /// the wrapped message or the error's identity.
    pub fn error_message(&self) -> String {
        render_html(&self.message)
    }
}

/// Errors reported by sanitization operations.
#[derive(Debug, Error)]
pub enum SanitizeError {
    /// End tags mark structure; they have no node form of their own.
    #[error("end tag </{0}> cannot be converted to a node")]
    EndTagToNode(SmolStr),

    /// Wrapped operational failure from a collaborating component.
    #[error(transparent)]
    Formatted(#[from] FormattedError),
}
