//! Error types shared by every notification client.
//!
//! Configuration errors surface synchronously from constructors. Every
//! other variant describes the failure of exactly one send and is only
//! ever delivered through that send's callback.

use std::error::Error as StdError;

use thiserror::Error;

/// Errors produced by notification clients.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The client configuration was rejected at construction time.
    #[error("invalid client configuration, {reason}")]
    InvalidConfiguration {
        /// Which constraint was violated
        reason: String,
    },

    /// The transport could not complete the send.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The transport succeeded but the remote side answered with a status
    /// code outside the accepted set. The response body is discarded.
    #[error("failed sending notification: response code: {code} response status: {status}")]
    UnsuccessfulResponse {
        /// Numeric status code
        code: u16,
        /// Status line text, e.g. `"400 Bad Request"`
        status: String,
    },

    /// The sender panicked while handling the send.
    #[error("sender panicked: {message}")]
    SenderPanicked {
        /// Panic payload rendered as text
        message: String,
    },

    /// The send could never be started.
    #[error("send abandoned before it could be dispatched")]
    Abandoned,
}

impl NotifyError {
    /// Builds an `InvalidConfiguration` error.
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    /// Returns `true` if the send never produced a usable response.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

/**
 * Failure to build, transmit, or read back a request.
 *
 * Carries a human-readable message and, when available, the underlying
 * error as its source.
 */
#[derive(Debug, Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl TransportError {
    /// Creates a transport error with no underlying cause.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a transport error wrapping `source`.
    pub fn with_source(
        message: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// The message this error was created with.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<std::io::Error> for TransportError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source("i/o failure", err)
    }
}
