/**
 * The HTTP notification client. Covers configuration, validation and the
 * `Client` implementation.
 *
 * Lifecycle:
 * 1. The caller builds a `ClientConfig` (URL, concurrency limit, optional
 *    `Sender`).
 * 2. `HttpClient::new` validates it. This is the only validation point:
 *    a limit of zero yields `NotifyError::InvalidConfiguration` and no
 *    client. No network activity happens here.
 * 3. `send_message` hands each payload to the bounded dispatcher and
 *    returns immediately. Results arrive through the callback.
 *
 * Clients are independent: nothing is shared between two instances, not
 * even the default sender.
 */
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use notifier_core::{Callback, Client, NotifyError};
use tracing::debug;

use crate::transport::{DefaultSender, Dispatcher, Sender};

// ---------------------------------------------------------------------------
// ClientConfig
// ---------------------------------------------------------------------------

/**
 * Configuration for an `HttpClient`.
 *
 * # Example
 * ```ignore
 * let config = ClientConfig::new("https://hooks.example.com/notify", 4);
 * let client = HttpClient::new(config)?;
 * ```
 */
#[derive(Clone)]
pub struct ClientConfig {
    /// Endpoint every message is POSTed to. Fixed for the client's lifetime.
    pub url: String,

    /// Maximum number of POSTs in flight at once. Must be greater than 0.
    /// A limit of 1 sends messages strictly one after another.
    pub limit: usize,

    /// Transport used for each POST. `None` selects `DefaultSender`.
    pub sender: Option<Arc<dyn Sender>>,
}

impl ClientConfig {
    pub fn new(url: impl Into<String>, limit: usize) -> Self {
        Self {
            url: url.into(),
            limit,
            sender: None,
        }
    }

    /// Replaces the transport used for each POST.
    pub fn with_sender(mut self, sender: Arc<dyn Sender>) -> Self {
        self.sender = Some(sender);
        self
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("url", &self.url)
            .field("limit", &self.limit)
            .field("custom_sender", &self.sender.is_some())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// HttpClient
// ---------------------------------------------------------------------------

/// Notification client that delivers each message as an HTTP POST.
pub struct HttpClient {
    dispatcher: Arc<Dispatcher>,
}

impl HttpClient {
    /**
     * Validates `config` and builds the client.
     *
     * # Returns
     * `Err(NotifyError::InvalidConfiguration)` if `config.limit` is 0.
     */
    pub fn new(config: ClientConfig) -> Result<Self, NotifyError> {
        if config.limit == 0 {
            return Err(NotifyError::invalid_configuration(
                "limit must be greater than 0",
            ));
        }

        let sender = config
            .sender
            .unwrap_or_else(|| Arc::new(DefaultSender::new()) as Arc<dyn Sender>);

        debug!(url = %config.url, limit = config.limit, "http notifier created");

        Ok(Self {
            dispatcher: Arc::new(Dispatcher::new(config.url, config.limit, sender)),
        })
    }

    pub fn url(&self) -> &str {
        self.dispatcher.url()
    }

    pub fn limit(&self) -> usize {
        self.dispatcher.capacity()
    }

    /// Sends currently inside the transport. Never exceeds `limit()`.
    pub fn in_flight(&self) -> usize {
        self.dispatcher.in_flight()
    }

    /// Sends accepted whose callback has not returned yet, queued ones included.
    pub fn pending(&self) -> usize {
        self.dispatcher.pending()
    }

    /**
     * Blocks until every send accepted so far has completed, or until
     * `timeout` elapses. Nothing is cancelled on timeout.
     *
     * # Returns
     * `true` if all sends completed in time, `false` otherwise.
     */
    pub fn flush(&self, timeout: Duration) -> bool {
        self.dispatcher.flush(timeout)
    }
}

impl Client for HttpClient {
    fn send_message(&self, message: Vec<u8>, callback: Option<Callback>) {
        self.dispatcher.submit(message, callback);
    }
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("url", &self.url())
            .field("limit", &self.limit())
            .finish()
    }
}

/**
 * Builds an HTTP notifier behind the generic `Client` capability.
 *
 * Application code that only needs to send should hold the returned
 * trait object rather than `HttpClient`.
 */
pub fn new_http_client(config: ClientConfig) -> Result<Box<dyn Client>, NotifyError> {
    Ok(Box::new(HttpClient::new(config)?))
}
