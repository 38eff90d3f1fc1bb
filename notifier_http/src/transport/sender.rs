/*!
 * The `Sender` seam and its built-in ureq implementation.
 *
 * Uses `ureq`, a pure-Rust blocking HTTP client with no async runtime.
 * Every send already runs on its own background thread, so blocking I/O
 * is fine there.
 *
 * - **One attempt**: no retries and no backoff.
 * - **Status codes are data**: the agent is built with
 *   `http_status_as_error(false)` so a 4xx/5xx comes back as a `Response`
 *   and the dispatcher decides what it means.
 * - **Whole body**: the response is read with no size limit.
 * - **No timeout by default**: a request that never returns holds its
 *   permit for as long as the transport lets it. Use
 *   `DefaultSender::with_timeout` to opt in to one.
 */

use std::time::Duration;

use notifier_core::TransportError;
use ureq::Agent;

use crate::protocol::response::{status_text, Response};

/**
 * Performs one blocking POST of `message` to `url`.
 *
 * Shared by every send task spawned from one client, so implementations
 * must be safe to call concurrently. Any failure to build, transmit, or
 * read back the request is a `TransportError` with no partial `Response`.
 */
pub trait Sender: Send + Sync {
    fn send_post(&self, message: &[u8], url: &str) -> Result<Response, TransportError>;
}

/**
 * Sender used when the configuration does not supply one.
 *
 * Wraps a `ureq::Agent`; connection pooling and keep-alive are handled by
 * the agent internally.
 */
#[derive(Clone)]
pub struct DefaultSender {
    agent: Agent,
}

impl DefaultSender {
    /// Creates a sender with no request timeout.
    pub fn new() -> Self {
        let agent: Agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .into();

        Self { agent }
    }

    /// Creates a sender that gives up on any request taking longer than `timeout`.
    pub fn with_timeout(timeout: Duration) -> Self {
        let agent: Agent = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build()
            .into();

        Self { agent }
    }
}

impl Default for DefaultSender {
    fn default() -> Self {
        Self::new()
    }
}

impl Sender for DefaultSender {
    fn send_post(&self, message: &[u8], url: &str) -> Result<Response, TransportError> {
        let response = self
            .agent
            .post(url)
            .send(message)
            .map_err(|e| TransportError::with_source("failed sending POST request", e))?;

        let code = response.status().as_u16();
        let mut body = response.into_body();
        let content = body
            .with_config()
            .limit(u64::MAX)
            .read_to_vec()
            .map_err(|e| TransportError::with_source("failed reading response body", e))?;

        Ok(Response {
            status: status_text(code),
            code,
            content,
        })
    }
}
