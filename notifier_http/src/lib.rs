/*!
 * Notifier HTTP: delivers notifications as HTTP POST requests.
 *
 * Each `send_message` returns immediately; a background thread waits for
 * one unit of the client's concurrency budget, POSTs the payload through a
 * `Sender`, classifies the response and invokes the callback exactly once.
 *
 * Only `200 OK`, `201 Created` and `202 Accepted` count as delivered.
 * There are no retries, no backoff and, with the default sender, no
 * request timeout.
 *
 * # Module structure
 *
 * - `protocol/`: what comes back (`Response`, status codes)
 * - `transport/`: how it is sent (`Sender`, budget, dispatcher threads)
 * - `client`: `ClientConfig` and `HttpClient`
 *
 * # Example
 * ```ignore
 * use notifier_http::{new_http_client, ClientConfig};
 *
 * let client = new_http_client(ClientConfig::new("https://hooks.example.com/notify", 4))?;
 * client.send_message(b"{\"text\":\"hello\"}".to_vec(), Some(Box::new(|result| {
 *     if let Err(err) = result {
 *         eprintln!("notification failed: {err}");
 *     }
 * })));
 * ```
 */

mod client;
mod protocol;
mod transport;

// ---------------------------------------------------------------------------
// Re-exports
// ---------------------------------------------------------------------------

pub use client::{new_http_client, ClientConfig, HttpClient};
pub use protocol::constants::{
    is_success_code, STATUS_ACCEPTED, STATUS_BAD_REQUEST, STATUS_CREATED, STATUS_OK,
};
pub use protocol::response::Response;
pub use transport::{DefaultSender, Sender};

pub use notifier_core::{Callback, Client, NotifyError, SendResult, TransportError};
