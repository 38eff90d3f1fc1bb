/**
 * Notifier: send a payload, get the outcome back through a callback.
 *
 * This is the crate applications should depend on. Code that sends
 * notifications takes the `Client` capability; only the place that
 * builds the client needs to know which transport is behind it.
 *
 * # Quick start
 *
 * ```ignore
 * use notifier::http::{new_http_client, ClientConfig};
 *
 * fn main() -> Result<(), notifier::NotifyError> {
 *     let client = new_http_client(ClientConfig::new("https://hooks.example.com/notify", 8))?;
 *     announce(client.as_ref());
 *     Ok(())
 * }
 *
 * fn announce(client: &dyn notifier::Client) {
 *     client.send_message(b"release published".to_vec(), None);
 * }
 * ```
 */

// ---------------------------------------------------------------------------
// Re-exports from notifier_core: the capability every client exposes
// ---------------------------------------------------------------------------

pub use notifier_core::{Callback, Client, NotifyError, SendResult, TransportError};

/// HTTP POST notification client.
pub mod http {
    pub use notifier_http::{
        is_success_code, new_http_client, ClientConfig, DefaultSender, HttpClient, Response,
        Sender, STATUS_ACCEPTED, STATUS_BAD_REQUEST, STATUS_CREATED, STATUS_OK,
    };
}
