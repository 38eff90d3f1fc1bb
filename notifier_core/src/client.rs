/**
 * The notification client capability.
 *
 * A `Client` accepts a byte payload and returns immediately. The outcome
 * of the send arrives later through the callback, exactly once, and never
 * on the caller's own thread.
 */
use std::sync::Arc;

use crate::error::NotifyError;

/// Terminal outcome of one send: the response content, or the error.
pub type SendResult = Result<Vec<u8>, NotifyError>;

/**
 * One-shot completion handler for a single send.
 *
 * `Ok(content)` carries the body returned by the remote side; `Err` carries
 * the reason the send failed. A send that fails never delivers content.
 */
pub type Callback = Box<dyn FnOnce(SendResult) + Send + 'static>;

/**
 * Capability contract shared by every notification client variant.
 *
 * # Example
 * ```ignore
 * fn announce(client: &dyn notifier_core::Client) {
 *     client.send_message(
 *         b"deploy finished".to_vec(),
 *         Some(Box::new(|result| match result {
 *             Ok(content) => println!("accepted: {} bytes", content.len()),
 *             Err(err) => eprintln!("rejected: {err}"),
 *         })),
 *     );
 * }
 * ```
 */
pub trait Client: Send + Sync {
    /**
     * Sends `message` and reports the outcome through `callback`.
     *
     * Never blocks the caller. Passing `None` discards the outcome.
     */
    fn send_message(&self, message: Vec<u8>, callback: Option<Callback>);
}

impl<C: Client + ?Sized> Client for Arc<C> {
    fn send_message(&self, message: Vec<u8>, callback: Option<Callback>) {
        (**self).send_message(message, callback);
    }
}

impl<C: Client + ?Sized> Client for Box<C> {
    fn send_message(&self, message: Vec<u8>, callback: Option<Callback>) {
        (**self).send_message(message, callback);
    }
}
