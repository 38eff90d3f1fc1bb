/*!
 * Notifier Core: the capability every notification client exposes.
 *
 * Application code depends on the `Client` trait alone. Concrete
 * transports (see the `notifier_http` crate) implement it and deliver
 * the outcome of each send through a one-shot `Callback`.
 *
 * # Module structure
 *
 * - `client`: the `Client` trait and the `Callback` type
 * - `error`: `NotifyError` and `TransportError`
 */

mod client;
mod error;

// ---------------------------------------------------------------------------
// Re-exports
// ---------------------------------------------------------------------------

pub use client::{Callback, Client, SendResult};
pub use error::{NotifyError, TransportError};
