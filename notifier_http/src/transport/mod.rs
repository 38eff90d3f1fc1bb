/**
 * Transport layer: how a send reaches the endpoint.
 *
 * - `sender`: the `Sender` seam and the ureq-backed `DefaultSender`
 * - `budget`: counting semaphore capping concurrent POSTs
 * - `pending`: accepted-but-unfinished send counter used by `flush`
 * - `dispatch`: per-send background thread tying it all together
 */

pub mod budget;
pub mod dispatch;
pub mod pending;
pub mod sender;

pub use dispatch::Dispatcher;
pub use sender::{DefaultSender, Sender};
