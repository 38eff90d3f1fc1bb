/*!
 * Protocol layer: what a send looks like once it comes back.
 *
 * - `constants`: status codes and the success classification
 * - `response`: the normalized `Response` every `Sender` returns
 */

pub mod constants;
pub mod response;
