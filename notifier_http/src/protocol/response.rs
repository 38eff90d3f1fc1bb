/**
 * Normalized result of one POST attempt.
 *
 * Produced by a `Sender` per call and consumed by the dispatcher to decide
 * between success and failure. Never retained past that decision.
 */
use super::constants::is_success_code;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    /// Status line text, e.g. `"200 OK"`.
    pub status: String,

    /// Numeric status code.
    pub code: u16,

    /// Full response body.
    pub content: Vec<u8>,
}

impl Response {
    /**
     * Builds a response whose status text is derived from `code`,
     * e.g. `Response::from_code(201)` has status `"201 Created"`.
     */
    pub fn from_code(code: u16, content: Vec<u8>) -> Self {
        Self {
            status: status_text(code),
            code,
            content,
        }
    }

    /// Returns `true` if the code is one of the accepted success codes.
    pub fn is_success(&self) -> bool {
        is_success_code(self.code)
    }
}

/// Renders `"<code> <reason>"`, or just the code when the reason is unknown.
pub(crate) fn status_text(code: u16) -> String {
    let reason = ureq::http::StatusCode::from_u16(code)
        .ok()
        .and_then(|status| status.canonical_reason());

    match reason {
        Some(reason) => format!("{code} {reason}"),
        None => code.to_string(),
    }
}
