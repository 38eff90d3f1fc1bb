/**
 * HTTP status codes the client cares about.
 *
 * Only the three codes below count as a delivered notification. Every
 * other code, including the rest of the 2xx range, is a failure.
 */

/// 200 OK.
pub const STATUS_OK: u16 = 200;

/// 201 Created.
pub const STATUS_CREATED: u16 = 201;

/// 202 Accepted.
pub const STATUS_ACCEPTED: u16 = 202;

/// 400 Bad Request.
pub const STATUS_BAD_REQUEST: u16 = 400;

/// Returns `true` if `code` means the notification was delivered.
pub fn is_success_code(code: u16) -> bool {
    matches!(code, STATUS_OK | STATUS_CREATED | STATUS_ACCEPTED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_codes() {
        assert!(is_success_code(STATUS_OK));
        assert!(is_success_code(STATUS_CREATED));
        assert!(is_success_code(STATUS_ACCEPTED));
    }

    #[test]
    fn test_other_codes_are_failures() {
        for code in [0, 100, 204, 301, STATUS_BAD_REQUEST, 404, 500, 503] {
            assert!(!is_success_code(code), "{code} should not be accepted");
        }
    }
}
