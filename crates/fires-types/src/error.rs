//! Unified error interface.
//!
//! Every error type in the workspace implements [`ErrorCode`] so that
//! consumers (the CLI today, an API layer eventually) can handle failures
//! by stable machine-readable code instead of matching display strings.

/// Unified error code interface.
///
/// # Code Format
///
/// - **UPPER_SNAKE_CASE**, prefixed by domain: `AUTH_EMPTY_MEMBERSHIPS`,
///   `SESSION_USER_NOT_FOUND`
/// - **Stable**: codes are an API contract and do not change once defined
///
/// # Recoverability
///
/// An error is recoverable when the caller can do something about it
/// (retry a login with a known id). Validation failures in trusted seed
/// data are programming defects and therefore non-recoverable.
///
/// # Example
///
/// ```
/// use fires_types::ErrorCode;
///
/// #[derive(Debug)]
/// enum LookupError {
///     Missing,
/// }
///
/// impl ErrorCode for LookupError {
///     fn code(&self) -> &'static str {
///         "LOOKUP_MISSING"
///     }
///
///     fn is_recoverable(&self) -> bool {
///         true
///     }
/// }
///
/// assert_eq!(LookupError::Missing.code(), "LOOKUP_MISSING");
/// ```
pub trait ErrorCode {
    /// Returns a machine-readable error code.
    fn code(&self) -> &'static str;

    /// Returns whether the caller can take corrective action.
    fn is_recoverable(&self) -> bool;
}

/// Validates that an error code follows workspace conventions.
///
/// Intended for tests covering every variant of an error enum.
///
/// # Panics
///
/// Panics with a descriptive message if the code is empty, does not start
/// with `expected_prefix`, or is not UPPER_SNAKE_CASE.
///
/// # Example
///
/// ```
/// use fires_types::{assert_error_code, ErrorCode};
///
/// #[derive(Debug)]
/// struct Broken;
///
/// impl ErrorCode for Broken {
///     fn code(&self) -> &'static str { "AUTH_BROKEN" }
///     fn is_recoverable(&self) -> bool { false }
/// }
///
/// assert_error_code(&Broken, "AUTH_");
/// ```
pub fn assert_error_code<E: ErrorCode>(err: &E, expected_prefix: &str) {
    let code = err.code();

    assert!(!code.is_empty(), "error code must not be empty");
    assert!(
        code.starts_with(expected_prefix),
        "error code '{code}' must start with prefix '{expected_prefix}'"
    );
    assert!(
        is_upper_snake_case(code),
        "error code '{code}' must be UPPER_SNAKE_CASE"
    );
}

fn is_upper_snake_case(s: &str) -> bool {
    !s.is_empty()
        && !s.starts_with('_')
        && !s.ends_with('_')
        && !s.contains("__")
        && s.chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}
