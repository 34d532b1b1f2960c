//! Common validation utilities

use once_cell::sync::Lazy;
use regex::Regex;

/// Simple email format check, intentionally permissive
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex must compile")
});

/// Employee codes: 2-16 uppercase letters or digits, e.g. "EMP042"
static EMPLOYEE_CODE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z0-9]{2,16}$").expect("employee code regex must compile"));

/// Check if a string is not empty after trimming
pub fn not_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Check if a string is a plausible email address
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Check if a string is a well-formed employee code
pub fn is_valid_employee_code(value: &str) -> bool {
    EMPLOYEE_CODE_REGEX.is_match(value)
}
