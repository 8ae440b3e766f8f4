//! Character variety sections - uppercase, lowercase, numbers, special chars.
//!
//! Letter and digit classes are ASCII only; every other code point,
//! emoji included, is special.

use crate::policy::Policy;

pub fn uppercase_section(password: &str, policy: &Policy) -> bool {
    !policy.require_uppercase || password.chars().any(|c| c.is_ascii_uppercase())
}

pub fn lowercase_section(password: &str, policy: &Policy) -> bool {
    !policy.require_lowercase || password.chars().any(|c| c.is_ascii_lowercase())
}

pub fn numbers_section(password: &str, policy: &Policy) -> bool {
    !policy.require_numbers || password.chars().any(|c| c.is_ascii_digit())
}

pub fn special_chars_section(password: &str, policy: &Policy) -> bool {
    !policy.require_special_chars || password.chars().any(|c| !c.is_ascii_alphanumeric())
}
