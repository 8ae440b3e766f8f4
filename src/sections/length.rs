//! Length section - checks password minimum length.

use crate::policy::Policy;

/// Checks if the password reaches the configured minimum length.
///
/// Length is counted in characters, not bytes.
pub fn length_section(password: &str, policy: &Policy) -> bool {
    password.chars().count() >= policy.min_length
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_section_too_short() {
        assert!(!length_section("Short1!", &Policy::default()));
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        assert!(length_section("12345678", &Policy::default()));
    }

    #[test]
    fn test_length_section_counts_chars_not_bytes() {
        // 4 chars, 16 bytes
        let policy = Policy::default().with_min_length(5);
        assert!(!length_section("😊😊😊😊", &policy));
        assert!(length_section("😊😊😊😊😊", &policy));
    }

    #[test]
    fn test_length_section_custom_minimum() {
        let policy = Policy::default().with_min_length(2);
        assert!(length_section("abc", &policy));

        let policy = Policy::default().with_min_length(16);
        assert!(!length_section("LongEnough123!", &policy));
    }
}
