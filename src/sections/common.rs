//! Common pattern section - rejects passwords containing denylisted substrings.

use crate::policy::Policy;

/// Fails if any policy pattern occurs anywhere in the password, ignoring case.
pub fn common_patterns_section(password: &str, policy: &Policy) -> bool {
    if !policy.prevent_common_patterns {
        return true;
    }

    let lowered = password.to_lowercase();
    !policy
        .common_patterns
        .iter()
        .any(|p| !p.is_empty() && lowered.contains(&p.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_section_default_patterns() {
        let policy = Policy::default();
        for pwd in ["123456", "MyPassword!", "QwErTy99", "xLetMeIn", "Abc123!@#"] {
            assert!(!common_patterns_section(pwd, &policy), "{pwd} should be rejected");
        }
    }

    #[test]
    fn test_common_section_strong_password() {
        assert!(common_patterns_section(
            "CorrectHorseBatteryStaple!123",
            &Policy::default()
        ));
    }

    #[test]
    fn test_common_section_partial_pattern_passes() {
        let policy = Policy::default();
        assert!(common_patterns_section("12345", &policy));
        assert!(common_patterns_section("passwor", &policy));
    }

    #[test]
    fn test_common_section_custom_patterns() {
        let policy = Policy::default().with_common_patterns(["dragon"]);
        assert!(!common_patterns_section("MyDRAGON77", &policy));
        assert!(common_patterns_section("password", &policy));
    }

    #[test]
    fn test_common_section_unnormalized_public_field() {
        let mut policy = Policy::default();
        policy.common_patterns = vec!["Monkey".to_string()];
        assert!(!common_patterns_section("xxMONKEYxx", &policy));
    }

    #[test]
    fn test_common_section_disabled() {
        let policy = Policy::default().with_common_patterns_check(false);
        assert!(common_patterns_section("password123456", &policy));
    }
}
