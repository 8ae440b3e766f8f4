//! Pattern analysis section - detects runs of repeated characters.

use crate::policy::Policy;

const MAX_RUN: usize = 3;

/// Fails when the same character appears 3 or more times in a row.
///
/// Runs are counted over `char`s, so repeated emoji are caught as well.
pub fn repeated_chars_section(password: &str, policy: &Policy) -> bool {
    if !policy.prevent_repeated_chars {
        return true;
    }

    let mut prev: Option<char> = None;
    let mut run = 0;
    for c in password.chars() {
        if prev == Some(c) {
            run += 1;
            if run >= MAX_RUN {
                return false;
            }
        } else {
            prev = Some(c);
            run = 1;
        }
    }
    true
}
