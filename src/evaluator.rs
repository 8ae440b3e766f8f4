//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

use crate::policy::{MINIMUM_EVALUABLE_LENGTH, Policy};
use crate::result::{Criteria, Criterion, StrengthResult};
use crate::sections::{
    SectionFn, common_patterns_section, length_section, lowercase_section, numbers_section,
    repeated_chars_section, special_chars_section, uppercase_section,
};

const SECTIONS: [(Criterion, SectionFn); 7] = [
    (Criterion::Length, length_section),
    (Criterion::Uppercase, uppercase_section),
    (Criterion::Lowercase, lowercase_section),
    (Criterion::Numbers, numbers_section),
    (Criterion::SpecialChars, special_chars_section),
    (Criterion::NoRepeatedChars, repeated_chars_section),
    (Criterion::NoCommonPatterns, common_patterns_section),
];

/// Evaluates a password against a policy.
///
/// Passwords shorter than [`MINIMUM_EVALUABLE_LENGTH`] characters are not
/// assessed: every criterion fails and the level is `Weak`, whatever the
/// policy. Otherwise each criterion is checked independently and the score is
/// the number that pass.
///
/// Lengths are counted in `char`s (Unicode scalar values), so `"😊😊"` is two
/// characters and falls below the floor.
///
/// Never fails and keeps no state between calls.
pub fn evaluate(password: &SecretString, policy: &Policy) -> StrengthResult {
    let pwd = password.expose_secret();

    if pwd.chars().take(MINIMUM_EVALUABLE_LENGTH).count() < MINIMUM_EVALUABLE_LENGTH {
        #[cfg(feature = "tracing")]
        tracing::debug!("password below evaluable length, skipping criteria");
        return StrengthResult::zero();
    }

    let mut criteria = Criteria::default();
    for (criterion, section_fn) in SECTIONS {
        criteria.set(criterion, section_fn(pwd, policy));
    }

    let result = StrengthResult::from_criteria(criteria);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        score = result.score(),
        level = %result.level(),
        "password evaluated"
    );

    result
}
