//! Evaluation output types.

use std::fmt;

use crate::policy::Policy;

/// Strength tier derived from the number of passed criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLevel {
    /// Maps a score to its tier, checking the strongest tier first.
    pub fn from_score(score: u8) -> Self {
        if score >= 6 {
            StrengthLevel::Strong
        } else if score >= 4 {
            StrengthLevel::Medium
        } else {
            StrengthLevel::Weak
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Medium => "Medium",
            StrengthLevel::Strong => "Strong",
        };
        f.write_str(label)
    }
}

/// One of the fixed structural checks, in rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    Length,
    Uppercase,
    Lowercase,
    Numbers,
    SpecialChars,
    NoRepeatedChars,
    NoCommonPatterns,
}

impl Criterion {
    pub const ALL: [Criterion; 7] = [
        Criterion::Length,
        Criterion::Uppercase,
        Criterion::Lowercase,
        Criterion::Numbers,
        Criterion::SpecialChars,
        Criterion::NoRepeatedChars,
        Criterion::NoCommonPatterns,
    ];

    /// Stable identifier used as the checklist key.
    pub fn name(self) -> &'static str {
        match self {
            Criterion::Length => "length",
            Criterion::Uppercase => "uppercase",
            Criterion::Lowercase => "lowercase",
            Criterion::Numbers => "numbers",
            Criterion::SpecialChars => "specialChars",
            Criterion::NoRepeatedChars => "noRepeatedChars",
            Criterion::NoCommonPatterns => "noCommonPatterns",
        }
    }

    /// Remediation message shown when this criterion fails.
    pub fn remediation(self, policy: &Policy) -> String {
        match self {
            Criterion::Length => {
                format!("Password must be at least {} characters", policy.min_length)
            }
            Criterion::Uppercase => "Add at least one uppercase letter".to_string(),
            Criterion::Lowercase => "Add at least one lowercase letter".to_string(),
            Criterion::Numbers => "Add at least one number".to_string(),
            Criterion::SpecialChars => "Add at least one special character".to_string(),
            Criterion::NoRepeatedChars => {
                "Avoid repeating the same character 3 or more times in a row".to_string()
            }
            Criterion::NoCommonPatterns => {
                "Avoid common patterns like \"123456\" or \"password\"".to_string()
            }
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pass/fail state of every criterion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Criteria {
    passed: [bool; 7],
}

impl Criteria {
    pub(crate) fn set(&mut self, criterion: Criterion, passed: bool) {
        self.passed[criterion.index()] = passed;
    }

    pub fn get(&self, criterion: Criterion) -> bool {
        self.passed[criterion.index()]
    }

    /// Criteria with their state, in fixed order.
    pub fn iter(&self) -> impl Iterator<Item = (Criterion, bool)> + '_ {
        Criterion::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    pub fn failed(&self) -> impl Iterator<Item = Criterion> + '_ {
        self.iter().filter(|(_, ok)| !ok).map(|(c, _)| c)
    }

    pub fn passed(&self) -> u8 {
        self.passed.iter().filter(|&&b| b).count() as u8
    }
}

/// Verdict for a single evaluation.
///
/// Only built from a [`Criteria`] value, so `score` always equals the number
/// of passed criteria and `level` always follows from `score`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StrengthResult {
    level: StrengthLevel,
    score: u8,
    criteria: Criteria,
}

impl StrengthResult {
    pub const MAX_SCORE: u8 = Criterion::ALL.len() as u8;

    pub(crate) fn from_criteria(criteria: Criteria) -> Self {
        let score = criteria.passed();
        Self {
            level: StrengthLevel::from_score(score),
            score,
            criteria,
        }
    }

    /// All criteria failed, score 0.
    pub(crate) fn zero() -> Self {
        Self::from_criteria(Criteria::default())
    }

    pub fn level(&self) -> StrengthLevel {
        self.level
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn max_score(&self) -> u8 {
        Self::MAX_SCORE
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    /// Progress bar fill, in `[0.0, 1.0]`.
    pub fn fill_ratio(&self) -> f64 {
        f64::from(self.score) / f64::from(Self::MAX_SCORE)
    }

    pub fn is_acceptable(&self) -> bool {
        self.level >= StrengthLevel::Medium
    }

    /// Remediation messages for failed criteria, in fixed criterion order.
    ///
    /// Derived from `criteria`; pass the policy the result was evaluated with
    /// so the length message names the right minimum.
    pub fn feedback(&self, policy: &Policy) -> Vec<String> {
        self.criteria
            .failed()
            .map(|c| c.remediation(policy))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criteria_with(passing: &[Criterion]) -> Criteria {
        let mut criteria = Criteria::default();
        for &c in passing {
            criteria.set(c, true);
        }
        criteria
    }

    #[test]
    fn test_level_boundaries() {
        let expected = [
            (0, StrengthLevel::Weak),
            (3, StrengthLevel::Weak),
            (4, StrengthLevel::Medium),
            (5, StrengthLevel::Medium),
            (6, StrengthLevel::Strong),
            (7, StrengthLevel::Strong),
        ];
        for (score, level) in expected {
            assert_eq!(StrengthLevel::from_score(score), level, "score {score}");
        }
    }

    #[test]
    fn test_level_ordering() {
        assert!(StrengthLevel::Weak < StrengthLevel::Medium);
        assert!(StrengthLevel::Medium < StrengthLevel::Strong);
        assert_eq!(StrengthLevel::Medium.to_string(), "Medium");
    }

    #[test]
    fn test_criterion_names_in_order() {
        let names: Vec<_> = Criterion::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            vec![
                "length",
                "uppercase",
                "lowercase",
                "numbers",
                "specialChars",
                "noRepeatedChars",
                "noCommonPatterns"
            ]
        );
    }

    #[test]
    fn test_score_matches_criteria() {
        let criteria = criteria_with(&[Criterion::Lowercase, Criterion::NoRepeatedChars]);
        let result = StrengthResult::from_criteria(criteria);
        assert_eq!(result.score(), 2);
        assert_eq!(result.level(), StrengthLevel::Weak);
        assert_eq!(result.max_score(), 7);
        assert!(!result.is_acceptable());
    }

    #[test]
    fn test_zero_result() {
        let result = StrengthResult::zero();
        assert_eq!(result.score(), 0);
        assert_eq!(result.level(), StrengthLevel::Weak);
        assert!(result.criteria().iter().all(|(_, ok)| !ok));
        assert_eq!(result.fill_ratio(), 0.0);
    }

    #[test]
    fn test_full_result() {
        let result = StrengthResult::from_criteria(criteria_with(&Criterion::ALL));
        assert_eq!(result.score(), 7);
        assert_eq!(result.level(), StrengthLevel::Strong);
        assert_eq!(result.fill_ratio(), 1.0);
        assert!(result.feedback(&Policy::default()).is_empty());
    }

    #[test]
    fn test_feedback_follows_criterion_order() {
        let criteria = criteria_with(&[
            Criterion::Uppercase,
            Criterion::Lowercase,
            Criterion::SpecialChars,
            Criterion::NoRepeatedChars,
            Criterion::NoCommonPatterns,
        ]);
        let result = StrengthResult::from_criteria(criteria);
        let policy = Policy::default().with_min_length(12);

        assert_eq!(
            result.feedback(&policy),
            vec![
                "Password must be at least 12 characters".to_string(),
                "Add at least one number".to_string(),
            ]
        );
        assert_eq!(result.level(), StrengthLevel::Medium);
        assert!(result.is_acceptable());
    }
}
