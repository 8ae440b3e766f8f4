//! Evaluation policy: which criteria are enforced and how.

use std::path::PathBuf;
use thiserror::Error;

use crate::patterns::{get_patterns_path, load_common_patterns, normalize_patterns};

/// Passwords shorter than this (in characters) are not assessed at all.
///
/// Independent of [`Policy::min_length`], which only drives the length criterion.
pub const MINIMUM_EVALUABLE_LENGTH: usize = 3;

/// Substrings rejected by the common-pattern criterion unless overridden.
pub const DEFAULT_COMMON_PATTERNS: [&str; 5] = ["123456", "password", "qwerty", "letmein", "abc123"];

const DEFAULT_MIN_LENGTH: usize = 8;

#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("Pattern file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read pattern file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Pattern file is empty")]
    EmptyFile,
    #[error("Invalid minimum length: {0:?}")]
    InvalidMinLength(String),
}

/// Password policy applied by [`evaluate`](crate::evaluate).
///
/// A disabled requirement makes its criterion pass unconditionally, so it
/// never lowers the score nor produces feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Policy {
    pub min_length: usize,
    pub require_uppercase: bool,
    pub require_lowercase: bool,
    pub require_numbers: bool,
    pub require_special_chars: bool,
    pub prevent_repeated_chars: bool,
    pub prevent_common_patterns: bool,
    /// Lowercased substrings matched case-insensitively against the password.
    pub common_patterns: Vec<String>,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            require_uppercase: true,
            require_lowercase: true,
            require_numbers: true,
            require_special_chars: true,
            prevent_repeated_chars: true,
            prevent_common_patterns: true,
            common_patterns: DEFAULT_COMMON_PATTERNS.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl Policy {
    /// Builds a policy from defaults, overridden by environment variables.
    ///
    /// - `PWD_MIN_LENGTH`: positive integer replacing the default minimum length
    /// - `PWD_PATTERNS_PATH`: newline-separated file replacing the default denylist
    ///
    /// # Errors
    ///
    /// Returns error if `PWD_MIN_LENGTH` is not a positive integer, or if the
    /// pattern file is missing, unreadable or empty.
    pub fn from_env() -> Result<Self, PolicyError> {
        let mut policy = Self::default();

        if let Ok(raw) = std::env::var("PWD_MIN_LENGTH") {
            policy.min_length = match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(PolicyError::InvalidMinLength(raw)),
            };
        }

        if let Some(path) = get_patterns_path() {
            policy.common_patterns = load_common_patterns(path)?;
        }

        Ok(policy)
    }

    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    pub fn with_uppercase(mut self, required: bool) -> Self {
        self.require_uppercase = required;
        self
    }

    pub fn with_lowercase(mut self, required: bool) -> Self {
        self.require_lowercase = required;
        self
    }

    pub fn with_numbers(mut self, required: bool) -> Self {
        self.require_numbers = required;
        self
    }

    pub fn with_special_chars(mut self, required: bool) -> Self {
        self.require_special_chars = required;
        self
    }

    pub fn with_repeated_chars_check(mut self, enabled: bool) -> Self {
        self.prevent_repeated_chars = enabled;
        self
    }

    pub fn with_common_patterns_check(mut self, enabled: bool) -> Self {
        self.prevent_common_patterns = enabled;
        self
    }

    /// Replaces the denylist.
    ///
    /// Entries are normalized the same way as a loaded pattern file.
    pub fn with_common_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.common_patterns = normalize_patterns(patterns);
        self
    }
}
