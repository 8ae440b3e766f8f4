//! Common-pattern denylist loading
//!
//! Reads a newline-separated list of substrings the common-pattern
//! criterion rejects. The result is handed to [`Policy`](crate::Policy);
//! nothing is cached globally.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::policy::PolicyError;

/// Returns the denylist file path from `PWD_PATTERNS_PATH`, if set.
///
/// When unset the built-in [`DEFAULT_COMMON_PATTERNS`](crate::DEFAULT_COMMON_PATTERNS) apply.
pub fn get_patterns_path() -> Option<PathBuf> {
    std::env::var_os("PWD_PATTERNS_PATH").map(PathBuf::from)
}

/// Loads a denylist from a file, one pattern per line.
///
/// Lines are trimmed and lowercased, blank lines skipped, and duplicates
/// dropped keeping the first occurrence.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File has no non-blank line
///
/// # Example
///
/// ```rust,ignore
/// let patterns = pwd_criteria::load_common_patterns("/etc/myapp/patterns.txt")?;
/// let policy = pwd_criteria::Policy::default().with_common_patterns(patterns);
/// ```
pub fn load_common_patterns<P: AsRef<Path>>(path: P) -> Result<Vec<String>, PolicyError> {
    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Pattern list loading FAILED: FileNotFound {:?}", path);
        return Err(PolicyError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let patterns = normalize_patterns(content.lines());

    if patterns.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Pattern list loading FAILED: Empty file {:?}", path);
        return Err(PolicyError::EmptyFile);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Pattern list loaded: {} patterns from {:?}", patterns.len(), path);

    Ok(patterns)
}

/// Trims and lowercases entries, drops blank ones and keeps the first of any duplicates.
pub(crate) fn normalize_patterns<I, S>(patterns: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    patterns
        .into_iter()
        .map(|p| p.as_ref().trim().to_lowercase())
        .filter(|p| !p.is_empty())
        .filter(|p| seen.insert(p.clone()))
        .collect()
}
