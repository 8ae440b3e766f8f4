//! Criteria-based password strength evaluation
//!
//! This library scores a password against a fixed checklist of structural
//! criteria (length, character classes, repeated runs, common patterns) under
//! a configurable policy, and supports re-evaluating as the user types.
//!
//! It is not an entropy estimator and does not consult breach databases.
//!
//! # Features
//!
//! - `async` (default): Enables debounced, cancellable evaluation over tokio channels
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! Read by [`Policy::from_env`]:
//!
//! - `PWD_MIN_LENGTH`: Minimum accepted length (default: 8)
//! - `PWD_PATTERNS_PATH`: Newline-separated file of substrings to reject
//!   (default: built-in list)
//!
//! # Example
//!
//! ```rust
//! use pwd_criteria::{evaluate, Criterion, Policy, StrengthLevel};
//! use secrecy::SecretString;
//!
//! let policy = Policy::default();
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//!
//! let result = evaluate(&password, &policy);
//!
//! assert_eq!(result.level(), StrengthLevel::Strong);
//! assert!(result.criteria().get(Criterion::SpecialChars));
//! for message in result.feedback(&policy) {
//!     println!("{message}");
//! }
//! ```

// Internal modules
mod evaluator;
mod meter;
mod patterns;
mod policy;
mod result;
mod sections;

#[cfg(feature = "async")]
mod watch;

// Public API
pub use evaluator::evaluate;
pub use meter::StrengthMeter;
pub use patterns::{get_patterns_path, load_common_patterns};
pub use policy::{DEFAULT_COMMON_PATTERNS, MINIMUM_EVALUABLE_LENGTH, Policy, PolicyError};
pub use result::{Criteria, Criterion, StrengthLevel, StrengthResult};

#[cfg(feature = "async")]
pub use watch::{DEFAULT_DEBOUNCE, evaluate_tx, run_strength_meter};
