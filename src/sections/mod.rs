//! Password evaluation sections
//!
//! Each section decides one criterion family against the raw password and
//! the active policy. A section returns `true` when its criterion passes;
//! disabled requirements always pass.

mod common;
mod length;
mod pattern;
mod variety;

pub use common::common_patterns_section;
pub use length::length_section;
pub use pattern::repeated_chars_section;
pub use variety::{lowercase_section, numbers_section, special_chars_section, uppercase_section};

use crate::policy::Policy;

/// Signature shared by all criterion checks.
pub type SectionFn = fn(&str, &Policy) -> bool;
