//! Recommendation detection and extraction
//!
//! Model replies are semi-structured text. The assistant is asked to format
//! suggestions as lettered lines such as
//!
//! ```text
//! A) **Banff National Park**:** Turquoise lakes and glaciers.
//! B) **Kyoto**:** Temples and gardens.
//! ```
//!
//! Detection is a coarse lexical gate; extraction keeps every line that
//! honors the prefix + delimiter convention and silently drops the rest.

mod detector;
mod extractor;
mod sanitizer;

pub use detector::{looks_like_option_list, looks_like_preference_question};
pub use extractor::{RecommendationRecord, extract};
pub use sanitizer::sanitize;

/// Markers whose presence anywhere in a reply suggests an option list
pub const OPTION_MARKERS: [&str; 3] = ["A)", "B)", "C)"];

/// Line prefixes that introduce a recommendation
pub const RECOMMENDATION_PREFIXES: [&str; 4] = ["A)", "B)", "C)", "D)"];

/// Separator between heading and description on a recommendation line
pub const HEADING_DELIMITER: &str = ":** ";

/// Lowercase substrings that together indicate the preference question
pub const PREFERENCE_CUES: [&str; 3] = ["tourist", "or", "path"];

/// Labels of the two-option preference chooser
pub const PREFERENCE_CHOICES: [&str; 2] = ["Tourist Spot", "Off the Beaten Path"];
