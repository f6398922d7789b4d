//! Lexical heuristics over assistant replies
//!
//! Both checks are plain substring tests. They can be fooled by unusual
//! model output; that is accepted behavior.

use tracing::debug;

use super::{OPTION_MARKERS, PREFERENCE_CUES};

/// Whether the reply contains a lettered option marker
pub fn looks_like_option_list(reply: &str) -> bool {
    let found = OPTION_MARKERS.iter().any(|marker| reply.contains(marker));
    debug!(found, "looks_like_option_list: called");
    found
}

/// Whether the reply asks for a tourist vs off-the-beaten-path preference
pub fn looks_like_preference_question(reply: &str) -> bool {
    let lowered = reply.to_lowercase();
    let found = PREFERENCE_CUES.iter().all(|cue| lowered.contains(cue));
    debug!(found, "looks_like_preference_question: called");
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_list_detected() {
        assert!(looks_like_option_list("A) Beach: relax"));
        assert!(looks_like_option_list("Some intro\nC) Hiking"));
        assert!(looks_like_option_list("option B) in the middle"));
    }

    #[test]
    fn test_option_list_not_detected() {
        assert!(!looks_like_option_list("just a sentence"));
        assert!(!looks_like_option_list(""));
        // D) alone does not open the gate
        assert!(!looks_like_option_list("D) Desert"));
    }

    #[test]
    fn test_option_list_case_sensitive() {
        assert!(!looks_like_option_list("a) beach b) city"));
    }

    #[test]
    fn test_preference_question_detected() {
        assert!(looks_like_preference_question(
            "Do you prefer a popular tourist spot or an off the beaten path option?"
        ));
        assert!(looks_like_preference_question("TOURIST destinations OR the PATH less travelled"));
    }

    #[test]
    fn test_preference_question_needs_all_cues() {
        assert!(!looks_like_preference_question("Where would you like to go?"));
        assert!(!looks_like_preference_question("A tourist favourite"));
        assert!(!looks_like_preference_question("tourist path"));
    }

    #[test]
    fn test_preference_question_substring_match() {
        // "or" only needs to appear inside some word
        assert!(looks_like_preference_question("a tourist path for everyone"));
    }
}
