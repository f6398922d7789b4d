//! Heading cleanup for recommendation lines

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

/// Leading `A) **` marker, or trailing `**` with any whitespace after it
static MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-D]\)\s*\*\*|\*\*\s*$").expect("heading marker pattern is valid")
});

const EMPHASIS: &str = "**";

/// Strip list markers and emphasis from a raw heading
///
/// `"A) **Banff National Park**"` becomes `"Banff National Park"`. An empty
/// result means the heading carried no text; callers skip such lines.
pub fn sanitize(raw: &str) -> String {
    debug!(%raw, "sanitize: called");
    let stripped = MARKER_RE.replace_all(raw, "");
    stripped.replace(EMPHASIS, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_sanitize_marker_and_emphasis() {
        assert_eq!(sanitize("A) **Banff National Park**"), "Banff National Park");
        assert_eq!(sanitize("D)**Sahara**"), "Sahara");
    }

    #[test]
    fn test_sanitize_trailing_close_only() {
        assert_eq!(sanitize("Kyoto**"), "Kyoto");
        assert_eq!(sanitize("Kyoto**   "), "Kyoto");
    }

    #[test]
    fn test_sanitize_asymmetric_markup() {
        assert_eq!(sanitize("B) **Lisbon** and **Porto"), "Lisbon and Porto");
        assert_eq!(sanitize("**Reykjavik"), "Reykjavik");
    }

    #[test]
    fn test_marker_without_emphasis_is_kept() {
        // Only a marker directly followed by emphasis is consumed
        assert_eq!(sanitize("A) Banff"), "A) Banff");
        assert_eq!(sanitize("E) **Everest**"), "E) Everest");
    }

    #[test]
    fn test_sanitize_to_empty() {
        assert_eq!(sanitize("A) ****"), "");
        assert_eq!(sanitize("   "), "");
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn test_single_asterisks_survive() {
        assert_eq!(sanitize("*Bali*"), "*Bali*");
    }

    proptest! {
        #[test]
        fn test_sanitize_idempotent(raw in ".*") {
            let once = sanitize(&raw);
            prop_assert_eq!(sanitize(&once), once);
        }

        #[test]
        fn test_sanitize_idempotent_markup_heavy(raw in "[A-E][)] ?[*]{0,3}[a-z *]{0,12}[*]{0,3} ?") {
            let once = sanitize(&raw);
            prop_assert_eq!(sanitize(&once), once);
        }

        #[test]
        fn test_sanitize_removes_all_emphasis(raw in "[A-D)* a-z]{0,24}") {
            prop_assert!(!sanitize(&raw).contains("**"));
        }
    }
}
