//! Plain-text rendering of replies, choosers and cards

use crate::layout::{RenderCard, group_by_column};

/// Title shown above the preference chooser
pub const CHOOSER_TITLE: &str = "Choose your preference:";

/// Numbered list of choices under a title
pub fn render_choices(title: &str, choices: &[&str]) -> String {
    let mut out = format!("{}\n", title);
    for (i, choice) in choices.iter().enumerate() {
        out.push_str(&format!("  **{}. {}**\n", i + 1, choice));
    }
    out
}

/// Cards grouped by their assigned column
///
/// Each card shows its heading, image url and description. Empty columns
/// are omitted.
pub fn render_cards(cards: &[RenderCard], num_columns: usize) -> String {
    let mut out = String::new();
    for (index, column) in group_by_column(cards, num_columns).iter().enumerate() {
        if column.is_empty() {
            continue;
        }
        out.push_str(&format!("[column {}]\n", index + 1));
        for card in column {
            out.push_str(&format!("### {}\n", card.heading));
            out.push_str(&format!("image: {}\n", card.image_url));
            out.push_str(&format!("{}\n\n", card.description));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(heading: &str, column: usize) -> RenderCard {
        RenderCard {
            heading: heading.to_string(),
            description: format!("{} is lovely.", heading),
            image_url: format!("https://img.test/{}", heading),
            column,
        }
    }

    #[test]
    fn test_render_choices() {
        let text = render_choices(CHOOSER_TITLE, &["Tourist Spot", "Off the Beaten Path"]);
        assert_eq!(
            text,
            "Choose your preference:\n  **1. Tourist Spot**\n  **2. Off the Beaten Path**\n"
        );
    }

    #[test]
    fn test_render_cards_grouped_by_column() {
        let cards = vec![card("Paris", 0), card("Kyoto", 1), card("Lima", 0)];

        let text = render_cards(&cards, 3);

        let paris = text.find("### Paris").unwrap();
        let lima = text.find("### Lima").unwrap();
        let kyoto = text.find("### Kyoto").unwrap();
        assert!(paris < lima && lima < kyoto);
        assert!(text.contains("image: https://img.test/Kyoto"));
        assert!(!text.contains("[column 3]"));
    }

    #[test]
    fn test_render_cards_empty() {
        assert!(render_cards(&[], 3).is_empty());
    }
}
