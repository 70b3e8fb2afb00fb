use std::collections::HashMap;

use image::Rgba;
use serde::Serialize;
use tracing::debug;

/// The seven color groupings a card is sorted under on a decklist page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardColor {
    White,
    Blue,
    Black,
    Red,
    Green,
    Multi,
    Colorless,
}

impl CardColor {
    /// Category order; later entries win when a card shows up in several.
    pub const ALL: [CardColor; 7] = [
        CardColor::White,
        CardColor::Blue,
        CardColor::Black,
        CardColor::Red,
        CardColor::Green,
        CardColor::Multi,
        CardColor::Colorless,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CardColor::White => "white",
            CardColor::Blue => "blue",
            CardColor::Black => "black",
            CardColor::Red => "red",
            CardColor::Green => "green",
            CardColor::Multi => "multi",
            CardColor::Colorless => "colorless",
        }
    }

    /// Selector of the containers holding the cards of this color.
    pub fn selector(self) -> String {
        format!("div.sorted-by-{}", self.name())
    }

    /// Display color, taken from the mana symbols.
    pub fn hex(self) -> &'static str {
        match self {
            CardColor::White => "#fcfcc1",
            CardColor::Blue => "#67c1f5",
            CardColor::Black => "#846484",
            CardColor::Red => "#f85555",
            CardColor::Green => "#26b569",
            CardColor::Multi => "#cfaa4a",
            CardColor::Colorless => "#6b5441",
        }
    }
}

/// Assigns exact colors to words from a color to words mapping.
///
/// Words that are not a member of any group get `default`.
#[derive(Debug, Clone)]
pub struct GroupedColors {
    word_to_color: HashMap<String, &'static str>,
    default: &'static str,
    conflicts: Vec<String>,
}

impl GroupedColors {
    pub fn new<G, S>(groups: G, default: &'static str) -> Self
    where
        G: IntoIterator<Item = (&'static str, Vec<S>)>,
        S: Into<String>,
    {
        let mut word_to_color = HashMap::new();
        let mut conflicts = Vec::new();
        for (color, words) in groups {
            for word in words {
                let word = word.into();
                if let Some(prev) = word_to_color.get(&word) {
                    if *prev != color {
                        debug!(%word, from = *prev, to = color, "word listed under several colors");
                        conflicts.push(word.clone());
                    }
                }
                word_to_color.insert(word, color);
            }
        }
        Self {
            word_to_color,
            default,
            conflicts,
        }
    }

    pub fn color_for(&self, word: &str) -> &'static str {
        self.word_to_color.get(word).copied().unwrap_or(self.default)
    }

    /// Words that were given more than one color while building.
    pub fn conflicts(&self) -> &[String] {
        &self.conflicts
    }

    pub fn len(&self) -> usize {
        self.word_to_color.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word_to_color.is_empty()
    }
}

/// Parse `#rrggbb` or one of the few named colors the renderer uses.
pub fn parse_color(label: &str) -> Option<Rgba<u8>> {
    match label {
        "black" => return Some(Rgba([0, 0, 0, 255])),
        "white" => return Some(Rgba([255, 255, 255, 255])),
        _ => {}
    }
    let hex = label.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Rgba([channel(0)?, channel(2)?, channel(4)?, 255]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_word_gets_default() {
        let colors = GroupedColors::new([("#f85555", vec!["Lightning Bolt"])], "black");
        assert_eq!(colors.color_for("Lightning Bolt"), "#f85555");
        assert_eq!(colors.color_for("Island"), "black");
    }

    #[test]
    fn last_group_wins() {
        let colors = GroupedColors::new(
            [
                (CardColor::Red.hex(), vec!["Bloodbraid Elf"]),
                (CardColor::Multi.hex(), vec!["Bloodbraid Elf"]),
            ],
            "black",
        );
        assert_eq!(colors.color_for("Bloodbraid Elf"), "#cfaa4a");
        assert_eq!(colors.conflicts(), ["Bloodbraid Elf".to_string()]);
    }

    #[test]
    fn repeated_word_in_one_group_is_not_a_conflict() {
        let colors = GroupedColors::new([("#67c1f5", vec!["Counterspell", "Counterspell"])], "black");
        assert!(colors.conflicts().is_empty());
        assert_eq!(colors.len(), 1);
    }

    #[test]
    fn lookup_is_total_over_table_and_default() {
        let groups = CardColor::ALL
            .iter()
            .map(|c| (c.hex(), vec![c.name().to_string()]))
            .collect::<Vec<_>>();
        let colors = GroupedColors::new(groups, "black");
        let allowed = CardColor::ALL.iter().map(|c| c.hex()).collect::<Vec<_>>();
        for word in ["white", "red", "colorless", "", "nothing at all"] {
            let color = colors.color_for(word);
            assert!(allowed.contains(&color) || color == "black", "{word} -> {color}");
        }
    }

    #[test]
    fn parses_table_colors() {
        for color in CardColor::ALL {
            assert!(parse_color(color.hex()).is_some());
        }
        assert_eq!(parse_color("#f85555"), Some(Rgba([0xf8, 0x55, 0x55, 255])));
        assert_eq!(parse_color("black"), Some(Rgba([0, 0, 0, 255])));
        assert_eq!(parse_color("#zzzzzz"), None);
        assert_eq!(parse_color("red"), None);
    }
}
