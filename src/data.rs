use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::Serialize;

use crate::color::{CardColor, GroupedColors};

pub type CardName = String;
/// Total copies of each card across every decklist of a page.
pub type FrequencyMap = BTreeMap<CardName, u32>;
/// Card names per color, in category order. Not deduplicated.
pub type CategoryMap = Vec<(CardColor, Vec<CardName>)>;
pub type ExclusionSet = BTreeSet<CardName>;
pub type ColorAssignment = HashMap<CardName, &'static str>;

#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct Extraction {
    pub frequencies: FrequencyMap,
    pub categories: CategoryMap,
    pub lands: ExclusionSet,
}

impl Extraction {
    /// Drop every land from the frequencies.
    pub fn without_lands(mut self) -> Self {
        let lands = &self.lands;
        self.frequencies.retain(|card, _| !lands.contains(card));
        self
    }

    /// Card to display color, last category wins.
    pub fn color_assignment(&self) -> ColorAssignment {
        let mut out = HashMap::new();
        for (color, cards) in &self.categories {
            for card in cards {
                out.insert(card.clone(), color.hex());
            }
        }
        out
    }

    pub fn grouped_colors(&self, default: &'static str) -> GroupedColors {
        GroupedColors::new(
            self.categories
                .iter()
                .map(|(color, cards)| (color.hex(), cards.clone())),
            default,
        )
    }

    pub fn total_copies(&self) -> u64 {
        self.frequencies.values().map(|&n| u64::from(n)).sum()
    }
}
