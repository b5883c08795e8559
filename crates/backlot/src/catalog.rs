use crate::assets::AssetRef;
use derive_more::{AsRef, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct Title(String);

crate::impl_string_newtype!(Title);

/// One entry on the billboard. Identity is the position in the catalog;
/// there is no id beyond the index.
#[derive(Debug, Clone)]
pub struct CardItem {
    pub title: Title,
    pub asset: AssetRef,
}

impl CardItem {
    pub fn new(title: impl Into<String>, asset: impl Into<String>) -> Self {
        Self {
            title: Title::new(title),
            asset: AssetRef::new(asset),
        }
    }
}

const BILLBOARD: &[(&str, &str)] = &[
    ("BirdBox", "birdbox"),
    ("Dont Look Up", "dontlookup"),
    ("Fatherhood", "fatherhood"),
    ("I Care Alot", "icarealot"),
    ("Spider-Man", "spiderman"),
    ("The Old Guard", "theoldguard"),
    ("The Power of The Dog", "thepowerofthedog"),
    ("The Social Dilemma", "thesocialdilemma"),
    ("The Unforgivable", "theunforgivable"),
];

/// The fixed, ordered card catalog shown on the carousel screen.
pub fn cards() -> Vec<CardItem> {
    BILLBOARD
        .iter()
        .map(|(title, asset)| CardItem::new(*title, *asset))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_nine_entries() {
        assert_eq!(cards().len(), 9);
    }

    #[test]
    fn assets_are_unique() {
        let cards = cards();
        let assets: HashSet<_> = cards.iter().map(|c| c.asset.as_ref()).collect();
        assert_eq!(assets.len(), cards.len());
    }

    #[test]
    fn catalog_order_is_stable() {
        let cards = cards();
        assert_eq!(cards[0].title.as_ref(), "BirdBox");
        assert_eq!(cards[8].title.as_ref(), "The Unforgivable");
    }
}
