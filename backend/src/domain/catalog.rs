//! Catalog model: the purchasable cosmetic definitions.
//!
//! The catalog is effectively immutable at runtime; it is seeded out of band
//! and the economy only ever reads it.

use std::fmt;
use std::str::FromStr;

/// Which equipped-slot a purchased item affects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemCategory {
    /// Cosmetic applied to the player character.
    Player,
    /// Cosmetic applied to enemies.
    Enemy,
}

impl ItemCategory {
    /// Wire/storage representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Player => "player",
            Self::Enemy => "enemy",
        }
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown category string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown item category: {value}")]
pub struct ItemCategoryParseError {
    /// The rejected input.
    pub value: String,
}

impl FromStr for ItemCategory {
    type Err = ItemCategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "player" => Ok(Self::Player),
            "enemy" => Ok(Self::Enemy),
            other => Err(ItemCategoryParseError {
                value: other.to_owned(),
            }),
        }
    }
}

/// One purchasable cosmetic.
///
/// `key` is unique and immutable; `price` is a non-negative flat coin price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    pub key: String,
    pub category: ItemCategory,
    pub display_name: String,
    pub price: i64,
    pub img: String,
}
