//! Food categories
//!
//! Recipients declare which categories they accept; an item carries exactly
//! one. Handling rules differ enough between cooked food and dry goods that
//! the set is closed rather than free-form strings.

use serde::{Deserialize, Serialize};

/// Food category of a surplus item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Cooked, ready-to-eat food (shortest shelf life)
    Prepared,
    /// Fresh fruit and vegetables
    Produce,
    /// Bread and baked goods
    Bakery,
    /// Milk, paneer, yogurt and other chilled dairy
    Dairy,
    /// Raw meat, poultry and fish
    Meat,
    /// Shelf-stable dry goods
    Pantry,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Prepared => write!(f, "prepared"),
            Self::Produce => write!(f, "produce"),
            Self::Bakery => write!(f, "bakery"),
            Self::Dairy => write!(f, "dairy"),
            Self::Meat => write!(f, "meat"),
            Self::Pantry => write!(f, "pantry"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "prepared" | "cooked" => Ok(Self::Prepared),
            "produce" | "fresh" => Ok(Self::Produce),
            "bakery" | "bread" => Ok(Self::Bakery),
            "dairy" => Ok(Self::Dairy),
            "meat" | "fish" | "poultry" => Ok(Self::Meat),
            "pantry" | "dry" => Ok(Self::Pantry),
            _ => Err(format!(
                "Invalid category: {s}. Use: prepared, produce, bakery, dairy, meat, pantry"
            )),
        }
    }
}
