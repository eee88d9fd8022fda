use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::error::CatalogError;

/// The meal slot a dish belongs to. Every dish is filed under exactly
/// one slot, and each slot gets its own planner instance.
#[derive(
    EnumString,
    Display,
    AsRefStr,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MealType {
    Lunch,
    Dinner,
}

/// Reference data: an ingredient and the grocery category it shops under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub category: String,
}

/// One line of a dish recipe: an ingredient reference plus how much of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientLine {
    pub name: String,
    pub quantity: f64,
}

/// A catalog dish. Immutable once loaded; anything that edits a dish
/// works on its own copy and never writes back into the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub name: String,
    pub meal: MealType,
    #[serde(default)]
    pub ingredients: Vec<IngredientLine>,
}

impl Dish {
    /// Check that every named ingredient line carries a usable quantity.
    ///
    /// Lines with a blank ingredient name are ignored (edit forms leave
    /// empty rows behind). A named line with a zero, negative, or NaN
    /// quantity blocks the commit.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for line in &self.ingredients {
            if line.name.trim().is_empty() {
                continue;
            }
            if !(line.quantity > 0.0) {
                return Err(CatalogError::MissingQuantity {
                    dish: self.name.clone(),
                    ingredient: line.name.clone(),
                });
            }
        }
        Ok(())
    }
}
