use std::collections::HashMap;

use catalog::Ingredient;
use serde::{Deserialize, Serialize};

/// Bucket for ingredients the partition does not know about. Emitted
/// last so known categories keep their configured order.
pub const UNCATEGORIZED: &str = "uncategorized";

/// Wire shape of the category dataset: one named category with its
/// member ingredients, in display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub category: String,
    pub ingredients: Vec<String>,
}

/// Exhaustive mapping from ingredient name to exactly one category,
/// plus the display order of the categories themselves. Built once at
/// startup and immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct CategoryPartition {
    order: Vec<String>,
    by_ingredient: HashMap<String, String>,
}

impl CategoryPartition {
    pub fn from_groups(groups: impl IntoIterator<Item = CategoryGroup>) -> Self {
        let mut partition = CategoryPartition::default();
        for group in groups {
            partition.push_category(&group.category);
            for ingredient in group.ingredients {
                // First assignment wins if an ingredient is listed twice.
                partition
                    .by_ingredient
                    .entry(ingredient)
                    .or_insert_with(|| group.category.clone());
            }
        }
        partition
    }

    /// Build from flat ingredient reference data; category order is
    /// first-appearance order.
    pub fn from_ingredients(ingredients: impl IntoIterator<Item = Ingredient>) -> Self {
        let mut partition = CategoryPartition::default();
        for ingredient in ingredients {
            partition.push_category(&ingredient.category);
            partition
                .by_ingredient
                .entry(ingredient.name)
                .or_insert(ingredient.category);
        }
        partition
    }

    fn push_category(&mut self, category: &str) {
        if !self.order.iter().any(|known| known == category) {
            self.order.push(category.to_string());
        }
    }

    pub fn category_of(&self, ingredient: &str) -> Option<&str> {
        self.by_ingredient.get(ingredient).map(String::as_str)
    }

    /// Category names in declaration order.
    pub fn categories(&self) -> &[String] {
        &self.order
    }

    pub fn is_empty(&self) -> bool {
        self.by_ingredient.is_empty()
    }
}
