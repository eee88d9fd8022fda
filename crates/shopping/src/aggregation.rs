use std::collections::HashMap;

use planning::MenuDish;
use serde::Serialize;

use crate::categorization::{CategoryPartition, UNCATEGORIZED};

/// One contribution to the grocery list: how much of the ingredient a
/// single dish needs. Contributions are never summed; the contributing
/// dish stays visible per entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerEntry {
    pub quantity: f64,
    pub dish: String,
}

/// All contributions to one ingredient, in the day-then-meal order the
/// dishes occur in the schedule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngredientTally {
    pub ingredient: String,
    pub entries: Vec<LedgerEntry>,
}

/// One grocery category and its ingredients in first-appearance order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySection {
    pub category: String,
    pub ingredients: Vec<IngredientTally>,
}

/// The categorized grocery list derived from a schedule. Recomputed in
/// full on every aggregation call; it has no identity across calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GroceryLedger {
    sections: Vec<CategorySection>,
}

impl GroceryLedger {
    pub fn sections(&self) -> &[CategorySection] {
        &self.sections
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Contributions for one ingredient within one category.
    pub fn entries(&self, category: &str, ingredient: &str) -> Option<&[LedgerEntry]> {
        self.sections
            .iter()
            .find(|section| section.category == category)?
            .ingredients
            .iter()
            .find(|tally| tally.ingredient == ingredient)
            .map(|tally| tally.entries.as_slice())
    }
}

/// Stateless aggregation over the flattened dish sequence of a
/// schedule. Constructed from the category partition; aggregation is a
/// pure function of its input, so rerunning it on an unchanged
/// schedule yields an identical ledger.
pub struct GroceryAggregator {
    partition: CategoryPartition,
}

impl GroceryAggregator {
    pub fn new(partition: CategoryPartition) -> Self {
        GroceryAggregator { partition }
    }

    /// Append every ingredient line of every dish, in order, to its
    /// category bucket. Ingredients the partition does not know about
    /// land in a trailing `uncategorized` section; categories with no
    /// contributions are omitted entirely.
    ///
    /// An empty partition means the category dataset has not arrived
    /// yet, and yields an empty ledger.
    pub fn aggregate(&self, dishes: &[MenuDish]) -> GroceryLedger {
        if self.partition.is_empty() {
            return GroceryLedger::default();
        }

        let mut buckets: HashMap<&str, Vec<IngredientTally>> = HashMap::new();
        for dish in dishes {
            for line in &dish.ingredients {
                let category = self
                    .partition
                    .category_of(&line.name)
                    .unwrap_or(UNCATEGORIZED);
                let tallies = buckets.entry(category).or_default();
                let slot = match tallies
                    .iter()
                    .position(|tally| tally.ingredient == line.name)
                {
                    Some(position) => position,
                    None => {
                        tallies.push(IngredientTally {
                            ingredient: line.name.clone(),
                            entries: Vec::new(),
                        });
                        tallies.len() - 1
                    }
                };
                tallies[slot].entries.push(LedgerEntry {
                    quantity: line.quantity,
                    dish: dish.name.clone(),
                });
            }
        }

        let mut sections = Vec::new();
        for category in self.partition.categories() {
            if let Some(ingredients) = buckets.remove(category.as_str()) {
                sections.push(CategorySection {
                    category: category.clone(),
                    ingredients,
                });
            }
        }
        if let Some(ingredients) = buckets.remove(UNCATEGORIZED) {
            sections.push(CategorySection {
                category: UNCATEGORIZED.to_string(),
                ingredients,
            });
        }

        tracing::debug!(
            dishes = dishes.len(),
            sections = sections.len(),
            "grocery ledger recomputed"
        );
        GroceryLedger { sections }
    }
}
