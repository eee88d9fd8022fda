use std::collections::HashMap;

use crate::types::{Dish, MealType};

/// Name-keyed index over the dish dataset.
///
/// Built once from the loaded dataset and never mutated afterwards.
/// Lookups are by exact name and a miss is an `Option::None`, never an
/// error: callers are expected to filter misses out silently (a stale
/// name in an imported menu simply drops from the grocery list).
#[derive(Debug, Clone, Default)]
pub struct DishCatalog {
    dishes: Vec<Dish>,
    index: HashMap<String, usize>,
}

impl DishCatalog {
    pub fn new(dishes: Vec<Dish>) -> Self {
        let mut index = HashMap::with_capacity(dishes.len());
        for (position, dish) in dishes.iter().enumerate() {
            // First occurrence wins on duplicate names.
            index.entry(dish.name.clone()).or_insert(position);
        }
        DishCatalog { dishes, index }
    }

    /// An empty catalog, used until the dataset has arrived. Every
    /// lookup against it is a miss.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn lookup_by_name(&self, name: &str) -> Option<&Dish> {
        self.index.get(name).map(|&position| &self.dishes[position])
    }

    /// Full ordered dish list, as option enumeration for manual entry.
    pub fn all(&self) -> &[Dish] {
        &self.dishes
    }

    /// The candidate pool for one meal slot, cloned out so a planner
    /// owns its pool independently of the catalog.
    pub fn of_meal(&self, meal: MealType) -> Vec<Dish> {
        self.dishes
            .iter()
            .filter(|dish| dish.meal == meal)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }
}
