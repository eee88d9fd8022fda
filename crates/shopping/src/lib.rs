pub mod aggregation;
pub mod categorization;

pub use aggregation::{
    CategorySection, GroceryAggregator, GroceryLedger, IngredientTally, LedgerEntry,
};
pub use categorization::{CategoryGroup, CategoryPartition, UNCATEGORIZED};
