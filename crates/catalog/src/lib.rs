pub mod catalog;
pub mod error;
pub mod types;

pub use catalog::DishCatalog;
pub use error::CatalogError;
pub use types::{Dish, Ingredient, IngredientLine, MealType};
