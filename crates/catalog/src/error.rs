use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("ingredient '{ingredient}' in dish '{dish}' has a missing or zero quantity")]
    MissingQuantity { dish: String, ingredient: String },
}
