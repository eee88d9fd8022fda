use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use catalog::Dish;
use shopping::CategoryGroup;

/// Startup dataset boundary: reads the already-agreed JSON shapes from
/// disk and hands over parsed collections. The core neither knows nor
/// cares where they came from.
pub fn load_dishes(path: &Path) -> Result<Vec<Dish>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read dish dataset {}", path.display()))?;
    let dishes: Vec<Dish> = serde_json::from_str(&raw)
        .with_context(|| format!("dish dataset {} is not valid", path.display()))?;
    tracing::info!(count = dishes.len(), path = %path.display(), "dish dataset loaded");
    Ok(dishes)
}

pub fn load_categories(path: &Path) -> Result<Vec<CategoryGroup>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read category dataset {}", path.display()))?;
    let groups: Vec<CategoryGroup> = serde_json::from_str(&raw)
        .with_context(|| format!("category dataset {} is not valid", path.display()))?;
    tracing::info!(count = groups.len(), path = %path.display(), "category dataset loaded");
    Ok(groups)
}

/// Read a previously exported schedule file.
pub fn load_menu(path: &Path) -> Result<planning::WeeklyMenu> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read menu file {}", path.display()))?;
    let menu = serde_json::from_str(&raw)
        .with_context(|| format!("menu file {} is not a valid schedule", path.display()))?;
    Ok(menu)
}
