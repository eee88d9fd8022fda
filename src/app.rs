use catalog::{Dish, DishCatalog, MealType};
use chrono::{Datelike, NaiveDate};
use planning::{MealPlanner, MenuComposer, MenuDish, WeeklyMenu};
use share::SharePayloadCodec;
use shopping::{CategoryGroup, CategoryPartition, GroceryAggregator, GroceryLedger};

use crate::error::AppError;

/// Top-level controller that owns the catalog, one planner per meal
/// slot, the current schedule, and the grocery aggregator. Everything
/// the UI boundary does arrives here as an intent; the owned parts are
/// never reachable as ambient shared state.
///
/// All intents run synchronously and are serialized by the caller, so
/// a read always reflects the most recently completed mutation.
pub struct MenuBoard {
    catalog: DishCatalog,
    aggregator: GroceryAggregator,
    lunch: MealPlanner,
    dinner: MealPlanner,
    horizon: usize,
    menu: WeeklyMenu,
}

impl MenuBoard {
    /// Build the board from the startup datasets and generate the
    /// initial schedule.
    pub fn new(
        dishes: Vec<Dish>,
        groups: Vec<CategoryGroup>,
        horizon: usize,
        history_window: usize,
        seed: Option<u64>,
        start: NaiveDate,
    ) -> Result<Self, AppError> {
        let catalog = DishCatalog::new(dishes);
        let aggregator = GroceryAggregator::new(CategoryPartition::from_groups(groups));
        let lunch = MealPlanner::new(catalog.of_meal(MealType::Lunch), history_window, seed);
        // Offset the seed so the two planners do not mirror each
        // other's draws.
        let dinner = MealPlanner::new(
            catalog.of_meal(MealType::Dinner),
            history_window,
            seed.map(|value| value.wrapping_add(1)),
        );

        let mut board = MenuBoard {
            catalog,
            aggregator,
            lunch,
            dinner,
            horizon,
            menu: WeeklyMenu::default(),
        };
        board.generate(start)?;
        Ok(board)
    }

    /// Regenerate the whole schedule from `start`.
    pub fn generate(&mut self, start: NaiveDate) -> Result<&WeeklyMenu, AppError> {
        let lunch_picks = self.lunch.random_init(self.horizon);
        let dinner_picks = self.dinner.random_init(self.horizon);
        self.menu = MenuComposer::compose_menu(start, self.horizon, lunch_picks, dinner_picks)?;
        tracing::info!(start = %start, horizon = self.horizon, "menu generated");
        Ok(&self.menu)
    }

    pub fn menu(&self) -> &WeeklyMenu {
        &self.menu
    }

    /// Exposed for manual-entry name resolution and option enumeration.
    pub fn catalog(&self) -> &DishCatalog {
        &self.catalog
    }

    /// Replace one day's slot with a fresh planner pick.
    pub fn regenerate_day(&mut self, index: usize, meal: MealType) -> Result<(), AppError> {
        let picks = match meal {
            MealType::Lunch => self.lunch.pick_next(index)?,
            MealType::Dinner => self.dinner.pick_next(index)?,
        };
        self.menu
            .set_meal(index, meal, MenuComposer::purify_meal(&picks))?;
        Ok(())
    }

    /// Override one day's slot with manually chosen dishes.
    ///
    /// An empty name list is a no-op, as is a list that resolves to no
    /// catalog dish at all (misses are dropped silently). A resolved
    /// dish with a missing or zero ingredient quantity blocks the
    /// commit and leaves the schedule unchanged.
    pub fn manual_set_day(
        &mut self,
        index: usize,
        meal: MealType,
        names: &[String],
    ) -> Result<(), AppError> {
        if names.is_empty() {
            return Ok(());
        }

        let dishes: Vec<&Dish> = names
            .iter()
            .filter_map(|name| self.catalog.lookup_by_name(name))
            .collect();
        if dishes.is_empty() {
            return Ok(());
        }
        for dish in &dishes {
            dish.validate()?;
        }

        let purified = MenuComposer::purify_meal(dishes.into_iter());
        self.menu.set_meal(index, meal, purified)?;
        Ok(())
    }

    /// Replace the schedule with an imported one and reseed both
    /// planners' histories from it, so the next generation avoids the
    /// imported dishes.
    pub fn import_menu(&mut self, menu: WeeklyMenu) {
        let lunch_names = flatten_names(MenuComposer::extract_meals(&menu, MealType::Lunch));
        let dinner_names = flatten_names(MenuComposer::extract_meals(&menu, MealType::Dinner));
        self.lunch.set_history(lunch_names);
        self.dinner.set_history(dinner_names);
        tracing::info!(days = menu.len(), "menu imported, planner history reseeded");
        self.menu = menu;
    }

    /// Standalone export of the current schedule. Menus hold purified
    /// dishes already, so the output re-imports verbatim.
    pub fn export_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string_pretty(&self.menu)?)
    }

    /// Full recompute of the grocery ledger from the current schedule.
    /// Dish entries are re-resolved against the catalog so stale names
    /// drop out and quantities always come from catalog recipes.
    pub fn groceries(&self) -> GroceryLedger {
        let dishes: Vec<MenuDish> = MenuComposer::extract_dishes(&self.menu)
            .iter()
            .filter_map(|entry| self.catalog.lookup_by_name(&entry.name))
            .map(MenuDish::from)
            .collect();
        self.aggregator.aggregate(&dishes)
    }

    /// Encoded share payload for the current schedule. Submitting it
    /// to the shortening endpoint is the caller's concern.
    pub fn share_payload(&self) -> Result<String, AppError> {
        Ok(SharePayloadCodec::encode(&self.menu)?)
    }
}

fn flatten_names(meals: Vec<Vec<MenuDish>>) -> Vec<String> {
    meals
        .into_iter()
        .flatten()
        .map(|dish| dish.name)
        .collect()
}

/// The default schedule start: the coming Sunday (never today).
pub fn next_sunday(today: NaiveDate) -> NaiveDate {
    let days_ahead = 7 - today.weekday().num_days_from_sunday() as i64;
    today + chrono::Duration::days(days_ahead)
}
