use catalog::{Dish, IngredientLine, MealType};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::PlanningError;

/// A dish as it appears inside a menu: just the name and ingredient
/// lines, with any planner bookkeeping stripped. This is the uniform
/// shape downstream consumers (aggregation, serialization) see whether
/// the entry came from a random pick or a manual override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuDish {
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<IngredientLine>,
}

impl From<&Dish> for MenuDish {
    fn from(dish: &Dish) -> Self {
        MenuDish {
            name: dish.name.clone(),
            ingredients: dish.ingredients.clone(),
        }
    }
}

/// One day of the schedule: a date and the dishes assigned to each
/// meal slot. On deserialization each slot accepts either a bare dish
/// or a sequence, so foreign and hand-edited payloads normalize to the
/// canonical shape on parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayMenu {
    pub date: NaiveDate,
    #[serde(default, deserialize_with = "one_or_many")]
    pub lunch: Vec<MenuDish>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub dinner: Vec<MenuDish>,
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<MenuDish>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(MenuDish),
        Many(Vec<MenuDish>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(dish) => vec![dish],
        OneOrMany::Many(dishes) => dishes,
    })
}

/// An ordered run of consecutive day menus. The length is fixed at
/// construction; day entries are replaced in place, never restructured.
/// Serializes as a plain JSON array of days, which is also the share
/// and export wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct WeeklyMenu(Vec<DayMenu>);

impl WeeklyMenu {
    pub fn days(&self) -> &[DayMenu] {
        &self.0
    }

    pub fn day(&self, index: usize) -> Option<&DayMenu> {
        self.0.get(index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.0.first().map(|day| day.date)
    }

    /// Replace one meal slot in place.
    pub fn set_meal(
        &mut self,
        index: usize,
        meal: MealType,
        dishes: Vec<MenuDish>,
    ) -> Result<(), PlanningError> {
        let len = self.0.len();
        let day = self
            .0
            .get_mut(index)
            .ok_or(PlanningError::DayOutOfRange { index, len })?;
        match meal {
            MealType::Lunch => day.lunch = dishes,
            MealType::Dinner => day.dinner = dishes,
        }
        Ok(())
    }
}

/// Turns planner outputs into a dated weekly schedule and provides the
/// projections downstream consumers work from.
pub struct MenuComposer;

impl MenuComposer {
    /// Zip lunch and dinner picks against `horizon` consecutive dates
    /// starting at `start`. A pick sequence whose length differs from
    /// the horizon is a contract violation and is reported, never
    /// silently truncated or padded.
    pub fn compose_menu(
        start: NaiveDate,
        horizon: usize,
        lunch_picks: Vec<Vec<Dish>>,
        dinner_picks: Vec<Vec<Dish>>,
    ) -> Result<WeeklyMenu, PlanningError> {
        if lunch_picks.len() != horizon {
            return Err(PlanningError::HorizonMismatch {
                meal: MealType::Lunch,
                expected: horizon,
                actual: lunch_picks.len(),
            });
        }
        if dinner_picks.len() != horizon {
            return Err(PlanningError::HorizonMismatch {
                meal: MealType::Dinner,
                expected: horizon,
                actual: dinner_picks.len(),
            });
        }

        let days = lunch_picks
            .iter()
            .zip(dinner_picks.iter())
            .enumerate()
            .map(|(offset, (lunch, dinner))| DayMenu {
                date: start + Duration::days(offset as i64),
                lunch: Self::purify_meal(lunch),
                dinner: Self::purify_meal(dinner),
            })
            .collect();

        Ok(WeeklyMenu(days))
    }

    /// Normalize a meal assignment into the canonical menu shape,
    /// keeping only name and ingredient lines.
    pub fn purify_meal<'a>(meal: impl IntoIterator<Item = &'a Dish>) -> Vec<MenuDish> {
        meal.into_iter().map(MenuDish::from).collect()
    }

    /// Flatten every dish across all days into one ordered sequence,
    /// day-major with lunch before dinner, duplicates preserved.
    pub fn extract_dishes(menu: &WeeklyMenu) -> Vec<MenuDish> {
        menu.days()
            .iter()
            .flat_map(|day| day.lunch.iter().chain(day.dinner.iter()))
            .cloned()
            .collect()
    }

    /// Project out one meal slot per day, in date order. Used to
    /// reconstruct planner history from an imported schedule.
    pub fn extract_meals(menu: &WeeklyMenu, meal: MealType) -> Vec<Vec<MenuDish>> {
        menu.days()
            .iter()
            .map(|day| match meal {
                MealType::Lunch => day.lunch.clone(),
                MealType::Dinner => day.dinner.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dish(name: &str, meal: MealType) -> Dish {
        Dish {
            name: name.to_string(),
            meal,
            ingredients: vec![IngredientLine {
                name: "salt".to_string(),
                quantity: 1.0,
            }],
        }
    }

    fn picks(names: &[&str], meal: MealType) -> Vec<Vec<Dish>> {
        names.iter().map(|name| vec![dish(name, meal)]).collect()
    }

    fn date(text: &str) -> NaiveDate {
        text.parse().unwrap()
    }

    #[test]
    fn test_compose_menu_dates_are_consecutive() {
        let lunch = picks(&["a", "b", "c", "d", "e", "f", "g"], MealType::Lunch);
        let dinner = picks(&["h", "i", "j", "k", "l", "m", "n"], MealType::Dinner);

        let menu = MenuComposer::compose_menu(date("2023-01-08"), 7, lunch, dinner).unwrap();

        assert_eq!(menu.len(), 7);
        assert_eq!(menu.days()[0].date, date("2023-01-08"));
        assert_eq!(menu.days()[6].date, date("2023-01-14"));
        assert_eq!(menu.days()[2].lunch[0].name, "c");
        assert_eq!(menu.days()[2].dinner[0].name, "j");
    }

    #[test]
    fn test_compose_menu_length_mismatch_is_reported() {
        let lunch = picks(&["a", "b"], MealType::Lunch);
        let dinner = picks(&["c", "d", "e"], MealType::Dinner);

        match MenuComposer::compose_menu(date("2023-01-08"), 3, lunch, dinner) {
            Err(PlanningError::HorizonMismatch {
                meal: MealType::Lunch,
                expected: 3,
                actual: 2,
            }) => {}
            other => panic!("expected HorizonMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_purify_meal_keeps_name_and_ingredients_only() {
        let source = dish("soup", MealType::Dinner);
        let purified = MenuComposer::purify_meal(&[source.clone()]);

        assert_eq!(purified.len(), 1);
        assert_eq!(purified[0].name, "soup");
        assert_eq!(purified[0].ingredients, source.ingredients);
    }

    #[test]
    fn test_extract_dishes_is_day_major_lunch_first() {
        let lunch = picks(&["a", "b"], MealType::Lunch);
        let dinner = picks(&["c", "d"], MealType::Dinner);
        let menu = MenuComposer::compose_menu(date("2023-01-08"), 2, lunch, dinner).unwrap();

        let dishes = MenuComposer::extract_dishes(&menu);
        let names: Vec<&str> = dishes.iter().map(|dish| dish.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c", "b", "d"]);
    }

    #[test]
    fn test_extract_dishes_preserves_duplicates() {
        let lunch = picks(&["a", "a"], MealType::Lunch);
        let dinner = picks(&["b", "b"], MealType::Dinner);
        let menu = MenuComposer::compose_menu(date("2023-01-08"), 2, lunch, dinner).unwrap();

        assert_eq!(MenuComposer::extract_dishes(&menu).len(), 4);
    }

    #[test]
    fn test_extract_meals_projects_one_slot() {
        let lunch = picks(&["a", "b"], MealType::Lunch);
        let dinner = picks(&["c", "d"], MealType::Dinner);
        let menu = MenuComposer::compose_menu(date("2023-01-08"), 2, lunch, dinner).unwrap();

        let dinners = MenuComposer::extract_meals(&menu, MealType::Dinner);
        assert_eq!(dinners.len(), 2);
        assert_eq!(dinners[0][0].name, "c");
        assert_eq!(dinners[1][0].name, "d");
    }

    #[test]
    fn test_set_meal_replaces_in_place() {
        let lunch = picks(&["a"], MealType::Lunch);
        let dinner = picks(&["b"], MealType::Dinner);
        let mut menu = MenuComposer::compose_menu(date("2023-01-08"), 1, lunch, dinner).unwrap();

        let replacement = vec![MenuDish {
            name: "override".to_string(),
            ingredients: Vec::new(),
        }];
        menu.set_meal(0, MealType::Lunch, replacement).unwrap();

        assert_eq!(menu.days()[0].lunch[0].name, "override");
        assert!(matches!(
            menu.set_meal(4, MealType::Lunch, Vec::new()),
            Err(PlanningError::DayOutOfRange { index: 4, len: 1 })
        ));
    }

    #[test]
    fn test_day_menu_accepts_bare_dish_or_sequence() {
        let raw = r#"{
            "date": "2023-01-08",
            "lunch": {"name": "solo", "ingredients": []},
            "dinner": [{"name": "first"}, {"name": "second"}]
        }"#;

        let day: DayMenu = serde_json::from_str(raw).unwrap();
        assert_eq!(day.lunch.len(), 1);
        assert_eq!(day.lunch[0].name, "solo");
        assert_eq!(day.dinner.len(), 2);
    }

    #[test]
    fn test_day_menu_ignores_ephemeral_fields() {
        // Bookkeeping keys from older exports must not break the parse.
        let raw = r#"{
            "date": "2023-01-08",
            "lunch": [{"name": "solo", "picked": true}],
            "dinner": []
        }"#;

        let day: DayMenu = serde_json::from_str(raw).unwrap();
        assert_eq!(day.lunch[0].name, "solo");
        assert!(day.dinner.is_empty());
    }
}
