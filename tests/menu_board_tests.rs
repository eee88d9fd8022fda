//! Integration tests for the top-level controller: intents arriving
//! from the UI boundary and the derived grocery ledger.

use catalog::{Dish, IngredientLine, MealType};
use chrono::NaiveDate;
use planning::{MenuComposer, WeeklyMenu};
use shopping::CategoryGroup;
use weekmenu::MenuBoard;

fn dish(name: &str, meal: MealType, lines: &[(&str, f64)]) -> Dish {
    Dish {
        name: name.to_string(),
        meal,
        ingredients: lines
            .iter()
            .map(|(ingredient, quantity)| IngredientLine {
                name: ingredient.to_string(),
                quantity: *quantity,
            })
            .collect(),
    }
}

fn dishes() -> Vec<Dish> {
    let mut all = Vec::new();
    for index in 1..=14 {
        all.push(dish(
            &format!("L{}", index),
            MealType::Lunch,
            &[("carrot", index as f64)],
        ));
        all.push(dish(
            &format!("D{}", index),
            MealType::Dinner,
            &[("rice", index as f64)],
        ));
    }
    // A dish an edit session left with a zero quantity.
    all.push(dish("broken stew", MealType::Dinner, &[("rice", 0.0)]));
    all
}

fn groups() -> Vec<CategoryGroup> {
    vec![
        CategoryGroup {
            category: "vegetable".to_string(),
            ingredients: vec!["carrot".to_string()],
        },
        CategoryGroup {
            category: "grain".to_string(),
            ingredients: vec!["rice".to_string()],
        },
    ]
}

fn board(seed: u64) -> MenuBoard {
    MenuBoard::new(
        dishes(),
        groups(),
        7,
        7,
        Some(seed),
        date("2023-01-08"),
    )
    .unwrap()
}

fn date(text: &str) -> NaiveDate {
    text.parse().unwrap()
}

fn lunch_names(menu: &WeeklyMenu) -> Vec<String> {
    menu.days()
        .iter()
        .flat_map(|day| day.lunch.iter().map(|dish| dish.name.clone()))
        .collect()
}

#[test]
fn test_initial_schedule_covers_the_horizon() {
    let board = board(1);

    assert_eq!(board.menu().len(), 7);
    assert_eq!(board.menu().start_date(), Some(date("2023-01-08")));
    assert_eq!(MenuComposer::extract_dishes(board.menu()).len(), 14);
}

#[test]
fn test_regenerate_day_swaps_one_slot() {
    let mut board = board(2);
    let before = board.menu().days()[3].lunch[0].name.clone();
    let other_days: Vec<String> = board
        .menu()
        .days()
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != 3)
        .map(|(_, day)| day.lunch[0].name.clone())
        .collect();

    board.regenerate_day(3, MealType::Lunch).unwrap();

    let after = board.menu().days()[3].lunch[0].name.clone();
    assert_ne!(after, before);

    // Only slot 3 changed.
    let untouched: Vec<String> = board
        .menu()
        .days()
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != 3)
        .map(|(_, day)| day.lunch[0].name.clone())
        .collect();
    assert_eq!(untouched, other_days);
}

#[test]
fn test_regenerate_day_out_of_range_is_reported() {
    let mut board = board(3);
    assert!(board.regenerate_day(7, MealType::Dinner).is_err());
}

#[test]
fn test_manual_set_day_empty_names_is_a_noop() {
    let mut board = board(4);
    let before = board.menu().clone();

    board.manual_set_day(0, MealType::Lunch, &[]).unwrap();

    assert_eq!(board.menu(), &before);
}

#[test]
fn test_manual_set_day_all_misses_is_a_noop() {
    let mut board = board(5);
    let before = board.menu().clone();

    board
        .manual_set_day(0, MealType::Lunch, &["no such dish".to_string()])
        .unwrap();

    assert_eq!(board.menu(), &before);
}

#[test]
fn test_manual_set_day_filters_misses_and_commits_the_rest() {
    let mut board = board(6);

    board
        .manual_set_day(
            2,
            MealType::Dinner,
            &["ghost".to_string(), "D3".to_string(), "D5".to_string()],
        )
        .unwrap();

    let names: Vec<&str> = board.menu().days()[2]
        .dinner
        .iter()
        .map(|dish| dish.name.as_str())
        .collect();
    assert_eq!(names, vec!["D3", "D5"]);
}

#[test]
fn test_manual_set_day_with_invalid_quantity_blocks_the_commit() {
    let mut board = board(7);
    let before = board.menu().clone();

    let result = board.manual_set_day(1, MealType::Dinner, &["broken stew".to_string()]);

    assert!(matches!(result, Err(weekmenu::AppError::Validation(_))));
    assert_eq!(board.menu(), &before);
}

#[test]
fn test_groceries_use_catalog_recipes_not_menu_copies() {
    let mut board = board(8);

    // An imported schedule whose copy of L1 claims a tampered quantity.
    let tampered = MenuComposer::compose_menu(
        date("2023-01-08"),
        1,
        vec![vec![dish("L1", MealType::Lunch, &[("carrot", 99.0)])]],
        vec![vec![dish("D1", MealType::Dinner, &[("rice", 1.0)])]],
    )
    .unwrap();
    board.import_menu(tampered);

    let ledger = board.groceries();
    let carrot = ledger.entries("vegetable", "carrot").unwrap();
    assert_eq!(carrot.len(), 1);
    // Catalog says L1 needs 1.0 carrot; the tampered 99.0 is ignored.
    assert_eq!(carrot[0].quantity, 1.0);
}

#[test]
fn test_groceries_drop_stale_dish_names_silently() {
    let mut board = board(9);

    let stale = MenuComposer::compose_menu(
        date("2023-01-08"),
        1,
        vec![vec![dish("retired dish", MealType::Lunch, &[("carrot", 2.0)])]],
        vec![vec![dish("D1", MealType::Dinner, &[("rice", 1.0)])]],
    )
    .unwrap();
    board.import_menu(stale);

    let ledger = board.groceries();
    assert!(ledger.entries("vegetable", "carrot").is_none());
    assert!(ledger.entries("grain", "rice").is_some());
}

#[test]
fn test_ledger_entry_count_tracks_menu_occurrences() {
    let board = board(10);

    let ledger = board.groceries();
    let carrot_entries = ledger.entries("vegetable", "carrot").unwrap();
    // Every lunch dish contributes exactly one carrot line.
    assert_eq!(carrot_entries.len(), 7);
}

#[test]
fn test_import_reseeds_history_for_the_next_generation() {
    let mut board = board(11);

    let imported = MenuComposer::compose_menu(
        date("2023-01-01"),
        7,
        (1..=7)
            .map(|i| vec![dish(&format!("L{}", i), MealType::Lunch, &[("carrot", 1.0)])])
            .collect(),
        (1..=7)
            .map(|i| vec![dish(&format!("D{}", i), MealType::Dinner, &[("rice", 1.0)])])
            .collect(),
    )
    .unwrap();
    board.import_menu(imported);

    board.generate(date("2023-01-08")).unwrap();

    // The anti-repeat window holds L1..L7 when the new round starts,
    // so the first fresh pick must come from the other half of the
    // pool. (Later picks slide the window, which may legally free the
    // oldest imported dishes again.)
    let first = lunch_names(board.menu())[0].clone();
    let index: usize = first[1..].parse().unwrap();
    assert!(index > 7, "dish {} repeats the imported week", first);
}

#[test]
fn test_share_payload_round_trips_the_menu() {
    let board = board(12);

    let payload = board.share_payload().unwrap();
    let restored = share::SharePayloadCodec::decode(&payload).unwrap();

    assert_eq!(&restored, board.menu());
}
