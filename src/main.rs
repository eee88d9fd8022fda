use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use planning::WeeklyMenu;
use share::{HttpShortener, LinkShortener, SharePayloadCodec};
use shopping::GroceryLedger;
use weekmenu::app::{next_sunday, MenuBoard};
use weekmenu::dataset;

/// weekmenu - weekly meal planning and grocery aggregation
#[derive(Parser)]
#[command(name = "weekmenu")]
#[command(about = "Plan a week of meals and derive the grocery list", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a weekly menu and its grocery list
    Plan {
        /// First day of the schedule (defaults to the coming Sunday)
        #[arg(long)]
        start: Option<NaiveDate>,

        /// Randomization seed for reproducible schedules
        #[arg(long)]
        seed: Option<u64>,

        /// Shared payload to restore instead of generating
        #[arg(long)]
        payload: Option<String>,

        /// Write the schedule to this file as JSON
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the grocery list for an exported schedule
    Groceries {
        /// Exported schedule file
        menu: PathBuf,
    },
    /// Encode an exported schedule as a shareable payload
    Share {
        /// Exported schedule file
        menu: PathBuf,

        /// Submit the payload to the shortening endpoint
        #[arg(long)]
        submit: bool,
    },
    /// Decode a shared payload back into a schedule
    Decode {
        /// The payload text (or a /menu/<payload> path)
        payload: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = weekmenu::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    weekmenu::observability::init_observability("weekmenu", &config.observability.log_level)?;

    match cli.command {
        Commands::Plan {
            start,
            seed,
            payload,
            output,
        } => plan_command(config, start, seed, payload, output),
        Commands::Groceries { menu } => groceries_command(config, &menu),
        Commands::Share { menu, submit } => share_command(config, &menu, submit).await,
        Commands::Decode { payload } => decode_command(&payload),
    }
}

fn build_board(
    config: &weekmenu::config::Config,
    seed: Option<u64>,
    start: NaiveDate,
) -> Result<MenuBoard> {
    let dishes = dataset::load_dishes(Path::new(&config.data.dishes))?;
    let groups = dataset::load_categories(Path::new(&config.data.categories))?;
    Ok(MenuBoard::new(
        dishes,
        groups,
        config.planner.horizon,
        config.planner.window(),
        seed,
        start,
    )?)
}

fn plan_command(
    config: weekmenu::config::Config,
    start: Option<NaiveDate>,
    seed: Option<u64>,
    payload: Option<String>,
    output: Option<PathBuf>,
) -> Result<()> {
    let start = start.unwrap_or_else(|| next_sunday(chrono::Local::now().date_naive()));
    let mut board = build_board(&config, seed, start)?;

    if let Some(payload) = payload {
        match SharePayloadCodec::decode(&payload) {
            Ok(menu) => board.import_menu(menu),
            Err(error) => {
                tracing::warn!(%error, "share payload could not be decoded, keeping the fresh schedule");
            }
        }
    }

    print!("{}", render_menu(board.menu()));
    print!("{}", render_ledger(&board.groceries()));

    if let Some(path) = output {
        std::fs::write(&path, board.export_json()?)?;
        tracing::info!(path = %path.display(), "schedule exported");
    }

    Ok(())
}

fn groceries_command(config: weekmenu::config::Config, menu_path: &Path) -> Result<()> {
    let start = next_sunday(chrono::Local::now().date_naive());
    let mut board = build_board(&config, None, start)?;

    board.import_menu(dataset::load_menu(menu_path)?);
    print!("{}", render_ledger(&board.groceries()));
    Ok(())
}

async fn share_command(
    config: weekmenu::config::Config,
    menu_path: &Path,
    submit: bool,
) -> Result<()> {
    let menu = dataset::load_menu(menu_path)?;
    let payload = SharePayloadCodec::encode(&menu)?;
    println!("/menu/{}", payload);

    if submit {
        let shortener = HttpShortener::new(config.share.endpoint.clone());
        let short_path = shortener.shorten(&payload).await?;
        println!("{}", short_path);
    }

    Ok(())
}

fn decode_command(payload: &str) -> Result<()> {
    let payload = payload.strip_prefix("/menu/").unwrap_or(payload);
    let menu = SharePayloadCodec::decode(payload)?;
    println!("{}", serde_json::to_string_pretty(&menu)?);
    Ok(())
}

fn render_menu(menu: &WeeklyMenu) -> String {
    let mut out = String::new();
    for day in menu.days() {
        out.push_str(&format!("{} ({})\n", day.date, day.date.format("%A")));
        out.push_str(&format!("  lunch:  {}\n", dish_names(&day.lunch)));
        out.push_str(&format!("  dinner: {}\n", dish_names(&day.dinner)));
    }
    out
}

fn dish_names(dishes: &[planning::MenuDish]) -> String {
    if dishes.is_empty() {
        return "-".to_string();
    }
    dishes
        .iter()
        .map(|dish| dish.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_ledger(ledger: &GroceryLedger) -> String {
    let mut out = String::new();
    for section in ledger.sections() {
        out.push_str(&format!("[{}]\n", section.category));
        for tally in &section.ingredients {
            let contributions = tally
                .entries
                .iter()
                .map(|entry| format!("{} ({})", entry.quantity, entry.dish))
                .collect::<Vec<_>>()
                .join(", ");
            out.push_str(&format!("  {}: {}\n", tally.ingredient, contributions));
        }
    }
    out
}
