//! bistro-meals - Fetch meals from TheMealDB and print them

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use libbistro::provider::themealdb::TheMealDbProvider;
use libbistro::service::MealService;
use libbistro::{BistroError, Config, Meal, MealStore, Route, RouteView};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "bistro-meals")]
#[command(version, about = "Fetch meals from TheMealDB and print them")]
#[command(long_about = r#"Fetch one batch of meals and print the list, a single meal, or the
home greeting.

EXAMPLES:
    # List the default batch
    bistro-meals

    # Search by name
    bistro-meals --search soup

    # Show one meal
    bistro-meals --id 52977
    bistro-meals --route detail/52977

    # Offline, with built-in sample meals
    bistro-meals --mock

    # JSON output for scripting
    bistro-meals --format json | jq '.[] | .name'

    # JSONL output (one JSON object per line)
    bistro-meals --format jsonl

OUTPUT FORMATS:
    text  - One meal per line: id | name | category (default)
    json  - JSON array, or a single object for one meal
    jsonl - JSON lines, one object per line

EXIT CODES:
    0 - Success (including empty results and unknown meal ids)
    1 - Error (network failure, bad response, unreadable config)
    3 - Invalid input (malformed --route or --id)
"#)]
struct Args {
    /// Search term (overrides [api].search)
    #[arg(short, long, value_name = "TERM", conflicts_with = "mock")]
    search: Option<String>,

    /// Show a single meal by id
    #[arg(long, value_name = "ID", conflicts_with = "route")]
    id: Option<String>,

    /// Route to print: home, list, or detail/<id>
    #[arg(long, value_name = "PATH")]
    route: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Serve built-in sample meals instead of calling TheMealDB
    #[arg(long)]
    mock: bool,

    /// Path to config file (defaults to $BISTRO_CONFIG or ~/.config/bistro/config.toml)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Debug-level logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Jsonl,
}

/// A meal as printed by this tool
#[derive(Debug, Serialize)]
struct MealEntry<'a> {
    id: &'a str,
    name: &'a str,
    category: &'a str,
    thumbnail: &'a str,
    instructions: &'a str,
}

impl<'a> From<&'a Meal> for MealEntry<'a> {
    fn from(meal: &'a Meal) -> Self {
        Self {
            id: &meal.id,
            name: &meal.name,
            category: &meal.category,
            thumbnail: &meal.thumbnail,
            instructions: &meal.instructions,
        }
    }
}

#[derive(Debug, Serialize)]
struct HomeEntry<'a> {
    title: &'a str,
    greeting: &'a str,
    button: &'a str,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let mut logging = libbistro::logging::config_from_env();
    logging.verbose = args.verbose;
    if std::env::var("BISTRO_LOG_LEVEL").is_err() {
        // stdout carries the data; keep stderr quiet unless asked
        logging.level = "warn".to_string();
    }
    if let Err(e) = logging.init() {
        eprintln!("Error: Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    tracing::debug!("bistro-meals started with args: {:?}", args);

    if let Err(e) = run(args).await {
        eprintln!("Error: {}", e);
        std::process::exit(exit_code(&e));
    }
}

async fn run(args: Args) -> Result<()> {
    // Validate the route before touching the network
    let route = match (args.id, args.route) {
        (Some(id), _) => Route::detail(id)?,
        (None, Some(path)) => path.parse()?,
        (None, None) => Route::List,
    };

    let output = if route == Route::Home {
        render(&RouteView::resolve(&route, &MealStore::new(), Default::default()), args.format)?
    } else {
        let service = build_service(args.config, args.search, args.mock)?;
        let store = MealStore::with_meals(service.refresh().await?);
        render(&RouteView::resolve(&route, &store, Default::default()), args.format)?
    };

    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(())
}

fn build_service(config: Option<PathBuf>, search: Option<String>, mock: bool) -> Result<MealService> {
    if mock {
        return Ok(MealService::mock());
    }

    let config = match config {
        Some(ref path) => Config::load_from_path(path)?,
        None => Config::load_or_default()?,
    };

    let mut provider = TheMealDbProvider::new(&config.api)?;
    if let Some(term) = search {
        provider = provider.with_search(term);
    }
    Ok(MealService::with_provider(Arc::new(provider)))
}

/// Render a route view; an empty string means print nothing
fn render(view: &RouteView<'_>, format: OutputFormat) -> Result<String> {
    let output = match view {
        RouteView::Home {
            title,
            greeting,
            button,
        } => {
            let entry = HomeEntry {
                title: *title,
                greeting: *greeting,
                button: *button,
            };
            match format {
                OutputFormat::Text => format!("{}\n{}\n[{}]", title, greeting, button),
                OutputFormat::Json => serde_json::to_string_pretty(&entry)?,
                OutputFormat::Jsonl => serde_json::to_string(&entry)?,
            }
        }
        RouteView::List { meals } => format_list(meals, format)?,
        RouteView::Detail { meal: None } => String::new(),
        RouteView::Detail { meal: Some(meal) } => format_detail(meal, format)?,
    };

    Ok(output)
}

fn format_list(meals: &[Meal], format: OutputFormat) -> Result<String> {
    let entries: Vec<MealEntry> = meals.iter().map(MealEntry::from).collect();

    let output = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&entries)?,
        OutputFormat::Jsonl => entries
            .iter()
            .map(serde_json::to_string)
            .collect::<serde_json::Result<Vec<_>>>()?
            .join("\n"),
        OutputFormat::Text => entries
            .iter()
            .map(|entry| {
                if entry.category.is_empty() {
                    format!("{} | {}", entry.id, entry.name)
                } else {
                    format!("{} | {} | {}", entry.id, entry.name, entry.category)
                }
            })
            .collect::<Vec<_>>()
            .join("\n"),
    };

    Ok(output)
}

fn format_detail(meal: &Meal, format: OutputFormat) -> Result<String> {
    let entry = MealEntry::from(meal);

    let output = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&entry)?,
        OutputFormat::Jsonl => serde_json::to_string(&entry)?,
        OutputFormat::Text => {
            let mut lines = vec![entry.name.to_string()];
            if !entry.thumbnail.is_empty() {
                lines.push(entry.thumbnail.to_string());
            }
            lines.push(format!("Category: {}", entry.category));
            lines.push(String::new());
            lines.push(entry.instructions.to_string());
            lines.join("\n")
        }
    };

    Ok(output)
}

fn exit_code(error: &anyhow::Error) -> i32 {
    error
        .downcast_ref::<BistroError>()
        .map(BistroError::exit_code)
        .unwrap_or(1)
}
