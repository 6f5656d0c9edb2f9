use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use foodplan::catalog::DealsCatalog;
use foodplan_shared::{IngredientLine, MealPlan, StorePreference};
use foodplan_shopping::{
    GenerateShoppingListCommand, IngredientAggregationService, generate_shopping_list,
};

/// foodplan - Family meal planning
#[derive(Parser)]
#[command(name = "foodplan")]
#[command(about = "Meal plans, supermarket deals and shopping lists", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Generate a shopping list from a meal plan JSON file
    Generate {
        /// Meal plan with embedded recipes
        #[arg(long)]
        meal_plan: PathBuf,

        /// Shopping list title (defaults to the plan's week)
        #[arg(long)]
        title: Option<String>,

        /// Preferred store for deal matching: netto, rema, meny or any
        #[arg(long, default_value = "any")]
        store: StorePreference,

        /// Skip deal matching
        #[arg(long)]
        no_deals: bool,
    },
    /// Aggregate a JSON array of ingredient lines
    Aggregate {
        #[arg(long)]
        input: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = foodplan::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    foodplan::observability::init_observability(
        "foodplan",
        env!("CARGO_PKG_VERSION"),
        &config.logging.level,
        &config.logging.format,
    )?;

    match cli.command {
        Commands::Serve { host, port } => serve_command(config, host, port).await,
        Commands::Generate {
            meal_plan,
            title,
            store,
            no_deals,
        } => generate_command(config, meal_plan, title, store, no_deals).await,
        Commands::Aggregate { input } => aggregate_command(input).await,
    }
}

#[tracing::instrument(skip(config))]
async fn serve_command(
    config: foodplan::Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting foodplan server...");

    // Use CLI overrides if provided, otherwise use config
    let host = host_override.unwrap_or_else(|| config.server.host.to_owned());
    let port = port_override.unwrap_or(config.server.port);

    let app = foodplan::router(foodplan::AppState::new(config));

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

#[tracing::instrument(skip(config))]
async fn generate_command(
    config: foodplan::Config,
    meal_plan_path: PathBuf,
    title: Option<String>,
    store_preference: StorePreference,
    no_deals: bool,
) -> Result<()> {
    let meal_plan: MealPlan = read_json(&meal_plan_path).await?;

    let deals = if no_deals {
        Vec::new()
    } else {
        match DealsCatalog::new(config.deals.sale_dir).load(None).await {
            Ok(loaded) => loaded.deals,
            Err(err) => {
                tracing::warn!(err = %err, "deal matching skipped");
                Vec::new()
            }
        }
    };

    let cmd = GenerateShoppingListCommand {
        meal_plan,
        title,
        store_preference,
        as_of: chrono::Local::now().date_naive(),
    };

    let shopping_list = generate_shopping_list(cmd, &deals)?;
    println!("{}", serde_json::to_string_pretty(&shopping_list)?);

    Ok(())
}

#[tracing::instrument]
async fn aggregate_command(input: PathBuf) -> Result<()> {
    let lines: Vec<IngredientLine> = read_json(&input).await?;

    let aggregated = IngredientAggregationService::aggregate(&lines);
    println!("{}", serde_json::to_string_pretty(&aggregated)?);

    Ok(())
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(err = %err, "failed to listen for shutdown signal");
    }

    tracing::info!("Shutdown signal received");
}
