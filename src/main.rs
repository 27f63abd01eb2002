use anyhow::Result;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use clap::{Parser, Subcommand};
use pantry::{FoodCategory, InventoryItem};
use pantrysense::config::Config;
use pantrysense::error::AppError;
use pantrysense::snapshot::{PriceTable, SnapshotStore};
use strum::VariantArray;
use uuid::Uuid;
use waste_analysis::{WasteAnalyzer, WasteReport, WeightProfile};

/// pantrysense - Household food-waste insight
#[derive(Parser)]
#[command(name = "pantrysense")]
#[command(about = "Food-waste risk scoring and estimation for household inventories", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full waste analysis over exported snapshots
    Analyze {
        /// Path to the inventory snapshot (JSON array of items)
        #[arg(long)]
        inventory: String,

        /// Path to the consumption-log snapshot (JSON array of entries)
        #[arg(long)]
        logs: String,

        /// Owner to analyze (defaults to the first owner in the snapshot)
        #[arg(long)]
        owner: Option<Uuid>,

        /// Reference time, RFC 3339 or YYYY-MM-DD (defaults to now)
        #[arg(long)]
        as_of: Option<String>,

        /// Output format: json or text
        #[arg(long, default_value = "json")]
        format: String,
    },
    /// Score a single ad-hoc item
    Score {
        /// Item name
        #[arg(long)]
        name: String,

        /// Food category (unknown values fall back to "other")
        #[arg(long, default_value = "other")]
        category: String,

        /// Quantity on hand
        #[arg(long, default_value_t = 1.0)]
        quantity: f64,

        /// Expiration date, RFC 3339 or YYYY-MM-DD
        #[arg(long)]
        expires: String,

        /// Optional consumption-log snapshot to score against
        #[arg(long)]
        logs: Option<String>,

        /// Reference time, RFC 3339 or YYYY-MM-DD (defaults to now)
        #[arg(long)]
        as_of: Option<String>,
    },
    /// Print the active category profile table
    Profiles,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    pantrysense::observability::init_observability(
        "pantrysense",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Analyze {
            inventory,
            logs,
            owner,
            as_of,
            format,
        } => analyze_command(config, inventory, logs, owner, as_of, format).await?,
        Commands::Score {
            name,
            category,
            quantity,
            expires,
            logs,
            as_of,
        } => score_command(config, name, category, quantity, expires, logs, as_of).await?,
        Commands::Profiles => profiles_command(),
    }

    Ok(())
}

fn analyzer_from_config(config: &Config) -> WasteAnalyzer {
    WasteAnalyzer::with_config(
        waste_analysis::CategoryProfileRegistry::builtin(),
        waste_analysis::CommunityBenchmarkConstants::builtin(),
        WeightProfile::parse(&config.analysis.weight_profile),
    )
}

fn price_lookup_from_config(config: &Config) -> Result<PriceTable, AppError> {
    match &config.pricing.price_table {
        Some(path) => PriceTable::from_file(path, config.pricing.default_price),
        None => Ok(PriceTable::with_default(config.pricing.default_price)),
    }
}

/// Parse an RFC 3339 timestamp or a plain date (taken as midnight UTC).
fn parse_reference_time(raw: Option<String>) -> Result<DateTime<Utc>, AppError> {
    let Some(raw) = raw else {
        return Ok(Utc::now());
    };

    if let Ok(timestamp) = raw.parse::<DateTime<Utc>>() {
        return Ok(timestamp);
    }
    if let Ok(date) = raw.parse::<NaiveDate>() {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }

    Err(AppError::InvalidArgument(format!(
        "cannot parse '{raw}' as a date or timestamp"
    )))
}

async fn analyze_command(
    config: Config,
    inventory_path: String,
    logs_path: String,
    owner: Option<Uuid>,
    as_of: Option<String>,
    format: String,
) -> Result<()> {
    let reference_time = parse_reference_time(as_of)?;
    let store = SnapshotStore::from_files(&inventory_path, &logs_path)?;
    let prices = price_lookup_from_config(&config)?;

    let owner = match owner.or_else(|| store.default_owner()) {
        Some(owner) => owner,
        None => {
            // Empty snapshot: any owner produces the well-defined zero report
            Uuid::nil()
        }
    };

    let report = analyzer_from_config(&config)
        .analyze(owner, &store, &prices, reference_time)
        .await
        .map_err(AppError::from)?;

    match format.as_str() {
        "text" => print_text_report(&report),
        "json" => println!("{}", serde_json::to_string_pretty(&report).map_err(AppError::from)?),
        other => {
            return Err(
                AppError::InvalidArgument(format!("unknown format '{other}'")).into(),
            )
        }
    }

    Ok(())
}

async fn score_command(
    config: Config,
    name: String,
    category: String,
    quantity: f64,
    expires: String,
    logs_path: Option<String>,
    as_of: Option<String>,
) -> Result<()> {
    let reference_time = parse_reference_time(as_of)?;
    let expiration = parse_reference_time(Some(expires))?;

    let logs = match logs_path {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)
                .map_err(|e| AppError::SnapshotError(format!("cannot read {path}: {e}")))?;
            serde_json::from_str(&raw).map_err(AppError::from)?
        }
        None => Vec::new(),
    };

    let item = InventoryItem {
        id: Uuid::new_v4(),
        user_id: Uuid::nil(),
        name,
        category: FoodCategory::parse(&category),
        quantity,
        purchase_date: None,
        expiration_date: Some(expiration),
        notes: None,
    };

    let assessment = analyzer_from_config(&config)
        .assess_item(&item, &logs, reference_time)
        .ok_or_else(|| AppError::InvalidArgument("expiration date required".to_string()))?;

    println!("{}", serde_json::to_string_pretty(&assessment).map_err(AppError::from)?);
    Ok(())
}

fn profiles_command() {
    let registry = waste_analysis::CategoryProfileRegistry::builtin();

    println!(
        "{:<10} {:>10} {:>14} {:>9} {:>8}  {}",
        "category", "shelf (d)", "perishability", "seasonal", "g/unit", "common causes"
    );
    for category in FoodCategory::VARIANTS {
        let profile = registry.profile(*category);
        println!(
            "{:<10} {:>10} {:>14.2} {:>9} {:>8.0}  {}",
            category.as_str(),
            profile.typical_shelf_life_days,
            profile.perishability,
            if profile.seasonal_sensitive { "yes" } else { "no" },
            profile.average_waste_grams_per_unit,
            profile.common_causes.join(", ")
        );
    }
}

fn print_text_report(report: &WasteReport) {
    println!("Waste report as of {}", report.generated_at.format("%Y-%m-%d"));
    println!();

    println!("At-risk items:");
    if report.risk_assessments.is_empty() {
        println!("  (none)");
    }
    for assessment in &report.risk_assessments {
        println!(
            "  [{:>3}] {} expires in {} day(s) - {}",
            assessment.risk_score,
            assessment.level.as_str(),
            assessment.days_until_expiration,
            assessment.level.alert()
        );
        for recommendation in &assessment.recommendations {
            println!("        - {recommendation}");
        }
    }
    if !report.skipped.is_empty() {
        println!();
        println!("Skipped items:");
        for skipped in &report.skipped {
            println!("  {} ({})", skipped.name, skipped.reason);
        }
    }

    println!();
    println!(
        "Weekly waste:  {} g / ${:.2} across {} item(s) (actual {} g, predicted {} g)",
        report.weekly_waste.grams,
        report.weekly_waste.money,
        report.weekly_waste.item_count,
        report.weekly_waste.actual.grams,
        report.weekly_waste.predicted.grams,
    );
    println!(
        "Monthly waste: {} g / ${:.2} across {} item(s) (actual {} g, predicted {} g)",
        report.monthly_waste.grams,
        report.monthly_waste.money,
        report.monthly_waste.item_count,
        report.monthly_waste.actual.grams,
        report.monthly_waste.predicted.grams,
    );

    println!();
    println!(
        "Community comparison: {} ({}th percentile) - {}",
        report.community_comparison.performance_rating.as_str(),
        report.community_comparison.ranking.percentile,
        report.community_comparison.performance_message
    );

    if !report.category_breakdown.is_empty() {
        println!();
        println!("By category:");
        for category in &report.category_breakdown {
            println!(
                "  {:<10} {:>6} g  ${:>7.2}  {:>5.1}%",
                category.category.as_str(),
                category.grams,
                category.money,
                category.percentage
            );
        }
    }

    if !report.recommendations.is_empty() {
        println!();
        println!("Recommendations:");
        for recommendation in &report.recommendations {
            println!(
                "  [{}] {} (potential savings ${:.2})",
                recommendation.priority,
                recommendation.suggestion,
                recommendation.potential_savings
            );
        }
    }

    println!();
    println!(
        "Season: {} - {}",
        report.seasonal_insight.season, report.seasonal_insight.message
    );
}
