//! Popdash CLI
//!
//! Command-line interface for the population dashboard:
//! - List selectable years
//! - Show growth metrics and ranked differences
//! - Print the population table, map data, and heatmap
//! - Format numbers and generate a config file

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use popdash::analysis::{compute_ranked_differences, format_compact, format_population};
use popdash::config::Config;
use popdash::dashboard::{
    choropleth, default_year, heatmap, population_changes, population_table, year_options,
    ChangesPanel, ColorTheme, DashboardView, Heatmap, Selection,
};
use popdash::dataset::load_dataset;
use popdash::logging::init_stderr_logging;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "popdash-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "US population dashboard in the terminal")]
#[command(long_about = "Popdash reads the reshaped census CSV and prints the dashboard panels:\nyear-over-year changes, rankings, map data and the population heatmap.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Population CSV (default: configured data path)
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,

    /// Config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List selectable years
    Years,

    /// Show highest and lowest growth for a year
    Changes {
        /// Year (default: configured default year)
        #[arg(short, long)]
        year: Option<i32>,
    },

    /// Rank regions by change from the previous year
    Differences {
        #[arg(short, long)]
        year: Option<i32>,
        /// Maximum number of rows
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Rank regions by population
    Table {
        #[arg(short, long)]
        year: Option<i32>,
    },

    /// Print choropleth data
    Map {
        #[arg(short, long)]
        year: Option<i32>,
        /// Color theme (blues, viridis, greens, reds, plasma)
        #[arg(short, long)]
        theme: Option<ColorTheme>,
    },

    /// Print population by year and region
    Heatmap {
        #[arg(short, long)]
        theme: Option<ColorTheme>,
    },

    /// Print the whole dashboard as JSON
    Dashboard {
        #[arg(short, long)]
        year: Option<i32>,
        #[arg(short, long)]
        theme: Option<ColorTheme>,
    },

    /// Format a number in compact form
    Format {
        #[arg(allow_hyphen_values = true)]
        value: i64,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().or_else(Config::find_default);
    let mut config = match &config_path {
        Some(path) => Config::load_with_env(path)?,
        None => Config::from_env(),
    };
    if let Some(data) = &cli.data {
        config.data.path = data.clone();
    }

    if std::env::var("POPDASH_LOG_LEVEL").is_err() {
        config.logging.level = "warn".to_string();
    }
    init_stderr_logging(&config.logging);

    match &cli.command {
        Commands::Format { value } => {
            let value = *value;
            match cli.format {
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::json!({ "value": value, "display": format_compact(value) })
                ),
                _ => println!("{}", format_compact(value)),
            }
            return Ok(());
        }
        Commands::Config { output } => {
            let content = popdash::config::generate_default_config();

            match output {
                Some(path) => {
                    // Create parent directory if needed
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(path, &content)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", content);
                }
            }
            return Ok(());
        }
        _ => {}
    }

    let dataset = load_dataset(&config.data.path)
        .with_context(|| format!("Failed to load population data from {:?}", config.data.path))?;
    let pick_year = |year: Option<i32>| year.unwrap_or_else(|| default_year(&dataset, &config.dashboard));

    match cli.command {
        Commands::Years => {
            let years = year_options(&dataset);
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&years)?),
                _ => {
                    for year in years {
                        println!("{}", year);
                    }
                }
            }
        }

        Commands::Changes { year } => {
            let panel = population_changes(&dataset, pick_year(year))?;
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&panel)?),
                _ => print_changes(&panel),
            }
        }

        Commands::Differences { year, limit } => {
            let year = pick_year(year);
            let ranked = compute_ranked_differences(&dataset, year)?;
            let limit = limit.unwrap_or(ranked.len());
            let rows: Vec<_> = ranked.into_iter().take(limit).collect();

            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
                OutputFormat::Csv => {
                    let mut writer = csv::Writer::from_writer(std::io::stdout());
                    writer.write_record(["states", "id", "population", "population_difference"])?;
                    for row in &rows {
                        writer.write_record([
                            row.region.clone(),
                            row.region_id.map(|id| id.to_string()).unwrap_or_default(),
                            row.population.to_string(),
                            row.population_delta.to_string(),
                        ])?;
                    }
                    writer.flush()?;
                }
                _ => {
                    println!("Population change {} vs {}", year, year - 1);
                    println!();
                    println!("{:<5} {:<24} {:>12} {:>10} {:>12} {:>10}", "Rank", "State", "Population", "", "Change", "");
                    println!("{}", "-".repeat(78));
                    for (i, row) in rows.iter().enumerate() {
                        println!(
                            "{:<5} {:<24} {:>12} {:>10} {:>12} {:>10}",
                            i + 1,
                            row.region,
                            row.population,
                            format_population(row.population),
                            row.population_delta,
                            format_compact(row.population_delta)
                        );
                    }
                }
            }
        }

        Commands::Table { year } => {
            let table = population_table(&dataset, pick_year(year))?;
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&table)?),
                OutputFormat::Csv => {
                    let mut writer = csv::Writer::from_writer(std::io::stdout());
                    writer.write_record(["rank", "states", "population"])?;
                    for row in &table.rows {
                        writer.write_record([
                            row.rank.to_string(),
                            row.region.clone(),
                            row.population.to_string(),
                        ])?;
                    }
                    writer.flush()?;
                }
                _ => {
                    println!("Top states {}", table.year);
                    println!();
                    println!("{:<5} {:<24} {:>12} {:>10}", "Rank", "State", "Population", "");
                    println!("{}", "-".repeat(54));
                    for row in &table.rows {
                        println!(
                            "{:<5} {:<24} {:>12} {:>10}",
                            row.rank, row.region, row.population, row.population_display
                        );
                    }
                }
            }
        }

        Commands::Map { year, theme } => {
            let theme = theme.unwrap_or(config.dashboard.color_theme);
            let map = choropleth(&dataset, pick_year(year), theme)?;
            match cli.format {
                OutputFormat::Table => {
                    println!(
                        "Choropleth {} ({}, scale {}..{})",
                        map.year, map.scale.theme, map.scale.min, map.scale.max
                    );
                    println!();
                    for entry in &map.entries {
                        println!("{:<4} {:<24} {:>12}", entry.region_code, entry.region, entry.population);
                    }
                }
                _ => println!("{}", serde_json::to_string_pretty(&map)?),
            }
        }

        Commands::Heatmap { theme } => {
            let heatmap = heatmap(&dataset, theme.unwrap_or(config.dashboard.color_theme));
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&heatmap)?),
                OutputFormat::Csv => {
                    let mut writer = csv::Writer::from_writer(std::io::stdout());
                    writer.write_record(["year", "states", "population"])?;
                    for cell in &heatmap.cells {
                        writer.write_record([
                            cell.year.to_string(),
                            cell.region.clone(),
                            cell.population.to_string(),
                        ])?;
                    }
                    writer.flush()?;
                }
                _ => print_heatmap(&heatmap),
            }
        }

        Commands::Dashboard { year, theme } => {
            let selection = Selection::resolve(&dataset, &config.dashboard, year, theme);
            let view = DashboardView::build(&dataset, selection, &config.dashboard)?;
            println!("{}", serde_json::to_string_pretty(&view)?);
        }

        Commands::Format { .. } | Commands::Config { .. } => {}
    }

    Ok(())
}

fn print_changes(panel: &ChangesPanel) {
    match panel {
        ChangesPanel::Available(changes) => {
            println!("Population changes {} vs {}", changes.year, changes.previous_year);
            println!();
            for metric in [&changes.highest, &changes.lowest] {
                println!("{}", metric.label);
                println!("  Population: {}", metric.population_display);
                println!("  Change:     {}", metric.delta_display);
            }
        }
        ChangesPanel::Unavailable { message, .. } => println!("{}", message),
    }
}

/// Print the heatmap with one row per region and one column per year
fn print_heatmap(heatmap: &Heatmap) {
    print!("{:<24}", "State");
    for year in &heatmap.years {
        print!(" {:>8}", year);
    }
    println!();
    println!("{}", "-".repeat(24 + heatmap.years.len() * 9));

    for region in &heatmap.regions {
        print!("{:<24}", region);
        for year in &heatmap.years {
            let value = heatmap
                .cells
                .iter()
                .find(|c| c.year == *year && &c.region == region)
                .map(|c| format_population(c.population))
                .unwrap_or_else(|| "-".to_string());
            print!(" {:>8}", value);
        }
        println!();
    }
}
