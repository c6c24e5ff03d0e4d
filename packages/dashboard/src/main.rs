#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the mob violence dashboard.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mob_map_dashboard::{DashboardConfig, Session, render};
use mob_map_incident_models::YearFilter;

#[derive(Parser)]
#[command(name = "mob_map", about = "Mob violence incident dashboard")]
struct Cli {
    /// Path to a TOML config file (defaults to the embedded config)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the paginated incident table
    Table {
        /// Year filter tag (e.g. "all", "2023")
        #[arg(long)]
        filter: Option<String>,
        /// 1-based page number
        #[arg(long)]
        page: Option<usize>,
        /// 1-based row number to expand with details
        #[arg(long)]
        expand: Option<usize>,
    },
    /// Show per-district incident counts and color buckets
    Map {
        /// Year scope (defaults to the configured map year)
        #[arg(long)]
        year: Option<String>,
        /// Print the counts as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show dataset totals and the circle grid
    Summary {
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => DashboardConfig::from_path(path)?,
        None => DashboardConfig::embedded()?,
    };

    let client = reqwest::Client::builder().build()?;
    let mut session = Session::bootstrap(&config, &client).await;

    match cli.command {
        Commands::Table {
            filter,
            page,
            expand,
        } => {
            if let Some(tag) = filter
                && !session.set_filter(&tag)
                && session.view().active_filter() != &YearFilter::parse(&tag)
            {
                log::warn!("Ignoring unknown filter {tag:?}");
            }
            if let Some(page) = page
                && page != session.view().current_page()
                && !session.set_page(page)
            {
                log::warn!("Page {page} is out of range");
            }
            if let Some(row) = expand
                && (row == 0 || !session.toggle_row(row - 1))
            {
                log::warn!("Row {row} is not on the current page");
            }
            print!("{}", render::render_table(&session));
        }
        Commands::Map { year, json } => {
            let scope = year.map_or_else(|| session.map_year().clone(), |y| YearFilter::parse(&y));
            let counts = session.district_counts(&scope)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&counts)?);
            } else {
                println!("Year: {scope}");
                print!("{}", render::render_map(&counts));
            }
        }
        Commands::Summary { json } => {
            let summary = session.summary();
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print!("{}", render::render_summary(&summary, &session.circle_grid()));
            }
        }
    }

    Ok(())
}
