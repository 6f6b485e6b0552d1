use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::models::{Category, DateRange, TransactionFilters};
use crate::store::ITEMS_PER_PAGE;
use crate::ui::util::DATE_FORMAT;

/// Expense.Tracker - browse, filter and edit expenses in the terminal.
///
/// Runs the interactive UI when no subcommand is given. Data lives in
/// memory only and starts from an example dataset.
#[derive(Debug, Parser)]
#[command(name = "expense-tracker", version, about)]
pub(crate) struct Cli {
    /// Transactions shown per page.
    #[arg(
        long,
        global = true,
        env = "EXPENSE_TRACKER_PAGE_SIZE",
        default_value_t = ITEMS_PER_PAGE,
        value_parser = parse_page_size,
    )]
    pub(crate) page_size: usize,
    /// Start with no transactions instead of the example dataset.
    #[arg(long, global = true)]
    pub(crate) empty: bool,
    /// Write logs here (default: the platform data directory).
    #[arg(long, global = true, value_name = "PATH")]
    pub(crate) log_file: Option<PathBuf>,
    /// Log filter, e.g. `debug` or `expense_tracker=trace`.
    #[arg(
        long,
        global = true,
        env = "EXPENSE_TRACKER_LOG",
        default_value = "info"
    )]
    pub(crate) log_level: String,
    #[command(subcommand)]
    pub(crate) command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Print one page of transactions, most recent first.
    List {
        /// Page to print (1-based).
        #[arg(long, default_value_t = 1)]
        page: usize,
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Print income, expense and balance totals.
    Summary {
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// List the available categories.
    Categories,
}

#[derive(Debug, Clone, Default, Args)]
pub(crate) struct FilterArgs {
    /// Only this category.
    #[arg(long, value_parser = parse_category)]
    pub(crate) category: Option<Category>,
    /// Earliest day to include (YYYY-MM-DD).
    #[arg(long, value_parser = parse_date)]
    pub(crate) from: Option<NaiveDate>,
    /// Latest day to include (YYYY-MM-DD).
    #[arg(long, value_parser = parse_date)]
    pub(crate) to: Option<NaiveDate>,
}

impl FilterArgs {
    pub(crate) fn to_filters(&self) -> TransactionFilters {
        let range = DateRange::new(self.from, self.to);
        TransactionFilters {
            category: self.category,
            date_range: (!range.is_unbounded()).then_some(range),
        }
    }
}

pub(crate) fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|e| format!("{e} (expected YYYY-MM-DD)"))
}

fn parse_category(s: &str) -> Result<Category, String> {
    Category::parse(s).ok_or_else(|| {
        let names: Vec<&str> = Category::all().iter().map(|c| c.as_str()).collect();
        format!("unknown category '{s}', expected one of: {}", names.join(", "))
    })
}

fn parse_page_size(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("page size must be at least 1".into()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

/// Resolved runtime settings.
#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub(crate) items_per_page: usize,
    pub(crate) load_examples: bool,
    pub(crate) log_file: PathBuf,
    pub(crate) log_filter: String,
}

impl Settings {
    pub(crate) fn from_cli(cli: &Cli) -> Result<Self> {
        let log_file = match &cli.log_file {
            Some(path) => path.clone(),
            None => default_log_path()?,
        };
        Ok(Self {
            items_per_page: cli.page_size,
            load_examples: !cli.empty,
            log_file,
            log_filter: cli.log_level.clone(),
        })
    }
}

fn default_log_path() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "expense-tracker", "ExpenseTracker")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    Ok(data_dir.join("expense-tracker.log"))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
