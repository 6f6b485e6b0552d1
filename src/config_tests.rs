#![allow(clippy::unwrap_used)]

use clap::Parser;

use super::*;
use crate::models::DateRange;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ── Argument parsing ──────────────────────────────────────────

#[test]
fn test_no_subcommand_means_tui() {
    let cli = Cli::try_parse_from(["expense-tracker", "--log-file", "/tmp/x.log"]).unwrap();
    assert!(cli.command.is_none());
    assert!(!cli.empty);
}

#[test]
fn test_list_with_filters() {
    let cli = Cli::try_parse_from([
        "expense-tracker",
        "list",
        "--page",
        "2",
        "--category",
        "Food",
        "--from",
        "2025-11-01",
    ])
    .unwrap();
    match cli.command {
        Some(Command::List { page, filters }) => {
            assert_eq!(page, 2);
            assert_eq!(filters.category, Some(Category::Food));
            assert_eq!(filters.from, Some(day(2025, 11, 1)));
            assert_eq!(filters.to, None);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_unknown_category_rejected() {
    let result = Cli::try_parse_from(["expense-tracker", "summary", "--category", "groceries"]);
    assert!(result.is_err());
}

#[test]
fn test_bad_date_rejected() {
    let result = Cli::try_parse_from(["expense-tracker", "list", "--to", "11/03/2025"]);
    assert!(result.is_err());
}

#[test]
fn test_zero_page_size_rejected() {
    let result = Cli::try_parse_from(["expense-tracker", "--page-size", "0"]);
    assert!(result.is_err());
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from(["expense-tracker", "categories", "--empty", "--page-size", "5"])
        .unwrap();
    assert!(cli.empty);
    assert_eq!(cli.page_size, 5);
}

// ── FilterArgs ────────────────────────────────────────────────

#[test]
fn test_filter_args_without_dates_has_no_range() {
    let args = FilterArgs {
        category: Some(Category::Housing),
        ..FilterArgs::default()
    };
    let filters = args.to_filters();
    assert_eq!(filters.category, Some(Category::Housing));
    assert_eq!(filters.date_range, None);
}

#[test]
fn test_filter_args_with_dates() {
    let args = FilterArgs {
        category: None,
        from: Some(day(2025, 11, 1)),
        to: Some(day(2025, 11, 9)),
    };
    assert_eq!(
        args.to_filters().date_range,
        Some(DateRange::new(Some(day(2025, 11, 1)), Some(day(2025, 11, 9))))
    );
}

#[test]
fn test_parse_date() {
    assert_eq!(parse_date(" 2025-11-03 "), Ok(day(2025, 11, 3)));
    assert!(parse_date("2025-13-01").is_err());
    assert!(parse_date("").is_err());
}

// ── Settings ──────────────────────────────────────────────────

#[test]
fn test_settings_from_cli() {
    let cli = Cli::try_parse_from([
        "expense-tracker",
        "--empty",
        "--page-size",
        "7",
        "--log-file",
        "/tmp/expense.log",
        "--log-level",
        "debug",
    ])
    .unwrap();
    let settings = Settings::from_cli(&cli).unwrap();
    assert_eq!(settings.items_per_page, 7);
    assert!(!settings.load_examples);
    assert_eq!(settings.log_file, PathBuf::from("/tmp/expense.log"));
    assert_eq!(settings.log_filter, "debug");
}
