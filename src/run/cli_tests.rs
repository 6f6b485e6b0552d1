#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;

use super::*;
use crate::models::DateRange;

fn seeded() -> TransactionStore {
    TransactionStore::with_examples(10)
}

fn data_rows(listing: &str) -> Vec<&str> {
    listing
        .lines()
        .filter(|l| l.starts_with('#'))
        .collect()
}

// ── Listing ───────────────────────────────────────────────────

#[test]
fn test_first_page_of_examples() {
    let store = seeded();
    let listing = format_listing(&store.view()).unwrap();
    let rows = data_rows(&listing);

    assert_eq!(rows.len(), 10);
    assert!(rows[0].starts_with("#25"));
    assert!(rows[0].contains("2025-11-27"));
    assert!(rows[0].contains("-52.40"));
    assert!(rows[9].contains("2025-11-14"));
    assert!(listing.contains("Showing 1 to 10 of 25 (page 1 of 3)"));
}

#[test]
fn test_income_rows_carry_plus_sign() {
    let mut store = seeded();
    store.set_filters(TransactionFilters::default().with_category(Some(Category::Housing)));
    let listing = format_listing(&store.view()).unwrap();

    assert!(listing.contains("+3,500.00"));
    assert!(listing.contains("-1,200.00"));
    assert!(listing.contains("Showing 1 to 3 of 3 (page 1 of 1)"));
}

#[test]
fn test_last_page_is_short() {
    let mut store = seeded();
    assert!(store.go_to_page(3));
    let listing = format_listing(&store.view()).unwrap();
    assert_eq!(data_rows(&listing).len(), 5);
    assert!(listing.contains("Showing 21 to 25 of 25 (page 3 of 3)"));
}

#[test]
fn test_empty_listing() {
    let store = TransactionStore::default();
    assert_eq!(
        format_listing(&store.view()).unwrap(),
        "No transactions found\n"
    );
}

#[test]
fn test_list_rejects_page_out_of_range() {
    let mut store = seeded();
    let err = cli_list(7, &FilterArgs::default(), &mut store).unwrap_err();
    assert_eq!(err.to_string(), "Page 7 is out of range (1-3)");
}

#[test]
fn test_list_first_page_of_empty_result_is_ok() {
    let mut store = seeded();
    let filters = FilterArgs {
        from: NaiveDate::from_ymd_opt(2030, 1, 1),
        ..FilterArgs::default()
    };
    assert!(cli_list(1, &filters, &mut store).is_ok());
}

// ── Summary ───────────────────────────────────────────────────

#[test]
fn test_summary_over_all_examples() {
    let store = seeded();
    let text = format_summary(&store.view(), &TransactionFilters::default()).unwrap();

    assert!(text.starts_with("Expense.Tracker: all transactions"));
    assert!(text.contains("10,150.00  (5 txns)"));
    assert!(text.contains("2,578.19  (20 txns)"));
    assert!(text.contains("  Total Balance:      7,571.81  (25 txns)"));
}

#[test]
fn test_summary_describes_filters() {
    let mut store = seeded();
    let filters = TransactionFilters {
        category: Some(Category::Food),
        date_range: Some(DateRange::new(
            NaiveDate::from_ymd_opt(2025, 11, 1),
            None,
        )),
    };
    store.set_filters(filters);
    let text = format_summary(&store.view(), &filters).unwrap();

    assert!(text.starts_with("Expense.Tracker: category food, from 2025-11-01"));
    assert!(text.contains("3,000.00  (2 txns)"));
    assert!(text.contains("2,647.50  (8 txns)"));
}

// ── Categories ────────────────────────────────────────────────

#[test]
fn test_categories_listing() {
    assert_eq!(
        format_categories(),
        "food\ntransport\nhousing\nutilities\nentertainment\n"
    );
}
