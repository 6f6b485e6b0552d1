#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn make_txn(kind: TransactionType, amount: Decimal) -> Transaction {
    Transaction::new(
        TransactionId(1),
        day(2025, 11, 3).and_hms_opt(14, 30, 0).unwrap(),
        amount,
        kind,
        Category::Food,
    )
}

// ── Transaction ───────────────────────────────────────────────

#[test]
fn test_income() {
    let txn = make_txn(TransactionType::Income, dec!(100.00));
    assert!(txn.is_income());
    assert!(!txn.is_expense());
    assert_eq!(txn.signed_amount(), dec!(100.00));
}

#[test]
fn test_expense() {
    let txn = make_txn(TransactionType::Expense, dec!(50.00));
    assert!(!txn.is_income());
    assert!(txn.is_expense());
    assert_eq!(txn.signed_amount(), dec!(-50.00));
}

#[test]
fn test_day_drops_time_of_day() {
    let txn = make_txn(TransactionType::Expense, dec!(1));
    assert_eq!(txn.day(), day(2025, 11, 3));
}

#[test]
fn test_transaction_id_display() {
    assert_eq!(TransactionId(42).to_string(), "#42");
}

// ── TransactionType ───────────────────────────────────────────

#[test]
fn test_transaction_type_names() {
    assert_eq!(TransactionType::Income.to_string(), "income");
    assert_eq!(TransactionType::Expense.as_str(), "expense");
    assert_eq!(TransactionType::Income.label(), "Income");
    assert_eq!(TransactionType::all().len(), 2);
}

// ── Category ──────────────────────────────────────────────────

#[test]
fn test_category_parse() {
    assert_eq!(Category::parse("food"), Some(Category::Food));
    assert_eq!(Category::parse("Transport"), Some(Category::Transport));
    assert_eq!(Category::parse("HOUSING"), Some(Category::Housing));
    assert_eq!(Category::parse("utilities"), Some(Category::Utilities));
    assert_eq!(Category::parse("entertainment"), Some(Category::Entertainment));
    assert_eq!(Category::parse("groceries"), None);
    assert_eq!(Category::parse(""), None);
}

#[test]
fn test_category_all() {
    let all = Category::all();
    assert_eq!(all.len(), 5);
    for c in all {
        assert_eq!(Category::parse(c.as_str()), Some(*c), "Roundtrip failed for {c}");
    }
}

#[test]
fn test_category_display() {
    assert_eq!(format!("{}", Category::Entertainment), "entertainment");
}

// ── Filters ───────────────────────────────────────────────────

#[test]
fn test_empty_filters_match_everything() {
    let filters = TransactionFilters::default();
    assert!(filters.is_empty());
    assert!(filters.matches(&make_txn(TransactionType::Income, dec!(1))));
}

#[test]
fn test_unbounded_range_counts_as_empty() {
    let filters = TransactionFilters::default().with_from(None);
    assert!(filters.date_range.is_some());
    assert!(filters.is_empty());
}

#[test]
fn test_category_filter() {
    let txn = make_txn(TransactionType::Expense, dec!(1));
    let food = TransactionFilters::default().with_category(Some(Category::Food));
    let housing = TransactionFilters::default().with_category(Some(Category::Housing));
    assert!(food.matches(&txn));
    assert!(!housing.matches(&txn));
}

#[test]
fn test_date_range_is_inclusive_on_both_ends() {
    let range = DateRange::new(Some(day(2025, 11, 1)), Some(day(2025, 11, 5)));
    assert!(range.contains(day(2025, 11, 1)));
    assert!(range.contains(day(2025, 11, 5)));
    assert!(!range.contains(day(2025, 10, 31)));
    assert!(!range.contains(day(2025, 11, 6)));
}

#[test]
fn test_date_range_open_sides() {
    let from_only = DateRange::new(Some(day(2025, 11, 1)), None);
    assert!(from_only.contains(day(2030, 1, 1)));
    assert!(!from_only.contains(day(2025, 10, 1)));

    let to_only = DateRange::new(None, Some(day(2025, 11, 1)));
    assert!(to_only.contains(day(2000, 1, 1)));
    assert!(!to_only.contains(day(2025, 11, 2)));
}

#[test]
fn test_same_day_range_ignores_time_of_day() {
    let txn = make_txn(TransactionType::Expense, dec!(1));
    let filters = TransactionFilters::default()
        .with_from(Some(day(2025, 11, 3)))
        .with_to(Some(day(2025, 11, 3)));
    assert!(filters.matches(&txn));
}

#[test]
fn test_with_from_keeps_existing_to() {
    let filters = TransactionFilters::default()
        .with_to(Some(day(2025, 11, 9)))
        .with_from(Some(day(2025, 11, 1)));
    assert_eq!(
        filters.date_range,
        Some(DateRange::new(Some(day(2025, 11, 1)), Some(day(2025, 11, 9))))
    );
}
