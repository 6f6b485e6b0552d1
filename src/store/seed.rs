use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::models::{Category, TransactionType};

use crate::models::TransactionType::{Expense, Income};

/// (year, month, day, amount mantissa, amount scale, type, category)
type SeedRow = (i32, u32, u32, i64, u32, TransactionType, Category);

const EXAMPLE_ROWS: &[SeedRow] = &[
    (2025, 10, 27, 3500, 0, Income, Category::Housing),
    (2025, 10, 28, 455, 1, Expense, Category::Food),
    (2025, 10, 29, 120, 0, Expense, Category::Utilities),
    (2025, 10, 30, 2575, 2, Expense, Category::Transport),
    (2025, 11, 1, 8999, 2, Expense, Category::Entertainment),
    (2025, 11, 2, 623, 1, Expense, Category::Food),
    (2025, 11, 3, 2500, 0, Income, Category::Food),
    (2025, 11, 4, 152, 1, Expense, Category::Transport),
    (2025, 11, 5, 1200, 0, Expense, Category::Housing),
    (2025, 11, 6, 548, 1, Expense, Category::Food),
    (2025, 11, 8, 7845, 2, Expense, Category::Entertainment),
    (2025, 11, 9, 326, 1, Expense, Category::Transport),
    (2025, 11, 10, 952, 1, Expense, Category::Utilities),
    (2025, 11, 11, 150, 0, Income, Category::Entertainment),
    (2025, 11, 12, 419, 1, Expense, Category::Food),
    (2025, 11, 14, 200, 0, Expense, Category::Entertainment),
    (2025, 11, 15, 3500, 0, Income, Category::Housing),
    (2025, 11, 16, 6785, 2, Expense, Category::Food),
    (2025, 11, 17, 285, 1, Expense, Category::Transport),
    (2025, 11, 19, 110, 0, Expense, Category::Utilities),
    (2025, 11, 20, 500, 0, Income, Category::Food),
    (2025, 11, 22, 1456, 1, Expense, Category::Entertainment),
    (2025, 11, 24, 7325, 2, Expense, Category::Food),
    (2025, 11, 26, 389, 1, Expense, Category::Transport),
    (2025, 11, 27, 524, 1, Expense, Category::Food),
];

/// Example records loaded at start-up, dated at midnight. Ids are assigned
/// by the store.
pub(crate) fn example_rows(
) -> impl Iterator<Item = (NaiveDateTime, Decimal, TransactionType, Category)> {
    EXAMPLE_ROWS
        .iter()
        .filter_map(|&(y, m, d, mantissa, scale, kind, category)| {
            let date = NaiveDate::from_ymd_opt(y, m, d)?.and_hms_opt(0, 0, 0)?;
            Some((date, Decimal::new(mantissa, scale), kind, category))
        })
}
