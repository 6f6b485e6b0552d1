use anyhow::Result;
use std::fmt::{self, Write};

use crate::config::{Command, FilterArgs};
use crate::models::{Category, TransactionFilters};
use crate::store::{TransactionStore, TransactionView};
use crate::ui::util::{format_amount, DATE_FORMAT};

pub(crate) fn as_cli(command: &Command, store: &mut TransactionStore) -> Result<()> {
    match command {
        Command::List { page, filters } => cli_list(*page, filters, store),
        Command::Summary { filters } => cli_summary(filters, store),
        Command::Categories => {
            print!("{}", format_categories());
            Ok(())
        }
    }
}

fn cli_list(page: usize, filters: &FilterArgs, store: &mut TransactionStore) -> Result<()> {
    store.set_filters(filters.to_filters());
    if page != store.current_page() && !store.go_to_page(page) {
        let total_pages = store.view().pagination.total_pages.max(1);
        anyhow::bail!("Page {page} is out of range (1-{total_pages})");
    }
    print!("{}", format_listing(&store.view())?);
    Ok(())
}

fn cli_summary(filters: &FilterArgs, store: &mut TransactionStore) -> Result<()> {
    let filters = filters.to_filters();
    store.set_filters(filters);
    print!("{}", format_summary(&store.view(), &filters)?);
    Ok(())
}

pub(crate) fn format_listing(view: &TransactionView<'_>) -> Result<String, fmt::Error> {
    let page = view.page();
    if page.is_empty() {
        return Ok("No transactions found\n".to_string());
    }

    let mut out = String::new();
    writeln!(
        out,
        "{:<6} {:<12} {:<9} {:<15} {:>12}",
        "ID", "Date", "Type", "Category", "Amount"
    )?;
    writeln!(out, "{}", "─".repeat(58))?;
    for txn in page {
        let signed = txn.signed_amount();
        let sign = if txn.is_income() { "+" } else { "" };
        writeln!(
            out,
            "{:<6} {:<12} {:<9} {:<15} {:>12}",
            txn.id.to_string(),
            txn.date.format(DATE_FORMAT).to_string(),
            txn.kind.label(),
            txn.category.as_str(),
            format!("{sign}{}", format_amount(signed)),
        )?;
    }

    let pagination = view.pagination;
    if let Some((first, last)) = pagination.shown_range() {
        writeln!(out)?;
        writeln!(
            out,
            "Showing {first} to {last} of {} (page {} of {})",
            pagination.total_items, pagination.current_page, pagination.total_pages
        )?;
    }
    Ok(out)
}

pub(crate) fn format_summary(
    view: &TransactionView<'_>,
    filters: &TransactionFilters,
) -> Result<String, fmt::Error> {
    let summary = view.summary();
    let mut out = String::new();

    let scope = if filters.is_empty() {
        "all transactions".to_string()
    } else {
        describe_filters(filters)
    };
    writeln!(out, "Expense.Tracker: {scope}")?;
    writeln!(out, "{}", "─".repeat(40))?;
    writeln!(
        out,
        "  Total Income:   {:>12}  ({} txns)",
        format_amount(summary.total_income),
        summary.income_count
    )?;
    writeln!(
        out,
        "  Total Expenses: {:>12}  ({} txns)",
        format_amount(summary.total_expenses),
        summary.expense_count
    )?;
    writeln!(
        out,
        "  Total Balance:  {:>12}  ({} txns)",
        format_amount(summary.balance()),
        summary.income_count + summary.expense_count
    )?;
    Ok(out)
}

fn describe_filters(filters: &TransactionFilters) -> String {
    let mut parts = Vec::new();
    if let Some(category) = filters.category {
        parts.push(format!("category {category}"));
    }
    if let Some(range) = filters.date_range {
        if let Some(from) = range.from {
            parts.push(format!("from {}", from.format(DATE_FORMAT)));
        }
        if let Some(to) = range.to {
            parts.push(format!("to {}", to.format(DATE_FORMAT)));
        }
    }
    parts.join(", ")
}

pub(crate) fn format_categories() -> String {
    Category::all()
        .iter()
        .map(|c| format!("{c}\n"))
        .collect()
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
