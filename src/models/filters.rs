use chrono::NaiveDate;

use super::{Category, Transaction};

/// Inclusive calendar-day bounds. A missing bound leaves that side open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct DateRange {
    pub(crate) from: Option<NaiveDate>,
    pub(crate) to: Option<NaiveDate>,
}

impl DateRange {
    pub(crate) fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    pub(crate) fn contains(&self, day: NaiveDate) -> bool {
        self.from.is_none_or(|from| day >= from) && self.to.is_none_or(|to| day <= to)
    }

    pub(crate) fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }
}

/// Criteria narrowing which transactions are visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct TransactionFilters {
    pub(crate) category: Option<Category>,
    pub(crate) date_range: Option<DateRange>,
}

impl TransactionFilters {
    pub(crate) fn is_empty(&self) -> bool {
        self.category.is_none() && self.date_range.is_none_or(|range| range.is_unbounded())
    }

    pub(crate) fn matches(&self, txn: &Transaction) -> bool {
        if self.category.is_some_and(|category| txn.category != category) {
            return false;
        }
        self.date_range
            .is_none_or(|range| range.contains(txn.day()))
    }

    pub(crate) fn with_category(mut self, category: Option<Category>) -> Self {
        self.category = category;
        self
    }

    pub(crate) fn with_from(mut self, from: Option<NaiveDate>) -> Self {
        let range = self.date_range.unwrap_or_default();
        self.date_range = Some(DateRange::new(from, range.to));
        self
    }

    pub(crate) fn with_to(mut self, to: Option<NaiveDate>) -> Self {
        let range = self.date_range.unwrap_or_default();
        self.date_range = Some(DateRange::new(range.from, to));
        self
    }
}
