//! Pure filter → sort → paginate pipeline over a snapshot of the canonical list.

use crate::models::{Transaction, TransactionFilters};

use super::Summary;

/// Default number of transactions shown per page.
pub(crate) const ITEMS_PER_PAGE: usize = 10;

/// Keep the transactions that satisfy every criterion in `filters`,
/// preserving canonical order.
pub(crate) fn apply_filters<'a>(
    transactions: &'a [Transaction],
    filters: &TransactionFilters,
) -> Vec<&'a Transaction> {
    transactions.iter().filter(|t| filters.matches(t)).collect()
}

/// Most recent first. The sort is stable, so equal timestamps keep
/// canonical (insertion) order.
pub(crate) fn sort_by_date_desc(transactions: &mut [&Transaction]) {
    transactions.sort_by(|a, b| b.date.cmp(&a.date));
}

pub(crate) fn filter_and_sort<'a>(
    transactions: &'a [Transaction],
    filters: &TransactionFilters,
) -> Vec<&'a Transaction> {
    let mut matched = apply_filters(transactions, filters);
    sort_by_date_desc(&mut matched);
    matched
}

pub(crate) fn total_pages(total_items: usize, items_per_page: usize) -> usize {
    total_items.div_ceil(items_per_page.max(1))
}

/// Slice out 1-based `page`. Out-of-range pages yield an empty slice.
pub(crate) fn paginate<T>(items: &[T], page: usize, items_per_page: usize) -> &[T] {
    let per_page = items_per_page.max(1);
    let start = page.saturating_sub(1).saturating_mul(per_page);
    if page == 0 || start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(per_page).min(items.len());
    &items[start..end]
}

/// Pagination metadata for one rendering of the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Pagination {
    pub(crate) current_page: usize,
    pub(crate) total_pages: usize,
    pub(crate) total_items: usize,
    pub(crate) items_per_page: usize,
}

impl Pagination {
    /// Build metadata, clamping `requested_page` into `[1, max(total_pages, 1)]`.
    pub(crate) fn new(requested_page: usize, total_items: usize, items_per_page: usize) -> Self {
        let items_per_page = items_per_page.max(1);
        let total_pages = total_pages(total_items, items_per_page);
        Self {
            current_page: requested_page.clamp(1, total_pages.max(1)),
            total_pages,
            total_items,
            items_per_page,
        }
    }

    pub(crate) fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub(crate) fn has_previous_page(&self) -> bool {
        self.current_page > 1
    }

    /// 1-based positions of the first and last item on the current page,
    /// or `None` when there is nothing to show.
    pub(crate) fn shown_range(&self) -> Option<(usize, usize)> {
        if self.total_items == 0 {
            return None;
        }
        let first = (self.current_page - 1) * self.items_per_page + 1;
        let last = (self.current_page * self.items_per_page).min(self.total_items);
        Some((first, last))
    }
}

/// Derived output of the store for its current filters and page.
#[derive(Debug)]
pub(crate) struct TransactionView<'a> {
    sorted: Vec<&'a Transaction>,
    pub(crate) pagination: Pagination,
}

impl<'a> TransactionView<'a> {
    pub(crate) fn build(
        transactions: &'a [Transaction],
        filters: &TransactionFilters,
        current_page: usize,
        items_per_page: usize,
    ) -> Self {
        let sorted = filter_and_sort(transactions, filters);
        let pagination = Pagination::new(current_page, sorted.len(), items_per_page);
        Self { sorted, pagination }
    }

    /// Transactions on the current page.
    pub(crate) fn page(&self) -> &[&'a Transaction] {
        paginate(
            &self.sorted,
            self.pagination.current_page,
            self.pagination.items_per_page,
        )
    }

    /// Every transaction matching the filters, most recent first.
    pub(crate) fn all(&self) -> &[&'a Transaction] {
        &self.sorted
    }

    /// Totals over the full filtered set, not just the current page.
    pub(crate) fn summary(&self) -> Summary {
        Summary::of(self.sorted.iter().copied())
    }
}
