//! The transaction store: sole owner of the canonical transaction list and
//! the current page. All mutation goes through `add`, `update`,
//! `set_filters` and the page navigation methods; everything else reads a
//! [`TransactionView`] recomputed from the current state.

mod error;
mod query;
mod seed;
mod summary;

pub(crate) use error::{StoreError, UpdateOutcome};
pub(crate) use query::{Pagination, TransactionView, ITEMS_PER_PAGE};
pub(crate) use summary::Summary;

use crate::models::{Transaction, TransactionFilters, TransactionId};

#[derive(Debug)]
pub(crate) struct TransactionStore {
    /// Canonical list in insertion order. Presentation order is always derived.
    transactions: Vec<Transaction>,
    filters: TransactionFilters,
    current_page: usize,
    items_per_page: usize,
    /// Strictly greater than every id the store has seen.
    next_id: u64,
}

impl Default for TransactionStore {
    fn default() -> Self {
        Self::new(ITEMS_PER_PAGE)
    }
}

impl TransactionStore {
    pub(crate) fn new(items_per_page: usize) -> Self {
        Self {
            transactions: Vec::new(),
            filters: TransactionFilters::default(),
            current_page: 1,
            items_per_page: items_per_page.max(1),
            next_id: 1,
        }
    }

    /// A store pre-loaded with the example dataset.
    pub(crate) fn with_examples(items_per_page: usize) -> Self {
        let mut store = Self::new(items_per_page);
        for (date, amount, kind, category) in seed::example_rows() {
            let Ok(id) = store.next_id() else {
                break;
            };
            store
                .transactions
                .push(Transaction::new(id, date, amount, kind, category));
        }
        tracing::debug!(count = store.transactions.len(), "seeded example transactions");
        store
    }

    /// Hand out a fresh id that no record has used.
    pub(crate) fn next_id(&mut self) -> Result<TransactionId, StoreError> {
        if self.next_id == u64::MAX {
            tracing::warn!("transaction id space exhausted");
            return Err(StoreError::IdSpaceExhausted);
        }
        let id = TransactionId(self.next_id);
        self.next_id += 1;
        Ok(id)
    }

    /// Append `txn` to the canonical list and return to the first page.
    pub(crate) fn add(&mut self, txn: Transaction) -> Result<(), StoreError> {
        if txn.id.0 == u64::MAX {
            tracing::warn!(id = %txn.id, "rejected transaction with reserved id");
            return Err(StoreError::InvalidId(txn.id));
        }
        if self.get(txn.id).is_some() {
            tracing::warn!(id = %txn.id, "rejected transaction with duplicate id");
            return Err(StoreError::DuplicateId(txn.id));
        }
        check_amount(&txn)?;
        self.next_id = self.next_id.max(txn.id.0 + 1);
        tracing::debug!(
            id = %txn.id,
            kind = %txn.kind,
            category = %txn.category,
            amount = %txn.amount,
            "added transaction"
        );
        self.transactions.push(txn);
        self.current_page = 1;
        Ok(())
    }

    /// Replace the record whose id matches `txn.id`, in place.
    pub(crate) fn update(&mut self, txn: Transaction) -> Result<UpdateOutcome, StoreError> {
        check_amount(&txn)?;
        let Some(slot) = self.transactions.iter_mut().find(|t| t.id == txn.id) else {
            tracing::debug!(id = %txn.id, "update ignored, no such transaction");
            return Ok(UpdateOutcome::NotFound);
        };
        tracing::debug!(id = %txn.id, "updated transaction");
        *slot = txn;
        // The edit may have moved the record out of the filtered set.
        self.current_page = self.current_page.clamp(1, self.total_pages().max(1));
        Ok(UpdateOutcome::Replaced)
    }

    /// Swap in new filter criteria. Returns to the first page when they differ.
    pub(crate) fn set_filters(&mut self, filters: TransactionFilters) -> bool {
        if self.filters == filters {
            return false;
        }
        tracing::debug!(?filters, "filters changed");
        self.filters = filters;
        self.current_page = 1;
        true
    }

    pub(crate) fn filters(&self) -> &TransactionFilters {
        &self.filters
    }

    pub(crate) fn go_to_page(&mut self, page: usize) -> bool {
        if page < 1 || page > self.total_pages() || page == self.current_page {
            return false;
        }
        tracing::debug!(page, "moved to page");
        self.current_page = page;
        true
    }

    pub(crate) fn next_page(&mut self) -> bool {
        self.go_to_page(self.current_page + 1)
    }

    pub(crate) fn previous_page(&mut self) -> bool {
        self.go_to_page(self.current_page.saturating_sub(1))
    }

    pub(crate) fn current_page(&self) -> usize {
        self.current_page
    }

    pub(crate) fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub(crate) fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// The canonical list, in insertion order.
    #[cfg(test)]
    pub(crate) fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub(crate) fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Recompute the filtered, sorted and paginated view.
    pub(crate) fn view(&self) -> TransactionView<'_> {
        TransactionView::build(
            &self.transactions,
            &self.filters,
            self.current_page,
            self.items_per_page,
        )
    }

    fn total_pages(&self) -> usize {
        let matching = self
            .transactions
            .iter()
            .filter(|t| self.filters.matches(t))
            .count();
        query::total_pages(matching, self.items_per_page)
    }
}

fn check_amount(txn: &Transaction) -> Result<(), StoreError> {
    if Transaction::amount_in_range(txn.amount) {
        return Ok(());
    }
    tracing::warn!(id = %txn.id, amount = %txn.amount, "rejected transaction amount");
    Err(StoreError::AmountOutOfRange(txn.amount))
}


#[cfg(test)]
#[path = "query_tests.rs"]
mod query_tests;
