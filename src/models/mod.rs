mod filters;
mod transaction;

pub(crate) use filters::{DateRange, TransactionFilters};
pub(crate) use transaction::{
    Category, Transaction, TransactionId, TransactionType, MAX_AMOUNT,
};

#[cfg(test)]
mod tests;
