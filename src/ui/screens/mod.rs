pub(crate) mod dialog;
pub(crate) mod transactions;
