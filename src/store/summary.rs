use rust_decimal::Decimal;

use crate::models::{Transaction, TransactionType};

/// Income, expense and balance totals over a sequence of transactions.
/// Totals saturate at the `Decimal` limits instead of overflowing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Summary {
    pub(crate) total_income: Decimal,
    pub(crate) total_expenses: Decimal,
    pub(crate) income_count: usize,
    pub(crate) expense_count: usize,
}

impl Summary {
    pub(crate) fn of<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Self {
        transactions
            .into_iter()
            .fold(Self::default(), |mut acc, txn| {
                match txn.kind {
                    TransactionType::Income => {
                        acc.total_income = acc.total_income.saturating_add(txn.amount);
                        acc.income_count += 1;
                    }
                    TransactionType::Expense => {
                        acc.total_expenses = acc.total_expenses.saturating_add(txn.amount);
                        acc.expense_count += 1;
                    }
                }
                acc
            })
    }

    pub(crate) fn balance(&self) -> Decimal {
        self.total_income.saturating_sub(self.total_expenses)
    }
}
