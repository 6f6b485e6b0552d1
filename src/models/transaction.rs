use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

/// Largest amount a single transaction may carry: one trillion.
pub(crate) const MAX_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

/// Amounts are whole cents.
const AMOUNT_SCALE: u32 = 2;

/// Opaque identifier of a transaction. Never reused within a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct TransactionId(pub(crate) u64);

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    pub(crate) fn all() -> &'static [TransactionType] {
        &[Self::Income, Self::Expense]
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Category {
    Food,
    Transport,
    Housing,
    Utilities,
    Entertainment,
}

impl Category {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Housing => "housing",
            Self::Utilities => "utilities",
            Self::Entertainment => "entertainment",
        }
    }

    pub(crate) fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "food" => Some(Self::Food),
            "transport" => Some(Self::Transport),
            "housing" => Some(Self::Housing),
            "utilities" => Some(Self::Utilities),
            "entertainment" => Some(Self::Entertainment),
            _ => None,
        }
    }

    pub(crate) fn all() -> &'static [Category] {
        &[
            Self::Food,
            Self::Transport,
            Self::Housing,
            Self::Utilities,
            Self::Entertainment,
        ]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single income or expense record.
///
/// Records are replaced whole on update; there are no partial patches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Transaction {
    pub(crate) id: TransactionId,
    /// Any time-of-day component is ignored when filtering.
    pub(crate) date: NaiveDateTime,
    /// Non-negative magnitude; the sign comes from `kind`.
    pub(crate) amount: Decimal,
    pub(crate) kind: TransactionType,
    pub(crate) category: Category,
}

impl Transaction {
    pub(crate) fn new(
        id: TransactionId,
        date: NaiveDateTime,
        amount: Decimal,
        kind: TransactionType,
        category: Category,
    ) -> Self {
        Self {
            id,
            date,
            amount,
            kind,
            category,
        }
    }

    /// Strictly positive, at most [`MAX_AMOUNT`] and no finer than a cent.
    pub(crate) fn amount_in_range(amount: Decimal) -> bool {
        amount > Decimal::ZERO
            && amount <= MAX_AMOUNT
            && amount.normalize().scale() <= AMOUNT_SCALE
    }

    /// Calendar day of the transaction.
    pub(crate) fn day(&self) -> NaiveDate {
        self.date.date()
    }

    pub(crate) fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub(crate) fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// Amount with the sign implied by the transaction type.
    pub(crate) fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }
}
