use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::models::{Category, Transaction, TransactionId, TransactionType};
use crate::ui::util::{parse_day, DATE_FORMAT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DialogField {
    Date,
    Amount,
    Type,
    Category,
}

impl DialogField {
    pub(crate) fn all() -> &'static [DialogField] {
        &[Self::Date, Self::Amount, Self::Type, Self::Category]
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::Amount => "Amount",
            Self::Type => "Type",
            Self::Category => "Category",
        }
    }

    pub(crate) fn is_select(&self) -> bool {
        matches!(self, Self::Type | Self::Category)
    }

    fn next(self) -> Self {
        match self {
            Self::Date => Self::Amount,
            Self::Amount => Self::Type,
            Self::Type => Self::Category,
            Self::Category => Self::Date,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Date => Self::Category,
            Self::Amount => Self::Date,
            Self::Type => Self::Amount,
            Self::Category => Self::Type,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DialogMode {
    Create,
    /// `original` is the stored timestamp, kept when the day is not changed.
    Edit {
        id: TransactionId,
        original: NaiveDateTime,
    },
}

/// Raw form input. Every field must be present before anything is saved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct TransactionDraft {
    pub(crate) date: String,
    pub(crate) amount: String,
    pub(crate) kind: Option<TransactionType>,
    pub(crate) category: Option<Category>,
}

impl TransactionDraft {
    pub(crate) fn from_transaction(txn: &Transaction) -> Self {
        Self {
            date: txn.day().format(DATE_FORMAT).to_string(),
            amount: txn.amount.normalize().to_string(),
            kind: Some(txn.kind),
            category: Some(txn.category),
        }
    }

    /// Parse the draft into a transaction, or `None` when any field is
    /// missing or unusable. A zero amount counts as missing, as does one
    /// above [`MAX_AMOUNT`](crate::models::MAX_AMOUNT) or with fractions of a cent.
    pub(crate) fn build(
        &self,
        id: TransactionId,
        original: Option<NaiveDateTime>,
    ) -> Option<Transaction> {
        let day = parse_day(&self.date)?;
        let amount = Decimal::from_str(self.amount.trim()).ok()?;
        if !Transaction::amount_in_range(amount) {
            return None;
        }
        let kind = self.kind?;
        let category = self.category?;

        let date = match original {
            Some(ts) if ts.date() == day => ts,
            _ => day.and_hms_opt(0, 0, 0)?,
        };
        Some(Transaction::new(id, date, amount, kind, category))
    }

    pub(crate) fn is_complete(&self) -> bool {
        self.build(TransactionId(0), None).is_some()
    }
}

#[derive(Debug, Clone)]
pub(crate) struct TransactionDialog {
    pub(crate) mode: DialogMode,
    pub(crate) draft: TransactionDraft,
    pub(crate) focus: DialogField,
}

impl TransactionDialog {
    pub(crate) fn create() -> Self {
        Self {
            mode: DialogMode::Create,
            draft: TransactionDraft::default(),
            focus: DialogField::Date,
        }
    }

    pub(crate) fn edit(txn: &Transaction) -> Self {
        Self {
            mode: DialogMode::Edit {
                id: txn.id,
                original: txn.date,
            },
            draft: TransactionDraft::from_transaction(txn),
            focus: DialogField::Date,
        }
    }

    pub(crate) fn title(&self) -> &'static str {
        match self.mode {
            DialogMode::Create => "Create Transaction",
            DialogMode::Edit { .. } => "Edit Transaction",
        }
    }

    pub(crate) fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub(crate) fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Type into the focused text field. Characters that cannot belong to
    /// a date or an amount are dropped.
    pub(crate) fn input_char(&mut self, c: char) {
        match self.focus {
            DialogField::Date if c.is_ascii_digit() || c == '-' => {
                if self.draft.date.len() < 10 {
                    self.draft.date.push(c);
                }
            }
            DialogField::Amount if c.is_ascii_digit() || c == '.' => {
                self.draft.amount.push(c);
            }
            DialogField::Type => match c.to_ascii_lowercase() {
                'i' => self.draft.kind = Some(TransactionType::Income),
                'e' => self.draft.kind = Some(TransactionType::Expense),
                _ => {}
            },
            _ => {}
        }
    }

    pub(crate) fn backspace(&mut self) {
        match self.focus {
            DialogField::Date => {
                self.draft.date.pop();
            }
            DialogField::Amount => {
                self.draft.amount.pop();
            }
            DialogField::Type => self.draft.kind = None,
            DialogField::Category => self.draft.category = None,
        }
    }

    /// Step the focused select field through its options.
    pub(crate) fn cycle(&mut self, delta: i32) {
        match self.focus {
            DialogField::Type => {
                self.draft.kind = cycle_option(TransactionType::all(), self.draft.kind, delta);
            }
            DialogField::Category => {
                self.draft.category = cycle_option(Category::all(), self.draft.category, delta);
            }
            DialogField::Date | DialogField::Amount => {}
        }
    }

    pub(crate) fn field_value(&self, field: DialogField) -> String {
        match field {
            DialogField::Date => self.draft.date.clone(),
            DialogField::Amount => self.draft.amount.clone(),
            DialogField::Type => self
                .draft
                .kind
                .map(|k| k.label().to_string())
                .unwrap_or_default(),
            DialogField::Category => self
                .draft
                .category
                .map(|c| c.to_string())
                .unwrap_or_default(),
        }
    }
}

/// Move `current` by `delta` through `options`, wrapping at both ends.
/// An empty selection starts at the first (forward) or last (backward) option.
pub(crate) fn cycle_option<T: Copy + PartialEq>(
    options: &[T],
    current: Option<T>,
    delta: i32,
) -> Option<T> {
    if options.is_empty() {
        return None;
    }
    let len = options.len() as i64;
    let idx = match current.and_then(|c| options.iter().position(|o| *o == c)) {
        Some(i) => (i as i64 + i64::from(delta)).rem_euclid(len),
        None if delta >= 0 => 0,
        None => len - 1,
    };
    options.get(idx as usize).copied()
}

#[cfg(test)]
#[path = "dialog_tests.rs"]
mod dialog_tests;
