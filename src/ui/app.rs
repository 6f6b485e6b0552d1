use chrono::NaiveDate;

use crate::models::{Category, Transaction, TransactionFilters};
use crate::store::{TransactionStore, UpdateOutcome};
use crate::ui::dialog::{cycle_option, DialogMode, TransactionDialog};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Dialog,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Dialog => write!(f, "EDIT"),
        }
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    pub(crate) store: TransactionStore,
    /// Row of the highlighted transaction within the current page.
    pub(crate) cursor: usize,
    pub(crate) dialog: Option<TransactionDialog>,
}

impl App {
    pub(crate) fn new(store: TransactionStore) -> Self {
        Self {
            running: true,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,
            store,
            cursor: 0,
            dialog: None,
        }
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }

    fn page_len(&self) -> usize {
        self.store.view().page().len()
    }

    pub(crate) fn selected(&self) -> Option<Transaction> {
        self.store
            .view()
            .page()
            .get(self.cursor)
            .map(|t| (*t).clone())
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.page_len().saturating_sub(1));
    }

    // ── Cursor ───────────────────────────────────────────────

    pub(crate) fn move_down(&mut self) {
        if self.cursor + 1 < self.page_len() {
            self.cursor += 1;
        }
    }

    pub(crate) fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub(crate) fn move_to_top(&mut self) {
        self.cursor = 0;
    }

    pub(crate) fn move_to_bottom(&mut self) {
        self.cursor = self.page_len().saturating_sub(1);
    }

    // ── Pages ────────────────────────────────────────────────

    pub(crate) fn next_page(&mut self) {
        if self.store.next_page() {
            self.cursor = 0;
        }
    }

    pub(crate) fn previous_page(&mut self) {
        if self.store.previous_page() {
            self.cursor = 0;
        }
    }

    pub(crate) fn go_to_page(&mut self, page: usize) {
        if self.store.go_to_page(page) {
            self.cursor = 0;
        }
    }

    // ── Filters ──────────────────────────────────────────────

    pub(crate) fn apply_filters(&mut self, filters: TransactionFilters) {
        if self.store.set_filters(filters) {
            self.cursor = 0;
            let count = self.store.view().all().len();
            self.set_status(format!(
                "{count} matching transaction{}",
                if count == 1 { "" } else { "s" }
            ));
        }
    }

    pub(crate) fn set_category_filter(&mut self, category: Option<Category>) {
        let filters = self.store.filters().with_category(category);
        self.apply_filters(filters);
    }

    /// all → food → transport → … → entertainment → all
    pub(crate) fn cycle_category_filter(&mut self) {
        let next = match self.store.filters().category {
            Some(c) if Category::all().last() == Some(&c) => None,
            current => cycle_option(Category::all(), current, 1),
        };
        self.set_category_filter(next);
    }

    pub(crate) fn set_from(&mut self, from: Option<NaiveDate>) {
        let filters = self.store.filters().with_from(from);
        self.apply_filters(filters);
    }

    pub(crate) fn set_to(&mut self, to: Option<NaiveDate>) {
        let filters = self.store.filters().with_to(to);
        self.apply_filters(filters);
    }

    pub(crate) fn clear_filters(&mut self) {
        self.apply_filters(TransactionFilters::default());
    }

    // ── Dialog ───────────────────────────────────────────────

    pub(crate) fn open_create_dialog(&mut self) {
        self.dialog = Some(TransactionDialog::create());
        self.input_mode = InputMode::Dialog;
    }

    pub(crate) fn open_edit_dialog(&mut self) {
        if let Some(txn) = self.selected() {
            self.dialog = Some(TransactionDialog::edit(&txn));
            self.input_mode = InputMode::Dialog;
        }
    }

    pub(crate) fn close_dialog(&mut self) {
        self.dialog = None;
        self.input_mode = InputMode::Normal;
    }

    /// Commit the open dialog. An incomplete form is left open and nothing
    /// is saved.
    pub(crate) fn save_dialog(&mut self) {
        let Some(dialog) = self.dialog.as_ref() else {
            return;
        };
        let (mode, draft) = (dialog.mode, dialog.draft.clone());
        if !draft.is_complete() {
            return;
        }

        match mode {
            DialogMode::Create => {
                let id = match self.store.next_id() {
                    Ok(id) => id,
                    Err(e) => {
                        self.set_status(format!("Transaction not saved: {e}"));
                        self.close_dialog();
                        return;
                    }
                };
                let Some(txn) = draft.build(id, None) else {
                    return;
                };
                match self.store.add(txn) {
                    Ok(()) => {
                        self.cursor = 0;
                        self.set_status(format!("Created transaction {id}"));
                    }
                    Err(e) => {
                        self.set_status(format!("Transaction {id} not saved: {e}"));
                    }
                }
            }
            DialogMode::Edit { id, original } => {
                let Some(txn) = draft.build(id, Some(original)) else {
                    return;
                };
                match self.store.update(txn) {
                    Ok(UpdateOutcome::Replaced) => {
                        self.set_status(format!("Updated transaction {id}"));
                    }
                    Ok(UpdateOutcome::NotFound) => {}
                    Err(e) => {
                        self.set_status(format!("Transaction {id} not saved: {e}"));
                    }
                }
                self.clamp_cursor();
            }
        }
        self.close_dialog();
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod app_tests;
