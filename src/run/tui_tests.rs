#![allow(clippy::unwrap_used)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rust_decimal_macros::dec;

use super::*;
use crate::models::Category;

fn press(app: &mut App, code: KeyCode) {
    handle_key(KeyEvent::new(code, KeyModifiers::NONE), app).unwrap();
}

fn type_str(app: &mut App, s: &str) {
    for c in s.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn seeded_app() -> App {
    App::new(TransactionStore::with_examples(10))
}

// ── Normal mode ───────────────────────────────────────────────

#[test]
fn test_page_keys() {
    let mut app = seeded_app();
    press(&mut app, KeyCode::Char(']'));
    press(&mut app, KeyCode::Right);
    assert_eq!(app.store.current_page(), 3);
    press(&mut app, KeyCode::Char('l'));
    assert_eq!(app.store.current_page(), 3);
    press(&mut app, KeyCode::Char('['));
    assert_eq!(app.store.current_page(), 2);
}

#[test]
fn test_filter_keys() {
    let mut app = seeded_app();
    press(&mut app, KeyCode::Char('f'));
    assert_eq!(app.store.filters().category, Some(Category::Food));
    press(&mut app, KeyCode::Char('x'));
    assert!(app.store.filters().is_empty());
}

#[test]
fn test_ctrl_q_quits() {
    let mut app = seeded_app();
    handle_key(
        KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
        &mut app,
    )
    .unwrap();
    assert!(!app.running);
}

#[test]
fn test_help_swallows_next_key() {
    let mut app = seeded_app();
    press(&mut app, KeyCode::Char('?'));
    assert!(app.show_help);
    press(&mut app, KeyCode::Char('n'));
    assert!(!app.show_help);
    assert!(app.dialog.is_none());
}

// ── Command mode ──────────────────────────────────────────────

#[test]
fn test_command_line_runs_on_enter() {
    let mut app = seeded_app();
    press(&mut app, KeyCode::Char(':'));
    assert_eq!(app.input_mode, InputMode::Command);
    type_str(&mut app, "cat housing");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.input_mode, InputMode::Normal);
    assert!(app.command_input.is_empty());
    assert_eq!(app.store.filters().category, Some(Category::Housing));
}

#[test]
fn test_backspace_on_empty_command_leaves_mode() {
    let mut app = seeded_app();
    press(&mut app, KeyCode::Char(':'));
    type_str(&mut app, "q");
    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert!(app.running);
}

// ── Dialog ────────────────────────────────────────────────────

#[test]
fn test_create_through_keys() {
    let mut app = seeded_app();
    press(&mut app, KeyCode::Char('n'));
    type_str(&mut app, "2025-12-02");
    press(&mut app, KeyCode::Tab);
    type_str(&mut app, "1500");
    press(&mut app, KeyCode::Tab);
    type_str(&mut app, "i");
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Enter);

    assert!(app.dialog.is_none());
    assert_eq!(app.store.len(), 26);
    let txn = app.selected().unwrap();
    assert_eq!(txn.amount, dec!(1500));
    assert!(txn.is_income());
    assert_eq!(txn.category, Category::Transport);
}

#[test]
fn test_enter_on_incomplete_dialog_keeps_it_open() {
    let mut app = seeded_app();
    press(&mut app, KeyCode::Char('n'));
    press(&mut app, KeyCode::Enter);
    assert!(app.dialog.is_some());
    assert_eq!(
        app.status_message,
        "Fill every field with a positive amount up to 1,000,000,000,000.00 to save"
    );

    press(&mut app, KeyCode::Esc);
    assert!(app.dialog.is_none());
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.store.len(), 25);
}

#[test]
fn test_edit_through_keys_keeps_id() {
    let mut app = seeded_app();
    let original = app.selected().unwrap();
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::BackTab);
    press(&mut app, KeyCode::Left);
    press(&mut app, KeyCode::Enter);

    let edited = app.store.get(original.id).unwrap();
    assert_eq!(edited.category, Category::Entertainment);
    assert_eq!(edited.amount, original.amount);
    assert_eq!(app.store.len(), 25);
}
