use std::collections::HashMap;
use std::sync::LazyLock;

use super::app::App;
use super::util::parse_day;
use crate::models::Category;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit Expense.Tracker", cmd_quit, r);
    register_command!("quit", "Quit Expense.Tracker", cmd_quit, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!("new", "Create a transaction", cmd_new, r);
    register_command!("n", "Create a transaction", cmd_new, r);
    register_command!("edit", "Edit the selected transaction", cmd_edit, r);
    register_command!("e", "Edit the selected transaction", cmd_edit, r);
    register_command!(
        "category",
        "Filter by category (e.g. :category food, :category all)",
        cmd_category,
        r
    );
    register_command!(
        "cat",
        "Filter by category (e.g. :cat food)",
        cmd_category,
        r
    );
    register_command!(
        "from",
        "Show transactions on or after a day (e.g. :from 2025-11-01)",
        cmd_from,
        r
    );
    register_command!(
        "to",
        "Show transactions on or before a day (e.g. :to 2025-11-15)",
        cmd_to,
        r
    );
    register_command!("clear", "Clear all filters", cmd_clear, r);
    register_command!("page", "Go to page (e.g. :page 2)", cmd_page, r);
    register_command!("p", "Go to page (e.g. :p 2)", cmd_page, r);
    register_command!("next", "Go to next page", cmd_next, r);
    register_command!("prev", "Go to previous page", cmd_prev, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| (levenshtein(input, k), **k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_new(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.open_create_dialog();
    Ok(())
}

fn cmd_edit(_args: &str, app: &mut App) -> anyhow::Result<()> {
    if app.selected().is_some() {
        app.open_edit_dialog();
    } else {
        app.set_status("No transaction selected");
    }
    Ok(())
}

fn cmd_category(args: &str, app: &mut App) -> anyhow::Result<()> {
    if args.is_empty() || args.eq_ignore_ascii_case("all") {
        app.set_category_filter(None);
        return Ok(());
    }

    match Category::parse(args) {
        Some(category) => app.set_category_filter(Some(category)),
        None => {
            let names: Vec<&str> = Category::all().iter().map(|c| c.as_str()).collect();
            app.set_status(format!(
                "Unknown category '{args}'. Use one of: all, {}",
                names.join(", ")
            ));
        }
    }
    Ok(())
}

fn cmd_from(args: &str, app: &mut App) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_from(None);
        return Ok(());
    }
    match parse_day(args) {
        Some(day) => app.set_from(Some(day)),
        None => app.set_status("Invalid date. Use YYYY-MM-DD (e.g. 2025-11-01)"),
    }
    Ok(())
}

fn cmd_to(args: &str, app: &mut App) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_to(None);
        return Ok(());
    }
    match parse_day(args) {
        Some(day) => app.set_to(Some(day)),
        None => app.set_status("Invalid date. Use YYYY-MM-DD (e.g. 2025-11-15)"),
    }
    Ok(())
}

fn cmd_clear(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.clear_filters();
    app.set_status("Filters cleared");
    Ok(())
}

fn cmd_page(args: &str, app: &mut App) -> anyhow::Result<()> {
    match args.parse::<usize>() {
        Ok(page) => app.go_to_page(page),
        Err(_) => app.set_status("Usage: :page <number>"),
    }
    Ok(())
}

fn cmd_next(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.next_page();
    Ok(())
}

fn cmd_prev(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.previous_page();
    Ok(())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod commands_tests;
