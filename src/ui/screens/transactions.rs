use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};
use rust_decimal::Decimal;

use crate::models::{Transaction, TransactionFilters};
use crate::store::{Pagination, Summary};
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, page_indicators, PageIndicator, DATE_FORMAT};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let view = app.store.view();
    let pagination = view.pagination;
    let footer_height = if pagination.total_pages > 1 { 3 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),             // Summary cards
            Constraint::Length(1),             // Active filters
            Constraint::Min(5),                // Table
            Constraint::Length(footer_height), // Pagination
        ])
        .split(area);

    render_summary_cards(f, chunks[0], &view.summary());
    render_filters(f, chunks[1], app.store.filters());
    render_table(f, chunks[2], view.page(), app.cursor, &pagination);
    if pagination.total_pages > 1 {
        render_pagination(f, chunks[3], &pagination);
    }
}

fn render_summary_cards(f: &mut Frame, area: Rect, summary: &Summary) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let balance = summary.balance();
    render_card(
        f,
        cards[0],
        "Total Income",
        summary.total_income,
        theme::GREEN,
        count_label(summary.income_count),
    );
    render_card(
        f,
        cards[1],
        "Total Expenses",
        summary.total_expenses,
        theme::RED,
        count_label(summary.expense_count),
    );
    render_card(
        f,
        cards[2],
        "Total Balance",
        balance,
        if balance > Decimal::ZERO {
            theme::GREEN
        } else {
            theme::RED
        },
        count_label(summary.income_count + summary.expense_count),
    );
}

fn count_label(count: usize) -> String {
    format!("{count} transaction{}", if count == 1 { "" } else { "s" })
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    title: &str,
    amount: Decimal,
    color: Color,
    subtitle: String,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format_amount(amount),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle, theme::dim_style())),
    ])
    .centered()
    .block(block);

    f.render_widget(text, area);
}

fn render_filters(f: &mut Frame, area: Rect, filters: &TransactionFilters) {
    let category = filters
        .category
        .map_or_else(|| "all".to_string(), |c| c.to_string());
    let range = filters.date_range.unwrap_or_default();
    let day = |d: Option<chrono::NaiveDate>| {
        d.map_or_else(|| "any".to_string(), |d| d.format(DATE_FORMAT).to_string())
    };

    let mut spans = vec![
        Span::styled(" Category: ", theme::dim_style()),
        Span::styled(category, Style::default().fg(theme::ACCENT)),
        Span::styled("   From: ", theme::dim_style()),
        Span::styled(day(range.from), Style::default().fg(theme::ACCENT)),
        Span::styled("   To: ", theme::dim_style()),
        Span::styled(day(range.to), Style::default().fg(theme::ACCENT)),
    ];
    if !filters.is_empty() {
        spans.push(Span::styled("   (:clear to reset)", theme::dim_style()));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_table(
    f: &mut Frame,
    area: Rect,
    page: &[&Transaction],
    cursor: usize,
    pagination: &Pagination,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            format!(" Transactions ({}) ", pagination.total_items),
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));

    if page.is_empty() {
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled("No transactions found", theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Press n to add one, or :clear to reset the filters",
                theme::dim_style(),
            )),
        ];
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let header_cells = ["Date", "Type", "Category", "Amount"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = page
        .iter()
        .enumerate()
        .map(|(i, txn)| {
            let amount_style = if txn.is_expense() {
                theme::expense_style()
            } else {
                theme::income_style()
            };
            let signed = txn.signed_amount();
            let sign = if signed > Decimal::ZERO { "+" } else { "" };
            let amount_str = format!("{sign}{}", format_amount(signed));

            let style = if i == cursor {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            Row::new(vec![
                Cell::from(txn.date.format(DATE_FORMAT).to_string()),
                Cell::from(txn.kind.label()),
                Cell::from(txn.category.as_str()),
                Cell::from(Span::styled(amount_str, amount_style)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Length(10),
        Constraint::Min(14),
        Constraint::Length(14),
    ];

    f.render_widget(Table::new(rows, widths).header(header).block(block), area);
}

fn render_pagination(f: &mut Frame, area: Rect, pagination: &Pagination) {
    let showing = match pagination.shown_range() {
        Some((first, last)) => format!(
            "Showing {first} to {last} of {}",
            pagination.total_items
        ),
        None => String::new(),
    };

    let nav_style = |enabled: bool| {
        if enabled {
            Style::default().fg(theme::ACCENT)
        } else {
            Style::default().fg(theme::OVERLAY)
        }
    };

    let mut spans = vec![Span::styled(
        "[ Previous ",
        nav_style(pagination.has_previous_page()),
    )];
    for indicator in page_indicators(pagination.current_page, pagination.total_pages) {
        spans.push(match indicator {
            PageIndicator::Page(n) => Span::styled(format!(" {n} "), theme::normal_style()),
            PageIndicator::Current(n) => Span::styled(format!(" {n} "), theme::selected_style()),
            PageIndicator::Ellipsis => Span::styled(" … ", theme::dim_style()),
        });
    }
    spans.push(Span::styled(
        " Next ]",
        nav_style(pagination.has_next_page()),
    ));

    let footer = Paragraph::new(vec![
        Line::from(Span::styled(showing, theme::dim_style())),
        Line::from(spans),
    ])
    .centered()
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(theme::OVERLAY)),
    );
    f.render_widget(footer, area);
}
