use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::dialog::{DialogField, TransactionDialog};
use crate::ui::theme;

/// Centered create/edit form drawn over the main screen.
pub(crate) fn render(f: &mut Frame, area: Rect, dialog: &TransactionDialog) {
    let mut lines = vec![Line::from("")];

    for &field in DialogField::all() {
        let focused = field == dialog.focus;
        let value = dialog.field_value(field);
        let shown = match (value.is_empty(), field.is_select()) {
            (true, true) => "< select >".to_string(),
            (true, false) => placeholder(field).to_string(),
            (false, true) if focused => format!("< {value} >"),
            (false, _) => value,
        };

        let label_style = if focused {
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            theme::dim_style()
        };
        let value_style = if focused {
            theme::selected_style()
        } else {
            theme::normal_style()
        };

        lines.push(Line::from(vec![
            Span::styled(format!("  {:<10}", field.label()), label_style),
            Span::styled(format!(" {shown:<24}"), value_style),
        ]));
        lines.push(Line::from(""));
    }

    let hint = if dialog.draft.is_complete() {
        Span::styled("  Enter save | Esc cancel", theme::dim_style())
    } else {
        Span::styled(
            "  Fill every field with a positive amount to save",
            Style::default().fg(theme::YELLOW),
        )
    };
    lines.push(Line::from(hint));
    lines.push(Line::from(Span::styled(
        "  Tab/Up/Down field | Left/Right choose",
        theme::dim_style(),
    )));

    let popup_height = (lines.len() as u16 + 2).min(area.height.saturating_sub(2));
    let popup_width = 56.min(area.width.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);
    let form = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .title(Span::styled(
                format!(" {} ", dialog.title()),
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(theme::HEADER_BG)),
    );
    f.render_widget(form, popup_area);
}

fn placeholder(field: DialogField) -> &'static str {
    match field {
        DialogField::Date => "YYYY-MM-DD",
        DialogField::Amount => "0.00",
        DialogField::Type | DialogField::Category => "",
    }
}
