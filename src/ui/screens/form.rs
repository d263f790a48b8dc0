use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::entry::Field;
use crate::ui::app::TransactionForm;
use crate::ui::render::centered;
use crate::ui::theme;

const LABEL_WIDTH: usize = 13;

pub(crate) fn render(f: &mut Frame, area: Rect, form: &TransactionForm) {
    let mut lines = vec![Line::from("")];

    for &field in Field::all() {
        let focused = field == form.focus;
        let value = form.draft.field(field);

        let label_style = if focused {
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            theme::dim_style()
        };

        let shown = match field {
            // Category is picked from the fixed list, not typed.
            Field::Category if value.is_empty() => "< select >".to_string(),
            Field::Category => format!("< {value} >"),
            _ if focused => format!("{value}_"),
            _ => value.to_string(),
        };

        let value_style = if focused {
            theme::selected_style()
        } else {
            theme::normal_style()
        };

        lines.push(Line::from(vec![
            Span::styled(format!("  {:<LABEL_WIDTH$}", field.label()), label_style),
            Span::styled(shown, value_style),
        ]));

        match form.errors.get(field) {
            Some(err) => lines.push(Line::from(Span::styled(
                format!("  {:LABEL_WIDTH$}{err}", ""),
                theme::over_budget_style(),
            ))),
            None => lines.push(Line::from("")),
        }
    }

    lines.push(Line::from(Span::styled(
        "  Enter save | Esc cancel",
        theme::dim_style(),
    )));

    let height = (lines.len() as u16 + 2).min(area.height);
    let width = 64.min(area.width.saturating_sub(4));
    let popup = centered(area, width, height);

    f.render_widget(Clear, popup);
    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .title(Span::styled(form.title(), theme::title_style()))
            .style(Style::default().bg(theme::HEADER_BG)),
    );
    f.render_widget(widget, popup);
}
