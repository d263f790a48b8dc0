use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{bar_value, format_amount, percent_of, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_monthly_chart(f, chunks[0], app);
    render_category_chart(f, chunks[1], app);
}

fn chart_block(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(format!(" {title} "), theme::title_style()))
}

fn render_empty(f: &mut Frame, area: Rect, title: &str) {
    let msg = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "No transactions yet. Press a to add one",
            theme::dim_style(),
        )),
    ])
    .centered()
    .block(chart_block(title));
    f.render_widget(msg, area);
}

fn render_monthly_chart(f: &mut Frame, area: Rect, app: &App) {
    const TITLE: &str = "Monthly Expenses";

    if app.derived.monthly_totals.is_empty() {
        render_empty(f, area, TITLE);
        return;
    }

    let bars: Vec<Bar> = app
        .derived
        .monthly_totals
        .iter()
        .map(|m| {
            Bar::default()
                .value(bar_value(m.total))
                .text_value(format_amount(m.total, &app.currency))
                .label(Line::from(m.month.clone()))
                .style(Style::default().fg(theme::MONTHLY))
                .value_style(
                    Style::default()
                        .fg(theme::HEADER_BG)
                        .bg(theme::MONTHLY)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(chart_block(TITLE))
        .data(BarGroup::default().bars(&bars))
        .bar_width(12)
        .bar_gap(2)
        .bar_style(Style::default().fg(theme::MONTHLY));

    f.render_widget(chart, area);
}

fn render_category_chart(f: &mut Frame, area: Rect, app: &App) {
    const TITLE: &str = "Expenses by Category";

    if app.derived.category_totals.is_empty() {
        render_empty(f, area, TITLE);
        return;
    }

    let total = app.derived.grand_total;
    let bars: Vec<Bar> = app
        .derived
        .category_totals
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let color = theme::chart_color(i);
            Bar::default()
                .value(bar_value(c.value))
                .text_value(format!(
                    "{} ({})",
                    format_amount(c.value, &app.currency),
                    percent_of(c.value, total)
                ))
                .label(Line::from(truncate(&c.name, 22)))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(theme::HEADER_BG).bg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(chart_block(TITLE))
        .direction(Direction::Horizontal)
        .data(BarGroup::default().bars(&bars))
        .bar_width(1)
        .bar_gap(0);

    f.render_widget(chart, area);
}
