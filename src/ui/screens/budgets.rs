use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, List, ListItem},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::summary::BudgetComparison;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{bar_value, format_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(app.derived.budget_vs_actual.len() as u16 + 2),
            Constraint::Min(6),
        ])
        .split(area);

    render_budget_list(f, chunks[0], app);
    render_comparison_chart(f, chunks[1], app);
}

fn render_budget_list(f: &mut Frame, area: Rect, app: &App) {
    let month_spend: Decimal = app
        .derived
        .current_month_actuals
        .iter()
        .fold(Decimal::ZERO, |acc, c| acc.saturating_add(c.value));

    let items: Vec<ListItem> = app
        .derived
        .budget_vs_actual
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let has_budget = app.ledger.budgets().get(row.category).is_some();
            let ratio = spend_ratio(row);

            let color = if row.is_overspent() {
                theme::RED
            } else if ratio > 0.7 {
                theme::YELLOW
            } else {
                theme::GREEN
            };

            let style = if i == app.budget_index {
                theme::selected_style()
            } else if i % 2 == 0 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            let budget_text = if has_budget {
                format_amount(row.budget, &app.currency)
            } else {
                "not set".to_string()
            };

            let display_name = truncate(row.category.as_str(), 23);

            ListItem::new(Line::from(vec![
                Span::styled(format!("{display_name:<24}"), style),
                Span::styled(
                    format!(
                        "{:>12} / {:<12} ",
                        format_amount(row.actual, &app.currency),
                        budget_text
                    ),
                    Style::default().fg(color),
                ),
                Span::styled(create_progress_bar(ratio, 20), Style::default().fg(color)),
                Span::styled(
                    format!(" {:.0}%", ratio * 100.0),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                format!(
                    " Budgets for {} ({} set) | spent {} ",
                    app.current_month,
                    app.ledger.budgets().len(),
                    format_amount(month_spend, &app.currency)
                ),
                theme::title_style(),
            )),
    );
    f.render_widget(list, area);
}

fn render_comparison_chart(f: &mut Frame, area: Rect, app: &App) {
    let groups: Vec<BarGroup> = app
        .derived
        .budget_vs_actual
        .iter()
        .map(|row| {
            let bars = [
                Bar::default()
                    .value(bar_value(row.budget))
                    .text_value(format_amount(row.budget, ""))
                    .style(Style::default().fg(theme::BUDGET)),
                Bar::default()
                    .value(bar_value(row.actual))
                    .text_value(format_amount(row.actual, ""))
                    .style(Style::default().fg(if row.is_overspent() {
                        theme::RED
                    } else {
                        theme::ACTUAL
                    })),
            ];
            BarGroup::default()
                .label(Line::from(truncate(row.category.as_str(), 9)))
                .bars(&bars)
        })
        .collect();

    let mut chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::OVERLAY))
                .title(Line::from(vec![
                    Span::styled(" Budget vs Actual ", theme::title_style()),
                    Span::styled("■ budget ", Style::default().fg(theme::BUDGET)),
                    Span::styled("■ actual ", Style::default().fg(theme::ACTUAL)),
                ])),
        )
        .bar_width(4)
        .bar_gap(0)
        .group_gap(1)
        .value_style(Style::default().fg(theme::HEADER_BG));

    for group in groups {
        chart = chart.data(group);
    }

    f.render_widget(chart, area);
}

/// Actual over budget, clamped to `[0, 1]`. An unset budget with any spend
/// counts as full.
fn spend_ratio(row: &BudgetComparison) -> f64 {
    if row.budget > Decimal::ZERO {
        row.actual
            .checked_div(row.budget)
            .and_then(|r| r.to_f64())
            .map_or(1.0, |r| r.min(1.0))
    } else if row.actual > Decimal::ZERO {
        1.0
    } else {
        0.0
    }
}

fn create_progress_bar(ratio: f64, width: usize) -> String {
    let filled = (ratio * width as f64) as usize;
    let empty = width.saturating_sub(filled);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}
