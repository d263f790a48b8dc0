use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, format_recent, insight_lines, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9), // Summary cards
            Constraint::Min(4),    // Spending insights
        ])
        .split(area);

    render_summary_cards(f, chunks[0], app);
    render_insights(f, chunks[1], app);
}

fn card_block(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(format!(" {title} "), theme::title_style()))
}

fn render_summary_cards(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(35),
            Constraint::Percentage(40),
        ])
        .split(area);

    render_total_card(f, cards[0], app);
    render_top_categories(f, cards[1], app);
    render_recent(f, cards[2], app);
}

fn render_total_card(f: &mut Frame, area: Rect, app: &App) {
    let count = app.ledger.transaction_count();
    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            format_amount(app.derived.grand_total, &app.currency),
            Style::default()
                .fg(theme::YELLOW)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{count} txn{}", if count == 1 { "" } else { "s" }),
            theme::dim_style(),
        )),
    ])
    .centered()
    .block(card_block("Total Expenses"));

    f.render_widget(text, area);
}

fn render_top_categories(f: &mut Frame, area: Rect, app: &App) {
    let width = area.width.saturating_sub(4) as usize;
    let lines: Vec<Line> = if app.derived.top_categories.is_empty() {
        vec![Line::from(Span::styled(
            "No expenses yet",
            theme::dim_style(),
        ))]
    } else {
        app.derived
            .top_categories
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let amount = format_amount(c.value, &app.currency);
                let name_width = width.saturating_sub(amount.chars().count() + 4);
                Line::from(vec![
                    Span::styled(format!("{}. ", i + 1), theme::dim_style()),
                    Span::styled(
                        format!("{:<name_width$} ", truncate(&c.name, name_width)),
                        Style::default().fg(theme::chart_color(i)),
                    ),
                    Span::styled(amount, theme::amount_style()),
                ])
            })
            .collect()
    };

    let list = Paragraph::new(lines).block(card_block("Top Expense Categories"));
    f.render_widget(list, area);
}

fn render_recent(f: &mut Frame, area: Rect, app: &App) {
    let width = area.width.saturating_sub(2) as usize;
    let lines: Vec<Line> = if app.derived.recent_transactions.is_empty() {
        vec![Line::from(Span::styled(
            "No transactions yet. Press a to add one",
            theme::dim_style(),
        ))]
    } else {
        app.derived
            .recent_transactions
            .iter()
            .map(|t| {
                Line::from(Span::styled(
                    truncate(&format_recent(t, &app.currency), width),
                    theme::normal_style(),
                ))
            })
            .collect()
    };

    let list = Paragraph::new(lines).block(card_block("Recent Transactions"));
    f.render_widget(list, area);
}

fn render_insights(f: &mut Frame, area: Rect, app: &App) {
    let style = if app.derived.overspending.is_empty() {
        theme::ok_style()
    } else {
        theme::over_budget_style()
    };

    let details = app.derived.overspending.iter().map(|o| {
        format!(
            "  (spent {} of {})",
            format_amount(o.actual, &app.currency),
            format_amount(o.budget, &app.currency)
        )
    });
    let lines: Vec<Line> = insight_lines(&app.derived.overspending, &app.currency)
        .into_iter()
        .zip(details.map(Some).chain(std::iter::repeat(None)))
        .map(|(text, detail)| {
            Line::from(vec![
                Span::styled(text, style),
                Span::styled(detail.unwrap_or_default(), theme::dim_style()),
            ])
        })
        .collect();

    let panel = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(card_block(&format!("Spending Insights ({})", app.current_month)));
    f.render_widget(panel, area);
}
