use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::entry::DATE_FORMAT;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let transactions = app.ledger.transactions();

    if transactions.is_empty() {
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled("No transactions yet", theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Press a to add one, or use :add <date> <amount> <category> <description>",
                theme::dim_style(),
            )),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(" Transactions (0) ", theme::title_style()));
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let header_cells = ["#", "Amount", "Date", "Description", "Category"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = transactions
        .iter()
        .enumerate()
        .skip(app.transaction_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, txn)| {
            let style = if i == app.transaction_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            let amount_cell = if i == app.transaction_index {
                Cell::from(format_amount(txn.amount, &app.currency))
            } else {
                Cell::from(Span::styled(
                    format_amount(txn.amount, &app.currency),
                    theme::amount_style(),
                ))
            };

            Row::new(vec![
                Cell::from(Span::styled(format!("{}", txn.id), theme::dim_style())),
                amount_cell,
                Cell::from(txn.date.format(DATE_FORMAT).to_string()),
                Cell::from(truncate(&txn.description, 40)),
                Cell::from(truncate(&txn.category, 22)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(5),
        Constraint::Length(14),
        Constraint::Length(12),
        Constraint::Min(20),
        Constraint::Length(23),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                format!(
                    " Transactions ({}) | total {} ",
                    transactions.len(),
                    format_amount(app.derived.grand_total, &app.currency)
                ),
                theme::title_style(),
            )),
    );

    f.render_widget(table, area);
}
