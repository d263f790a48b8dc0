use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

use crate::config::Config;
use crate::ui::app::App;
use crate::ui::commands;
use crate::ui::util::{format_amount, format_recent, insight_lines, percent_of};

pub(crate) fn as_cli(args: &[String], config: &Config) -> Result<()> {
    match args[1].as_str() {
        "batch" => {
            let mut app = App::new(config);
            app.interactive = false;
            let stdin = io::stdin();
            let mut stdout = io::stdout().lock();
            run_batch(stdin.lock(), &mut stdout, &mut app)
        }
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("spendtrack {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("SpendTrack: in-memory personal expense tracker");
    println!();
    println!("Usage: spendtrack [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  batch                         Read commands from stdin, then print a report");
    println!("                                e.g. add 2024-05-01 12.50 Food & Dining Lunch");
    println!("                                     budget Food & Dining 300");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Environment:");
    println!("  SPENDTRACK_CURRENCY           Currency symbol (default: $)");
    println!("  SPENDTRACK_LOG                Log filter (default: info)");
    println!("  SPENDTRACK_LOG_DIR            Log directory for the TUI");
}

/// Apply one command per input line, echoing each status message, then
/// write the report. Blank lines and `#` comments are skipped; `quit`
/// stops reading early.
pub(crate) fn run_batch(input: impl BufRead, out: &mut impl Write, app: &mut App) -> Result<()> {
    let mut echoed = false;
    for (line_no, line) in input.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read input line {}", line_no + 1))?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        commands::handle_command(line, app)?;
        if !app.status_message.is_empty() {
            writeln!(out, "{}", app.status_message)?;
            app.status_message.clear();
            echoed = true;
        }
        if !app.running {
            break;
        }
    }

    tracing::info!(
        transactions = app.ledger.transaction_count(),
        budgets = app.ledger.budgets().len(),
        "batch input applied"
    );

    if echoed {
        writeln!(out)?;
    }
    write_report(out, app)?;
    out.flush()?;
    Ok(())
}

/// Plain-text rendering of every derived view.
pub(crate) fn write_report(out: &mut impl Write, app: &App) -> io::Result<()> {
    let d = &app.derived;
    let cur = app.currency.as_str();

    writeln!(out, "=== SpendTrack Report ({}) ===", app.current_month)?;
    writeln!(out)?;
    writeln!(
        out,
        "Total Expenses: {} ({} transactions)",
        format_amount(d.grand_total, cur),
        app.ledger.transaction_count()
    )?;

    writeln!(out)?;
    writeln!(out, "Top Expense Categories:")?;
    if d.top_categories.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for (i, c) in d.top_categories.iter().enumerate() {
        writeln!(out, "  {}. {:<24} {:>14}", i + 1, c.name, format_amount(c.value, cur))?;
    }

    writeln!(out)?;
    writeln!(out, "Recent Transactions:")?;
    if d.recent_transactions.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for t in &d.recent_transactions {
        writeln!(out, "  {}", format_recent(t, cur))?;
    }

    writeln!(out)?;
    writeln!(out, "Monthly Expenses:")?;
    if d.monthly_totals.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for m in &d.monthly_totals {
        writeln!(out, "  {:<10} {:>14}", m.month, format_amount(m.total, cur))?;
    }

    writeln!(out)?;
    writeln!(out, "Expenses by Category:")?;
    if d.category_totals.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for c in &d.category_totals {
        writeln!(
            out,
            "  {:<24} {:>14} {:>7}",
            c.name,
            format_amount(c.value, cur),
            percent_of(c.value, d.grand_total)
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Budget vs Actual ({}):", app.current_month)?;
    for row in &d.budget_vs_actual {
        let marker = if row.is_overspent() { "  OVER" } else { "" };
        writeln!(
            out,
            "  {:<24} budget {:>12}  actual {:>12}{marker}",
            row.category.as_str(),
            format_amount(row.budget, cur),
            format_amount(row.actual, cur)
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Spending Insights:")?;
    for line in insight_lines(&d.overspending, cur) {
        writeln!(out, "  {line}")?;
    }

    Ok(())
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
