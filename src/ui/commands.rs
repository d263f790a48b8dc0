use std::collections::HashMap;
use std::sync::LazyLock;

use super::app::{App, InputMode, PendingAction, Screen};
use crate::entry::{parse_budget_amount, TransactionDraft};
use crate::models::{Category, TransactionId};

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

    register_command!("q", "Quit SpendTrack", cmd_quit, r);
    register_command!("quit", "Quit SpendTrack", cmd_quit, r);
    register_command!("d", "Go to Dashboard", cmd_dashboard, r);
    register_command!("dashboard", "Go to Dashboard", cmd_dashboard, r);
    register_command!("t", "Go to Transactions", cmd_transactions, r);
    register_command!("transactions", "Go to Transactions", cmd_transactions, r);
    register_command!("b", "Go to Budgets", cmd_budgets, r);
    register_command!("budgets", "Go to Budgets", cmd_budgets, r);
    register_command!("ch", "Go to Charts", cmd_charts, r);
    register_command!("charts", "Go to Charts", cmd_charts, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!(
        "add",
        "Add transaction (e.g. :add 2024-05-01 12.50 Food & Dining Lunch)",
        cmd_add,
        r
    );
    register_command!(
        "a",
        "Add transaction (e.g. :a 2024-05-01 12.50 Food & Dining Lunch)",
        cmd_add,
        r
    );
    register_command!(
        "edit",
        "Edit transaction (e.g. :edit 3, or :edit 3 <date> <amount> <category> <desc>)",
        cmd_edit,
        r
    );
    register_command!("e", "Edit transaction (e.g. :e 3)", cmd_edit, r);
    register_command!(
        "delete",
        "Delete selected transaction (or :delete <id>)",
        cmd_delete,
        r
    );
    register_command!(
        "budget",
        "Set budget (e.g. :budget Food & Dining 500; no amount clears)",
        cmd_budget,
        r
    );
    register_command!(
        "clear-budget",
        "Clear budget (e.g. :clear-budget Travel)",
        cmd_clear_budget,
        r
    );

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App) -> anyhow::Result<()> {
    let trimmed = input.trim().trim_start_matches(':');
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        tracing::debug!(command = cmd_name, "running command");
        (cmd.run)(args, app)?;
    } else {
        // Try fuzzy match
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
        .filter(|k| k.len() > 2) // skip short aliases for suggestions
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

/// Split `<date> <amount> <category> <description>` into a draft. The category
/// is matched against the fixed list by prefix; if none matches, the category is
/// left blank and the whole remainder becomes the description.
pub(crate) fn parse_draft_args(args: &str) -> TransactionDraft {
    let args = args.trim();
    let (date, rest) = args.split_once(char::is_whitespace).unwrap_or((args, ""));
    let rest = rest.trim_start();
    let (amount, rest) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));

    let (category, description) = match Category::split_prefix(rest) {
        Some((cat, desc)) => (cat.as_str().to_string(), desc.to_string()),
        None => (String::new(), rest.trim().to_string()),
    };

    TransactionDraft {
        amount: amount.to_string(),
        date: date.to_string(),
        description,
        category,
    }
}

fn category_names() -> String {
    Category::all()
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_dashboard(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.screen = Screen::Dashboard;
    app.refresh();
    Ok(())
}

fn cmd_transactions(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.screen = Screen::Transactions;
    app.refresh();
    Ok(())
}

fn cmd_budgets(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.screen = Screen::Budgets;
    app.refresh();
    Ok(())
}

fn cmd_charts(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.screen = Screen::Charts;
    app.refresh();
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App) -> anyhow::Result<()> {
    if app.interactive {
        app.show_help = true;
    } else {
        let mut names: Vec<&str> = COMMANDS.keys().copied().filter(|k| k.len() > 2).collect();
        names.sort_unstable();
        app.set_status(format!("Commands: {}", names.join(", ")));
    }
    Ok(())
}

fn cmd_add(args: &str, app: &mut App) -> anyhow::Result<()> {
    if args.is_empty() {
        if app.interactive {
            app.open_new_form();
        } else {
            app.set_status("Usage: add <date> <amount> <category> <description>");
        }
        return Ok(());
    }

    match parse_draft_args(args).validate() {
        Ok(valid) => {
            let description = valid.description.clone();
            let id = app.add_transaction(valid);
            app.set_status(format!("Added #{id}: {description}"));
        }
        Err(errors) => {
            app.set_status(format!("Invalid transaction: {errors}"));
        }
    }
    Ok(())
}

fn cmd_edit(args: &str, app: &mut App) -> anyhow::Result<()> {
    let (id_str, rest) = args.split_once(char::is_whitespace).unwrap_or((args, ""));

    let id = if id_str.is_empty() {
        let selected = match app.screen {
            Screen::Transactions => app.selected_transaction().map(|t| t.id),
            _ => None,
        };
        let Some(id) = selected else {
            app.set_status("Navigate to Transactions and select one first, or use :edit <id>");
            return Ok(());
        };
        id
    } else {
        match id_str.parse::<TransactionId>() {
            Ok(id) => id,
            Err(_) => {
                app.set_status(format!("Invalid transaction id: {id_str}"));
                return Ok(());
            }
        }
    };

    if rest.trim().is_empty() {
        if !app.interactive {
            app.set_status("Usage: edit <id> <date> <amount> <category> <description>");
        } else if !app.open_edit_form(id) {
            app.set_status(format!("No transaction with id {id}"));
        }
        return Ok(());
    }

    match parse_draft_args(rest).validate() {
        Ok(valid) => {
            let description = valid.description.clone();
            match app.update_transaction(id, valid) {
                Ok(()) => app.set_status(format!("Updated #{id}: {description}")),
                Err(e) => app.set_status(e.to_string()),
            }
        }
        Err(errors) => app.set_status(format!("Invalid transaction: {errors}")),
    }
    Ok(())
}

fn cmd_delete(args: &str, app: &mut App) -> anyhow::Result<()> {
    let target = if args.is_empty() {
        if app.screen != Screen::Transactions {
            app.set_status("Navigate to Transactions and select one first, or use :delete <id>");
            return Ok(());
        }
        app.selected_transaction().map(|t| (t.id, t.description.clone()))
    } else {
        match args.parse::<TransactionId>() {
            Ok(id) => app
                .ledger
                .get_transaction(id)
                .map(|t| (t.id, t.description.clone())),
            Err(_) => {
                app.set_status(format!("Invalid transaction id: {args}"));
                return Ok(());
            }
        }
    };

    let Some((id, description)) = target else {
        app.set_status("No such transaction");
        return Ok(());
    };

    if app.interactive {
        app.confirm_message = format!("Delete '{description}'?");
        app.pending_action = Some(PendingAction::DeleteTransaction { id, description });
        app.input_mode = InputMode::Confirm;
    } else {
        app.delete_transaction(id)?;
        app.set_status(format!("Deleted: {description}"));
    }

    Ok(())
}

fn cmd_budget(args: &str, app: &mut App) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status(
            "Usage: :budget <category_name> [amount]. Example: :budget Food & Dining 500",
        );
        return Ok(());
    }

    let Some((category, amount_str)) = Category::split_prefix(args) else {
        app.set_status(format!(
            "Category not found in '{args}'. Categories: {}",
            category_names()
        ));
        return Ok(());
    };

    app.apply_budget(category, parse_budget_amount(amount_str));
    if app.interactive {
        app.screen = Screen::Budgets;
        if let Some(pos) = Category::all().iter().position(|c| *c == category) {
            app.budget_index = pos;
        }
    }
    app.set_status(app.budget_status(category));
    Ok(())
}

fn cmd_clear_budget(args: &str, app: &mut App) -> anyhow::Result<()> {
    let Some(category) = Category::parse(args) else {
        app.set_status(format!("Category '{args}' not found"));
        return Ok(());
    };
    app.apply_budget(category, None);
    app.set_status(app.budget_status(category));
    Ok(())
}
