use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::Transaction;
use crate::summary::Overspend;

/// Format a decimal amount with a leading currency symbol, thousand separators
/// and exactly 2 decimal places.
/// e.g. `1234567.891` with `"$"` → `"$1,234,567.89"`
pub(crate) fn format_amount(val: Decimal, symbol: &str) -> String {
    let abs = val
        .abs()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let formatted = format!("{abs:.2}");
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next().unwrap_or("00");

    let with_commas: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    if val < Decimal::ZERO && !abs.is_zero() {
        format!("-{symbol}{with_commas}.{dec_part}")
    } else {
        format!("{symbol}{with_commas}.{dec_part}")
    }
}

/// Truncate a string to `max` visible characters, appending "…" if truncated.
/// The result is guaranteed to be at most `max` characters (counting "…" as one).
/// Safe for multi-byte UTF-8 characters.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let char_count = s.chars().count();
    if char_count <= max {
        return s.to_string();
    }
    let truncated: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{truncated}…")
}

/// Move a list cursor down by one, adjusting scroll to keep cursor visible.
pub(crate) fn scroll_down(index: &mut usize, scroll: &mut usize, len: usize, page: usize) {
    if *index + 1 < len {
        *index += 1;
        if *index >= *scroll + page {
            *scroll = index.saturating_sub(page - 1);
        }
    }
}

/// Move a list cursor up by one, adjusting scroll to keep cursor visible.
pub(crate) fn scroll_up(index: &mut usize, scroll: &mut usize) {
    *index = index.saturating_sub(1);
    if *index < *scroll {
        *scroll = *index;
    }
}

/// Jump cursor to the top of a list.
pub(crate) fn scroll_to_top(index: &mut usize, scroll: &mut usize) {
    *index = 0;
    *scroll = 0;
}

/// Jump cursor to the bottom of a list.
pub(crate) fn scroll_to_bottom(index: &mut usize, scroll: &mut usize, len: usize, page: usize) {
    if len > 0 {
        *index = len - 1;
        *scroll = index.saturating_sub(page.saturating_sub(1));
    }
}

/// Ceiling for bar heights. `BarChart` multiplies each value by the bar length
/// in eighths, which must stay within `u64` for any terminal size.
pub(crate) const MAX_BAR_VALUE: u64 = u64::MAX / (u16::MAX as u64 * 8);

/// Whole-unit bar height for chart widgets. Negative values are zero and
/// oversized values clamp to [`MAX_BAR_VALUE`].
pub(crate) fn bar_value(val: Decimal) -> u64 {
    if val <= Decimal::ZERO {
        return 0;
    }
    val.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u64()
        .map_or(MAX_BAR_VALUE, |v| v.min(MAX_BAR_VALUE))
}

/// Share of `part` in `whole` as a percentage with one decimal, e.g. `"42.5%"`.
pub(crate) fn percent_of(part: Decimal, whole: Decimal) -> String {
    if whole.is_zero() {
        return "0.0%".to_string();
    }
    let Some(pct) = part
        .checked_div(whole)
        .and_then(|r| r.checked_mul(Decimal::ONE_HUNDRED))
    else {
        return "100.0%".to_string();
    };
    let pct = pct.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{pct:.1}%")
}

/// Dashboard line for a recent transaction, e.g. `"May 03: Lunch ($12.50)"`.
pub(crate) fn format_recent(txn: &Transaction, symbol: &str) -> String {
    format!(
        "{}: {} ({})",
        txn.date.format("%b %d"),
        txn.description,
        format_amount(txn.amount, symbol)
    )
}

pub(crate) const NO_OVERSPENDING: &str = "No overspending this month!";

/// Spending insight lines, one per overspent category, or a single
/// all-clear line.
pub(crate) fn insight_lines(overspending: &[Overspend], symbol: &str) -> Vec<String> {
    if overspending.is_empty() {
        return vec![NO_OVERSPENDING.to_string()];
    }
    overspending
        .iter()
        .map(|o| {
            format!(
                "{}: Over budget by {}",
                o.category,
                format_amount(o.over_by, symbol)
            )
        })
        .collect()
}
