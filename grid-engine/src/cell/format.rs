//! Reusable cell renderers: currency, dates, status badges and links.
//!
//! The engine imposes no formatting policy of its own; these are the
//! renderers pages share so that every amount column prints the same way.

use std::fmt::Write;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

use super::{Cell, Tone};
use crate::column::{RenderFn, TotalFn};
use crate::model::{GridRow, Value};

/// Formats `amount` with a currency symbol, thousands separators and a
/// fixed number of decimals.
///
/// ```
/// use grid_engine::cell::format::format_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_amount(Decimal::new(123456789, 2), "$", 2), "$1,234,567.89");
/// assert_eq!(format_amount(Decimal::new(-5, 1), "€", 2), "-€0.50");
/// ```
pub fn format_amount(amount: Decimal, symbol: &str, decimals: u32) -> String {
    let rounded = amount.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = format!("{:.*}", decimals as usize, rounded.abs());

    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(symbol);
    out.push_str(&grouped);
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Currency renderer. Non-numeric values fall back to their raw text.
pub fn currency<R: 'static>(symbol: impl Into<String>, decimals: u32) -> RenderFn<R> {
    let symbol = symbol.into();
    Arc::new(move |value: Option<&Value>, _row: &R| match value {
        None | Some(Value::Null) => Cell::Empty,
        Some(value) => match value.as_number() {
            Some(amount) => Cell::Text(format_amount(amount, &symbol, decimals)),
            None => Cell::Text(value.to_string()),
        },
    })
}

/// Footer formatter matching [`currency`].
pub fn currency_total(symbol: impl Into<String>, decimals: u32) -> TotalFn {
    let symbol = symbol.into();
    Arc::new(move |total: Decimal| format_amount(total, &symbol, decimals))
}

/// Date renderer using a chrono format pattern.
///
/// Accepts date-time values, RFC 3339 strings and `YYYY-MM-DD` strings;
/// anything else is shown as-is.
pub fn date<R: 'static>(pattern: impl Into<String>) -> RenderFn<R> {
    let pattern = pattern.into();
    Arc::new(move |value: Option<&Value>, _row: &R| match value {
        None | Some(Value::Null) => Cell::Empty,
        Some(Value::DateTime(dt)) => Cell::Text(format_datetime(dt, &pattern)),
        Some(Value::String(s)) => {
            if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
                Cell::Text(format_datetime(&dt.with_timezone(&Utc), &pattern))
            } else if let Ok(day) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
                let mut out = String::new();
                match write!(out, "{}", day.format(&pattern)) {
                    Ok(()) => Cell::Text(out),
                    Err(_) => Cell::Text(s.clone()),
                }
            } else {
                Cell::Text(s.clone())
            }
        }
        Some(other) => Cell::Text(other.to_string()),
    })
}

fn format_datetime(dt: &DateTime<Utc>, pattern: &str) -> String {
    let mut out = String::new();
    // An invalid pattern makes chrono's Display fail; fall back to RFC 3339.
    if write!(out, "{}", dt.format(pattern)).is_err() {
        return dt.to_rfc3339();
    }
    out
}

/// Status badge renderer.
///
/// Status strings are matched case-insensitively against `tones`; unknown
/// statuses get a neutral badge with their raw label.
pub fn status_badge<R: 'static>(tones: &[(&str, Tone)]) -> RenderFn<R> {
    let tones: Vec<(String, Tone)> = tones
        .iter()
        .map(|(status, tone)| (status.to_lowercase(), *tone))
        .collect();
    Arc::new(move |value: Option<&Value>, _row: &R| {
        let label = match value {
            None | Some(Value::Null) => return Cell::Empty,
            Some(value) => value.to_string(),
        };
        let key = label.to_lowercase();
        let tone = tones
            .iter()
            .find(|(status, _)| *status == key)
            .map(|(_, tone)| *tone)
            .unwrap_or_default();
        Cell::badge(label, tone)
    })
}

/// Link renderer pointing at a detail route.
///
/// `{id}` in `route` is replaced with the row's id. Rows without an id
/// render as plain text since there is nowhere to navigate to.
pub fn link<R: GridRow + 'static>(route: impl Into<String>) -> RenderFn<R> {
    let route = route.into();
    Arc::new(move |value: Option<&Value>, row: &R| {
        let label = match value {
            None | Some(Value::Null) => return Cell::Empty,
            Some(value) => value.to_string(),
        };
        match row.row_id() {
            Some(id) => Cell::link(label, route.replace("{id}", &id.to_string())),
            None => Cell::Text(label),
        }
    })
}
