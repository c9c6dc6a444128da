//! Human-readable rendering of lateness values.
//!
//! The dashboard displays these strings verbatim, so the wording and
//! the `{H}h:{M}m:{S}s` shape are load-bearing.

use chrono::NaiveDate;

/// Sign classification of a lateness value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Punctuality {
    Early,
    OnTime,
    Late,
}

impl Punctuality {
    pub fn of(lateness: f64) -> Self {
        if lateness == 0.0 {
            Self::OnTime
        } else if lateness < 0.0 {
            Self::Early
        } else {
            Self::Late
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Early => "early",
            Self::OnTime => "on time",
            Self::Late => "late",
        }
    }
}

/// Format a non-negative duration as `{H}h:{M}m:{S}s`.
///
/// Hours and minutes truncate toward zero; the residual seconds round
/// half away from zero, so 59.7 leftover seconds render as `60s` rather
/// than carrying into the minute.
pub fn format_seconds(seconds: f64) -> String {
    let hours = (seconds / 3600.0).floor();
    let minutes = ((seconds - hours * 3600.0) / 60.0).floor();
    let secs = (seconds - hours * 3600.0 - minutes * 60.0).round();

    format!("{}h:{}m:{}s", hours as i64, minutes as i64, secs as i64)
}

/// Render a signed lateness in seconds, e.g. `0h:1m:15s (early)`.
pub fn format_lateness(lateness: f64) -> String {
    format!(
        "{} ({})",
        format_seconds(lateness.abs()),
        Punctuality::of(lateness).label()
    )
}

/// `YYYY-MM-DD` label for chart axes and report headings.
pub fn date_label(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
