//! Line-wide report sentences for the overview panel.
//!
//! The dashboard renders these strings verbatim. A zero extreme or
//! average is a real result and gets its own "right on time" wording;
//! only a truly empty index produces the no-data sentences.

use chrono::NaiveDate;

use crate::models::line::MbtaLine;
use crate::performance::format::{date_label, format_lateness};
use crate::performance::index::HeadwayIndex;
use crate::performance::stats::Extreme;

/// The four sentences of the overview panel for one line and week.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineOverview {
    pub heading: String,
    pub earliest: String,
    pub latest: String,
    pub average: String,
}

impl LineOverview {
    pub fn for_line(index: &HeadwayIndex, line: MbtaLine, week_start: NaiveDate) -> Self {
        Self {
            heading: format!(
                "For the entire {}, in the week starting {}:",
                line.display_name(),
                date_label(week_start),
            ),
            earliest: extreme_sentence(index, Extreme::Min),
            latest: extreme_sentence(index, Extreme::Max),
            average: average_sentence(index),
        }
    }
}

fn extreme_sentence(index: &HeadwayIndex, extreme: Extreme) -> String {
    let which = match extreme {
        Extreme::Min => "earliest",
        Extreme::Max => "latest",
    };

    match index.line_extreme(extreme) {
        None => format!("No data found to calculate the {which} train with."),
        Some(found) if found.value == 0.0 => format!(
            "The {which} train arrival was right on time at {}!",
            found.stop.name
        ),
        Some(found) => format!(
            "The {which} train arrival was {} at {}.",
            format_lateness(found.value),
            found.stop.name
        ),
    }
}

fn average_sentence(index: &HeadwayIndex) -> String {
    match index.line_summary() {
        None => "No data found to calculate average headway with.".to_string(),
        Some(summary) if summary.avg == 0.0 => {
            "On average, trains arrived right on time!".to_string()
        }
        Some(summary) => format!("On average, trains arrived {}.", format_lateness(summary.avg)),
    }
}
