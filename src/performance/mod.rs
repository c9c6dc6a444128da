//! Headway analytics: accumulation, statistics, and report formatting.

pub mod format;
pub mod headway;
pub mod index;
pub mod overview;
pub mod stats;
pub mod window;

// Re-exports for convenience
pub use format::{date_label, format_lateness, format_seconds, Punctuality};
pub use headway::{Direction, Headway};
pub use index::{HeadwayIndex, StopHeadways};
pub use overview::LineOverview;
pub use stats::{summarize, Extreme, LatenessSummary, LineExtreme};
pub use window::{previous_monday, QueryWindow};
