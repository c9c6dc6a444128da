//! # mbta-headways
//!
//! Data core for an MBTA headway dashboard: projects line geometry into
//! drawing space and reduces raw headway observations to lateness
//! statistics.
//!
//! ## Features
//!
//! - **Canvas projection**: Min/max-normalize a line's geometry into a square canvas
//! - **Hit-testing**: Fast R-tree lookup of the stop under a cursor
//! - **Headway analytics**: Per-stop and line-wide lateness statistics
//! - **Report formatting**: The dashboard's exact `{H}h:{M}m:{S}s` wording
//! - **Pluggable networking**: Implement your own headway fetching
//!
//! ## Example
//!
//! ```
//! use mbta_headways::prelude::*;
//! use geo::Point;
//!
//! let path = Path {
//!     shapes: vec![],
//!     stops: vec![
//!         Stop {
//!             id: StopIdentifier::new("place-alfcl"),
//!             name: "Alewife".into(),
//!             location: Point::new(-71.1426, 42.3954),
//!         },
//!         Stop {
//!             id: StopIdentifier::new("place-davis"),
//!             name: "Davis".into(),
//!             location: Point::new(-71.1218, 42.3967),
//!         },
//!     ],
//! };
//!
//! // Project into the default 400x400 canvas and hit-test a corner.
//! let projected = project(&path, DEFAULT_CANVAS_SIZE);
//! let index = CanvasIndex::new(&projected.stops);
//!
//! let hit = index.stop_at(Point::new(0.0, 0.0), STOP_HIT_RADIUS);
//! assert_eq!(hit.map(|stop| &*stop.name), Some("Alewife"));
//! ```

pub mod canvas;
pub mod error;
pub mod identifiers;
pub mod models;
pub mod network;
pub mod performance;
pub mod selection;

// Re-exports for convenience
pub mod prelude {
    pub use crate::canvas::{project, CanvasIndex, DEFAULT_CANVAS_SIZE, STOP_HIT_RADIUS};
    pub use crate::error::{HeadwayError, Result};
    pub use crate::identifiers::*;
    pub use crate::models::line::{LineColor, MbtaLine};
    pub use crate::models::path::{Path, Shape, Stop};
    pub use crate::network::traits::HeadwayFetcher;
    pub use crate::performance::format::{
        date_label, format_lateness, format_seconds, Punctuality,
    };
    pub use crate::performance::headway::{Direction, Headway};
    pub use crate::performance::index::{HeadwayIndex, StopHeadways};
    pub use crate::performance::overview::LineOverview;
    pub use crate::performance::stats::{summarize, Extreme, LatenessSummary, LineExtreme};
    pub use crate::performance::window::{previous_monday, QueryWindow};
    pub use crate::selection::Selection;
}

pub use prelude::*;
