//! Projection of geographic line geometry into a square drawing canvas.

pub mod index;
pub mod project;

pub use index::CanvasIndex;
pub use project::{project, Bounds};

/// Edge length of the default square canvas, in drawing units.
pub const DEFAULT_CANVAS_SIZE: f64 = 400.0;

/// Radius around a projected stop that counts as hitting it, in drawing
/// units. Matches the radius of the drawn stop circles.
pub const STOP_HIT_RADIUS: f64 = 10.0;
