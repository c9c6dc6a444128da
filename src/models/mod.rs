//! Data model for line geometry and the line catalog.

pub mod line;
pub mod path;

// Re-exports for convenience
pub use line::{LineColor, MbtaLine};
pub use path::{Path, Shape, Stop};
