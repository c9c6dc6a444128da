//! Hover and click focus state for the map.

use crate::identifiers::StopIdentifier;

/// Which stop the display is currently asking about.
///
/// A hovered stop takes precedence over a clicked one; with neither,
/// there is no focus and the per-stop panels have nothing to show.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection {
    pub hovered: Option<StopIdentifier>,
    pub selected: Option<StopIdentifier>,
}

impl Selection {
    pub fn focused(&self) -> Option<&StopIdentifier> {
        self.hovered.as_ref().or(self.selected.as_ref())
    }

    /// Drop both, e.g. when the line selection changes.
    pub fn clear(&mut self) {
        self.hovered = None;
        self.selected = None;
    }
}
