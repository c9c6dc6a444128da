//! The MBTA rapid transit line catalog.

use crate::identifiers::RouteIdentifier;

/// The eight rapid transit lines of the MBTA system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MbtaLine {
    Red,
    Mattapan,
    Orange,
    GreenB,
    GreenC,
    GreenD,
    GreenE,
    Blue,
}

/// Draw color for a line on the map canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineColor {
    Red,
    Orange,
    Green,
    Blue,
}

impl LineColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Green => "green",
            Self::Blue => "blue",
        }
    }
}

impl MbtaLine {
    /// All lines, in selector order.
    pub const ALL: [MbtaLine; 8] = [
        MbtaLine::Red,
        MbtaLine::Mattapan,
        MbtaLine::Orange,
        MbtaLine::GreenB,
        MbtaLine::GreenC,
        MbtaLine::GreenD,
        MbtaLine::GreenE,
        MbtaLine::Blue,
    ];

    /// Route id in the MBTA V3 API.
    pub fn route_id(&self) -> RouteIdentifier {
        RouteIdentifier::new(match self {
            Self::Red => "Red",
            Self::Mattapan => "Mattapan",
            Self::Orange => "Orange",
            Self::GreenB => "Green-B",
            Self::GreenC => "Green-C",
            Self::GreenD => "Green-D",
            Self::GreenE => "Green-E",
            Self::Blue => "Blue",
        })
    }

    pub fn from_route_id(id: &str) -> Option<Self> {
        match id {
            "Red" => Some(Self::Red),
            "Mattapan" => Some(Self::Mattapan),
            "Orange" => Some(Self::Orange),
            "Green-B" => Some(Self::GreenB),
            "Green-C" => Some(Self::GreenC),
            "Green-D" => Some(Self::GreenD),
            "Green-E" => Some(Self::GreenE),
            "Blue" => Some(Self::Blue),
            _ => None,
        }
    }

    /// Display name used in report sentences ("the red line").
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Red => "red line",
            Self::Mattapan => "Mattapan line",
            Self::Orange => "orange line",
            Self::GreenB => "green line (B)",
            Self::GreenC => "green line (C)",
            Self::GreenD => "green line (D)",
            Self::GreenE => "green line (E)",
            Self::Blue => "blue line",
        }
    }

    /// Draw color; the Mattapan trolley renders as part of the red line.
    pub fn color(&self) -> LineColor {
        match self {
            Self::Red | Self::Mattapan => LineColor::Red,
            Self::Orange => LineColor::Orange,
            Self::GreenB | Self::GreenC | Self::GreenD | Self::GreenE => LineColor::Green,
            Self::Blue => LineColor::Blue,
        }
    }
}
