//! Line geometry: stops, shapes, and the path that groups them.

use std::sync::Arc;

use geo::{Coord, LineString, Point};

use crate::identifiers::{ShapeIdentifier, StopIdentifier};

/// A single boarding location on a line.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop {
    pub id: StopIdentifier,
    /// Display name only, never a join key. Distinct stops can share a
    /// name ("Saint Paul Street" exists on both the B and C branches).
    pub name: Arc<str>,
    pub location: Point,
}

/// One continuous polyline of a line's drawn route.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shape {
    pub id: ShapeIdentifier,
    /// Vertex order defines the drawn path. May be empty.
    pub geometry: LineString,
}

/// The full geometry for one transit line.
///
/// Both collections may be empty; an upstream fetch failure produces an
/// empty path, not an error.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    pub shapes: Vec<Shape>,
    pub stops: Vec<Stop>,
}

impl Path {
    /// Every coordinate in the path: shape vertices first, then stop
    /// locations.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.shapes
            .iter()
            .flat_map(|shape| shape.geometry.coords().copied())
            .chain(self.stops.iter().map(|stop| Coord::from(stop.location)))
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty() && self.stops.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coords_unions_shapes_and_stops() {
        let path = Path {
            shapes: vec![Shape {
                id: ShapeIdentifier::new("931_0009"),
                geometry: LineString::from(vec![(-71.1, 42.3), (-71.0, 42.4)]),
            }],
            stops: vec![Stop {
                id: StopIdentifier::new("place-alfcl"),
                name: "Alewife".into(),
                location: Point::new(-71.14, 42.39),
            }],
        };

        let coords: Vec<Coord> = path.coords().collect();
        assert_eq!(coords.len(), 3);
        assert_eq!(coords[0], Coord { x: -71.1, y: 42.3 });
        assert_eq!(coords[2], Coord { x: -71.14, y: 42.39 });
    }

    #[test]
    fn test_is_empty() {
        assert!(Path::default().is_empty());

        let with_stop = Path {
            shapes: vec![],
            stops: vec![Stop {
                id: StopIdentifier::new("place-davis"),
                name: "Davis".into(),
                location: Point::new(-71.1218, 42.3967),
            }],
        };
        assert!(!with_stop.is_empty());
    }
}
