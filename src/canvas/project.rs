//! Min/max normalization of geographic paths into drawing space.
//!
//! Each axis is normalized independently against its own span, so the
//! output fills the canvas in both directions regardless of the
//! geographic extent. The result is a diagram rather than a
//! cartographic projection: aspect ratio is not preserved, and a mostly
//! north-south line is stretched to the same width as an east-west one.

use geo::{Coord, MapCoords};
use tracing::debug;

use crate::models::path::{Path, Shape, Stop};

/// Axis-aligned bounding box over a set of coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Coord,
    pub max: Coord,
}

impl Bounds {
    /// Bounding box of an iterator of coordinates, `None` when the
    /// iterator is empty.
    pub fn from_coords(coords: impl IntoIterator<Item = Coord>) -> Option<Self> {
        let mut coords = coords.into_iter();
        let first = coords.next()?;
        let mut bounds = Self {
            min: first,
            max: first,
        };
        for coord in coords {
            bounds.extend(coord);
        }
        Some(bounds)
    }

    fn extend(&mut self, coord: Coord) {
        self.min.x = self.min.x.min(coord.x);
        self.min.y = self.min.y.min(coord.y);
        self.max.x = self.max.x.max(coord.x);
        self.max.y = self.max.y.max(coord.y);
    }

    fn project_coord(&self, coord: Coord, canvas_size: f64) -> Coord {
        Coord {
            x: project_axis(coord.x, self.min.x, self.max.x, canvas_size),
            y: project_axis(coord.y, self.min.y, self.max.y, canvas_size),
        }
    }
}

/// Normalize `value` against `[min, max]`, then scale to `[0, canvas_size]`.
///
/// A zero-span axis has no spread to normalize against; every value on
/// it maps to the canvas midpoint.
fn project_axis(value: f64, min: f64, max: f64, canvas_size: f64) -> f64 {
    if min == max {
        canvas_size / 2.0
    } else {
        (value - min) / (max - min) * canvas_size
    }
}

/// Map a path's geographic coordinates into `[0, canvas_size]` on both
/// axes.
///
/// The bounding box is folded over the union of every shape vertex and
/// every stop location, so stops keep their place on the polylines they
/// belong to. A path with no coordinates at all projects to an empty
/// path.
pub fn project(path: &Path, canvas_size: f64) -> Path {
    let Some(bounds) = Bounds::from_coords(path.coords()) else {
        debug!("path has no coordinates, nothing to project");
        return Path::default();
    };

    Path {
        shapes: path
            .shapes
            .iter()
            .map(|shape| Shape {
                id: shape.id.clone(),
                geometry: shape
                    .geometry
                    .map_coords(|c| bounds.project_coord(c, canvas_size)),
            })
            .collect(),
        stops: path
            .stops
            .iter()
            .map(|stop| Stop {
                id: stop.id.clone(),
                name: stop.name.clone(),
                location: stop
                    .location
                    .map_coords(|c| bounds.project_coord(c, canvas_size)),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use geo::{LineString, Point};

    use super::*;
    use crate::identifiers::{ShapeIdentifier, StopIdentifier};

    fn stop(id: &str, x: f64, y: f64) -> Stop {
        Stop {
            id: StopIdentifier::new(id),
            name: id.into(),
            location: Point::new(x, y),
        }
    }

    fn shape(id: &str, coords: Vec<(f64, f64)>) -> Shape {
        Shape {
            id: ShapeIdentifier::new(id),
            geometry: LineString::from(coords),
        }
    }

    #[test]
    fn test_projection_fills_canvas() {
        // Red line, roughly: Alewife in the northwest corner, Braintree
        // in the southeast.
        let path = Path {
            shapes: vec![shape(
                "931_0009",
                vec![
                    (-71.1426, 42.3954),
                    (-71.0589, 42.3554),
                    (-71.0006, 42.2079),
                ],
            )],
            stops: vec![
                stop("place-alfcl", -71.1426, 42.3954),
                stop("place-brntn", -71.0006, 42.2079),
            ],
        };

        let projected = project(&path, 400.0);

        for coord in projected.coords() {
            assert!((0.0..=400.0).contains(&coord.x));
            assert!((0.0..=400.0).contains(&coord.y));
        }

        // Min/max normalization puts the extreme coordinates exactly on
        // the canvas edges.
        let xs: Vec<f64> = projected.coords().map(|c| c.x).collect();
        let ys: Vec<f64> = projected.coords().map(|c| c.y).collect();
        assert!(xs.iter().any(|&x| x == 0.0));
        assert!(xs.iter().any(|&x| x == 400.0));
        assert!(ys.iter().any(|&y| y == 0.0));
        assert!(ys.iter().any(|&y| y == 400.0));
    }

    #[test]
    fn test_projection_is_idempotent() {
        // A power-of-two canvas keeps the re-normalization arithmetic
        // exact, so the comparison can be bit-for-bit.
        let path = Path {
            shapes: vec![shape(
                "933_0010",
                vec![(-71.12, 42.37), (-71.06, 42.35), (-71.01, 42.30)],
            )],
            stops: vec![stop("a", -71.12, 42.37), stop("b", -71.03, 42.33)],
        };

        let once = project(&path, 256.0);
        let twice = project(&once, 256.0);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_single_stop_maps_to_center() {
        let path = Path {
            shapes: vec![],
            stops: vec![stop("place-pktrm", -71.0624, 42.3564)],
        };

        let projected = project(&path, 400.0);
        assert_eq!(projected.stops[0].location, Point::new(200.0, 200.0));
    }

    #[test]
    fn test_degenerate_axis_maps_to_midpoint() {
        // All points share one latitude: y has no spread, x still
        // normalizes.
        let path = Path {
            shapes: vec![shape("flat", vec![(-71.2, 42.0), (-71.0, 42.0)])],
            stops: vec![stop("mid", -71.1, 42.0)],
        };

        let projected = project(&path, 400.0);
        let coords: Vec<Coord> = projected.coords().collect();
        assert!(coords.iter().all(|c| c.y == 200.0));
        assert_eq!(coords[0].x, 0.0);
        assert_eq!(coords[1].x, 400.0);
        assert_relative_eq!(coords[2].x, 200.0, epsilon = 1e-9);
    }

    #[test]
    fn test_empty_path_projects_to_empty_path() {
        let projected = project(&Path::default(), 400.0);
        assert!(projected.is_empty());
    }

    #[test]
    fn test_stops_share_the_shape_bounding_box() {
        // A stop strictly inside the shapes' extent must not be rescaled
        // against a box of its own.
        let path = Path {
            shapes: vec![shape("s", vec![(-71.2, 42.0), (-71.0, 42.4)])],
            stops: vec![stop("inner", -71.15, 42.1)],
        };

        let projected = project(&path, 400.0);
        let inner = projected.stops[0].location;
        assert_relative_eq!(inner.x(), 100.0, epsilon = 1e-9);
        assert_relative_eq!(inner.y(), 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_vertexless_shape_survives_projection() {
        let path = Path {
            shapes: vec![
                shape("empty", vec![]),
                shape("s", vec![(-71.2, 42.0), (-71.0, 42.4)]),
            ],
            stops: vec![],
        };

        let projected = project(&path, 400.0);
        assert_eq!(projected.shapes.len(), 2);
        assert_eq!(projected.shapes[0].geometry.0.len(), 0);
    }

    #[test]
    fn test_bounds_of_empty_iterator() {
        assert_eq!(Bounds::from_coords(std::iter::empty()), None);
    }
}
