//! R-tree hit-testing over projected stop positions.
//!
//! Canvas space is Euclidean, so a single R-tree distance query is
//! exact; there is no geodesic refinement stage.

use geo::Point;
use rstar::{PointDistance, RTree, RTreeObject, AABB};

use crate::models::path::Stop;

#[derive(Clone)]
pub struct StopNode {
    pub stop: Stop,
    point: [f64; 2],
}

impl StopNode {
    pub fn new(stop: Stop) -> Self {
        let point = [stop.location.x(), stop.location.y()];
        Self { stop, point }
    }
}

impl RTreeObject for StopNode {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for StopNode {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

/// Spatial index over the stops of an already-projected path.
#[derive(Clone)]
pub struct CanvasIndex {
    tree: RTree<StopNode>,
}

impl CanvasIndex {
    pub fn new(stops: &[Stop]) -> Self {
        let tree = RTree::bulk_load(stops.iter().cloned().map(StopNode::new).collect());
        Self { tree }
    }

    /// The nearest stop within `radius` canvas units of `point`, if any.
    ///
    /// A non-positive or non-finite radius hits nothing.
    pub fn stop_at(&self, point: Point, radius: f64) -> Option<&Stop> {
        if radius <= 0.0 || !radius.is_finite() {
            return None;
        }

        let query = [point.x(), point.y()];
        self.tree
            .nearest_neighbor(&query)
            .filter(|node| node.distance_2(&query) <= radius * radius)
            .map(|node| &node.stop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifiers::StopIdentifier;

    fn stop(id: &str, x: f64, y: f64) -> Stop {
        Stop {
            id: StopIdentifier::new(id),
            name: id.into(),
            location: Point::new(x, y),
        }
    }

    #[test]
    fn test_hit_within_radius() {
        let index = CanvasIndex::new(&[stop("a", 100.0, 100.0), stop("b", 300.0, 300.0)]);

        let hit = index.stop_at(Point::new(104.0, 103.0), 10.0);
        assert_eq!(hit.map(|s| s.id.as_str()), Some("a"));
    }

    #[test]
    fn test_miss_outside_radius() {
        let index = CanvasIndex::new(&[stop("a", 100.0, 100.0)]);
        assert!(index.stop_at(Point::new(120.0, 100.0), 10.0).is_none());
    }

    #[test]
    fn test_nearest_wins_when_circles_overlap() {
        let index = CanvasIndex::new(&[stop("a", 100.0, 100.0), stop("b", 112.0, 100.0)]);

        let hit = index.stop_at(Point::new(107.0, 100.0), 10.0);
        assert_eq!(hit.map(|s| s.id.as_str()), Some("b"));
    }

    #[test]
    fn test_empty_index_and_bad_radius() {
        let empty = CanvasIndex::new(&[]);
        assert!(empty.stop_at(Point::new(0.0, 0.0), 10.0).is_none());

        let index = CanvasIndex::new(&[stop("a", 0.0, 0.0)]);
        assert!(index.stop_at(Point::new(0.0, 0.0), 0.0).is_none());
        assert!(index.stop_at(Point::new(0.0, 0.0), -5.0).is_none());
        assert!(index.stop_at(Point::new(0.0, 0.0), f64::NAN).is_none());
    }
}
