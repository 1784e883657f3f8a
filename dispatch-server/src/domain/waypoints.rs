//! Waypoint state: the movable origin and the destination list.

use super::GeoPoint;

/// The origin and the insertion-ordered destinations to visit after it.
///
/// Destinations grow one at a time as the user adds stops. Removal is
/// supported so a future edit flow does not force a redesign, even
/// though the click-to-add flow never removes.
#[derive(Debug, Clone, PartialEq)]
pub struct WaypointSet {
    origin: GeoPoint,
    destinations: Vec<GeoPoint>,
}

impl WaypointSet {
    /// Create a set with the given origin and no destinations.
    pub fn new(origin: GeoPoint) -> Self {
        Self {
            origin,
            destinations: Vec::new(),
        }
    }

    /// The current origin.
    pub fn origin(&self) -> GeoPoint {
        self.origin
    }

    /// Destinations in insertion order.
    pub fn destinations(&self) -> &[GeoPoint] {
        &self.destinations
    }

    /// Replace the origin.
    pub fn set_origin(&mut self, origin: GeoPoint) {
        self.origin = origin;
    }

    /// Append a destination.
    pub fn add_destination(&mut self, destination: GeoPoint) {
        self.destinations.push(destination);
    }

    /// Remove the destination at `index`, preserving the order of the
    /// rest. Returns false when the index is out of range.
    pub fn remove_destination(&mut self, index: usize) -> bool {
        if index < self.destinations.len() {
            self.destinations.remove(index);
            true
        } else {
            false
        }
    }

    /// Whether there are no destinations.
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    /// Number of destinations.
    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    /// Copied origin and destinations, for handing to an asynchronous
    /// pipeline that must not observe later mutations.
    pub fn snapshot(&self) -> (GeoPoint, Vec<GeoPoint>) {
        (self.origin, self.destinations.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).unwrap()
    }

    #[test]
    fn starts_empty() {
        let set = WaypointSet::new(point(45.5, -73.6));
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.origin(), point(45.5, -73.6));
    }

    #[test]
    fn preserves_insertion_order() {
        let mut set = WaypointSet::new(point(0.0, 0.0));
        set.add_destination(point(1.0, 1.0));
        set.add_destination(point(2.0, 2.0));
        set.add_destination(point(3.0, 3.0));

        assert_eq!(
            set.destinations(),
            &[point(1.0, 1.0), point(2.0, 2.0), point(3.0, 3.0)]
        );
    }

    #[test]
    fn set_origin_replaces() {
        let mut set = WaypointSet::new(point(0.0, 0.0));
        set.set_origin(point(45.5, -73.6));
        assert_eq!(set.origin(), point(45.5, -73.6));
    }

    #[test]
    fn remove_in_range() {
        let mut set = WaypointSet::new(point(0.0, 0.0));
        set.add_destination(point(1.0, 1.0));
        set.add_destination(point(2.0, 2.0));
        set.add_destination(point(3.0, 3.0));

        assert!(set.remove_destination(1));
        assert_eq!(set.destinations(), &[point(1.0, 1.0), point(3.0, 3.0)]);
    }

    #[test]
    fn remove_out_of_range() {
        let mut set = WaypointSet::new(point(0.0, 0.0));
        set.add_destination(point(1.0, 1.0));

        assert!(!set.remove_destination(1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn snapshot_is_a_copy() {
        let mut set = WaypointSet::new(point(0.0, 0.0));
        set.add_destination(point(1.0, 1.0));

        let (origin, destinations) = set.snapshot();
        set.set_origin(point(9.0, 9.0));
        set.add_destination(point(2.0, 2.0));

        assert_eq!(origin, point(0.0, 0.0));
        assert_eq!(destinations, vec![point(1.0, 1.0)]);
    }
}
