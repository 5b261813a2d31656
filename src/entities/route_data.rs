use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::entities::Waypoints;

// Carries one planned route between the planner, the UI and the store.
// The payload is whatever the journey planner returned, verbatim;
// nothing here parses or validates it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RouteData {
    name: String,
    json: String,
    points: Arc<Waypoints>,
    save_route: Option<bool>,
}

impl RouteData {
    pub fn new(
        json: String,
        points: Arc<Waypoints>,
        name: String,
        save_route: Option<bool>,
    ) -> Self {
        Self {
            name,
            json,
            points,
            save_route,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn json(&self) -> &str {
        &self.json
    }

    pub fn points(&self) -> &Arc<Waypoints> {
        &self.points
    }

    // None means nobody has decided yet; the store falls back to the
    // rider's auto-save preference.
    pub fn save_route(&self) -> Option<bool> {
        self.save_route
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_return_constructor_values() {
        let points = Arc::new(Waypoints::empty());
        let route = RouteData::new(
            "{\"coords\":[]}".into(),
            Arc::clone(&points),
            "Morning Ride".into(),
            Some(true),
        );

        assert_eq!(route.name(), "Morning Ride");
        assert_eq!(route.json(), "{\"coords\":[]}");
        assert_eq!(route.save_route(), Some(true));
        assert_eq!(**route.points(), *points);
    }

    #[test]
    fn test_points_alias_the_shared_waypoints() {
        let points = Arc::new(Waypoints::empty());
        let route = RouteData::new("{}".into(), Arc::clone(&points), "".into(), None);

        // same allocation, not a copy, on every call
        assert!(Arc::ptr_eq(route.points(), &points));
        assert!(Arc::ptr_eq(route.points(), route.points()));
    }

    #[test]
    fn test_save_route_keeps_all_three_states() {
        let points = Arc::new(Waypoints::empty());

        let keep = RouteData::new("{}".into(), Arc::clone(&points), "a".into(), Some(true));
        let discard = RouteData::new("{}".into(), Arc::clone(&points), "b".into(), Some(false));
        let undecided = RouteData::new("{}".into(), Arc::clone(&points), "c".into(), None);

        assert_eq!(keep.save_route(), Some(true));
        assert_eq!(discard.save_route(), Some(false));
        assert_eq!(undecided.save_route(), None);
    }

    #[test]
    fn test_repeated_reads_are_stable() {
        let points = Arc::new(Waypoints::empty());
        let route = RouteData::new(
            "{\"coords\":[]}".into(),
            points,
            "Morning Ride".into(),
            Some(false),
        );

        for _ in 0..3 {
            assert_eq!(route.name(), "Morning Ride");
            assert_eq!(route.json(), "{\"coords\":[]}");
            assert_eq!(route.save_route(), Some(false));
        }
    }
}
