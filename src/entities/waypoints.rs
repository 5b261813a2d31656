use geo_types::Point;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<&Coordinates> for Point<f64> {
    fn from(coordinates: &Coordinates) -> Self {
        Point::new(coordinates.longitude, coordinates.latitude)
    }
}

// Ordered via points of a route, start first. Built once by whoever
// plans or loads the route; never mutated afterwards.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Waypoints(Vec<Coordinates>);

impl Waypoints {
    pub fn new(points: Vec<Coordinates>) -> Self {
        Self(points)
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn first(&self) -> Option<&Coordinates> {
        self.0.first()
    }

    pub fn last(&self) -> Option<&Coordinates> {
        self.0.last()
    }

    pub fn get(&self, index: usize) -> Option<&Coordinates> {
        self.0.get(index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coordinates> {
        self.0.iter()
    }
}

impl FromIterator<Coordinates> for Waypoints {
    fn from_iter<T: IntoIterator<Item = Coordinates>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Waypoints {
    type Item = &'a Coordinates;
    type IntoIter = std::slice::Iter<'a, Coordinates>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
