use geo::{Bearing, Distance, Haversine, Point};
use serde::{Deserialize, Serialize};

use crate::{
    entities::{Coordinates, Waypoints},
    settings::Settings,
};

pub const ARRIVAL_RADIUS_M: f64 = 20.0;

const MEAN_EARTH_RADIUS_M: f64 = 6_371_008.8;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TrackStatus {
    Finished,
    Arrived { waypoint: usize },
    NearingTurn { waypoint: usize, distance_m: f64 },
    OnCourse { waypoint: usize, distance_m: f64 },
    OffCourse { distance_m: f64 },
    ReplanNeeded { distance_m: f64 },
}

// One verdict per position fix. The caller owns the cursor: on
// Arrived it advances next_waypoint, on ReplanNeeded it requests a
// fresh route from wherever the rider actually is.
pub fn assess(
    position: &Coordinates,
    points: &Waypoints,
    next_waypoint: usize,
    settings: &Settings,
) -> TrackStatus {
    let target = match points.get(next_waypoint) {
        Some(target) => target,
        None => return TrackStatus::Finished,
    };

    let here: Point<f64> = position.into();
    let distance_to_target = Haversine.distance(here, target.into());

    if distance_to_target <= ARRIVAL_RADIUS_M {
        return TrackStatus::Arrived {
            waypoint: next_waypoint,
        };
    }

    let distance_from_route = distance_from_route(here, points);

    if distance_from_route > settings.replan_distance_m {
        return TrackStatus::ReplanNeeded {
            distance_m: distance_from_route,
        };
    }

    if distance_from_route > settings.offtrack_distance_m {
        return TrackStatus::OffCourse {
            distance_m: distance_from_route,
        };
    }

    if distance_to_target <= settings.nearing_turn_distance_m {
        return TrackStatus::NearingTurn {
            waypoint: next_waypoint,
            distance_m: distance_to_target,
        };
    }

    TrackStatus::OnCourse {
        waypoint: next_waypoint,
        distance_m: distance_to_target,
    }
}

fn distance_from_route(position: Point<f64>, points: &Waypoints) -> f64 {
    if points.len() < 2 {
        return points
            .first()
            .map(|point| Haversine.distance(position, point.into()))
            .unwrap_or(f64::INFINITY);
    }

    let legs = points.iter().zip(points.iter().skip(1));

    legs.map(|(start, end)| distance_to_leg(position, start.into(), end.into()))
        .fold(f64::INFINITY, f64::min)
}

// Great-circle cross-track distance, clamped to the nearer endpoint
// when the position falls beyond either end of the leg.
fn distance_to_leg(position: Point<f64>, start: Point<f64>, end: Point<f64>) -> f64 {
    let leg_length = Haversine.distance(start, end);
    let from_start = Haversine.distance(start, position);

    if leg_length == 0.0 {
        return from_start;
    }

    let to_position = Haversine.bearing(start, position);
    let along_leg = Haversine.bearing(start, end);
    let delta = (to_position - along_leg).to_radians();

    if delta.cos() < 0.0 {
        return from_start;
    }

    let angular_from_start = from_start / MEAN_EARTH_RADIUS_M;
    let cross_track = (angular_from_start.sin() * delta.sin()).asin();
    let along_track = (angular_from_start.cos() / cross_track.cos()).clamp(-1.0, 1.0).acos();

    if along_track * MEAN_EARTH_RADIUS_M > leg_length {
        return Haversine.distance(end, position);
    }

    cross_track.abs() * MEAN_EARTH_RADIUS_M
}
