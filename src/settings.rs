use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entities::Plan;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Units {
    Kilometres,
    Miles,
}

impl Units {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "km" | "kilometres" => Some(Self::Kilometres),
            "miles" => Some(Self::Miles),
            _ => None,
        }
    }

    pub fn describe_distance(&self, meters: f64) -> String {
        match self {
            Self::Kilometres => format!("{:.1} km", meters / 1000.0),
            Self::Miles => format!("{:.1} miles", meters / 1609.344),
        }
    }
}

// Rider preferences. Everything has a sensible default; the
// environment only overrides.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub plan: Plan,
    pub speed_kmh: u32,
    pub units: Units,
    pub auto_save_routes: bool,
    pub nearing_turn_distance_m: f64,
    pub offtrack_distance_m: f64,
    pub replan_distance_m: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            plan: Plan::Balanced,
            speed_kmh: 20,
            units: Units::Kilometres,
            auto_save_routes: true,
            nearing_turn_distance_m: 100.0,
            offtrack_distance_m: 50.0,
            replan_distance_m: 100.0,
        }
    }
}

impl Settings {
    // Unset or unparseable variables keep the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            plan: env::var("ROUTE_PLAN")
                .ok()
                .and_then(|v| Plan::from_name(&v))
                .unwrap_or(defaults.plan),
            speed_kmh: parse_var("ROUTE_SPEED_KMH", defaults.speed_kmh),
            units: env::var("ROUTE_UNITS")
                .ok()
                .and_then(|v| Units::from_name(&v))
                .unwrap_or(defaults.units),
            auto_save_routes: parse_var("ROUTE_AUTO_SAVE", defaults.auto_save_routes),
            nearing_turn_distance_m: parse_var(
                "LIVERIDE_NEARING_TURN_M",
                defaults.nearing_turn_distance_m,
            ),
            offtrack_distance_m: parse_var("LIVERIDE_OFFTRACK_M", defaults.offtrack_distance_m),
            replan_distance_m: parse_var("LIVERIDE_REPLAN_M", defaults.replan_distance_m),
        }
    }
}

fn parse_var<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
