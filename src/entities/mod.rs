mod plan;
mod route_data;
mod route_summary;
mod waypoints;

pub use plan::Plan;
pub use route_data::RouteData;
pub use route_summary::RouteSummary;
pub use waypoints::{Coordinates, Waypoints};
