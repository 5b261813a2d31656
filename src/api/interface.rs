use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::entities::{Coordinates, Plan, RouteData, RouteSummary, Waypoints};
use crate::error::Error;
use crate::liveride::TrackStatus;

#[async_trait]
pub trait JourneyAPI {
    async fn plan_route(
        &self,
        points: Waypoints,
        plan: Option<Plan>,
        save: Option<bool>,
    ) -> Result<RouteData, Error>;

    async fn reopen_route(&self, itinerary: i64, plan: Option<Plan>) -> Result<RouteData, Error>;
}

#[async_trait]
pub trait RouteAPI {
    async fn register_route(
        &self,
        route: &RouteData,
        plan: Plan,
    ) -> Result<Option<RouteSummary>, Error>;

    async fn find_route(&self, id: Uuid) -> Result<RouteData, Error>;
    async fn list_routes(&self) -> Result<Vec<RouteSummary>, Error>;
    async fn rename_route(&self, id: Uuid, name: String) -> Result<RouteSummary, Error>;
    async fn delete_route(&self, id: Uuid) -> Result<(), Error>;

    async fn track_route(
        &self,
        id: Uuid,
        position: Coordinates,
        next_waypoint: usize,
    ) -> Result<TrackStatus, Error>;
}

pub trait API: JourneyAPI + RouteAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
