use axum::extract::{Extension, Json, Path};
use axum_macros::debug_handler;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    api::interface::DynAPI,
    entities::{Coordinates, Plan, RouteData, RouteSummary, Waypoints},
    error::Error,
    liveride::TrackStatus,
};

#[derive(Serialize, Deserialize)]
pub struct PlanParams {
    points: Waypoints,
    plan: Option<Plan>,
    save: Option<bool>,
}

#[debug_handler]
pub async fn plan(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<PlanParams>,
) -> Result<Json<RouteData>, Error> {
    let route = api
        .plan_route(params.points, params.plan, params.save)
        .await?;

    Ok(route.into())
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<Json<RouteData>, Error> {
    let route = api.find_route(id).await?;

    Ok(route.into())
}

pub async fn list(Extension(api): Extension<DynAPI>) -> Result<Json<Vec<RouteSummary>>, Error> {
    let summaries = api.list_routes().await?;

    Ok(summaries.into())
}

#[derive(Serialize, Deserialize)]
pub struct RenameParams {
    name: String,
}

pub async fn rename(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
    Json(params): Json<RenameParams>,
) -> Result<Json<RouteSummary>, Error> {
    let summary = api.rename_route(id, params.name).await?;

    Ok(summary.into())
}

pub async fn remove(Extension(api): Extension<DynAPI>, Path(id): Path<Uuid>) -> Result<(), Error> {
    api.delete_route(id).await
}

#[derive(Serialize, Deserialize)]
pub struct TrackParams {
    position: Coordinates,
    next_waypoint: usize,
}

pub async fn track(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
    Json(params): Json<TrackParams>,
) -> Result<Json<TrackStatus>, Error> {
    let status = api
        .track_route(id, params.position, params.next_waypoint)
        .await?;

    Ok(status.into())
}
