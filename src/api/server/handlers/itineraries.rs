use axum::extract::{Extension, Json, Path, Query};
use serde::{Deserialize, Serialize};

use crate::{
    api::interface::DynAPI,
    entities::{Plan, RouteData},
    error::Error,
};

#[derive(Serialize, Deserialize)]
pub struct ReopenParams {
    plan: Option<Plan>,
}

pub async fn reopen(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<i64>,
    Query(params): Query<ReopenParams>,
) -> Result<Json<RouteData>, Error> {
    let route = api.reopen_route(id, params.plan).await?;

    Ok(route.into())
}
