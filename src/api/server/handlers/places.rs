use axum::extract::{Json, Query};
use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    external::journey_planner::{self, Place},
};

#[derive(Serialize, Deserialize)]
pub struct SearchParams {
    q: String,
}

pub async fn search(Query(params): Query<SearchParams>) -> Result<Json<Vec<Place>>, Error> {
    let places = journey_planner::geocode(params.q).await?;

    Ok(places.into())
}
