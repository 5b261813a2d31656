use super::Engine;

use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    api::{JourneyAPI, RouteAPI},
    entities::{Plan, RouteData, Waypoints},
    error::{invalid_input_error, Error},
    external::journey_planner::{self, JourneyOverview},
};

#[async_trait]
impl JourneyAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn plan_route(
        &self,
        points: Waypoints,
        plan: Option<Plan>,
        save: Option<bool>,
    ) -> Result<RouteData, Error> {
        if points.len() < 2 {
            return Err(invalid_input_error());
        }

        let plan = plan.unwrap_or(self.settings.plan);

        let body = journey_planner::plan_journey(&points, plan, self.settings.speed_kmh).await?;
        let overview = JourneyOverview::from_json(&body)?;

        if let Some(length_m) = overview.length_m {
            tracing::info!(
                "planned '{}' covering {}",
                overview.name,
                self.settings.units.describe_distance(length_m)
            );
        }

        let route = RouteData::new(body, Arc::new(points), overview.name, save);

        self.register_route(&route, plan).await?;

        Ok(route)
    }

    #[tracing::instrument(skip(self))]
    async fn reopen_route(&self, itinerary: i64, plan: Option<Plan>) -> Result<RouteData, Error> {
        let plan = plan.unwrap_or(self.settings.plan);

        let body = journey_planner::retrieve_journey(itinerary, plan).await?;
        let overview = JourneyOverview::from_json(&body)?;

        // the planner only reports the endpoints of a stored itinerary
        let points: Waypoints = [overview.start, overview.finish]
            .into_iter()
            .flatten()
            .collect();

        Ok(RouteData::new(body, Arc::new(points), overview.name, None))
    }
}
