use super::Engine;

use async_trait::async_trait;
use chrono::Utc;
use futures::TryStreamExt;
use serde::{Deserialize, Serialize};
use sqlx::{types::Json, Acquire, Executor, Row};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    api::RouteAPI,
    entities::{Coordinates, Plan, RouteData, RouteSummary, Waypoints},
    error::{invalid_input_error, unexpected_error, Error},
    liveride::{self, TrackStatus},
};

// The JSONB document carries what the summary columns do not.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct StoredRoute {
    json: String,
    points: Arc<Waypoints>,
}

fn should_persist(save_route: Option<bool>, auto_save: bool) -> bool {
    match save_route {
        Some(decision) => decision,
        None => auto_save,
    }
}

#[async_trait]
impl RouteAPI for Engine {
    #[tracing::instrument(skip(self, route))]
    async fn register_route(
        &self,
        route: &RouteData,
        plan: Plan,
    ) -> Result<Option<RouteSummary>, Error> {
        if !should_persist(route.save_route(), self.settings.auto_save_routes) {
            tracing::info!(
                "save flag {:?} resolved to false, skipping...",
                route.save_route()
            );
            return Ok(None);
        }

        let summary = RouteSummary::new(Uuid::new_v4(), route.name().to_string(), plan, Utc::now());

        let document = StoredRoute {
            json: route.json().to_string(),
            points: Arc::clone(route.points()),
        };

        let mut conn = self.pool.acquire().await?;

        conn.execute(
            sqlx::query(
                "INSERT INTO routes (id, name, plan, saved_at, data) VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(&summary.id)
            .bind(&summary.name)
            .bind(summary.plan.name())
            .bind(&summary.saved_at)
            .bind(Json(&document)),
        )
        .await?;

        tracing::info!(
            "save flag {:?} resolved to true, saved route",
            route.save_route()
        );

        Ok(Some(summary))
    }

    #[tracing::instrument(skip(self))]
    async fn find_route(&self, id: Uuid) -> Result<RouteData, Error> {
        let mut conn = self.pool.acquire().await?;

        let maybe_result = conn
            .fetch_optional(sqlx::query("SELECT name, data FROM routes WHERE id = $1").bind(&id))
            .await?;

        let result = maybe_result.ok_or_else(|| invalid_input_error())?;

        let name: String = result.try_get("name")?;
        let Json(document): Json<StoredRoute> = result.try_get("data")?;

        // a loaded route carries no fresh save decision
        Ok(RouteData::new(document.json, document.points, name, None))
    }

    #[tracing::instrument(skip(self))]
    async fn list_routes(&self) -> Result<Vec<RouteSummary>, Error> {
        let mut conn = self.pool.acquire().await?;

        let mut results = conn.fetch(sqlx::query(
            "SELECT id, name, plan, saved_at FROM routes ORDER BY saved_at DESC",
        ));

        let mut summaries = Vec::new();

        while let Some(row) = results.try_next().await? {
            let plan_name: String = row.try_get("plan")?;
            let plan = Plan::from_name(&plan_name).ok_or_else(|| unexpected_error())?;

            summaries.push(RouteSummary::new(
                row.try_get("id")?,
                row.try_get("name")?,
                plan,
                row.try_get("saved_at")?,
            ));
        }

        Ok(summaries)
    }

    #[tracing::instrument(skip(self))]
    async fn rename_route(&self, id: Uuid, name: String) -> Result<RouteSummary, Error> {
        let mut conn = self.pool.acquire().await?;
        let mut tx = conn.begin().await?;

        let maybe_result = tx
            .fetch_optional(
                sqlx::query("SELECT plan, saved_at FROM routes WHERE id = $1 FOR UPDATE").bind(&id),
            )
            .await?;

        let result = maybe_result.ok_or_else(|| invalid_input_error())?;

        let plan_name: String = result.try_get("plan")?;
        let plan = Plan::from_name(&plan_name).ok_or_else(|| unexpected_error())?;
        let saved_at = result.try_get("saved_at")?;

        tx.execute(
            sqlx::query("UPDATE routes SET name = $2 WHERE id = $1")
                .bind(&id)
                .bind(&name),
        )
        .await?;

        tx.commit().await?;

        Ok(RouteSummary::new(id, name, plan, saved_at))
    }

    #[tracing::instrument(skip(self))]
    async fn delete_route(&self, id: Uuid) -> Result<(), Error> {
        let mut conn = self.pool.acquire().await?;

        let result = conn
            .execute(sqlx::query("DELETE FROM routes WHERE id = $1").bind(&id))
            .await?;

        if result.rows_affected() == 0 {
            return Err(invalid_input_error());
        }

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn track_route(
        &self,
        id: Uuid,
        position: Coordinates,
        next_waypoint: usize,
    ) -> Result<TrackStatus, Error> {
        let route = self.find_route(id).await?;

        Ok(liveride::assess(
            &position,
            route.points(),
            next_waypoint,
            &self.settings,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_decision_wins_over_preference() {
        assert!(should_persist(Some(true), false));
        assert!(!should_persist(Some(false), true));
    }

    #[test]
    fn test_unset_decision_follows_preference() {
        assert!(should_persist(None, true));
        assert!(!should_persist(None, false));
    }
}
