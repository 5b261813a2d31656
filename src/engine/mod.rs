mod journey_api;
mod route_api;

use sqlx::{Executor, Pool, Postgres};

use crate::{api::API, error::Error, settings::Settings};

type Database = Postgres;

#[derive(Debug)]
pub struct Engine {
    pool: Pool<Database>,
    settings: Settings,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub async fn new(pool: Pool<Database>, settings: Settings) -> Result<Self, Error> {
        // route store
        // TODO: move this to migrations
        pool.execute(
            "CREATE TABLE IF NOT EXISTS routes (id UUID PRIMARY KEY, name VARCHAR NOT NULL, plan VARCHAR NOT NULL, saved_at TIMESTAMPTZ NOT NULL, data JSONB NOT NULL)",
        )
        .await?;

        Ok(Self { pool, settings })
    }
}

impl API for Engine {}
