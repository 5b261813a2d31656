use std::env;

use dotenv::dotenv;

use veloroute::api::serve;
use veloroute::db::PgPool;
use veloroute::engine::Engine;
use veloroute::settings::Settings;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let db_uri = env::var("DATABASE_URL").unwrap();

    let PgPool(pool) = PgPool::new(&db_uri, 5).await.unwrap();

    let settings = Settings::from_env();
    let engine = Engine::new(pool, settings).await.unwrap();

    serve(engine).await;
}
