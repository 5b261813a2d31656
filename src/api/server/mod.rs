mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, patch, post},
    Router,
};

use crate::api::server::handlers::{itineraries, places, routes};
use crate::api::{interface::DynAPI, API};

pub async fn serve<T: API + Sync + Send + 'static>(api: T) {
    tracing_subscriber::fmt::init();

    let api = Arc::new(api) as DynAPI;

    let app = Router::new()
        .route("/routes", post(routes::plan).get(routes::list))
        .route("/routes/:id", get(routes::find).delete(routes::remove))
        .route("/routes/:id/name", patch(routes::rename))
        .route("/routes/:id/track", post(routes::track))
        .route("/itineraries/:id", get(itineraries::reopen))
        .route("/places", get(places::search))
        .layer(Extension(api));

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
