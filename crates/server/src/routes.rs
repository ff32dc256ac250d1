pub mod addresses;
pub mod auth;
pub mod contacts;
pub mod users;

use axum::{
    extract::State,
    middleware,
    routing::{delete, get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{warn, Level};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::extract::ApiJson;
use crate::openapi::ApiDoc;
use auth::ServerState;

/// `{"data": ...}` envelope of every successful response.
#[derive(Serialize)]
pub struct Data<T> {
    pub data: T,
}

pub(crate) const OK: &str = "OK";

pub(crate) fn ok<T>(data: T) -> ApiJson<Data<T>> { ApiJson(Data { data }) }

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse)))]
pub async fn health(State(state): State<ServerState>) -> Json<Health> {
    match state.db.ping().await {
        Ok(()) => Json(Health::up()),
        Err(e) => {
            warn!(error = %e, "database ping failed");
            Json(Health::degraded())
        }
    }
}

/// Build the full application router: public user routes, token-protected
/// routes, and the OpenAPI docs.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/api/users", post(users::register))
        .route("/api/users/login", post(users::login));

    // path params share one name per position so the router accepts both shapes
    let protected = Router::new()
        .route("/api/users/current", get(users::current).patch(users::update))
        .route("/api/users/logout", delete(users::logout))
        .route("/api/contacts", post(contacts::create).get(contacts::search))
        .route("/api/contacts/:id", get(contacts::get).put(contacts::update).delete(contacts::remove))
        .route("/api/contacts/:id/addresses", post(addresses::create).get(addresses::list))
        .route(
            "/api/contacts/:id/addresses/:address_id",
            get(addresses::get).put(addresses::update).delete(addresses::remove),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::require_token));

    public
        .merge(protected)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
