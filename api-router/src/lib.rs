use api_state::ApiState;
use axum::{
    extract::{DefaultBodyLimit, FromRef},
    middleware::from_fn_with_state,
    routing::{delete, get, post},
    Router,
};
use middleware_api_auth::admin_auth;
use routes::{
    documents::{create_document, delete_document, get_document, list_documents},
    probes::{live, ready},
    settings::{get_settings, update_settings},
    tutor::ask_tutor,
};

pub mod api_state;
pub mod error;
mod extract;
mod middleware_api_auth;
mod routes;

/// Router for API functionality, version 1
pub fn api_routes_v1<S>(app_state: &ApiState) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    ApiState: FromRef<S>,
{
    // Public, unauthenticated endpoints
    let public = Router::new()
        .route("/ready", get(ready))
        .route("/live", get(live))
        .route("/tutor/ask", post(ask_tutor))
        .route("/documents", get(list_documents))
        .route("/documents/{id}", get(get_document));

    // Document and settings administration (requires the admin key)
    let admin = Router::new()
        .route("/admin/documents", post(create_document))
        .route("/admin/documents/{id}", delete(delete_document))
        .route("/admin/settings", get(get_settings).patch(update_settings))
        .route_layer(from_fn_with_state(app_state.clone(), admin_auth));

    public
        .merge(admin)
        .layer(DefaultBodyLimit::max(app_state.config.request_body_limit_bytes))
}
