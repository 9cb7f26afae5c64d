//! Application-specific readiness check with a real database probe.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use axum_helpers::server::{run_health_checks, HealthCheckFuture};
use sea_orm::DatabaseConnection;

/// Readiness check endpoint that verifies the database connection.
///
/// Uses the generic `run_health_checks` aggregation so further
/// dependencies can be added as more checks.
pub async fn ready_handler(State(db): State<DatabaseConnection>) -> Response {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "database",
        Box::pin(async {
            database::postgres::check_health(&db)
                .await
                .map_err(|e| e.to_string())
        }),
    )];

    match run_health_checks(checks).await {
        Ok((status, json)) => (status, json).into_response(),
        Err((status, json)) => (status, json).into_response(),
    }
}

/// Router exposing `/ready`, nested under `/api` by the server builder
pub fn router(db: DatabaseConnection) -> Router {
    Router::new().route("/ready", get(ready_handler)).with_state(db)
}
