use actix_web::{web, HttpResponse};

use sf_shared::{HealthResponse, HealthStatus};

use crate::state::AppState;

/// `GET /health`
///
/// Reports `degraded` with 503 when the database does not answer.
pub async fn health(state: web::Data<AppState>) -> HttpResponse {
    let mut response = HealthResponse::healthy(state.environment.to_string());

    if let Some(database) = &state.database {
        let reachable = match database.health_check().await {
            Ok(ok) => ok,
            Err(e) => {
                tracing::warn!(error = %e, "Database health check failed");
                false
            }
        };
        tracing::debug!(pool = %database.get_statistics(), "Database pool");
        if !reachable {
            response.status = HealthStatus::Degraded;
            return HttpResponse::ServiceUnavailable().json(response);
        }
    }

    HttpResponse::Ok().json(response)
}
