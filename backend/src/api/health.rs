use crate::api::method_not_allowed;
use crate::models::{ErrorResponse, HealthResponse};
use crate::AppState;
use rocket::response::status;
use rocket::serde::json::Json;
use rocket::{delete, get, post, put, State};

#[get("/health")]
pub fn health(state: &State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        api_key_configured: state.provider.is_configured(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

#[post("/health")]
pub fn health_post() -> status::Custom<Json<ErrorResponse>> {
    method_not_allowed()
}

#[put("/health")]
pub fn health_put() -> status::Custom<Json<ErrorResponse>> {
    method_not_allowed()
}

#[delete("/health")]
pub fn health_delete() -> status::Custom<Json<ErrorResponse>> {
    method_not_allowed()
}
