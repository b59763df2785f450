pub mod course;
pub mod health;

pub use course::*;
pub use health::*;

use crate::models::{ErrorResponse, NotFoundResponse};
use rocket::http::Status;
use rocket::response::status;
use rocket::serde::json::Json;
use rocket::{catch, options, Request};

pub(crate) fn method_not_allowed() -> status::Custom<Json<ErrorResponse>> {
    status::Custom(
        Status::MethodNotAllowed,
        Json(ErrorResponse {
            error: "Method not allowed. Only GET requests are supported.".to_string(),
        }),
    )
}

/// CORS preflight. The cors fairing appends the actual headers.
#[options("/<_..>")]
pub fn preflight() -> Status {
    Status::Ok
}

#[catch(404)]
pub fn not_found(request: &Request) -> Json<NotFoundResponse> {
    Json(NotFoundResponse {
        error: "Endpoint not found".to_string(),
        requested_url: request.uri().to_string(),
        available_endpoints: vec![
            "/api/health".to_string(),
            "/api/playlist/:playlistId".to_string(),
        ],
        message: "Please check the URL and try again.".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
