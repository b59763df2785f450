use crate::api::method_not_allowed;
use crate::error::ApiError;
use crate::models::{Course, ErrorResponse, PlaylistRef};
use crate::services::aggregator::build_course;
use crate::AppState;
use log::{error, info};
use rocket::response::status;
use rocket::serde::json::Json;
use rocket::{delete, get, post, put, State};

#[get("/playlist/<playlist_id>")]
pub async fn get_course(
    playlist_id: &str,
    state: &State<AppState>,
) -> Result<Json<Course>, ApiError> {
    // Rejects malformed ids before any outbound call is made.
    let playlist = PlaylistRef::parse(playlist_id)?;

    match build_course(&state.provider, &playlist).await {
        Ok(course) => {
            info!(
                "Aggregated playlist {}: {} videos, {} fetch errors",
                playlist.id, course.stats.total_videos, course.stats.video_fetch_errors
            );
            Ok(Json(course))
        }
        Err(e) => {
            error!("Failed to aggregate playlist {}: {e}", playlist.id);
            Err(e)
        }
    }
}

#[post("/playlist/<_>")]
pub fn playlist_post() -> status::Custom<Json<ErrorResponse>> {
    method_not_allowed()
}

#[put("/playlist/<_>")]
pub fn playlist_put() -> status::Custom<Json<ErrorResponse>> {
    method_not_allowed()
}

#[delete("/playlist/<_>")]
pub fn playlist_delete() -> status::Custom<Json<ErrorResponse>> {
    method_not_allowed()
}
