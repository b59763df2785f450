use crate::env_variable_utils::API_BASE_URL;
use crate::models::{CourseData, CourseVideo, ErrorResponse};
use crate::utils::extract_playlist_id;
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use web_sys::AbortController;
use yew::prelude::*;

const REQUEST_TIMEOUT_MS: u32 = 30_000;

/// Fetches the aggregated course for a playlist URL and writes the outcome
/// into the caller's state handles. The first video is preselected so the
/// player starts on lesson one.
pub async fn fetch_course(
    playlist_url: String,
    course_data: UseStateHandle<Option<CourseData>>,
    current_video: UseStateHandle<Option<CourseVideo>>,
    error_message: UseStateHandle<Option<String>>,
    loading: UseStateHandle<bool>,
) {
    let Some(playlist_id) = extract_playlist_id(&playlist_url) else {
        handle_error(
            &error_message,
            "Invalid YouTube playlist URL. Please make sure you are using a valid playlist URL that contains \"?list=\" parameter.".to_string(),
        );
        loading.set(false);
        return;
    };

    let base_url = &*API_BASE_URL;
    let url = format!("{base_url}/playlist/{}", urlencoding::encode(&playlist_id));
    log::info!("Fetching playlist {playlist_id} from {url}");

    // Abort the request if the backend takes longer than the timeout.
    let controller = AbortController::new().ok();
    let signal = controller.as_ref().map(|c| c.signal());
    let timeout = controller
        .clone()
        .map(|c| Timeout::new(REQUEST_TIMEOUT_MS, move || c.abort()));

    let response = Request::get(&url)
        .abort_signal(signal.as_ref())
        .header("Accept", "application/json")
        .send()
        .await;

    if let Some(timeout) = timeout {
        timeout.cancel();
    }

    match response {
        Ok(response) => {
            if response.ok() {
                match response.json::<CourseData>().await {
                    Ok(data) => {
                        current_video.set(data.videos.first().cloned());
                        course_data.set(Some(data));
                        error_message.set(None);
                    }
                    Err(e) => {
                        handle_error(&error_message, format!("Failed to parse course data: {e}"))
                    }
                }
            } else {
                let status = response.status();
                // Try to parse as structured error response first
                let server_error = match response.text().await {
                    Ok(error_text) => serde_json::from_str::<ErrorResponse>(&error_text)
                        .map(|body| body.error)
                        .ok(),
                    Err(_) => None,
                };

                let message = match server_error {
                    Some(error) if status == 500 && error.contains("API key") => {
                        "Backend configuration error: Invalid or missing YouTube API key. Please contact the administrator.".to_string()
                    }
                    Some(error) if status == 500 => format!("Server error: {error}"),
                    Some(error) => error,
                    None if status == 500 => {
                        "Server error: Failed to fetch playlist data from YouTube.".to_string()
                    }
                    None => format!("HTTP error! status: {status}"),
                };
                handle_error(&error_message, message);
            }
        }
        Err(e) => {
            if is_abort_error(&e) {
                handle_error(
                    &error_message,
                    "Request timeout. The server is taking too long to respond. Please try again."
                        .to_string(),
                );
            } else {
                handle_error(
                    &error_message,
                    format!("Unable to connect to the backend service at {base_url}. Please try again later."),
                );
            }
        }
    }

    loading.set(false);
}

fn is_abort_error(error: &gloo_net::Error) -> bool {
    matches!(error, gloo_net::Error::JsError(js) if js.name == "AbortError")
}

fn handle_error(error_message: &UseStateHandle<Option<String>>, error: String) {
    error_message.set(Some(error.clone()));
    web_sys::console::error_1(&error.into());
}
