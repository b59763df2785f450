use crate::error::ApiError;
use crate::models::{PlaylistRef, PlaylistSummary};
use crate::services::aggregator::build_course;
use crate::services::provider::{PlaylistItem, PlaylistPage, Provider, VideoProvider};
use crate::{build_rocket, AppState};
use async_trait::async_trait;
use rocket::http::{ContentType, Method, Status};
use rocket::local::blocking::Client;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// In-memory provider scripted per test. Counts every call so tests can
/// assert which outbound requests would have been made.
#[derive(Default)]
struct ScriptedProvider {
    summary: Option<PlaylistSummary>,
    summary_error: Option<ApiError>,
    pages: Vec<PlaylistPage>,
    failing_videos: HashSet<String>,
    summary_calls: AtomicUsize,
    page_calls: AtomicUsize,
    video_calls: AtomicUsize,
}

#[async_trait]
impl VideoProvider for ScriptedProvider {
    async fn playlist_summary(
        &self,
        _playlist_id: &str,
    ) -> Result<Option<PlaylistSummary>, ApiError> {
        self.summary_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = &self.summary_error {
            return Err(error.clone());
        }
        Ok(self.summary.clone())
    }

    async fn playlist_page(
        &self,
        _playlist_id: &str,
        page_token: Option<&str>,
    ) -> Result<PlaylistPage, ApiError> {
        self.page_calls.fetch_add(1, Ordering::SeqCst);
        let index = match page_token {
            None => 0,
            Some(token) => token
                .strip_prefix("page-")
                .and_then(|n| n.parse().ok())
                .unwrap_or(0),
        };
        Ok(self.pages[index].clone())
    }

    async fn video_duration(&self, video_id: &str) -> Result<Option<String>, ApiError> {
        self.video_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing_videos.contains(video_id) {
            return Err(ApiError::Upstream {
                code: 500,
                message: "Backend Error".to_string(),
            });
        }
        Ok(Some("PT4M13S".to_string()))
    }
}

const PLAYLIST_ID: &str = "PLtest1234567890";

fn summary() -> PlaylistSummary {
    PlaylistSummary {
        id: PLAYLIST_ID.to_string(),
        title: "Rust for Everyone".to_string(),
        description: "A full course".to_string(),
    }
}

fn item(id: &str) -> PlaylistItem {
    PlaylistItem {
        video_id: Some(id.to_string()),
        title: format!("Lesson {id}"),
        description: format!("About {id}"),
    }
}

/// Three pages of 50/50/4 items with ids v<page>-<index>, chained by
/// continuation tokens.
fn three_pages() -> Vec<PlaylistPage> {
    let sizes = [50usize, 50, 4];
    sizes
        .iter()
        .enumerate()
        .map(|(page, &size)| PlaylistPage {
            items: (0..size).map(|i| item(&format!("v{page}-{i}"))).collect(),
            next_page_token: if page + 1 < sizes.len() {
                Some(format!("page-{}", page + 1))
            } else {
                None
            },
        })
        .collect()
}

fn client_with(provider: Arc<ScriptedProvider>) -> Client {
    let rocket = build_rocket(AppState {
        provider: Provider::Configured(provider),
    });
    Client::tracked(rocket).expect("valid rocket instance")
}

fn unconfigured_client() -> Client {
    let rocket = build_rocket(AppState {
        provider: Provider::Unconfigured,
    });
    Client::tracked(rocket).expect("valid rocket instance")
}

#[test]
fn health_reports_configured_key() {
    let client = client_with(Arc::new(ScriptedProvider::default()));
    let response = client.get("/api/health").dispatch();

    assert_eq!(response.status(), Status::Ok);
    let body: Value = response.into_json().expect("json body");
    assert_eq!(body["status"], "OK");
    assert_eq!(body["apiKeyConfigured"], true);
    assert!(body["timestamp"].is_string());
}

#[test]
fn health_reports_missing_key() {
    let client = unconfigured_client();
    let response = client.get("/api/health").dispatch();

    assert_eq!(response.status(), Status::Ok);
    let body: Value = response.into_json().expect("json body");
    assert_eq!(body["apiKeyConfigured"], false);
}

#[test]
fn missing_key_fails_playlist_requests_regardless_of_id() {
    let client = unconfigured_client();
    let response = client.get(format!("/api/playlist/{PLAYLIST_ID}")).dispatch();

    assert_eq!(response.status(), Status::InternalServerError);
    let body: Value = response.into_json().expect("json body");
    assert_eq!(
        body["error"],
        "YouTube API key not configured. Please contact the administrator."
    );
}

#[test]
fn short_playlist_id_is_rejected_before_any_outbound_call() {
    let provider = Arc::new(ScriptedProvider::default());
    let client = client_with(provider.clone());

    let response = client.get("/api/playlist/short").dispatch();

    assert_eq!(response.status(), Status::BadRequest);
    let body: Value = response.into_json().expect("json body");
    assert_eq!(body["error"], "Invalid playlist ID format.");
    assert_eq!(provider.summary_calls.load(Ordering::SeqCst), 0);
    assert_eq!(provider.page_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn empty_playlist_maps_to_not_found() {
    let provider = Arc::new(ScriptedProvider::default());
    let client = client_with(provider);

    let response = client.get(format!("/api/playlist/{PLAYLIST_ID}")).dispatch();

    assert_eq!(response.status(), Status::NotFound);
    let body: Value = response.into_json().expect("json body");
    assert_eq!(
        body["error"],
        "Playlist not found. Please check if the playlist URL is correct and the playlist is public."
    );
}

#[test]
fn quota_exhaustion_maps_to_forbidden() {
    let provider = Arc::new(ScriptedProvider {
        summary_error: Some(ApiError::Upstream {
            code: 403,
            message: "quotaExceeded".to_string(),
        }),
        ..ScriptedProvider::default()
    });
    let client = client_with(provider);

    let response = client.get(format!("/api/playlist/{PLAYLIST_ID}")).dispatch();

    assert_eq!(response.status(), Status::Forbidden);
    let body: Value = response.into_json().expect("json body");
    assert_eq!(
        body["error"],
        "YouTube API quota exceeded or invalid API key. Please contact the administrator."
    );
}

#[test]
fn aggregates_full_playlist_in_order() {
    let provider = Arc::new(ScriptedProvider {
        summary: Some(summary()),
        pages: three_pages(),
        ..ScriptedProvider::default()
    });
    let client = client_with(provider.clone());

    let response = client.get(format!("/api/playlist/{PLAYLIST_ID}")).dispatch();

    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.content_type(), Some(ContentType::JSON));
    let body: Value = response.into_json().expect("json body");
    assert_eq!(body["id"], PLAYLIST_ID);
    assert_eq!(body["title"], "Rust for Everyone");
    assert_eq!(body["description"], "A full course");

    let videos = body["videos"].as_array().expect("videos array");
    assert_eq!(videos.len(), 104);
    assert_eq!(videos[0]["id"], "v0-0");
    assert_eq!(videos[0]["duration"], "4:13");
    assert_eq!(videos[103]["id"], "v2-3");
    assert_eq!(body["stats"]["totalVideos"], 104);
    assert_eq!(body["stats"]["videoFetchErrors"], 0);
    assert_eq!(provider.page_calls.load(Ordering::SeqCst), 3);
}

#[test]
fn error_budget_truncates_pagination_without_reordering() {
    let failing_videos: HashSet<String> =
        (10..15).map(|i| format!("v1-{i}")).collect();
    let provider = Arc::new(ScriptedProvider {
        summary: Some(summary()),
        pages: three_pages(),
        failing_videos,
        ..ScriptedProvider::default()
    });
    let client = client_with(provider.clone());

    let response = client.get(format!("/api/playlist/{PLAYLIST_ID}")).dispatch();

    assert_eq!(response.status(), Status::Ok);
    let body: Value = response.into_json().expect("json body");
    let videos = body["videos"].as_array().expect("videos array");

    // 50 from page 0, then page 1 up to and including the fifth failure.
    assert_eq!(videos.len(), 65);
    assert_eq!(body["stats"]["totalVideos"], 65);
    assert_eq!(body["stats"]["videoFetchErrors"], 5);

    // Failed entries are still emitted, with the sentinel duration.
    assert_eq!(videos[60]["id"], "v1-10");
    assert_eq!(videos[60]["duration"], "N/A");
    assert_eq!(videos[64]["id"], "v1-14");

    // Nothing from page 3, and the page itself was never requested.
    assert!(videos
        .iter()
        .all(|v| !v["id"].as_str().unwrap().starts_with("v2-")));
    assert_eq!(provider.page_calls.load(Ordering::SeqCst), 2);
}

#[test]
fn repeated_requests_are_byte_identical() {
    let provider = Arc::new(ScriptedProvider {
        summary: Some(summary()),
        pages: three_pages(),
        ..ScriptedProvider::default()
    });
    let client = client_with(provider);

    let uri = format!("/api/playlist/{PLAYLIST_ID}");
    let first = client.get(uri.as_str()).dispatch().into_string().expect("body");
    let second = client.get(uri.as_str()).dispatch().into_string().expect("body");
    assert_eq!(first, second);
}

#[test]
fn options_returns_empty_ok_on_every_route() {
    let client = unconfigured_client();

    for uri in ["/api/health", "/api/playlist/whatever", "/anything/else"] {
        let response = client.req(Method::Options, uri).dispatch();
        assert_eq!(response.status(), Status::Ok, "{uri}");
        assert!(response.into_string().unwrap_or_default().is_empty(), "{uri}");
    }
}

#[test]
fn non_get_methods_are_rejected() {
    let client = unconfigured_client();

    let response = client.post("/api/health").dispatch();
    assert_eq!(response.status(), Status::MethodNotAllowed);
    let body: Value = response.into_json().expect("json body");
    assert_eq!(
        body["error"],
        "Method not allowed. Only GET requests are supported."
    );

    let response = client.delete(format!("/api/playlist/{PLAYLIST_ID}")).dispatch();
    assert_eq!(response.status(), Status::MethodNotAllowed);
}

#[test]
fn unknown_path_lists_available_endpoints() {
    let client = unconfigured_client();
    let response = client.get("/api/nope").dispatch();

    assert_eq!(response.status(), Status::NotFound);
    let body: Value = response.into_json().expect("json body");
    assert_eq!(body["error"], "Endpoint not found");
    assert_eq!(body["requestedUrl"], "/api/nope");
    assert_eq!(body["message"], "Please check the URL and try again.");
    let endpoints = body["availableEndpoints"].as_array().expect("endpoints");
    assert!(endpoints.contains(&Value::from("/api/health")));
    assert!(endpoints.contains(&Value::from("/api/playlist/:playlistId")));
}

#[rocket::async_test]
async fn aggregator_skips_items_without_video_id() {
    let provider = Arc::new(ScriptedProvider {
        summary: Some(summary()),
        pages: vec![PlaylistPage {
            items: vec![
                item("v0-0"),
                PlaylistItem {
                    video_id: None,
                    title: "Deleted video".to_string(),
                    description: String::new(),
                },
                item("v0-2"),
            ],
            next_page_token: None,
        }],
        ..ScriptedProvider::default()
    });
    let handle = Provider::Configured(provider.clone());

    let playlist = PlaylistRef::parse(PLAYLIST_ID).expect("valid id");
    let course = build_course(&handle, &playlist).await.expect("course");

    assert_eq!(course.stats.total_videos, 2);
    assert_eq!(course.stats.video_fetch_errors, 0);
    assert_eq!(course.videos[0].id, "v0-0");
    assert_eq!(course.videos[1].id, "v0-2");
    assert_eq!(provider.video_calls.load(Ordering::SeqCst), 2);
}

#[rocket::async_test]
async fn aggregator_fails_fast_when_unconfigured() {
    let playlist = PlaylistRef::parse(PLAYLIST_ID).expect("valid id");
    let result = build_course(&Provider::Unconfigured, &playlist).await;
    assert!(matches!(result, Err(ApiError::Configuration)));
}
