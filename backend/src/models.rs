use crate::error::ApiError;
use serde::{Deserialize, Serialize};

/// Validated playlist identifier, constructed once per request from the
/// path parameter and never stored.
#[derive(Debug, Clone)]
pub struct PlaylistRef {
    pub id: String,
}

impl PlaylistRef {
    /// Cheap format sanity check, not real validation. Real YouTube playlist
    /// ids are well above this threshold.
    pub const MIN_ID_LEN: usize = 10;

    pub fn parse(id: &str) -> Result<Self, ApiError> {
        if id.len() < Self::MIN_ID_LEN {
            return Err(ApiError::InvalidInput);
        }
        Ok(PlaylistRef { id: id.to_string() })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistSummary {
    pub id: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Formatted clock string, or "N/A" when the duration was unavailable.
    pub duration: String,
}

/// Aggregated course payload, serialized as
/// `{id, title, description, videos, stats}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    #[serde(flatten)]
    pub playlist: PlaylistSummary,
    pub videos: Vec<VideoEntry>,
    pub stats: CourseStats,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseStats {
    pub total_videos: usize,
    /// Per-video detail-fetch failures only; skipped items are not counted.
    pub video_fetch_errors: u32,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub api_key_configured: bool,
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotFoundResponse {
    pub error: String,
    pub requested_url: String,
    pub available_endpoints: Vec<String>,
    pub message: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
