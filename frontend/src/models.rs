use serde::{Deserialize, Serialize};

/// Aggregated course payload, consumed verbatim from the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseData {
    pub id: String,
    pub title: String,
    pub description: String,
    pub videos: Vec<CourseVideo>,
    pub stats: CourseStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseVideo {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Clock string, or "N/A" when the backend could not resolve it.
    pub duration: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseStats {
    pub total_videos: usize,
    pub video_fetch_errors: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
