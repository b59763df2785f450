use crate::error::ApiError;
use crate::models::PlaylistSummary;
use async_trait::async_trait;
use std::sync::Arc;

/// One page of playlist items, in provider order.
#[derive(Debug, Clone)]
pub struct PlaylistPage {
    pub items: Vec<PlaylistItem>,
    /// Continuation token for the next page, absent on the last page.
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PlaylistItem {
    /// Missing for deleted or private playlist entries.
    pub video_id: Option<String>,
    pub title: String,
    pub description: String,
}

/// Read-only capability surface of the video metadata provider. The
/// aggregator depends on this trait, not on the HTTP transport behind it.
#[async_trait]
pub trait VideoProvider: Send + Sync {
    /// Playlist title and description, or `None` when the provider returns
    /// no matching item.
    async fn playlist_summary(
        &self,
        playlist_id: &str,
    ) -> Result<Option<PlaylistSummary>, ApiError>;

    async fn playlist_page(
        &self,
        playlist_id: &str,
        page_token: Option<&str>,
    ) -> Result<PlaylistPage, ApiError>;

    /// Raw ISO8601 duration of a single video, or `None` when the video
    /// no longer exists.
    async fn video_duration(&self, video_id: &str) -> Result<Option<String>, ApiError>;
}

/// Provider handle held by the application state. Constructed once at
/// startup; `Unconfigured` when no API key is present, in which case every
/// playlist request fails with a configuration error while health checks
/// keep working.
pub enum Provider {
    Configured(Arc<dyn VideoProvider>),
    Unconfigured,
}

impl Provider {
    pub fn is_configured(&self) -> bool {
        matches!(self, Provider::Configured(_))
    }
}
