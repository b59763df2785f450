use crate::error::ApiError;
use crate::models::{Course, CourseStats, PlaylistRef, VideoEntry};
use crate::services::provider::Provider;
use crate::utils::format_duration;
use log::warn;

/// Tolerated per-video detail-fetch failures before pagination is aborted.
pub const MAX_VIDEO_FETCH_ERRORS: u32 = 5;

/// Builds the course view for one playlist: playlist metadata, then every
/// playlist item page by page, then one duration lookup per video.
///
/// All provider calls are awaited strictly sequentially; the output order is
/// the provider's pagination order, and exhausting the error budget only
/// shortens the tail, never reorders. A failed duration lookup still emits
/// the video (duration "N/A") and bumps the error counter; once the budget
/// is reached, the remaining items and all further pages are dropped.
pub async fn build_course(provider: &Provider, playlist: &PlaylistRef) -> Result<Course, ApiError> {
    let Provider::Configured(provider) = provider else {
        return Err(ApiError::Configuration);
    };

    let summary = provider
        .playlist_summary(&playlist.id)
        .await?
        .ok_or(ApiError::NotFound)?;

    let mut videos: Vec<VideoEntry> = Vec::new();
    let mut video_fetch_errors = 0u32;
    let mut page_token: Option<String> = None;

    'pages: loop {
        let page = provider
            .playlist_page(&playlist.id, page_token.as_deref())
            .await?;

        for item in page.items {
            // Deleted/private entries carry no video id and are not errors.
            let Some(video_id) = item.video_id else {
                continue;
            };

            let duration = match provider.video_duration(&video_id).await {
                Ok(raw) => format_duration(raw.as_deref()),
                Err(e) => {
                    video_fetch_errors += 1;
                    warn!("Failed to fetch video details for {video_id}: {e}");
                    format_duration(None)
                }
            };

            videos.push(VideoEntry {
                id: video_id,
                title: item.title,
                description: item.description,
                duration,
            });

            if video_fetch_errors >= MAX_VIDEO_FETCH_ERRORS {
                warn!("Too many video fetch errors ({video_fetch_errors}), stopping processing");
                break 'pages;
            }
        }

        match page.next_page_token {
            Some(token) => page_token = Some(token),
            None => break,
        }
    }

    Ok(Course {
        playlist: summary,
        stats: CourseStats {
            total_videos: videos.len(),
            video_fetch_errors,
        },
        videos,
    })
}
