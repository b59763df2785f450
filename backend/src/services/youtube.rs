use crate::error::ApiError;
use crate::models::PlaylistSummary;
use crate::services::provider::{PlaylistItem, PlaylistPage, VideoProvider};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

const API_BASE: &str = "https://www.googleapis.com/youtube/v3";

/// Items per playlistItems page, the maximum the API allows.
pub const PAGE_SIZE: u32 = 50;

/// YouTube Data API v3 client. One instance per process, cheap to share.
pub struct YouTubeClient {
    http: Client,
    api_key: String,
}

impl YouTubeClient {
    pub fn new(api_key: String) -> Self {
        YouTubeClient {
            http: Client::new(),
            api_key,
        }
    }

    async fn get_json(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<Value, ApiError> {
        let url = format!("{API_BASE}/{endpoint}");
        let response = self
            .http
            .get(&url)
            .query(query)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(ApiError::transport)?;

        let status = response.status();
        let body = response.json::<Value>().await.unwrap_or(Value::Null);

        if !status.is_success() {
            // https://developers.google.com/youtube/v3/docs/errors
            let code = body["error"]["code"]
                .as_u64()
                .unwrap_or(u64::from(status.as_u16())) as u16;
            let message = body["error"]["message"]
                .as_str()
                .unwrap_or("YouTube API request failed")
                .to_string();
            return Err(ApiError::Upstream { code, message });
        }

        Ok(body)
    }
}

#[async_trait]
impl VideoProvider for YouTubeClient {
    // Documentation: https://developers.google.com/youtube/v3/docs/playlists
    async fn playlist_summary(
        &self,
        playlist_id: &str,
    ) -> Result<Option<PlaylistSummary>, ApiError> {
        let response = self
            .get_json("playlists", &[("part", "snippet"), ("id", playlist_id)])
            .await?;

        let Some(item) = response["items"].as_array().and_then(|items| items.first()) else {
            return Ok(None);
        };

        Ok(Some(PlaylistSummary {
            id: playlist_id.to_string(),
            title: item["snippet"]["title"].as_str().unwrap_or("").to_string(),
            description: item["snippet"]["description"]
                .as_str()
                .unwrap_or("")
                .to_string(),
        }))
    }

    // Documentation: https://developers.google.com/youtube/v3/docs/playlistItems
    async fn playlist_page(
        &self,
        playlist_id: &str,
        page_token: Option<&str>,
    ) -> Result<PlaylistPage, ApiError> {
        let max_results = PAGE_SIZE.to_string();
        let mut query = vec![
            ("part", "snippet,contentDetails"),
            ("playlistId", playlist_id),
            ("maxResults", max_results.as_str()),
        ];
        if let Some(token) = page_token {
            query.push(("pageToken", token));
        }

        let response = self.get_json("playlistItems", &query).await?;

        let items = response["items"]
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .map(|item| PlaylistItem {
                        video_id: item["contentDetails"]["videoId"]
                            .as_str()
                            .map(String::from),
                        title: item["snippet"]["title"].as_str().unwrap_or("").to_string(),
                        description: item["snippet"]["description"]
                            .as_str()
                            .unwrap_or("")
                            .to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(PlaylistPage {
            items,
            next_page_token: response["nextPageToken"].as_str().map(String::from),
        })
    }

    // Documentation: https://developers.google.com/youtube/v3/docs/videos
    async fn video_duration(&self, video_id: &str) -> Result<Option<String>, ApiError> {
        let response = self
            .get_json("videos", &[("part", "contentDetails"), ("id", video_id)])
            .await?;

        Ok(response["items"][0]["contentDetails"]["duration"]
            .as_str()
            .map(String::from))
    }
}
