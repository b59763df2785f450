use crate::models::ErrorResponse;
use rocket::http::{ContentType, Status};
use rocket::request::Request;
use rocket::response::Responder;
use rocket::{response, Response};
use std::io::Cursor;
use thiserror::Error;

/// Everything that can go wrong while serving a playlist request.
///
/// `Upstream` carries the code reported by the YouTube API error body, which
/// drives the HTTP status mapping at the boundary.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("YouTube API key not configured")]
    Configuration,
    #[error("invalid playlist ID")]
    InvalidInput,
    #[error("playlist not found or empty")]
    NotFound,
    #[error("YouTube API error {code}: {message}")]
    Upstream { code: u16, message: String },
}

impl ApiError {
    /// Wraps a transport-level failure (connection refused, DNS, body read)
    /// where no provider-reported code exists.
    pub fn transport(err: reqwest::Error) -> Self {
        ApiError::Upstream {
            code: 500,
            message: err.to_string(),
        }
    }

    pub fn status(&self) -> Status {
        match self {
            ApiError::Configuration => Status::InternalServerError,
            ApiError::InvalidInput => Status::BadRequest,
            ApiError::NotFound => Status::NotFound,
            ApiError::Upstream { code: 400, .. } => Status::BadRequest,
            ApiError::Upstream { code: 403, .. } => Status::Forbidden,
            ApiError::Upstream { code: 404, .. } => Status::NotFound,
            ApiError::Upstream { message, .. } if message.contains("API key not valid") => {
                Status::Forbidden
            }
            ApiError::Upstream { .. } => Status::InternalServerError,
        }
    }

    /// User-facing message sent in the JSON error body. Internal detail such
    /// as upstream messages stays in the logs.
    pub fn public_message(&self) -> &'static str {
        match self {
            ApiError::Configuration => {
                "YouTube API key not configured. Please contact the administrator."
            }
            ApiError::InvalidInput | ApiError::Upstream { code: 400, .. } => {
                "Invalid playlist ID format."
            }
            ApiError::NotFound | ApiError::Upstream { code: 404, .. } => {
                "Playlist not found. Please check if the playlist URL is correct and the playlist is public."
            }
            ApiError::Upstream { code: 403, .. } => {
                "YouTube API quota exceeded or invalid API key. Please contact the administrator."
            }
            ApiError::Upstream { message, .. } if message.contains("API key not valid") => {
                "Invalid YouTube API key. Please contact the administrator."
            }
            ApiError::Upstream { .. } => {
                "Failed to fetch playlist data from YouTube. Please try again later."
            }
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let body = ErrorResponse {
            error: self.public_message().to_string(),
        };
        let json = serde_json::to_string(&body).unwrap();
        Response::build()
            .status(self.status())
            .header(ContentType::JSON)
            .sized_body(json.len(), Cursor::new(json))
            .ok()
    }
}
