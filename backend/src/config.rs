use crate::services::provider::Provider;
use crate::services::youtube::YouTubeClient;
use anyhow::Result;
use env_logger::Builder;
use log::{info, warn, LevelFilter};
use rocket::http::Method;
use rocket_cors::{AllowedHeaders, AllowedOrigins, CorsOptions};
use std::env;
use std::sync::Arc;

/// Default value shipped in .env templates; treated the same as no key.
const API_KEY_PLACEHOLDER: &str = "YOUR_API_KEY_HERE";

pub fn load_environment() {
    dotenv::dotenv().ok();
}

pub fn init_logger() {
    Builder::new().filter_level(LevelFilter::Info).init();
    info!("Starting Rocket backend...");
}

/// Builds the provider handle from YOUTUBE_API_KEY. A missing or placeholder
/// key yields an unconfigured handle; the server still starts and health
/// checks report the state.
pub fn create_provider() -> Provider {
    match env::var("YOUTUBE_API_KEY") {
        Ok(key) if !key.is_empty() && key != API_KEY_PLACEHOLDER => {
            Provider::Configured(Arc::new(YouTubeClient::new(key)))
        }
        _ => {
            warn!("YOUTUBE_API_KEY not configured. Playlist requests will fail until it is set.");
            Provider::Unconfigured
        }
    }
}

pub fn create_cors() -> Result<rocket_cors::Cors> {
    let cors = CorsOptions::default()
        .allowed_origins(AllowedOrigins::all())
        .allowed_methods(
            vec![Method::Get, Method::Options]
                .into_iter()
                .map(From::from)
                .collect(),
        )
        .allowed_headers(AllowedHeaders::some(&["Accept", "Content-Type"]))
        .to_cors()
        .map_err(|e| anyhow::anyhow!("Failed to create CORS options: {}", e))?;

    Ok(cors)
}
