#[macro_use]
extern crate rocket;

mod api;
mod config;
mod error;
mod models;
mod services;
#[cfg(test)]
mod tests;
mod utils;

use crate::config::{create_cors, create_provider, init_logger, load_environment};
use crate::services::provider::Provider;
use rocket::{Build, Rocket};

pub struct AppState {
    pub provider: Provider,
}

pub fn build_rocket(state: AppState) -> Rocket<Build> {
    let cors = create_cors().expect("Failed to create CORS options");

    rocket::build()
        .manage(state)
        .mount(
            "/api",
            routes![
                api::health::health,
                api::health::health_post,
                api::health::health_put,
                api::health::health_delete,
                api::course::get_course,
                api::course::playlist_post,
                api::course::playlist_put,
                api::course::playlist_delete,
            ],
        )
        .mount("/", routes![api::preflight])
        .register("/", catchers![api::not_found])
        .attach(cors)
}

#[launch]
fn rocket() -> _ {
    load_environment();
    init_logger();

    build_rocket(AppState {
        provider: create_provider(),
    })
}
