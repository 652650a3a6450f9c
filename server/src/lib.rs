#[macro_use]
extern crate rocket;

pub mod db;
pub mod entrypoints;
pub mod error;

use rocket::{figment::Figment, Build, Rocket};

/// Assembles the Rocket instance from a figment, so tests can inject their
/// own database configuration.
pub fn build(figment: Figment) -> Rocket<Build> {
    let cors = rocket_cors::CorsOptions::default()
        .to_cors()
        .expect("Failed to build CORS options");

    rocket::custom(figment)
        .attach(db::stage())
        .attach(entrypoints::stage())
        .attach(cors)
}
