use rocket::{fairing::AdHoc, serde::json::Json};

pub mod checkin;
pub mod leaderboard;
pub mod types;
pub mod users;

use types::HealthResponse;

#[utoipa::path(responses(
    (status = 200, description = "Service health status", body = HealthResponse)
))]
#[get("/")]
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        message: "Daily Streak API is running!",
    })
}

pub fn stage() -> AdHoc {
    AdHoc::on_ignite("Installing entrypoints", |rocket| async {
        rocket
            .mount("/", routes![health])
            .attach(users::stage())
            .attach(checkin::stage())
            .attach(leaderboard::stage())
    })
}
