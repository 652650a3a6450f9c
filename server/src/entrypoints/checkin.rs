use rocket::{serde::json::Json, State};
use shared::motivational_message;

use crate::{
    db::DB,
    error::ApiError,
};

use super::types::{CheckInRequest, CheckInResponse};

#[utoipa::path(context_path = "/checkin", responses(
    (status = 200, description = "Check-in accepted", body = CheckInResponse),
    (status = 400, description = "Already checked in today", body = ErrorResponse),
    (status = 404, description = "Unknown user id", body = ErrorResponse)
))]
#[post("/", data = "<request>")]
async fn check_in(
    request: Json<CheckInRequest>,
    db: &State<DB>,
) -> Result<Json<CheckInResponse>, ApiError> {
    let today = chrono::Local::now().date_naive();
    let outcome = db.check_in(request.user_id, today).await?;

    rocket::info!(
        "User {} checked in: streak {}, {} XP earned",
        request.user_id,
        outcome.streak,
        outcome.xp_earned
    );

    Ok(Json(CheckInResponse {
        success: true,
        message: motivational_message(outcome.streak, outcome.is_comeback).to_string(),
        xp_earned: outcome.xp_earned,
        current_streak: outcome.streak,
        total_xp: outcome.total_xp,
        milestone_bonus: outcome.milestone_bonus,
    }))
}

pub fn stage() -> rocket::fairing::AdHoc {
    rocket::fairing::AdHoc::on_ignite("Installing check-in entrypoints", |rocket| async {
        rocket.mount("/checkin", routes![check_in])
    })
}
