use rocket::{serde::json::Json, State};

use crate::{db::DB, error::ApiError};

use super::types::LeaderboardEntry;

const LEADERBOARD_SIZE: i64 = 10;

#[utoipa::path(context_path = "/leaderboard", responses(
    (status = 200, description = "Top users by total XP", body = [LeaderboardEntry])
))]
#[get("/")]
async fn get_leaderboard(db: &State<DB>) -> Result<Json<Vec<LeaderboardEntry>>, ApiError> {
    let records = db.get_leaderboard(LEADERBOARD_SIZE).await?;

    Ok(Json(
        records
            .into_iter()
            .enumerate()
            .map(|(i, record)| LeaderboardEntry::new(i as u32 + 1, record))
            .collect(),
    ))
}

pub fn stage() -> rocket::fairing::AdHoc {
    rocket::fairing::AdHoc::on_ignite("Installing leaderboard entrypoints", |rocket| async {
        rocket.mount("/leaderboard", routes![get_leaderboard])
    })
}
