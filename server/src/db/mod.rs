use chrono::NaiveDate;
use rocket::{
    fairing::{self, AdHoc},
    Build, Rocket,
};
use rocket_db_pools::Database;
use shared::{evaluate_streak, milestone_bonus, BASE_XP};
use sqlx::SqlitePool;

use crate::error::ApiError;

pub mod types;

use types::{CheckInOutcome, LeaderboardRecord, UserRecord};

#[derive(Database, Clone, Debug)]
#[database("daily_streak")]
pub struct DB(pub SqlitePool);

const SELECT_USER: &str =
    "SELECT id, username, email, total_xp, current_streak, last_check_in_date
     FROM users
     WHERE id = ?";

impl DB {
    pub async fn create_user(&self, username: &str, email: &str) -> Result<UserRecord, ApiError> {
        let mut tx = self.0.begin().await?;

        let taken: Option<i64> = sqlx::query_scalar("SELECT id FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(tx.as_mut())
            .await?;
        if taken.is_some() {
            return Err(ApiError::DuplicateUsername);
        }

        let registered: Option<i64> = sqlx::query_scalar("SELECT id FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(tx.as_mut())
            .await?;
        if registered.is_some() {
            return Err(ApiError::DuplicateEmail);
        }

        // The unique constraints back up the checks above in case another
        // registration commits between our read and this insert.
        let id: i64 =
            sqlx::query_scalar("INSERT INTO users (username, email) VALUES (?, ?) RETURNING id")
                .bind(username)
                .bind(email)
                .fetch_one(tx.as_mut())
                .await
                .map_err(|e| match e.as_database_error() {
                    Some(db_err) if db_err.message().contains("users.username") => {
                        ApiError::DuplicateUsername
                    }
                    Some(db_err) if db_err.message().contains("users.email") => {
                        ApiError::DuplicateEmail
                    }
                    _ => ApiError::from(e),
                })?;

        tx.commit().await?;

        Ok(UserRecord {
            id,
            username: username.to_string(),
            email: email.to_string(),
            total_xp: 0,
            current_streak: 0,
            last_check_in_date: None,
        })
    }

    pub async fn get_user(&self, id: i64) -> Result<Option<UserRecord>, ApiError> {
        Ok(sqlx::query_as(SELECT_USER)
            .bind(id)
            .fetch_optional(&self.0)
            .await?)
    }

    pub async fn get_users(&self) -> Result<Vec<UserRecord>, ApiError> {
        Ok(sqlx::query_as(
            "SELECT id, username, email, total_xp, current_streak, last_check_in_date
             FROM users
             ORDER BY id",
        )
        .fetch_all(&self.0)
        .await?)
    }

    /// Runs the whole check-in sequence inside one transaction: duplicate-day
    /// guard, streak evaluation, reward calculation, user update and the
    /// check-in log entry. Either all of it commits or none of it does.
    pub async fn check_in(
        &self,
        user_id: i64,
        today: NaiveDate,
    ) -> Result<CheckInOutcome, ApiError> {
        let mut tx = self.0.begin().await?;

        let user: UserRecord = sqlx::query_as(SELECT_USER)
            .bind(user_id)
            .fetch_optional(tx.as_mut())
            .await?
            .ok_or(ApiError::UserNotFound)?;

        if user.last_check_in_date == Some(today) {
            return Err(ApiError::AlreadyCheckedInToday);
        }

        let outcome = evaluate_streak(user.last_check_in_date, today, user.current_streak as u32);
        let bonus = milestone_bonus(outcome.streak);
        let xp_earned = BASE_XP + bonus;

        // The date guard repeats the duplicate check so that concurrent
        // check-ins for the same user cannot both credit the same day.
        let updated = sqlx::query(
            "UPDATE users
             SET total_xp = total_xp + ?, current_streak = ?, last_check_in_date = ?
             WHERE id = ? AND (last_check_in_date IS NULL OR last_check_in_date <> ?)",
        )
        .bind(xp_earned as i64)
        .bind(outcome.streak as i64)
        .bind(today)
        .bind(user_id)
        .bind(today)
        .execute(tx.as_mut())
        .await?;

        if updated.rows_affected() == 0 {
            return Err(ApiError::AlreadyCheckedInToday);
        }

        sqlx::query("INSERT INTO checkins (user_id, checkin_date, xp_earned) VALUES (?, ?, ?)")
            .bind(user_id)
            .bind(today)
            .bind(xp_earned as i64)
            .execute(tx.as_mut())
            .await?;

        tx.commit().await?;

        Ok(CheckInOutcome {
            streak: outcome.streak,
            is_comeback: outcome.is_comeback,
            xp_earned,
            milestone_bonus: bonus,
            total_xp: user.total_xp as u32 + xp_earned,
        })
    }

    /// Top users by total XP, descending. Ties break on user id ascending so
    /// the order is stable between requests.
    pub async fn get_leaderboard(&self, limit: i64) -> Result<Vec<LeaderboardRecord>, ApiError> {
        Ok(sqlx::query_as(
            "SELECT username, total_xp, current_streak
             FROM users
             ORDER BY total_xp DESC, id ASC
             LIMIT ?",
        )
        .bind(limit)
        .fetch_all(&self.0)
        .await?)
    }
}

async fn run_migrations(rocket: Rocket<Build>) -> fairing::Result {
    match DB::fetch(&rocket) {
        Some(db) => match sqlx::migrate!("./migrations").run(&**db).await {
            Ok(_) => Ok(rocket),
            Err(e) => {
                rocket::error!("Failed to initialize SQLx database: {}", e);
                Err(rocket)
            }
        },
        None => Err(rocket),
    }
}

pub fn stage() -> AdHoc {
    AdHoc::on_ignite("SQLx Stage", |rocket| async {
        rocket
            .attach(DB::init())
            .attach(AdHoc::try_on_ignite("SQLx Migrations", run_migrations))
    })
}
