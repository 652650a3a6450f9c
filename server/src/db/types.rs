use chrono::NaiveDate;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub total_xp: i64,
    pub current_streak: i64,
    pub last_check_in_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, FromRow)]
pub struct LeaderboardRecord {
    pub username: String,
    pub total_xp: i64,
    pub current_streak: i64,
}

/// Everything a route needs to build the check-in response, computed and
/// committed inside a single transaction.
#[derive(Debug, Clone, Copy)]
pub struct CheckInOutcome {
    pub streak: u32,
    pub is_comeback: bool,
    pub xp_earned: u32,
    pub milestone_bonus: u32,
    pub total_xp: u32,
}
