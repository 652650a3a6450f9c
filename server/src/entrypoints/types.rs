use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::db::types::{LeaderboardRecord, UserRecord};

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(length(min = 2, max = 50, message = "Username must be 2-50 characters"))]
    pub username: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub total_xp: u32,
    pub current_streak: u32,
    pub last_check_in_date: Option<NaiveDate>,
}

impl From<UserRecord> for UserResponse {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            username: record.username,
            email: record.email,
            total_xp: record.total_xp as u32,
            current_streak: record.current_streak as u32,
            last_check_in_date: record.last_check_in_date,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CheckInRequest {
    pub user_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CheckInResponse {
    pub success: bool,
    pub message: String,
    pub xp_earned: u32,
    pub current_streak: u32,
    pub total_xp: u32,
    pub milestone_bonus: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub username: String,
    pub total_xp: u32,
    pub current_streak: u32,
}

impl LeaderboardEntry {
    pub fn new(rank: u32, record: LeaderboardRecord) -> Self {
        Self {
            rank,
            username: record.username,
            total_xp: record.total_xp as u32,
            current_streak: record.current_streak as u32,
        }
    }
}
