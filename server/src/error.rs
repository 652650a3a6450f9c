use rocket::{http::Status, response, serde::json::Json, Request};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error taxonomy surfaced to the transport layer. Every failing operation
/// returns one of these; partial state is never committed on failure.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("Username already taken")]
    DuplicateUsername,
    #[error("Email already registered")]
    DuplicateEmail,
    #[error("User not found")]
    UserNotFound,
    #[error("You have already checked in today. Keep up the great streak!")]
    AlreadyCheckedInToday,
    #[error("Internal server error")]
    Persistence(#[from] sqlx::Error),
}

impl ApiError {
    const fn status(&self) -> Status {
        match self {
            Self::Validation(_)
            | Self::DuplicateUsername
            | Self::DuplicateEmail
            | Self::AlreadyCheckedInToday => Status::BadRequest,
            Self::UserNotFound => Status::NotFound,
            Self::Persistence(_) => Status::InternalServerError,
        }
    }

    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::DuplicateUsername => "DUPLICATE_USERNAME",
            Self::DuplicateEmail => "DUPLICATE_EMAIL",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::AlreadyCheckedInToday => "ALREADY_CHECKED_IN_TODAY",
            Self::Persistence(_) => "INTERNAL_ERROR",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl<'r> response::Responder<'r, 'static> for ApiError {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        if let Self::Persistence(e) = &self {
            rocket::error!("Persistence failure: {e}");
        }

        let status = self.status();
        let body = Json(ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
        });

        let mut response = body.respond_to(req)?;
        response.set_status(status);
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_to_expected_statuses() {
        assert_eq!(ApiError::UserNotFound.status(), Status::NotFound);
        assert_eq!(ApiError::DuplicateUsername.status(), Status::BadRequest);
        assert_eq!(ApiError::DuplicateEmail.status(), Status::BadRequest);
        assert_eq!(ApiError::AlreadyCheckedInToday.status(), Status::BadRequest);
        assert_eq!(
            ApiError::Validation("bad".into()).status(),
            Status::BadRequest
        );
        assert_eq!(
            ApiError::Persistence(sqlx::Error::PoolClosed).status(),
            Status::InternalServerError
        );
    }

    #[test]
    fn persistence_failures_hide_details() {
        let error = ApiError::Persistence(sqlx::Error::PoolClosed);
        assert_eq!(error.kind(), "INTERNAL_ERROR");
        assert_eq!(error.to_string(), "Internal server error");
    }
}
