use rocket::{serde::json::Json, State};
use validator::Validate;

use crate::{
    db::DB,
    error::ApiError,
};

use super::types::{CreateUserRequest, UserResponse};

#[utoipa::path(context_path = "/users", responses(
    (status = 200, description = "The newly registered user", body = UserResponse),
    (status = 400, description = "Validation or uniqueness failure", body = ErrorResponse)
))]
#[post("/", data = "<request>")]
async fn create_user(
    request: Json<CreateUserRequest>,
    db: &State<DB>,
) -> Result<Json<UserResponse>, ApiError> {
    let request = request.into_inner();
    request
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let user = db.create_user(&request.username, &request.email).await?;
    rocket::info!("Registered user {} ({})", user.username, user.id);

    Ok(Json(user.into()))
}

#[utoipa::path(context_path = "/users", responses(
    (status = 200, description = "All registered users", body = [UserResponse])
))]
#[get("/")]
async fn get_users(db: &State<DB>) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = db.get_users().await?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

#[utoipa::path(context_path = "/users", responses(
    (status = 200, description = "The requested user", body = UserResponse),
    (status = 404, description = "Unknown user id", body = ErrorResponse)
))]
#[get("/<id>")]
async fn get_user(id: i64, db: &State<DB>) -> Result<Json<UserResponse>, ApiError> {
    let user = db.get_user(id).await?.ok_or(ApiError::UserNotFound)?;
    Ok(Json(user.into()))
}

pub fn stage() -> rocket::fairing::AdHoc {
    rocket::fairing::AdHoc::on_ignite("Installing user entrypoints", |rocket| async {
        rocket.mount("/users", routes![create_user, get_users, get_user])
    })
}
