use daily_streak_server::{build, db::DB};
use rocket::{http::Status, local::asynchronous::Client};
use rocket_db_pools::Database;
use serde_json::{json, Value};
use shared::StreakBand;

async fn client() -> Client {
    let figment = rocket::Config::figment()
        .merge(("databases.daily_streak.url", "sqlite::memory:"))
        .merge(("databases.daily_streak.max_connections", 1))
        .merge(("log_level", "off"));

    Client::tracked(build(figment))
        .await
        .expect("valid rocket instance")
}

async fn create_user(client: &Client, username: &str, email: &str) -> Value {
    let response = client
        .post("/users")
        .json(&json!({ "username": username, "email": email }))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    response.into_json::<Value>().await.expect("user json")
}

#[rocket::async_test]
async fn health_check_reports_healthy() {
    let client = client().await;

    let response = client.get("/").dispatch().await;
    assert_eq!(response.status(), Status::Ok);

    let body = response.into_json::<Value>().await.expect("health json");
    assert_eq!(body["status"], "healthy");
}

#[rocket::async_test]
async fn new_users_start_with_zeroed_counters() {
    let client = client().await;

    let user = create_user(&client, "newuser", "new@gmail.com").await;
    assert_eq!(user["username"], "newuser");
    assert_eq!(user["email"], "new@gmail.com");
    assert_eq!(user["total_xp"], 0);
    assert_eq!(user["current_streak"], 0);
    assert_eq!(user["last_check_in_date"], Value::Null);
}

#[rocket::async_test]
async fn duplicate_username_is_rejected() {
    let client = client().await;
    create_user(&client, "duplicate", "first@gmail.com").await;

    let response = client
        .post("/users")
        .json(&json!({ "username": "duplicate", "email": "second@gmail.com" }))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::BadRequest);

    let body = response.into_json::<Value>().await.expect("error json");
    assert_eq!(body["error"], "DUPLICATE_USERNAME");
}

#[rocket::async_test]
async fn duplicate_email_is_rejected() {
    let client = client().await;
    create_user(&client, "original", "same@gmail.com").await;

    let response = client
        .post("/users")
        .json(&json!({ "username": "different", "email": "same@gmail.com" }))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::BadRequest);

    let body = response.into_json::<Value>().await.expect("error json");
    assert_eq!(body["error"], "DUPLICATE_EMAIL");
}

#[rocket::async_test]
async fn malformed_registrations_fail_validation() {
    let client = client().await;

    for payload in [
        json!({ "username": "x", "email": "short@gmail.com" }),
        json!({ "username": "a".repeat(51), "email": "long@gmail.com" }),
        json!({ "username": "validname", "email": "not-an-email" }),
    ] {
        let response = client.post("/users").json(&payload).dispatch().await;
        assert_eq!(response.status(), Status::BadRequest);

        let body = response.into_json::<Value>().await.expect("error json");
        assert_eq!(body["error"], "VALIDATION_ERROR");
    }
}

#[rocket::async_test]
async fn first_check_in_earns_base_xp() {
    let client = client().await;
    let user = create_user(&client, "checkinuser", "checkin@gmail.com").await;

    let response = client
        .post("/checkin")
        .json(&json!({ "user_id": user["id"] }))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);

    let body = response.into_json::<Value>().await.expect("check-in json");
    assert_eq!(body["success"], true);
    assert_eq!(body["xp_earned"], 10);
    assert_eq!(body["current_streak"], 1);
    assert_eq!(body["total_xp"], 10);
    assert_eq!(body["milestone_bonus"], 0);

    let message = body["message"].as_str().expect("message string");
    assert!(StreakBand::for_streak(1).pool().contains(&message));
}

#[rocket::async_test]
async fn same_day_check_in_is_rejected_without_side_effects() {
    let client = client().await;
    let user = create_user(&client, "twiceuser", "twice@gmail.com").await;
    let payload = json!({ "user_id": user["id"] });

    let first = client.post("/checkin").json(&payload).dispatch().await;
    assert_eq!(first.status(), Status::Ok);

    let second = client.post("/checkin").json(&payload).dispatch().await;
    assert_eq!(second.status(), Status::BadRequest);
    let body = second.into_json::<Value>().await.expect("error json");
    assert_eq!(body["error"], "ALREADY_CHECKED_IN_TODAY");

    // The rejected attempt must not have touched the user.
    let response = client
        .get(format!("/users/{}", user["id"]))
        .dispatch()
        .await;
    let refreshed = response.into_json::<Value>().await.expect("user json");
    assert_eq!(refreshed["total_xp"], 10);
    assert_eq!(refreshed["current_streak"], 1);
}

#[rocket::async_test]
async fn check_in_for_unknown_user_is_not_found() {
    let client = client().await;

    let response = client
        .post("/checkin")
        .json(&json!({ "user_id": 9999 }))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::NotFound);

    let body = response.into_json::<Value>().await.expect("error json");
    assert_eq!(body["error"], "USER_NOT_FOUND");
}

#[rocket::async_test]
async fn users_can_be_listed_and_fetched_by_id() {
    let client = client().await;
    let first = create_user(&client, "listed-one", "one@gmail.com").await;
    create_user(&client, "listed-two", "two@gmail.com").await;

    let response = client.get("/users").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    let users = response.into_json::<Vec<Value>>().await.expect("users json");
    assert_eq!(users.len(), 2);

    let response = client
        .get(format!("/users/{}", first["id"]))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    let user = response.into_json::<Value>().await.expect("user json");
    assert_eq!(user["username"], "listed-one");

    let response = client.get("/users/424242").dispatch().await;
    assert_eq!(response.status(), Status::NotFound);
}

#[rocket::async_test]
async fn leaderboard_returns_top_ten_by_total_xp() {
    let client = client().await;

    let mut ids = Vec::new();
    for i in 0..12 {
        let user = create_user(
            &client,
            &format!("player-{i}"),
            &format!("player-{i}@gmail.com"),
        )
        .await;
        ids.push(user["id"].as_i64().expect("user id"));
    }

    // Seed distinct XP totals directly; check-ins can only grant one day of
    // XP per user within a single test run.
    let db = DB::fetch(client.rocket()).expect("db state");
    for (i, id) in ids.iter().enumerate() {
        sqlx::query("UPDATE users SET total_xp = ? WHERE id = ?")
            .bind((i as i64 + 1) * 10)
            .bind(id)
            .execute(&db.0)
            .await
            .expect("seed xp");
    }

    let response = client.get("/leaderboard").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    let entries = response
        .into_json::<Vec<Value>>()
        .await
        .expect("leaderboard json");

    assert_eq!(entries.len(), 10);
    assert_eq!(entries[0]["username"], "player-11");
    assert_eq!(entries[0]["total_xp"], 120);
    assert_eq!(entries[9]["total_xp"], 30);

    for (i, entry) in entries.iter().enumerate() {
        assert_eq!(entry["rank"], i as u64 + 1);
        if i > 0 {
            assert!(entry["total_xp"].as_i64() <= entries[i - 1]["total_xp"].as_i64());
        }
    }
}
