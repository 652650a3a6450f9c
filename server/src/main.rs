use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

use daily_streak_server::build;

#[derive(Debug, serde::Deserialize)]
pub struct Env {
    database_url: Option<String>,
}

#[rocket::launch]
fn rocket() -> _ {
    dotenv::dotenv().ok();

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().pretty());
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");

    let env = envy::from_env::<Env>().expect("Failed to load environment variables");
    let database_url = env
        .database_url
        .unwrap_or_else(|| "sqlite://database.db?mode=rwc".to_string());

    let figment = rocket::Config::figment().merge(("databases.daily_streak.url", database_url));

    build(figment)
}
