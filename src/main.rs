mod config;
mod controller;
mod data;
mod error;
mod middleware;
mod model;
mod router;
mod service;
mod startup;
mod state;
mod util;

use std::sync::Arc;

use serenity::http::Http;

use crate::{
    config::Config, error::AppError, service::notification::NotificationDispatcher,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session_layer = startup::connect_to_session(&db).await?;
    let http_client = startup::setup_reqwest_client()?;

    startup::seed_category_gates(&db).await?;
    startup::warn_if_no_admin(&db, &config).await?;

    let discord_http = Arc::new(Http::new(&config.discord.bot_token));
    let dispatcher = NotificationDispatcher::spawn(discord_http.clone(), config.discord.clone());

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    tracing::info!("Listening on {}", config.listen_addr);

    let app = router::router()
        .with_state(AppState::new(
            db,
            http_client,
            discord_http,
            dispatcher,
            config,
        ))
        .layer(session_layer);

    axum::serve(listener, app).await?;

    Ok(())
}
