use std::sync::Arc;

use crate::lessons::LessonResolver;
use crate::model::{MemoryStore, ModelManager};
use crate::utils::clock::{Clock, SystemClock};
use crate::utils::signal::shutdown_signal;
use crate::{error::AppResult, web::AppState};
use axum::Router;
use tokio::net::TcpListener;

pub mod config;
pub use config::{Config, ConfigError, ConfigResult};

pub mod error;
pub mod lessons;
pub mod leveling;
pub mod model;
pub mod utils;
pub mod web;

static APPLICATION_NAME: &str = "lingo";

pub async fn build_server() -> AppResult<(AppState, Router)> {
    let use_local = cfg!(debug_assertions);
    let config = config::Config::get_or_init(use_local).await;

    let state = build_state(config, Arc::new(SystemClock))?;
    let app = web::routes::build_app(state.clone(), config);
    Ok((state, app))
}

pub fn build_state(config: &Config, clock: Arc<dyn Clock>) -> AppResult<AppState> {
    let demo_user = config.app().demo_user();
    tracing::debug!(demo_user, "seeding in-memory store");

    let mm = ModelManager::new(MemoryStore::with_demo_user(demo_user));
    let resolver = LessonResolver::from_config(config)?;
    Ok(AppState::new(mm, resolver, clock, demo_user))
}

pub fn build_server_with_state(state: AppState, config: &Config) -> Router {
    web::routes::build_app(state, config)
}

#[tracing::instrument]
pub async fn setup_workers() -> AppResult<()> {
    let (_, app) = build_server().await?;
    let config = Config::get_or_init(cfg!(debug_assertions)).await;
    let listener = TcpListener::bind(config.host().bindto()).await?;

    tracing::info!("axum is starting at: {}", config.host().bindto());
    let axum_handle = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal());

    axum_handle.await?;
    Ok(())
}

fn setup_trace() {
    use tracing_error::ErrorLayer;
    use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

    // load .env file for RUST_LOG etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .with(ErrorLayer::default())
        .init();

    tracing::debug!("tracing initialized.");
}

#[tracing::instrument]
pub async fn run() -> AppResult<()> {
    setup_trace();
    setup_workers().await?;
    Ok(())
}
