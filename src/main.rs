//src/main.rs

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod models;
mod services;

use crate::config::{AppState, Config};
use crate::docs::ApiDoc;

fn router(app_state: AppState) -> Router {
    let hotel_routes = Router::new()
        .route("/", get(handlers::hotels::search_hotels))
        .route("/{id}/rooms", get(handlers::hotels::available_rooms));

    let booking_routes = Router::new()
        .route("/", post(handlers::bookings::create_booking))
        .route(
            "/{id}",
            get(handlers::bookings::get_booking).delete(handlers::bookings::cancel_booking),
        );

    let data_routes = Router::new().route(
        "/",
        post(handlers::data::seed_data).delete(handlers::data::reset_data),
    );

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/hotels", hotel_routes)
        .nest("/api/bookings", booking_routes)
        .nest("/api/data", data_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    // Se a configuração falhar, a aplicação não deve iniciar.
    let config = Config::from_env()?;
    let app_state = AppState::new(&config).await?;

    db::migrate(&app_state.db_pool).await?;
    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    if config.seed_data {
        app_state.data_service.seed().await?;
    }

    let app = router(app_state);

    let listener = TcpListener::bind(&config.server_addr).await?;
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr()?);
    tracing::info!("📚 Documentação em http://{}/swagger-ui", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
