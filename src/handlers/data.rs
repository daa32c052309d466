// src/handlers/data.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{common::error::AppError, config::AppState};

// POST /api/data
#[utoipa::path(
    post,
    path = "/api/data",
    tag = "Data",
    responses(
        (status = 204, description = "Dados de demonstração carregados"),
        (status = 500, description = "Erro inesperado")
    )
)]
pub async fn seed_data(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    app_state.data_service.seed().await?;
    Ok(StatusCode::NO_CONTENT)
}

// DELETE /api/data
#[utoipa::path(
    delete,
    path = "/api/data",
    tag = "Data",
    responses(
        (status = 200, description = "Todos os dados removidos"),
        (status = 500, description = "Erro inesperado")
    )
)]
pub async fn reset_data(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    app_state.data_service.reset().await?;
    Ok(StatusCode::OK)
}
