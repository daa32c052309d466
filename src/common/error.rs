use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::models::booking::BookingFailure;
use crate::services::booking_rules::BookingRejection;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    // Regras de negócio da reserva: resposta { success: false, errorMessage }
    #[error("{0}")]
    BookingRejected(#[from] BookingRejection),

    // Parâmetros de busca de quartos inválidos: resposta { error }
    #[error("{0}")]
    InvalidSearch(BookingRejection),

    // Corpo de reserva ilegível: mesmo formato das recusas
    #[error("{}", .0.body_text())]
    InvalidBookingPayload(#[from] JsonRejection),

    // Parâmetros de busca ausentes ou mal formados
    #[error("{}", .0.body_text())]
    InvalidQuery(#[from] QueryRejection),

    #[error("Booking not found.")]
    BookingNotFound,

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    InternalServerError(#[from] anyhow::Error),
}

impl AppError {
    /// Falha de infraestrutura, não culpa de quem chamou.
    pub fn is_fault(&self) -> bool {
        matches!(self, AppError::DatabaseError(_) | AppError::InternalServerError(_))
    }
}

/// Só falhas inesperadas vão para o log de erro; recusas de validação não.
pub fn log_fault(err: &AppError, context: &str) {
    if err.is_fault() {
        tracing::error!(error = %err, "{}", context);
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "One or more fields are invalid.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::BookingRejected(rejection) => {
                let body = Json(BookingFailure {
                    success: false,
                    error_message: rejection.to_string(),
                });
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::InvalidBookingPayload(rejection) => {
                let body = Json(BookingFailure {
                    success: false,
                    error_message: rejection.body_text(),
                });
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::InvalidSearch(rejection) => (StatusCode::BAD_REQUEST, rejection.to_string()),
            AppError::InvalidQuery(rejection) => (StatusCode::BAD_REQUEST, rejection.body_text()),
            AppError::BookingNotFound => (StatusCode::NOT_FOUND, AppError::BookingNotFound.to_string()),

            // Banco e erros inesperados viram 500, com a mensagem original.
            // O log de erro fica com os serviços, que têm o contexto.
            ref e => {
                tracing::debug!("Internal server error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
