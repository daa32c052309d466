// src/handlers/hotels.rs

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::{hotel::Hotel, room::Room},
};

#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct HotelSearchQuery {
    /// Nome ou parte do nome do hotel (sem diferenciar maiúsculas)
    #[validate(length(max = 100, message = "Hotel name must be at most 100 characters."))]
    pub name: Option<String>,
}

// GET /api/hotels?name=
#[utoipa::path(
    get,
    path = "/api/hotels",
    tag = "Hotels",
    params(HotelSearchQuery),
    responses(
        (status = 200, description = "Hotéis encontrados", body = [Hotel]),
        (status = 500, description = "Erro inesperado")
    )
)]
pub async fn search_hotels(
    State(app_state): State<AppState>,
    query: Result<Query<HotelSearchQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;
    query.validate()?;

    let hotels = app_state
        .booking_service
        .search_hotels(query.name.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(hotels)))
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct RoomSearchQuery {
    /// Data de entrada (inclusiva)
    pub from: NaiveDate,
    /// Data de saída (exclusiva)
    pub to: NaiveDate,
    pub number_of_guests: i64,
}

// GET /api/hotels/{id}/rooms?from=&to=&numberOfGuests=
#[utoipa::path(
    get,
    path = "/api/hotels/{id}/rooms",
    tag = "Hotels",
    params(
        ("id" = i64, Path, description = "ID do hotel"),
        RoomSearchQuery
    ),
    responses(
        (status = 200, description = "Quartos disponíveis no período", body = [Room]),
        (status = 400, description = "Datas ou número de hóspedes inválidos ou ausentes"),
        (status = 500, description = "Erro inesperado")
    )
)]
pub async fn available_rooms(
    State(app_state): State<AppState>,
    Path(hotel_id): Path<i64>,
    query: Result<Query<RoomSearchQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;
    let rooms = app_state
        .booking_service
        .available_rooms(hotel_id, query.from, query.to, query.number_of_guests)
        .await?;

    Ok((StatusCode::OK, Json(rooms)))
}
