// src/handlers/bookings.rs

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::booking::{BookingFailure, BookingRequest, BookingResponse},
};

// POST /api/bookings
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = "Bookings",
    request_body = BookingRequest,
    responses(
        (status = 201, description = "Reserva criada e confirmada", body = BookingResponse),
        (status = 400, description = "Reserva recusada", body = BookingFailure),
        (status = 500, description = "Erro inesperado")
    )
)]
pub async fn create_booking(
    State(app_state): State<AppState>,
    payload: Result<Json<BookingRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let booking = app_state.booking_service.create_booking(&payload).await?;

    let location = format!("/api/bookings/{}", booking.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(BookingResponse::from(booking)),
    ))
}

// GET /api/bookings/{id}
#[utoipa::path(
    get,
    path = "/api/bookings/{id}",
    tag = "Bookings",
    params(("id" = Uuid, Path, description = "ID da reserva")),
    responses(
        (status = 200, description = "Reserva encontrada", body = BookingResponse),
        (status = 404, description = "Reserva não encontrada"),
        (status = 500, description = "Erro inesperado")
    )
)]
pub async fn get_booking(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let booking = app_state
        .booking_service
        .get_booking(id)
        .await?
        .ok_or(AppError::BookingNotFound)?;

    Ok((StatusCode::OK, Json(BookingResponse::from(booking))))
}

// DELETE /api/bookings/{id}
#[utoipa::path(
    delete,
    path = "/api/bookings/{id}",
    tag = "Bookings",
    params(("id" = Uuid, Path, description = "ID da reserva")),
    responses(
        (status = 200, description = "Reserva cancelada", body = BookingResponse),
        (status = 400, description = "Reserva não pode ser cancelada", body = BookingFailure),
        (status = 404, description = "Reserva não encontrada"),
        (status = 500, description = "Erro inesperado")
    )
)]
pub async fn cancel_booking(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let booking = app_state.booking_service.cancel_booking(id).await?;

    Ok((StatusCode::OK, Json(BookingResponse::from(booking))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{body_json, seeded_state, today};
    use axum::{
        body::Body,
        extract::{FromRequest, Request},
    };
    use chrono::{Days, NaiveDate};
    use serde_json::{json, Value};

    fn day(n: u64) -> NaiveDate {
        today() + Days::new(n)
    }

    fn payload(room_id: i64, from: NaiveDate, to: NaiveDate, guests: i64) -> BookingRequest {
        BookingRequest {
            room_id,
            guest_names: "Jane Doe and John Doe".into(),
            number_of_guests: guests,
            from,
            to,
        }
    }

    async fn json_body(body: Value) -> Result<Json<BookingRequest>, JsonRejection> {
        let request = Request::builder()
            .method("POST")
            .uri("/api/bookings")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        Json::<BookingRequest>::from_request(request, &()).await
    }

    #[tokio::test]
    async fn create_returns_created_booking_with_location() {
        let state = seeded_state().await;

        let response = create_booking(State(state.clone()), Ok(Json(payload(2, day(1), day(3), 2))))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::CREATED);

        let location = response.headers()[header::LOCATION].to_str().unwrap().to_string();
        let body = body_json(response).await;
        assert_eq!(location, format!("/api/bookings/{}", body["id"].as_str().unwrap()));
        assert_eq!(body["status"], "Confirmed");
        assert_eq!(body["checkIn"], "2026-11-02");
        assert_eq!(body["checkOut"], "2026-11-04");
        assert_eq!(body["guestNames"], "Jane Doe and John Doe");
        assert_eq!(body["numberOfGuests"], 2);

        // e pode ser lida de volta
        let id: Uuid = body["id"].as_str().unwrap().parse().unwrap();
        let response = get_booking(State(state), Path(id)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["id"], body["id"]);
    }

    #[tokio::test]
    async fn rejected_booking_returns_failure_body() {
        let state = seeded_state().await;

        let response = create_booking(State(state), Ok(Json(payload(2, day(1), day(3), 3))))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "success": false, "errorMessage": "Room can only accommodate 2 guests." })
        );
    }

    #[tokio::test]
    async fn unknown_room_is_reported() {
        let state = seeded_state().await;

        let response = create_booking(State(state), Ok(Json(payload(404, day(1), day(3), 1))))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["errorMessage"], "Room not found.");
    }

    #[tokio::test]
    async fn booking_a_seeded_stay_is_unavailable() {
        let state = seeded_state().await;

        // quarto 6 está ocupado de +2 a +4
        let response = create_booking(State(state), Ok(Json(payload(6, day(3), day(5), 1))))
            .await
            .into_response();
        assert_eq!(
            body_json(response).await["errorMessage"],
            "Room is unavailable for the selected dates."
        );
    }

    #[tokio::test]
    async fn blank_guest_names_are_a_validation_error() {
        let state = seeded_state().await;
        let mut request = payload(2, day(1), day(2), 1);
        request.guest_names = String::new();

        let response = create_booking(State(state), Ok(Json(request))).await.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(response).await["details"]["guest_names"].is_array());
    }

    #[tokio::test]
    async fn missing_guest_count_is_rejected_like_zero_guests() {
        let state = seeded_state().await;
        let body = json_body(json!({
            "roomId": 2,
            "guestNames": "A",
            "from": "2026-11-02",
            "to": "2026-11-03"
        }))
        .await;

        let response = create_booking(State(state), body).await.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({
                "success": false,
                "errorMessage": "Invalid number of guests specified, must be at least 1."
            })
        );
    }

    #[tokio::test]
    async fn unreadable_body_returns_failure_body() {
        let state = seeded_state().await;
        let body = json_body(json!({ "guestNames": "A", "from": "not-a-date" })).await;
        assert!(body.is_err());

        let response = create_booking(State(state), body).await.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert!(body["errorMessage"].as_str().unwrap().contains("deserialize"));
    }

    #[tokio::test]
    async fn missing_booking_is_not_found() {
        let state = seeded_state().await;
        let response = get_booking(State(state), Path(Uuid::new_v4())).await.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({ "error": "Booking not found." }));
    }

    #[tokio::test]
    async fn cancel_returns_cancelled_booking() {
        let state = seeded_state().await;
        let created = state
            .booking_service
            .create_booking(&payload(3, day(4), day(6), 2))
            .await
            .unwrap();

        let response = cancel_booking(State(state.clone()), Path(created.id)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "Cancelled");

        let response = cancel_booking(State(state), Path(created.id)).await.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["errorMessage"],
            "Booking is already cancelled."
        );
    }
}
