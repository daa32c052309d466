// src/models/booking.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// --- Status da Reserva ---
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Success,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "PENDING",
            BookingStatus::Success => "SUCCESS",
            BookingStatus::Cancelled => "CANCELLED",
        }
    }

    /// Reservas ativas bloqueiam o quarto; canceladas não.
    pub fn is_active(self) -> bool {
        matches!(self, BookingStatus::Pending | BookingStatus::Success)
    }

    /// Transições permitidas:
    /// Pending -> Success, Pending -> Cancelled, Success -> Cancelled.
    pub fn can_transition_to(self, next: BookingStatus) -> bool {
        matches!(
            (self, next),
            (BookingStatus::Pending, BookingStatus::Success)
                | (BookingStatus::Pending, BookingStatus::Cancelled)
                | (BookingStatus::Success, BookingStatus::Cancelled)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    pub room_id: i64,
    pub guest_names: String,
    pub number_of_guests: i64,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

// --- Payload de criação ---
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    #[schema(example = 2)]
    pub room_id: i64,

    #[validate(length(min = 1, max = 200, message = "Guest names must be between 1 and 200 characters."))]
    #[schema(example = "Jane Doe and John Doe")]
    pub guest_names: String,

    // Sem #[validate] aqui: a mensagem de hóspedes vem das regras de reserva.
    // Ausente vale 0 e cai na mesma recusa.
    #[serde(default)]
    #[schema(example = 2)]
    pub number_of_guests: i64,

    #[schema(example = "2026-11-02")]
    pub from: NaiveDate,

    #[schema(example = "2026-11-05")]
    pub to: NaiveDate,
}

// --- Respostas ---

/// Status exposto na API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum BookingState {
    Confirmed,
    Pending,
    Cancelled,
}

impl From<BookingStatus> for BookingState {
    fn from(status: BookingStatus) -> Self {
        match status {
            BookingStatus::Success => BookingState::Confirmed,
            BookingStatus::Pending => BookingState::Pending,
            BookingStatus::Cancelled => BookingState::Cancelled,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: Uuid,
    pub booking_time: DateTime<Utc>,
    #[schema(example = "Jane Doe and John Doe")]
    pub guest_names: String,
    #[schema(example = "2026-11-02")]
    pub check_in: NaiveDate,
    #[schema(example = "2026-11-05")]
    pub check_out: NaiveDate,
    #[schema(example = 2)]
    pub number_of_guests: i64,
    pub status: BookingState,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id,
            booking_time: booking.created_at,
            guest_names: booking.guest_names,
            check_in: booking.check_in,
            check_out: booking.check_out,
            number_of_guests: booking.number_of_guests,
            status: booking.status.into(),
        }
    }
}

/// Corpo de erro das operações de reserva.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingFailure {
    #[schema(example = false)]
    pub success: bool,
    #[schema(example = "Room is unavailable for the selected dates.")]
    pub error_message: String,
}
