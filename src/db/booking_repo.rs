// src/db/booking_repo.rs

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{Executor, Sqlite, SqlitePool};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::booking::{Booking, BookingStatus},
    services::booking_rules::BookingRejection,
};

const BOOKING_COLUMNS: &str = "id, room_id, guest_names, number_of_guests, check_in, check_out, \
                               status, created_at, updated_at";

/// Dados de uma nova reserva, antes de ir para o banco.
#[derive(Debug, Clone)]
pub struct NewBooking<'a> {
    pub room_id: i64,
    pub guest_names: &'a str,
    pub number_of_guests: i64,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct BookingRepository {
    pool: SqlitePool,
}

impl BookingRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, AppError> {
        self.find_by_id_with(&self.pool, id).await
    }

    pub async fn find_by_id_with<'e, E>(&self, executor: E, id: Uuid) -> Result<Option<Booking>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let query = format!("SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = $1");
        let booking = sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await?;
        Ok(booking)
    }

    /// Reservas ativas (Pending/Success) de um quarto.
    pub async fn find_active_for_room<'e, E>(
        &self,
        executor: E,
        room_id: i64,
    ) -> Result<Vec<Booking>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let query = format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings \
             WHERE room_id = $1 AND status IN ($2, $3) \
             ORDER BY check_in ASC"
        );
        let bookings = sqlx::query_as::<_, Booking>(&query)
            .bind(room_id)
            .bind(BookingStatus::Pending)
            .bind(BookingStatus::Success)
            .fetch_all(executor)
            .await?;
        Ok(bookings)
    }

    pub async fn insert<'e, E>(&self, executor: E, new: &NewBooking<'_>) -> Result<Booking, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let query = format!(
            "INSERT INTO bookings (id, room_id, guest_names, number_of_guests, check_in, check_out, status, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {BOOKING_COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(Uuid::new_v4())
            .bind(new.room_id)
            .bind(new.guest_names)
            .bind(new.number_of_guests)
            .bind(new.check_in)
            .bind(new.check_out)
            .bind(new.status)
            .bind(new.created_at)
            .fetch_one(executor)
            .await
            .map_err(|e| {
                // A trigger de sobreposição garante a regra mesmo sob concorrência
                if let sqlx::Error::Database(db_err) = &e {
                    if db_err.message().contains("booking_overlap") {
                        return AppError::BookingRejected(BookingRejection::RoomUnavailable);
                    }
                }
                e.into()
            })
    }

    pub async fn update_status<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        status: BookingStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<Booking, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let query = format!(
            "UPDATE bookings SET status = $2, updated_at = $3 WHERE id = $1 RETURNING {BOOKING_COLUMNS}"
        );
        let booking = sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .bind(status)
            .bind(updated_at)
            .fetch_one(executor)
            .await?;
        Ok(booking)
    }
}
