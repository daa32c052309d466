// src/db/room_repo.rs

use sqlx::{Executor, Sqlite, SqlitePool};

use crate::{
    common::error::AppError,
    models::{
        booking::BookingStatus,
        room::{Room, RoomAvailabilityFilter, RoomType},
    },
};

#[derive(Clone)]
pub struct RoomRepository {
    pool: SqlitePool,
}

impl RoomRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id<'e, E>(&self, executor: E, id: i64) -> Result<Option<Room>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let room = sqlx::query_as::<_, Room>(
            "SELECT id, hotel_id, room_type, capacity FROM rooms WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;
        Ok(room)
    }

    /// Quartos do hotel com capacidade suficiente e sem reserva ativa
    /// sobrepondo [from, to).
    pub async fn find_available(&self, filter: &RoomAvailabilityFilter) -> Result<Vec<Room>, AppError> {
        let rooms = sqlx::query_as::<_, Room>(
            r#"
            SELECT r.id, r.hotel_id, r.room_type, r.capacity
            FROM rooms r
            WHERE r.hotel_id = $1
              AND r.capacity >= $4
              AND NOT EXISTS (
                  SELECT 1 FROM bookings b
                  WHERE b.room_id = r.id
                    AND b.status IN ($5, $6)
                    AND b.check_in < $3
                    AND b.check_out > $2
              )
            ORDER BY r.id ASC
            "#,
        )
        .bind(filter.hotel_id)
        .bind(filter.from)
        .bind(filter.to)
        .bind(filter.min_capacity)
        .bind(BookingStatus::Pending)
        .bind(BookingStatus::Success)
        .fetch_all(&self.pool)
        .await?;
        Ok(rooms)
    }

    pub async fn create_room<'e, E>(
        &self,
        executor: E,
        id: i64,
        hotel_id: i64,
        room_type: RoomType,
    ) -> Result<Room, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let room = sqlx::query_as::<_, Room>(
            r#"
            INSERT INTO rooms (id, hotel_id, room_type, capacity)
            VALUES ($1, $2, $3, $4)
            RETURNING id, hotel_id, room_type, capacity
            "#,
        )
        .bind(id)
        .bind(hotel_id)
        .bind(room_type)
        .bind(room_type.capacity())
        .fetch_one(executor)
        .await?;
        Ok(room)
    }
}
