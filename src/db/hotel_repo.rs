// src/db/hotel_repo.rs

use sqlx::{Executor, SqlitePool, Sqlite};

use crate::{common::error::AppError, models::hotel::Hotel};

#[derive(Clone)]
pub struct HotelRepository {
    pool: SqlitePool,
}

impl HotelRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Busca por parte do nome, sem diferenciar maiúsculas (inclusive acentuadas).
    /// `None` devolve todos os hotéis.
    pub async fn search_by_name(&self, name: Option<&str>) -> Result<Vec<Hotel>, AppError> {
        let hotels = sqlx::query_as::<_, Hotel>("SELECT id, name FROM hotels ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;

        // lower() do SQLite só conhece ASCII, então a comparação fica aqui.
        let Some(needle) = name.map(str::to_lowercase) else {
            return Ok(hotels);
        };
        Ok(hotels
            .into_iter()
            .filter(|hotel| hotel.name.to_lowercase().contains(&needle))
            .collect())
    }

    pub async fn create_hotel<'e, E>(
        &self,
        executor: E,
        id: i64,
        name: &str,
    ) -> Result<Hotel, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let hotel = sqlx::query_as::<_, Hotel>(
            "INSERT INTO hotels (id, name) VALUES ($1, $2) RETURNING id, name",
        )
        .bind(id)
        .bind(name)
        .fetch_one(executor)
        .await?;
        Ok(hotel)
    }

    pub async fn count<'e, E>(&self, executor: E) -> Result<i64, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM hotels")
            .fetch_one(executor)
            .await?;
        Ok(total)
    }
}
