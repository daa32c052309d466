// src/db/data_repo.rs

use sqlx::{Acquire, Sqlite};

use crate::common::error::AppError;

#[derive(Clone, Default)]
pub struct DataRepository;

impl DataRepository {
    pub fn new() -> Self {
        Self
    }

    /// Apaga reservas, quartos e hotéis (nessa ordem, por causa das FKs).
    pub async fn clear_all<'e, A>(&self, conn: A) -> Result<(), AppError>
    where
        A: Acquire<'e, Database = Sqlite>,
    {
        let mut tx = conn.begin().await?;

        sqlx::query("DELETE FROM bookings").execute(&mut *tx).await?;
        sqlx::query("DELETE FROM rooms").execute(&mut *tx).await?;
        sqlx::query("DELETE FROM hotels").execute(&mut *tx).await?;

        tx.commit().await?;
        Ok(())
    }
}
