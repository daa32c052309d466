pub mod booking_repo;
pub use booking_repo::{BookingRepository, NewBooking};
pub mod data_repo;
pub use data_repo::DataRepository;
pub mod hotel_repo;
pub use hotel_repo::HotelRepository;
pub mod room_repo;
pub use room_repo::RoomRepository;

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Abre a pool do SQLite. Banco em memória usa uma única conexão
/// (cada conexão de `:memory:` seria um banco diferente).
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let in_memory = database_url.contains(":memory:") || database_url.contains("mode=memory");

    let pool_options = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(max_connections)
    };

    pool_options
        .acquire_timeout(Duration::from_secs(3))
        .connect_with(options)
        .await
}

/// Roda as migrações embutidas em `./migrations`.
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!().run(pool).await
}

#[cfg(test)]
pub(crate) async fn test_pool() -> SqlitePool {
    let pool = connect("sqlite::memory:", 1).await.expect("in-memory pool");
    migrate(&pool).await.expect("migrations");
    pool
}
