// src/config.rs

use std::{env, sync::Arc};

use anyhow::Context;
use sqlx::SqlitePool;

use crate::{
    common::clock::{Clock, SystemClock},
    db::{self, BookingRepository, DataRepository, HotelRepository, RoomRepository},
    services::{booking_service::BookingService, data_service::DataService},
};

/// Configuração lida do ambiente (.env opcional).
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub server_addr: String,
    pub seed_data: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".to_string());
        let server_addr = env::var("SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("DATABASE_MAX_CONNECTIONS inválido: {value}"))?,
            Err(_) => 5,
        };

        let seed_data = match env::var("SEED_DATA") {
            Ok(value) => parse_flag(&value)
                .with_context(|| format!("SEED_DATA deve ser true ou false, recebido: {value}"))?,
            Err(_) => false,
        };

        Ok(Self {
            database_url,
            max_connections,
            server_addr,
            seed_data,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub booking_service: BookingService,
    pub data_service: DataService,
}

impl AppState {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let db_pool = db::connect(&config.database_url, config.max_connections)
            .await
            .context("Falha ao conectar ao banco de dados")?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        Ok(Self::with_pool(db_pool, Arc::new(SystemClock)))
    }

    // --- Monta o gráfico de dependências ---
    pub fn with_pool(db_pool: SqlitePool, clock: Arc<dyn Clock>) -> Self {
        let hotel_repo = HotelRepository::new(db_pool.clone());
        let room_repo = RoomRepository::new(db_pool.clone());
        let booking_repo = BookingRepository::new(db_pool.clone());

        let booking_service = BookingService::new(
            db_pool.clone(),
            hotel_repo.clone(),
            room_repo.clone(),
            booking_repo.clone(),
            clock.clone(),
        );
        let data_service = DataService::new(
            db_pool.clone(),
            DataRepository::new(),
            hotel_repo,
            room_repo,
            booking_repo,
            clock,
        );

        Self {
            db_pool,
            booking_service,
            data_service,
        }
    }
}
