// src/models/room.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

// --- Tipos de Quarto ---
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")] // Banco
pub enum RoomType {
    Single,
    Double,
    Deluxe,
}

impl RoomType {
    /// Capacidade que cada tipo de quarto precisa ter.
    pub fn capacity(self) -> i64 {
        match self {
            RoomType::Single => 1,
            RoomType::Double | RoomType::Deluxe => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    #[schema(example = 2)]
    pub id: i64,
    #[schema(ignore)]
    #[serde(skip_serializing)]
    pub hotel_id: i64,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    #[schema(example = 2)]
    pub capacity: i64,
}

impl Room {
    /// Verifica se a capacidade bate com o tipo do quarto.
    pub fn capacity_error(&self) -> Option<String> {
        if self.capacity == self.room_type.capacity() {
            return None;
        }
        Some(match self.room_type {
            RoomType::Single => "Single rooms must have a capacity of 1.".to_string(),
            other => format!("{:?} rooms must have a capacity of 2.", other),
        })
    }
}

/// Filtro de disponibilidade enviado ao repositório.
/// O repositório traduz isso numa única query, nada de predicados dinâmicos.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomAvailabilityFilter {
    pub hotel_id: i64,
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub min_capacity: i64,
}
