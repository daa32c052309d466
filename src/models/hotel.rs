// src/models/hotel.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Waracle Hotel")]
    pub name: String,
}
