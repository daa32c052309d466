// src/services/data_service.rs

use std::sync::Arc;

use chrono::{Days, NaiveDate};
use sqlx::SqlitePool;

use crate::{
    common::{
        clock::Clock,
        error::{log_fault, AppError},
    },
    db::{BookingRepository, DataRepository, HotelRepository, NewBooking, RoomRepository},
    models::{booking::BookingStatus, room::RoomType},
};

// (id, nome)
const SEED_HOTELS: [(i64, &str); 2] = [(1, "Waracle Hotel"), (2, "Grand Hotel")];

// (id, hotel_id, tipo)
const SEED_ROOMS: [(i64, i64, RoomType); 12] = [
    (1, 1, RoomType::Single),
    (2, 1, RoomType::Double),
    (3, 1, RoomType::Double),
    (4, 1, RoomType::Deluxe),
    (5, 1, RoomType::Deluxe),
    (6, 1, RoomType::Single),
    (7, 2, RoomType::Single),
    (8, 2, RoomType::Double),
    (9, 2, RoomType::Double),
    (10, 2, RoomType::Deluxe),
    (11, 2, RoomType::Deluxe),
    (12, 2, RoomType::Single),
];

// (quarto, hóspedes, nº de hóspedes, dias a partir de hoje até o check-in, noites)
const SEED_BOOKINGS: [(i64, &str, i64, u64, u64); 3] = [
    (6, "B Ahmad", 1, 2, 2),
    (9, "B Ahmad and Guest 1", 2, 7, 1),
    (10, "B Ahmad, Guest 1, Guest 2", 2, 11, 21),
];

/// Carga e limpeza dos dados de demonstração.
#[derive(Clone)]
pub struct DataService {
    pool: SqlitePool,
    data_repo: DataRepository,
    hotel_repo: HotelRepository,
    room_repo: RoomRepository,
    booking_repo: BookingRepository,
    clock: Arc<dyn Clock>,
}

impl DataService {
    pub fn new(
        pool: SqlitePool,
        data_repo: DataRepository,
        hotel_repo: HotelRepository,
        room_repo: RoomRepository,
        booking_repo: BookingRepository,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            pool,
            data_repo,
            hotel_repo,
            room_repo,
            booking_repo,
            clock,
        }
    }

    /// Popula hotéis, quartos e reservas. Não faz nada se já existir algum hotel.
    /// Retorna `true` se os dados foram inseridos.
    pub async fn seed(&self) -> Result<bool, AppError> {
        self.try_seed()
            .await
            .inspect_err(|e| log_fault(e, "Error while seeding hotel data"))
    }

    async fn try_seed(&self) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;

        if self.hotel_repo.count(&mut *tx).await? > 0 {
            tracing::info!("Seed skipped: hotels already present");
            return Ok(false);
        }

        for (id, name) in SEED_HOTELS {
            self.hotel_repo.create_hotel(&mut *tx, id, name).await?;
        }

        for (id, hotel_id, room_type) in SEED_ROOMS {
            let room = self.room_repo.create_room(&mut *tx, id, hotel_id, room_type).await?;
            if let Some(problem) = room.capacity_error() {
                return Err(anyhow::anyhow!(problem).into());
            }
        }

        let today = self.clock.today();
        let now = self.clock.now();
        for (room_id, guest_names, number_of_guests, offset, nights) in SEED_BOOKINGS {
            let check_in = days_after(today, offset)?;
            let check_out = days_after(check_in, nights)?;
            self.booking_repo
                .insert(
                    &mut *tx,
                    &NewBooking {
                        room_id,
                        guest_names,
                        number_of_guests,
                        check_in,
                        check_out,
                        status: BookingStatus::Success,
                        created_at: now,
                    },
                )
                .await?;
        }

        tx.commit().await?;

        tracing::info!(
            hotels = SEED_HOTELS.len(),
            rooms = SEED_ROOMS.len(),
            bookings = SEED_BOOKINGS.len(),
            "Seed data inserted"
        );
        Ok(true)
    }

    /// Remove todos os hotéis, quartos e reservas.
    pub async fn reset(&self) -> Result<(), AppError> {
        self.data_repo
            .clear_all(&self.pool)
            .await
            .inspect_err(|e| log_fault(e, "Error while removing hotel data"))?;
        tracing::info!("All hotel, room and booking data removed");
        Ok(())
    }
}

fn days_after(date: NaiveDate, days: u64) -> Result<NaiveDate, AppError> {
    date.checked_add_days(Days::new(days))
        .ok_or_else(|| anyhow::anyhow!("Date out of range: {} + {} days", date, days).into())
}
