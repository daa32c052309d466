// src/services/booking_service.rs

use std::sync::Arc;

use chrono::NaiveDate;
use sqlx::{Executor, Sqlite, SqlitePool};
use uuid::Uuid;

use crate::{
    common::{
        clock::Clock,
        error::{log_fault, AppError},
    },
    db::{BookingRepository, HotelRepository, NewBooking, RoomRepository},
    models::{
        booking::{Booking, BookingRequest, BookingStatus},
        hotel::Hotel,
        room::{Room, RoomAvailabilityFilter},
    },
    services::{
        booking_rules::{self, BookingRejection},
        room_locks::RoomLocks,
    },
};

#[derive(Clone)]
pub struct BookingService {
    pool: SqlitePool,
    hotel_repo: HotelRepository,
    room_repo: RoomRepository,
    booking_repo: BookingRepository,
    room_locks: RoomLocks,
    clock: Arc<dyn Clock>,
}

impl BookingService {
    pub fn new(
        pool: SqlitePool,
        hotel_repo: HotelRepository,
        room_repo: RoomRepository,
        booking_repo: BookingRepository,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            pool,
            hotel_repo,
            room_repo,
            booking_repo,
            room_locks: RoomLocks::new(),
            clock,
        }
    }

    // --- HOTÉIS ---

    pub async fn search_hotels(&self, name: Option<&str>) -> Result<Vec<Hotel>, AppError> {
        let name = name.map(str::trim).filter(|n| !n.is_empty());

        self.hotel_repo
            .search_by_name(name)
            .await
            .inspect_err(|e| {
                log_fault(e, &format!("Error while searching hotels for [{}]", name.unwrap_or_default()))
            })
    }

    // --- QUARTOS ---

    /// Quartos livres no período. Hotel inexistente devolve lista vazia.
    pub async fn available_rooms(
        &self,
        hotel_id: i64,
        from: NaiveDate,
        to: NaiveDate,
        number_of_guests: i64,
    ) -> Result<Vec<Room>, AppError> {
        booking_rules::validate_stay(from, to, number_of_guests, self.clock.today())
            .map_err(AppError::InvalidSearch)?;

        let filter = RoomAvailabilityFilter {
            hotel_id,
            from,
            to,
            min_capacity: number_of_guests,
        };

        self.room_repo.find_available(&filter).await.inspect_err(|e| {
            log_fault(
                e,
                &format!(
                    "Error while checking room availability for hotel id [{}] from [{}] to [{}]",
                    hotel_id, from, to
                ),
            )
        })
    }

    // --- RESERVAS ---

    pub async fn get_booking(&self, id: Uuid) -> Result<Option<Booking>, AppError> {
        self.booking_repo
            .find_by_id(id)
            .await
            .inspect_err(|e| log_fault(e, &format!("Error while retrieving booking [{}]", id)))
    }

    /// Valida, grava como Pending e promove para Success.
    /// Tudo numa transação, com o quarto travado, para evitar reserva dupla.
    pub async fn create_booking(&self, request: &BookingRequest) -> Result<Booking, AppError> {
        self.try_create_booking(request).await.inspect_err(|e| {
            log_fault(
                e,
                &format!(
                    "Error while creating booking for room [{}] from [{}] to [{}]",
                    request.room_id, request.from, request.to
                ),
            )
        })
    }

    async fn try_create_booking(&self, request: &BookingRequest) -> Result<Booking, AppError> {
        // 1. Quarto (antes de qualquer outra validação). Só quartos existentes são travados.
        let room = self
            .room_repo
            .find_by_id(&self.pool, request.room_id)
            .await?
            .ok_or(BookingRejection::RoomNotFound)?;

        let _room_guard = self.room_locks.acquire(room.id).await;

        let mut tx = self.pool.begin().await?;

        // 2. Regras de negócio contra as reservas atuais do quarto
        let existing = self.booking_repo.find_active_for_room(&mut *tx, room.id).await?;
        booking_rules::validate_booking(
            &room,
            &existing,
            request.from,
            request.to,
            request.number_of_guests,
            self.clock.today(),
        )?;

        // 3. Grava como Pending
        let pending = self
            .booking_repo
            .insert(
                &mut *tx,
                &NewBooking {
                    room_id: room.id,
                    guest_names: &request.guest_names,
                    number_of_guests: request.number_of_guests,
                    check_in: request.from,
                    check_out: request.to,
                    status: BookingStatus::Pending,
                    created_at: self.clock.now(),
                },
            )
            .await?;

        // 4. Etapa externa (pagamento), depois confirma
        self.settle_payment(&pending).await?;
        let confirmed = self.transition(&mut *tx, &pending, BookingStatus::Success).await?;

        tx.commit().await?;

        tracing::info!(
            booking_id = %confirmed.id,
            room_id = confirmed.room_id,
            status = confirmed.status.as_str(),
            "Booking created"
        );
        Ok(confirmed)
    }

    // Ponto de integração com o provedor de pagamento; hoje não faz nada.
    async fn settle_payment(&self, booking: &Booking) -> Result<(), AppError> {
        tracing::debug!(booking_id = %booking.id, "Payment step skipped");
        Ok(())
    }

    /// Cancela uma reserva ativa, desde que o check-in ainda não tenha chegado.
    pub async fn cancel_booking(&self, id: Uuid) -> Result<Booking, AppError> {
        self.try_cancel_booking(id)
            .await
            .inspect_err(|e| log_fault(e, &format!("Error while cancelling booking [{}]", id)))
    }

    async fn try_cancel_booking(&self, id: Uuid) -> Result<Booking, AppError> {
        let mut tx = self.pool.begin().await?;

        let booking = self
            .booking_repo
            .find_by_id_with(&mut *tx, id)
            .await?
            .ok_or(AppError::BookingNotFound)?;

        if !booking.status.is_active() {
            return Err(BookingRejection::AlreadyCancelled.into());
        }
        if booking.check_in <= self.clock.today() {
            return Err(BookingRejection::CheckInReached.into());
        }

        let cancelled = self.transition(&mut *tx, &booking, BookingStatus::Cancelled).await?;
        tx.commit().await?;

        tracing::info!(booking_id = %cancelled.id, room_id = cancelled.room_id, "Booking cancelled");
        Ok(cancelled)
    }

    async fn transition<'e, E>(
        &self,
        executor: E,
        booking: &Booking,
        next: BookingStatus,
    ) -> Result<Booking, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        if !booking.status.can_transition_to(next) {
            return Err(anyhow::anyhow!(
                "Invalid booking status transition {:?} -> {:?}",
                booking.status,
                next
            )
            .into());
        }
        self.booking_repo
            .update_status(executor, booking.id, next, self.clock.now())
            .await
    }
}
