// src/services/booking_rules.rs

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{booking::Booking, room::Room};

/// Motivos pelos quais uma reserva (ou busca) é recusada.
/// Sempre viram 400 com a mensagem abaixo.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingRejection {
    #[error("Room not found.")]
    RoomNotFound,

    #[error("Invalid number of guests specified, must be at least 1.")]
    InvalidGuestCount,

    #[error("We all wish we could travel back in time, need to save up for McLaren.")]
    DateInPast,

    #[error("`To` date must be after `From` date.")]
    InvalidDateRange,

    #[error("Room is unavailable for the selected dates.")]
    RoomUnavailable,

    #[error("Room can only accommodate {} guest{}.", .capacity, plural_suffix(.capacity))]
    OverCapacity { capacity: i64 },

    #[error("Booking is already cancelled.")]
    AlreadyCancelled,

    #[error("Bookings cannot be cancelled on or after the check-in date.")]
    CheckInReached,
}

fn plural_suffix(capacity: &i64) -> &'static str {
    if *capacity > 1 { "s" } else { "" }
}

/// Intervalos semiabertos [check_in, check_out): sair e entrar no mesmo dia não conflita.
pub fn ranges_overlap(
    existing_in: NaiveDate,
    existing_out: NaiveDate,
    proposed_in: NaiveDate,
    proposed_out: NaiveDate,
) -> bool {
    existing_in < proposed_out && existing_out > proposed_in
}

/// Só reservas ativas (Pending/Success) bloqueiam o quarto.
pub fn blocks(booking: &Booking, from: NaiveDate, to: NaiveDate) -> bool {
    booking.status.is_active() && ranges_overlap(booking.check_in, booking.check_out, from, to)
}

/// Validação de datas e hóspedes, compartilhada pela busca de quartos e pela criação de reservas.
pub fn validate_stay(
    from: NaiveDate,
    to: NaiveDate,
    number_of_guests: i64,
    today: NaiveDate,
) -> Result<(), BookingRejection> {
    if number_of_guests < 1 {
        return Err(BookingRejection::InvalidGuestCount);
    }
    if from < today {
        return Err(BookingRejection::DateInPast);
    }
    if to <= from {
        return Err(BookingRejection::InvalidDateRange);
    }
    Ok(())
}

/// Aplica todas as regras a uma reserva proposta para um quarto específico.
/// `existing` são as reservas já gravadas para o quarto.
pub fn validate_booking(
    room: &Room,
    existing: &[Booking],
    from: NaiveDate,
    to: NaiveDate,
    number_of_guests: i64,
    today: NaiveDate,
) -> Result<(), BookingRejection> {
    validate_stay(from, to, number_of_guests, today)?;

    if existing
        .iter()
        .any(|b| b.room_id == room.id && blocks(b, from, to))
    {
        return Err(BookingRejection::RoomUnavailable);
    }

    if number_of_guests > room.capacity {
        return Err(BookingRejection::OverCapacity { capacity: room.capacity });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{booking::BookingStatus, room::RoomType};
    use chrono::{Days, Utc};
    use uuid::Uuid;

    fn day(n: u64) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 11, 1).unwrap() + Days::new(n)
    }

    fn today() -> NaiveDate {
        day(0)
    }

    fn double_room() -> Room {
        Room { id: 7, hotel_id: 1, room_type: RoomType::Double, capacity: 2 }
    }

    fn booking(room_id: i64, check_in: u64, check_out: u64, status: BookingStatus) -> Booking {
        Booking {
            id: Uuid::new_v4(),
            room_id,
            guest_names: "Existing Guest".into(),
            number_of_guests: 1,
            check_in: day(check_in),
            check_out: day(check_out),
            status,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn back_to_back_ranges_do_not_overlap() {
        // termina no dia 5, o outro começa no dia 5
        assert!(!ranges_overlap(day(2), day(5), day(5), day(6)));
        assert!(!ranges_overlap(day(5), day(6), day(2), day(5)));
    }

    #[test]
    fn overlap_is_symmetric() {
        let cases = [
            (2, 5, 4, 6, true),
            (2, 5, 1, 3, true),
            (2, 5, 3, 4, true),
            (2, 5, 1, 8, true),
            (2, 5, 2, 5, true),
            (2, 5, 5, 8, false),
            (2, 5, 0, 2, false),
            (2, 5, 6, 9, false),
        ];
        for (a_in, a_out, b_in, b_out, expected) in cases {
            let (a_in, a_out, b_in, b_out) = (day(a_in), day(a_out), day(b_in), day(b_out));
            assert_eq!(ranges_overlap(a_in, a_out, b_in, b_out), expected);
            assert_eq!(ranges_overlap(b_in, b_out, a_in, a_out), expected);
        }
    }

    #[test]
    fn cancelled_bookings_never_block() {
        let cancelled = booking(7, 2, 5, BookingStatus::Cancelled);
        assert!(!blocks(&cancelled, day(3), day(4)));

        let pending = booking(7, 2, 5, BookingStatus::Pending);
        assert!(blocks(&pending, day(3), day(4)));
    }

    #[test]
    fn zero_guests_fails_regardless_of_dates() {
        // mesmo com datas inválidas e no passado, a mensagem é a de hóspedes
        let result = validate_stay(day(5), day(1), 0, day(10));
        assert_eq!(result, Err(BookingRejection::InvalidGuestCount));
        assert_eq!(
            BookingRejection::InvalidGuestCount.to_string(),
            "Invalid number of guests specified, must be at least 1."
        );
    }

    #[test]
    fn past_from_date_is_rejected() {
        let result = validate_stay(day(0), day(3), 1, day(1));
        assert_eq!(result, Err(BookingRejection::DateInPast));
    }

    #[test]
    fn today_is_bookable() {
        assert_eq!(validate_stay(today(), day(1), 1, today()), Ok(()));
    }

    #[test]
    fn to_must_be_after_from() {
        assert_eq!(
            validate_stay(day(3), day(3), 1, today()),
            Err(BookingRejection::InvalidDateRange)
        );
        assert_eq!(
            validate_stay(day(4), day(3), 1, today()),
            Err(BookingRejection::InvalidDateRange)
        );
    }

    #[test]
    fn overlapping_request_is_unavailable_but_adjacent_is_fine() {
        let room = double_room();
        let existing = vec![booking(7, 2, 5, BookingStatus::Success)];

        assert_eq!(
            validate_booking(&room, &existing, day(4), day(6), 2, today()),
            Err(BookingRejection::RoomUnavailable)
        );
        assert_eq!(validate_booking(&room, &existing, day(5), day(6), 2, today()), Ok(()));
    }

    #[test]
    fn bookings_for_other_rooms_are_ignored() {
        let room = double_room();
        let existing = vec![booking(99, 2, 5, BookingStatus::Success)];
        assert_eq!(validate_booking(&room, &existing, day(2), day(5), 1, today()), Ok(()));
    }

    #[test]
    fn unavailable_is_checked_before_capacity() {
        let room = double_room();
        let existing = vec![booking(7, 2, 5, BookingStatus::Pending)];
        assert_eq!(
            validate_booking(&room, &existing, day(3), day(4), 5, today()),
            Err(BookingRejection::RoomUnavailable)
        );
    }

    #[test]
    fn capacity_message_pluralizes_on_capacity() {
        let room = double_room();
        let err = validate_booking(&room, &[], day(1), day(2), 3, today()).unwrap_err();
        assert_eq!(err.to_string(), "Room can only accommodate 2 guests.");

        let single = Room { id: 1, hotel_id: 1, room_type: RoomType::Single, capacity: 1 };
        let err = validate_booking(&single, &[], day(1), day(2), 2, today()).unwrap_err();
        assert_eq!(err.to_string(), "Room can only accommodate 1 guest.");
    }
}
