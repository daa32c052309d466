// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hotel Booking API",
        description = "Consulta de hotéis, disponibilidade de quartos e reservas."
    ),
    paths(
        // --- Hotels ---
        handlers::hotels::search_hotels,
        handlers::hotels::available_rooms,

        // --- Bookings ---
        handlers::bookings::create_booking,
        handlers::bookings::get_booking,
        handlers::bookings::cancel_booking,

        // --- Data ---
        handlers::data::seed_data,
        handlers::data::reset_data,
    ),
    components(
        schemas(
            models::hotel::Hotel,
            models::room::RoomType,
            models::room::Room,
            models::booking::BookingRequest,
            models::booking::BookingState,
            models::booking::BookingResponse,
            models::booking::BookingFailure,
        )
    ),
    tags(
        (name = "Hotels", description = "Busca de hotéis e quartos disponíveis"),
        (name = "Bookings", description = "Criação, consulta e cancelamento de reservas"),
        (name = "Data", description = "Carga e limpeza dos dados de demonstração")
    )
)]
pub struct ApiDoc;
