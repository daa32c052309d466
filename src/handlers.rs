pub mod bookings;
pub mod data;
pub mod hotels;
