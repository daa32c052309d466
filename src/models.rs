pub mod booking;
pub mod hotel;
pub mod room;
