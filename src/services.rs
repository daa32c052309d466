pub mod booking_rules;
pub mod booking_service;
pub mod data_service;
pub mod room_locks;
