//! Reservation client for the adventure park booking API.

pub mod booking;

pub use booking::{initialize_booking, BookingContext};
