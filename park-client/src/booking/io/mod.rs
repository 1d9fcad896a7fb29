//! # IO Module
//!
//! Adapters to the outside world: the booking REST API and the confirmation
//! email channel.

pub mod email;
pub mod rest;

pub use email::{ConfirmationMailer, ConsoleMailer, SmtpMailer};
pub use rest::RestBookingApi;
