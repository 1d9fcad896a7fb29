//! # REST Interface Layer
//!
//! HTTP client side of the park booking API.
//!
//! ## Key Responsibilities
//!
//! - **Requests**: schedule listing and inscription creation
//! - **Mapping**: wire DTOs from the `shared` crate to domain types and back
//! - **Error Translation**: status codes and transport failures to booking error categories

pub mod booking_api;
pub mod mappers;

pub use booking_api::RestBookingApi;
