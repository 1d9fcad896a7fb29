//! # Storage Module
//!
//! Collaborator traits and the schedule store that caches the latest
//! schedule snapshot.

pub mod schedule_store;
pub mod traits;

pub use schedule_store::{ScheduleSnapshot, ScheduleStore};
pub use traits::{BookingGateway, ScheduleSource};
