//! # Storage Traits
//!
//! Abstractions over the remote booking API. The domain layer only talks to
//! these traits, so tests can swap the REST client for in-memory fakes.

use anyhow::Result;
use async_trait::async_trait;

use crate::booking::domain::commands::booking::{BookingReceipt, BookingRequest};
use crate::booking::domain::errors::BookingError;
use crate::booking::domain::models::schedule::ScheduleSlot;

/// Source of schedule data
#[async_trait]
pub trait ScheduleSource: Send + Sync {
    /// Fetch every schedule known to the server, in server order
    async fn fetch_schedules(&self) -> Result<Vec<ScheduleSlot>>;
}

/// Persists bookings
///
/// Failures are classified by cause so the caller can pick a user message
/// without looking at raw server text.
#[async_trait]
pub trait BookingGateway: Send + Sync {
    async fn create_booking(&self, request: &BookingRequest) -> std::result::Result<BookingReceipt, BookingError>;
}
