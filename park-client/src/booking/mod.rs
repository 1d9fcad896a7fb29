//! # Booking Module
//!
//! Non-UI logic of the park reservation client.
//!
//! - **Domain**: capacity, validation, roster, form state and submission rules
//! - **Storage**: collaborator traits and the schedule snapshot store
//! - **IO**: REST client for the booking API and the confirmation mailers
//!
//! ## Architecture
//!
//! ```text
//! UI / CLI
//!     ↓
//! BookingContext (this module)
//!     ↓
//! Domain (forms, gate, listing)
//!     ↓
//! Storage traits ← IO adapters (REST API, SMTP)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::{Context, Result};
use log::info;
use std::sync::Arc;

use crate::booking::config::ClientConfig;
use crate::booking::domain::{ActivityCatalog, ParticipantForm, ScheduleListing, SubmissionGate};
use crate::booking::io::{ConfirmationMailer, ConsoleMailer, RestBookingApi, SmtpMailer};
use crate::booking::storage::{BookingGateway, ScheduleSource, ScheduleStore};

/// Everything a booking screen needs, passed explicitly
#[derive(Clone)]
pub struct BookingContext {
    pub catalog: Arc<ActivityCatalog>,
    pub schedules: Arc<ScheduleStore>,
    pub submission_gate: SubmissionGate,
}

impl BookingContext {
    pub fn new(
        catalog: ActivityCatalog,
        source: Arc<dyn ScheduleSource>,
        gateway: Arc<dyn BookingGateway>,
        mailer: Arc<dyn ConfirmationMailer>,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            schedules: Arc::new(ScheduleStore::new(source)),
            submission_gate: SubmissionGate::new(gateway, mailer),
        }
    }

    /// Open a participant form on fresh schedule data
    pub async fn open_form(&self, activity_id: &str, schedule_id: i64) -> Result<ParticipantForm> {
        let snapshot = self.schedules.refresh().await?;
        let activity = self.catalog.require(activity_id)?;
        let slot = ScheduleListing::select_slot(&self.catalog, &snapshot, activity_id, schedule_id)?;
        Ok(ParticipantForm::open(activity, slot)?)
    }

    /// Refetch schedules and reconcile the form with its slot's new capacity
    pub async fn refresh_form(&self, form: &mut ParticipantForm) -> Result<()> {
        let snapshot = self.schedules.refresh().await?;
        let schedule_id = form.target().schedule_id;
        let slot = snapshot
            .find(schedule_id)
            .ok_or(domain::FormError::UnknownSchedule(schedule_id))?;
        form.apply_slot(slot)?;
        Ok(())
    }
}

/// Build the booking context from configuration
pub fn initialize_booking(config: &ClientConfig) -> Result<BookingContext> {
    info!("Setting up activity catalog");
    let catalog = ActivityCatalog::builtin().context("Invalid built-in activity catalog")?;

    info!("Setting up booking API client for {}", config.api_base_url);
    let api = Arc::new(RestBookingApi::new(&config.api_base_url, config.request_timeout())?);

    info!("Setting up confirmation mailer");
    let mailer: Arc<dyn ConfirmationMailer> = match &config.email {
        Some(email) => Arc::new(SmtpMailer::new(email.clone())?),
        None => Arc::new(ConsoleMailer::new()),
    };

    Ok(BookingContext::new(catalog, api.clone(), api, mailer))
}
