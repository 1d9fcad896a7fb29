//! # Submission Gate
//!
//! Decides whether a participant form may proceed and drives the two
//! collaborator calls of a submission: persist the booking, then send the
//! confirmation email.
//!
//! Persistence must succeed before the email is attempted. An email failure is
//! logged and never turns a confirmed booking into a failure.

use log::{info, warn};
use serde::Serialize;
use std::sync::Arc;

use super::commands::booking::{BookingReceipt, BookingRequest};
use super::commands::notification::ConfirmationEmail;
use super::errors::{BookingError, FormError};
use super::participant_form::{FormState, ParticipantForm};
use crate::booking::io::email::ConfirmationMailer;
use crate::booking::storage::BookingGateway;

/// Result of one submit attempt, as reported to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmitOutcome {
    /// Validation failed, the form's error map holds the details
    Blocked { error_count: usize },
    Confirmed { receipt: BookingReceipt, email_sent: bool },
    Failed {
        #[serde(skip)]
        error: BookingError,
        message: String,
    },
}

#[derive(Clone)]
pub struct SubmissionGate {
    gateway: Arc<dyn BookingGateway>,
    mailer: Arc<dyn ConfirmationMailer>,
}

impl SubmissionGate {
    pub fn new(gateway: Arc<dyn BookingGateway>, mailer: Arc<dyn ConfirmationMailer>) -> Self {
        Self { gateway, mailer }
    }

    /// Validate the form and, when clean, submit it.
    ///
    /// Returns `Err` only for misuse: submitting a confirmed form or a form
    /// with a submission already in progress.
    pub async fn attempt_submit(&self, form: &mut ParticipantForm) -> Result<SubmitOutcome, FormError> {
        match form.state() {
            FormState::Confirmed(_) => return Err(FormError::Finalized),
            FormState::Submitting => return Err(FormError::SubmissionInFlight),
            _ => {}
        }

        form.set_state(FormState::Validating);
        if !form.validate_all() {
            let error_count = form.errors().error_count();
            info!(
                "🚫 Submission of form {} blocked by {} field errors",
                form.session_id(),
                error_count
            );
            form.set_state(FormState::Blocked);
            return Ok(SubmitOutcome::Blocked { error_count });
        }

        let request = form.booking_request()?;
        form.set_state(FormState::Submitting);
        let mut in_flight = InFlight { form };
        info!(
            "📨 Submitting form {}: {} visitors for schedule {}",
            in_flight.form.session_id(),
            request.visitors.len(),
            request.schedule_id
        );

        let result = self.gateway.create_booking(&request).await;
        let form = &mut *in_flight.form;
        match result {
            Ok(receipt) => {
                info!(
                    "✅ Booking confirmed for form {} ({} inscriptions)",
                    form.session_id(),
                    receipt.inscription_ids.len()
                );
                form.set_state(FormState::Confirmed(receipt.clone()));
                let email_sent = self.send_confirmation(form, request).await;
                Ok(SubmitOutcome::Confirmed { receipt, email_sent })
            }
            Err(error) => {
                warn!(
                    "❌ Booking for form {} failed ({}): {}",
                    form.session_id(),
                    error.category(),
                    error
                );
                let message = error.user_message().to_string();
                form.set_state(FormState::Failed(error.clone()));
                Ok(SubmitOutcome::Failed { error, message })
            }
        }
    }

    async fn send_confirmation(&self, form: &ParticipantForm, request: BookingRequest) -> bool {
        let target = form.target();
        let email = ConfirmationEmail {
            activity_name: target.activity_name.clone(),
            schedule_id: request.schedule_id,
            starts_at: target.starts_at.clone(),
            ends_at: target.ends_at.clone(),
            visitors: request.visitors,
            terms_accepted: request.terms_accepted,
        };

        match self.mailer.send_confirmation(&email).await {
            Ok(()) => true,
            Err(e) => {
                warn!("📧 Confirmation email for form {} was not sent: {:#}", form.session_id(), e);
                false
            }
        }
    }
}

/// Puts a form back into `Editing` when a submission future is dropped
/// before the booking call returned.
struct InFlight<'a> {
    form: &'a mut ParticipantForm,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if *self.form.state() == FormState::Submitting {
            warn!("⚠️ Submission of form {} was abandoned", self.form.session_id());
            self.form.set_state(FormState::Editing);
        }
    }
}
