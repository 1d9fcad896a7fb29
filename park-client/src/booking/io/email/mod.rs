//! Confirmation email channel.

pub mod console_mailer;
pub mod smtp_mailer;

use anyhow::Result;
use async_trait::async_trait;

use crate::booking::domain::commands::notification::ConfirmationEmail;

pub use console_mailer::ConsoleMailer;
pub use smtp_mailer::SmtpMailer;

/// Sends the booking confirmation once the booking is persisted
#[async_trait]
pub trait ConfirmationMailer: Send + Sync {
    async fn send_confirmation(&self, email: &ConfirmationEmail) -> Result<()>;
}
