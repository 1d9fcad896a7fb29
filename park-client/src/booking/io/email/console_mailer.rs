//! Mailer that only writes the confirmation to the log, used when no SMTP
//! settings are configured.

use anyhow::Result;
use async_trait::async_trait;
use log::info;

use super::ConfirmationMailer;
use crate::booking::domain::commands::notification::ConfirmationEmail;

#[derive(Debug, Clone, Default)]
pub struct ConsoleMailer;

impl ConsoleMailer {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ConfirmationMailer for ConsoleMailer {
    async fn send_confirmation(&self, email: &ConfirmationEmail) -> Result<()> {
        info!("📧 Confirmation email (not sent, no SMTP configured): {}", email.subject());
        for line in email.body().lines() {
            info!("📧   {}", line);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_console_mailer_always_succeeds() {
        let email = ConfirmationEmail {
            activity_name: "Safari".to_string(),
            schedule_id: 1,
            starts_at: "10:00".to_string(),
            ends_at: "11:00".to_string(),
            visitors: Vec::new(),
            terms_accepted: true,
        };
        assert!(ConsoleMailer::new().send_confirmation(&email).await.is_ok());
    }
}
