use anyhow::{Context, Result};
use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::{
    transport::smtp::authentication::Credentials,
    transport::smtp::client::{Tls, TlsParameters},
    Message, SmtpTransport, Transport,
};
use log::info;

use super::ConfirmationMailer;
use crate::booking::config::EmailConfig;
use crate::booking::domain::commands::notification::ConfirmationEmail;

/// Sends confirmations through an SMTP relay, recipients in BCC
#[derive(Clone)]
pub struct SmtpMailer {
    config: EmailConfig,
    transport: SmtpTransport,
}

impl SmtpMailer {
    pub fn new(config: EmailConfig) -> Result<Self> {
        info!("📧 Initializing SMTP mailer for {}:{}", config.smtp_server, config.smtp_port);

        let tls_params = TlsParameters::new(config.smtp_server.clone())
            .context("Failed to create TLS parameters")?;

        let transport = SmtpTransport::relay(&config.smtp_server)
            .context("Failed to create SMTP relay")?
            .port(config.smtp_port)
            .tls(Tls::Required(tls_params))
            .credentials(Credentials::new(config.username.clone(), config.password.clone()))
            .build();

        Ok(Self { config, transport })
    }

    /// Build the message, `None` when there is nobody to send it to
    pub fn build_message(&self, email: &ConfirmationEmail) -> Result<Option<Message>> {
        if self.config.to_emails.is_empty() {
            return Ok(None);
        }

        let mut builder = Message::builder().from(
            self.config
                .from_email
                .parse::<Mailbox>()
                .context("Failed to parse from email")?,
        );
        for address in &self.config.to_emails {
            builder = builder.bcc(address.parse::<Mailbox>().context("Failed to parse BCC email")?);
        }

        let message = builder
            .subject(email.subject())
            .body(email.body())
            .context("Failed to build email")?;
        Ok(Some(message))
    }
}

#[async_trait]
impl ConfirmationMailer for SmtpMailer {
    async fn send_confirmation(&self, email: &ConfirmationEmail) -> Result<()> {
        let Some(message) = self.build_message(email)? else {
            info!("📧 No email recipients configured, skipping confirmation");
            return Ok(());
        };

        // SmtpTransport blocks
        let transport = self.transport.clone();
        tokio::task::spawn_blocking(move || transport.send(&message))
            .await
            .context("Email task panicked")?
            .context("Failed to send email")?;

        info!(
            "📧 Confirmation for {} sent to {} recipients",
            email.activity_name,
            self.config.to_emails.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::domain::commands::booking::Visitor;

    fn config(to_emails: Vec<&str>) -> EmailConfig {
        EmailConfig {
            smtp_server: "smtp.example.com".to_string(),
            smtp_port: 587,
            username: "bookings".to_string(),
            password: "secret".to_string(),
            from_email: "bookings@example.com".to_string(),
            to_emails: to_emails.into_iter().map(str::to_string).collect(),
        }
    }

    fn email() -> ConfirmationEmail {
        ConfirmationEmail {
            activity_name: "Safari".to_string(),
            schedule_id: 2,
            starts_at: "14:00".to_string(),
            ends_at: "15:00".to_string(),
            visitors: vec![Visitor {
                name: "Ana Gomez".to_string(),
                national_id: 12345678,
                age: 30,
                clothing_size: None,
            }],
            terms_accepted: true,
        }
    }

    #[test]
    fn test_message_goes_to_every_recipient() {
        let mailer = SmtpMailer::new(config(vec!["desk@example.com", "guide@example.com"])).unwrap();
        let message = mailer.build_message(&email()).unwrap().unwrap();

        let recipients: Vec<String> = message.envelope().to().iter().map(|a| a.to_string()).collect();
        assert_eq!(recipients, vec!["desk@example.com", "guide@example.com"]);

        let raw = String::from_utf8(message.formatted()).unwrap();
        assert!(raw.contains("Booking confirmed"));
        assert!(!raw.contains("desk@example.com"));
    }

    #[test]
    fn test_invalid_sender_is_reported() {
        let mut settings = config(vec!["desk@example.com"]);
        settings.from_email = "not an address".to_string();
        let mailer = SmtpMailer::new(settings).unwrap();
        assert!(mailer.build_message(&email()).is_err());
    }

    #[tokio::test]
    async fn test_no_recipients_skips_sending() {
        let mailer = SmtpMailer::new(config(Vec::new())).unwrap();
        assert!(mailer.build_message(&email()).unwrap().is_none());
        assert!(mailer.send_confirmation(&email()).await.is_ok());
    }
}
