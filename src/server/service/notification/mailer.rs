//! Mail transports.
//!
//! `Mailer` is the send primitive used by the notifier. `SmtpMailer` relays through an
//! SMTP server with lettre, `ConsoleMailer` only logs (used when no SMTP host is
//! configured) and `MemoryMailer` records messages for tests.

use async_trait::async_trait;
use lettre::{
    message::{header, Mailbox, Message},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Tokio1Executor,
};
use thiserror::Error;

use crate::server::config::SmtpConfig;

#[derive(Error, Debug)]
pub enum MailError {
    /// Sender or recipient is not a valid mailbox.
    #[error("Invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// Message could not be assembled.
    #[error("Failed to build email message: {0}")]
    Message(#[from] lettre::error::Error),

    /// SMTP transport failure while configuring or sending.
    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// A plain-text email addressed to one or more recipients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub to: Vec<String>,
    pub subject: String,
    pub body: String,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError>;
}

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    /// Builds an SMTP relay transport.
    ///
    /// # Arguments
    /// - `config` - Relay host, port, credentials and STARTTLS flag
    /// - `from` - Sender address for every message
    ///
    /// # Returns
    /// - `Ok(SmtpMailer)` - Transport ready to send
    /// - `Err(MailError)` - Invalid sender address or relay host
    pub fn new(config: &SmtpConfig, from: &str) -> Result<Self, MailError> {
        let from = from.parse::<Mailbox>()?;

        let builder = if config.starttls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?
        }
        .port(config.port);

        let builder = match (&config.username, &config.password) {
            (Some(username), Some(password)) => {
                builder.credentials(Credentials::new(username.clone(), password.clone()))
            }
            _ => builder,
        };

        Ok(Self {
            transport: builder.build(),
            from,
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        let mut builder = Message::builder()
            .from(self.from.clone())
            .subject(email.subject.as_str())
            .header(header::ContentType::TEXT_PLAIN);

        for recipient in &email.to {
            builder = builder.to(recipient.parse::<Mailbox>()?);
        }

        let message = builder.body(email.body.clone())?;
        self.transport.send(message).await?;

        tracing::info!(subject = %email.subject, "email sent");

        Ok(())
    }
}

/// Logs messages instead of delivering them.
pub struct ConsoleMailer;

#[async_trait]
impl Mailer for ConsoleMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        tracing::info!(
            to = ?email.to,
            subject = %email.subject,
            body = %email.body,
            "SMTP not configured; email logged instead of sent"
        );

        Ok(())
    }
}

/// Records every message in memory.
#[cfg(test)]
#[derive(Default, Clone)]
pub struct MemoryMailer {
    outbox: std::sync::Arc<std::sync::Mutex<Vec<OutgoingEmail>>>,
}

#[cfg(test)]
impl MemoryMailer {
    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.outbox.lock().unwrap().clone()
    }
}

#[cfg(test)]
#[async_trait]
impl Mailer for MemoryMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        self.outbox.lock().unwrap().push(email.clone());
        Ok(())
    }
}

/// Rejects every message, as an unreachable relay would.
#[cfg(test)]
pub struct FailingMailer;

#[cfg(test)]
#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _email: &OutgoingEmail) -> Result<(), MailError> {
        Err(MailError::Address(
            "not an address".parse::<lettre::Address>().unwrap_err(),
        ))
    }
}
