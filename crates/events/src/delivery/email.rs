//! Notification email delivery.
//!
//! [`Mailer`] sends `{to, subject, html_body}` messages over SMTP via the
//! `lettre` async transport when `SMTP_HOST` is configured. Without it, the
//! mailer drops rendered HTML files into a local directory instead, which is
//! what local development and the demo environment use. Delivery is
//! fire-and-forget from the caller's perspective: failures are surfaced as
//! errors for logging only.

use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for email delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),

    /// Writing to the file-drop directory failed.
    #[error("Email file-drop error: {0}")]
    FileDrop(#[from] std::io::Error),
}

// ---------------------------------------------------------------------------
// EmailMessage
// ---------------------------------------------------------------------------

/// A rendered notification email.
#[derive(Debug, Clone)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Default sender address when `SMTP_FROM` is not set.
const DEFAULT_FROM_ADDRESS: &str = "noreply@broadway.local";

/// Default file-drop directory when SMTP is not configured.
const DEFAULT_DROP_DIR: &str = "tmp/emails";

/// Configuration for the SMTP transport.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    /// SMTP server hostname.
    pub host: String,
    /// SMTP server port (defaults to 587).
    pub port: u16,
    /// RFC 5322 "From" address.
    pub from_address: String,
    /// Optional SMTP username.
    pub user: Option<String>,
    /// Optional SMTP password.
    pub password: Option<String>,
}

impl SmtpConfig {
    /// Load SMTP configuration from environment variables.
    ///
    /// Returns `None` if `SMTP_HOST` is not set, signalling that delivery
    /// should fall back to the file drop.
    ///
    /// | Variable        | Required | Default                   |
    /// |-----------------|----------|---------------------------|
    /// | `SMTP_HOST`     | yes      | --                        |
    /// | `SMTP_PORT`     | no       | `587`                     |
    /// | `SMTP_FROM`     | no       | `noreply@broadway.local`  |
    /// | `SMTP_USER`     | no       | --                        |
    /// | `SMTP_PASSWORD` | no       | --                        |
    pub fn from_env() -> Option<Self> {
        let host = std::env::var("SMTP_HOST").ok()?;
        Some(Self {
            host,
            port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            from_address: std::env::var("SMTP_FROM")
                .unwrap_or_else(|_| DEFAULT_FROM_ADDRESS.to_string()),
            user: std::env::var("SMTP_USER").ok(),
            password: std::env::var("SMTP_PASSWORD").ok(),
        })
    }
}

// ---------------------------------------------------------------------------
// Mailer
// ---------------------------------------------------------------------------

/// Notification email sender: SMTP or local file drop.
pub enum Mailer {
    Smtp(SmtpConfig),
    FileDrop(PathBuf),
}

impl Mailer {
    /// Build a mailer from the environment: SMTP when `SMTP_HOST` is set,
    /// otherwise a file drop into `EMAIL_DROP_DIR` (default `tmp/emails`).
    pub fn from_env() -> Self {
        match SmtpConfig::from_env() {
            Some(config) => Mailer::Smtp(config),
            None => {
                let dir = std::env::var("EMAIL_DROP_DIR")
                    .unwrap_or_else(|_| DEFAULT_DROP_DIR.to_string());
                Mailer::FileDrop(PathBuf::from(dir))
            }
        }
    }

    /// Deliver one message.
    pub async fn deliver(&self, message: &EmailMessage) -> Result<(), EmailError> {
        match self {
            Mailer::Smtp(config) => Self::deliver_smtp(config, message).await,
            Mailer::FileDrop(dir) => Self::deliver_file(dir, message).await,
        }
    }

    async fn deliver_smtp(config: &SmtpConfig, message: &EmailMessage) -> Result<(), EmailError> {
        use lettre::{
            message::header::ContentType, transport::smtp::authentication::Credentials,
            AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
        };

        let email = Message::builder()
            .from(config.from_address.parse()?)
            .to(message.to.parse()?)
            .subject(&message.subject)
            .header(ContentType::TEXT_HTML)
            .body(message.html_body.clone())
            .map_err(|e| EmailError::Build(e.to_string()))?;

        let mut transport_builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?.port(config.port);

        if let (Some(user), Some(pass)) = (&config.user, &config.password) {
            transport_builder =
                transport_builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        let mailer = transport_builder.build();
        mailer.send(email).await?;

        tracing::info!(to = %message.to, subject = %message.subject, "Notification email sent");
        Ok(())
    }

    async fn deliver_file(dir: &Path, message: &EmailMessage) -> Result<(), EmailError> {
        tokio::fs::create_dir_all(dir).await?;

        let stamp = chrono::Utc::now()
            .format("%Y-%m-%dT%H-%M-%S%.3f")
            .to_string();
        let recipient = message.to.replace('@', "-at-");
        let path = dir.join(format!("{stamp}-{recipient}.html"));

        tokio::fs::write(&path, &message.html_body).await?;

        tracing::info!(
            to = %message.to,
            subject = %message.subject,
            path = %path.display(),
            "Notification email written to file drop"
        );
        Ok(())
    }
}
