//! SMTP transport using lettre

use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use portfolio_contact::OutboundMessage;

use crate::{DeliveryError, EmailConfig, Mailer};

/// Sends relayed messages through the configured SMTP server
#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        let builder = if config.tls {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                authenticated = config.has_credentials(),
                "SMTP relay configured with STARTTLS"
            );
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
        } else {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP relay configured without TLS (e.g., MailDev)"
            );
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.smtp_host)
        };

        let mut builder = builder.port(config.smtp_port);

        if config.has_credentials() {
            builder = builder.credentials(Credentials::new(
                config.smtp_username.clone(),
                config.smtp_password.clone(),
            ));
        }

        Ok(Self {
            transport: builder.build(),
        })
    }
}

#[async_trait::async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, message: &OutboundMessage) -> Result<(), DeliveryError> {
        let email = build_message(message)?;

        self.transport.send(email).await?;

        Ok(())
    }
}

fn build_message(message: &OutboundMessage) -> Result<Message, DeliveryError> {
    let email = Message::builder()
        .from(mailbox(&message.from)?)
        .to(mailbox(&message.to)?)
        .reply_to(mailbox(&message.reply_to)?)
        .subject(&message.subject)
        .header(ContentType::TEXT_PLAIN)
        .body(message.body.clone())?;

    Ok(email)
}

fn mailbox(address: &str) -> Result<Mailbox, DeliveryError> {
    address.parse().map_err(|source| DeliveryError::Address {
        address: address.to_owned(),
        source,
    })
}
