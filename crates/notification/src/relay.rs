use std::{sync::Arc, time::Duration};

use portfolio_contact::{OutboundMessage, ValidSubmission};

use crate::{DeliveryError, EmailConfig, SmtpMailer};

/// Hands one composed message to an outbound transport.
#[async_trait::async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: &OutboundMessage) -> Result<(), DeliveryError>;
}

/// Relays contact submissions to the site operator.
///
/// One call is one delivery attempt: no retry, no queue.
#[derive(Clone)]
pub struct Relay {
    mailer: Arc<dyn Mailer>,
    operator: String,
    timeout: Duration,
}

impl Relay {
    pub fn new(
        mailer: impl Mailer + 'static,
        operator: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            mailer: Arc::new(mailer),
            operator: operator.into(),
            timeout,
        }
    }

    pub fn from_config(config: &EmailConfig) -> anyhow::Result<Self> {
        Ok(Self::new(
            SmtpMailer::new(config)?,
            &config.contact_address,
            config.timeout(),
        ))
    }

    #[tracing::instrument(skip_all, fields(subject = %submission.subject))]
    pub async fn relay(&self, submission: &ValidSubmission) -> Result<(), DeliveryError> {
        let message = OutboundMessage::compose(submission, &self.operator);

        let result = match tokio::time::timeout(self.timeout, self.mailer.send(&message)).await {
            Ok(result) => result,
            Err(_) => Err(DeliveryError::Timeout(self.timeout)),
        };

        match &result {
            Ok(()) => tracing::info!("Contact message handed to mail relay"),
            Err(err) => tracing::warn!(error = %err, "Contact message delivery failed"),
        }

        result
    }
}
