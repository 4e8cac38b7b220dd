use std::time::Duration;

/// Any failure while handing a message to the SMTP relay.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("invalid address {address:?}: {source}")]
    Address {
        address: String,
        #[source]
        source: lettre::address::AddressError,
    },

    #[error("failed to build message: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("{0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    #[error("mail relay did not answer within {0:?}")]
    Timeout(Duration),
}
