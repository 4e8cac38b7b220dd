use crate::ValidSubmission;

/// Prefix put in front of every relayed subject line.
pub const SUBJECT_TAG: &str = "[Portfolio Contact]";

/// The email relayed to the site operator for one submission.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundMessage {
    pub from: String,
    pub to: String,
    pub reply_to: String,
    pub subject: String,
    pub body: String,
}

impl OutboundMessage {
    /// Builds the message sent from and to the operator's own address, with
    /// replies routed back to the visitor.
    pub fn compose(submission: &ValidSubmission, operator: &str) -> Self {
        Self {
            from: operator.to_owned(),
            to: operator.to_owned(),
            reply_to: submission.email.to_owned(),
            subject: format!("{SUBJECT_TAG} {}", submission.subject),
            body: format!(
                "Name: {}\nEmail: {}\nMessage: {}",
                submission.name, submission.email, submission.message
            ),
        }
    }
}
