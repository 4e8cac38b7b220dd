use serde::Deserialize;
use validator::Validate;

/// Contact form payload as posted by the browser.
///
/// Every field is optional on the wire so that an absent key, a JSON `null`
/// and an empty string all reach validation and are rejected the same way.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ContactSubmission {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    #[validate(required, length(min = 1))]
    pub subject: Option<String>,
    #[validate(required, length(min = 1))]
    pub message: Option<String>,
}

/// A submission whose four fields are known to be present and non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            subject: Some(subject.into()),
            message: Some(message.into()),
        }
    }

    /// Checks presence of every field. The email is not checked for format.
    pub fn into_valid(self) -> crate::Result<ValidSubmission> {
        self.validate()?;

        Ok(ValidSubmission {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            subject: self.subject.unwrap_or_default(),
            message: self.message.unwrap_or_default(),
        })
    }
}
