use validator::ValidationErrors;

/// A submission with one or more missing or empty fields.
///
/// The display text is the fixed message returned to visitors; the failing
/// field names stay available for logging.
#[derive(Debug, thiserror::Error)]
#[error("All fields are required.")]
pub struct ValidationError(#[from] ValidationErrors);

impl ValidationError {
    pub fn fields(&self) -> Vec<String> {
        let mut fields = self
            .0
            .field_errors()
            .into_keys()
            .map(|field| field.to_string())
            .collect::<Vec<_>>();
        fields.sort_unstable();
        fields
    }
}

pub type Result<T> = std::result::Result<T, ValidationError>;
