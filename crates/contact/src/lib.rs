mod error;
mod outbound;
mod submission;

pub use error::*;
pub use outbound::*;
pub use submission::*;
