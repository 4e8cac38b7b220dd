mod config;
mod error;
mod relay;
mod service;

pub use config::*;
pub use error::*;
pub use relay::*;
pub use service::*;
