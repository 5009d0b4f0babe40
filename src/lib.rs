mod client;
mod error;
mod logger;
mod protocol;
mod types;

pub use client::{TstatClient, TstatClientBuilder, log_failure};
pub use error::{Error, FailureDetails, Result};
pub use logger::MessageLogMode;
pub use types::*;
