pub mod error;
pub mod prober;
pub mod result;

pub use error::ScanError;
pub use prober::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, ProbeOptions, Prober};
pub use result::StatusResult;
