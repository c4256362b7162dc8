//!
//! Logger of the system.
//!

pub mod config;
pub mod setup;
pub mod types;

#[doc(inline)]
pub use setup::{setup, TelemetryGuard};
pub use tracing::{debug, error, event as log, info, instrument, warn, Level};

#[doc(inline)]
pub use self::types::{Flow, FlowMetric, Tag};
