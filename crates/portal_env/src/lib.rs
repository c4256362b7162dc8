#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]

//!
//! Environment of the portal: logger, basic config, its environment awareness.
//!

pub mod env;
pub mod logger;

#[doc(inline)]
pub use logger::*;
pub use tracing;
pub use tracing_appender;

#[doc(inline)]
pub use self::env::*;

/// Service name deduced from the name of the crate.
#[macro_export]
macro_rules! service_name {
    () => {
        env!("CARGO_CRATE_NAME")
    };
}
