#![forbid(unsafe_code)]
#![recursion_limit = "256"]

pub mod configs;
pub mod connector;
pub(crate) mod consts;
pub mod core;
pub mod db;
pub mod routes;
pub mod services;
pub mod types;

pub use portal_env::logger;

/// Header Constants
pub mod headers {
    pub const X_API_KEY: &str = "X-Api-Key";
    pub const CONTENT_TYPE: &str = "Content-Type";
    pub const X_FINIX_SIGNATURE: &str = "x-finix-signature";
}
