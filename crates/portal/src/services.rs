pub mod api;
pub mod authentication;

pub use self::api::{log_and_return_error_response, server_wrap, ApplicationResponse};
