#![forbid(unsafe_code)]

//! API request and response types of the portal.

pub mod bookings;
pub mod enums;
pub mod errors;
pub mod payments;
pub mod webhooks;
