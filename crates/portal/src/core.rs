pub mod bookings;
pub mod errors;
pub mod fees;
pub mod payments;
pub mod webhooks;
