pub mod app;
pub mod bookings;
pub mod health;
pub mod payments;
pub mod webhooks;

pub use self::app::AppState;
