pub mod finix;

pub use self::finix::{FinixClient, FinixGateway};
