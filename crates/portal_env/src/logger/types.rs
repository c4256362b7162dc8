//! Types.

use std::fmt::{Debug, Display};

use serde::Deserialize;
use strum::{Display, EnumString};
pub use tracing::{
    field::{Field, Visit},
    Level, Value,
};

/// Category and tag of log event.
#[derive(Debug, Default, Deserialize, Clone, Display, EnumString)]
pub enum Tag {
    /// General.
    #[default]
    General,

    /// API: incoming web request.
    ApiIncomingRequest,
    /// API: outgoing web request.
    ApiOutgoingRequest,

    /// Data base: create.
    DbCreate,
    /// Data base: read.
    DbRead,
    /// Data base: update.
    DbUpdate,

    /// Begin Request
    BeginRequest,
    /// End Request
    EndRequest,

    /// Call initiated to the payment gateway.
    InitiatedToGateway,
}

/// A metric idendifying an API flow, recorded on request spans.
pub trait FlowMetric: Display + Debug + Clone {}

/// API Flow
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum Flow {
    /// Health check
    HealthCheck,
    /// Payment create flow (the orchestrator entry point).
    PaymentsCreate,
    /// Payment attempt retrieve flow.
    PaymentsRetrieve,
    /// Advisory booking conflict check flow.
    BookingsCheck,
    /// Booking create flow.
    BookingsCreate,
    /// Incoming webhook from the payment gateway.
    IncomingWebhookReceive,
}

impl FlowMetric for Flow {}
