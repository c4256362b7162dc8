//! Payment API types.

use common_utils::types::MinorUnit;
use serde::{Deserialize, Serialize};

use crate::enums::{AttemptStatus, EntityKind};

/// The domain record a payment is tendered against.
///
/// Exactly one target per attempt; the tagged representation makes a
/// multi-target (or target-less) attempt unrepresentable.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum PaymentTarget {
    Permit(String),
    BusinessLicense(String),
    TaxSubmission(String),
    ServiceApplication(String),
    Bill(String),
}

impl PaymentTarget {
    /// The entity kind of the target.
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Permit(_) => EntityKind::Permit,
            Self::BusinessLicense(_) => EntityKind::BusinessLicense,
            Self::TaxSubmission(_) => EntityKind::TaxSubmission,
            Self::ServiceApplication(_) => EntityKind::ServiceApplication,
            Self::Bill(_) => EntityKind::Bill,
        }
    }

    /// The id of the targeted record.
    pub fn record_id(&self) -> &str {
        match self {
            Self::Permit(id)
            | Self::BusinessLicense(id)
            | Self::TaxSubmission(id)
            | Self::ServiceApplication(id)
            | Self::Bill(id) => id,
        }
    }
}

/// Request body of `POST /payments`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PaymentsRequest {
    /// The record being paid for.
    pub target: PaymentTarget,
    /// The caller's stored payment instrument to charge.
    pub instrument_id: String,
    /// Total the client believes it owes, fees included. Verified server-side
    /// against the recomputed total before any money moves.
    pub total_amount: MinorUnit,
    /// Client-supplied token deduplicating retries of the same tender.
    pub idempotency_key: String,
}

/// Response body of the payment flows.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PaymentsResponse {
    pub attempt_id: String,
    pub status: AttemptStatus,
    pub target: PaymentTarget,
    pub base_amount: MinorUnit,
    pub fee_amount: MinorUnit,
    pub total_amount: MinorUnit,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_transfer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_message: Option<String>,
}

/// Path parameter wrapper for attempt retrieval.
#[derive(Clone, Debug, Deserialize)]
pub struct PaymentRetrieveRequest {
    pub attempt_id: String,
}
