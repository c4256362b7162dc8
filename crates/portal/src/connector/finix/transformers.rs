use api_models::enums::AttemptStatus;
use common_utils::types::MinorUnit;
use serde::{Deserialize, Serialize};

/// Request body of `POST /transfers`.
#[derive(Clone, Debug, Serialize)]
pub struct FinixTransferRequest {
    pub merchant: String,
    pub currency: String,
    pub amount: MinorUnit,
    pub source: String,
    pub idempotency_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fraud_session_id: Option<String>,
}

/// Transfer object returned by the gateway.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FinixTransferResponse {
    pub id: String,
    pub state: FinixState,
    pub amount: MinorUnit,
    pub currency: String,
    pub failure_code: Option<String>,
    pub failure_message: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FinixState {
    Pending,
    Succeeded,
    Failed,
    Canceled,
    #[serde(other)]
    Unknown,
}

impl From<FinixState> for AttemptStatus {
    fn from(state: FinixState) -> Self {
        match state {
            FinixState::Succeeded => Self::Succeeded,
            FinixState::Failed | FinixState::Canceled => Self::Failed,
            FinixState::Pending | FinixState::Unknown => Self::Pending,
        }
    }
}

/// Request body of `POST /payment_instruments`, tokenizing a wallet entry.
#[derive(Clone, Debug, Serialize)]
pub struct FinixInstrumentRequest {
    #[serde(rename = "type")]
    pub instrument_type: String,
    pub identity: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FinixInstrumentResponse {
    pub id: String,
}

/// Envelope of an incoming gateway webhook. The interesting payload sits
/// under `_embedded` wrapping conventions flattened to `data.object`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FinixWebhookEnvelope {
    #[serde(rename = "type")]
    pub event_type: String,
    pub data: FinixWebhookData,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FinixWebhookData {
    pub object: FinixMerchantObject,
}

/// Merchant object carried by onboarding webhooks. Fields the portal does
/// not track are left out; unknown fields are ignored on deserialization.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FinixMerchantObject {
    pub id: String,
    pub identity: Option<String>,
    pub onboarding_state: Option<FinixOnboardingState>,
    pub processing_enabled: Option<bool>,
    pub settlement_enabled: Option<bool>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FinixOnboardingState {
    Provisioning,
    Approved,
    Enabled,
    Rejected,
    Disabled,
    #[serde(other)]
    Unknown,
}

/// Error body the gateway returns on non-2xx responses.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FinixErrorResponse {
    pub message: Option<String>,
    pub code: Option<String>,
}
