use api_models::enums::{AttemptStatus, EntityKind};
use common_utils::types::MinorUnit;
use time::PrimitiveDateTime;

/// A single payment attempt against a payable record. One logical payment
/// may accumulate several attempts; at most one of them succeeds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaymentAttempt {
    pub attempt_id: String,
    pub merchant_id: String,
    pub user_id: String,
    pub target_kind: EntityKind,
    pub record_id: String,
    pub instrument_id: String,
    pub base_amount: MinorUnit,
    pub fee_amount: MinorUnit,
    pub total_amount: MinorUnit,
    pub status: AttemptStatus,
    pub gateway_transfer_id: Option<String>,
    pub idempotency_key: String,
    pub failure_code: Option<String>,
    pub failure_message: Option<String>,
    pub created_at: PrimitiveDateTime,
    pub modified_at: PrimitiveDateTime,
}

#[derive(Clone, Debug)]
pub struct PaymentAttemptNew {
    pub attempt_id: String,
    pub merchant_id: String,
    pub user_id: String,
    pub target_kind: EntityKind,
    pub record_id: String,
    pub instrument_id: String,
    pub base_amount: MinorUnit,
    pub fee_amount: MinorUnit,
    pub total_amount: MinorUnit,
    pub status: AttemptStatus,
    pub idempotency_key: String,
}

#[derive(Clone, Debug)]
pub enum PaymentAttemptUpdate {
    StatusUpdate {
        status: AttemptStatus,
        gateway_transfer_id: Option<String>,
        failure_code: Option<String>,
        failure_message: Option<String>,
    },
}

impl PaymentAttemptUpdate {
    pub fn apply_changeset(self, source: PaymentAttempt) -> PaymentAttempt {
        match self {
            Self::StatusUpdate {
                status,
                gateway_transfer_id,
                failure_code,
                failure_message,
            } => PaymentAttempt {
                status,
                gateway_transfer_id: gateway_transfer_id.or(source.gateway_transfer_id),
                failure_code,
                failure_message,
                modified_at: common_utils::date_time::now(),
                ..source
            },
        }
    }
}
