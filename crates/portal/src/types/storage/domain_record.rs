use api_models::enums::{EntityKind, PaymentStatus, RecordStatus};
use common_utils::types::MinorUnit;
use time::PrimitiveDateTime;

/// A payable civic record: a permit, a business license, a tax submission,
/// a service application or a utility bill. All five share one storage
/// shape; only the status vocabulary differs by kind.
#[derive(Clone, Debug)]
pub struct DomainRecord {
    pub record_id: String,
    pub kind: EntityKind,
    pub owner_user_id: String,
    pub merchant_id: String,
    pub status: RecordStatus,
    pub amount_due: MinorUnit,
    pub payment_status: PaymentStatus,
    pub created_at: PrimitiveDateTime,
    pub modified_at: PrimitiveDateTime,
}

#[derive(Clone, Debug)]
pub enum DomainRecordUpdate {
    PaymentCompleted {
        status: RecordStatus,
        payment_status: PaymentStatus,
    },
}

impl DomainRecordUpdate {
    pub fn apply_changeset(self, source: DomainRecord) -> DomainRecord {
        match self {
            Self::PaymentCompleted {
                status,
                payment_status,
            } => DomainRecord {
                status,
                payment_status,
                modified_at: common_utils::date_time::now(),
                ..source
            },
        }
    }
}
