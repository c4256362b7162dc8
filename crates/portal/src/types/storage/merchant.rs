use api_models::enums::{ProcessingStatus, VerificationStatus};
use time::PrimitiveDateTime;

/// A municipal department able to collect money through the gateway.
#[derive(Clone, Debug)]
pub struct Merchant {
    pub merchant_id: String,
    pub department_name: String,
    pub gateway_merchant_id: Option<String>,
    pub gateway_identity_id: Option<String>,
    pub verification_status: VerificationStatus,
    pub processing_status: ProcessingStatus,
    pub processing_enabled: bool,
    pub settlement_enabled: bool,
    pub fee_schedule_id: Option<String>,
    pub created_at: PrimitiveDateTime,
    pub modified_at: PrimitiveDateTime,
}

impl Merchant {
    /// Whether this department may accept a new charge right now.
    pub fn can_process_payments(&self) -> bool {
        self.processing_enabled && self.processing_status == ProcessingStatus::ProcessingEnabled
    }
}

#[derive(Clone, Debug)]
pub enum MerchantUpdate {
    OnboardingUpdate {
        verification_status: VerificationStatus,
        processing_status: ProcessingStatus,
        processing_enabled: bool,
        settlement_enabled: bool,
    },
    ProcessingToggle {
        processing_enabled: bool,
    },
    SettlementToggle {
        settlement_enabled: bool,
    },
}

impl MerchantUpdate {
    pub fn apply_changeset(self, source: Merchant) -> Merchant {
        let now = common_utils::date_time::now();
        match self {
            Self::OnboardingUpdate {
                verification_status,
                processing_status,
                processing_enabled,
                settlement_enabled,
            } => Merchant {
                verification_status,
                processing_status,
                processing_enabled,
                settlement_enabled,
                modified_at: now,
                ..source
            },
            Self::ProcessingToggle { processing_enabled } => Merchant {
                processing_enabled,
                modified_at: now,
                ..source
            },
            Self::SettlementToggle { settlement_enabled } => Merchant {
                settlement_enabled,
                modified_at: now,
                ..source
            },
        }
    }
}
