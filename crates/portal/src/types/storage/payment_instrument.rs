use api_models::enums::InstrumentClass;
use time::PrimitiveDateTime;

/// A payment method saved in a resident's wallet. Instruments start out
/// untokenized and receive a gateway token on first use.
#[derive(Clone, Debug)]
pub struct PaymentInstrument {
    pub instrument_id: String,
    pub user_id: String,
    pub class: InstrumentClass,
    pub display_label: String,
    pub gateway_token: Option<String>,
    pub disabled: bool,
    pub created_at: PrimitiveDateTime,
    pub modified_at: PrimitiveDateTime,
}

#[derive(Clone, Debug)]
pub enum PaymentInstrumentUpdate {
    TokenUpdate { gateway_token: String },
    DisableUpdate { disabled: bool },
}

impl PaymentInstrumentUpdate {
    pub fn apply_changeset(self, source: PaymentInstrument) -> PaymentInstrument {
        let now = common_utils::date_time::now();
        match self {
            Self::TokenUpdate { gateway_token } => PaymentInstrument {
                gateway_token: Some(gateway_token),
                modified_at: now,
                ..source
            },
            Self::DisableUpdate { disabled } => PaymentInstrument {
                disabled,
                modified_at: now,
                ..source
            },
        }
    }
}
