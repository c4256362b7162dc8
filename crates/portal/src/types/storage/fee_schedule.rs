use api_models::enums::InstrumentClass;

/// Per-department pricing for processing fees, in basis points and fixed
/// cents. Departments without their own schedule fall back to the
/// configured default.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeeSchedule {
    pub schedule_id: String,
    pub card_basis_points: i64,
    pub card_fixed_fee: i64,
    pub bank_basis_points: i64,
    pub bank_fixed_fee: i64,
    pub bank_fee_cap: Option<i64>,
    pub returned_fixed_fee: i64,
    pub dispute_fixed_fee: i64,
}

impl FeeSchedule {
    pub fn basis_points_for(&self, class: InstrumentClass) -> i64 {
        match class {
            InstrumentClass::Card => self.card_basis_points,
            InstrumentClass::BankTransfer => self.bank_basis_points,
        }
    }

    pub fn fixed_fee_for(&self, class: InstrumentClass) -> i64 {
        match class {
            InstrumentClass::Card => self.card_fixed_fee,
            InstrumentClass::BankTransfer => self.bank_fixed_fee,
        }
    }

    /// Bank transfer fees are capped; card fees are not.
    pub fn cap_for(&self, class: InstrumentClass) -> Option<i64> {
        match class {
            InstrumentClass::Card => None,
            InstrumentClass::BankTransfer => self.bank_fee_cap,
        }
    }
}
