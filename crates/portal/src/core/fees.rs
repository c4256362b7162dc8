use api_models::enums::{EntityKind, FeeMode, InstrumentClass};
use common_utils::{consts::BASIS_POINTS_DIVISOR, types::MinorUnit};
use error_stack::report;

use crate::{
    configs::settings,
    core::errors::{ApiErrorResponse, RouterResult},
    types::storage::FeeSchedule,
};

/// Outcome of a fee computation. `total_amount` is always
/// `base_amount + fee_amount`, in both modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fee {
    pub base_amount: MinorUnit,
    pub fee_amount: MinorUnit,
    pub total_amount: MinorUnit,
}

/// Which fee mode a record kind charges under. Business licenses absorb
/// the fee into the quoted total; everything else adds it on top.
pub fn fee_mode_for(kind: EntityKind) -> FeeMode {
    match kind {
        EntityKind::BusinessLicense => FeeMode::GrossedUp,
        EntityKind::Permit
        | EntityKind::TaxSubmission
        | EntityKind::ServiceApplication
        | EntityKind::Bill => FeeMode::Additive,
    }
}

/// Compute the processing fee on `base_amount` for the given instrument
/// class under the given schedule and mode.
///
/// Additive: `fee = round(base * bp / 10000) + fixed`, then capped.
/// Grossed-up: the smallest total whose implied fee leaves the department
/// with `base_amount`, i.e. `total = round((base + fixed) * 10000 / (10000 - bp))`.
/// The cap applies to additive fees only; capping a grossed-up fee would
/// leave the department short of its quoted base.
pub fn compute_fee(
    schedule: &FeeSchedule,
    class: InstrumentClass,
    mode: FeeMode,
    base_amount: MinorUnit,
) -> RouterResult<Fee> {
    let basis_points = schedule.basis_points_for(class);
    let fixed_fee = schedule.fixed_fee_for(class);
    let cap = schedule.cap_for(class);
    let base = base_amount.get_amount_as_i64();

    if base < 0 || basis_points < 0 || fixed_fee < 0 {
        return Err(report!(ApiErrorResponse::InternalServerError)
            .attach_printable("fee schedule or base amount is negative"));
    }
    if basis_points >= BASIS_POINTS_DIVISOR {
        return Err(report!(ApiErrorResponse::InternalServerError)
            .attach_printable("fee schedule basis points at or above 100%"));
    }

    let fee = match mode {
        FeeMode::Additive => {
            let variable = round_half_up(
                i128::from(base) * i128::from(basis_points),
                i128::from(BASIS_POINTS_DIVISOR),
            );
            clamp_to_cap(variable + fixed_fee, cap)
        }
        FeeMode::GrossedUp => {
            let total = round_half_up(
                i128::from(base + fixed_fee) * i128::from(BASIS_POINTS_DIVISOR),
                i128::from(BASIS_POINTS_DIVISOR - basis_points),
            );
            total - base
        }
    };

    Ok(Fee {
        base_amount,
        fee_amount: MinorUnit::new(fee),
        total_amount: base_amount + MinorUnit::new(fee),
    })
}

/// Build a [`FeeSchedule`] out of the configured default pricing, for
/// departments that carry no schedule of their own.
pub fn schedule_from_default(default: &settings::DefaultSchedule) -> FeeSchedule {
    FeeSchedule {
        schedule_id: "default".to_string(),
        card_basis_points: default.card_basis_points,
        card_fixed_fee: default.card_fixed_fee,
        bank_basis_points: default.bank_basis_points,
        bank_fixed_fee: default.bank_fixed_fee,
        bank_fee_cap: default.bank_fee_cap,
        returned_fixed_fee: default.returned_fixed_fee,
        dispute_fixed_fee: default.dispute_fixed_fee,
    }
}

fn clamp_to_cap(fee: i64, cap: Option<i64>) -> i64 {
    match cap {
        Some(cap) => fee.min(cap),
        None => fee,
    }
}

/// Round-half-up integer division for non-negative operands.
fn round_half_up(numerator: i128, denominator: i128) -> i64 {
    // Saturating narrow: i64 amounts cannot overflow this in practice.
    i64::try_from((numerator * 2 + denominator) / (denominator * 2)).unwrap_or(i64::MAX)
}
