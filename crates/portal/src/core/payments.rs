use api_models::{
    enums::{AttemptStatus, EntityKind, InstrumentClass, PaymentStatus, RecordStatus},
    payments::{PaymentRetrieveRequest, PaymentsRequest, PaymentsResponse},
};
use error_stack::{report, ResultExt};
use portal_env::logger;

use crate::{
    connector::finix::transformers as finix,
    consts,
    core::{
        errors::{self, ApiErrorResponse, RouterResponse, RouterResult, StorageErrorExt},
        fees,
    },
    routes::AppState,
    services::{authentication::AuthenticatedUser, ApplicationResponse},
    types::{
        storage,
        transformers::ForeignInto,
    },
};

/// The status a record must hold to be payable, and the status a settled
/// payment moves it to.
pub fn transition_for(kind: EntityKind) -> (RecordStatus, RecordStatus) {
    match kind {
        EntityKind::Permit => (RecordStatus::Approved, RecordStatus::Issued),
        EntityKind::BusinessLicense => (RecordStatus::Approved, RecordStatus::Active),
        EntityKind::TaxSubmission => (RecordStatus::Assessed, RecordStatus::Settled),
        EntityKind::ServiceApplication => (RecordStatus::Approved, RecordStatus::Confirmed),
        EntityKind::Bill => (RecordStatus::Due, RecordStatus::PaidInFull),
    }
}

/// Tender a payment against a civic record.
///
/// The order of operations is deliberate: all validation happens before the
/// attempt row is written, the attempt row is written before the gateway is
/// called, and the gateway outcome is recorded before the record advances.
/// A crash at any point leaves a consistent, retriable trail.
pub async fn payments_create_core(
    state: AppState,
    user: AuthenticatedUser,
    req: PaymentsRequest,
) -> RouterResponse<PaymentsResponse> {
    let db = &*state.store;

    // Replayed idempotency key: hand back the original outcome unchanged.
    if let Some(existing) =
        find_replayable_attempt(db, &user, &req.idempotency_key).await?
    {
        logger::info!(
            attempt_id = existing.attempt_id,
            "replaying idempotent payment attempt"
        );
        return Ok(ApplicationResponse::Json(existing.foreign_into()));
    }

    let kind = req.target.kind();
    let record = db
        .find_domain_record_by_record_id(req.target.record_id())
        .await
        .to_not_found_response(ApiErrorResponse::ResourceNotFound { resource: "record" })?;

    if record.owner_user_id != user.user_id {
        return Err(report!(ApiErrorResponse::AccessForbidden));
    }
    if record.kind != kind {
        return Err(report!(ApiErrorResponse::ResourceNotFound { resource: "record" })
            .attach_printable("target kind does not match the stored record"));
    }

    let (payable_from, _) = transition_for(kind);
    if record.payment_status == PaymentStatus::Paid {
        return Err(report!(ApiErrorResponse::InvalidRecordState {
            expected: payable_from.to_string(),
            found: "paid".to_string(),
        }));
    }
    if record.status != payable_from {
        return Err(report!(ApiErrorResponse::InvalidRecordState {
            expected: payable_from.to_string(),
            found: record.status.to_string(),
        }));
    }

    let instrument = db
        .find_payment_instrument_by_instrument_id(&req.instrument_id)
        .await
        .to_not_found_response(ApiErrorResponse::ResourceNotFound {
            resource: "payment instrument",
        })?;
    if instrument.user_id != user.user_id {
        return Err(report!(ApiErrorResponse::AccessForbidden));
    }
    if instrument.disabled {
        return Err(report!(ApiErrorResponse::InstrumentDisabled));
    }

    let merchant = db
        .find_merchant_by_merchant_id(&record.merchant_id)
        .await
        .to_not_found_response(ApiErrorResponse::ResourceNotFound {
            resource: "department",
        })?;
    if !merchant.can_process_payments() {
        return Err(report!(ApiErrorResponse::PreconditionFailed {
            message: "department is not enabled for payment processing",
        }));
    }
    let gateway_merchant_id = merchant.gateway_merchant_id.clone().ok_or_else(|| {
        report!(ApiErrorResponse::PreconditionFailed {
            message: "department has not completed gateway onboarding",
        })
    })?;

    let schedule = match &merchant.fee_schedule_id {
        Some(schedule_id) => db
            .find_fee_schedule_by_schedule_id(schedule_id)
            .await
            .change_context(ApiErrorResponse::InternalServerError)?,
        None => fees::schedule_from_default(&state.conf.fees.default_schedule),
    };
    let fee = fees::compute_fee(
        &schedule,
        instrument.class,
        fees::fee_mode_for(kind),
        record.amount_due,
    )?;

    // The client quoted a total; refuse to charge anything else.
    if fee.total_amount.abs_diff(req.total_amount) > consts::AMOUNT_TOLERANCE_CENTS {
        return Err(report!(ApiErrorResponse::AmountMismatch {
            expected: fee.total_amount,
            claimed: req.total_amount,
        }));
    }

    let insert_result = db
        .insert_payment_attempt(storage::PaymentAttemptNew {
            attempt_id: common_utils::generate_id(
                common_utils::consts::ID_LENGTH,
                consts::PAYMENT_ATTEMPT_ID_PREFIX,
            ),
            merchant_id: merchant.merchant_id.clone(),
            user_id: user.user_id.clone(),
            target_kind: kind,
            record_id: record.record_id.clone(),
            instrument_id: instrument.instrument_id.clone(),
            base_amount: fee.base_amount,
            fee_amount: fee.fee_amount,
            total_amount: fee.total_amount,
            status: AttemptStatus::Pending,
            idempotency_key: req.idempotency_key.clone(),
        })
        .await;
    let attempt = match insert_result {
        Ok(attempt) => attempt,
        // Lost a race on the idempotency key: the winner's row is the one
        // outcome this key gets, so replay it instead of charging again.
        Err(err) if err.current_context().is_db_unique_violation() => {
            let existing = find_replayable_attempt(db, &user, &req.idempotency_key)
                .await?
                .ok_or_else(|| report!(ApiErrorResponse::InternalServerError))?;
            logger::info!(
                attempt_id = existing.attempt_id,
                "replaying idempotent payment attempt after insert race"
            );
            return Ok(ApplicationResponse::Json(existing.foreign_into()));
        }
        Err(err) => return Err(err.change_context(ApiErrorResponse::InternalServerError)),
    };

    let gateway_token =
        ensure_tokenized(&state, &merchant, instrument).await?;

    let transfer_result = state
        .gateway
        .create_transfer(finix::FinixTransferRequest {
            merchant: gateway_merchant_id,
            currency: consts::DEFAULT_CURRENCY.to_string(),
            amount: fee.total_amount,
            source: gateway_token,
            idempotency_id: req.idempotency_key.clone(),
            fraud_session_id: None,
        })
        .await;

    let transfer = match transfer_result {
        Ok(transfer) => transfer,
        Err(err) => {
            // Mark the attempt failed before surfacing the transport error,
            // so a later retrieve does not show it stuck in pending.
            db.update_payment_attempt(
                &attempt.attempt_id,
                storage::PaymentAttemptUpdate::StatusUpdate {
                    status: AttemptStatus::Failed,
                    gateway_transfer_id: None,
                    failure_code: Some("GATEWAY_UNREACHABLE".to_string()),
                    failure_message: Some("gateway call did not complete".to_string()),
                },
            )
            .await
            .change_context(ApiErrorResponse::InternalServerError)?;
            let api_error = match err.current_context() {
                errors::ConnectorError::UnexpectedResponse { status_code } => {
                    ApiErrorResponse::GatewayError {
                        code: status_code.to_string(),
                        message: "gateway rejected the transfer request".to_string(),
                    }
                }
                _ => ApiErrorResponse::GatewayUnreachable,
            };
            return Err(err.change_context(api_error));
        }
    };

    let status = AttemptStatus::from(transfer.state);
    let attempt = db
        .update_payment_attempt(
            &attempt.attempt_id,
            storage::PaymentAttemptUpdate::StatusUpdate {
                status,
                gateway_transfer_id: Some(transfer.id),
                failure_code: transfer.failure_code,
                failure_message: transfer.failure_message,
            },
        )
        .await
        .change_context(ApiErrorResponse::InternalServerError)?;

    if status == AttemptStatus::Succeeded {
        let (_, next) = transition_for(kind);
        db.update_domain_record(
            &record.record_id,
            storage::DomainRecordUpdate::PaymentCompleted {
                status: next,
                payment_status: PaymentStatus::Paid,
            },
        )
        .await
        .change_context(ApiErrorResponse::InternalServerError)?;
        logger::info!(
            record_id = record.record_id,
            next_status = %next,
            "record advanced on settled payment"
        );
    }

    Ok(ApplicationResponse::Json(attempt.foreign_into()))
}

/// Fetch one payment attempt by id, restricted to its owner.
pub async fn payments_retrieve_core(
    state: AppState,
    user: AuthenticatedUser,
    req: PaymentRetrieveRequest,
) -> RouterResponse<PaymentsResponse> {
    let attempt = state
        .store
        .find_payment_attempt_by_attempt_id(&req.attempt_id)
        .await
        .to_not_found_response(ApiErrorResponse::ResourceNotFound {
            resource: "payment attempt",
        })?;

    if attempt.user_id != user.user_id {
        return Err(report!(ApiErrorResponse::AccessForbidden));
    }

    Ok(ApplicationResponse::Json(attempt.foreign_into()))
}

/// Look up the attempt already holding this idempotency key, if any. Keys
/// are unique system-wide; a hit owned by another account is a forbidden
/// replay, not a fresh tender.
async fn find_replayable_attempt(
    db: &dyn crate::db::StorageInterface,
    user: &AuthenticatedUser,
    idempotency_key: &str,
) -> RouterResult<Option<storage::PaymentAttempt>> {
    let existing = db
        .find_payment_attempt_by_idempotency_key(idempotency_key)
        .await
        .change_context(ApiErrorResponse::InternalServerError)?;
    match existing {
        Some(attempt) if attempt.user_id != user.user_id => {
            Err(report!(ApiErrorResponse::AccessForbidden))
        }
        other => Ok(other),
    }
}

/// Wallet instruments are tokenized lazily: the first charge through a
/// department's gateway identity mints the token and saves it back.
async fn ensure_tokenized(
    state: &AppState,
    merchant: &storage::Merchant,
    instrument: storage::PaymentInstrument,
) -> RouterResult<String> {
    if let Some(token) = instrument.gateway_token {
        return Ok(token);
    }

    let identity = merchant.gateway_identity_id.clone().ok_or_else(|| {
        report!(ApiErrorResponse::PreconditionFailed {
            message: "instrument cannot be tokenized for this department",
        })
    })?;
    let instrument_type = match instrument.class {
        InstrumentClass::Card => "PAYMENT_CARD",
        InstrumentClass::BankTransfer => "BANK_ACCOUNT",
    };

    let tokenized = state
        .gateway
        .create_payment_instrument(finix::FinixInstrumentRequest {
            instrument_type: instrument_type.to_string(),
            identity,
        })
        .await
        .change_context(ApiErrorResponse::GatewayUnreachable)?;

    state
        .store
        .update_payment_instrument(
            &instrument.instrument_id,
            storage::PaymentInstrumentUpdate::TokenUpdate {
                gateway_token: tokenized.id.clone(),
            },
        )
        .await
        .change_context(ApiErrorResponse::InternalServerError)?;

    Ok(tokenized.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_record_kind_has_a_settlement_transition() {
        assert_eq!(
            transition_for(EntityKind::Permit),
            (RecordStatus::Approved, RecordStatus::Issued)
        );
        assert_eq!(
            transition_for(EntityKind::BusinessLicense),
            (RecordStatus::Approved, RecordStatus::Active)
        );
        assert_eq!(
            transition_for(EntityKind::TaxSubmission),
            (RecordStatus::Assessed, RecordStatus::Settled)
        );
        assert_eq!(
            transition_for(EntityKind::ServiceApplication),
            (RecordStatus::Approved, RecordStatus::Confirmed)
        );
        assert_eq!(
            transition_for(EntityKind::Bill),
            (RecordStatus::Due, RecordStatus::PaidInFull)
        );
    }
}
