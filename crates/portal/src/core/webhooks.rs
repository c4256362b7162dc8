use api_models::{
    enums::{ProcessingStatus, VerificationStatus},
    webhooks::IncomingWebhookEvent,
};
use common_utils::{crypto, ext_traits::ByteSliceExt};
use error_stack::{report, ResultExt};
use portal_env::logger;

use crate::{
    connector::finix::transformers as finix,
    core::errors::{ApiErrorResponse, RouterResponse},
    routes::AppState,
    services::ApplicationResponse,
    types::storage::MerchantUpdate,
};

/// Raw webhook delivery as received on the wire. The body stays unparsed
/// until the signature over the exact bytes has been verified.
#[derive(Clone, Debug)]
pub struct IncomingWebhookPayload {
    pub body: actix_web::web::Bytes,
    pub signature: Option<String>,
}

/// Process one gateway webhook delivery.
///
/// Unknown event types and unknown merchants are acknowledged with 200 so
/// the gateway stops redelivering them; only signature failures, unparsable
/// bodies and persistence failures are surfaced as errors.
pub async fn incoming_webhooks_core(
    state: AppState,
    _auth: (),
    payload: IncomingWebhookPayload,
) -> RouterResponse<String> {
    let signature = payload
        .signature
        .as_deref()
        .ok_or_else(|| report!(ApiErrorResponse::WebhookSignatureInvalid))?;

    let verified = crypto::verify_hex_hmac_sha256(
        state.conf.finix.webhook_secret.as_bytes(),
        signature,
        &payload.body,
    )
    .change_context(ApiErrorResponse::WebhookSignatureInvalid)?;
    if !verified {
        return Err(report!(ApiErrorResponse::WebhookSignatureInvalid));
    }

    let envelope: finix::FinixWebhookEnvelope = payload
        .body
        .parse_struct("FinixWebhookEnvelope")
        .change_context(ApiErrorResponse::WebhookBodyInvalid)?;

    let object = &envelope.data.object;
    let event = classify_event(object);
    logger::info!(
        event_type = envelope.event_type,
        event = %event,
        gateway_merchant_id = object.id,
        "incoming gateway webhook"
    );

    if event == IncomingWebhookEvent::Unsupported {
        return Ok(ack());
    }

    let merchant = match state
        .store
        .find_merchant_by_gateway_merchant_id(&object.id)
        .await
    {
        Ok(merchant) => merchant,
        Err(err) if err.current_context().is_db_not_found() => {
            logger::warn!(
                gateway_merchant_id = object.id,
                "webhook for a merchant this portal does not track"
            );
            return Ok(ack());
        }
        Err(err) => return Err(err.change_context(ApiErrorResponse::InternalServerError)),
    };

    let merchant_update = match event {
        IncomingWebhookEvent::MerchantUpdated => {
            let Some(onboarding_state) = object.onboarding_state else {
                return Ok(ack());
            };
            if onboarding_state == finix::FinixOnboardingState::Unknown {
                logger::warn!(
                    ?onboarding_state,
                    "unrecognized onboarding state; winding merchant back to pending"
                );
            }
            let (verification_status, processing_status) =
                map_onboarding_state(onboarding_state);
            MerchantUpdate::OnboardingUpdate {
                verification_status,
                processing_status,
                processing_enabled: object
                    .processing_enabled
                    .unwrap_or(merchant.processing_enabled),
                settlement_enabled: object
                    .settlement_enabled
                    .unwrap_or(merchant.settlement_enabled),
            }
        }
        IncomingWebhookEvent::MerchantProcessingToggled => MerchantUpdate::ProcessingToggle {
            processing_enabled: object
                .processing_enabled
                .unwrap_or(merchant.processing_enabled),
        },
        IncomingWebhookEvent::MerchantSettlementToggled => MerchantUpdate::SettlementToggle {
            settlement_enabled: object
                .settlement_enabled
                .unwrap_or(merchant.settlement_enabled),
        },
        IncomingWebhookEvent::Unsupported => return Ok(ack()),
    };

    state
        .store
        .update_merchant(&merchant.merchant_id, merchant_update)
        .await
        .change_context(ApiErrorResponse::InternalServerError)?;

    Ok(ack())
}

fn ack() -> ApplicationResponse<String> {
    ApplicationResponse::TextPlain("OK".to_string())
}

/// Which portal-level event a merchant webhook object amounts to, judged by
/// which fields the gateway chose to send.
fn classify_event(object: &finix::FinixMerchantObject) -> IncomingWebhookEvent {
    if object.onboarding_state.is_some() {
        IncomingWebhookEvent::MerchantUpdated
    } else if object.processing_enabled.is_some() {
        IncomingWebhookEvent::MerchantProcessingToggled
    } else if object.settlement_enabled.is_some() {
        IncomingWebhookEvent::MerchantSettlementToggled
    } else {
        IncomingWebhookEvent::Unsupported
    }
}

/// Translate the gateway's onboarding state into the portal's verification
/// and processing statuses. States this portal does not recognize wind the
/// merchant back to pending rather than being skipped.
fn map_onboarding_state(
    state: finix::FinixOnboardingState,
) -> (VerificationStatus, ProcessingStatus) {
    match state {
        finix::FinixOnboardingState::Provisioning => {
            (VerificationStatus::Pending, ProcessingStatus::Pending)
        }
        finix::FinixOnboardingState::Approved => (
            VerificationStatus::Approved,
            ProcessingStatus::MerchantCreated,
        ),
        finix::FinixOnboardingState::Enabled => (
            VerificationStatus::Approved,
            ProcessingStatus::ProcessingEnabled,
        ),
        finix::FinixOnboardingState::Rejected => {
            (VerificationStatus::Rejected, ProcessingStatus::Rejected)
        }
        finix::FinixOnboardingState::Disabled => {
            (VerificationStatus::Approved, ProcessingStatus::Disabled)
        }
        finix::FinixOnboardingState::Unknown => {
            (VerificationStatus::Pending, ProcessingStatus::Pending)
        }
    }
}
