mod common;

use actix_web::web::Bytes;
use api_models::enums::{ProcessingStatus, VerificationStatus};
use common_utils::crypto::{HmacSha256, SignMessage};
use portal::{
    core::{
        errors::ApiErrorResponse,
        webhooks::{incoming_webhooks_core, IncomingWebhookPayload},
    },
    db::merchant::MerchantInterface,
    services::ApplicationResponse,
};

use common::{seed_merchant, test_app, TransferScript, WEBHOOK_SECRET};

fn signed_payload(body: &str) -> IncomingWebhookPayload {
    let signature = HmacSha256
        .sign_message(WEBHOOK_SECRET.as_bytes(), body.as_bytes())
        .expect("signing failed");
    IncomingWebhookPayload {
        body: Bytes::copy_from_slice(body.as_bytes()),
        signature: Some(hex::encode(signature)),
    }
}

fn merchant_update_body(gateway_merchant_id: &str, onboarding_state: &str) -> String {
    format!(
        r#"{{"type":"updated","data":{{"object":{{"id":"{gateway_merchant_id}","identity":"IDxxx","onboarding_state":"{onboarding_state}","processing_enabled":true,"settlement_enabled":true}}}}}}"#
    )
}

#[tokio::test]
async fn enabled_onboarding_webhook_turns_processing_on() {
    let app = test_app(TransferScript::Succeed);
    let merchant = seed_merchant(&app, "dept_parks").await;
    // Wind the merchant back to a freshly provisioned state.
    app.db
        .merchants
        .lock()
        .await
        .iter_mut()
        .find(|m| m.merchant_id == merchant.merchant_id)
        .map(|m| {
            m.verification_status = VerificationStatus::Pending;
            m.processing_status = ProcessingStatus::MerchantCreated;
            m.processing_enabled = false;
        })
        .expect("merchant should be seeded");

    let body = merchant_update_body(
        merchant
            .gateway_merchant_id
            .as_deref()
            .expect("seeded merchant has a gateway id"),
        "ENABLED",
    );
    incoming_webhooks_core(app.state.clone(), (), signed_payload(&body))
        .await
        .expect("webhook should be accepted");

    let updated = app
        .db
        .find_merchant_by_merchant_id("dept_parks")
        .await
        .expect("merchant should exist");
    assert_eq!(updated.verification_status, VerificationStatus::Approved);
    assert_eq!(updated.processing_status, ProcessingStatus::ProcessingEnabled);
    assert!(updated.can_process_payments());
}

#[tokio::test]
async fn rejected_onboarding_webhook_marks_the_merchant_rejected() {
    let app = test_app(TransferScript::Succeed);
    let merchant = seed_merchant(&app, "dept_parks").await;

    let body = format!(
        r#"{{"type":"updated","data":{{"object":{{"id":"{}","onboarding_state":"REJECTED","processing_enabled":false,"settlement_enabled":false}}}}}}"#,
        merchant.gateway_merchant_id.as_deref().expect("gateway id"),
    );
    incoming_webhooks_core(app.state.clone(), (), signed_payload(&body))
        .await
        .expect("webhook should be accepted");

    let updated = app
        .db
        .find_merchant_by_merchant_id("dept_parks")
        .await
        .expect("merchant should exist");
    assert_eq!(updated.verification_status, VerificationStatus::Rejected);
    assert!(!updated.can_process_payments());
}

#[tokio::test]
async fn processing_toggle_webhook_flips_the_flag() {
    let app = test_app(TransferScript::Succeed);
    let merchant = seed_merchant(&app, "dept_parks").await;

    let body = format!(
        r#"{{"type":"updated","data":{{"object":{{"id":"{}","processing_enabled":false}}}}}}"#,
        merchant.gateway_merchant_id.as_deref().expect("gateway id"),
    );
    incoming_webhooks_core(app.state.clone(), (), signed_payload(&body))
        .await
        .expect("webhook should be accepted");

    let updated = app
        .db
        .find_merchant_by_merchant_id("dept_parks")
        .await
        .expect("merchant should exist");
    assert!(!updated.processing_enabled);
}

#[tokio::test]
async fn tampered_body_fails_signature_verification() {
    let app = test_app(TransferScript::Succeed);
    seed_merchant(&app, "dept_parks").await;

    let mut payload = signed_payload(&merchant_update_body("MU_dept_parks", "ENABLED"));
    payload.body = Bytes::from_static(b"{\"type\":\"updated\",\"data\":{\"object\":{\"id\":\"MU_evil\"}}}");

    let err = incoming_webhooks_core(app.state.clone(), (), payload)
        .await
        .expect_err("tampered body should be rejected");
    assert!(matches!(
        err.current_context(),
        ApiErrorResponse::WebhookSignatureInvalid
    ));
}

#[tokio::test]
async fn missing_signature_header_is_rejected() {
    let app = test_app(TransferScript::Succeed);

    let payload = IncomingWebhookPayload {
        body: Bytes::from_static(b"{}"),
        signature: None,
    };
    let err = incoming_webhooks_core(app.state.clone(), (), payload)
        .await
        .expect_err("missing signature should be rejected");
    assert!(matches!(
        err.current_context(),
        ApiErrorResponse::WebhookSignatureInvalid
    ));
}

#[tokio::test]
async fn unparsable_signed_body_is_a_bad_request() {
    let app = test_app(TransferScript::Succeed);

    let err = incoming_webhooks_core(app.state.clone(), (), signed_payload("not json"))
        .await
        .expect_err("unparsable body should be rejected");
    assert!(matches!(
        err.current_context(),
        ApiErrorResponse::WebhookBodyInvalid
    ));
}

#[tokio::test]
async fn webhook_for_an_untracked_merchant_is_acknowledged() {
    let app = test_app(TransferScript::Succeed);

    let body = merchant_update_body("MU_unknown", "ENABLED");
    let response = incoming_webhooks_core(app.state.clone(), (), signed_payload(&body))
        .await
        .expect("unknown merchant should still be acknowledged");
    // The gateway expects a bare 200 with a plain-text body.
    assert!(matches!(
        response,
        ApplicationResponse::TextPlain(ref ok) if ok == "OK"
    ));
}

#[tokio::test]
async fn provisioning_state_winds_the_merchant_back_to_pending() {
    let app = test_app(TransferScript::Succeed);
    let merchant = seed_merchant(&app, "dept_parks").await;

    let body = merchant_update_body(
        merchant.gateway_merchant_id.as_deref().expect("gateway id"),
        "PROVISIONING",
    );
    incoming_webhooks_core(app.state.clone(), (), signed_payload(&body))
        .await
        .expect("webhook should be accepted");

    let updated = app
        .db
        .find_merchant_by_merchant_id("dept_parks")
        .await
        .expect("merchant should exist");
    assert_eq!(updated.verification_status, VerificationStatus::Pending);
    assert_eq!(updated.processing_status, ProcessingStatus::Pending);
}

#[tokio::test]
async fn unrecognized_onboarding_state_winds_the_merchant_back_to_pending() {
    let app = test_app(TransferScript::Succeed);
    let merchant = seed_merchant(&app, "dept_parks").await;

    let body = merchant_update_body(
        merchant.gateway_merchant_id.as_deref().expect("gateway id"),
        "SOMETHING_NEW",
    );
    incoming_webhooks_core(app.state.clone(), (), signed_payload(&body))
        .await
        .expect("unknown state should still be acknowledged");

    let updated = app
        .db
        .find_merchant_by_merchant_id("dept_parks")
        .await
        .expect("merchant should exist");
    assert_eq!(updated.verification_status, VerificationStatus::Pending);
    assert_eq!(updated.processing_status, ProcessingStatus::Pending);
}
