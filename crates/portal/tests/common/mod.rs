#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use api_models::enums::{
    BookingStatus, EntityKind, InstrumentClass, PaymentStatus, ProcessingStatus, RecordStatus,
    SlotMode, VerificationStatus,
};
use common_utils::{errors::CustomResult, types::MinorUnit};
use portal::{
    configs::settings::Settings,
    connector::finix::transformers as finix,
    connector::FinixGateway,
    core::errors::ConnectorError,
    db::{
        api_keys::ApiKeyInterface, domain_record::DomainRecordInterface,
        facility::FacilityInterface, merchant::MerchantInterface,
        payment_instrument::PaymentInstrumentInterface, MockDb,
    },
    routes::AppState,
    types::storage,
};
use time::macros::time;

pub const WEBHOOK_SECRET: &str = "whsec_test";

/// What the scripted gateway should do with the next transfer.
#[derive(Clone, Debug)]
pub enum TransferScript {
    Succeed,
    Pending,
    Decline {
        code: &'static str,
        message: &'static str,
    },
    Unreachable,
}

/// Gateway double. Scripted per test; counts calls so idempotency tests can
/// assert nothing reached the wire twice.
pub struct TestGateway {
    pub script: TransferScript,
    pub transfer_calls: AtomicUsize,
    pub tokenize_calls: AtomicUsize,
}

impl TestGateway {
    pub fn scripted(script: TransferScript) -> Arc<Self> {
        Arc::new(Self {
            script,
            transfer_calls: AtomicUsize::new(0),
            tokenize_calls: AtomicUsize::new(0),
        })
    }

    pub fn transfer_call_count(&self) -> usize {
        self.transfer_calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl FinixGateway for TestGateway {
    async fn create_transfer(
        &self,
        request: finix::FinixTransferRequest,
    ) -> CustomResult<finix::FinixTransferResponse, ConnectorError> {
        self.transfer_calls.fetch_add(1, Ordering::SeqCst);
        let (state, failure_code, failure_message) = match &self.script {
            TransferScript::Succeed => (finix::FinixState::Succeeded, None, None),
            TransferScript::Pending => (finix::FinixState::Pending, None, None),
            TransferScript::Decline { code, message } => (
                finix::FinixState::Failed,
                Some((*code).to_string()),
                Some((*message).to_string()),
            ),
            TransferScript::Unreachable => {
                return Err(error_stack::report!(ConnectorError::ConnectionFailure))
            }
        };
        Ok(finix::FinixTransferResponse {
            id: format!("TR_{}", request.idempotency_id),
            state,
            amount: request.amount,
            currency: request.currency,
            failure_code,
            failure_message,
        })
    }

    async fn create_payment_instrument(
        &self,
        _request: finix::FinixInstrumentRequest,
    ) -> CustomResult<finix::FinixInstrumentResponse, ConnectorError> {
        self.tokenize_calls.fetch_add(1, Ordering::SeqCst);
        Ok(finix::FinixInstrumentResponse {
            id: "PI_token_minted".to_string(),
        })
    }
}

/// A fully wired test application. The `db` handle shares tables with the
/// state's store, so tests can seed and inspect rows directly.
pub struct TestApp {
    pub state: AppState,
    pub db: MockDb,
    pub gateway: Arc<TestGateway>,
}

pub fn test_app(script: TransferScript) -> TestApp {
    let mut conf = Settings::default();
    conf.finix.webhook_secret = WEBHOOK_SECRET.to_string();

    let db = MockDb::new();
    let gateway = TestGateway::scripted(script);
    let state = AppState::with_collaborators(conf, Box::new(db.clone()), gateway.clone());
    TestApp { state, db, gateway }
}

pub async fn seed_user(app: &TestApp, user_id: &str, api_key: &str) {
    app.db
        .insert_api_key(storage::ApiKey {
            key: api_key.to_string(),
            user_id: user_id.to_string(),
            created_at: common_utils::date_time::now(),
        })
        .await
        .expect("api key seed failed");
}

pub async fn seed_merchant(app: &TestApp, merchant_id: &str) -> storage::Merchant {
    let now = common_utils::date_time::now();
    let merchant = storage::Merchant {
        merchant_id: merchant_id.to_string(),
        department_name: "Parks and Recreation".to_string(),
        gateway_merchant_id: Some(format!("MU_{merchant_id}")),
        gateway_identity_id: Some(format!("ID_{merchant_id}")),
        verification_status: VerificationStatus::Approved,
        processing_status: ProcessingStatus::ProcessingEnabled,
        processing_enabled: true,
        settlement_enabled: true,
        fee_schedule_id: None,
        created_at: now,
        modified_at: now,
    };
    app.db
        .insert_merchant(merchant.clone())
        .await
        .expect("merchant seed failed")
}

pub async fn seed_record(
    app: &TestApp,
    record_id: &str,
    kind: EntityKind,
    owner_user_id: &str,
    merchant_id: &str,
    status: RecordStatus,
    amount_due: i64,
) -> storage::DomainRecord {
    let now = common_utils::date_time::now();
    app.db
        .insert_domain_record(storage::DomainRecord {
            record_id: record_id.to_string(),
            kind,
            owner_user_id: owner_user_id.to_string(),
            merchant_id: merchant_id.to_string(),
            status,
            amount_due: MinorUnit::new(amount_due),
            payment_status: PaymentStatus::Unpaid,
            created_at: now,
            modified_at: now,
        })
        .await
        .expect("record seed failed")
}

pub async fn seed_instrument(
    app: &TestApp,
    instrument_id: &str,
    user_id: &str,
    class: InstrumentClass,
    gateway_token: Option<&str>,
) -> storage::PaymentInstrument {
    let now = common_utils::date_time::now();
    app.db
        .insert_payment_instrument(storage::PaymentInstrument {
            instrument_id: instrument_id.to_string(),
            user_id: user_id.to_string(),
            class,
            display_label: "Visa ending 4242".to_string(),
            gateway_token: gateway_token.map(ToOwned::to_owned),
            disabled: false,
            created_at: now,
            modified_at: now,
        })
        .await
        .expect("instrument seed failed")
}

pub async fn seed_facility(app: &TestApp, facility_id: &str, slot_mode: SlotMode) {
    seed_facility_open_on(
        app,
        facility_id,
        slot_mode,
        vec![
            time::Weekday::Monday,
            time::Weekday::Tuesday,
            time::Weekday::Wednesday,
            time::Weekday::Thursday,
            time::Weekday::Friday,
            time::Weekday::Saturday,
            time::Weekday::Sunday,
        ],
    )
    .await;
}

pub async fn seed_facility_open_on(
    app: &TestApp,
    facility_id: &str,
    slot_mode: SlotMode,
    open_weekdays: Vec<time::Weekday>,
) {
    app.db
        .insert_facility(storage::Facility {
            facility_id: facility_id.to_string(),
            name: "Riverside Pavilion".to_string(),
            open_weekdays,
            open_time: time!(8:00),
            close_time: time!(20:00),
            slot_mode,
            granularity_minutes: 60,
            active: true,
        })
        .await
        .expect("facility seed failed");
}

pub async fn seed_booking(
    app: &TestApp,
    facility_id: &str,
    date: time::Date,
    start: time::Time,
    end: time::Time,
    status: BookingStatus,
) {
    // Bypass the checked insert so tests can plant non-blocking rows too.
    app.db.bookings.lock().await.push(storage::Booking {
        booking_id: common_utils::generate_id_with_default_len("bkg"),
        facility_id: facility_id.to_string(),
        user_id: "usr_other".to_string(),
        booking_date: date,
        start_time: start,
        end_time: Some(end),
        status,
        created_at: common_utils::date_time::now(),
    });
}

pub fn authed(user_id: &str) -> portal::services::authentication::AuthenticatedUser {
    portal::services::authentication::AuthenticatedUser {
        user_id: user_id.to_string(),
    }
}
