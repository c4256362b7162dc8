pub mod api_keys;
pub mod booking;
pub mod domain_record;
pub mod facility;
pub mod fee_schedule;
pub mod merchant;
pub mod mock_db;
pub mod payment_attempt;
pub mod payment_instrument;

pub use self::mock_db::MockDb;

/// The storage surface the request flows run against. Backed by [`MockDb`]
/// in this service; the relational store lives behind an external boundary.
#[async_trait::async_trait]
pub trait StorageInterface:
    Send
    + Sync
    + dyn_clone::DynClone
    + api_keys::ApiKeyInterface
    + booking::BookingInterface
    + domain_record::DomainRecordInterface
    + facility::FacilityInterface
    + fee_schedule::FeeScheduleInterface
    + merchant::MerchantInterface
    + payment_attempt::PaymentAttemptInterface
    + payment_instrument::PaymentInstrumentInterface
    + 'static
{
}

dyn_clone::clone_trait_object!(StorageInterface);

#[async_trait::async_trait]
impl StorageInterface for MockDb {}
