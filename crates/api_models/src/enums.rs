//! Enums shared between the API surface and storage.

/// Class of payment instrument; card and bank transfer carry different fee
/// schedules.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum InstrumentClass {
    Card,
    BankTransfer,
}

/// The kind of domain record a payment is tendered against.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EntityKind {
    Permit,
    BusinessLicense,
    TaxSubmission,
    ServiceApplication,
    Bill,
}

/// How the service fee combines with the base amount.
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, serde::Serialize, serde::Deserialize, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FeeMode {
    /// Fee is added on top of the base amount.
    Additive,
    /// Total is grossed up so the merchant nets the base amount after the
    /// gateway's percentage cut.
    GrossedUp,
}

/// Status of a payment attempt.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    PartialEq,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AttemptStatus {
    #[default]
    Pending,
    Succeeded,
    Failed,
}

/// Business status of a domain record. Each entity kind uses its own subset;
/// the payable and post-payment states per kind live in the payment core's
/// transition table.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    PartialEq,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RecordStatus {
    Draft,
    Submitted,
    UnderReview,
    Approved,
    /// Tax submission that has been assessed and awaits settlement.
    Assessed,
    /// Legacy bill awaiting payment.
    Due,
    Denied,
    /// Permit issued after successful payment.
    Issued,
    /// Business license activated after successful payment.
    Active,
    /// Tax submission settled after successful payment.
    Settled,
    /// Service application confirmed after successful payment.
    Confirmed,
    /// Legacy bill fully paid.
    PaidInFull,
}

/// Whether a domain record has been paid for.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    PartialEq,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Unpaid,
    Paid,
}

/// Status of a facility booking.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    PartialEq,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum BookingStatus {
    Draft,
    Pending,
    Approved,
    Denied,
    Cancelled,
    Expired,
}

impl BookingStatus {
    /// Whether a booking in this status holds its time slot against new
    /// requests.
    pub fn blocks_slot(self) -> bool {
        !matches!(
            self,
            Self::Draft | Self::Denied | Self::Cancelled | Self::Expired
        )
    }
}

/// Merchant onboarding verification status.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    PartialEq,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum VerificationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// Merchant payment-processing status.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    PartialEq,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ProcessingStatus {
    #[default]
    Pending,
    MerchantCreated,
    ProcessingEnabled,
    Rejected,
    Disabled,
}

/// Scheduling mode of a facility.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    PartialEq,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SlotMode {
    /// Bookings may begin on any aligned boundary, with a default duration
    /// when none is given.
    StartTime,
    /// The facility exposes fixed-length slots only.
    TimePeriod,
}
