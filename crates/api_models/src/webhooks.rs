//! Incoming webhook types, normalized away from the gateway's vocabulary.

/// The portal's view of an incoming gateway event.
#[derive(Clone, Copy, Debug, Eq, PartialEq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum IncomingWebhookEvent {
    /// Full onboarding-state update for a merchant.
    MerchantUpdated,
    /// Processing was switched on or off for a merchant.
    MerchantProcessingToggled,
    /// Settlement was switched on or off for a merchant.
    MerchantSettlementToggled,
    /// An event type this portal does not consume.
    Unsupported,
}
