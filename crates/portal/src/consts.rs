/// Slack allowed between the client-claimed total and the recomputed total,
/// to absorb integer rounding differences between client and server.
pub(crate) const AMOUNT_TOLERANCE_CENTS: i64 = 1;

/// The only currency the municipal portal settles in.
pub(crate) const DEFAULT_CURRENCY: &str = "USD";

/// Booking grids a facility may be configured with, in minutes.
pub(crate) const ALLOWED_GRANULARITIES_MINUTES: [u16; 3] = [15, 30, 60];

/// Prefix of generated payment attempt ids.
pub(crate) const PAYMENT_ATTEMPT_ID_PREFIX: &str = "pay";

/// Prefix of generated booking ids.
pub(crate) const BOOKING_ID_PREFIX: &str = "bkg";
