//! Facility booking API types.

use serde::{Deserialize, Serialize};
use time::{Date, Time};

use crate::enums::BookingStatus;

/// Request body of `POST /bookings/check` and `POST /bookings`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct BookingRequest {
    pub facility_id: String,
    pub booking_date: Date,
    pub start_time: Time,
    /// End of the proposed `[start, end)` window. Optional for start-time
    /// facilities, which fall back to their default duration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<Time>,
}

/// Response body of the advisory conflict check.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BookingCheckResponse {
    pub facility_id: String,
    pub booking_date: Date,
    pub start_time: Time,
    pub end_time: Time,
    /// Whether an existing non-cancelled booking overlaps the window.
    pub conflict: bool,
}

/// Response body of booking creation.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BookingResponse {
    pub booking_id: String,
    pub facility_id: String,
    pub booking_date: Date,
    pub start_time: Time,
    pub end_time: Time,
    pub status: BookingStatus,
}
