use api_models::enums::BookingStatus;
use time::{Date, PrimitiveDateTime, Time};

/// A reservation of a facility slot on a given date.
#[derive(Clone, Debug)]
pub struct Booking {
    pub booking_id: String,
    pub facility_id: String,
    pub user_id: String,
    pub booking_date: Date,
    pub start_time: Time,
    pub end_time: Option<Time>,
    pub status: BookingStatus,
    pub created_at: PrimitiveDateTime,
}

#[derive(Clone, Debug)]
pub struct BookingNew {
    pub booking_id: String,
    pub facility_id: String,
    pub user_id: String,
    pub booking_date: Date,
    pub start_time: Time,
    pub end_time: Option<Time>,
    pub status: BookingStatus,
}

impl Booking {
    /// Intervals are half-open: a booking ending at 10:00 does not collide
    /// with one starting at 10:00. Start-time-only bookings occupy exactly
    /// their start instant.
    pub fn overlaps(&self, date: Date, start: Time, end: Option<Time>) -> bool {
        if self.booking_date != date {
            return false;
        }
        let (a_start, a_end) = interval_minutes(self.start_time, self.end_time);
        let (b_start, b_end) = interval_minutes(start, end);
        a_start < b_end && b_start < a_end
    }
}

fn interval_minutes(start: Time, end: Option<Time>) -> (i32, i32) {
    let s = i32::from(start.hour()) * 60 + i32::from(start.minute());
    let e = match end {
        Some(end) => i32::from(end.hour()) * 60 + i32::from(end.minute()),
        // Zero-length slot; still collides with any period covering it.
        None => s + 1,
    };
    (s, e)
}
