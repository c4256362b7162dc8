use common_utils::errors::CustomResult;
use error_stack::report;
use time::Date;

use super::MockDb;
use crate::{
    core::errors::StorageError,
    types::storage::{Booking, BookingNew},
};

#[async_trait::async_trait]
pub trait BookingInterface {
    /// Insert a booking only if no slot-blocking booking overlaps it. The
    /// overlap scan and the insert run under one table lock, so two racing
    /// requests for the same slot cannot both get in.
    async fn insert_booking_checked(
        &self,
        booking: BookingNew,
    ) -> CustomResult<Booking, StorageError>;

    async fn find_bookings_by_facility_id_date(
        &self,
        facility_id: &str,
        booking_date: Date,
    ) -> CustomResult<Vec<Booking>, StorageError>;
}

#[async_trait::async_trait]
impl BookingInterface for MockDb {
    async fn insert_booking_checked(
        &self,
        booking: BookingNew,
    ) -> CustomResult<Booking, StorageError> {
        let mut bookings = self.bookings.lock().await;
        let conflict = bookings.iter().any(|existing| {
            existing.facility_id == booking.facility_id
                && existing.status.blocks_slot()
                && existing.overlaps(booking.booking_date, booking.start_time, booking.end_time)
        });
        if conflict {
            return Err(report!(StorageError::DuplicateValue { entity: "booking" }));
        }
        let stored = Booking {
            booking_id: booking.booking_id,
            facility_id: booking.facility_id,
            user_id: booking.user_id,
            booking_date: booking.booking_date,
            start_time: booking.start_time,
            end_time: booking.end_time,
            status: booking.status,
            created_at: common_utils::date_time::now(),
        };
        bookings.push(stored.clone());
        Ok(stored)
    }

    async fn find_bookings_by_facility_id_date(
        &self,
        facility_id: &str,
        booking_date: Date,
    ) -> CustomResult<Vec<Booking>, StorageError> {
        Ok(self
            .bookings
            .lock()
            .await
            .iter()
            .filter(|b| b.facility_id == facility_id && b.booking_date == booking_date)
            .cloned()
            .collect())
    }
}
