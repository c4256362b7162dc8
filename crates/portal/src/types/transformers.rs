use api_models::{
    bookings::BookingResponse,
    enums::EntityKind,
    payments::{PaymentTarget, PaymentsResponse},
};

use crate::types::storage;

pub trait ForeignFrom<F> {
    fn foreign_from(from: F) -> Self;
}

pub trait ForeignInto<T> {
    fn foreign_into(self) -> T;
}

impl<F, T> ForeignInto<T> for F
where
    T: ForeignFrom<F>,
{
    fn foreign_into(self) -> T {
        T::foreign_from(self)
    }
}

impl ForeignFrom<(EntityKind, String)> for PaymentTarget {
    fn foreign_from((kind, record_id): (EntityKind, String)) -> Self {
        match kind {
            EntityKind::Permit => Self::Permit(record_id),
            EntityKind::BusinessLicense => Self::BusinessLicense(record_id),
            EntityKind::TaxSubmission => Self::TaxSubmission(record_id),
            EntityKind::ServiceApplication => Self::ServiceApplication(record_id),
            EntityKind::Bill => Self::Bill(record_id),
        }
    }
}

impl ForeignFrom<storage::PaymentAttempt> for PaymentsResponse {
    fn foreign_from(attempt: storage::PaymentAttempt) -> Self {
        Self {
            target: PaymentTarget::foreign_from((attempt.target_kind, attempt.record_id)),
            attempt_id: attempt.attempt_id,
            status: attempt.status,
            base_amount: attempt.base_amount,
            fee_amount: attempt.fee_amount,
            total_amount: attempt.total_amount,
            gateway_transfer_id: attempt.gateway_transfer_id,
            failure_code: attempt.failure_code,
            failure_message: attempt.failure_message,
        }
    }
}

impl ForeignFrom<(storage::Booking, time::Time)> for BookingResponse {
    fn foreign_from((booking, end_time): (storage::Booking, time::Time)) -> Self {
        Self {
            booking_id: booking.booking_id,
            facility_id: booking.facility_id,
            booking_date: booking.booking_date,
            start_time: booking.start_time,
            end_time,
            status: booking.status,
        }
    }
}
