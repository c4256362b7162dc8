use api_models::{
    bookings::{BookingCheckResponse, BookingRequest, BookingResponse},
    enums::{BookingStatus, SlotMode},
};
use error_stack::{report, ResultExt};
use time::Time;

use crate::{
    consts,
    core::errors::{ApiErrorResponse, RouterResponse, RouterResult, StorageErrorExt},
    routes::AppState,
    services::{authentication::AuthenticatedUser, ApplicationResponse},
    types::{storage, transformers::ForeignInto},
};

/// Advisory availability check. Never reserves anything; the result can be
/// stale by the time a create lands, which is why create re-checks under
/// the store lock.
pub async fn booking_check_core(
    state: AppState,
    _user: AuthenticatedUser,
    req: BookingRequest,
) -> RouterResponse<BookingCheckResponse> {
    let facility = load_facility(&state, &req.facility_id).await?;
    let (start_time, end_time) = resolve_window(&facility, &req)?;

    let conflict = state
        .store
        .find_bookings_by_facility_id_date(&facility.facility_id, req.booking_date)
        .await
        .change_context(ApiErrorResponse::InternalServerError)?
        .iter()
        .any(|existing| {
            existing.status.blocks_slot()
                && existing.overlaps(req.booking_date, start_time, Some(end_time))
        });

    Ok(ApplicationResponse::Json(BookingCheckResponse {
        facility_id: facility.facility_id,
        booking_date: req.booking_date,
        start_time,
        end_time,
        conflict,
    }))
}

/// Reserve a facility slot. The overlap check runs atomically with the
/// insert, so of two racing requests for one slot exactly one wins.
pub async fn booking_create_core(
    state: AppState,
    user: AuthenticatedUser,
    req: BookingRequest,
) -> RouterResponse<BookingResponse> {
    let facility = load_facility(&state, &req.facility_id).await?;
    let (start_time, end_time) = resolve_window(&facility, &req)?;

    let booking = state
        .store
        .insert_booking_checked(storage::BookingNew {
            booking_id: common_utils::generate_id(
                common_utils::consts::ID_LENGTH,
                consts::BOOKING_ID_PREFIX,
            ),
            facility_id: facility.facility_id,
            user_id: user.user_id,
            booking_date: req.booking_date,
            start_time,
            end_time: Some(end_time),
            status: BookingStatus::Pending,
        })
        .await
        .to_duplicate_response(ApiErrorResponse::SlotTaken)?;

    Ok(ApplicationResponse::Json((booking, end_time).foreign_into()))
}

async fn load_facility(
    state: &AppState,
    facility_id: &str,
) -> RouterResult<storage::Facility> {
    let facility = state
        .store
        .find_facility_by_facility_id(facility_id)
        .await
        .to_not_found_response(ApiErrorResponse::ResourceNotFound {
            resource: "facility",
        })?;
    if !facility.active {
        return Err(report!(ApiErrorResponse::PreconditionFailed {
            message: "facility is not open for bookings",
        }));
    }
    Ok(facility)
}

/// Validate the requested window against the facility's grid and operating
/// hours, resolving the end time where the request leaves it implicit.
fn resolve_window(
    facility: &storage::Facility,
    req: &BookingRequest,
) -> RouterResult<(Time, Time)> {
    let granularity = i32::from(facility.granularity_minutes);
    if !consts::ALLOWED_GRANULARITIES_MINUTES.contains(&facility.granularity_minutes) {
        return Err(report!(ApiErrorResponse::InternalServerError)
            .attach_printable("facility carries an unsupported slot granularity"));
    }

    if !facility.is_open_on(req.booking_date.weekday()) {
        return Err(report!(ApiErrorResponse::OutsideOperatingHours));
    }

    let open = minutes_of_day(facility.open_time);
    let close = minutes_of_day(facility.close_time);
    let start = minutes_of_day(req.start_time);

    if (start - open).rem_euclid(granularity) != 0 {
        return Err(report!(ApiErrorResponse::InvalidInterval {
            message: "start time is not aligned to the facility's slot grid",
        }));
    }

    let end = match req.end_time {
        Some(end_time) => {
            let end = minutes_of_day(end_time);
            if end <= start {
                return Err(report!(ApiErrorResponse::InvalidInterval {
                    message: "end time must be after start time",
                }));
            }
            match facility.slot_mode {
                // Fixed-length slots: the window is exactly one slot long.
                SlotMode::TimePeriod if end - start != granularity => {
                    return Err(report!(ApiErrorResponse::InvalidInterval {
                        message: "duration must be exactly one slot",
                    }));
                }
                _ if (end - start) % granularity != 0 => {
                    return Err(report!(ApiErrorResponse::InvalidInterval {
                        message: "duration must be a whole number of slots",
                    }));
                }
                _ => {}
            }
            end
        }
        None => match facility.slot_mode {
            SlotMode::StartTime => start + granularity,
            SlotMode::TimePeriod => {
                return Err(report!(ApiErrorResponse::InvalidInterval {
                    message: "end time is required for this facility",
                }))
            }
        },
    };

    if start < open || end > close {
        return Err(report!(ApiErrorResponse::OutsideOperatingHours));
    }

    let end_time = Time::from_hms((end / 60) as u8, (end % 60) as u8, 0)
        .change_context(ApiErrorResponse::InternalServerError)?;
    Ok((req.start_time, end_time))
}

fn minutes_of_day(t: Time) -> i32 {
    i32::from(t.hour()) * 60 + i32::from(t.minute())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::time;

    fn facility(slot_mode: SlotMode, granularity: u16) -> storage::Facility {
        storage::Facility {
            facility_id: "fac_pavilion".into(),
            name: "Riverside Pavilion".into(),
            open_weekdays: vec![
                time::Weekday::Monday,
                time::Weekday::Tuesday,
                time::Weekday::Wednesday,
                time::Weekday::Thursday,
                time::Weekday::Friday,
                time::Weekday::Saturday,
                time::Weekday::Sunday,
            ],
            open_time: time!(8:00),
            close_time: time!(20:00),
            slot_mode,
            granularity_minutes: granularity,
            active: true,
        }
    }

    fn request(start: Time, end: Option<Time>) -> BookingRequest {
        BookingRequest {
            facility_id: "fac_pavilion".into(),
            booking_date: time::macros::date!(2026 - 09 - 01),
            start_time: start,
            end_time: end,
        }
    }

    #[test]
    fn aligned_period_resolves_as_given() {
        let fac = facility(SlotMode::TimePeriod, 120);
        let (start, end) = resolve_window(&fac, &request(time!(10:00), Some(time!(12:00))))
            .expect("window should resolve");
        assert_eq!((start, end), (time!(10:00), time!(12:00)));
    }

    #[test]
    fn period_mode_rejects_more_than_one_slot() {
        let fac = facility(SlotMode::TimePeriod, 60);
        let err = resolve_window(&fac, &request(time!(9:00), Some(time!(11:00))))
            .expect_err("two-slot window should be rejected");
        assert!(matches!(
            err.current_context(),
            ApiErrorResponse::InvalidInterval { .. }
        ));
    }

    #[test]
    fn start_time_mode_allows_a_multi_slot_window() {
        let fac = facility(SlotMode::StartTime, 60);
        let (start, end) = resolve_window(&fac, &request(time!(9:00), Some(time!(11:00))))
            .expect("window should resolve");
        assert_eq!((start, end), (time!(9:00), time!(11:00)));
    }

    #[test]
    fn start_time_mode_defaults_to_one_slot() {
        let fac = facility(SlotMode::StartTime, 30);
        let (_, end) = resolve_window(&fac, &request(time!(9:30), None))
            .expect("window should resolve");
        assert_eq!(end, time!(10:00));
    }

    #[test]
    fn time_period_mode_requires_an_end() {
        let fac = facility(SlotMode::TimePeriod, 60);
        let err = resolve_window(&fac, &request(time!(9:00), None))
            .expect_err("missing end should be rejected");
        assert!(matches!(
            err.current_context(),
            ApiErrorResponse::InvalidInterval { .. }
        ));
    }

    #[test]
    fn misaligned_start_is_rejected() {
        let fac = facility(SlotMode::TimePeriod, 60);
        let err = resolve_window(&fac, &request(time!(9:10), Some(time!(10:10))))
            .expect_err("misaligned start should be rejected");
        assert!(matches!(
            err.current_context(),
            ApiErrorResponse::InvalidInterval { .. }
        ));
    }

    #[test]
    fn inverted_window_is_rejected() {
        let fac = facility(SlotMode::TimePeriod, 60);
        let err = resolve_window(&fac, &request(time!(11:00), Some(time!(10:00))))
            .expect_err("inverted window should be rejected");
        assert!(matches!(
            err.current_context(),
            ApiErrorResponse::InvalidInterval { .. }
        ));
    }

    #[test]
    fn window_past_close_is_outside_hours() {
        let fac = facility(SlotMode::TimePeriod, 60);
        let err = resolve_window(&fac, &request(time!(20:00), Some(time!(21:00))))
            .expect_err("window past close should be rejected");
        assert!(matches!(
            err.current_context(),
            ApiErrorResponse::OutsideOperatingHours
        ));
    }

    #[test]
    fn window_before_open_is_outside_hours() {
        let fac = facility(SlotMode::TimePeriod, 60);
        let err = resolve_window(&fac, &request(time!(7:00), Some(time!(8:00))))
            .expect_err("window before open should be rejected");
        assert!(matches!(
            err.current_context(),
            ApiErrorResponse::OutsideOperatingHours
        ));
    }

    #[test]
    fn closed_weekday_is_outside_hours() {
        let mut fac = facility(SlotMode::TimePeriod, 60);
        fac.open_weekdays = vec![time::Weekday::Monday];
        // 2026-09-01 is a Tuesday.
        let err = resolve_window(&fac, &request(time!(9:00), Some(time!(10:00))))
            .expect_err("closed weekday should be rejected");
        assert!(matches!(
            err.current_context(),
            ApiErrorResponse::OutsideOperatingHours
        ));
    }
}
