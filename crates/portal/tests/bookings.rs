mod common;

use api_models::{
    bookings::{BookingCheckResponse, BookingRequest, BookingResponse},
    enums::{BookingStatus, SlotMode},
};
use portal::{
    core::{
        bookings::{booking_check_core, booking_create_core},
        errors::ApiErrorResponse,
    },
    services::ApplicationResponse,
};
use time::macros::{date, time};

use common::{authed, seed_booking, seed_facility, seed_facility_open_on, test_app, TransferScript};

fn check_body(response: ApplicationResponse<BookingCheckResponse>) -> BookingCheckResponse {
    match response {
        ApplicationResponse::Json(body) => body,
        other => panic!("expected a json response, got {other:?}"),
    }
}

fn create_body(response: ApplicationResponse<BookingResponse>) -> BookingResponse {
    match response {
        ApplicationResponse::Json(body) => body,
        other => panic!("expected a json response, got {other:?}"),
    }
}

fn request(start: time::Time, end: Option<time::Time>) -> BookingRequest {
    BookingRequest {
        facility_id: "fac_pavilion".to_string(),
        booking_date: date!(2026 - 09 - 01),
        start_time: start,
        end_time: end,
    }
}

#[tokio::test]
async fn check_reports_no_conflict_on_an_empty_calendar() {
    let app = test_app(TransferScript::Succeed);
    seed_facility(&app, "fac_pavilion", SlotMode::TimePeriod).await;

    let body = check_body(
        booking_check_core(
            app.state.clone(),
            authed("usr_1"),
            request(time!(9:00), Some(time!(10:00))),
        )
        .await
        .expect("check should resolve"),
    );
    assert!(!body.conflict);
    assert_eq!(body.end_time, time!(10:00));
}

#[tokio::test]
async fn created_booking_turns_up_as_a_conflict() {
    let app = test_app(TransferScript::Succeed);
    seed_facility(&app, "fac_pavilion", SlotMode::TimePeriod).await;

    let created = create_body(
        booking_create_core(
            app.state.clone(),
            authed("usr_1"),
            request(time!(9:00), Some(time!(10:00))),
        )
        .await
        .expect("create should succeed"),
    );
    assert_eq!(created.status, BookingStatus::Pending);

    let body = check_body(
        booking_check_core(
            app.state.clone(),
            authed("usr_2"),
            request(time!(9:00), Some(time!(10:00))),
        )
        .await
        .expect("check should resolve"),
    );
    assert!(body.conflict);
}

#[tokio::test]
async fn second_create_for_an_overlapping_slot_loses() {
    let app = test_app(TransferScript::Succeed);
    seed_facility(&app, "fac_pavilion", SlotMode::TimePeriod).await;
    // A pre-existing two-hour block; a one-slot request inside it must lose.
    seed_booking(
        &app,
        "fac_pavilion",
        date!(2026 - 09 - 01),
        time!(9:00),
        time!(11:00),
        BookingStatus::Pending,
    )
    .await;

    let err = booking_create_core(
        app.state.clone(),
        authed("usr_2"),
        request(time!(10:00), Some(time!(11:00))),
    )
    .await
    .expect_err("overlapping create should lose");
    assert!(matches!(err.current_context(), ApiErrorResponse::SlotTaken));
}

#[tokio::test]
async fn adjacent_slots_coexist() {
    let app = test_app(TransferScript::Succeed);
    seed_facility(&app, "fac_pavilion", SlotMode::TimePeriod).await;

    booking_create_core(
        app.state.clone(),
        authed("usr_1"),
        request(time!(9:00), Some(time!(10:00))),
    )
    .await
    .expect("first create should succeed");

    booking_create_core(
        app.state.clone(),
        authed("usr_2"),
        request(time!(10:00), Some(time!(11:00))),
    )
    .await
    .expect("back-to-back slot should be free");
}

#[tokio::test]
async fn cancelled_bookings_do_not_hold_their_slot() {
    let app = test_app(TransferScript::Succeed);
    seed_facility(&app, "fac_pavilion", SlotMode::TimePeriod).await;
    seed_booking(
        &app,
        "fac_pavilion",
        date!(2026 - 09 - 01),
        time!(9:00),
        time!(11:00),
        BookingStatus::Cancelled,
    )
    .await;

    booking_create_core(
        app.state.clone(),
        authed("usr_1"),
        request(time!(9:00), Some(time!(10:00))),
    )
    .await
    .expect("cancelled booking should not block");
}

#[tokio::test]
async fn start_time_facility_defaults_to_one_slot() {
    let app = test_app(TransferScript::Succeed);
    seed_facility(&app, "fac_pavilion", SlotMode::StartTime).await;

    let created = create_body(
        booking_create_core(app.state.clone(), authed("usr_1"), request(time!(14:00), None))
            .await
            .expect("create should succeed"),
    );
    assert_eq!(created.end_time, time!(15:00));
}

#[tokio::test]
async fn window_outside_operating_hours_is_rejected() {
    let app = test_app(TransferScript::Succeed);
    seed_facility(&app, "fac_pavilion", SlotMode::TimePeriod).await;

    let err = booking_create_core(
        app.state.clone(),
        authed("usr_1"),
        request(time!(20:00), Some(time!(21:00))),
    )
    .await
    .expect_err("window past close should be rejected");
    assert!(matches!(
        err.current_context(),
        ApiErrorResponse::OutsideOperatingHours
    ));
}

#[tokio::test]
async fn period_facility_rejects_a_two_slot_window() {
    let app = test_app(TransferScript::Succeed);
    seed_facility(&app, "fac_pavilion", SlotMode::TimePeriod).await;

    let err = booking_create_core(
        app.state.clone(),
        authed("usr_1"),
        request(time!(9:00), Some(time!(11:00))),
    )
    .await
    .expect_err("two-slot window should be rejected");
    assert!(matches!(
        err.current_context(),
        ApiErrorResponse::InvalidInterval { .. }
    ));
}

#[tokio::test]
async fn booking_on_a_closed_weekday_is_rejected() {
    let app = test_app(TransferScript::Succeed);
    // Mondays only; the requested 2026-09-01 is a Tuesday.
    seed_facility_open_on(
        &app,
        "fac_pavilion",
        SlotMode::TimePeriod,
        vec![time::Weekday::Monday],
    )
    .await;

    let err = booking_create_core(
        app.state.clone(),
        authed("usr_1"),
        request(time!(9:00), Some(time!(10:00))),
    )
    .await
    .expect_err("closed weekday should be rejected");
    assert!(matches!(
        err.current_context(),
        ApiErrorResponse::OutsideOperatingHours
    ));

    booking_create_core(
        app.state.clone(),
        authed("usr_1"),
        BookingRequest {
            booking_date: date!(2026 - 08 - 31),
            ..request(time!(9:00), Some(time!(10:00)))
        },
    )
    .await
    .expect("open weekday should book");
}

#[tokio::test]
async fn misaligned_start_is_an_invalid_interval() {
    let app = test_app(TransferScript::Succeed);
    seed_facility(&app, "fac_pavilion", SlotMode::TimePeriod).await;

    let err = booking_create_core(
        app.state.clone(),
        authed("usr_1"),
        request(time!(9:20), Some(time!(10:20))),
    )
    .await
    .expect_err("misaligned start should be rejected");
    assert!(matches!(
        err.current_context(),
        ApiErrorResponse::InvalidInterval { .. }
    ));
}

#[tokio::test]
async fn unknown_facility_is_not_found() {
    let app = test_app(TransferScript::Succeed);

    let err = booking_check_core(
        app.state.clone(),
        authed("usr_1"),
        request(time!(9:00), Some(time!(10:00))),
    )
    .await
    .expect_err("unknown facility should be not found");
    assert!(matches!(
        err.current_context(),
        ApiErrorResponse::ResourceNotFound { .. }
    ));
}

#[tokio::test]
async fn racing_creates_admit_exactly_one_winner() {
    let app = test_app(TransferScript::Succeed);
    seed_facility(&app, "fac_pavilion", SlotMode::TimePeriod).await;

    let left = booking_create_core(
        app.state.clone(),
        authed("usr_1"),
        request(time!(9:00), Some(time!(10:00))),
    );
    let right = booking_create_core(
        app.state.clone(),
        authed("usr_2"),
        request(time!(9:00), Some(time!(10:00))),
    );
    let (left, right) = futures::join!(left, right);

    assert_eq!(
        usize::from(left.is_ok()) + usize::from(right.is_ok()),
        1,
        "exactly one racing create may win"
    );
}
