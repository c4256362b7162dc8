use api_models::enums::SlotMode;
use time::{Time, Weekday};

/// A bookable municipal facility, such as a park shelter or meeting room.
#[derive(Clone, Debug)]
pub struct Facility {
    pub facility_id: String,
    pub name: String,
    /// Days of the week the facility takes bookings on.
    pub open_weekdays: Vec<Weekday>,
    pub open_time: Time,
    pub close_time: Time,
    pub slot_mode: SlotMode,
    pub granularity_minutes: u16,
    pub active: bool,
}

impl Facility {
    pub fn is_open_on(&self, weekday: Weekday) -> bool {
        self.open_weekdays.contains(&weekday)
    }
}
