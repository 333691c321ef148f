//! Real-time operating status.

use crate::clock::Clock;
use crate::error::TriageResult;
use crate::hospital::{self, Hospital};
use serde::Serialize;

/// Operating status of a hospital at a point in time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Availability {
    Open,
    Closed,
    /// Emergency department: open regardless of the posted schedule.
    AlwaysOpen,
}

impl Availability {
    pub fn is_open(self) -> bool {
        !matches!(self, Availability::Closed)
    }
}

/// Evaluates a hospital's operating status at the clock's current instant.
///
/// An emergency hospital is `AlwaysOpen` whatever its schedule says. For the
/// rest, an absent slot for today means `Closed`; a present slot is parsed
/// and compared half-open (`start <= now < end`), so a hospital posted
/// `09:00~18:00` is open at 09:00 sharp and closed at 18:00 sharp.
///
/// # Errors
///
/// Returns `TriageError::MalformedOpeningHours` for a malformed slot — a
/// parse failure is a data error, never a silent `Closed`.
pub fn availability(hospital: &Hospital, clock: &dyn Clock) -> TriageResult<Availability> {
    if hospital.emergency {
        return Ok(Availability::AlwaysOpen);
    }

    let weekday = clock.weekday();
    let Some(slot) = hospital.schedule.slot_for(weekday) else {
        return Ok(Availability::Closed);
    };

    let (start, end) = hospital::parse_slot(weekday, slot)?;
    let now = clock.time_of_day();
    if start <= now && now < end {
        Ok(Availability::Open)
    } else {
        Ok(Availability::Closed)
    }
}

/// Convenience wrapper answering "is it open right now".
pub fn is_open_now(hospital: &Hospital, clock: &dyn Clock) -> TriageResult<bool> {
    availability(hospital, clock).map(Availability::is_open)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::hospital::WeeklySchedule;
    use chrono::NaiveDate;
    use triage_types::GeoPoint;

    fn hospital(emergency: bool, schedule: WeeklySchedule) -> Hospital {
        Hospital {
            id: 1,
            name: "Test Hospital".into(),
            position: GeoPoint::new(37.5, 127.0).expect("position"),
            address: "1 Test St".into(),
            phone: "02-000-0000".into(),
            emergency,
            stroke_center: false,
            schedule,
        }
    }

    fn weekday_schedule() -> WeeklySchedule {
        WeeklySchedule {
            // 2025-06-02 is a Monday.
            monday: Some("09:00~18:00".into()),
            ..WeeklySchedule::default()
        }
    }

    fn monday_at(h: u32, m: u32) -> FixedClock {
        let at = NaiveDate::from_ymd_opt(2025, 6, 2)
            .expect("date")
            .and_hms_opt(h, m, 0)
            .expect("time");
        FixedClock::new(at)
    }

    #[test]
    fn open_at_the_start_instant_closed_at_the_end_instant() {
        let hospital = hospital(false, weekday_schedule());
        assert_eq!(
            availability(&hospital, &monday_at(9, 0)).expect("status"),
            Availability::Open
        );
        assert_eq!(
            availability(&hospital, &monday_at(17, 59)).expect("status"),
            Availability::Open
        );
        assert_eq!(
            availability(&hospital, &monday_at(18, 0)).expect("status"),
            Availability::Closed
        );
        assert_eq!(
            availability(&hospital, &monday_at(8, 59)).expect("status"),
            Availability::Closed
        );
    }

    #[test]
    fn a_day_without_a_slot_is_closed() {
        let hospital = hospital(false, weekday_schedule());
        // 2025-06-03 is a Tuesday with no slot.
        let tuesday = FixedClock::new(
            NaiveDate::from_ymd_opt(2025, 6, 3)
                .expect("date")
                .and_hms_opt(12, 0, 0)
                .expect("time"),
        );
        assert_eq!(
            availability(&hospital, &tuesday).expect("status"),
            Availability::Closed
        );
    }

    #[test]
    fn emergency_overrides_any_schedule() {
        let closed_all_week = hospital(true, WeeklySchedule::default());
        assert_eq!(
            availability(&closed_all_week, &monday_at(3, 0)).expect("status"),
            Availability::AlwaysOpen
        );
        assert!(is_open_now(&closed_all_week, &monday_at(3, 0)).expect("status"));

        // Even a malformed schedule is irrelevant for an emergency hospital.
        let mut broken = hospital(true, WeeklySchedule::default());
        broken.schedule.monday = Some("nonsense".into());
        assert_eq!(
            availability(&broken, &monday_at(12, 0)).expect("status"),
            Availability::AlwaysOpen
        );
    }

    #[test]
    fn a_malformed_slot_is_an_error_not_closed() {
        let mut broken = hospital(false, WeeklySchedule::default());
        broken.schedule.monday = Some("09-18".into());
        let err = availability(&broken, &monday_at(12, 0)).unwrap_err();
        assert!(matches!(
            err,
            crate::TriageError::MalformedOpeningHours { .. }
        ));
    }
}
