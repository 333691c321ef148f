//! Hospital reference data.
//!
//! Hospitals are seeded and administered externally; this core only reads
//! them. The weekly schedule invariant matters: a slot is either absent
//! (closed that day) or a well-formed `"HH:MM~HH:MM"` range — a malformed
//! non-empty slot is a data-integrity error, never a silent "closed".

use crate::constants::{SCHEDULE_SLOT_SEPARATOR, SCHEDULE_TIME_FORMAT};
use crate::error::{TriageError, TriageResult};
use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use triage_types::GeoPoint;

pub type HospitalId = u64;

/// One week of opening hours, one optional slot per weekday.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    pub monday: Option<String>,
    pub tuesday: Option<String>,
    pub wednesday: Option<String>,
    pub thursday: Option<String>,
    pub friday: Option<String>,
    pub saturday: Option<String>,
    pub sunday: Option<String>,
}

impl WeeklySchedule {
    /// The slot for the given weekday, if the hospital opens that day.
    pub fn slot_for(&self, day: Weekday) -> Option<&str> {
        let slot = match day {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        };
        slot.as_deref()
    }

    /// Checks every present slot for well-formedness and a start strictly
    /// before its end. Intended for reference-data load time.
    ///
    /// # Errors
    ///
    /// Returns `TriageError::InvalidInput` naming the first offending day.
    pub fn validate(&self) -> TriageResult<()> {
        const DAYS: [Weekday; 7] = [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ];
        for day in DAYS {
            if let Some(slot) = self.slot_for(day) {
                let (start, end) = parse_slot(day, slot)
                    .map_err(|e| TriageError::InvalidInput(e.to_string()))?;
                if start >= end {
                    return Err(TriageError::InvalidInput(format!(
                        "opening hours {slot:?} for {day} must start before they end"
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Parses one `"HH:MM~HH:MM"` slot into its start and end times.
///
/// # Errors
///
/// Returns `TriageError::MalformedOpeningHours` for anything that does not
/// split into exactly two parseable times.
pub(crate) fn parse_slot(weekday: Weekday, slot: &str) -> TriageResult<(NaiveTime, NaiveTime)> {
    let malformed = || TriageError::MalformedOpeningHours {
        weekday,
        value: slot.to_string(),
    };

    let mut parts = slot.split(SCHEDULE_SLOT_SEPARATOR);
    let start_text = parts.next().ok_or_else(malformed)?;
    let end_text = parts.next().ok_or_else(malformed)?;
    if parts.next().is_some() {
        return Err(malformed());
    }

    let start =
        NaiveTime::parse_from_str(start_text.trim(), SCHEDULE_TIME_FORMAT).map_err(|_| malformed())?;
    let end =
        NaiveTime::parse_from_str(end_text.trim(), SCHEDULE_TIME_FORMAT).map_err(|_| malformed())?;
    Ok((start, end))
}

/// Static hospital record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hospital {
    pub id: HospitalId,
    pub name: String,
    pub position: GeoPoint,
    pub address: String,
    pub phone: String,
    /// Emergency department: treated as always open.
    pub emergency: bool,
    /// Certified stroke centre.
    pub stroke_center: bool,
    pub schedule: WeeklySchedule,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_the_slot_for_a_weekday() {
        let schedule = WeeklySchedule {
            monday: Some("09:00~18:00".into()),
            ..WeeklySchedule::default()
        };
        assert_eq!(schedule.slot_for(Weekday::Mon), Some("09:00~18:00"));
        assert_eq!(schedule.slot_for(Weekday::Tue), None);
    }

    #[test]
    fn parses_a_well_formed_slot() {
        let (start, end) = parse_slot(Weekday::Mon, "09:00~18:00").expect("slot");
        assert_eq!(start, NaiveTime::from_hms_opt(9, 0, 0).expect("time"));
        assert_eq!(end, NaiveTime::from_hms_opt(18, 0, 0).expect("time"));
    }

    #[test]
    fn tolerates_whitespace_around_the_times() {
        let (start, _) = parse_slot(Weekday::Mon, " 09:00 ~ 18:00 ").expect("slot");
        assert_eq!(start, NaiveTime::from_hms_opt(9, 0, 0).expect("time"));
    }

    #[test]
    fn rejects_malformed_slots() {
        for slot in ["09:00", "09:00~18:00~20:00", "9am~6pm", "~", ""] {
            let err = parse_slot(Weekday::Fri, slot).unwrap_err();
            assert!(
                matches!(err, TriageError::MalformedOpeningHours { weekday: Weekday::Fri, .. }),
                "slot {slot:?} did not raise MalformedOpeningHours"
            );
        }
    }

    #[test]
    fn validate_rejects_inverted_ranges() {
        let schedule = WeeklySchedule {
            wednesday: Some("18:00~09:00".into()),
            ..WeeklySchedule::default()
        };
        assert!(matches!(
            schedule.validate(),
            Err(TriageError::InvalidInput(_))
        ));
    }

    #[test]
    fn validate_accepts_a_closed_week() {
        WeeklySchedule::default().validate().expect("all-closed week is valid");
    }
}
