//! Cognitive-orientation checks.
//!
//! The survey asks the user for the current month and their own age; wrong
//! answers indicate disorientation. Two mutually exclusive scoring policies
//! shipped in different revisions, so the choice is an explicit parameter
//! rather than a hidden branch.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// How wrong orientation guesses are turned into a score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrientationPolicy {
    /// Score 1 only when both the month and the age guess are wrong.
    BothWrong,
    /// Score 1 per wrong guess, independently.
    PerField,
}

/// Outcome of the orientation check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrientationAssessment {
    /// Age in completed years as of the evaluation date.
    pub age: i32,
    pub month_correct: bool,
    pub age_correct: bool,
    /// Points contributed to the total score under the active policy.
    pub score: u32,
}

/// Age in completed years on `today`.
///
/// One year is subtracted while the birthday has not yet been reached in the
/// current year.
pub fn age_on(today: NaiveDate, birth: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

/// Evaluates the month and age guesses against the actual date and birth date.
pub fn evaluate(
    policy: OrientationPolicy,
    birth: NaiveDate,
    today: NaiveDate,
    guessed_month: u32,
    guessed_age: i32,
) -> OrientationAssessment {
    let age = age_on(today, birth);
    let month_correct = guessed_month == today.month();
    let age_correct = guessed_age == age;

    let score = match policy {
        OrientationPolicy::BothWrong => u32::from(!month_correct && !age_correct),
        OrientationPolicy::PerField => u32::from(!month_correct) + u32::from(!age_correct),
    };

    OrientationAssessment {
        age,
        month_correct,
        age_correct,
        score,
    }
}
