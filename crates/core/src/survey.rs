//! Survey answers and their validation against the active scale.

use crate::error::{TriageError, TriageResult};
use crate::scale::ScalePolicy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The ordinal answers of one self-assessment survey, plus the two
/// orientation guesses.
///
/// Field names are matched against the active [`ScalePolicy`]; values are
/// range-checked there before any score is computed. The orientation guesses
/// are free inputs — a month guess of 13 is simply wrong, not invalid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyAnswers {
    values: BTreeMap<String, u32>,
    guessed_month: u32,
    guessed_age: i32,
}

impl SurveyAnswers {
    pub fn new(guessed_month: u32, guessed_age: i32) -> Self {
        Self {
            values: BTreeMap::new(),
            guessed_month,
            guessed_age,
        }
    }

    /// Records an answer for one survey field.
    pub fn with_answer(mut self, field: impl Into<String>, value: u32) -> Self {
        self.values.insert(field.into(), value);
        self
    }

    pub fn answer(&self, field: &str) -> Option<u32> {
        self.values.get(field).copied()
    }

    pub fn guessed_month(&self) -> u32 {
        self.guessed_month
    }

    pub fn guessed_age(&self) -> i32 {
        self.guessed_age
    }

    /// Validates the answers against a scale policy.
    ///
    /// Fails fast on the first unknown field, missing field, or out-of-range
    /// value; nothing is ever computed from an invalid survey.
    pub fn validate_against(&self, policy: &ScalePolicy) -> TriageResult<()> {
        for name in self.values.keys() {
            if !policy.fields().iter().any(|spec| spec.name == name) {
                return Err(TriageError::UnknownSurveyField(name.clone()));
            }
        }
        for spec in policy.fields() {
            let value = self
                .answer(spec.name)
                .ok_or(TriageError::MissingSurveyField(spec.name))?;
            if value < spec.min || value > spec.max {
                return Err(TriageError::SurveyValueOutOfRange {
                    field: spec.name.to_string(),
                    value,
                    min: spec.min,
                    max: spec.max,
                });
            }
        }
        Ok(())
    }

    /// Sum of all answered field values.
    pub fn total(&self) -> u32 {
        self.values.values().sum()
    }
}
