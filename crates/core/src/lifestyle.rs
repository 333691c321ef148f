//! Lifestyle impact scoring.
//!
//! The daily habit diary maps each answered option to a score delta and
//! folds the deltas into a 0–100 health score. The mapping is one static
//! table from (category, option) to impact, kept as data rather than a type
//! per category; the diary CRUD flow around it lives outside this core.

use crate::error::{TriageError, TriageResult};
use serde::{Deserialize, Serialize};

/// Tracked lifestyle categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifestyleCategory {
    Smoking,
    Drinking,
    Exercise,
    Diet,
    Sleep,
}

impl std::fmt::Display for LifestyleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LifestyleCategory::Smoking => "smoking",
            LifestyleCategory::Drinking => "drinking",
            LifestyleCategory::Exercise => "exercise",
            LifestyleCategory::Diet => "diet",
            LifestyleCategory::Sleep => "sleep",
        };
        write!(f, "{name}")
    }
}

/// (category, 1-based option, score delta), as deployed.
const IMPACT_TABLE: &[(LifestyleCategory, u32, i32)] = &[
    (LifestyleCategory::Smoking, 1, 0),    // non-smoker
    (LifestyleCategory::Smoking, 2, -22),  // 1-14 per day
    (LifestyleCategory::Smoking, 3, -41),  // 15-24 per day
    (LifestyleCategory::Smoking, 4, -54),  // over 24 per day
    (LifestyleCategory::Drinking, 1, 0),   // one drink or less
    (LifestyleCategory::Drinking, 2, -4),  // one to three
    (LifestyleCategory::Drinking, 3, -11), // three to six
    (LifestyleCategory::Drinking, 4, -19), // over six
    (LifestyleCategory::Exercise, 1, 0),   // 150+ minutes per week
    (LifestyleCategory::Exercise, 2, -4),  // 60-149 minutes
    (LifestyleCategory::Exercise, 3, -9),  // under 60 minutes
    (LifestyleCategory::Diet, 1, 0),       // balanced
    (LifestyleCategory::Diet, 2, -7),      // processed or high-salt
    (LifestyleCategory::Sleep, 1, 0),      // 7-8 hours
    (LifestyleCategory::Sleep, 2, -8),     // under 6 hours
    (LifestyleCategory::Sleep, 3, -8),     // over 9 hours
];

/// Score delta for one answered option.
///
/// # Errors
///
/// Returns `TriageError::InvalidInput` for an option the category does not
/// declare.
pub fn score_impact(category: LifestyleCategory, option: u32) -> TriageResult<i32> {
    IMPACT_TABLE
        .iter()
        .find(|&&(c, o, _)| c == category && o == option)
        .map(|&(_, _, delta)| delta)
        .ok_or_else(|| {
            TriageError::InvalidInput(format!("unknown {category} option {option}"))
        })
}

/// One day's habit answers, one option per category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyHabits {
    pub smoking: u32,
    pub drinking: u32,
    pub exercise: u32,
    pub diet: u32,
    pub sleep: u32,
}

/// Health score for a day of habits: 100 plus the (negative) deltas,
/// floored at zero.
///
/// # Errors
///
/// Returns `TriageError::InvalidInput` on the first unknown option; no
/// partial score is produced.
pub fn health_score(habits: DailyHabits) -> TriageResult<u32> {
    let total = score_impact(LifestyleCategory::Smoking, habits.smoking)?
        + score_impact(LifestyleCategory::Drinking, habits.drinking)?
        + score_impact(LifestyleCategory::Exercise, habits.exercise)?
        + score_impact(LifestyleCategory::Diet, habits.diet)?
        + score_impact(LifestyleCategory::Sleep, habits.sleep)?;

    Ok((100 + total).max(0) as u32)
}
