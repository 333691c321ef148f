//! Versioned scoring policy.
//!
//! The self-assessment survey went through incompatible revisions: a two-field
//! quick form (with the AI finding weight later doubled) and a full twelve
//! field clinical form. Each revision is a [`ScaleVersion`] resolving to a
//! [`ScalePolicy`] — the field set with per-field ranges, the weights applied
//! to positive AI findings, and the factor mapping a total score onto the
//! 0–100 severity percentage. A record stores the version it was scored
//! under, so historical records stay interpretable.

use crate::error::{TriageError, TriageResult};
use serde::{Deserialize, Serialize};

/// A deployed revision of the self-assessment scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScaleVersion {
    /// Two-field quick form (gaze, arm), AI findings weighted 1, 0–5 scale.
    QuickV1,
    /// Quick form with positive AI findings counted double; the declared
    /// 0–5 scale and its ×20 percentage factor were kept.
    QuickV2,
    /// Full clinical form: eleven ordinal fields plus the computed
    /// orientation item, AI findings weighted 1.
    ClinicalV1,
}

/// Declaration of one ordinal survey field and its allowed range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SurveyFieldSpec {
    pub name: &'static str,
    pub min: u32,
    pub max: u32,
}

const fn field(name: &'static str, min: u32, max: u32) -> SurveyFieldSpec {
    SurveyFieldSpec { name, min, max }
}

const QUICK_FIELDS: &[SurveyFieldSpec] = &[field("gaze", 0, 1), field("arm", 0, 1)];

const CLINICAL_FIELDS: &[SurveyFieldSpec] = &[
    field("alertness", 0, 3),
    field("gaze", 0, 2),
    field("visual_field", 0, 3),
    field("left_arm", 0, 4),
    field("right_arm", 0, 4),
    field("left_leg", 0, 4),
    field("right_leg", 0, 4),
    field("limb_ataxia", 0, 2),
    field("sensory", 0, 2),
    field("aphasia", 0, 3),
    field("neglect", 0, 2),
];

/// The resolved scoring parameters of one scale revision.
#[derive(Clone, Debug)]
pub struct ScalePolicy {
    fields: Vec<SurveyFieldSpec>,
    weight_face: u32,
    weight_speech: u32,
    percentage_factor: f64,
}

impl ScalePolicy {
    /// Resolves the policy for a deployed scale version.
    pub fn for_version(version: ScaleVersion) -> Self {
        match version {
            ScaleVersion::QuickV1 => Self {
                fields: QUICK_FIELDS.to_vec(),
                weight_face: 1,
                weight_speech: 1,
                percentage_factor: 20.0,
            },
            ScaleVersion::QuickV2 => Self {
                fields: QUICK_FIELDS.to_vec(),
                weight_face: 2,
                weight_speech: 2,
                percentage_factor: 20.0,
            },
            ScaleVersion::ClinicalV1 => Self {
                fields: CLINICAL_FIELDS.to_vec(),
                weight_face: 1,
                weight_speech: 1,
                // 33 survey points + orientation + two AI findings = 36.
                percentage_factor: 100.0 / 36.0,
            },
        }
    }

    /// Builds a policy outside the deployed revisions.
    ///
    /// # Errors
    ///
    /// Returns `TriageError::InvalidInput` if the field set is empty or
    /// contains a duplicate name, if any field declares `min > max`, or if
    /// the percentage factor is not a positive finite number.
    pub fn custom(
        fields: Vec<SurveyFieldSpec>,
        weight_face: u32,
        weight_speech: u32,
        percentage_factor: f64,
    ) -> TriageResult<Self> {
        if fields.is_empty() {
            return Err(TriageError::InvalidInput(
                "scale must declare at least one survey field".into(),
            ));
        }
        for (i, spec) in fields.iter().enumerate() {
            if spec.min > spec.max {
                return Err(TriageError::InvalidInput(format!(
                    "survey field '{}' declares min {} greater than max {}",
                    spec.name, spec.min, spec.max
                )));
            }
            if fields[..i].iter().any(|other| other.name == spec.name) {
                return Err(TriageError::InvalidInput(format!(
                    "survey field '{}' is declared twice",
                    spec.name
                )));
            }
        }
        if !percentage_factor.is_finite() || percentage_factor <= 0.0 {
            return Err(TriageError::InvalidInput(
                "percentage factor must be a positive finite number".into(),
            ));
        }
        Ok(Self {
            fields,
            weight_face,
            weight_speech,
            percentage_factor,
        })
    }

    pub fn fields(&self) -> &[SurveyFieldSpec] {
        &self.fields
    }

    pub fn weight_face(&self) -> u32 {
        self.weight_face
    }

    pub fn weight_speech(&self) -> u32 {
        self.weight_speech
    }

    pub fn percentage_factor(&self) -> f64 {
        self.percentage_factor
    }

    /// Highest total the survey fields alone can contribute.
    pub fn max_survey_score(&self) -> u32 {
        self.fields.iter().map(|spec| spec.max).sum()
    }
}
