//! Composite severity scoring.
//!
//! Fuses the AI findings, the validated survey answers and the orientation
//! check into one total score and its percentage on the active scale. Pure:
//! identical inputs always produce the identical breakdown, and nothing is
//! persisted here.

use crate::constants::MAX_PERCENTAGE;
use crate::error::TriageResult;
use crate::orientation::{self, OrientationAssessment, OrientationPolicy};
use crate::scale::ScalePolicy;
use crate::survey::SurveyAnswers;
use crate::upstream::AiFinding;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-component breakdown of one computed score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub orientation: OrientationAssessment,
    pub survey_points: u32,
    pub face_points: u32,
    pub speech_points: u32,
    pub total_score: u32,
    /// `total_score` mapped onto 0..=100 by the scale's percentage factor.
    pub percentage: u32,
}

/// Combines survey, AI and orientation inputs under one scale policy.
pub struct ScoreAggregator {
    scale: ScalePolicy,
    orientation_policy: OrientationPolicy,
}

impl ScoreAggregator {
    pub fn new(scale: ScalePolicy, orientation_policy: OrientationPolicy) -> Self {
        Self {
            scale,
            orientation_policy,
        }
    }

    pub fn scale(&self) -> &ScalePolicy {
        &self.scale
    }

    /// Computes the composite score.
    ///
    /// Validates the survey against the scale first; nothing is computed from
    /// an invalid survey.
    ///
    /// # Errors
    ///
    /// Returns the validation error of the first offending survey field.
    pub fn compute(
        &self,
        face: AiFinding,
        speech: AiFinding,
        answers: &SurveyAnswers,
        birth: NaiveDate,
        today: NaiveDate,
    ) -> TriageResult<ScoreBreakdown> {
        answers.validate_against(&self.scale)?;

        let orientation = orientation::evaluate(
            self.orientation_policy,
            birth,
            today,
            answers.guessed_month(),
            answers.guessed_age(),
        );

        let survey_points = answers.total();
        let face_points = if face.detected {
            self.scale.weight_face()
        } else {
            0
        };
        let speech_points = if speech.detected {
            self.scale.weight_speech()
        } else {
            0
        };

        let total_score = survey_points + face_points + speech_points + orientation.score;
        let percentage = percentage_of(total_score, self.scale.percentage_factor());

        Ok(ScoreBreakdown {
            orientation,
            survey_points,
            face_points,
            speech_points,
            total_score,
            percentage,
        })
    }
}

fn percentage_of(total_score: u32, factor: f64) -> u32 {
    let raw = (f64::from(total_score) * factor).round();
    (raw as u32).min(MAX_PERCENTAGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::ScaleVersion;
    use triage_types::Probability;

    fn finding(detected: bool, probability: f64) -> AiFinding {
        AiFinding {
            detected,
            probability: Probability::new(probability).expect("probability"),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("date")
    }

    #[test]
    fn doubles_positive_ai_findings_on_the_second_quick_scale() {
        // Face detected (0.81), speech not (0.2), gaze abnormal, arm normal,
        // both orientation guesses wrong: 1 + 1 + 0 + 2 + 0 = 4 → 80%.
        let aggregator = ScoreAggregator::new(
            ScalePolicy::for_version(ScaleVersion::QuickV2),
            OrientationPolicy::BothWrong,
        );
        let answers = SurveyAnswers::new(4, 30)
            .with_answer("gaze", 1)
            .with_answer("arm", 0);

        let breakdown = aggregator
            .compute(
                finding(true, 0.81),
                finding(false, 0.2),
                &answers,
                date(1990, 6, 15),
                date(2025, 5, 31),
            )
            .expect("score");

        assert_eq!(breakdown.orientation.score, 1);
        assert_eq!(breakdown.survey_points, 1);
        assert_eq!(breakdown.face_points, 2);
        assert_eq!(breakdown.speech_points, 0);
        assert_eq!(breakdown.total_score, 4);
        assert_eq!(breakdown.percentage, 80);
    }

    #[test]
    fn is_deterministic_for_identical_inputs() {
        let aggregator = ScoreAggregator::new(
            ScalePolicy::for_version(ScaleVersion::QuickV1),
            OrientationPolicy::BothWrong,
        );
        let answers = SurveyAnswers::new(5, 34)
            .with_answer("gaze", 1)
            .with_answer("arm", 1);

        let run = || {
            aggregator
                .compute(
                    finding(true, 0.9),
                    finding(true, 0.7),
                    &answers,
                    date(1990, 6, 15),
                    date(2025, 5, 31),
                )
                .expect("score")
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn full_quick_scale_reaches_one_hundred_percent() {
        let aggregator = ScoreAggregator::new(
            ScalePolicy::for_version(ScaleVersion::QuickV1),
            OrientationPolicy::BothWrong,
        );
        let answers = SurveyAnswers::new(13, 0)
            .with_answer("gaze", 1)
            .with_answer("arm", 1);

        let breakdown = aggregator
            .compute(
                finding(true, 1.0),
                finding(true, 1.0),
                &answers,
                date(1990, 6, 15),
                date(2025, 5, 31),
            )
            .expect("score");

        assert_eq!(breakdown.total_score, 5);
        assert_eq!(breakdown.percentage, 100);
    }

    #[test]
    fn percentage_is_clamped_at_one_hundred() {
        // QuickV2 can exceed the declared 0–5 scale when both weighted
        // findings are positive; the percentage still caps at 100.
        let aggregator = ScoreAggregator::new(
            ScalePolicy::for_version(ScaleVersion::QuickV2),
            OrientationPolicy::BothWrong,
        );
        let answers = SurveyAnswers::new(13, 0)
            .with_answer("gaze", 1)
            .with_answer("arm", 1);

        let breakdown = aggregator
            .compute(
                finding(true, 1.0),
                finding(true, 1.0),
                &answers,
                date(1990, 6, 15),
                date(2025, 5, 31),
            )
            .expect("score");

        assert_eq!(breakdown.total_score, 7);
        assert_eq!(breakdown.percentage, 100);
    }

    #[test]
    fn refuses_to_score_an_invalid_survey() {
        let aggregator = ScoreAggregator::new(
            ScalePolicy::for_version(ScaleVersion::QuickV1),
            OrientationPolicy::BothWrong,
        );
        let answers = SurveyAnswers::new(5, 34).with_answer("gaze", 1);

        let err = aggregator
            .compute(
                finding(false, 0.1),
                finding(false, 0.1),
                &answers,
                date(1990, 6, 15),
                date(2025, 5, 31),
            )
            .unwrap_err();
        assert!(matches!(err, crate::TriageError::MissingSurveyField("arm")));
    }
}
