//! Diagnosis records and the survey-completion flow.
//!
//! A [`DiagnosisRecord`] is created when the AI step runs, updated exactly
//! once when the survey completes, and read-only from then on. Persistence
//! belongs to the caller; [`TriageService`] only computes.

use crate::clock::Clock;
use crate::config::CoreConfig;
use crate::directory::HospitalDirectory;
use crate::error::{TriageError, TriageResult};
use crate::hospital::HospitalId;
use crate::proximity::ProximitySearch;
use crate::scale::{ScalePolicy, ScaleVersion};
use crate::scoring::{ScoreAggregator, ScoreBreakdown};
use crate::survey::SurveyAnswers;
use crate::upstream::{AdvisoryGenerator, AiFinding};
use crate::{availability, narrative};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use triage_types::GeoPoint;

pub type UserId = u64;
pub type DiagnosisId = u64;

/// Result of completing the survey step on a record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyOutcome {
    pub answers: SurveyAnswers,
    pub breakdown: ScoreBreakdown,
    /// Absent when the advisory generator failed; the numeric score above is
    /// still authoritative.
    pub advisory: Option<String>,
}

/// One user's diagnosis record across the two assessment steps.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisRecord {
    id: DiagnosisId,
    user_id: UserId,
    /// Scale the record was (or will be) scored under, resolved at creation
    /// so the record stays interpretable across scale revisions.
    scale: ScaleVersion,
    face: AiFinding,
    speech: AiFinding,
    created_at: NaiveDateTime,
    survey: Option<SurveyOutcome>,
}

impl DiagnosisRecord {
    /// Creates the record the AI step produces.
    pub fn from_ai_step(
        id: DiagnosisId,
        user_id: UserId,
        scale: ScaleVersion,
        face: AiFinding,
        speech: AiFinding,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            user_id,
            scale,
            face,
            speech,
            created_at,
            survey: None,
        }
    }

    pub fn id(&self) -> DiagnosisId {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn scale(&self) -> ScaleVersion {
        self.scale
    }

    pub fn face(&self) -> AiFinding {
        self.face
    }

    pub fn speech(&self) -> AiFinding {
        self.speech
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    pub fn is_complete(&self) -> bool {
        self.survey.is_some()
    }

    pub fn survey(&self) -> Option<&SurveyOutcome> {
        self.survey.as_ref()
    }

    pub fn total_score(&self) -> Option<u32> {
        self.survey.as_ref().map(|s| s.breakdown.total_score)
    }

    pub fn percentage(&self) -> Option<u32> {
        self.survey.as_ref().map(|s| s.breakdown.percentage)
    }

    /// Attaches the survey outcome. Allowed exactly once.
    ///
    /// # Errors
    ///
    /// Returns `TriageError::DiagnosisAlreadyCompleted` if the survey step
    /// already ran for this record.
    fn complete(&mut self, outcome: SurveyOutcome) -> TriageResult<()> {
        if self.survey.is_some() {
            return Err(TriageError::DiagnosisAlreadyCompleted(self.id));
        }
        self.survey = Some(outcome);
        Ok(())
    }
}

/// A hospital ranked for the response: distance plus live status.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RankedHospital {
    pub hospital_id: HospitalId,
    pub name: String,
    pub distance_km: f64,
    pub stroke_center: bool,
    pub open: bool,
}

/// Everything the survey step returns to the caller.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TriageOutcome {
    pub breakdown: ScoreBreakdown,
    pub narrative: String,
    pub advisory: Option<String>,
    pub nearby: Vec<RankedHospital>,
}

/// Orchestrates the survey-completion flow over the pure engines.
pub struct TriageService {
    config: CoreConfig,
    directory: HospitalDirectory,
}

impl TriageService {
    pub fn new(config: CoreConfig, directory: HospitalDirectory) -> Self {
        Self { config, directory }
    }

    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    pub fn directory(&self) -> &HospitalDirectory {
        &self.directory
    }

    /// Completes the survey step for a user.
    ///
    /// The caller supplies the latest AI-step record for the user (or `None`
    /// when there is none); the record is updated exactly once with the
    /// outcome. An advisory-generator failure degrades only the advisory
    /// text — the numeric score is computed first and always returned.
    ///
    /// # Errors
    ///
    /// Returns `TriageError::DiagnosisNotFound` when no prior record exists,
    /// `TriageError::DiagnosisAlreadyCompleted` when the survey already ran,
    /// the survey's own validation errors, and
    /// `TriageError::MalformedOpeningHours` if a ranked hospital carries a
    /// malformed schedule.
    pub fn complete_survey(
        &self,
        user_id: UserId,
        record: Option<&mut DiagnosisRecord>,
        answers: SurveyAnswers,
        birth: NaiveDate,
        location: GeoPoint,
        advisory_generator: &dyn AdvisoryGenerator,
        clock: &dyn Clock,
    ) -> TriageResult<TriageOutcome> {
        let record = record.ok_or(TriageError::DiagnosisNotFound(user_id))?;
        if record.is_complete() {
            return Err(TriageError::DiagnosisAlreadyCompleted(record.id));
        }

        let scale = ScalePolicy::for_version(record.scale);
        let aggregator = ScoreAggregator::new(scale, self.config.orientation_policy());
        let breakdown = aggregator.compute(
            record.face,
            record.speech,
            &answers,
            birth,
            clock.today(),
        )?;

        let narrative = narrative::render(
            aggregator.scale(),
            &answers,
            record.face,
            record.speech,
            &breakdown,
        );

        let advisory =
            match advisory_generator.advise(&narrative, self.config.upstream_timeout()) {
                Ok(text) => Some(text),
                Err(error) => {
                    tracing::warn!(user_id, %error, "advisory generation failed; returning score without advisory");
                    None
                }
            };

        let nearby = self.rank_nearby(location, clock)?;

        record.complete(SurveyOutcome {
            answers,
            breakdown: breakdown.clone(),
            advisory: advisory.clone(),
        })?;

        Ok(TriageOutcome {
            breakdown,
            narrative,
            advisory,
            nearby,
        })
    }

    /// Ranks the nearest hospitals with their live operating status.
    pub fn rank_nearby(
        &self,
        location: GeoPoint,
        clock: &dyn Clock,
    ) -> TriageResult<Vec<RankedHospital>> {
        let search = ProximitySearch::new(&self.directory, self.config.radius_ladder_km());
        let results = search.nearest(location, self.config.nearest_count());

        let mut ranked = Vec::with_capacity(results.len());
        for result in results {
            let hospital = self.directory.get(result.hospital_id)?;
            let open = availability::is_open_now(hospital, clock)?;
            ranked.push(RankedHospital {
                hospital_id: hospital.id,
                name: hospital.name.clone(),
                distance_km: result.distance_km,
                stroke_center: hospital.stroke_center,
                open,
            });
        }
        Ok(ranked)
    }
}
