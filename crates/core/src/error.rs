use crate::diagnosis::UserId;
use crate::hospital::HospitalId;
use chrono::Weekday;
use std::time::Duration;

/// External services the triage flow depends on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpstreamService {
    FacePredictor,
    SpeechPredictor,
    AdvisoryGenerator,
}

impl std::fmt::Display for UpstreamService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            UpstreamService::FacePredictor => "face predictor",
            UpstreamService::SpeechPredictor => "speech predictor",
            UpstreamService::AdvisoryGenerator => "advisory generator",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TriageError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("survey field '{field}' value {value} is outside the allowed range {min}..={max}")]
    SurveyValueOutOfRange {
        field: String,
        value: u32,
        min: u32,
        max: u32,
    },
    #[error("survey field '{0}' is not part of the active scale")]
    UnknownSurveyField(String),
    #[error("survey field '{0}' is required by the active scale but missing")]
    MissingSurveyField(&'static str),
    #[error("search keyword must be at least {min_chars} characters")]
    KeywordTooShort { min_chars: usize },
    #[error("no prior AI diagnosis record for user {0}")]
    DiagnosisNotFound(UserId),
    #[error("diagnosis record {0} has already been completed")]
    DiagnosisAlreadyCompleted(crate::diagnosis::DiagnosisId),
    #[error("hospital {0} not found")]
    HospitalNotFound(HospitalId),
    #[error("{service} call failed: {reason}")]
    Upstream {
        service: UpstreamService,
        reason: String,
    },
    #[error("{service} call timed out after {timeout:?}")]
    UpstreamTimeout {
        service: UpstreamService,
        timeout: Duration,
    },
    #[error("malformed opening hours {value:?} for {weekday}")]
    MalformedOpeningHours { weekday: Weekday, value: String },
}

pub type TriageResult<T> = std::result::Result<T, TriageError>;
