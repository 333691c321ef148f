//! # Triage Core
//!
//! Core engines for a stroke self-triage service:
//! - **Scoring**: fuses AI face/speech findings, a versioned symptom survey
//!   and a cognitive-orientation check into a composite severity score
//!   ([`scoring`], [`orientation`], [`scale`], [`survey`]).
//! - **Hospital matching**: locates nearby hospitals by expanding-radius
//!   search and evaluates their live operating status ([`directory`],
//!   [`proximity`], [`availability`], [`geo`]).
//!
//! Everything here is a request-scoped, synchronous, side-effect-free
//! computation over data supplied by the caller. **No API concerns**:
//! authentication, HTTP serialization and persistence belong to the layers
//! around this crate, and the AI predictors plus the advisory generator are
//! reached only through the traits in [`upstream`].

pub mod availability;
pub mod clock;
pub mod config;
pub mod constants;
pub mod diagnosis;
pub mod directory;
pub mod error;
pub mod geo;
pub mod hospital;
pub mod lifestyle;
pub mod narrative;
pub mod orientation;
pub mod proximity;
pub mod scale;
pub mod scoring;
pub mod survey;
pub mod upstream;

pub use availability::{is_open_now, Availability};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::CoreConfig;
pub use diagnosis::{
    DiagnosisId, DiagnosisRecord, RankedHospital, SurveyOutcome, TriageOutcome, TriageService,
    UserId,
};
pub use directory::HospitalDirectory;
pub use error::{TriageError, TriageResult, UpstreamService};
pub use geo::haversine_km;
pub use hospital::{Hospital, HospitalId, WeeklySchedule};
pub use orientation::{OrientationAssessment, OrientationPolicy};
pub use proximity::{ProximityResult, ProximitySearch};
pub use scale::{ScalePolicy, ScaleVersion, SurveyFieldSpec};
pub use scoring::{ScoreAggregator, ScoreBreakdown};
pub use survey::SurveyAnswers;
pub use upstream::{AdvisoryGenerator, AiFinding, Modality, PredictionWire, SymptomPredictor};

pub use triage_types::{GeoPoint, Probability};
