//! Interfaces to the external AI services.
//!
//! The predictors and the advisory generator run elsewhere; this module fixes
//! their wire shapes and the traits the triage flow calls through. Failures
//! surface as typed upstream errors with no retry — retry policy belongs to
//! the orchestrating caller.

use crate::error::{TriageError, TriageResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use triage_types::Probability;

/// The two AI-screened modalities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modality {
    Face,
    Speech,
}

/// One AI prediction: whether the symptom was detected, and with what
/// confidence.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AiFinding {
    pub detected: bool,
    pub probability: Probability,
}

/// Wire shape of a predictor response: `{ "prediction": 0|1, "probability": p }`.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct PredictionWire {
    pub prediction: u8,
    pub probability: f64,
}

impl TryFrom<PredictionWire> for AiFinding {
    type Error = TriageError;

    fn try_from(wire: PredictionWire) -> TriageResult<Self> {
        if wire.prediction > 1 {
            return Err(TriageError::InvalidInput(format!(
                "prediction must be 0 or 1 (got {})",
                wire.prediction
            )));
        }
        let probability = Probability::new(wire.probability)
            .map_err(|e| TriageError::InvalidInput(e.to_string()))?;
        Ok(AiFinding {
            detected: wire.prediction == 1,
            probability,
        })
    }
}

/// A per-modality symptom predictor (face video, speech audio).
pub trait SymptomPredictor {
    /// Runs one prediction over the uploaded media.
    ///
    /// # Errors
    ///
    /// Returns `TriageError::Upstream` on failure and
    /// `TriageError::UpstreamTimeout` when `timeout` elapses.
    fn predict(&self, modality: Modality, media: &[u8], timeout: Duration)
        -> TriageResult<AiFinding>;
}

/// The natural-language advisory generator.
pub trait AdvisoryGenerator {
    /// Produces advisory text from a structured symptom narrative.
    ///
    /// # Errors
    ///
    /// Returns `TriageError::Upstream` on failure and
    /// `TriageError::UpstreamTimeout` when `timeout` elapses. Callers must
    /// treat a failure as fatal only to the advisory text, never to the
    /// numeric score.
    fn advise(&self, narrative: &str, timeout: Duration) -> TriageResult<String>;
}
