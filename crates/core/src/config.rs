//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and passed into the
//! services, rather than read ambiently during request handling. The
//! constructor validates everything up front so that a bad deployment fails
//! at boot, not mid-request.

use crate::constants::{DEFAULT_NEAREST_COUNT, DEFAULT_RADIUS_LADDER_KM, DEFAULT_UPSTREAM_TIMEOUT};
use crate::error::{TriageError, TriageResult};
use crate::orientation::OrientationPolicy;
use crate::scale::ScaleVersion;
use std::time::Duration;

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    scale_version: ScaleVersion,
    orientation_policy: OrientationPolicy,
    radius_ladder_km: Vec<f64>,
    nearest_count: usize,
    upstream_timeout: Duration,
}

impl CoreConfig {
    /// Creates a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns `TriageError::InvalidInput` when the radius ladder is empty,
    /// not strictly ascending, or contains a non-positive or non-finite
    /// rung; when `nearest_count` is zero; or when the upstream timeout is
    /// zero.
    pub fn new(
        scale_version: ScaleVersion,
        orientation_policy: OrientationPolicy,
        radius_ladder_km: Vec<f64>,
        nearest_count: usize,
        upstream_timeout: Duration,
    ) -> TriageResult<Self> {
        if radius_ladder_km.is_empty() {
            return Err(TriageError::InvalidInput(
                "radius ladder must have at least one rung".into(),
            ));
        }
        for window in radius_ladder_km.windows(2) {
            if window[1] <= window[0] {
                return Err(TriageError::InvalidInput(
                    "radius ladder must be strictly ascending".into(),
                ));
            }
        }
        if radius_ladder_km
            .iter()
            .any(|r| !r.is_finite() || *r <= 0.0)
        {
            return Err(TriageError::InvalidInput(
                "radius ladder rungs must be positive finite distances".into(),
            ));
        }
        if nearest_count == 0 {
            return Err(TriageError::InvalidInput(
                "nearest count must be at least 1".into(),
            ));
        }
        if upstream_timeout.is_zero() {
            return Err(TriageError::InvalidInput(
                "upstream timeout must be non-zero".into(),
            ));
        }

        Ok(Self {
            scale_version,
            orientation_policy,
            radius_ladder_km,
            nearest_count,
            upstream_timeout,
        })
    }

    pub fn scale_version(&self) -> ScaleVersion {
        self.scale_version
    }

    pub fn orientation_policy(&self) -> OrientationPolicy {
        self.orientation_policy
    }

    pub fn radius_ladder_km(&self) -> &[f64] {
        &self.radius_ladder_km
    }

    pub fn nearest_count(&self) -> usize {
        self.nearest_count
    }

    pub fn upstream_timeout(&self) -> Duration {
        self.upstream_timeout
    }
}

impl Default for CoreConfig {
    /// The configuration of the original deployment: quick scale, orientation
    /// abnormal only when both guesses are wrong, the 10–100 km ladder with
    /// six results, a ten second upstream timeout.
    fn default() -> Self {
        Self {
            scale_version: ScaleVersion::QuickV1,
            orientation_policy: OrientationPolicy::BothWrong,
            radius_ladder_km: DEFAULT_RADIUS_LADDER_KM.to_vec(),
            nearest_count: DEFAULT_NEAREST_COUNT,
            upstream_timeout: DEFAULT_UPSTREAM_TIMEOUT,
        }
    }
}
