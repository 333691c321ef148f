//! Validated value types shared across the triage workspace.
//!
//! These wrappers guarantee their invariants at construction time so that
//! downstream code never has to re-check them: a [`Probability`] is always a
//! finite number in `0.0..=1.0`, and a [`GeoPoint`] always carries a latitude
//! in `-90.0..=90.0` and a longitude in `-180.0..=180.0`.

use serde::{Deserialize, Serialize};

/// Errors that can occur when creating a [`Probability`].
#[derive(Debug, thiserror::Error)]
pub enum ProbabilityError {
    /// The input was NaN or infinite
    #[error("probability must be a finite number")]
    NotFinite,
    /// The input was outside the unit interval
    #[error("probability must be within 0.0..=1.0 (got {0})")]
    OutOfRange(f64),
}

/// A probability value guaranteed to lie in the unit interval.
///
/// AI predictors report a confidence per modality; this type rejects anything
/// outside `0.0..=1.0` (and non-finite values) at the boundary, so scoring
/// code can treat the inner value as trustworthy.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Probability(f64);

impl Probability {
    /// Creates a new `Probability` from the given value.
    ///
    /// # Errors
    ///
    /// Returns `ProbabilityError::NotFinite` for NaN or infinite input, and
    /// `ProbabilityError::OutOfRange` for values outside `0.0..=1.0`.
    pub fn new(value: f64) -> Result<Self, ProbabilityError> {
        if !value.is_finite() {
            return Err(ProbabilityError::NotFinite);
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(ProbabilityError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Returns the inner value.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for Probability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Probability {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_f64(self.0)
    }
}

impl<'de> Deserialize<'de> for Probability {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Probability::new(value).map_err(serde::de::Error::custom)
    }
}

/// Errors that can occur when creating a [`GeoPoint`].
#[derive(Debug, thiserror::Error)]
pub enum CoordinateError {
    /// One of the coordinates was NaN or infinite
    #[error("coordinates must be finite numbers")]
    NotFinite,
    /// The latitude was outside the valid range
    #[error("latitude must be within -90.0..=90.0 (got {0})")]
    LatitudeOutOfRange(f64),
    /// The longitude was outside the valid range
    #[error("longitude must be within -180.0..=180.0 (got {0})")]
    LongitudeOutOfRange(f64),
}

#[derive(Debug, Deserialize, Serialize)]
struct GeoPointWire {
    latitude: f64,
    longitude: f64,
}

/// A WGS84 coordinate pair in degrees, range-checked at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    /// Creates a new `GeoPoint` from latitude and longitude in degrees.
    ///
    /// # Errors
    ///
    /// Returns a `CoordinateError` if either coordinate is non-finite or
    /// outside its valid range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(CoordinateError::NotFinite);
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinateError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinateError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in degrees.
    pub fn latitude(self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(self) -> f64 {
        self.longitude
    }
}

impl Serialize for GeoPoint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        GeoPointWire {
            latitude: self.latitude,
            longitude: self.longitude,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GeoPoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let wire = GeoPointWire::deserialize(deserializer)?;
        GeoPoint::new(wire.latitude, wire.longitude).map_err(serde::de::Error::custom)
    }
}
