//! Read-only spatial and text queries over the static hospital set.

use crate::constants::MIN_SEARCH_KEYWORD_CHARS;
use crate::error::{TriageError, TriageResult};
use crate::geo::haversine_km;
use crate::hospital::{Hospital, HospitalId};
use std::collections::HashMap;
use triage_types::GeoPoint;

/// In-memory directory of the hospital reference data.
///
/// Built once from externally seeded records; every query is a pure
/// projection and no record is ever mutated here.
#[derive(Clone, Debug)]
pub struct HospitalDirectory {
    hospitals: Vec<Hospital>,
    by_id: HashMap<HospitalId, usize>,
}

impl HospitalDirectory {
    /// Builds a directory, checking the reference data on the way in:
    /// duplicate ids and malformed schedules are rejected rather than
    /// carried silently into query results.
    ///
    /// # Errors
    ///
    /// Returns `TriageError::InvalidInput` naming the offending record.
    pub fn new(hospitals: Vec<Hospital>) -> TriageResult<Self> {
        let mut by_id = HashMap::with_capacity(hospitals.len());
        for (index, hospital) in hospitals.iter().enumerate() {
            if by_id.insert(hospital.id, index).is_some() {
                return Err(TriageError::InvalidInput(format!(
                    "duplicate hospital id {}",
                    hospital.id
                )));
            }
            hospital.schedule.validate().map_err(|e| {
                TriageError::InvalidInput(format!(
                    "hospital {} ({}): {e}",
                    hospital.id, hospital.name
                ))
            })?;
        }
        Ok(Self { hospitals, by_id })
    }

    pub fn len(&self) -> usize {
        self.hospitals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hospitals.is_empty()
    }

    /// Looks a hospital up by id.
    ///
    /// # Errors
    ///
    /// Returns `TriageError::HospitalNotFound` on a miss — never a default
    /// record or a zero distance.
    pub fn get(&self, id: HospitalId) -> TriageResult<&Hospital> {
        self.by_id
            .get(&id)
            .map(|&index| &self.hospitals[index])
            .ok_or(TriageError::HospitalNotFound(id))
    }

    /// All hospitals inside the bounding box spanned by the south-west and
    /// north-east corners (map marker query).
    pub fn within_bounds(&self, south_west: GeoPoint, north_east: GeoPoint) -> Vec<&Hospital> {
        self.hospitals
            .iter()
            .filter(|hospital| {
                let p = hospital.position;
                p.latitude() >= south_west.latitude()
                    && p.latitude() <= north_east.latitude()
                    && p.longitude() >= south_west.longitude()
                    && p.longitude() <= north_east.longitude()
            })
            .collect()
    }

    /// All hospitals within `radius_km` of `center`, with their distance.
    pub fn within_radius(&self, center: GeoPoint, radius_km: f64) -> Vec<(&Hospital, f64)> {
        self.hospitals
            .iter()
            .filter_map(|hospital| {
                let distance = haversine_km(center, hospital.position);
                (distance <= radius_km).then_some((hospital, distance))
            })
            .collect()
    }

    /// Case-insensitive name substring search, with the distance from the
    /// caller's position attached to each hit.
    ///
    /// # Errors
    ///
    /// Returns `TriageError::KeywordTooShort` when the trimmed keyword has
    /// fewer than two characters.
    pub fn search(&self, from: GeoPoint, keyword: &str) -> TriageResult<Vec<(&Hospital, f64)>> {
        let keyword = keyword.trim();
        if keyword.chars().count() < MIN_SEARCH_KEYWORD_CHARS {
            return Err(TriageError::KeywordTooShort {
                min_chars: MIN_SEARCH_KEYWORD_CHARS,
            });
        }

        let needle = keyword.to_lowercase();
        Ok(self
            .hospitals
            .iter()
            .filter(|hospital| hospital.name.to_lowercase().contains(&needle))
            .map(|hospital| (hospital, haversine_km(from, hospital.position)))
            .collect())
    }
}
