//! Expanding-radius nearest-neighbour search.
//!
//! The hospital set is sparse in places, so a single fixed radius either
//! over-fetches in a city or returns nothing in the countryside. Instead the
//! search walks an ascending radius ladder, merging each step's hits
//! first-seen-wins into an insertion-ordered accumulator and stopping as soon
//! as the quota is met. A hospital recorded at one step is never overwritten
//! by a later step, which keeps its distance stable and the merge idempotent.

use crate::directory::HospitalDirectory;
use crate::hospital::HospitalId;
use serde::Serialize;
use std::collections::HashSet;
use triage_types::GeoPoint;

/// One ranked hit: hospital and its distance from the query point.
///
/// Ephemeral — produced fresh per query, never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ProximityResult {
    pub hospital_id: HospitalId,
    pub distance_km: f64,
}

/// Nearest-neighbour ranking over a [`HospitalDirectory`].
pub struct ProximitySearch<'a> {
    directory: &'a HospitalDirectory,
    ladder_km: &'a [f64],
}

impl<'a> ProximitySearch<'a> {
    /// Creates a search over the given directory and ascending radius ladder.
    /// The ladder is validated by [`CoreConfig`](crate::config::CoreConfig).
    pub fn new(directory: &'a HospitalDirectory, ladder_km: &'a [f64]) -> Self {
        Self {
            directory,
            ladder_km,
        }
    }

    /// The up-to-`k` nearest hospitals, sorted by distance ascending.
    ///
    /// Fewer than `k` results — or none at all inside the widest radius — is
    /// a valid outcome for a sparse region, not an error. Equal distances
    /// keep their insertion order.
    pub fn nearest(&self, from: GeoPoint, k: usize) -> Vec<ProximityResult> {
        if k == 0 {
            return Vec::new();
        }

        let mut seen: HashSet<HospitalId> = HashSet::new();
        let mut found: Vec<ProximityResult> = Vec::new();

        for &radius_km in self.ladder_km {
            for (hospital, distance_km) in self.directory.within_radius(from, radius_km) {
                if seen.insert(hospital.id) {
                    found.push(ProximityResult {
                        hospital_id: hospital.id,
                        distance_km,
                    });
                }
            }
            if found.len() >= k {
                break;
            }
        }

        found.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
        found.truncate(k);
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_RADIUS_LADDER_KM;
    use crate::hospital::{Hospital, WeeklySchedule};

    // Roughly one degree of latitude in kilometres.
    const KM_PER_LAT_DEGREE: f64 = 111.2;

    fn hospital_at_km(id: HospitalId, km_north: f64) -> Hospital {
        Hospital {
            id,
            name: format!("Hospital {id}"),
            position: GeoPoint::new(km_north / KM_PER_LAT_DEGREE, 0.0).expect("position"),
            address: "1 Test St".into(),
            phone: "02-000-0000".into(),
            emergency: false,
            stroke_center: false,
            schedule: WeeklySchedule::default(),
        }
    }

    fn origin() -> GeoPoint {
        GeoPoint::new(0.0, 0.0).expect("origin")
    }

    #[test]
    fn a_hospital_between_ladder_steps_is_found_exactly_once() {
        let directory = HospitalDirectory::new(vec![hospital_at_km(1, 45.0)]).expect("directory");
        let search = ProximitySearch::new(&directory, &DEFAULT_RADIUS_LADDER_KM);

        let results = search.nearest(origin(), 6);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].hospital_id, 1);
        assert!((results[0].distance_km - 45.0).abs() < 1.0);
    }

    #[test]
    fn early_steps_do_not_duplicate_into_later_ones() {
        // Both hospitals sit inside the first rung; asking for more than the
        // directory holds walks the whole ladder and must still dedup.
        let directory =
            HospitalDirectory::new(vec![hospital_at_km(1, 2.0), hospital_at_km(2, 5.0)])
                .expect("directory");
        let search = ProximitySearch::new(&directory, &DEFAULT_RADIUS_LADDER_KM);

        let results = search.nearest(origin(), 6);
        let ids: Vec<_> = results.iter().map(|r| r.hospital_id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn stops_expanding_once_the_quota_is_met() {
        let directory = HospitalDirectory::new(vec![
            hospital_at_km(1, 2.0),
            hospital_at_km(2, 5.0),
            hospital_at_km(3, 60.0),
        ])
        .expect("directory");
        let search = ProximitySearch::new(&directory, &DEFAULT_RADIUS_LADDER_KM);

        let results = search.nearest(origin(), 2);
        let ids: Vec<_> = results.iter().map(|r| r.hospital_id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn sorts_by_distance_and_truncates_to_k() {
        let directory = HospitalDirectory::new(vec![
            hospital_at_km(1, 8.0),
            hospital_at_km(2, 3.0),
            hospital_at_km(3, 6.0),
        ])
        .expect("directory");
        let search = ProximitySearch::new(&directory, &DEFAULT_RADIUS_LADDER_KM);

        let results = search.nearest(origin(), 2);
        let ids: Vec<_> = results.iter().map(|r| r.hospital_id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn a_sparse_region_returns_an_empty_list_not_an_error() {
        let directory = HospitalDirectory::new(vec![hospital_at_km(1, 500.0)]).expect("directory");
        let search = ProximitySearch::new(&directory, &DEFAULT_RADIUS_LADDER_KM);
        assert!(search.nearest(origin(), 6).is_empty());
    }

    #[test]
    fn equal_distances_keep_insertion_order() {
        // Two hospitals at the same distance north and south of the origin.
        let north = hospital_at_km(1, 10.0);
        let mut south = hospital_at_km(2, 10.0);
        south.position = GeoPoint::new(-10.0 / KM_PER_LAT_DEGREE, 0.0).expect("position");

        let directory = HospitalDirectory::new(vec![north, south]).expect("directory");
        let search = ProximitySearch::new(&directory, &DEFAULT_RADIUS_LADDER_KM);

        let results = search.nearest(origin(), 2);
        let ids: Vec<_> = results.iter().map(|r| r.hospital_id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn zero_k_returns_nothing() {
        let directory = HospitalDirectory::new(vec![hospital_at_km(1, 2.0)]).expect("directory");
        let search = ProximitySearch::new(&directory, &DEFAULT_RADIUS_LADDER_KM);
        assert!(search.nearest(origin(), 0).is_empty());
    }
}
