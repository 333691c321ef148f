//! Constants used throughout the triage core crate.
//!
//! Values that mirror the deployed service configuration live here so that
//! the defaults are defined exactly once.

use std::time::Duration;

/// Mean Earth radius in kilometres, used by the haversine distance.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Default expanding-search radius ladder in kilometres, ascending.
pub const DEFAULT_RADIUS_LADDER_KM: [f64; 5] = [10.0, 30.0, 50.0, 70.0, 100.0];

/// Default number of nearby hospitals returned by a proximity search.
pub const DEFAULT_NEAREST_COUNT: usize = 6;

/// Minimum number of characters a hospital name search keyword must have.
pub const MIN_SEARCH_KEYWORD_CHARS: usize = 2;

/// Separator between the start and end time of an opening-hours slot.
pub const SCHEDULE_SLOT_SEPARATOR: char = '~';

/// Time format of each half of an opening-hours slot ("09:00").
pub const SCHEDULE_TIME_FORMAT: &str = "%H:%M";

/// Default timeout applied to predictor and advisory generator calls.
pub const DEFAULT_UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

/// Upper bound of the severity percentage scale.
pub const MAX_PERCENTAGE: u32 = 100;
