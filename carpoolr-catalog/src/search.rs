use carpoolr_core::ride::Ride;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::RideCatalog;

/// Rider-supplied filter over the ride catalog. Empty text criteria and an
/// unset date match everything; the seat count is a minimum threshold.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub from: String,
    pub to: String,
    pub date: Option<NaiveDate>,
    pub seats: u32,
}

impl SearchCriteria {
    /// The UI's default query: today's date, one seat, no route filter.
    pub fn for_today() -> Self {
        Self {
            date: Some(Utc::now().date_naive()),
            seats: 1,
            ..Self::default()
        }
    }
}

/// Filter the catalog against the criteria.
///
/// Pure with respect to the catalog: recomputing with the same inputs gives
/// the same result, and the catalog's newest-first order is preserved.
/// Route criteria match case-insensitively on substrings; the date must
/// match exactly when set; a ride qualifies on seats when it has at least
/// `max(1, criteria.seats)` remaining. All predicates are ANDed.
pub fn search(catalog: &RideCatalog, criteria: &SearchCriteria) -> Vec<Ride> {
    let from = criteria.from.to_lowercase();
    let to = criteria.to.to_lowercase();
    let min_seats = criteria.seats.max(1);

    catalog
        .iter()
        .filter(|r| from.is_empty() || r.from.to_lowercase().contains(&from))
        .filter(|r| to.is_empty() || r.to.to_lowercase().contains(&to))
        .filter(|r| criteria.date.map_or(true, |d| r.date == d))
        .filter(|r| r.seats >= min_seats)
        .cloned()
        .collect()
}
