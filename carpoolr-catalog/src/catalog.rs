use carpoolr_core::identity;
use carpoolr_core::ride::{Ride, RideDraft};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

/// The set of published rides, newest first. Persists as a bare JSON array.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RideCatalog {
    rides: Vec<Ride>,
}

impl RideCatalog {
    pub fn new() -> Self {
        Self { rides: Vec::new() }
    }

    pub fn from_rides(rides: Vec<Ride>) -> Self {
        Self { rides }
    }

    /// Publish a new ride from raw draft fields and insert it at the head.
    ///
    /// `seats` defaults to 1 when absent and clamps negative input to 0;
    /// `price` defaults to 0 the same way. Location text is taken as-is —
    /// empty strings are allowed and no duplicate detection is done.
    pub fn publish(&mut self, draft: RideDraft) -> Ride {
        let ride = Ride {
            id: identity::new_id(),
            from: draft.from,
            to: draft.to,
            date: draft.date,
            time: draft.time,
            seats: draft.seats.map_or(1, |s| s.max(0) as u32),
            price: draft.price.map_or(0, |p| p.max(0)),
            driver: draft.driver,
            car: draft.car,
        };
        info!("Ride published: {} ({} -> {})", ride.id, ride.from, ride.to);
        self.rides.insert(0, ride.clone());
        ride
    }

    pub fn get(&self, id: Uuid) -> Option<&Ride> {
        self.rides.iter().find(|r| r.id == id)
    }

    /// Apply a seat delta to the one matching ride, leaving every other
    /// entry and the overall order untouched. Decrements saturate at zero.
    pub fn adjust_seats(&mut self, id: Uuid, delta: i32) -> bool {
        match self.rides.iter_mut().find(|r| r.id == id) {
            Some(ride) => {
                ride.seats = if delta < 0 {
                    ride.seats.saturating_sub(delta.unsigned_abs())
                } else {
                    ride.seats + delta as u32
                };
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ride> {
        self.rides.iter()
    }

    pub fn len(&self) -> usize {
        self.rides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rides.is_empty()
    }
}
