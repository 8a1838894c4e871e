use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::identity;
use crate::profile::UserProfile;

/// A rider's claim on one seat of a specific ride.
///
/// Bookings reference their ride by id only and may outlive it; a lookup
/// against a vanished ride yields nothing rather than an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub ride_id: Uuid,
    pub rider: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(ride_id: Uuid, profile: &UserProfile) -> Self {
        Self {
            id: identity::new_id(),
            ride_id,
            rider: profile.name.clone(),
            phone: profile.phone.clone(),
            created_at: Utc::now(),
        }
    }
}
