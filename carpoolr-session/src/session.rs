use std::sync::Arc;

use carpoolr_catalog::{search, seed, RideCatalog, SearchCriteria};
use carpoolr_core::booking::Booking;
use carpoolr_core::profile::UserProfile;
use carpoolr_core::ride::{Ride, RideDraft};
use carpoolr_ledger::{cancel_booking, reserve_seat, BookingLedger, ReservationError};
use carpoolr_store::keys::{BOOKINGS_KEY, RIDES_KEY, USER_KEY};
use carpoolr_store::{AppConfig, BlobStore, JsonFileStore};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

/// One user's working state: the ride catalog, the booking ledger and the
/// profile, loaded from the store at open and written back after every
/// mutation. In-memory state is authoritative for the whole session; a
/// failed write costs nothing until the next reload.
pub struct Session {
    store: Arc<dyn BlobStore>,
    catalog: RideCatalog,
    ledger: BookingLedger,
    profile: UserProfile,
}

impl Session {
    /// Load the three collections, seeding the catalog with the example
    /// rides when this store has never held one. An emptied or unreadable
    /// catalog blob still counts as held, so seeding happens at most once
    /// per store.
    pub fn open(store: Arc<dyn BlobStore>) -> Self {
        let first_run = !store.contains(RIDES_KEY);

        let catalog = if first_run {
            info!("First run: seeding example rides");
            seed::seed_catalog()
        } else {
            load_or(store.as_ref(), RIDES_KEY, RideCatalog::new)
        };
        let ledger = load_or(store.as_ref(), BOOKINGS_KEY, BookingLedger::new);
        let profile = load_or(store.as_ref(), USER_KEY, UserProfile::default);

        let session = Self {
            store,
            catalog,
            ledger,
            profile,
        };
        if first_run {
            session.persist(RIDES_KEY, &session.catalog);
        }
        session
    }

    /// Open against a file-backed store in the configured data directory.
    pub fn open_with_config(config: &AppConfig) -> Self {
        Self::open(Arc::new(JsonFileStore::new(&config.store.data_dir)))
    }

    pub fn rides(&self) -> impl Iterator<Item = &Ride> {
        self.catalog.iter()
    }

    pub fn bookings(&self) -> impl Iterator<Item = &Booking> {
        self.ledger.iter()
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// The ride a booking points at, if it is still listed. Vanished rides
    /// are not an error; listings render them as blanks.
    pub fn ride_for(&self, booking: &Booking) -> Option<&Ride> {
        self.catalog.get(booking.ride_id)
    }

    pub fn search(&self, criteria: &SearchCriteria) -> Vec<Ride> {
        search(&self.catalog, criteria)
    }

    pub fn publish_ride(&mut self, draft: RideDraft) -> Ride {
        let ride = self.catalog.publish(draft);
        self.persist(RIDES_KEY, &self.catalog);
        ride
    }

    pub fn reserve_seat(&mut self, ride_id: Uuid) -> Result<Booking, ReservationError> {
        let booking = reserve_seat(ride_id, &self.profile, &mut self.catalog, &mut self.ledger)?;
        self.persist(RIDES_KEY, &self.catalog);
        self.persist(BOOKINGS_KEY, &self.ledger);
        Ok(booking)
    }

    pub fn cancel_booking(&mut self, booking_id: Uuid) -> Result<Booking, ReservationError> {
        let booking = cancel_booking(booking_id, &mut self.catalog, &mut self.ledger)?;
        self.persist(RIDES_KEY, &self.catalog);
        self.persist(BOOKINGS_KEY, &self.ledger);
        Ok(booking)
    }

    pub fn update_profile(&mut self, profile: UserProfile) {
        self.profile = profile;
        self.persist(USER_KEY, &self.profile);
    }

    fn persist<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_value(value) {
            Ok(blob) => self.store.save(key, &blob),
            Err(e) => warn!("Could not encode {} for persistence: {}", key, e),
        }
    }
}

/// Load a collection, falling back when the key is absent or the blob does
/// not decode. Decode failures degrade exactly like corruption below the
/// store boundary: log and start from the fallback.
fn load_or<T, F>(store: &dyn BlobStore, key: &str, fallback: F) -> T
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    match store.load(key) {
        Some(blob) => match serde_json::from_value(blob) {
            Ok(value) => value,
            Err(e) => {
                warn!("Stored {} does not decode, starting fresh: {}", key, e);
                fallback()
            }
        },
        None => fallback(),
    }
}
