use carpoolr_core::booking::Booking;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// All bookings of the local rider, newest first. Persists as a bare JSON
/// array; most-recent-first ordering is part of the listing contract.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingLedger {
    bookings: Vec<Booking>,
}

impl BookingLedger {
    pub fn new() -> Self {
        Self {
            bookings: Vec::new(),
        }
    }

    pub fn from_bookings(bookings: Vec<Booking>) -> Self {
        Self { bookings }
    }

    /// Insert at the head: listings show the newest booking first.
    pub fn push_front(&mut self, booking: Booking) {
        self.bookings.insert(0, booking);
    }

    pub fn get(&self, id: Uuid) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    /// Remove by identifier, returning the booking when it was present.
    pub fn remove(&mut self, id: Uuid) -> Option<Booking> {
        let index = self.bookings.iter().position(|b| b.id == id)?;
        Some(self.bookings.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Booking> {
        self.bookings.iter()
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carpoolr_core::identity;
    use carpoolr_core::profile::UserProfile;

    fn booking() -> Booking {
        let profile = UserProfile {
            name: "Asha".to_string(),
            phone: "9810012345".to_string(),
        };
        Booking::new(identity::new_id(), &profile)
    }

    #[test]
    fn test_push_front_orders_newest_first() {
        let mut ledger = BookingLedger::new();
        let first = booking();
        let second = booking();
        ledger.push_front(first.clone());
        ledger.push_front(second.clone());

        let ids: Vec<Uuid> = ledger.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }

    #[test]
    fn test_remove_by_id() {
        let mut ledger = BookingLedger::new();
        let kept = booking();
        let removed = booking();
        ledger.push_front(kept.clone());
        ledger.push_front(removed.clone());

        let out = ledger.remove(removed.id).unwrap();
        assert_eq!(out.id, removed.id);
        assert_eq!(ledger.len(), 1);
        assert!(ledger.get(kept.id).is_some());
        assert!(ledger.remove(removed.id).is_none());
    }
}
