use carpoolr_catalog::RideCatalog;
use carpoolr_core::booking::Booking;
use carpoolr_core::profile::UserProfile;
use tracing::info;
use uuid::Uuid;

use crate::ledger::BookingLedger;

/// Reservation failures. All recoverable: every variant leaves the catalog
/// and ledger exactly as they were.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReservationError {
    #[error("profile is incomplete: name and phone are required to book")]
    IncompleteProfile,

    #[error("ride {0} has no seats left")]
    SoldOut(Uuid),

    #[error("ride {0} is not in the catalog")]
    UnknownRide(Uuid),

    #[error("booking {0} is not in the ledger")]
    UnknownBooking(Uuid),
}

/// Reserve one seat on a ride for the local rider.
///
/// Preconditions run in order and the first failure wins: the profile must
/// carry a name and phone, the ride must exist, and it must have a seat
/// left. On success the booking lands at the head of the ledger and the
/// ride's seat count drops by exactly one, both within this call, so no
/// caller ever observes one mutation without the other.
pub fn reserve_seat(
    ride_id: Uuid,
    profile: &UserProfile,
    catalog: &mut RideCatalog,
    ledger: &mut BookingLedger,
) -> Result<Booking, ReservationError> {
    if !profile.is_complete() {
        return Err(ReservationError::IncompleteProfile);
    }

    let ride = catalog
        .get(ride_id)
        .ok_or(ReservationError::UnknownRide(ride_id))?;
    if ride.seats == 0 {
        return Err(ReservationError::SoldOut(ride_id));
    }

    let booking = Booking::new(ride_id, profile);
    ledger.push_front(booking.clone());
    catalog.adjust_seats(ride_id, -1);

    info!("Seat booked: ride {} booking {}", ride_id, booking.id);
    Ok(booking)
}

/// Cancel a booking and restore its seat.
///
/// The seat goes back to the referenced ride when that ride is still in
/// the catalog; a vanished ride skips the restore silently, and the
/// booking is removed either way. Only an unknown booking id fails.
pub fn cancel_booking(
    booking_id: Uuid,
    catalog: &mut RideCatalog,
    ledger: &mut BookingLedger,
) -> Result<Booking, ReservationError> {
    let booking = ledger
        .remove(booking_id)
        .ok_or(ReservationError::UnknownBooking(booking_id))?;

    if catalog.adjust_seats(booking.ride_id, 1) {
        info!(
            "Booking cancelled: {} (seat restored to ride {})",
            booking.id, booking.ride_id
        );
    } else {
        info!(
            "Booking cancelled: {} (ride {} no longer listed, no seat to restore)",
            booking.id, booking.ride_id
        );
    }
    Ok(booking)
}
