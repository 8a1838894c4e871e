pub mod ledger;
pub mod reservation;

pub use ledger::BookingLedger;
pub use reservation::{cancel_booking, reserve_seat, ReservationError};
