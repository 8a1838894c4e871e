pub mod booking;
pub mod identity;
pub mod money;
pub mod profile;
pub mod ride;

pub use booking::Booking;
pub use profile::UserProfile;
pub use ride::{Ride, RideDraft};
