//! Collection names under which the three persisted blobs live.

pub const RIDES_KEY: &str = "carpoolr_rides";
pub const BOOKINGS_KEY: &str = "carpoolr_bookings";
pub const USER_KEY: &str = "carpoolr_user";
