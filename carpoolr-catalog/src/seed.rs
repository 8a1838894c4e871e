use carpoolr_core::identity;
use carpoolr_core::ride::Ride;
use chrono::{NaiveTime, Utc};

use crate::catalog::RideCatalog;

/// Build the first-run example catalog so the ride list is non-empty before
/// anyone has published. Routes and prices are fixed; dates are today so
/// the default search query finds them.
pub fn seed_catalog() -> RideCatalog {
    let today = Utc::now().date_naive();
    let ride = |from: &str, to: &str, hm: (u32, u32), seats: u32, price: i64, driver: &str, car: &str| Ride {
        id: identity::new_id(),
        from: from.to_string(),
        to: to.to_string(),
        date: today,
        time: NaiveTime::from_hms_opt(hm.0, hm.1, 0).unwrap_or_default(),
        seats,
        price,
        driver: driver.to_string(),
        car: car.to_string(),
    };

    RideCatalog::from_rides(vec![
        ride("Noida Sec 62", "Gurugram Cyberhub", (9, 0), 3, 180, "Rohit", "WagonR"),
        ride("Indirapuram", "Noida Sec 16", (9, 30), 2, 80, "Sanya", "i20"),
        ride("Greater Noida", "Noida Sec 62", (8, 30), 1, 130, "Vikas", "Punch EV"),
    ])
}
