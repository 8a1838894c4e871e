use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A published offer of transportation with a fixed route, schedule and
/// remaining seat capacity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ride {
    pub id: Uuid,
    pub from: String,
    pub to: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// Remaining capacity. Only the reservation engine moves this, by ±1.
    pub seats: u32,
    pub price: i64,
    pub driver: String,
    pub car: String,
}

/// Raw field set for a ride before publication. Seat and price counts
/// arrive unvalidated and are coerced during publish.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RideDraft {
    pub from: String,
    pub to: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub seats: Option<i64>,
    pub price: Option<i64>,
    pub driver: String,
    pub car: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ride_deserialization() {
        let json = r#"
            {
                "id": "7f2c1a34-9b1d-4e5f-8a6b-0c1d2e3f4a5b",
                "from": "Noida Sec 62",
                "to": "Gurugram Cyberhub",
                "date": "2025-01-15",
                "time": "09:00:00",
                "seats": 3,
                "price": 180,
                "driver": "Rohit",
                "car": "WagonR"
            }
        "#;
        let ride: Ride = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(ride.from, "Noida Sec 62");
        assert_eq!(ride.date, NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
        assert_eq!(ride.seats, 3);
    }
}
