use serde::{Deserialize, Serialize};

/// The single local user. Created with placeholder defaults on first run
/// and edited freely; the reservation engine only ever reads it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub phone: String,
}

impl UserProfile {
    /// Both name and phone are required before a seat can be booked.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.phone.is_empty()
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "Guest".to_string(),
            phone: String::new(),
        }
    }
}
