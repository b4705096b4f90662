use serde::{Deserialize, Serialize};

use crate::constants::operating_hours::{DEFAULT_CLOSE, DEFAULT_OPEN};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Venue {
    #[serde(deserialize_with = "super::de_id")]
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    #[serde(deserialize_with = "super::de_id")]
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "super::de_opt_id")]
    pub venue_id: Option<i64>,
    #[serde(default)]
    pub status: String,
    // Some resolvers nest the relation capitalized, some not.
    #[serde(default, alias = "Venue")]
    pub venue: Option<Venue>,
}

impl Field {
    pub fn venue_name(&self) -> &str {
        self.venue.as_ref().map(|v| v.name.as_str()).unwrap_or("-")
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatingHours {
    pub open_hour: u32,
    pub close_hour: u32,
}

impl Default for OperatingHours {
    fn default() -> Self {
        Self {
            open_hour: DEFAULT_OPEN,
            close_hour: DEFAULT_CLOSE,
        }
    }
}

impl OperatingHours {
    /// Bookable hours in one day; never negative.
    pub fn daily_hours(&self) -> u32 {
        self.close_hour.saturating_sub(self.open_hour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_hours() {
        let hours = OperatingHours {
            open_hour: 8,
            close_hour: 18,
        };
        assert_eq!(hours.daily_hours(), 10);
    }

    #[test]
    fn test_daily_hours_never_negative() {
        let hours = OperatingHours {
            open_hour: 20,
            close_hour: 8,
        };
        assert_eq!(hours.daily_hours(), 0);
    }

    #[test]
    fn test_default_hours() {
        assert_eq!(OperatingHours::default().daily_hours(), 16);
    }

    #[test]
    fn test_field_accepts_either_relation_casing() {
        let capitalized: Field = serde_json::from_value(serde_json::json!({
            "id": "1", "name": "Lapangan A", "status": "Ready",
            "Venue": { "id": 2, "name": "GOR Merdeka" }
        }))
        .unwrap();
        assert_eq!(capitalized.venue_name(), "GOR Merdeka");

        let lowered: Field = serde_json::from_value(serde_json::json!({
            "id": 1, "name": "Lapangan A", "status": "Ready",
            "venue": { "id": "2", "name": "GOR Merdeka" }
        }))
        .unwrap();
        assert_eq!(lowered.venue_name(), "GOR Merdeka");

        let bare: Field = serde_json::from_value(serde_json::json!({
            "id": 1, "name": "Lapangan A"
        }))
        .unwrap();
        assert_eq!(bare.venue_name(), "-");
    }
}
