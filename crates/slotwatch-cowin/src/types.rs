//! `CoWIN` API response types.
//!
//! These model the JSON bodies of the public calendar and location
//! endpoints. The live API is loose about numeric types (capacities have been
//! seen as `5.0`, pincodes as numbers), so a few fields go through lenient
//! deserializers.

use serde::de::{self, Deserializer};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// calendarByPin / calendarByDistrict
// ---------------------------------------------------------------------------

/// Body of both calendar endpoints: `{ "centers": [ ... ] }`.
#[derive(Debug, Deserialize)]
pub struct CalendarResponse {
    #[serde(default)]
    pub centers: Vec<CenterRecord>,
}

#[derive(Debug, Deserialize)]
pub struct CenterRecord {
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(deserialize_with = "string_or_number")]
    pub pincode: String,
    /// `"Free"` or `"Paid"`.
    #[serde(default)]
    pub fee_type: String,
    #[serde(default)]
    pub sessions: Vec<SessionRecord>,
}

#[derive(Debug, Deserialize)]
pub struct SessionRecord {
    #[serde(default)]
    pub vaccine: String,
    /// `DD-MM-YYYY`.
    pub date: String,
    #[serde(deserialize_with = "count")]
    pub available_capacity: u32,
    #[serde(default, deserialize_with = "count")]
    pub available_capacity_dose1: u32,
    #[serde(default, deserialize_with = "count")]
    pub available_capacity_dose2: u32,
    #[serde(deserialize_with = "count")]
    pub min_age_limit: u32,
    #[serde(default)]
    pub slots: Vec<String>,
}

// ---------------------------------------------------------------------------
// districts/{state_id}
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct DistrictsResponse {
    pub districts: Vec<District>,
}

/// A district as listed for one state.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct District {
    #[serde(rename = "district_id", deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(rename = "district_name")]
    pub name: String,
}

// ---------------------------------------------------------------------------
// Lenient field deserializers
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(serde_json::Number),
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s,
        StringOrNumber::Number(n) => n.to_string(),
    })
}

/// Non-negative whole number, accepting `5` and `5.0` alike.
fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let n = serde_json::Number::deserialize(deserializer)?;
    if let Some(v) = n.as_u64() {
        return u32::try_from(v).map_err(|_| de::Error::custom(format!("count {v} out of range")));
    }
    match n.as_f64() {
        Some(f) if f >= 0.0 && f.fract() == 0.0 && f <= f64::from(u32::MAX) => {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let whole = f as u32;
            Ok(whole)
        }
        _ => Err(de::Error::custom(format!(
            "expected a non-negative whole number, got {n}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_accepts_float_capacities() {
        let session: SessionRecord = serde_json::from_value(serde_json::json!({
            "vaccine": "COVISHIELD",
            "date": "16-10-2026",
            "available_capacity": 5.0,
            "available_capacity_dose1": 3,
            "available_capacity_dose2": 2.0,
            "min_age_limit": 18,
            "slots": ["09:00AM-11:00AM"]
        }))
        .unwrap();
        assert_eq!(session.available_capacity, 5);
        assert_eq!(session.available_capacity_dose2, 2);
    }

    #[test]
    fn session_defaults_optional_fields() {
        let session: SessionRecord = serde_json::from_value(serde_json::json!({
            "date": "16-10-2026",
            "available_capacity": 1,
            "min_age_limit": 45
        }))
        .unwrap();
        assert_eq!(session.available_capacity_dose1, 0);
        assert!(session.slots.is_empty());
        assert!(session.vaccine.is_empty());
    }

    #[test]
    fn session_rejects_negative_capacity() {
        let result = serde_json::from_value::<SessionRecord>(serde_json::json!({
            "date": "16-10-2026",
            "available_capacity": -1,
            "min_age_limit": 45
        }));
        assert!(result.is_err());
    }

    #[test]
    fn session_rejects_fractional_capacity() {
        let result = serde_json::from_value::<SessionRecord>(serde_json::json!({
            "date": "16-10-2026",
            "available_capacity": 1.5,
            "min_age_limit": 45
        }));
        assert!(result.is_err());
    }

    #[test]
    fn center_accepts_numeric_pincode() {
        let center: CenterRecord = serde_json::from_value(serde_json::json!({
            "name": "Ruby Hall",
            "address": "Sassoon Road",
            "pincode": 411001,
            "fee_type": "Paid",
            "sessions": []
        }))
        .unwrap();
        assert_eq!(center.pincode, "411001");
    }

    #[test]
    fn district_id_is_carried_as_string() {
        let district: District = serde_json::from_value(serde_json::json!({
            "district_id": 363,
            "district_name": "Pune"
        }))
        .unwrap();
        assert_eq!(
            district,
            District {
                id: "363".to_string(),
                name: "Pune".to_string()
            }
        );
    }
}
