use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Label the backend uses to smuggle the recent complaint list into `data`.
pub const RECENT_APPLICANTS_LABEL: &str = "recent Applicants";

/// Complaint record as surfaced by the backend.
///
/// Fields that are missing, `null`, or of an unexpected type fall back to their
/// defaults; one sloppy column never discards the record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Applicant {
    #[serde(deserialize_with = "deserialize_lenient_id")]
    pub id: i64,
    #[serde(deserialize_with = "deserialize_lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "deserialize_lenient_string")]
    pub email: String,
    #[serde(deserialize_with = "deserialize_lenient_string")]
    pub phone: String,
    #[serde(deserialize_with = "deserialize_lenient_string")]
    pub complaint_details: String,
    #[serde(deserialize_with = "deserialize_lenient_string")]
    pub status: String,
    #[serde(deserialize_with = "deserialize_lenient_string")]
    pub created_at: String,
}

impl Applicant {
    pub fn is_pending(&self) -> bool {
        self.status == "Pending"
    }
}

/// Value half of a [`StatItem`]: a counter, the embedded record list, or anything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Count(serde_json::Number),
    /// Any JSON array; elements that are not objects become default records.
    Records(#[serde(deserialize_with = "deserialize_records")] Vec<Applicant>),
    Other(Value),
}

impl StatValue {
    pub fn count(value: i64) -> Self {
        Self::Count(serde_json::Number::from(value))
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Count(number) => write!(f, "{number}"),
            StatValue::Records(records) => write!(f, "{}", records.len()),
            StatValue::Other(Value::String(text)) => f.write_str(text),
            StatValue::Other(Value::Null) => f.write_str("null"),
            StatValue::Other(other) => write!(f, "{other}"),
        }
    }
}

/// One entry of the dashboard summary list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatItem {
    pub label: String,
    pub value: StatValue,
}

impl StatItem {
    pub fn count(label: impl Into<String>, value: i64) -> Self {
        Self {
            label: label.into(),
            value: StatValue::count(value),
        }
    }

    pub fn is_recent_applicants(&self) -> bool {
        self.label == RECENT_APPLICANTS_LABEL
    }
}

/// Body of `GET {BASE_URL}/stats`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<Vec<StatItem>>,
}

impl StatsResponse {
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }
}

fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    })
}

fn deserialize_lenient_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|value| value.trunc() as i64))
            .unwrap_or_default(),
        Value::String(text) => text.trim().parse().unwrap_or_default(),
        _ => 0,
    })
}

fn deserialize_records<'de, D>(deserializer: D) -> Result<Vec<Applicant>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Vec::<Value>::deserialize(deserializer)?;
    Ok(entries
        .into_iter()
        .map(|entry| serde_json::from_value(entry).unwrap_or_default())
        .collect())
}
