use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Error body returned by the backend for non-2xx responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub details: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Network(String),
    #[error("Server responded with status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

/// A backend value shown verbatim; `None` covers both `null` and a missing key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayValue(pub Option<Value>);

impl DisplayValue {
    pub fn is_missing(&self) -> bool {
        matches!(self.0, None | Some(Value::Null))
    }
}

impl From<Value> for DisplayValue {
    fn from(value: Value) -> Self {
        Self(Some(value))
    }
}

impl fmt::Display for DisplayValue {
    /// Renders like a browser writing the value as text: integral numbers
    /// lose their fraction, strings are unquoted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            None | Some(Value::Null) => Ok(()),
            Some(Value::String(s)) => f.write_str(s),
            Some(Value::Number(n)) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
                (Some(i), _, _) => write!(f, "{i}"),
                (_, Some(u), _) => write!(f, "{u}"),
                (_, _, Some(x)) if x.is_finite() && x.fract() == 0.0 && x.abs() < 9.0e15 => {
                    write!(f, "{}", x as i64)
                }
                (_, _, Some(x)) => write!(f, "{x}"),
                _ => write!(f, "{n}"),
            },
            Some(Value::Bool(b)) => write!(f, "{b}"),
            Some(other) => write!(f, "{other}"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabourInfo {
    #[serde(default)]
    pub name: DisplayValue,
    #[serde(default)]
    pub phone: DisplayValue,
    #[serde(default)]
    pub site: DisplayValue,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttendanceTotals {
    #[serde(default)]
    pub day_shifts: DisplayValue,
    #[serde(default)]
    pub night_shifts: DisplayValue,
    #[serde(default)]
    pub total_shifts: DisplayValue,
    #[serde(default)]
    pub absent_days: DisplayValue,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentTotals {
    #[serde(default)]
    pub daily_wage: DisplayValue,
    #[serde(default)]
    pub earned_pay: DisplayValue,
    #[serde(default)]
    pub advance_paid: DisplayValue,
    #[serde(default)]
    pub mess_canteen: DisplayValue,
    #[serde(default)]
    pub net_payable: DisplayValue,
}

/// One calendar row as sent by the backend. Both fields are kept loose so a
/// malformed row only affects its own day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    /// `YYYY-MM-DD`, matched textually against the rendered month.
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub status: Option<Value>,
}

impl AttendanceEntry {
    pub fn new(date: impl Into<String>, status: impl Into<Value>) -> Self {
        Self {
            date: Some(date.into()),
            status: Some(status.into()),
        }
    }

    /// The status when it is a JSON string; any other shape has no marker.
    pub fn marker(&self) -> Option<&str> {
        self.status.as_ref().and_then(Value::as_str)
    }
}

/// Monthly summary payload for one labour.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub labour: LabourInfo,
    #[serde(default, deserialize_with = "null_as_default")]
    pub attendance_summary: AttendanceTotals,
    #[serde(default, deserialize_with = "null_as_default")]
    pub payment_summary: PaymentTotals,
    #[serde(default, deserialize_with = "null_as_default")]
    pub calendar: Vec<AttendanceEntry>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
