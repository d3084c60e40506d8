//! Search criteria as they arrive from input widgets.
//!
//! Each field of [`SearchCriteria`] holds a [`RawValue`]: whatever the widget
//! produced, with no interpretation. A free-text box yields `Text`, a number
//! input may yield `Text("250000")` or `Number(250000.0)`, a cleared date picker
//! yields `Null`, a select box may yield the `"any"` token. Interpretation is the
//! normalizer's job (see [`crate::normalize`]).

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const INSTANT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A loosely-typed criterion value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum RawValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    /// A date-like value, as handed over by a date picker.
    Instant(NaiveDateTime),
}

impl RawValue {
    /// The value coerced to text, or `None` for `Null`.
    pub fn to_text(&self) -> Option<String> {
        match self {
            RawValue::Null => None,
            RawValue::Bool(b) => Some(b.to_string()),
            RawValue::Number(n) => Some(n.to_string()),
            RawValue::Text(s) => Some(s.clone()),
            RawValue::Instant(dt) => Some(dt.format(INSTANT_FORMAT).to_string()),
        }
    }
}

impl From<Value> for RawValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Bool(b) => RawValue::Bool(b),
            Value::Number(n) => n.as_f64().map_or(RawValue::Null, RawValue::Number),
            Value::String(s) => RawValue::Text(s),
            // Arrays and objects carry no meaning for any criterion.
            Value::Null | Value::Array(_) | Value::Object(_) => RawValue::Null,
        }
    }
}

impl From<RawValue> for Value {
    fn from(value: RawValue) -> Self {
        match value {
            RawValue::Null => Value::Null,
            RawValue::Bool(b) => Value::Bool(b),
            RawValue::Number(n) => serde_json::Number::from_f64(n).map_or(Value::Null, Value::Number),
            RawValue::Text(s) => Value::String(s),
            RawValue::Instant(dt) => Value::String(dt.format(INSTANT_FORMAT).to_string()),
        }
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        RawValue::Number(n)
    }
}

impl From<i64> for RawValue {
    fn from(n: i64) -> Self {
        RawValue::Number(n as f64)
    }
}

impl From<i32> for RawValue {
    fn from(n: i32) -> Self {
        RawValue::Number(f64::from(n))
    }
}

impl From<u32> for RawValue {
    fn from(n: u32) -> Self {
        RawValue::Number(f64::from(n))
    }
}

impl From<bool> for RawValue {
    fn from(b: bool) -> Self {
        RawValue::Bool(b)
    }
}

impl From<NaiveDateTime> for RawValue {
    fn from(dt: NaiveDateTime) -> Self {
        RawValue::Instant(dt)
    }
}

impl From<NaiveDate> for RawValue {
    fn from(d: NaiveDate) -> Self {
        RawValue::Instant(d.and_time(chrono::NaiveTime::MIN))
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawValue::Null, Into::into)
    }
}

/// A (possibly partial) set of search criteria.
///
/// Absent fields, `Null`, empty strings and `"any"` all mean "no constraint".
/// Unrecognized JSON fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchCriteria {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<RawValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<RawValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<RawValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_bedrooms: Option<RawValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_bedrooms: Option<RawValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Option<RawValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<RawValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<RawValue>,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn kind(mut self, value: impl Into<RawValue>) -> Self {
        self.kind = Some(value.into());
        self
    }

    pub fn min_price(mut self, value: impl Into<RawValue>) -> Self {
        self.min_price = Some(value.into());
        self
    }

    pub fn max_price(mut self, value: impl Into<RawValue>) -> Self {
        self.max_price = Some(value.into());
        self
    }

    pub fn min_bedrooms(mut self, value: impl Into<RawValue>) -> Self {
        self.min_bedrooms = Some(value.into());
        self
    }

    pub fn max_bedrooms(mut self, value: impl Into<RawValue>) -> Self {
        self.max_bedrooms = Some(value.into());
        self
    }

    pub fn postcode(mut self, value: impl Into<RawValue>) -> Self {
        self.postcode = Some(value.into());
        self
    }

    pub fn date_from(mut self, value: impl Into<RawValue>) -> Self {
        self.date_from = Some(value.into());
        self
    }

    pub fn date_to(mut self, value: impl Into<RawValue>) -> Self {
        self.date_to = Some(value.into());
        self
    }

    /// Overlay the fields set in `other` onto `self`.
    pub fn merge(mut self, other: SearchCriteria) -> Self {
        macro_rules! overlay {
            ($($field:ident),*) => {
                $(if other.$field.is_some() {
                    self.$field = other.$field;
                })*
            };
        }
        overlay!(
            kind,
            min_price,
            max_price,
            min_bedrooms,
            max_bedrooms,
            postcode,
            date_from,
            date_to
        );
        self
    }
}
