//! # Criteria Normalization
//!
//! Turns each [`RawValue`] into a [`Constraint`]: either `Unconstrained` or a
//! strongly-typed bound. Every function here is total. Absent values, `Null`,
//! blank text and the `"any"` token (any case) all normalize to
//! `Unconstrained`, and so does anything that fails to parse: a stray
//! keystroke in an optional field widens the search instead of failing it.
//!
//! The one strict lookup in the search path, month names in listing data,
//! lives in [`crate::calendar`].

use crate::criteria::{RawValue, SearchCriteria};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

const ANY_TOKEN: &str = "any";

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// A normalized criterion.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint<T> {
    /// Do not filter on this field.
    Unconstrained,
    Bound(T),
}

impl<T> Constraint<T> {
    pub fn is_unconstrained(&self) -> bool {
        matches!(self, Constraint::Unconstrained)
    }

    pub fn bound(&self) -> Option<&T> {
        match self {
            Constraint::Unconstrained => None,
            Constraint::Bound(value) => Some(value),
        }
    }
}

impl<T> From<Option<T>> for Constraint<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Constraint::Unconstrained, Constraint::Bound)
    }
}

/// Trimmed text of a raw value, or `None` when it is blank or the "any" token.
fn meaningful_text(raw: Option<&RawValue>) -> Option<String> {
    let text = raw?.to_text()?;
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ANY_TOKEN) {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Normalize a category criterion such as the property type.
///
/// The bound keeps its original case; comparison is case-insensitive.
pub fn normalize_enum(raw: Option<&RawValue>) -> Constraint<String> {
    meaningful_text(raw).into()
}

/// Normalize a postcode criterion into a lower-cased prefix.
pub fn normalize_prefix(raw: Option<&RawValue>) -> Constraint<String> {
    meaningful_text(raw).map(|s| s.to_lowercase()).into()
}

/// Normalize a numeric bound (price or bedrooms).
///
/// Numbers pass through if finite. Text is parsed as a decimal; anything that
/// does not yield a finite number is ignored.
pub fn normalize_numeric_bound(raw: Option<&RawValue>) -> Constraint<f64> {
    let parsed = match raw {
        None | Some(RawValue::Null) => return Constraint::Unconstrained,
        Some(RawValue::Number(n)) => Some(*n),
        Some(other) => {
            let Some(text) = meaningful_text(Some(other)) else {
                return Constraint::Unconstrained;
            };
            text.parse::<f64>().ok()
        }
    };

    match parsed {
        Some(n) if n.is_finite() => Constraint::Bound(n),
        _ => {
            tracing::debug!(value = ?raw, "ignoring malformed numeric criterion");
            Constraint::Unconstrained
        }
    }
}

/// Normalize a date bound.
///
/// Accepts a date-like value as-is, a number as milliseconds since the Unix
/// epoch, or an ISO-8601 string (date only, local date-time, or RFC 3339 with
/// an offset, which is converted to UTC).
pub fn normalize_date_bound(raw: Option<&RawValue>) -> Constraint<NaiveDateTime> {
    let parsed = match raw {
        None | Some(RawValue::Null) | Some(RawValue::Bool(_)) => return Constraint::Unconstrained,
        Some(RawValue::Instant(dt)) => Some(*dt),
        Some(RawValue::Number(ms)) => {
            if *ms == 0.0 {
                return Constraint::Unconstrained;
            }
            instant_from_millis(*ms)
        }
        Some(RawValue::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Constraint::Unconstrained;
            }
            parse_iso_instant(trimmed)
        }
    };

    if parsed.is_none() {
        tracing::debug!(value = ?raw, "ignoring malformed date criterion");
    }
    parsed.into()
}

fn instant_from_millis(ms: f64) -> Option<NaiveDateTime> {
    if !ms.is_finite() || ms.abs() >= i64::MAX as f64 {
        return None;
    }
    DateTime::from_timestamp_millis(ms.trunc() as i64).map(|dt| dt.naive_utc())
}

/// Parse the ISO-8601 forms accepted for date criteria.
pub fn parse_iso_instant(text: &str) -> Option<NaiveDateTime> {
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date.and_time(NaiveTime::MIN));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_utc());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
}

/// All criteria of one search, normalized once up front.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedCriteria {
    pub kind: Constraint<String>,
    pub min_price: Constraint<f64>,
    pub max_price: Constraint<f64>,
    pub min_bedrooms: Constraint<f64>,
    pub max_bedrooms: Constraint<f64>,
    pub postcode: Constraint<String>,
    pub date_from: Constraint<NaiveDateTime>,
    pub date_to: Constraint<NaiveDateTime>,
}

impl NormalizedCriteria {
    pub fn from_criteria(criteria: &SearchCriteria) -> Self {
        Self {
            kind: normalize_enum(criteria.kind.as_ref()),
            min_price: normalize_numeric_bound(criteria.min_price.as_ref()),
            max_price: normalize_numeric_bound(criteria.max_price.as_ref()),
            min_bedrooms: normalize_numeric_bound(criteria.min_bedrooms.as_ref()),
            max_bedrooms: normalize_numeric_bound(criteria.max_bedrooms.as_ref()),
            postcode: normalize_prefix(criteria.postcode.as_ref()),
            date_from: normalize_date_bound(criteria.date_from.as_ref()),
            date_to: normalize_date_bound(criteria.date_to.as_ref()),
        }
    }

    /// Number of criteria that actually constrain the search.
    pub fn active_count(&self) -> usize {
        [
            !self.kind.is_unconstrained(),
            !self.min_price.is_unconstrained(),
            !self.max_price.is_unconstrained(),
            !self.min_bedrooms.is_unconstrained(),
            !self.max_bedrooms.is_unconstrained(),
            !self.postcode.is_unconstrained(),
            !self.date_from.is_unconstrained(),
            !self.date_to.is_unconstrained(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    pub fn is_unconstrained(&self) -> bool {
        self.active_count() == 0
    }
}
