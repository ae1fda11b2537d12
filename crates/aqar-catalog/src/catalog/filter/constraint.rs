use std::borrow::Borrow;
use std::str::FromStr;

use serde::Serialize;

use crate::catalog::criteria::CriteriaError;

/// Labels the listing screens use for "every value".
const ALL_LABELS: [&str; 2] = ["all", "الكل"];

pub(crate) fn is_all_label(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty()
        || ALL_LABELS
            .iter()
            .any(|label| trimmed.eq_ignore_ascii_case(label))
}

/// Equality constraint on a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum Exact<T> {
    Any,
    Is(T),
}

impl<T> Default for Exact<T> {
    fn default() -> Self {
        Self::Any
    }
}

impl<T> Exact<T> {
    pub const fn is_any(&self) -> bool {
        matches!(self, Exact::Any)
    }

    /// A present field equal to the expected value passes; a missing field
    /// only passes when unconstrained.
    pub fn test<Q>(&self, value: Option<&Q>) -> bool
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        match self {
            Exact::Any => true,
            Exact::Is(expected) => value.is_some_and(|actual| expected.borrow() == actual),
        }
    }
}

impl<T> Exact<T>
where
    T: FromStr<Err = CriteriaError>,
{
    /// Parse a query parameter, treating absent, blank, and "all" values as
    /// unconstrained.
    pub fn from_param(raw: Option<&str>) -> Result<Self, CriteriaError> {
        match raw {
            None => Ok(Exact::Any),
            Some(value) if is_all_label(value) => Ok(Exact::Any),
            Some(value) => value.trim().parse().map(Exact::Is),
        }
    }
}

impl Exact<String> {
    pub fn from_text_param(raw: Option<&str>) -> Self {
        match raw {
            Some(value) if !is_all_label(value) => Exact::Is(value.trim().to_string()),
            _ => Exact::Any,
        }
    }
}

impl Exact<bool> {
    pub fn from_flag_param(raw: Option<&str>) -> Result<Self, CriteriaError> {
        match raw.map(str::trim) {
            None => Ok(Exact::Any),
            Some(value) if is_all_label(value) => Ok(Exact::Any),
            Some(value) => match value.to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(Exact::Is(true)),
                "false" | "0" | "no" => Ok(Exact::Is(false)),
                _ => Err(CriteriaError::InvalidFlag {
                    value: value.to_string(),
                }),
            },
        }
    }
}

/// Numeric interval constraint. Every bounded variant is inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Range<T> {
    Unbounded,
    Between { low: T, high: T },
    AtLeast { low: T },
    AtMost { high: T },
}

impl<T> Default for Range<T> {
    fn default() -> Self {
        Self::Unbounded
    }
}

impl<T> Range<T>
where
    T: PartialOrd + Copy,
{
    pub const fn is_unbounded(&self) -> bool {
        matches!(self, Range::Unbounded)
    }

    pub fn test(&self, value: Option<T>) -> bool {
        match (self, value) {
            (Range::Unbounded, _) => true,
            (_, None) => false,
            (Range::Between { low, high }, Some(value)) => *low <= value && value <= *high,
            (Range::AtLeast { low }, Some(value)) => *low <= value,
            (Range::AtMost { high }, Some(value)) => value <= *high,
        }
    }

    /// Combine optional `min`/`max` query bounds; an absent side stays open.
    pub fn from_bounds(min: Option<T>, max: Option<T>) -> Self {
        match (min, max) {
            (None, None) => Range::Unbounded,
            (Some(low), None) => Range::AtLeast { low },
            (None, Some(high)) => Range::AtMost { high },
            (Some(low), Some(high)) => Range::Between { low, high },
        }
    }

    /// Parse one side of a `min_`/`max_` query pair. Absent and blank values
    /// leave that side open.
    pub fn bound_param(
        field: &'static str,
        raw: Option<&str>,
    ) -> Result<Option<T>, CriteriaError>
    where
        T: FromStr,
    {
        let Some(value) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
            return Ok(None);
        };
        value
            .parse::<T>()
            .ok()
            // NaN compares unequal to itself and would match nothing.
            .filter(|bound| bound.partial_cmp(bound).is_some())
            .map(Some)
            .ok_or_else(|| CriteriaError::InvalidNumber {
                field,
                value: value.to_string(),
            })
    }

    /// Translate a two-handle slider. A slider resting at its full extent is
    /// the reset position and carries no constraint.
    pub fn from_slider(low: T, high: T, floor: T, ceiling: T) -> Self {
        if low <= floor && high >= ceiling {
            Range::Unbounded
        } else {
            Range::Between { low, high }
        }
    }
}

impl Range<u32> {
    /// Resolve a room-count bucket such as `"3"` or `"5+"`.
    pub fn from_bucket(raw: &str) -> Result<Self, CriteriaError> {
        if is_all_label(raw) {
            return Ok(Range::Unbounded);
        }

        let trimmed = raw.trim();
        let invalid = || CriteriaError::InvalidBucket {
            value: trimmed.to_string(),
        };

        match trimmed.strip_suffix('+') {
            Some(floor) => floor
                .trim()
                .parse()
                .map(|low| Range::AtLeast { low })
                .map_err(|_| invalid()),
            None => trimmed
                .parse()
                .map(|count| Range::Between {
                    low: count,
                    high: count,
                })
                .map_err(|_| invalid()),
        }
    }
}
