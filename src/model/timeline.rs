//! Work experience timelines

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// When a work record took place.
///
/// On the wire a timeline is either a bare year (`2019`) or a two-element
/// `[start, end]` array where a non-integer end (`"Present"`, `null`, ...)
/// means the engagement is still ongoing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkTimeline {
    /// No timeline recorded
    #[default]
    Absent,
    /// A single year; starts and ends in that year
    SingleYear(i32),
    /// `[start, end]`; `None` end continues to the current year
    Range(i32, Option<i32>),
    /// Present but neither a year nor a two-element pair
    Malformed,
}

impl WorkTimeline {
    /// Resolve to concrete `(start, end)` years, using `current_year` for open-ended ranges.
    ///
    /// Returns `None` for absent and malformed timelines.
    pub fn bounds(&self, current_year: i32) -> Option<(i32, i32)> {
        match *self {
            WorkTimeline::SingleYear(year) => Some((year, year)),
            WorkTimeline::Range(start, end) => Some((start, end.unwrap_or(current_year))),
            WorkTimeline::Absent | WorkTimeline::Malformed => None,
        }
    }

    pub fn is_open_ended(&self) -> bool {
        matches!(self, WorkTimeline::Range(_, None))
    }

    fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => WorkTimeline::Absent,
            Value::Number(_) => year_of(value)
                .map(WorkTimeline::SingleYear)
                .unwrap_or(WorkTimeline::Malformed),
            Value::Array(items) => match items.as_slice() {
                [start, end] => match year_of(start) {
                    Some(start) => WorkTimeline::Range(start, year_of(end)),
                    None => WorkTimeline::Malformed,
                },
                _ => WorkTimeline::Malformed,
            },
            _ => WorkTimeline::Malformed,
        }
    }
}

fn year_of(value: &Value) -> Option<i32> {
    value.as_i64().and_then(|year| i32::try_from(year).ok())
}

impl<'de> Deserialize<'de> for WorkTimeline {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Value) -> WorkTimeline {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_single_year_and_range() {
        assert_eq!(parse(json!(2019)), WorkTimeline::SingleYear(2019));
        assert_eq!(parse(json!([2015, 2018])), WorkTimeline::Range(2015, Some(2018)));
    }

    #[test]
    fn test_non_integer_end_is_open_ended() {
        assert_eq!(parse(json!([2020, "Present"])), WorkTimeline::Range(2020, None));
        assert_eq!(parse(json!([2020, null])), WorkTimeline::Range(2020, None));
        assert!(parse(json!([2020, "ongoing"])).is_open_ended());
    }

    #[test]
    fn test_malformed_shapes() {
        assert_eq!(parse(json!([2015, 2016, 2017])), WorkTimeline::Malformed);
        assert_eq!(parse(json!(["2015", 2016])), WorkTimeline::Malformed);
        assert_eq!(parse(json!("2015-2016")), WorkTimeline::Malformed);
        assert_eq!(parse(json!(2015.5)), WorkTimeline::Malformed);
        assert_eq!(parse(json!(null)), WorkTimeline::Absent);
    }

    #[test]
    fn test_bounds() {
        assert_eq!(WorkTimeline::SingleYear(2010).bounds(2024), Some((2010, 2010)));
        assert_eq!(WorkTimeline::Range(2018, None).bounds(2024), Some((2018, 2024)));
        assert_eq!(WorkTimeline::Malformed.bounds(2024), None);
        assert_eq!(WorkTimeline::Absent.bounds(2024), None);
    }
}
