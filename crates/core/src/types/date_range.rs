use chrono::NaiveDate;

use crate::error::CoreError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Inclusive creation-date bounds; either side may be open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn from_bounds(start: Option<&str>, end: Option<&str>) -> Result<Self, CoreError> {
        let start = start
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(parse_date)
            .transpose()?;
        let end = end
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(parse_date)
            .transpose()?;
        if let (Some(start), Some(end)) = (start, end) {
            if start > end {
                return Err(CoreError::InvalidDateRange(format!(
                    "{}..{}",
                    start.format(DATE_FORMAT),
                    end.format(DATE_FORMAT)
                )));
            }
        }
        Ok(DateRange { start, end })
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Renders the `created:` qualifier, or `None` when both sides are open.
    pub fn to_qualifier(&self) -> Option<String> {
        let fmt = |date: &NaiveDate| date.format(DATE_FORMAT).to_string();
        match (&self.start, &self.end) {
            (Some(start), Some(end)) => Some(format!("created:{}..{}", fmt(start), fmt(end))),
            (Some(start), None) => Some(format!("created:{}..", fmt(start))),
            (None, Some(end)) => Some(format!("created:..{}", fmt(end))),
            (None, None) => None,
        }
    }
}

pub fn parse_date(input: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map_err(|_| CoreError::InvalidDate(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualifier_with_both_bounds() {
        let range = DateRange::from_bounds(Some("2023-01-01"), Some("2023-01-31")).unwrap();
        assert_eq!(
            range.to_qualifier().as_deref(),
            Some("created:2023-01-01..2023-01-31")
        );
    }

    #[test]
    fn qualifier_with_lower_bound_only() {
        let range = DateRange::from_bounds(Some("2020-01-01"), None).unwrap();
        assert_eq!(range.to_qualifier().as_deref(), Some("created:2020-01-01.."));
    }

    #[test]
    fn qualifier_with_upper_bound_only() {
        let range = DateRange::from_bounds(None, Some("2020-01-01")).unwrap();
        assert_eq!(range.to_qualifier().as_deref(), Some("created:..2020-01-01"));
    }

    #[test]
    fn empty_bounds_have_no_qualifier() {
        let range = DateRange::from_bounds(Some(" "), None).unwrap();
        assert!(range.is_empty());
        assert_eq!(range.to_qualifier(), None);
    }

    #[test]
    fn reject_inverted_range() {
        assert!(DateRange::from_bounds(Some("2021-01-01"), Some("2020-01-01")).is_err());
    }

    #[test]
    fn reject_malformed_date() {
        let err = DateRange::from_bounds(Some("01/02/2023"), None).unwrap_err();
        assert!(matches!(err, CoreError::InvalidDate(_)));
    }
}
