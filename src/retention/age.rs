//! Deriving index ages from the date suffix embedded in index names.

use chrono::NaiveDate;

/// Number of trailing characters holding the date literal.
const SUFFIX_LEN: usize = 10;

/// Date layouts accepted in the suffix, tried in order.
const SUFFIX_FORMATS: &[&str] = &["%Y-%m-%d", "%Y.%m.%d"];

/// An index name matched the partition prefix but does not end in a
/// parsable date. Fatal for the whole run: silently skipping the entry
/// would mask a naming-hygiene problem in the cluster.
#[derive(Debug, thiserror::Error)]
#[error("index name '{name}' does not end in a parsable date")]
pub struct NameFormatError {
    pub name: String,
}

/// Extracts a calendar date from the fixed-width suffix of an index name.
///
/// Time-partitioned indices end in a 10-character date literal such as
/// `2020-06-01` or `2020.06.01`. A different naming scheme means swapping
/// this parser, not touching the classifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuffixDateParser;

impl SuffixDateParser {
    /// Parses the creation date out of `name`.
    pub fn parse(&self, name: &str) -> Result<NaiveDate, NameFormatError> {
        let suffix = name
            .len()
            .checked_sub(SUFFIX_LEN)
            .and_then(|start| name.get(start..))
            .ok_or_else(|| NameFormatError {
                name: name.to_string(),
            })?;

        SUFFIX_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(suffix, format).ok())
            .ok_or_else(|| NameFormatError {
                name: name.to_string(),
            })
    }
}

/// True when an index created on `created` is strictly older than the
/// retention window as seen from `current_date`.
///
/// Strict inequality: an index exactly at the boundary is kept. Ages are
/// whole days, so the rule holds across month and year boundaries.
pub fn exceeds_retention(current_date: NaiveDate, created: NaiveDate, retention_days: u32) -> bool {
    (current_date - created).num_days() > i64::from(retention_days)
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};
    use rstest::rstest;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case::dashed("events-2020-06-01", 2020, 6, 1)]
    #[case::dotted("events-2020.06.01", 2020, 6, 1)]
    #[case::bare_date("2020-01-31", 2020, 1, 31)]
    #[case::nested_prefix("events-audit-2019-12-31", 2019, 12, 31)]
    fn parses_trailing_date(
        #[case] name: &str,
        #[case] y: i32,
        #[case] m: u32,
        #[case] d: u32,
    ) {
        let parser = SuffixDateParser::default();
        assert_eq!(parser.parse(name).unwrap(), date(y, m, d));
    }

    #[rstest]
    #[case::empty("")]
    #[case::too_short("events-")]
    #[case::not_a_date("events-not-a-date")]
    #[case::bad_month("events-2020-13-01")]
    #[case::bad_day("events-2020-02-30")]
    #[case::mixed_separators("events-2020-06.01")]
    fn rejects_unparsable_suffixes(#[case] name: &str) {
        let parser = SuffixDateParser::default();
        assert!(parser.parse(name).is_err());
    }

    #[rstest]
    #[case::zero(0)]
    #[case::week(7)]
    #[case::month(31)]
    fn boundary_index_is_kept(#[case] period: u32) {
        let today = date(2020, 6, 10);
        let boundary = today - Duration::days(i64::from(period));
        assert!(!exceeds_retention(today, boundary, period));
        assert!(exceeds_retention(today, boundary - Duration::days(1), period));
    }

    #[test]
    fn future_dated_index_is_kept() {
        let today = date(2020, 6, 10);
        assert!(!exceeds_retention(today, date(2020, 6, 12), 7));
    }

    #[test]
    fn retention_spans_month_and_year_boundaries() {
        let today = date(2021, 1, 3);
        assert!(exceeds_retention(today, date(2020, 12, 26), 7));
        assert!(!exceeds_retention(today, date(2020, 12, 27), 7));
    }
}
