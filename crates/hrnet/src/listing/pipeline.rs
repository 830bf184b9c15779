//! Pure stages of the listing pipeline: normalize, filter, sort, paginate.

use std::fmt::Write as _;

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::view::{Column, SortDirection, COLUMN_COUNT};
use crate::employee::EmployeeRecord;
use crate::error::{Error, Result};

/// Default display format for dates (month/day/year, no padding).
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// How raw record values become display strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOptions {
    date_format: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl DisplayOptions {
    /// Use a custom `strftime` date format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigValidation`] if the format has invalid
    /// specifiers.
    pub fn new(date_format: impl Into<String>) -> Result<Self> {
        let date_format = date_format.into();
        validate_date_format(&date_format)?;
        Ok(Self { date_format })
    }

    /// The `strftime` date format in use.
    #[must_use]
    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// Render a date for display.
    #[must_use]
    pub fn format_date(&self, date: NaiveDate) -> String {
        let mut out = String::new();
        if write!(out, "{}", date.format(&self.date_format)).is_err() {
            return date.to_string();
        }
        out
    }
}

/// Check that a `strftime` format string has no invalid specifiers.
///
/// # Errors
///
/// Returns [`Error::ConfigValidation`] describing the bad format.
pub fn validate_date_format(format: &str) -> Result<()> {
    if format.is_empty() {
        return Err(Error::ConfigValidation {
            message: "date_format must not be empty".to_string(),
        });
    }
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(Error::ConfigValidation {
            message: format!("invalid date_format: {format}"),
        });
    }
    Ok(())
}

/// One table row: the display value of every column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    cells: [String; COLUMN_COUNT],
}

impl DisplayRow {
    /// Derive display values from a record.
    #[must_use]
    pub fn from_record(record: &EmployeeRecord, options: &DisplayOptions) -> Self {
        let cells = Column::ALL.map(|column| match column {
            Column::FirstName => record.first_name.clone(),
            Column::LastName => record.last_name.clone(),
            Column::StartDate => options.format_date(record.start_date),
            Column::Department => record
                .department
                .map(|d| d.label().to_string())
                .unwrap_or_default(),
            Column::DateOfBirth => options.format_date(record.date_of_birth),
            Column::Street => record.address.street.clone(),
            Column::City => record.address.city.clone(),
            Column::State => record.address.state.clone().unwrap_or_default(),
            Column::ZipCode => record.address.zip_code.clone(),
        });
        Self { cells }
    }

    /// Display value of one column.
    #[must_use]
    pub fn cell(&self, column: Column) -> &str {
        &self.cells[column.index()]
    }

    /// All display values in column order.
    #[must_use]
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// Every display value joined by single spaces.
    #[must_use]
    pub fn search_text(&self) -> String {
        self.cells.join(" ")
    }

    /// Case-insensitive substring match against [`Self::search_text`].
    ///
    /// `needle` must already be lowercase.
    fn matches_lowercase(&self, needle: &str) -> bool {
        needle.is_empty() || self.search_text().to_lowercase().contains(needle)
    }
}

impl Serialize for DisplayRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(COLUMN_COUNT))?;
        for column in Column::ALL {
            map.serialize_entry(column.key(), self.cell(column))?;
        }
        map.end()
    }
}

/// Map records to display rows, preserving order.
#[must_use]
pub fn normalize(records: &[EmployeeRecord], options: &DisplayOptions) -> Vec<DisplayRow> {
    records
        .iter()
        .map(|record| DisplayRow::from_record(record, options))
        .collect()
}

/// Keep rows whose joined display values contain `query`, ignoring case.
///
/// An empty query keeps every row.
#[must_use]
pub fn filter(rows: Vec<DisplayRow>, query: &str) -> Vec<DisplayRow> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return rows;
    }
    rows.into_iter()
        .filter(|row| row.matches_lowercase(&needle))
        .collect()
}

/// Stable sort by one column's display string.
pub fn sort_rows(rows: &mut [DisplayRow], column: Column, direction: SortDirection) {
    rows.sort_by(|a, b| {
        let ordering = a.cell(column).cmp(b.cell(column));
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

/// Number of pages needed for `count` rows; 0 when there are no rows.
#[must_use]
pub fn total_pages(count: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    count.div_ceil(per_page)
}

/// The rows on 1-based `page`. Out-of-range pages are empty.
#[must_use]
pub fn paginate(rows: &[DisplayRow], per_page: usize, page: usize) -> &[DisplayRow] {
    let start = page.saturating_sub(1).saturating_mul(per_page);
    if start >= rows.len() {
        return &[];
    }
    let end = start.saturating_add(per_page).min(rows.len());
    &rows[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::employee::tests::sample_record;
    use crate::employee::Department;

    fn row(first: &str, last: &str) -> DisplayRow {
        DisplayRow::from_record(&sample_record(first, last), &DisplayOptions::default())
    }

    #[test]
    fn test_display_row_cells() {
        let r = row("Ada", "Lovelace");
        assert_eq!(r.cell(Column::FirstName), "Ada");
        assert_eq!(r.cell(Column::StartDate), "7/1/1843");
        assert_eq!(r.cell(Column::DateOfBirth), "12/10/1815");
        assert_eq!(r.cell(Column::Department), "Engineering");
        assert_eq!(r.cell(Column::State), "NY");
        assert_eq!(r.cell(Column::ZipCode), "10001");
        assert_eq!(r.cells().len(), COLUMN_COUNT);
    }

    #[test]
    fn test_display_row_null_fields_are_blank() {
        let mut record = sample_record("Ada", "Lovelace");
        record.department = None;
        record.address.state = None;
        let r = DisplayRow::from_record(&record, &DisplayOptions::default());

        assert_eq!(r.cell(Column::Department), "");
        assert_eq!(r.cell(Column::State), "");
    }

    #[test]
    fn test_custom_date_format() {
        let options = DisplayOptions::new("%Y-%m-%d").unwrap();
        let r = DisplayRow::from_record(&sample_record("Ada", "Lovelace"), &options);
        assert_eq!(r.cell(Column::DateOfBirth), "1815-12-10");
    }

    #[test]
    fn test_invalid_date_format_rejected() {
        assert!(DisplayOptions::new("%Q").is_err());
        assert!(DisplayOptions::new("").is_err());
        assert!(validate_date_format(DEFAULT_DATE_FORMAT).is_ok());
    }

    #[test]
    fn test_filter_empty_query_keeps_all() {
        let rows = vec![row("Ada", "Lovelace"), row("Grace", "Hopper")];
        assert_eq!(filter(rows.clone(), ""), rows);
    }

    #[test]
    fn test_filter_case_insensitive() {
        let rows = vec![row("Ada", "Lovelace"), row("Grace", "Hopper")];
        let hits = filter(rows, "HOPPER");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].cell(Column::FirstName), "Grace");
    }

    #[test]
    fn test_filter_matches_nested_address_fields() {
        let mut record = sample_record("Ada", "Lovelace");
        record.address.city = "Baltimore".to_string();
        let rows = vec![
            DisplayRow::from_record(&record, &DisplayOptions::default()),
            row("Grace", "Hopper"),
        ];

        assert_eq!(filter(rows.clone(), "baltim").len(), 1);
        assert_eq!(filter(rows, "10001").len(), 2);
    }

    #[test]
    fn test_filter_matches_display_dates_and_department() {
        let mut record = sample_record("Ada", "Lovelace");
        record.department = Some(Department::HumanResources);
        let rows = vec![DisplayRow::from_record(&record, &DisplayOptions::default())];

        assert_eq!(filter(rows.clone(), "12/10/1815").len(), 1);
        assert_eq!(filter(rows, "human res").len(), 1);
    }

    #[test]
    fn test_filter_no_match() {
        let rows = vec![row("Ada", "Lovelace")];
        assert!(filter(rows, "zzz").is_empty());
    }

    #[test]
    fn test_sort_ascending_and_descending() {
        let mut rows = vec![row("Grace", "Hopper"), row("Ada", "Lovelace"), row("Alan", "Turing")];

        sort_rows(&mut rows, Column::FirstName, SortDirection::Ascending);
        let names: Vec<&str> = rows.iter().map(|r| r.cell(Column::FirstName)).collect();
        assert_eq!(names, vec!["Ada", "Alan", "Grace"]);

        sort_rows(&mut rows, Column::FirstName, SortDirection::Descending);
        let names: Vec<&str> = rows.iter().map(|r| r.cell(Column::FirstName)).collect();
        assert_eq!(names, vec!["Grace", "Alan", "Ada"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let mut rows = vec![row("Zed", "Same"), row("Amy", "Same"), row("Kim", "Same")];

        sort_rows(&mut rows, Column::LastName, SortDirection::Descending);
        let names: Vec<&str> = rows.iter().map(|r| r.cell(Column::FirstName)).collect();
        assert_eq!(names, vec!["Zed", "Amy", "Kim"]);
    }

    #[test]
    fn test_sort_dates_by_display_string() {
        let mut early = sample_record("Early", "A");
        early.start_date = NaiveDate::from_ymd_opt(2020, 2, 1).unwrap();
        let mut late = sample_record("Late", "B");
        late.start_date = NaiveDate::from_ymd_opt(2020, 10, 1).unwrap();
        let mut rows = normalize(&[early, late], &DisplayOptions::default());

        // "10/1/2020" < "2/1/2020" as strings.
        sort_rows(&mut rows, Column::StartDate, SortDirection::Ascending);
        assert_eq!(rows[0].cell(Column::FirstName), "Late");
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn test_paginate_slices() {
        let rows: Vec<DisplayRow> = (0..25).map(|i| row(&format!("E{i}"), "X")).collect();

        assert_eq!(paginate(&rows, 10, 1).len(), 10);
        assert_eq!(paginate(&rows, 10, 3).len(), 5);
        assert_eq!(paginate(&rows, 10, 3)[0].cell(Column::FirstName), "E20");
    }

    #[test]
    fn test_paginate_out_of_range_is_empty() {
        let rows = vec![row("Ada", "Lovelace")];
        assert!(paginate(&rows, 10, 2).is_empty());
        assert!(paginate(&[], 10, 1).is_empty());
        assert_eq!(paginate(&rows, 10, 0).len(), 1);
        assert!(paginate(&rows, 10, usize::MAX).is_empty());
    }

    #[test]
    fn test_display_row_serializes_as_map() {
        let json = serde_json::to_value(row("Ada", "Lovelace")).unwrap();
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["zipCode"], "10001");
    }
}
