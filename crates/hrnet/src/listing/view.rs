//! User-controlled view state for the employee table.

use serde::Serialize;

use crate::error::{Error, Result};

/// Number of table columns.
pub const COLUMN_COUNT: usize = 9;

/// A table column, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Column {
    /// First name.
    FirstName,
    /// Last name.
    LastName,
    /// Start date.
    StartDate,
    /// Department.
    Department,
    /// Date of birth.
    DateOfBirth,
    /// Street.
    Street,
    /// City.
    City,
    /// State.
    State,
    /// Zip code.
    ZipCode,
}

impl Column {
    /// Every column in table order.
    pub const ALL: [Column; COLUMN_COUNT] = [
        Self::FirstName,
        Self::LastName,
        Self::StartDate,
        Self::Department,
        Self::DateOfBirth,
        Self::Street,
        Self::City,
        Self::State,
        Self::ZipCode,
    ];

    /// Header label.
    #[must_use]
    pub fn header(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::StartDate => "Start Date",
            Self::Department => "Department",
            Self::DateOfBirth => "Date of Birth",
            Self::Street => "Street",
            Self::City => "City",
            Self::State => "State",
            Self::ZipCode => "Zip Code",
        }
    }

    /// Field key used in JSON output.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::StartDate => "startDate",
            Self::Department => "department",
            Self::DateOfBirth => "dateOfBirth",
            Self::Street => "street",
            Self::City => "city",
            Self::State => "state",
            Self::ZipCode => "zipCode",
        }
    }

    /// Position of this column in a row.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::str::FromStr for Column {
    type Err = Error;

    /// Accepts the header label or the JSON key, ignoring case, spaces,
    /// dashes and underscores.
    fn from_str(s: &str) -> Result<Self> {
        let squash = |v: &str| {
            v.chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .collect::<String>()
                .to_ascii_lowercase()
        };
        let wanted = squash(s);
        Self::ALL
            .into_iter()
            .find(|c| squash(c.header()) == wanted || squash(c.key()) == wanted)
            .ok_or_else(|| Error::unknown_option("column", s))
    }
}

/// Sort direction for the active column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Header indicator for a column sorted this way.
    #[must_use]
    pub fn indicator(self) -> &'static str {
        match self {
            Self::Ascending => "🔼",
            Self::Descending => "🔽",
        }
    }
}

/// The active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortKey {
    /// Column being sorted.
    pub column: Column,
    /// Direction of the sort.
    pub direction: SortDirection,
}

/// Page size choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum EntriesPerPage {
    /// 10 rows.
    Ten,
    /// 20 rows.
    #[default]
    Twenty,
    /// 50 rows.
    Fifty,
}

impl EntriesPerPage {
    /// Every choice, in selector order.
    pub const ALL: [EntriesPerPage; 3] = [Self::Ten, Self::Twenty, Self::Fifty];

    /// Rows per page.
    #[must_use]
    pub fn get(self) -> usize {
        match self {
            Self::Ten => 10,
            Self::Twenty => 20,
            Self::Fifty => 50,
        }
    }
}

impl TryFrom<usize> for EntriesPerPage {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|e| e.get() == value)
            .ok_or_else(|| Error::unknown_option("entries per page", value.to_string()))
    }
}

/// Search, sort and page parameters driving the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    search_query: String,
    sort: Option<SortKey>,
    entries_per_page: EntriesPerPage,
    current_page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(EntriesPerPage::default())
    }
}

impl ViewState {
    /// Unsorted, unfiltered view on page 1.
    #[must_use]
    pub fn new(entries_per_page: EntriesPerPage) -> Self {
        Self {
            search_query: String::new(),
            sort: None,
            entries_per_page,
            current_page: 1,
        }
    }

    /// Current search text.
    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Active sort, if any column has been selected.
    #[must_use]
    pub fn sort(&self) -> Option<SortKey> {
        self.sort
    }

    /// Selected page size.
    #[must_use]
    pub fn entries_per_page(&self) -> EntriesPerPage {
        self.entries_per_page
    }

    /// 1-based page number.
    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Replace the search text. The page is left alone.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Header click: flip direction on the active column, otherwise sort
    /// the new column ascending.
    pub fn toggle_sort(&mut self, column: Column) {
        self.sort = Some(match self.sort {
            Some(key) if key.column == column => SortKey {
                column,
                direction: key.direction.flipped(),
            },
            _ => SortKey {
                column,
                direction: SortDirection::Ascending,
            },
        });
    }

    /// Change the page size and return to page 1.
    pub fn set_entries_per_page(&mut self, entries: EntriesPerPage) {
        self.entries_per_page = entries;
        self.current_page = 1;
    }

    /// Jump to a page; anything below 1 becomes 1.
    pub fn set_current_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    /// Go to page 1.
    pub fn first_page(&mut self) {
        self.current_page = 1;
    }

    /// Go back one page, stopping at 1.
    pub fn previous_page(&mut self) {
        self.current_page = self.current_page.saturating_sub(1).max(1);
    }

    /// Go forward one page, stopping at `total_pages`.
    pub fn next_page(&mut self, total_pages: usize) {
        self.current_page = self.current_page.saturating_add(1).min(total_pages).max(1);
    }

    /// Go to the last page; page 1 when there are no pages.
    pub fn last_page(&mut self, total_pages: usize) {
        self.current_page = total_pages.max(1);
    }
}
