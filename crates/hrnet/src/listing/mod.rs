//! The employee listing pipeline.
//!
//! [`render`] is a pure function of the stored records and the current
//! [`ViewState`]. Every call runs the same fixed stages:
//!
//! 1. **Normalize**: each record becomes a [`DisplayRow`] of display strings,
//!    with dates formatted per [`DisplayOptions`].
//! 2. **Filter**: rows whose space-joined display values contain the search
//!    query, ignoring case.
//! 3. **Sort**: stable, by the active column's display string.
//! 4. **Paginate**: the slice for the current page.
//!
//! # Example
//!
//! ```
//! use hrnet::listing::{render, Column, DisplayOptions, ViewState};
//!
//! let mut view = ViewState::default();
//! view.toggle_sort(Column::LastName);
//!
//! let model = render(&[], &view, &DisplayOptions::default());
//! assert_eq!(model.total_pages, 0);
//! assert_eq!(model.footer(), "Showing 0 entries of 0 rows");
//! assert!(!model.controls.next);
//! ```

mod pipeline;
mod view;

use serde::Serialize;
use tracing::trace;

use crate::employee::EmployeeRecord;

pub use pipeline::{
    filter, normalize, paginate, sort_rows, total_pages, validate_date_format, DisplayOptions,
    DisplayRow, DEFAULT_DATE_FORMAT,
};
pub use view::{
    Column, EntriesPerPage, SortDirection, SortKey, ViewState, COLUMN_COUNT,
};

/// One column header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeaderCell {
    /// The column.
    pub column: Column,
    /// Header label.
    pub label: &'static str,
    /// Direction, when this is the active sort column.
    pub sorted: Option<SortDirection>,
}

impl HeaderCell {
    /// Sort indicator, empty unless this column is sorted.
    #[must_use]
    pub fn indicator(&self) -> &'static str {
        self.sorted.map_or("", SortDirection::indicator)
    }
}

/// Which pagination buttons are enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageControls {
    /// "First page" button.
    pub first: bool,
    /// "Previous page" button.
    pub previous: bool,
    /// "Next page" button.
    pub next: bool,
    /// "Last page" button.
    pub last: bool,
}

impl PageControls {
    /// Button states for `current_page` out of `total_pages`.
    #[must_use]
    pub fn for_page(current_page: usize, total_pages: usize) -> Self {
        let back = current_page > 1;
        let forward = current_page < total_pages;
        Self {
            first: back,
            previous: back,
            next: forward,
            last: forward,
        }
    }

    /// True when every button is disabled.
    #[must_use]
    pub fn all_disabled(&self) -> bool {
        !(self.first || self.previous || self.next || self.last)
    }
}

/// Everything the table screen needs to draw itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderModel {
    /// Column headers in table order.
    pub headers: Vec<HeaderCell>,
    /// Rows on the current page.
    pub visible_rows: Vec<DisplayRow>,
    /// Rows matching the search query.
    pub total_filtered_count: usize,
    /// Rows stored, before filtering.
    pub total_count: usize,
    /// Pages of filtered rows; 0 when nothing matches.
    pub total_pages: usize,
    /// 1-based page shown.
    pub current_page: usize,
    /// Pagination button states.
    pub controls: PageControls,
}

impl RenderModel {
    /// Table footer text.
    #[must_use]
    pub fn footer(&self) -> String {
        format!(
            "Showing {} entries of {} rows",
            self.visible_rows.len(),
            self.total_count
        )
    }
}

/// Run the pipeline over `records` for the given view.
#[must_use]
pub fn render(records: &[EmployeeRecord], view: &ViewState, options: &DisplayOptions) -> RenderModel {
    let total_count = records.len();

    let mut rows = filter(normalize(records, options), view.search_query());
    if let Some(key) = view.sort() {
        sort_rows(&mut rows, key.column, key.direction);
    }

    let per_page = view.entries_per_page().get();
    let total_filtered_count = rows.len();
    let total_pages = total_pages(total_filtered_count, per_page);
    let current_page = view.current_page();
    let visible_rows = paginate(&rows, per_page, current_page).to_vec();

    trace!(
        total_count,
        total_filtered_count,
        total_pages,
        current_page,
        visible = visible_rows.len(),
        "Rendered employee table"
    );

    let headers = Column::ALL
        .into_iter()
        .map(|column| HeaderCell {
            column,
            label: column.header(),
            sorted: view
                .sort()
                .filter(|key| key.column == column)
                .map(|key| key.direction),
        })
        .collect();

    RenderModel {
        headers,
        visible_rows,
        total_filtered_count,
        total_count,
        total_pages,
        current_page,
        controls: PageControls::for_page(current_page, total_pages),
    }
}
