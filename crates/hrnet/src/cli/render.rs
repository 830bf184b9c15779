//! Text rendering of the employee table.

use std::fmt::Write as _;

use crate::listing::{PageControls, RenderModel};

const COLUMN_GAP: &str = "  ";

/// Render the model as an aligned table followed by footer and controls.
#[must_use]
pub fn render_table(model: &RenderModel) -> String {
    let header_texts: Vec<String> = model
        .headers
        .iter()
        .map(|h| format!("{}{}", h.label, h.indicator()))
        .collect();

    let mut widths: Vec<usize> = header_texts.iter().map(|h| h.chars().count()).collect();
    for row in &model.visible_rows {
        for (width, cell) in widths.iter_mut().zip(row.cells()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, header_texts.iter().map(String::as_str), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, rule.iter().map(String::as_str), &widths);

    if model.visible_rows.is_empty() {
        out.push_str("No matching records found\n");
    }
    for row in &model.visible_rows {
        push_line(&mut out, row.cells().iter().map(String::as_str), &widths);
    }

    out.push('\n');
    let _ = writeln!(out, "{}", model.footer());
    let _ = writeln!(
        out,
        "{}  Page {} of {}",
        controls_line(&model.controls),
        model.current_page,
        model.total_pages
    );
    out
}

/// Render visible rows as tab-separated lines, without headers.
#[must_use]
pub fn render_plain(model: &RenderModel) -> String {
    let mut out = String::new();
    for row in &model.visible_rows {
        out.push_str(&row.cells().join("\t"));
        out.push('\n');
    }
    out
}

/// Pagination buttons; disabled ones are bracketed with `-`.
fn controls_line(controls: &PageControls) -> String {
    let button = |label: &str, enabled: bool| {
        if enabled {
            format!("[{label}]")
        } else {
            format!("-{label}-")
        }
    };
    [
        button("<<", controls.first),
        button("<", controls.previous),
        button(">", controls.next),
        button(">>", controls.last),
    ]
    .join(" ")
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let mut line = String::new();
    for (i, (cell, width)) in cells.zip(widths).enumerate() {
        if i > 0 {
            line.push_str(COLUMN_GAP);
        }
        let pad = width.saturating_sub(cell.chars().count());
        line.push_str(cell);
        line.push_str(&" ".repeat(pad));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::employee::tests::sample_record;
    use crate::listing::{render, Column, DisplayOptions, EntriesPerPage, ViewState};

    #[test]
    fn test_render_table_empty() {
        let model = render(&[], &ViewState::default(), &DisplayOptions::default());
        let text = render_table(&model);

        assert!(text.starts_with("First Name  Last Name  Start Date"));
        assert!(text.contains("No matching records found"));
        assert!(text.contains("Showing 0 entries of 0 rows"));
        assert!(text.contains("-<<- -<- ->- ->>-  Page 1 of 0"));
    }

    #[test]
    fn test_render_table_rows_and_indicator() {
        let records: Vec<_> = (0..15)
            .map(|i| sample_record(&format!("Name{i:02}"), "Last"))
            .collect();
        let mut view = ViewState::new(EntriesPerPage::Ten);
        view.toggle_sort(Column::FirstName);

        let text = render_table(&render(&records, &view, &DisplayOptions::default()));

        assert!(text.contains("First Name🔼"));
        assert!(text.contains("Name00"));
        assert!(!text.contains("Name10"));
        assert!(text.contains("Showing 10 entries of 15 rows"));
        assert!(text.contains("-<<- -<- [>] [>>]  Page 1 of 2"));
    }

    #[test]
    fn test_render_plain() {
        let records = vec![sample_record("Ada", "Lovelace")];
        let model = render(&records, &ViewState::default(), &DisplayOptions::default());
        let text = render_plain(&model);

        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("Ada\tLovelace\t7/1/1843\tEngineering"));
    }

    #[test]
    fn test_controls_line_all_enabled() {
        let controls = PageControls::for_page(2, 3);
        assert_eq!(controls_line(&controls), "[<<] [<] [>] [>>]");
    }
}
