//! Plain-text rendering of a grid view.
//!
//! Produces aligned columns separated by two spaces, a rule under the
//! header and above the footer, and a page bar. The body is limited to the
//! view's scroll region.

use crate::action::Affordance;
use crate::column::Alignment;
use crate::layout::{display_width, fit};
use crate::pagination::PageControls;
use crate::shell::SortDirection;
use crate::view::{Body, GridView, HeaderCell};

const GAP: &str = "  ";
const ACTIONS_HEADER: &str = "Actions";

/// Render `view` to a string, one line per grid line.
pub fn render(view: &GridView) -> String {
    let mut lines: Vec<String> = Vec::new();

    if let Some(line) = title_line(view) {
        lines.push(line);
    }

    if let Some(toggles) = &view.column_selector {
        let entries: Vec<String> = toggles
            .iter()
            .map(|t| format!("[{}] {}", if t.visible { "x" } else { " " }, t.label))
            .collect();
        lines.push(format!("Columns: {}", entries.join(GAP)));
    }

    let actions_width = actions_width(&view.actions);

    // Header and rule.
    let mut header: Vec<String> = view.headers.iter().map(header_text).collect();
    let mut rule: Vec<String> = view
        .headers
        .iter()
        .map(|h| "-".repeat(usize::from(h.width)))
        .collect();
    if let Some(width) = actions_width {
        header.push(fit(ACTIONS_HEADER, width, Alignment::Left));
        rule.push("-".repeat(usize::from(width)));
    }
    lines.push(join(header));
    lines.push(join(rule.clone()));

    match &view.body {
        Body::Loading => lines.push("Loading…".to_string()),
        Body::Error(message) | Body::Empty(message) => lines.push(message.clone()),
        Body::Rows(rows) => {
            let start = view.scroll.offset.min(rows.len());
            let end = match view.scroll.viewport {
                Some(viewport) => (start + viewport).min(rows.len()),
                None => rows.len(),
            };
            let buttons = action_buttons(&view.actions);
            for row in &rows[start..end] {
                let mut cells: Vec<String> = row
                    .cells
                    .iter()
                    .zip(&view.headers)
                    .map(|(cell, h)| fit(cell.label(), h.width, h.align))
                    .collect();
                if let Some(width) = actions_width {
                    cells.push(fit(&buttons, width, Alignment::Left));
                }
                lines.push(join(cells));
            }
            if end - start < rows.len() {
                lines.push(format!("Rows {}-{} of {}", start + 1, end, rows.len()));
            }
        }
    }

    if let Some(footer) = &view.footer {
        lines.push(join(rule));
        let cells: Vec<String> = footer
            .iter()
            .zip(&view.headers)
            .map(|(cell, h)| fit(&cell.text, h.width, h.align))
            .collect();
        lines.push(join(cells));
    }

    if let Some(controls) = &view.pagination {
        lines.push(page_bar(controls));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn title_line(view: &GridView) -> Option<String> {
    match (&view.title, &view.filter) {
        (None, None) => None,
        (Some(title), None) => Some(title.clone()),
        (None, Some(filter)) => Some(format!("[{}]", filter)),
        (Some(title), Some(filter)) => Some(format!("{}{}[{}]", title, GAP, filter)),
    }
}

fn header_text(header: &HeaderCell) -> String {
    let label = match header.sort {
        Some(SortDirection::Ascending) => format!("{} ▲", header.label),
        Some(SortDirection::Descending) => format!("{} ▼", header.label),
        None => header.label.clone(),
    };
    fit(&label, header.width, header.align)
}

fn action_buttons(actions: &[Affordance]) -> String {
    actions
        .iter()
        .map(|a| format!("[{}]", a.label))
        .collect::<Vec<_>>()
        .join(" ")
}

fn actions_width(actions: &[Affordance]) -> Option<u16> {
    if actions.is_empty() {
        return None;
    }
    Some(display_width(&action_buttons(actions)).max(display_width(ACTIONS_HEADER)))
}

fn page_bar(controls: &PageControls) -> String {
    let mut parts = Vec::new();
    if controls.has_previous {
        parts.push("< Prev".to_string());
    }
    match controls.last_page {
        Some(last) => parts.push(format!("Page {} of {}", controls.current_page, last)),
        None => parts.push(format!("Page {}", controls.current_page)),
    }
    if controls.has_next {
        parts.push("Next >".to_string());
    }
    if controls.first_item > 0 {
        match controls.total {
            Some(total) => parts.push(format!(
                "Showing {}-{} of {}",
                controls.first_item, controls.last_item, total
            )),
            None => parts.push(format!(
                "Showing {}-{}",
                controls.first_item, controls.last_item
            )),
        }
    }
    parts.join(GAP)
}

fn join(cells: Vec<String>) -> String {
    cells.join(GAP).trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::{Column, ColumnSet};
    use crate::config::GridConfig;
    use crate::model::Record;
    use crate::shell::GridShell;

    fn shell(config: GridConfig<Record>) -> GridShell<Record> {
        let columns = ColumnSet::new(vec![
            Column::field("id", "Id"),
            Column::field("amt", "Amount").sum().align(Alignment::Right),
        ]);
        let rows = vec![
            Record::new().set("id", 1i64).set("amt", 100i64),
            Record::new().set("id", 2i64).set("amt", 200i64),
            Record::new().set("id", 3i64).set("amt", 300i64),
        ];
        GridShell::new(columns, rows, config)
    }

    #[test]
    fn test_render_table_with_footer() {
        let out = render(&shell(GridConfig::new().title("Budget").footer()).view());
        let expected = "\
Budget
Id     Amount
-----  ------
1         100
2         200
3         300
-----  ------
Total     600
";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_render_page_bar() {
        let mut grid = shell(GridConfig::new().paginate(2));
        grid.next_page();
        let out = render(&grid.view());
        assert!(out.ends_with("< Prev  Page 2 of 2  Showing 3-3 of 3\n"));
    }

    #[test]
    fn test_render_empty_state() {
        let mut grid = shell(GridConfig::new().empty_message("No transfers yet"));
        grid.set_rows(Vec::new());
        let out = render(&grid.view());
        assert!(out.contains("No transfers yet"));
        assert!(out.starts_with("Id  Amount\n"));
    }

    #[test]
    fn test_render_actions_column() {
        let grid = shell(GridConfig::new().actions().on_edit(|_: &Record| {}));
        let out = render(&grid.view());
        assert!(out.lines().next().unwrap().ends_with("Actions"));
        assert!(out.contains("[Edit]"));
        assert!(!out.contains("[Delete]"));
    }

    #[test]
    fn test_render_scroll_region() {
        let grid = shell(GridConfig::new().max_height(2));
        let out = render(&grid.view());
        assert!(out.contains("Rows 1-2 of 3"));
        assert!(!out.contains("300"));
    }
}
