use std::sync::{Arc, Mutex};

use grid_engine::prelude::*;
use grid_engine::render::text::render;
use rust_decimal::Decimal;

fn amounts() -> Vec<Record> {
    vec![
        Record::new().set("id", 1i64).set("amt", 100i64),
        Record::new().set("id", 2i64).set("amt", 200i64),
        Record::new().set("id", 3i64).set("amt", 300i64),
    ]
}

fn columns() -> ColumnSet<Record> {
    ColumnSet::new(vec![
        Column::field("id", "Id").sortable(),
        Column::field("name", "Name"),
        Column::field("amt", "Amount").sum(),
    ])
}

#[test]
fn test_footer_sums_follow_the_page_window() {
    let mut shell = GridShell::new(columns(), amounts(), GridConfig::new().paginate(2).footer());

    assert_eq!(shell.column_total("amt"), Some(Decimal::from(300)));
    assert!(shell.next_page());
    assert_eq!(shell.visible_rows().len(), 1);
    assert_eq!(shell.column_total("amt"), Some(Decimal::from(300)));
}

#[test]
fn test_missing_and_non_numeric_amounts_count_as_zero() {
    let rows = vec![
        Record::new().set("id", 1i64).set("amt", 100i64),
        Record::new().set("id", 2i64),
        Record::new().set("id", 3i64).set("amt", "n/a"),
        Record::new().set("id", 4i64).set("amt", "25.50"),
    ];
    let shell = GridShell::new(columns(), rows, GridConfig::new().footer());
    assert_eq!(shell.column_total("amt"), Some(Decimal::new(12550, 2)));
}

#[test]
fn test_only_supplied_actions_render() {
    let config = GridConfig::new().actions().on_edit(|_: &Record| {});
    let shell = GridShell::new(columns(), amounts(), config);

    let affordances = shell.view().actions;
    assert_eq!(affordances.len(), 1);
    assert_eq!(affordances[0].kind, ActionKind::Edit);
    assert_eq!(
        shell.dispatch(0, ActionKind::Delete),
        Err(DispatchError::ActionUnavailable {
            action: ActionKind::Delete
        })
    );
}

#[test]
fn test_pending_mode_offers_review_approve_reject() {
    let approved = Arc::new(Mutex::new(Vec::new()));
    let sink = approved.clone();
    let config = GridConfig::new()
        .pending()
        .on_view(|_: &Record| {})
        .on_edit(|_: &Record| {})
        .on_approve(move |row: &Record| {
            sink.lock().unwrap().push(row.get("id").cloned());
        })
        .on_reject(|_: &Record| {});
    let shell = GridShell::new(columns(), amounts(), config);

    let labels: Vec<&str> = shell.view().actions.iter().map(|a| a.label).collect();
    assert_eq!(labels, vec!["Review", "Approve", "Reject"]);

    shell.dispatch(1, ActionKind::Approve).unwrap();
    assert_eq!(*approved.lock().unwrap(), vec![Some(Value::Int(2))]);
}

#[test]
fn test_server_page_renders_rows_verbatim() {
    let rows: Vec<Record> = (21i64..=30)
        .map(|i| Record::new().set("id", i).set("amt", 10i64))
        .collect();
    let config = GridConfig::new()
        .paginate(10)
        .current_page(3)
        .server(Some(57), true, true);
    let mut shell = GridShell::new(columns(), rows, config);

    assert_eq!(shell.current_page(), 3);
    assert_eq!(shell.visible_rows().len(), 10);
    assert_eq!(shell.visible_rows()[0].get("id"), Some(&Value::Int(21)));

    let controls = shell.page_controls().unwrap();
    assert!(controls.has_next);
    assert!(controls.has_previous);
    assert_eq!(controls.first_item, 21);
    assert_eq!(controls.last_item, 30);
    assert_eq!(controls.total, Some(57));

    shell.set_server_hints(Some(57), false, true);
    assert!(!shell.page_controls().unwrap().has_next);
}

#[test]
fn test_server_navigation_asks_the_caller() {
    let pages = Arc::new(Mutex::new(Vec::new()));
    let sink = pages.clone();
    let config = GridConfig::new()
        .paginate(10)
        .server(Some(57), true, false)
        .on_page_change(move |page| sink.lock().unwrap().push(page));
    let mut shell = GridShell::new(columns(), amounts(), config);

    assert!(!shell.previous_page());
    assert!(shell.next_page());
    assert_eq!(*pages.lock().unwrap(), vec![2]);
}

#[test]
fn test_empty_rows_show_the_empty_state() {
    let config = GridConfig::new().paginate(10).empty_message("No invoices");
    let shell = GridShell::new(columns(), Vec::new(), config);

    let view = shell.view();
    assert_eq!(view.body, Body::Empty("No invoices".to_string()));
    let controls = view.pagination.unwrap();
    assert_eq!(controls.current_page, 1);
    assert!(!controls.has_next);
    assert!(!controls.has_previous);
}

#[test]
fn test_last_visible_column_stays_visible() {
    let mut shell = GridShell::new(columns(), amounts(), GridConfig::new().column_selector());

    assert!(shell.hide_column("id"));
    assert!(shell.hide_column("name"));
    assert!(!shell.hide_column("amt"));
    assert!(!shell.toggle_column("amt"));

    let view = shell.view();
    assert_eq!(view.headers.len(), 1);
    assert_eq!(view.headers[0].id, "amt");
    let selector = view.column_selector.unwrap();
    assert_eq!(selector.iter().filter(|t| t.visible).count(), 1);
}

#[test]
fn test_link_cells_emit_navigate_intents() {
    let targets = Arc::new(Mutex::new(Vec::new()));
    let sink = targets.clone();
    let columns = ColumnSet::new(vec![
        Column::field("name", "Account").render_with(format::link("/accounts/{id}")),
        Column::field("amt", "Amount"),
    ]);
    let rows = vec![Record::new().set("id", 42i64).set("name", "Ops").set("amt", 5i64)];
    let config =
        GridConfig::new().on_navigate(move |path| sink.lock().unwrap().push(path.to_string()));
    let shell = GridShell::new(columns, rows, config);

    assert_eq!(
        shell.activate_cell(0, "name"),
        Ok(Some("/accounts/42".to_string()))
    );
    assert_eq!(shell.activate_cell(0, "amt"), Ok(None));
    assert_eq!(*targets.lock().unwrap(), vec!["/accounts/42".to_string()]);
    assert_eq!(
        shell.activate_cell(0, "missing"),
        Err(DispatchError::UnknownColumn {
            id: "missing".to_string()
        })
    );
}

#[test]
fn test_sort_intent_is_reported_not_applied() {
    let intents = Arc::new(Mutex::new(Vec::new()));
    let sink = intents.clone();
    let config = GridConfig::new().on_sort(move |intent| {
        sink.lock().unwrap().push(intent.map(|i| i.direction));
    });
    let mut shell = GridShell::new(columns(), amounts(), config);

    shell.toggle_sort("id");
    shell.toggle_sort("id");
    shell.clear_sort();

    assert_eq!(
        *intents.lock().unwrap(),
        vec![
            Some(SortDirection::Ascending),
            Some(SortDirection::Descending),
            None
        ]
    );
    assert_eq!(shell.rows()[0].get("id"), Some(&Value::Int(1)));
}

#[test]
fn test_rendered_view_lists_page_and_total() {
    let columns = ColumnSet::new(vec![
        Column::field("id", "Id"),
        Column::field("amt", "Amount")
            .render_with(format::currency("$", 2))
            .total_format(format::currency_total("$", 2))
            .sum()
            .align(Alignment::Right),
    ]);
    let shell = GridShell::new(
        columns,
        amounts(),
        GridConfig::new().title("Transfers").paginate(2).footer(),
    );

    let out = render(&shell.view());
    assert!(out.starts_with("Transfers\n"));
    assert!(out.contains("$100.00"));
    assert!(out.contains("$200.00"));
    assert!(out.contains("Total"));
    assert!(out.contains("$300.00"));
    assert!(out.ends_with("Page 1 of 2  Next >  Showing 1-2 of 3\n"));
}

#[test]
fn test_server_page_past_the_total_is_clamped() {
    let pages = Arc::new(Mutex::new(Vec::new()));
    let sink = pages.clone();
    let rows = vec![Record::new().set("id", 51i64).set("amt", 10i64)];
    let config = GridConfig::new()
        .paginate(10)
        .current_page(9)
        .server(Some(57), false, true)
        .on_page_change(move |page| sink.lock().unwrap().push(page));
    let mut shell = GridShell::new(columns(), rows, config);

    assert_eq!(shell.current_page(), 6);
    assert_eq!(*pages.lock().unwrap(), vec![6]);
    let out = render(&shell.view());
    assert!(out.ends_with("< Prev  Page 6 of 6  Showing 51-51 of 57\n"));

    assert!(shell.set_server_hints(Some(25), false, true));
    assert_eq!(shell.current_page(), 3);
    assert_eq!(*pages.lock().unwrap(), vec![6, 3]);
}

#[test]
fn test_huge_server_page_does_not_overflow() {
    let config = GridConfig::new()
        .paginate(10)
        .current_page(usize::MAX)
        .server(Some(57), true, true);
    let shell = GridShell::new(columns(), amounts(), config);
    assert_eq!(shell.current_page(), 6);
    let controls = shell.view().pagination.unwrap();
    assert_eq!((controls.first_item, controls.last_item), (51, 53));

    let config = GridConfig::new()
        .paginate(10)
        .current_page(usize::MAX)
        .server(None, true, true);
    let mut shell = GridShell::new(columns(), amounts(), config);
    assert!(!shell.next_page());
    assert_eq!(shell.current_page(), usize::MAX);
    let controls = shell.view().pagination.unwrap();
    assert_eq!(controls.last_item, usize::MAX);
    assert!(render(&shell.view()).contains(&format!("Page {}", usize::MAX)));
}

#[test]
fn test_server_next_page_then_caller_swaps_rows() {
    let page_of = |page: i64| -> Vec<Record> {
        (1i64..=10)
            .map(|i| Record::new().set("id", (page - 1) * 10 + i).set("amt", 10i64))
            .collect()
    };
    let pages = Arc::new(Mutex::new(Vec::new()));
    let sink = pages.clone();
    let config = GridConfig::new()
        .paginate(10)
        .server(Some(57), true, false)
        .on_page_change(move |page| sink.lock().unwrap().push(page));
    let mut shell = GridShell::new(columns(), page_of(1), config);

    assert!(shell.next_page());
    assert_eq!(*pages.lock().unwrap(), vec![2]);
    assert_eq!(shell.current_page(), 2);
    assert_eq!(shell.visible_rows()[0].get("id"), Some(&Value::Int(1)));

    shell.set_server_page(page_of(2), 2, Some(57), true, true);
    assert_eq!(shell.visible_rows()[0].get("id"), Some(&Value::Int(11)));
    let controls = shell.page_controls().unwrap();
    assert_eq!((controls.first_item, controls.last_item), (11, 20));
    assert!(controls.has_previous);
    assert!(controls.has_next);
    assert_eq!(*pages.lock().unwrap(), vec![2]);

    shell.set_server_page(page_of(6)[..7].to_vec(), 6, Some(57), false, true);
    let controls = shell.page_controls().unwrap();
    assert_eq!((controls.first_item, controls.last_item), (51, 57));
    assert!(!controls.has_next);
    assert!(!shell.next_page());
}

#[test]
fn test_filter_fires_under_the_default_label() {
    let fired = Arc::new(Mutex::new(0));
    let sink = fired.clone();
    let config = GridConfig::new()
        .title("Invoices")
        .on_filter(move || *sink.lock().unwrap() += 1);
    let shell = GridShell::new(columns(), amounts(), config);

    let view = shell.view();
    assert_eq!(view.filter.as_deref(), Some("Filter"));
    assert!(render(&view).starts_with("Invoices  [Filter]\n"));

    assert!(shell.trigger_filter());
    assert!(shell.trigger_filter());
    assert_eq!(*fired.lock().unwrap(), 2);
}

#[test]
fn test_filter_uses_the_page_label() {
    let shell = GridShell::new(
        columns(),
        amounts(),
        GridConfig::new().filter("Filter transfers", || {}),
    );
    let view = shell.view();
    assert_eq!(view.filter.as_deref(), Some("Filter transfers"));
    assert!(render(&view).starts_with("[Filter transfers]\n"));

    let plain = GridShell::new(columns(), amounts(), GridConfig::new().title("Transfers"));
    assert_eq!(plain.view().filter, None);
    assert!(!plain.trigger_filter());
    assert!(render(&plain.view()).starts_with("Transfers\n"));
}

#[test]
fn test_replacing_columns_carries_visibility_and_sort() {
    let mut shell = GridShell::new(columns(), amounts(), GridConfig::new().column_selector());
    assert!(shell.hide_column("name"));
    assert!(shell.toggle_sort("id").is_some());

    shell.set_columns(ColumnSet::new(vec![
        Column::field("id", "Id").sortable(),
        Column::field("amt", "Amount").sum(),
    ]));
    assert_eq!(shell.sort().map(|s| s.column_id.as_str()), Some("id"));
    let headers: Vec<String> = shell.view().headers.into_iter().map(|h| h.id).collect();
    assert_eq!(headers, vec!["id", "amt"]);
    assert_eq!(shell.view().headers[0].sort, Some(SortDirection::Ascending));

    shell.set_columns(ColumnSet::new(vec![
        Column::field("name", "Name"),
        Column::field("amt", "Amount").sum(),
    ]));
    assert_eq!(shell.sort(), None);
    assert!(shell.visibility().is_visible("name"));
    let headers: Vec<String> = shell.view().headers.into_iter().map(|h| h.id).collect();
    assert_eq!(headers, vec!["name", "amt"]);
}

#[test]
fn test_replacing_columns_keeps_a_surviving_hidden_column_hidden() {
    let mut shell = GridShell::new(columns(), amounts(), GridConfig::new().column_selector());
    assert!(shell.hide_column("name"));

    shell.set_columns(ColumnSet::new(vec![
        Column::field("name", "Name"),
        Column::field("amt", "Amount").sum(),
    ]));
    let visible: Vec<&str> = shell.visible_columns().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(visible, vec!["amt"]);
    let selector = shell.view().column_selector.unwrap();
    assert_eq!(selector.len(), 2);
    assert!(!selector[0].visible);
}
