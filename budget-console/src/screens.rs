//! Screen presets.
//!
//! Every list screen of the console is a column set plus a grid
//! configuration over the shared engine. Screens carry no state of their
//! own.

use std::fmt;

use grid_engine::prelude::*;

/// Status vocabularies shared by several screens.
const ACCOUNT_STATUSES: &[(&str, Tone)] = &[
    ("active", Tone::Success),
    ("frozen", Tone::Warning),
    ("closed", Tone::Neutral),
];

const PROJECT_STATUSES: &[(&str, Tone)] = &[
    ("planned", Tone::Info),
    ("active", Tone::Success),
    ("on_hold", Tone::Warning),
    ("completed", Tone::Neutral),
    ("cancelled", Tone::Danger),
];

const WORKFLOW_STATUSES: &[(&str, Tone)] = &[
    ("draft", Tone::Neutral),
    ("active", Tone::Success),
    ("retired", Tone::Warning),
];

const INVOICE_STATUSES: &[(&str, Tone)] = &[
    ("draft", Tone::Neutral),
    ("submitted", Tone::Info),
    ("paid", Tone::Success),
    ("overdue", Tone::Danger),
];

const TRANSFER_STATUSES: &[(&str, Tone)] = &[
    ("pending", Tone::Warning),
    ("approved", Tone::Success),
    ("rejected", Tone::Danger),
    ("completed", Tone::Neutral),
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A list screen of the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Accounts,
    Projects,
    Workflows,
    Invoices,
    Transfers,
    PendingTransfers,
    InvoiceDocuments,
}

impl Screen {
    pub const ALL: [Screen; 7] = [
        Screen::Accounts,
        Screen::Projects,
        Screen::Workflows,
        Screen::Invoices,
        Screen::Transfers,
        Screen::PendingTransfers,
        Screen::InvoiceDocuments,
    ];

    /// Command-line name.
    pub fn name(self) -> &'static str {
        match self {
            Screen::Accounts => "accounts",
            Screen::Projects => "projects",
            Screen::Workflows => "workflows",
            Screen::Invoices => "invoices",
            Screen::Transfers => "transfers",
            Screen::PendingTransfers => "pending-transfers",
            Screen::InvoiceDocuments => "invoice-documents",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|screen| screen.name() == name)
    }

    /// Title bar text.
    pub fn title(self) -> &'static str {
        match self {
            Screen::Accounts => "Accounts",
            Screen::Projects => "Projects",
            Screen::Workflows => "Approval Workflows",
            Screen::Invoices => "Invoices",
            Screen::Transfers => "Budget Transfers",
            Screen::PendingTransfers => "Pending Transfers",
            Screen::InvoiceDocuments => "Invoice Documents",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Screen::Accounts => "Budget accounts and their balances",
            Screen::Projects => "Projects with budget and spend",
            Screen::Workflows => "Approval workflows for transfers",
            Screen::Invoices => "Invoices charged to projects",
            Screen::Transfers => "Budget transfers between accounts",
            Screen::PendingTransfers => "Transfers awaiting approval",
            Screen::InvoiceDocuments => "Documents attached to invoices",
        }
    }

    /// Detail route for a row; `{id}` is replaced with the row id.
    pub fn detail_route(self) -> &'static str {
        match self {
            Screen::Accounts => "/accounts/{id}",
            Screen::Projects => "/projects/{id}",
            Screen::Workflows => "/workflows/{id}",
            Screen::Invoices => "/invoices/{id}",
            Screen::Transfers | Screen::PendingTransfers => "/transfers/{id}",
            Screen::InvoiceDocuments => "/documents/{id}",
        }
    }

    /// Actions the page wires up. Which of them render is still up to the
    /// grid's mode flags.
    pub fn actions(self) -> &'static [ActionKind] {
        match self {
            Screen::PendingTransfers => {
                &[ActionKind::View, ActionKind::Approve, ActionKind::Reject]
            }
            Screen::InvoiceDocuments => &[ActionKind::View, ActionKind::Delete],
            Screen::Workflows => &[ActionKind::View, ActionKind::Edit],
            _ => &[ActionKind::View, ActionKind::Edit, ActionKind::Delete],
        }
    }

    /// Column descriptors.
    pub fn columns(self, currency_symbol: &str) -> ColumnSet<Record> {
        let money = |id: &str, header: &str| {
            Column::field(id, header)
                .render_with(format::currency(currency_symbol, 2))
                .total_format(format::currency_total(currency_symbol, 2))
                .align(Alignment::Right)
                .sortable()
                .sum()
        };
        let date = |id: &str, header: &str| {
            Column::field(id, header)
                .render_with(format::date(DATE_FORMAT))
                .sortable()
        };
        let status = |statuses: &'static [(&'static str, Tone)]| {
            Column::field("status", "Status").render_with(format::status_badge(statuses))
        };
        let id = || Column::field("id", "ID").align(Alignment::Right).sortable();
        let route = self.detail_route();

        let columns = match self {
            Screen::Accounts => vec![
                id(),
                Column::field("code", "Code").width(10),
                Column::field("name", "Name").render_with(format::link(route)).sortable(),
                Column::field("owner", "Owner"),
                money("balance", "Balance"),
                status(ACCOUNT_STATUSES),
            ],
            Screen::Projects => vec![
                id(),
                Column::field("name", "Project").render_with(format::link(route)).sortable(),
                Column::new("account", "Account").accessor("account_name"),
                money("budget", "Budget"),
                money("spent", "Spent"),
                date("start_date", "Start"),
                status(PROJECT_STATUSES),
            ],
            Screen::Workflows => vec![
                id(),
                Column::field("name", "Workflow").render_with(format::link(route)).sortable(),
                Column::field("steps", "Steps").align(Alignment::Right),
                Column::field("approver", "Approver"),
                status(WORKFLOW_STATUSES),
            ],
            Screen::Invoices => vec![
                id(),
                Column::field("number", "Invoice #").render_with(format::link(route)).sortable(),
                Column::field("vendor", "Vendor").sortable(),
                Column::new("project", "Project").accessor("project_name"),
                money("amount", "Amount"),
                date("issued_at", "Issued"),
                date("due_date", "Due"),
                status(INVOICE_STATUSES),
            ],
            Screen::Transfers | Screen::PendingTransfers => vec![
                id(),
                Column::field("reference", "Reference").render_with(format::link(route)),
                Column::new("from", "From").accessor("from_account"),
                Column::new("to", "To").accessor("to_account"),
                money("amount", "Amount"),
                Column::field("requested_by", "Requested by"),
                date("requested_at", "Requested"),
                status(TRANSFER_STATUSES),
            ],
            Screen::InvoiceDocuments => vec![
                id(),
                Column::field("file_name", "File").render_with(format::link(route)),
                Column::new("invoice", "Invoice").accessor("invoice_number"),
                Column::field("size", "Size")
                    .render(|value, _| match value.and_then(Value::as_number) {
                        Some(bytes) => Cell::text(human_size(bytes)),
                        None => Cell::Empty,
                    })
                    .align(Alignment::Right),
                date("uploaded_at", "Uploaded"),
            ],
        };
        ColumnSet::new(columns)
    }

    /// Grid configuration template, without callbacks.
    pub fn config(self) -> GridConfig<Record> {
        let config = GridConfig::new()
            .title(self.title())
            .class_name(self.name())
            .column_selector();
        match self {
            Screen::Accounts => config.footer().actions().empty_message("No accounts yet"),
            Screen::Projects => config.footer().actions().empty_message("No projects found"),
            Screen::Workflows => config.actions().empty_message("No workflows defined"),
            Screen::Invoices => config.footer().actions().empty_message("No invoices found"),
            Screen::Transfers => config.footer().actions().empty_message("No transfers found"),
            Screen::PendingTransfers => config
                .footer()
                .pending()
                .empty_message("Nothing is waiting for approval"),
            Screen::InvoiceDocuments => config
                .documents()
                .empty_message("No documents attached"),
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn human_size(bytes: rust_decimal::Decimal) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let step = rust_decimal::Decimal::from(1024);
    let mut size = bytes;
    let mut unit = 0;
    while size >= step && unit < UNITS.len() - 1 {
        size /= step;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", size.round(), UNITS[unit])
    } else {
        format!("{} {}", size.round_dp(1).normalize(), UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn test_names_round_trip() {
        for screen in Screen::ALL {
            assert_eq!(Screen::from_name(screen.name()), Some(screen));
        }
        assert_eq!(Screen::from_name("payroll"), None);
    }

    #[test]
    fn test_column_ids_are_unique() {
        for screen in Screen::ALL {
            let columns = screen.columns("$");
            let mut ids = columns.ids();
            let len = ids.len();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), len, "{} has duplicate columns", screen);
        }
    }

    #[test]
    fn test_amount_columns_are_summed() {
        let columns = Screen::Transfers.columns("$");
        assert!(columns.get("amount").unwrap().show_sum);
        assert!(!columns.get("status").unwrap().show_sum);
    }

    #[test]
    fn test_modes() {
        assert_eq!(Screen::PendingTransfers.config().mode(), GridMode::Pending);
        assert_eq!(Screen::InvoiceDocuments.config().mode(), GridMode::Documents);
        assert_eq!(Screen::Transfers.config().mode(), GridMode::Standard);
    }

    #[test]
    fn test_human_size() {
        assert_eq!(human_size(Decimal::from(512)), "512 B");
        assert_eq!(human_size(Decimal::from(1536)), "1.5 KB");
        assert_eq!(human_size(Decimal::from(3 * 1024 * 1024)), "3 MB");
    }
}
