//! Command implementations.
//!
//! Commands act as the page glue around the engine: they mount a screen,
//! feed it the data file, forward user input and print the intents the
//! engine emits back.

use std::cmp::Ordering;
use std::fmt;
use std::io::Write;
use std::sync::{Arc, Mutex};

use grid_engine::model::{GridRow, Record, RowKey, Value};
use grid_engine::prelude::{ActionKind, GridShell, SortDirection, SortIntent};
use grid_engine::render::text::render;

use crate::cli::{ActArgs, ShowArgs};
use crate::config::ConsoleConfig;
use crate::data::Dataset;
use crate::error::{ConsoleError, Result};
use crate::screens::Screen;

/// Prefix of `--action` values that activate a link cell.
const LINK_ACTION: &str = "link:";

/// Something the engine asked the page to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Navigate(String),
    /// A row action that opens a form or a confirmation.
    RowAction {
        action: ActionKind,
        row: Option<RowKey>,
    },
    PageChange(usize),
    Sort(Option<SortIntent>),
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::Navigate(path) => write!(f, "navigate to {}", path),
            Intent::RowAction { action, row } => {
                let verb = match action {
                    ActionKind::View => "open",
                    ActionKind::Edit => "open edit form for",
                    ActionKind::Delete => "delete",
                    ActionKind::Approve => "approve",
                    ActionKind::Reject => "reject",
                };
                match row {
                    Some(key) => write!(f, "{} row {}", verb, key),
                    None => write!(f, "{} row without id", verb),
                }
            }
            Intent::PageChange(page) => write!(f, "page changed to {}", page),
            Intent::Sort(Some(intent)) => {
                let direction = match intent.direction {
                    SortDirection::Ascending => "ascending",
                    SortDirection::Descending => "descending",
                };
                write!(f, "sort by {} {}", intent.column_id, direction)
            }
            Intent::Sort(None) => write!(f, "sort cleared"),
        }
    }
}

/// Intents collected from engine callbacks.
#[derive(Debug, Clone, Default)]
pub struct IntentLog(Arc<Mutex<Vec<Intent>>>);

impl IntentLog {
    pub fn push(&self, intent: Intent) {
        log::debug!("Intent: {}", intent);
        if let Ok(mut entries) = self.0.lock() {
            entries.push(intent);
        }
    }

    /// Take every intent recorded so far.
    pub fn drain(&self) -> Vec<Intent> {
        self.0
            .lock()
            .map(|mut entries| std::mem::take(&mut *entries))
            .unwrap_or_default()
    }
}

/// Presentation options from the command line.
#[derive(Debug, Clone, Copy)]
struct Presentation {
    page: usize,
    /// `None` shows every row.
    per_page: Option<usize>,
    max_height: Option<u16>,
    footer: bool,
}

fn resolve_screen(name: &str) -> Result<Screen> {
    Screen::from_name(name).ok_or_else(|| ConsoleError::UnknownScreen(name.to_string()))
}

/// Mount `screen` over `dataset` with callbacks feeding `intents`.
fn mount(
    screen: Screen,
    dataset: Dataset,
    presentation: Presentation,
    console: &ConsoleConfig,
    intents: &IntentLog,
) -> GridShell<Record> {
    let columns = screen.columns(&console.currency_symbol);
    let mut config = screen.config().current_page(presentation.page);

    if let Some(per_page) = presentation.per_page {
        config = config.paginate(per_page);
        if let Some(hints) = dataset.server {
            config = config.pagination(hints.mode(presentation.page, per_page));
        }
    }
    if let Some(height) = presentation.max_height {
        config = config.max_height(height);
    }
    if !presentation.footer {
        config.show_footer = false;
    }

    let route = screen.detail_route();
    for &action in screen.actions() {
        let sink = intents.clone();
        config = config.on_action(action, move |row: &Record| {
            let key = row.row_id();
            match (action, key) {
                (ActionKind::View, Some(key)) => {
                    sink.push(Intent::Navigate(route.replace("{id}", &key.to_string())))
                }
                (action, row) => sink.push(Intent::RowAction { action, row }),
            }
        });
    }

    let sink = intents.clone();
    config = config.on_navigate(move |path| sink.push(Intent::Navigate(path.to_string())));
    let sink = intents.clone();
    config = config.on_page_change(move |page| sink.push(Intent::PageChange(page)));
    let sink = intents.clone();
    config = config.on_sort(move |intent| sink.push(Intent::Sort(intent.cloned())));

    let mut shell = GridShell::new(columns, dataset.rows, config);
    shell.set_status(dataset.status);
    shell
}

/// `screens`: list the presets.
pub fn list_screens(out: &mut impl Write) -> Result<()> {
    let width = Screen::ALL
        .iter()
        .map(|s| s.name().len())
        .max()
        .unwrap_or(0);
    for screen in Screen::ALL {
        writeln!(out, "{:width$}  {}", screen.name(), screen.description(), width = width)?;
    }
    Ok(())
}

/// `show`: render a screen.
pub fn show(args: &ShowArgs, console: &ConsoleConfig, out: &mut impl Write) -> Result<()> {
    let screen = resolve_screen(&args.screen)?;
    let dataset = Dataset::load(&args.data)?;
    let server = dataset.server.is_some();

    let presentation = Presentation {
        page: args.page,
        per_page: (!args.all).then(|| args.per_page.unwrap_or(console.items_per_page)),
        max_height: match args.max_height {
            Some(0) => None,
            Some(height) => Some(height),
            None => console.height_limit(),
        },
        footer: !args.no_footer,
    };
    let intents = IntentLog::default();
    let mut shell = mount(screen, dataset, presentation, console, &intents);

    for column in &args.hide {
        if !shell.columns().contains(column) {
            return Err(ConsoleError::unknown_column(screen.name(), column));
        }
        if !shell.hide_column(column) {
            log::warn!("Keeping column '{}': it is the last one visible", column);
        }
    }

    if let Some(requested) = &args.sort {
        let (column_id, descending) = match requested.strip_prefix('-') {
            Some(id) => (id, true),
            None => (requested.as_str(), false),
        };
        if !shell.columns().contains(column_id) {
            return Err(ConsoleError::unknown_column(screen.name(), column_id));
        }
        match shell.toggle_sort(column_id) {
            Some(_) if descending => {
                shell.toggle_sort(column_id);
            }
            Some(_) => {}
            None => log::warn!("Column '{}' is not sortable", column_id),
        }
        // Client-paged data is sorted here; a server sorts its own pages.
        if let Some(intent) = shell.sort().cloned()
            && !server
        {
            let rows = sort_rows(&shell, &intent);
            shell.set_rows(rows);
        }
    }

    if args.scroll > 0 {
        shell.scroll_by(isize::try_from(args.scroll).unwrap_or(isize::MAX));
    }

    write!(out, "{}", render(&shell.view()))?;
    for intent in intents.drain() {
        writeln!(out, "» {}", intent)?;
    }
    Ok(())
}

/// `act`: dispatch a row action or activate a link cell.
pub fn act(args: &ActArgs, console: &ConsoleConfig, out: &mut impl Write) -> Result<()> {
    let screen = resolve_screen(&args.screen)?;
    let dataset = Dataset::load(&args.data)?;

    let presentation = Presentation {
        page: args.page,
        per_page: Some(args.per_page.unwrap_or(console.items_per_page)),
        max_height: None,
        footer: false,
    };
    let intents = IntentLog::default();
    let shell = mount(screen, dataset, presentation, console, &intents);
    // Mount-time page clamps are not part of the action.
    let _ = intents.drain();

    if let Some(column) = args.action.strip_prefix(LINK_ACTION) {
        if shell.activate_cell(args.row, column)?.is_none() {
            writeln!(out, "Column '{}' has no link on row {}", column, args.row)?;
        }
    } else {
        let kind = ActionKind::from_name(&args.action)
            .ok_or_else(|| ConsoleError::UnknownAction(args.action.clone()))?;
        shell.dispatch(args.row, kind)?;
        let affordance = shell.view().actions.into_iter().find(|a| a.kind == kind);
        if let Some(affordance) = affordance
            && affordance.confirm
        {
            writeln!(out, "{} needs confirmation before it is sent", affordance.label)?;
        }
    }

    for intent in intents.drain() {
        writeln!(out, "» {}", intent)?;
    }
    Ok(())
}

/// Rows of `shell` ordered by `intent`. Missing values sort last.
fn sort_rows(shell: &GridShell<Record>, intent: &SortIntent) -> Vec<Record> {
    let field = shell
        .columns()
        .get(&intent.column_id)
        .and_then(|c| c.accessor.clone())
        .unwrap_or_else(|| intent.column_id.clone());

    let mut rows = shell.rows().to_vec();
    rows.sort_by(|a, b| {
        let (a, b) = (a.get(&field), b.get(&field));
        match (present(a), present(b)) {
            (Some(a), Some(b)) => {
                let ordering = compare_values(a, b);
                match intent.direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            }
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
    rows
}

fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::DateTime(a), Value::DateTime(b)) => a.cmp(b),
        (Value::String(a), Value::String(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
        _ => match (a.as_number(), b.as_number()) {
            (Some(a), Some(b)) => a.cmp(&b),
            _ => a.to_string().cmp(&b.to_string()),
        },
    }
}
