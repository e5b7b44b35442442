//! Generic data grid engine
//!
//! A headless table engine: callers hand it a column descriptor set and a
//! row store, and it owns the ephemeral UI state on top of them (page
//! window, visible columns, sort intent, scroll offset). Every screen of the
//! console is a different [`GridConfig`] over the same [`GridShell`].
//!
//! # Example
//!
//! ```
//! use grid_engine::prelude::*;
//!
//! let columns = ColumnSet::new(vec![
//!     Column::field("name", "Name"),
//!     Column::field("amt", "Amount").sum(),
//! ]);
//! let rows = vec![
//!     Record::new().set("id", 1i64).set("name", "Rent").set("amt", 100i64),
//!     Record::new().set("id", 2i64).set("name", "Fuel").set("amt", 200i64),
//!     Record::new().set("id", 3i64).set("name", "Food").set("amt", 300i64),
//! ];
//! let config = GridConfig::new().paginate(2).footer();
//!
//! let shell = GridShell::new(columns, rows, config);
//! assert_eq!(shell.visible_rows().len(), 2);
//! assert_eq!(shell.column_total("amt"), Some(rust_decimal::Decimal::from(300)));
//! ```

pub mod action;
pub mod aggregate;
pub mod cell;
pub mod column;
pub mod config;
pub mod error;
pub mod layout;
pub mod model;
pub mod pagination;
pub mod render;
pub mod scroll;
pub mod shell;
pub mod view;
pub mod visibility;

pub use config::GridConfig;
pub use shell::GridShell;

pub mod prelude {
    pub use crate::action::{ActionKind, ActionSet, Affordance, GridMode};
    pub use crate::cell::{Cell, Tone, format};
    pub use crate::column::{Alignment, Column, ColumnSet};
    pub use crate::config::GridConfig;
    pub use crate::error::{DispatchError, GridError};
    pub use crate::model::{GridRow, Record, RowKey, Value};
    pub use crate::pagination::{PageControls, Pagination, PaginationMode};
    pub use crate::shell::{GridShell, LoadStatus, SortDirection, SortIntent};
    pub use crate::view::{Body, GridView};
}
