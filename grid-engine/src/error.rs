//! Error types

use crate::action::ActionKind;

/// Error raised while building grid inputs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// Two column descriptors share the same id.
    #[error("Column '{id}' is defined more than once")]
    DuplicateColumn { id: String },

    /// A row could not be built from the supplied data.
    #[error("Invalid record: {reason}")]
    InvalidRecord { reason: String },
}

impl GridError {
    /// Creates a new duplicate column error.
    pub fn duplicate_column(id: impl Into<String>) -> Self {
        Self::DuplicateColumn { id: id.into() }
    }

    /// Creates a new invalid record error.
    pub fn invalid_record(reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            reason: reason.into(),
        }
    }
}

/// Error returned when a row interaction cannot be forwarded to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    /// The index does not address a row of the rendered window.
    #[error("Row {index} is outside the rendered window of {len} rows")]
    RowOutOfRange { index: usize, len: usize },

    /// No affordance is rendered for this action.
    #[error("Action '{action}' is not available on this grid")]
    ActionUnavailable { action: ActionKind },

    /// The column id is not part of the visible column set.
    #[error("Column '{id}' is not visible")]
    UnknownColumn { id: String },
}
