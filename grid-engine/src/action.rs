//! Row actions.
//!
//! A fixed vocabulary of row actions is exposed as optional callback slots.
//! Which affordances render is decided once, when the dispatcher is built:
//! an action is available iff its callback was supplied and the grid's
//! configuration enables its category. Nothing else in the engine checks
//! callbacks directly.

use std::fmt;
use std::sync::Arc;

use crate::cell::Tone;
use crate::error::DispatchError;

/// Row action callback. Receives the whole row, never just an id.
pub type ActionFn<R> = Arc<dyn Fn(&R) + Send + Sync>;

/// The row actions the engine knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    View,
    Edit,
    Delete,
    Approve,
    Reject,
}

impl ActionKind {
    /// All actions in affordance order.
    pub const ALL: [ActionKind; 5] = [
        ActionKind::View,
        ActionKind::Edit,
        ActionKind::Delete,
        ActionKind::Approve,
        ActionKind::Reject,
    ];

    /// Lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            ActionKind::View => "view",
            ActionKind::Edit => "edit",
            ActionKind::Delete => "delete",
            ActionKind::Approve => "approve",
            ActionKind::Reject => "reject",
        }
    }

    /// Parse a lowercase name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    fn bit(self) -> u8 {
        match self {
            ActionKind::View => 1,
            ActionKind::Edit => 1 << 1,
            ActionKind::Delete => 1 << 2,
            ActionKind::Approve => 1 << 3,
            ActionKind::Reject => 1 << 4,
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Presentation mode; picks affordance labels and tones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridMode {
    #[default]
    Standard,
    /// Items awaiting a workflow decision.
    Pending,
    /// Attached documents.
    Documents,
}

/// A set of actions, stored as bit flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActionSet(u8);

impl ActionSet {
    /// The empty set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Set holding the given actions.
    pub fn of(kinds: &[ActionKind]) -> Self {
        kinds.iter().fold(Self::empty(), |set, kind| set.with(*kind))
    }

    /// Categories enabled by the page-level flags.
    ///
    /// `show_actions` enables view/edit/delete, `pending` enables
    /// view/approve/reject and `documents` enables view/delete.
    pub fn categories(show_actions: bool, pending: bool, documents: bool) -> Self {
        let mut set = Self::empty();
        if show_actions {
            set = set.union(Self::of(&[ActionKind::View, ActionKind::Edit, ActionKind::Delete]));
        }
        if pending {
            set = set.union(Self::of(&[ActionKind::View, ActionKind::Approve, ActionKind::Reject]));
        }
        if documents {
            set = set.union(Self::of(&[ActionKind::View, ActionKind::Delete]));
        }
        set
    }

    /// Returns the set with `kind` added.
    pub fn with(self, kind: ActionKind) -> Self {
        Self(self.0 | kind.bit())
    }

    /// Returns `true` if `kind` is in the set.
    pub fn contains(self, kind: ActionKind) -> bool {
        self.0 & kind.bit() != 0
    }

    /// Union of two sets.
    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Intersection of two sets.
    pub fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of actions in the set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Actions in the set, in affordance order.
    pub fn iter(self) -> impl Iterator<Item = ActionKind> {
        ActionKind::ALL.into_iter().filter(move |kind| self.contains(*kind))
    }
}

/// Optional callbacks for each row action.
pub struct ActionSlots<R> {
    pub on_view: Option<ActionFn<R>>,
    pub on_edit: Option<ActionFn<R>>,
    pub on_delete: Option<ActionFn<R>>,
    pub on_approve: Option<ActionFn<R>>,
    pub on_reject: Option<ActionFn<R>>,
}

impl<R> ActionSlots<R> {
    /// No callbacks.
    pub fn new() -> Self {
        Self {
            on_view: None,
            on_edit: None,
            on_delete: None,
            on_approve: None,
            on_reject: None,
        }
    }

    /// Callback for `kind`, if supplied.
    pub fn get(&self, kind: ActionKind) -> Option<&ActionFn<R>> {
        match kind {
            ActionKind::View => self.on_view.as_ref(),
            ActionKind::Edit => self.on_edit.as_ref(),
            ActionKind::Delete => self.on_delete.as_ref(),
            ActionKind::Approve => self.on_approve.as_ref(),
            ActionKind::Reject => self.on_reject.as_ref(),
        }
    }

    /// Install the callback for `kind`.
    pub fn set(&mut self, kind: ActionKind, callback: ActionFn<R>) {
        let slot = match kind {
            ActionKind::View => &mut self.on_view,
            ActionKind::Edit => &mut self.on_edit,
            ActionKind::Delete => &mut self.on_delete,
            ActionKind::Approve => &mut self.on_approve,
            ActionKind::Reject => &mut self.on_reject,
        };
        *slot = Some(callback);
    }

    /// Actions that have a callback.
    pub fn supplied(&self) -> ActionSet {
        ActionKind::ALL
            .into_iter()
            .filter(|kind| self.get(*kind).is_some())
            .fold(ActionSet::empty(), ActionSet::with)
    }
}

impl<R> Default for ActionSlots<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for ActionSlots<R> {
    fn clone(&self) -> Self {
        Self {
            on_view: self.on_view.clone(),
            on_edit: self.on_edit.clone(),
            on_delete: self.on_delete.clone(),
            on_approve: self.on_approve.clone(),
            on_reject: self.on_reject.clone(),
        }
    }
}

impl<R> fmt::Debug for ActionSlots<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ActionSlots").field(&self.supplied()).finish()
    }
}

/// A rendered action button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Affordance {
    pub kind: ActionKind,
    pub label: &'static str,
    pub tone: Tone,
    /// The caller should confirm before acting; the engine never does.
    pub confirm: bool,
}

impl Affordance {
    fn new(kind: ActionKind, mode: GridMode) -> Self {
        let (label, tone) = match (mode, kind) {
            (GridMode::Pending, ActionKind::View) => ("Review", Tone::Info),
            (GridMode::Documents, ActionKind::View) => ("Open", Tone::Info),
            (GridMode::Documents, ActionKind::Delete) => ("Remove", Tone::Danger),
            (_, ActionKind::View) => ("View", Tone::Neutral),
            (_, ActionKind::Edit) => ("Edit", Tone::Info),
            (_, ActionKind::Delete) => ("Delete", Tone::Danger),
            (_, ActionKind::Approve) => ("Approve", Tone::Success),
            (_, ActionKind::Reject) => ("Reject", Tone::Danger),
        };
        Self {
            kind,
            label,
            tone,
            confirm: matches!(kind, ActionKind::Delete | ActionKind::Reject),
        }
    }
}

/// Forwards row actions to the caller's callbacks.
pub struct ActionDispatcher<R> {
    slots: ActionSlots<R>,
    available: ActionSet,
    mode: GridMode,
}

impl<R> ActionDispatcher<R> {
    /// Build a dispatcher; availability is fixed here.
    pub fn new(slots: ActionSlots<R>, categories: ActionSet, mode: GridMode) -> Self {
        let available = slots.supplied().intersection(categories);
        log::debug!("Row actions available: {:?}", available.iter().collect::<Vec<_>>());
        Self {
            slots,
            available,
            mode,
        }
    }

    /// Actions that render.
    pub fn available(&self) -> ActionSet {
        self.available
    }

    /// Returns `true` if `kind` renders.
    pub fn is_available(&self, kind: ActionKind) -> bool {
        self.available.contains(kind)
    }

    /// Presentation mode.
    pub fn mode(&self) -> GridMode {
        self.mode
    }

    /// Affordances to render on each row, in order.
    pub fn affordances(&self) -> Vec<Affordance> {
        self.available
            .iter()
            .map(|kind| Affordance::new(kind, self.mode))
            .collect()
    }

    /// Invoke the callback for `kind` with `row`.
    pub fn dispatch(&self, kind: ActionKind, row: &R) -> Result<(), DispatchError> {
        match self.slots.get(kind) {
            Some(callback) if self.available.contains(kind) => {
                callback(row);
                Ok(())
            }
            _ => Err(DispatchError::ActionUnavailable { action: kind }),
        }
    }
}

impl<R> fmt::Debug for ActionDispatcher<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionDispatcher")
            .field("available", &self.available)
            .field("mode", &self.mode)
            .finish()
    }
}
