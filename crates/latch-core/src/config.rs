use std::borrow::Cow;
use std::rc::Rc;

use crate::{Action, Reducer, ToggleError, ToggleState};

pub type OnChange = Rc<dyn Fn(&ToggleState, &Action)>;

/// Identifiers used when a watchdog names the offending props.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DiagnosticNames {
    pub component: Cow<'static, str>,
    pub control_prop: Cow<'static, str>,
    pub on_change_prop: Cow<'static, str>,
    pub read_only_prop: Cow<'static, str>,
    pub initial_value_prop: Cow<'static, str>,
}

impl Default for DiagnosticNames {
    fn default() -> Self {
        Self {
            component: Cow::Borrowed("use_toggle"),
            control_prop: Cow::Borrowed("on"),
            on_change_prop: Cow::Borrowed("on_change"),
            read_only_prop: Cow::Borrowed("read_only"),
            initial_value_prop: Cow::Borrowed("initial_on"),
        }
    }
}

impl DiagnosticNames {
    pub fn component(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.component = name.into();
        self
    }
}

/// Everything a caller hands to a toggle on each evaluation.
///
/// ```rust
/// use latch_core::*;
///
/// let cfg = ToggleConfig::new()
///     .initial_on(true)
///     .on_change(|next, action| log::info!("{action:?} -> {}", next.on));
/// assert!(cfg.controlled_value().is_none());
/// ```
#[derive(Clone, Default)]
pub struct ToggleConfig {
    pub initial_on: bool,
    pub reducer: Reducer,
    pub on_change: Option<OnChange>,
    /// `Some` puts the toggle in controlled mode.
    pub on: Option<bool>,
    pub read_only: bool,
    pub names: DiagnosticNames,
}

impl std::fmt::Debug for ToggleConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToggleConfig")
            .field("initial_on", &self.initial_on)
            .field("reducer", &self.reducer)
            .field("on_change", &self.on_change.as_ref().map(|_| "..."))
            .field("on", &self.on)
            .field("read_only", &self.read_only)
            .field("names", &self.names)
            .finish()
    }
}

impl ToggleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn initial_on(mut self, v: bool) -> Self {
        self.initial_on = v;
        self
    }

    pub fn reducer(
        mut self,
        f: impl Fn(&ToggleState, &Action) -> Result<ToggleState, ToggleError> + 'static,
    ) -> Self {
        self.reducer = Reducer::new(f);
        self
    }

    pub fn with_reducer(mut self, reducer: Reducer) -> Self {
        self.reducer = reducer;
        self
    }

    pub fn on_change(mut self, f: impl Fn(&ToggleState, &Action) + 'static) -> Self {
        self.on_change = Some(Rc::new(f));
        self
    }

    pub fn with_on_change(mut self, f: Option<OnChange>) -> Self {
        self.on_change = f;
        self
    }

    /// Controlled value. `None` leaves the toggle uncontrolled.
    pub fn on(mut self, v: impl Into<Option<bool>>) -> Self {
        self.on = v.into();
        self
    }

    pub fn read_only(mut self, v: bool) -> Self {
        self.read_only = v;
        self
    }

    pub fn names(mut self, names: DiagnosticNames) -> Self {
        self.names = names;
        self
    }

    pub fn controlled_value(&self) -> Option<bool> {
        self.on
    }

    pub fn has_on_change(&self) -> bool {
        self.on_change.is_some()
    }
}
