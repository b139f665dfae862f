use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::diagnostics::Watchdogs;
use crate::locals::{diagnostic_sink, diagnostics_enabled};
use crate::mode::{self, ControlMode, Resolution};
use crate::{Action, Props, ToggleConfig, ToggleError, ToggleState};

/// Handle to one logical toggle instance.
///
/// Cloning is cheap and every clone refers to the same instance. The handle
/// is single-threaded (`!Send`); separate instances share nothing.
///
/// ```rust
/// use latch_core::*;
///
/// let t = Toggle::new(ToggleConfig::new());
/// assert!(!t.on());
/// t.toggle().unwrap();
/// assert!(t.on());
/// t.reset().unwrap();
/// assert!(!t.on());
/// ```
#[derive(Clone)]
pub struct Toggle {
    inner: Rc<Inner>,
}

struct Inner {
    /// Captured at acquisition, never replaced.
    initial_state: ToggleState,
    /// Uncontrolled store. Written only by `dispatch`.
    state: RefCell<ToggleState>,
    config: RefCell<ToggleConfig>,
    watchdogs: RefCell<Watchdogs>,
}

impl std::fmt::Debug for Toggle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Toggle")
            .field("initial_state", &self.inner.initial_state)
            .field("state", &*self.inner.state.borrow())
            .field("config", &*self.inner.config.borrow())
            .finish()
    }
}

impl Toggle {
    /// Acquires a new instance and runs its first evaluation.
    pub fn new(config: ToggleConfig) -> Self {
        let initial_state = ToggleState::new(config.initial_on);
        let toggle = Self {
            inner: Rc::new(Inner {
                initial_state,
                state: RefCell::new(initial_state),
                watchdogs: RefCell::new(Watchdogs::new(ControlMode::of(config.on))),
                config: RefCell::new(config),
            }),
        };
        toggle.observe();
        toggle
    }

    /// Re-evaluates with the caller's latest configuration.
    ///
    /// A changed `initial_on` is stored but has no effect: the reset target
    /// was frozen at acquisition.
    pub fn evaluate(&self, config: ToggleConfig) {
        *self.inner.config.borrow_mut() = config;
        self.observe();
    }

    fn observe(&self) {
        if !diagnostics_enabled() {
            return;
        }
        let warnings = {
            let config = self.inner.config.borrow();
            self.inner.watchdogs.borrow_mut().observe(&config)
        };
        if warnings.is_empty() {
            return;
        }
        let sink = diagnostic_sink();
        for w in &warnings {
            sink.warn(w);
        }
    }

    pub fn resolve(&self) -> Resolution {
        mode::resolve(self.inner.config.borrow().on, &self.inner.state.borrow())
    }

    /// The effective value.
    pub fn on(&self) -> bool {
        self.resolve().on
    }

    pub fn is_controlled(&self) -> bool {
        self.resolve().is_controlled()
    }

    pub fn initial_state(&self) -> ToggleState {
        self.inner.initial_state
    }

    /// The uncontrolled store. Never the displayed value while controlled.
    pub fn internal_state(&self) -> ToggleState {
        *self.inner.state.borrow()
    }

    /// The single mutation path.
    ///
    /// Uncontrolled: commits `reducer(state, action)`. Controlled: leaves the
    /// store alone. Either way `on_change` then receives the reducer applied
    /// to the effective value. Both results are computed before anything is
    /// committed, so a reducer error leaves the instance untouched and
    /// suppresses the notification.
    pub fn dispatch(&self, action: Action) -> Result<(), ToggleError> {
        // No borrow may be held while the reducer or the callback runs.
        let (reducer, on_change, controlled) = {
            let c = self.inner.config.borrow();
            (c.reducer.clone(), c.on_change.clone(), c.on)
        };
        let current = *self.inner.state.borrow();
        let resolution = mode::resolve(controlled, &current);

        log::trace!(
            target: "latch::toggle",
            "dispatch {} ({}, on = {})",
            action.kind,
            resolution.mode,
            resolution.on
        );

        // Uncontrolled, the effective state is the stored one, so one
        // reducer call serves both the commit and the notification.
        let next = reducer.apply(&resolution.effective_state(), &action)?;
        if !resolution.is_controlled() {
            *self.inner.state.borrow_mut() = next;
        }

        if let Some(cb) = on_change {
            cb(&next, &action);
        }
        Ok(())
    }

    pub fn toggle(&self) -> Result<(), ToggleError> {
        self.dispatch(Action::toggle())
    }

    pub fn reset(&self) -> Result<(), ToggleError> {
        self.dispatch(Action::reset(self.inner.initial_state))
    }

    /// Props for the element that flips the toggle.
    pub fn toggler_props(&self, overrides: Props) -> Props {
        let weak = Rc::downgrade(&self.inner);
        Props::new()
            .pressed(self.on())
            .on_click(move || run_from_handler(&weak, Toggle::toggle))
            .merged_with(overrides)
    }

    /// Props for the element that resets the toggle.
    pub fn resetter_props(&self, overrides: Props) -> Props {
        let weak = Rc::downgrade(&self.inner);
        Props::new()
            .on_click(move || run_from_handler(&weak, Toggle::reset))
            .merged_with(overrides)
    }
}

fn run_from_handler(weak: &Weak<Inner>, op: fn(&Toggle) -> Result<(), ToggleError>) {
    let Some(inner) = weak.upgrade() else {
        log::debug!(target: "latch::toggle", "click on a dropped toggle ignored");
        return;
    };
    if let Err(e) = op(&Toggle { inner }) {
        log::error!(target: "latch::toggle", "toggle handler failed: {e}");
    }
}
