//! # Misuse diagnostics
//!
//! Two watchdogs look at each evaluation of a toggle and report misuse of
//! the control props. Neither changes behavior; they only produce
//! [`Warning`]s for a [`DiagnosticSink`].
//!
//! - [`ControlModeWatchdog`] is edge‑triggered. It remembers the mode of the
//!   first evaluation and warns once each time the current mode moves away
//!   from it.
//! - [`ReadOnlyWatchdog`] is level‑triggered. It re‑checks whenever its
//!   inputs change and warns while a controlled toggle has neither a change
//!   handler nor `read_only` set.
//!
//! Both are re‑evaluated only when their key (the inputs that can change the
//! verdict) differs from the previous evaluation, via [`KeyedCheck`].

use std::cell::RefCell;
use std::fmt;

use smallvec::SmallVec;

use crate::{ControlMode, DiagnosticNames, ToggleConfig};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Warning {
    ControlModeChanged {
        names: DiagnosticNames,
        from: ControlMode,
        to: ControlMode,
    },
    ReadOnlyWithoutHandler {
        names: DiagnosticNames,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::ControlModeChanged { names, from, to } => write!(
                f,
                "`{c}` is changing from {from} to be {to}. Components should not switch \
                 from controlled to uncontrolled (or vice versa). Decide between using a \
                 controlled or uncontrolled `{c}` for the lifetime of the component. \
                 Check the `{p}` prop.",
                c = names.component,
                p = names.control_prop,
            ),
            Warning::ReadOnlyWithoutHandler { names } => write!(
                f,
                "A `{p}` prop was provided to `{c}` without an `{h}` handler. This will \
                 result in a read-only `{p}` value. If you want it to be mutable, use \
                 `{i}`. Otherwise, set either `{h}` or `{r}`.",
                p = names.control_prop,
                c = names.component,
                h = names.on_change_prop,
                i = names.initial_value_prop,
                r = names.read_only_prop,
            ),
        }
    }
}

/// Where watchdog output goes.
pub trait DiagnosticSink {
    fn warn(&self, warning: &Warning);
}

impl<F: Fn(&Warning)> DiagnosticSink for F {
    fn warn(&self, warning: &Warning) {
        self(warning)
    }
}

/// Default sink: `log::warn!` under the `latch::diagnostics` target.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn warn(&self, warning: &Warning) {
        log::warn!(target: "latch::diagnostics", "{warning}");
    }
}

/// Keeps every warning in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    warnings: RefCell<Vec<Warning>>,
}

impl RecordingSink {
    pub fn len(&self) -> usize {
        self.warnings.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.borrow().is_empty()
    }

    pub fn warnings(&self) -> Vec<Warning> {
        self.warnings.borrow().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.warnings.borrow().iter().map(|w| w.to_string()).collect()
    }

    pub fn take(&self) -> Vec<Warning> {
        std::mem::take(&mut *self.warnings.borrow_mut())
    }
}

impl DiagnosticSink for RecordingSink {
    fn warn(&self, warning: &Warning) {
        self.warnings.borrow_mut().push(warning.clone());
    }
}

/// Runs a check only when its key differs from the last run.
#[derive(Debug)]
pub struct KeyedCheck<K> {
    last_key: Option<K>,
}

impl<K> Default for KeyedCheck<K> {
    fn default() -> Self {
        Self { last_key: None }
    }
}

impl<K: PartialEq> KeyedCheck<K> {
    /// Returns whether `check` ran.
    pub fn run(&mut self, key: K, check: impl FnOnce(&K)) -> bool {
        if self.last_key.as_ref() == Some(&key) {
            return false;
        }
        check(&key);
        self.last_key = Some(key);
        true
    }
}

#[derive(Debug)]
pub struct ControlModeWatchdog {
    was: ControlMode,
    check: KeyedCheck<(ControlMode, DiagnosticNames)>,
}

impl ControlModeWatchdog {
    /// `was` is fixed for the life of the watchdog.
    pub fn new(was: ControlMode) -> Self {
        Self {
            was,
            check: KeyedCheck::default(),
        }
    }

    pub fn was(&self) -> ControlMode {
        self.was
    }

    pub fn observe(&mut self, current: ControlMode, names: &DiagnosticNames) -> Option<Warning> {
        let was = self.was;
        let mut out = None;
        self.check.run((current, names.clone()), |_| {
            if was != current {
                out = Some(Warning::ControlModeChanged {
                    names: names.clone(),
                    from: was,
                    to: current,
                });
            }
        });
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ReadOnlyKey {
    mode: ControlMode,
    has_on_change: bool,
    read_only: bool,
    names: DiagnosticNames,
}

#[derive(Debug, Default)]
pub struct ReadOnlyWatchdog {
    check: KeyedCheck<ReadOnlyKey>,
}

impl ReadOnlyWatchdog {
    pub fn observe(
        &mut self,
        mode: ControlMode,
        has_on_change: bool,
        read_only: bool,
        names: &DiagnosticNames,
    ) -> Option<Warning> {
        let key = ReadOnlyKey {
            mode,
            has_on_change,
            read_only,
            names: names.clone(),
        };
        let mut out = None;
        self.check.run(key, |k| {
            if k.mode.is_controlled() && !k.has_on_change && !k.read_only {
                out = Some(Warning::ReadOnlyWithoutHandler {
                    names: k.names.clone(),
                });
            }
        });
        out
    }
}

/// Both watchdogs for one toggle instance.
#[derive(Debug)]
pub struct Watchdogs {
    mode: ControlModeWatchdog,
    read_only: ReadOnlyWatchdog,
}

impl Watchdogs {
    pub fn new(initial: ControlMode) -> Self {
        Self {
            mode: ControlModeWatchdog::new(initial),
            read_only: ReadOnlyWatchdog::default(),
        }
    }

    pub fn observe(&mut self, config: &ToggleConfig) -> SmallVec<[Warning; 2]> {
        let mode = ControlMode::of(config.on);
        let mut out = SmallVec::new();
        out.extend(self.mode.observe(mode, &config.names));
        out.extend(self.read_only.observe(
            mode,
            config.has_on_change(),
            config.read_only,
            &config.names,
        ));
        out
    }
}
