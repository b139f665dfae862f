use std::fmt;

use crate::ToggleState;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControlMode {
    Controlled,
    Uncontrolled,
}

impl ControlMode {
    pub fn of(controlled: Option<bool>) -> Self {
        if controlled.is_some() {
            ControlMode::Controlled
        } else {
            ControlMode::Uncontrolled
        }
    }

    pub fn is_controlled(self) -> bool {
        self == ControlMode::Controlled
    }
}

impl fmt::Display for ControlMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ControlMode::Controlled => "controlled",
            ControlMode::Uncontrolled => "uncontrolled",
        })
    }
}

/// Result of resolving one evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub mode: ControlMode,
    /// The value shown to the presentation layer.
    pub on: bool,
}

impl Resolution {
    pub fn is_controlled(&self) -> bool {
        self.mode.is_controlled()
    }

    /// The state a reducer should see when computing a notification.
    pub fn effective_state(&self) -> ToggleState {
        ToggleState { on: self.on }
    }
}

/// Picks the source of truth. Never cached: call on every read.
pub fn resolve(controlled: Option<bool>, internal: &ToggleState) -> Resolution {
    match controlled {
        Some(on) => Resolution {
            mode: ControlMode::Controlled,
            on,
        },
        None => Resolution {
            mode: ControlMode::Uncontrolled,
            on: internal.on,
        },
    }
}
