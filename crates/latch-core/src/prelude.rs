pub use crate::action::{Action, ActionType, ToggleState};
pub use crate::config::{DiagnosticNames, OnChange, ToggleConfig};
pub use crate::diagnostics::{DiagnosticSink, LogSink, RecordingSink, Warning};
pub use crate::error::ToggleError;
pub use crate::locals::{with_diagnostic_sink, with_diagnostics};
pub use crate::mode::{ControlMode, Resolution};
pub use crate::props::{ClickHandler, Props};
pub use crate::reducer::{Reducer, toggle_reducer};
pub use crate::runtime::{
    ComposeGuard, compose, remember, remember_state, remember_state_with_key, remember_toggle,
    remember_toggle_with_key, remember_with_key,
};
pub use crate::toggle::Toggle;
