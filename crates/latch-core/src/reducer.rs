use std::fmt;
use std::rc::Rc;

use crate::{Action, ActionType, ToggleError, ToggleState};

/// A shared, pure `(state, action) -> next state` function.
///
/// The dispatcher treats this as opaque: it never special-cases toggle
/// semantics, so a custom reducer may ignore, extend, or replace them.
#[derive(Clone)]
pub struct Reducer(Rc<dyn Fn(&ToggleState, &Action) -> Result<ToggleState, ToggleError>>);

impl Reducer {
    pub fn new(
        f: impl Fn(&ToggleState, &Action) -> Result<ToggleState, ToggleError> + 'static,
    ) -> Self {
        Self(Rc::new(f))
    }

    pub fn apply(&self, state: &ToggleState, action: &Action) -> Result<ToggleState, ToggleError> {
        (self.0)(state, action)
    }
}

impl Default for Reducer {
    fn default() -> Self {
        Self::new(toggle_reducer)
    }
}

impl fmt::Debug for Reducer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Reducer(..)")
    }
}

/// Built-in reducer: `Toggle` flips, `Reset` returns the snapshot it carries.
pub fn toggle_reducer(state: &ToggleState, action: &Action) -> Result<ToggleState, ToggleError> {
    match &action.kind {
        ActionType::Toggle => Ok(ToggleState { on: !state.on }),
        ActionType::Reset => action.initial_state.ok_or(ToggleError::MissingInitialState),
        ActionType::Custom(name) => Err(ToggleError::UnsupportedAction(name.to_string())),
    }
}
