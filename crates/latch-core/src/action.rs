use std::borrow::Cow;
use std::fmt;

/// The only state shape a toggle carries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToggleState {
    pub on: bool,
}

impl ToggleState {
    pub const OFF: ToggleState = ToggleState { on: false };
    pub const ON: ToggleState = ToggleState { on: true };

    pub fn new(on: bool) -> Self {
        Self { on }
    }
}

impl From<bool> for ToggleState {
    fn from(on: bool) -> Self {
        Self { on }
    }
}

/// What an [`Action`] asks the reducer to do.
///
/// `Custom` is for reducers that handle more than the two built-in
/// actions. The built-in reducer rejects it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionType {
    Toggle,
    Reset,
    Custom(Cow<'static, str>),
}

impl ActionType {
    pub fn as_str(&self) -> &str {
        match self {
            ActionType::Toggle => "toggle",
            ActionType::Reset => "reset",
            ActionType::Custom(name) => name.as_ref(),
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Action {
    pub kind: ActionType,
    /// Snapshot a `Reset` returns to. Ignored by every other action.
    pub initial_state: Option<ToggleState>,
}

impl Action {
    pub fn toggle() -> Self {
        Self {
            kind: ActionType::Toggle,
            initial_state: None,
        }
    }

    pub fn reset(initial_state: ToggleState) -> Self {
        Self {
            kind: ActionType::Reset,
            initial_state: Some(initial_state),
        }
    }

    pub fn custom(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind: ActionType::Custom(name.into()),
            initial_state: None,
        }
    }

    pub fn is_toggle(&self) -> bool {
        self.kind == ActionType::Toggle
    }

    pub fn is_reset(&self) -> bool {
        self.kind == ActionType::Reset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_type_names() {
        assert_eq!(Action::toggle().kind.as_str(), "toggle");
        assert_eq!(Action::reset(ToggleState::ON).kind.to_string(), "reset");
        assert_eq!(Action::custom("flip_twice").kind.as_str(), "flip_twice");
    }

    #[test]
    fn reset_carries_snapshot() {
        let a = Action::reset(ToggleState::ON);
        assert!(a.is_reset());
        assert_eq!(a.initial_state, Some(ToggleState { on: true }));
        assert_eq!(Action::toggle().initial_state, None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn reset_and_custom_actions_survive_json() {
        let reset = Action::reset(ToggleState::ON);
        let json = serde_json::to_string(&reset).unwrap();
        assert_eq!(serde_json::from_str::<Action>(&json).unwrap(), reset);

        let custom = ActionType::Custom("force_on".into());
        let json = serde_json::to_string(&custom).unwrap();
        assert_eq!(json, r#"{"Custom":"force_on"}"#);
        assert_eq!(serde_json::from_str::<ActionType>(&json).unwrap(), custom);

        let state: ToggleState = serde_json::from_str(r#"{"on":true}"#).unwrap();
        assert_eq!(state, ToggleState::ON);
    }
}
