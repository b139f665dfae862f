use thiserror::Error;

/// Programming errors surfaced by a reducer.
///
/// These indicate a caller bug. Misuse of the control props never produces
/// one of these; see [`crate::diagnostics`] for that.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToggleError {
    #[error("unsupported action type: {0}")]
    UnsupportedAction(String),
    #[error("reset action dispatched without an initial state")]
    MissingInitialState,
}
