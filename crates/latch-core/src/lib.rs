//! # Controllable toggles
//!
//! Latch provides one on/off primitive, [`Toggle`], that can own its state
//! (uncontrolled) or defer to a value the caller supplies (controlled). Both
//! modes run through the same pieces:
//!
//! - [`toggle_reducer`] / [`Reducer`] — pure `(state, action) -> state`.
//! - [`resolve`] — decides the mode and the effective value, every read.
//! - [`Toggle::dispatch`] — the only mutation path; commits when
//!   uncontrolled and always notifies `on_change`.
//! - [`diagnostics`] — watchdogs that warn about misuse of the control props.
//! - [`Toggle::toggler_props`] / [`Toggle::resetter_props`] — ready-to-bind
//!   attributes for the presentation layer.
//!
//! ## Uncontrolled
//!
//! ```rust
//! use latch_core::*;
//!
//! let t = Toggle::new(ToggleConfig::new().initial_on(false));
//! t.toggle().unwrap();
//! assert!(t.on());
//! ```
//!
//! ## Controlled
//!
//! The caller holds the value and decides what to do with each requested
//! change. Re-evaluate the toggle whenever the value changes:
//!
//! ```rust
//! use latch_core::*;
//! use std::{cell::Cell, rc::Rc};
//!
//! let value = Rc::new(Cell::new(false));
//! let config = |v: &Rc<Cell<bool>>| {
//!     let sink = v.clone();
//!     ToggleConfig::new()
//!         .on(v.get())
//!         .on_change(move |next, _| sink.set(next.on))
//! };
//!
//! let t = Toggle::new(config(&value));
//! t.toggle().unwrap();
//! assert!(value.get());
//! assert!(!t.on()); // still showing the old value until re-evaluated
//!
//! t.evaluate(config(&value));
//! assert!(t.on());
//! ```
//!
//! ## Composition
//!
//! Hosts that re-run a view function on every change can keep toggles in
//! `remember` slots instead of holding handles themselves:
//!
//! ```rust
//! use latch_core::*;
//!
//! fn view() -> bool {
//!     let t = remember_toggle(ToggleConfig::new());
//!     t.on()
//! }
//!
//! assert!(!compose(view));
//! ```
//!
//! ## Diagnostics
//!
//! Warnings go to `log` by default. Route them elsewhere with
//! [`with_diagnostic_sink`], silence them with [`with_diagnostics`], or
//! compile them out by disabling the `diagnostics` feature.

pub mod action;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod locals;
pub mod mode;
pub mod prelude;
pub mod props;
pub mod reducer;
pub mod runtime;
pub mod toggle;

mod tests;

pub use action::*;
pub use config::*;
pub use diagnostics::{DiagnosticSink, LogSink, RecordingSink, Warning};
pub use error::*;
pub use locals::*;
pub use mode::*;
pub use props::*;
pub use reducer::*;
pub use runtime::*;
pub use toggle::*;
