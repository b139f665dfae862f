//! # Diagnostic locals
//!
//! Watchdog output is routed through thread‑local “locals” rather than
//! through every `ToggleConfig`:
//!
//! - the diagnostic sink, which receives every [`Warning`](crate::Warning);
//! - the diagnostics switch, which silences both watchdogs.
//!
//! Override them for a region of code with `with_diagnostic_sink` and
//! `with_diagnostics`:
//!
//! ```rust
//! use latch_core::*;
//! use std::rc::Rc;
//!
//! let sink = Rc::new(RecordingSink::default());
//! with_diagnostic_sink(sink.clone(), || {
//!     let _t = Toggle::new(ToggleConfig::new().on(true));
//! });
//! # #[cfg(feature = "diagnostics")]
//! assert_eq!(sink.len(), 1);
//! ```
//!
//! Outside any override, warnings go to [`LogSink`](crate::LogSink) and
//! diagnostics are on (when the `diagnostics` feature is compiled in).

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::diagnostics::{DiagnosticSink, LogSink};

thread_local! {
    static LOCALS_STACK: RefCell<Vec<HashMap<TypeId, Box<dyn Any>>>> = RefCell::new(Vec::new());
}

#[derive(Clone)]
struct SinkLocal(Rc<dyn DiagnosticSink>);

#[derive(Clone, Copy)]
struct DiagnosticsEnabled(bool);

fn with_locals_frame<R>(f: impl FnOnce() -> R) -> R {
    // Pops on unwind too.
    struct Guard;
    impl Drop for Guard {
        fn drop(&mut self) {
            LOCALS_STACK.with(|st| {
                st.borrow_mut().pop();
            });
        }
    }
    LOCALS_STACK.with(|st| st.borrow_mut().push(HashMap::new()));
    let _guard = Guard;
    f()
}

fn set_local_boxed(t: TypeId, v: Box<dyn Any>) {
    LOCALS_STACK.with(|st| {
        let mut st = st.borrow_mut();
        if let Some(top) = st.last_mut() {
            top.insert(t, v);
        } else {
            let mut m = HashMap::new();
            m.insert(t, v);
            st.push(m);
        }
    });
}

fn local<T: Clone + 'static>() -> Option<T> {
    LOCALS_STACK.with(|st| {
        for frame in st.borrow().iter().rev() {
            if let Some(v) = frame.get(&TypeId::of::<T>())
                && let Some(t) = v.downcast_ref::<T>()
            {
                return Some(t.clone());
            }
        }
        None
    })
}

/// Routes warnings raised inside `f` to `sink`.
pub fn with_diagnostic_sink<R>(sink: Rc<dyn DiagnosticSink>, f: impl FnOnce() -> R) -> R {
    with_locals_frame(|| {
        set_local_boxed(TypeId::of::<SinkLocal>(), Box::new(SinkLocal(sink)));
        f()
    })
}

/// Turns the watchdogs on or off inside `f`.
pub fn with_diagnostics<R>(enabled: bool, f: impl FnOnce() -> R) -> R {
    with_locals_frame(|| {
        set_local_boxed(
            TypeId::of::<DiagnosticsEnabled>(),
            Box::new(DiagnosticsEnabled(enabled)),
        );
        f()
    })
}

pub fn diagnostic_sink() -> Rc<dyn DiagnosticSink> {
    local::<SinkLocal>()
        .map(|s| s.0)
        .unwrap_or_else(|| Rc::new(LogSink))
}

/// False when the `diagnostics` feature is off, regardless of overrides.
pub fn diagnostics_enabled() -> bool {
    cfg!(feature = "diagnostics") && local::<DiagnosticsEnabled>().is_none_or(|d| d.0)
}
