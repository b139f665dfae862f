use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::{Toggle, ToggleConfig};

thread_local! {
    pub static COMPOSER: RefCell<Composer> = RefCell::new(Composer::default());
}

#[derive(Default)]
pub struct Composer {
    pub slots: Vec<Box<dyn Any>>,
    pub cursor: usize,
    pub keyed_slots: HashMap<String, Box<dyn Any>>,
    pub passes: u64,
}

/// One evaluation pass of the host. Slot-based `remember` calls made while
/// the guard is alive line up with the same calls from earlier passes.
pub struct ComposeGuard {
    pass: u64,
}

impl ComposeGuard {
    pub fn begin() -> Self {
        let pass = COMPOSER.with(|c| {
            let mut c = c.borrow_mut();
            c.cursor = 0;
            c.passes += 1;
            c.passes
        });
        ComposeGuard { pass }
    }

    pub fn pass(&self) -> u64 {
        self.pass
    }
}

impl Drop for ComposeGuard {
    fn drop(&mut self) {
        COMPOSER.with(|c| {
            let c = c.borrow();
            if c.cursor < c.slots.len() {
                log::debug!(
                    "compose pass {} visited {} of {} slots",
                    self.pass,
                    c.cursor,
                    c.slots.len()
                );
            }
        });
    }
}

/// Runs `f` as one pass.
pub fn compose<R>(f: impl FnOnce() -> R) -> R {
    let _guard = ComposeGuard::begin();
    f()
}

/// Slot-based remember (sequential composition only)
pub fn remember<T: 'static>(init: impl FnOnce() -> T) -> Rc<T> {
    // `init` runs with the composer released so it may remember too.
    let found = COMPOSER.with(|c| {
        let mut c = c.borrow_mut();
        let cursor = c.cursor;
        c.cursor += 1;
        let existing = c.slots.get(cursor).map(|s| s.downcast_ref::<Rc<T>>().cloned());
        (cursor, existing)
    });

    match found {
        (_, Some(Some(rc))) => rc,
        (cursor, existing) => {
            if existing.is_some() {
                log::warn!(
                    "remember: slot {} type changed; replacing. \
                     If this is due to conditional composition, prefer remember_with_key.",
                    cursor
                );
            }
            let rc: Rc<T> = Rc::new(init());
            COMPOSER.with(|c| {
                let mut c = c.borrow_mut();
                if cursor < c.slots.len() {
                    c.slots[cursor] = Box::new(rc.clone());
                } else {
                    c.slots.push(Box::new(rc.clone()));
                }
            });
            rc
        }
    }
}

/// Key-based remember
pub fn remember_with_key<T: 'static>(key: impl Into<String>, init: impl FnOnce() -> T) -> Rc<T> {
    let key = key.into();
    let existing = COMPOSER.with(|c| {
        c.borrow()
            .keyed_slots
            .get(&key)
            .map(|s| s.downcast_ref::<Rc<T>>().cloned())
    });

    match existing {
        Some(Some(rc)) => rc,
        other => {
            if other.is_some() {
                log::warn!(
                    "remember_with_key: key '{}' reused with a different type; replacing.",
                    key
                );
            }
            let rc: Rc<T> = Rc::new(init());
            COMPOSER.with(|c| {
                c.borrow_mut().keyed_slots.insert(key, Box::new(rc.clone()));
            });
            rc
        }
    }
}

/// Mutable slot: what a caller controlling a toggle keeps its value in.
pub fn remember_state<T: 'static>(init: impl FnOnce() -> T) -> Rc<RefCell<T>> {
    remember(|| RefCell::new(init()))
}

/// Keyed [`remember_state`]; survives reordering of the calls around it.
pub fn remember_state_with_key<T: 'static>(
    key: impl Into<String>,
    init: impl FnOnce() -> T,
) -> Rc<RefCell<T>> {
    remember_with_key(key, || RefCell::new(init()))
}

/// Acquires a toggle on the first pass and re-evaluates it on later ones.
pub fn remember_toggle(config: ToggleConfig) -> Toggle {
    let mut fresh = None;
    let slot = remember(|| {
        let t = Toggle::new(config.clone());
        fresh = Some(t.clone());
        t
    });
    if fresh.is_none() {
        slot.evaluate(config);
    }
    (*slot).clone()
}

pub fn remember_toggle_with_key(key: impl Into<String>, config: ToggleConfig) -> Toggle {
    let mut fresh = None;
    let slot = remember_with_key(key, || {
        let t = Toggle::new(config.clone());
        fresh = Some(t.clone());
        t
    });
    if fresh.is_none() {
        slot.evaluate(config);
    }
    (*slot).clone()
}
