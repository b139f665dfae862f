use std::collections::BTreeMap;
use std::rc::Rc;

use smallvec::SmallVec;

pub type ClickHandler = Rc<dyn Fn()>;

/// Attributes a presentation element binds to.
///
/// Produced by [`Toggle::toggler_props`](crate::Toggle::toggler_props) and
/// [`Toggle::resetter_props`](crate::Toggle::resetter_props); callers build
/// one with the same builders to pass overrides in.
#[derive(Clone, Default)]
pub struct Props {
    /// Pressed/unpressed signal for the trigger.
    pub pressed: Option<bool>,
    pub label: Option<String>,
    pub disabled: Option<bool>,
    pub attributes: BTreeMap<String, String>,
    on_click: SmallVec<[ClickHandler; 2]>,
}

impl std::fmt::Debug for Props {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Props")
            .field("pressed", &self.pressed)
            .field("label", &self.label)
            .field("disabled", &self.disabled)
            .field("attributes", &self.attributes)
            .field("on_click", &self.on_click.len())
            .finish()
    }
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_click(mut self, f: impl Fn() + 'static) -> Self {
        self.on_click.push(Rc::new(f));
        self
    }

    pub fn pressed(mut self, v: bool) -> Self {
        self.pressed = Some(v);
        self
    }

    pub fn label(mut self, v: impl Into<String>) -> Self {
        self.label = Some(v.into());
        self
    }

    pub fn disabled(mut self, v: bool) -> Self {
        self.disabled = Some(v);
        self
    }

    pub fn attr(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
        self.attributes.insert(k.into(), v.into());
        self
    }

    pub fn has_click(&self) -> bool {
        !self.on_click.is_empty()
    }

    /// Runs every click handler, in order.
    pub fn click(&self) {
        call_all(&self.on_click);
    }

    /// A single handler running the whole chain, for elements that take one.
    pub fn click_handler(&self) -> Option<ClickHandler> {
        if self.on_click.is_empty() {
            return None;
        }
        let chain = self.on_click.clone();
        Some(Rc::new(move || call_all(&chain)))
    }

    /// Lays `overrides` over `self`: their handlers run first, their other
    /// fields win.
    pub(crate) fn merged_with(self, overrides: Props) -> Props {
        let Props {
            pressed,
            label,
            disabled,
            attributes,
            on_click,
        } = overrides;

        let mut handlers = on_click;
        handlers.extend(self.on_click);

        let mut merged_attrs = self.attributes;
        merged_attrs.extend(attributes);

        Props {
            pressed: pressed.or(self.pressed),
            label: label.or(self.label),
            disabled: disabled.or(self.disabled),
            attributes: merged_attrs,
            on_click: handlers,
        }
    }
}

pub fn call_all(handlers: &[ClickHandler]) {
    for h in handlers {
        h();
    }
}
