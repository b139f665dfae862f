#![allow(non_snake_case)]
//! Two switches driven by one shared value, a click counter that gives up
//! after five clicks, one switch left to manage itself, and a locked
//! read-only switch mirroring the shared value.
//!
//! Run with `RUST_LOG=info` to see the uncontrolled switch's notifications
//! and `RUST_LOG=latch=trace` for every dispatch.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use anyhow::{Context, bail};
use latch_core::prelude::*;

/// What one pass produces: text to print and the things that can be clicked.
struct Screen {
    lines: Vec<String>,
    buttons: BTreeMap<&'static str, ClickHandler>,
}

impl Screen {
    fn click(&self, name: &str) -> anyhow::Result<()> {
        let h = self
            .buttons
            .get(name)
            .with_context(|| format!("no button named `{name}`"))?;
        h();
        Ok(())
    }
}

struct SwitchView {
    line: String,
    on_click: Option<ClickHandler>,
}

/// Text stand-in for a visual switch. Disabled switches take no clicks.
fn Switch(props: Props) -> SwitchView {
    let pressed = props.pressed.unwrap_or(false);
    let disabled = props.disabled.unwrap_or(false);
    let label = props.label.clone().unwrap_or_default();
    SwitchView {
        line: format!(
            "{label:>12} [{}]{}",
            if pressed { " ON" } else { "off" },
            if disabled { " (locked)" } else { "" }
        ),
        on_click: if disabled { None } else { props.click_handler() },
    }
}

fn ToggleSwitch(
    key: &'static str,
    on: Option<bool>,
    on_change: Option<OnChange>,
    read_only: bool,
    initial_on: bool,
) -> SwitchView {
    // Controlled with nobody listening: the value can never move.
    let frozen = on.is_some() && on_change.is_none();
    let toggle = remember_toggle_with_key(
        key,
        ToggleConfig::new()
            .on(on)
            .with_on_change(on_change)
            .read_only(read_only)
            .initial_on(initial_on)
            .names(DiagnosticNames::default().component("Toggle")),
    );
    Switch(toggle.toggler_props(Props::new().label(key).disabled(frozen)))
}

#[derive(Default)]
struct AppState {
    both_on: bool,
    times_clicked: u32,
}

fn app() -> Screen {
    let state: Rc<RefCell<AppState>> = remember_state_with_key("app", AppState::default);
    let (both_on, times_clicked) = {
        let s = state.borrow();
        (s.both_on, s.times_clicked)
    };

    let handle_toggle_change: OnChange = {
        let state = state.clone();
        Rc::new(move |next: &ToggleState, action: &Action| {
            let mut s = state.borrow_mut();
            if action.is_toggle() && s.times_clicked > 4 {
                return;
            }
            s.both_on = next.on;
            s.times_clicked += 1;
        })
    };

    let log_uncontrolled: OnChange = Rc::new(|next: &ToggleState, action: &Action| {
        log::info!("uncontrolled toggle on_change: {} -> {}", action.kind, next.on);
    });

    let switches = [
        ToggleSwitch("left", Some(both_on), Some(handle_toggle_change.clone()), false, false),
        ToggleSwitch("right", Some(both_on), Some(handle_toggle_change), false, false),
        ToggleSwitch("uncontrolled", None, Some(log_uncontrolled), false, false),
        ToggleSwitch("display", Some(both_on), None, true, false),
    ];

    let status = if times_clicked > 4 {
        "Whoa, you clicked too much!".to_string()
    } else {
        format!("Click count: {times_clicked}")
    };

    let reset: ClickHandler = {
        let state = state.clone();
        Rc::new(move || *state.borrow_mut() = AppState::default())
    };

    let mut buttons = BTreeMap::new();
    let mut lines = Vec::new();
    for (name, view) in ["left", "right", "uncontrolled", "display"]
        .into_iter()
        .zip(switches)
    {
        lines.push(view.line);
        if let Some(h) = view.on_click {
            buttons.insert(name, h);
        }
    }
    lines.insert(2, status);
    buttons.insert("reset", reset);

    Screen { lines, buttons }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let clicks: usize = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("click count must be a number, got `{arg}`"))?,
        None => 7,
    };
    if clicks > 100 {
        bail!("refusing to click {clicks} times");
    }

    let mut script: Vec<&str> = (0..clicks)
        .map(|i| if i % 2 == 0 { "left" } else { "right" })
        .collect();
    script.extend(["reset", "left", "uncontrolled", "uncontrolled"]);

    for name in script {
        let screen = compose(app);
        println!("{}", screen.lines.join("\n"));
        println!("-- click {name}");
        screen.click(name)?;
    }
    let screen = compose(app);
    println!("{}", screen.lines.join("\n"));
    Ok(())
}
