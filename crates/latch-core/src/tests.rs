#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use crate::*;

    fn counting(count: &Rc<Cell<u32>>) -> ToggleConfig {
        let count = count.clone();
        ToggleConfig::new().on_change(move |_, _| count.set(count.get() + 1))
    }

    #[test]
    fn test_toggling_from_off_alternates() {
        let t = Toggle::new(ToggleConfig::new().initial_on(false));
        let mut seen = vec![t.on()];
        for _ in 0..3 {
            t.toggle().unwrap();
            seen.push(t.on());
        }
        assert_eq!(seen, vec![false, true, false, true]);
    }

    #[test]
    fn test_reset_returns_to_acquisition_state() {
        for initial_on in [false, true] {
            for n in 0..6 {
                let t = Toggle::new(ToggleConfig::new().initial_on(initial_on));
                for _ in 0..n {
                    t.toggle().unwrap();
                }
                t.reset().unwrap();
                assert_eq!(t.on(), initial_on, "after {n} toggles");
            }
        }
    }

    #[test]
    fn test_reset_ignores_later_initial_on() {
        let t = Toggle::new(ToggleConfig::new().initial_on(true));
        t.toggle().unwrap();
        t.evaluate(ToggleConfig::new().initial_on(false));
        t.reset().unwrap();
        assert!(t.on());
        assert_eq!(t.initial_state(), ToggleState::ON);
    }

    #[test]
    fn test_controlled_value_is_authoritative() {
        let count = Rc::new(Cell::new(0));
        let t = Toggle::new(counting(&count).on(true));
        for _ in 0..4 {
            t.toggle().unwrap();
            assert!(t.on());
        }
        t.reset().unwrap();
        assert!(t.on());
        assert_eq!(t.internal_state(), ToggleState::OFF);
        assert_eq!(count.get(), 5);
    }

    #[test]
    fn test_every_dispatch_notifies_once_from_the_effective_value() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let config = |on: Option<bool>| {
            let seen = seen.clone();
            ToggleConfig::new()
                .on(on)
                .on_change(move |next, action| seen.borrow_mut().push((next.on, action.kind.clone())))
        };

        let t = Toggle::new(config(None));
        t.toggle().unwrap(); // internal: true
        t.evaluate(config(Some(false)));
        t.toggle().unwrap(); // from controlled false, not the stale internal true
        t.reset().unwrap();
        t.evaluate(config(None));
        t.toggle().unwrap(); // internal true again is the effective value

        assert_eq!(
            *seen.borrow(),
            vec![
                (true, ActionType::Toggle),
                (true, ActionType::Toggle),
                (false, ActionType::Reset),
                (false, ActionType::Toggle),
            ]
        );
        assert!(!t.on());
    }

    #[test]
    fn test_fixed_state_reducer_is_obeyed() {
        let t = Toggle::new(
            ToggleConfig::new()
                .initial_on(false)
                .reducer(|_, _| Ok(ToggleState::ON)),
        );
        t.toggle().unwrap();
        assert!(t.on());
        t.reset().unwrap();
        assert!(t.on());
        t.dispatch(Action::custom("anything")).unwrap();
        assert!(t.on());
    }

    #[test]
    fn test_custom_reducer_can_extend_the_builtin() {
        let reducer = |s: &ToggleState, a: &Action| match &a.kind {
            ActionType::Custom(name) if name == "force_on" => Ok(ToggleState::ON),
            _ => toggle_reducer(s, a),
        };
        let t = Toggle::new(ToggleConfig::new().reducer(reducer));
        t.dispatch(Action::custom("force_on")).unwrap();
        assert!(t.on());
        t.toggle().unwrap();
        assert!(!t.on());
        assert_eq!(
            t.dispatch(Action::custom("other")),
            Err(ToggleError::UnsupportedAction("other".into()))
        );
    }

    /// The shared state two controlled toggles render from.
    #[derive(Default)]
    struct Board {
        both_on: Cell<bool>,
        times_clicked: Cell<u32>,
        notifications: Cell<u32>,
    }

    fn board_config(board: &Rc<Board>) -> ToggleConfig {
        let b = board.clone();
        ToggleConfig::new()
            .on(board.both_on.get())
            .on_change(move |next, action| {
                b.notifications.set(b.notifications.get() + 1);
                if action.is_toggle() && b.times_clicked.get() > 4 {
                    return;
                }
                b.both_on.set(next.on);
                b.times_clicked.set(b.times_clicked.get() + 1);
            })
    }

    #[test]
    fn test_shared_controlled_value_stops_when_caller_ignores_changes() {
        let board = Rc::new(Board::default());
        let left = Toggle::new(board_config(&board));
        let right = Toggle::new(board_config(&board));

        for i in 0..8 {
            let t = if i % 2 == 0 { &left } else { &right };
            t.toggler_props(Props::new()).click();
            left.evaluate(board_config(&board));
            right.evaluate(board_config(&board));
            assert_eq!(left.on(), right.on());
        }

        assert_eq!(board.times_clicked.get(), 5);
        assert_eq!(board.notifications.get(), 8);
        assert!(board.both_on.get());
        assert!(left.on());
    }

    #[cfg(feature = "diagnostics")]
    mod watchdogs {
        use super::*;

        fn recorded(f: impl FnOnce()) -> Vec<Warning> {
            let sink = Rc::new(RecordingSink::default());
            with_diagnostic_sink(sink.clone(), f);
            sink.take()
        }

        #[test]
        fn test_switching_to_controlled_warns_once() {
            let count = Rc::new(Cell::new(0));
            let warnings = recorded(|| {
                let t = Toggle::new(ToggleConfig::new());
                t.evaluate(counting(&count).on(false));
                t.evaluate(counting(&count).on(false));
                t.evaluate(counting(&count).on(true));
            });
            assert_eq!(
                warnings,
                vec![Warning::ControlModeChanged {
                    names: DiagnosticNames::default(),
                    from: ControlMode::Uncontrolled,
                    to: ControlMode::Controlled,
                }]
            );
        }

        #[test]
        fn test_switching_to_uncontrolled_warns() {
            let count = Rc::new(Cell::new(0));
            let warnings = recorded(|| {
                let t = Toggle::new(counting(&count).on(true));
                t.evaluate(counting(&count));
                t.evaluate(counting(&count));
            });
            assert_eq!(warnings.len(), 1);
            assert!(warnings[0].to_string().contains("from controlled to be uncontrolled"));
        }

        #[test]
        fn test_controlled_without_handler_warns() {
            let warnings = recorded(|| {
                let t = Toggle::new(ToggleConfig::new().on(true));
                t.evaluate(ToggleConfig::new().on(false));
            });
            assert_eq!(warnings.len(), 1);
            assert!(matches!(warnings[0], Warning::ReadOnlyWithoutHandler { .. }));
        }

        #[test]
        fn test_read_only_or_handler_silences_the_warning() {
            let count = Rc::new(Cell::new(0));
            let warnings = recorded(|| {
                Toggle::new(ToggleConfig::new().on(true).read_only(true));
                Toggle::new(counting(&count).on(true));
                Toggle::new(ToggleConfig::new());
            });
            assert!(warnings.is_empty());
        }

        #[test]
        fn test_read_only_warning_returns_when_condition_does() {
            let warnings = recorded(|| {
                let t = Toggle::new(ToggleConfig::new().on(true));
                t.evaluate(ToggleConfig::new().on(true).read_only(true));
                t.evaluate(ToggleConfig::new().on(true));
            });
            assert_eq!(warnings.len(), 2);
        }

        #[test]
        fn test_custom_names_reach_the_message() {
            let names = DiagnosticNames::default().component("Toggle");
            let warnings = recorded(|| {
                Toggle::new(ToggleConfig::new().on(true).names(names));
            });
            insta::assert_snapshot!(warnings[0].to_string(), @"A `on` prop was provided to `Toggle` without an `on_change` handler. This will result in a read-only `on` value. If you want it to be mutable, use `initial_on`. Otherwise, set either `on_change` or `read_only`.");
        }

        #[test]
        fn test_disabled_diagnostics_stay_quiet() {
            let warnings = recorded(|| {
                with_diagnostics(false, || {
                    let t = Toggle::new(ToggleConfig::new().on(true));
                    t.evaluate(ToggleConfig::new());
                })
            });
            assert!(warnings.is_empty());
        }

        #[test]
        fn test_diagnostics_never_change_behavior() {
            let warnings = recorded(|| {
                let t = Toggle::new(ToggleConfig::new());
                t.evaluate(ToggleConfig::new().on(true));
                t.toggle().unwrap();
                assert!(t.on());
                assert_eq!(t.internal_state(), ToggleState::OFF);
            });
            assert_eq!(warnings.len(), 2);
        }
    }
}
