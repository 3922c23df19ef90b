#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::*;

    #[test]
    fn test_signal_basic() {
        let sig = signal(42);
        assert_eq!(sig.get(), 42);

        sig.set(100);
        assert_eq!(sig.get(), 100);

        sig.update(|v| *v += 1);
        assert_eq!(sig.get(), 101);
    }

    #[test]
    fn test_signal_subscription() {
        let sig = signal(0);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let seen_clone = seen.clone();
        let id = sig.subscribe(move |v| seen_clone.borrow_mut().push(*v));

        sig.set(1);
        sig.update(|v| *v += 1);
        sig.unsubscribe(id);
        sig.set(10);

        assert_eq!(*seen.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_subscriber_can_read_signal() {
        let sig = signal(String::from("a"));
        let observed = Rc::new(RefCell::new(String::new()));

        let (sig2, observed2) = (sig.clone(), observed.clone());
        sig.subscribe(move |_| *observed2.borrow_mut() = sig2.get());

        sig.set("b".into());
        assert_eq!(*observed.borrow(), "b");
    }

    #[test]
    fn test_props_keep_insertion_order() {
        let mut p = props! { "b" => 1, "a" => 2 };
        p.insert("c", 3);
        p.insert("b", 4);

        assert_eq!(p.keys().collect::<Vec<_>>(), vec!["b", "a", "c"]);
        assert_eq!(p.get("b"), Some(&PropValue::Int(4)));
    }

    #[test]
    fn test_props_presence_is_not_truthiness() {
        let p = props! { "zero" => 0, "no" => false, "empty" => "", "nothing" => () };

        for key in ["zero", "no", "empty", "nothing"] {
            assert!(p.contains_key(key), "{key} should be present");
        }
        assert!(!p.contains_key("missing"));
    }

    #[test]
    fn test_overlay_top_wins() {
        let mut base = props! { "text" => "one", "count" => 1 };
        base.overlay(&props! { "text" => PropValue::Null, "extra" => true });

        assert_eq!(base.get("text"), Some(&PropValue::Null));
        assert_eq!(base.get("count"), Some(&PropValue::Int(1)));
        assert_eq!(base.get("extra"), Some(&PropValue::Bool(true)));
    }

    #[test]
    fn test_prop_value_display() {
        assert_eq!(PropValue::from("duplicate-hook-prop").to_string(), "duplicate-hook-prop");
        assert_eq!(PropValue::from(3).to_string(), "3");
        assert_eq!(PropValue::Null.to_string(), "null");
        assert_eq!(PropValue::from((1, "x")).to_string(), "1,x");
        assert_eq!(PropValue::from(vec![PropValue::Int(1), PropValue::Null]).to_string(), "1,null");
        assert_eq!(PropValue::from(props! { "a" => 1 }).to_string(), "{a: 1}");
        assert_eq!(PropValue::from(Callback::from_fn(|| {})).to_string(), "<callback>");
    }

    #[test]
    fn test_prop_value_try_from() {
        assert_eq!(i64::try_from(PropValue::Int(7)), Ok(7));
        let err = i64::try_from(PropValue::from("seven")).unwrap_err();
        assert_eq!(err.to_string(), "expected int prop value, found string");
    }

    #[test]
    fn test_callbacks_compare_by_identity() {
        let cb = Callback::from_fn(|| {});
        assert_eq!(PropValue::from(cb.clone()), PropValue::from(cb));
        assert_ne!(
            PropValue::from(Callback::from_fn(|| {})),
            PropValue::from(Callback::from_fn(|| {}))
        );
    }

    #[test]
    fn test_remember_persists_per_root() {
        let inits = Rc::new(RefCell::new(0));
        let inits2 = inits.clone();
        let comp = Component::new(move |_| {
            let v = remember(|| {
                *inits2.borrow_mut() += 1;
                7
            });
            Text(v.to_string())
        });

        let mut a = Root::new(comp.clone(), Props::new());
        a.render();
        a.render();
        let _b = Root::new(comp, Props::new());

        // one init per root
        assert_eq!(*inits.borrow(), 2);
        assert_eq!(a.view().text(), "7");
        assert_eq!(a.slot_count(), 1);
    }

    #[test]
    fn test_key_based_remember() {
        let comp = Component::new(|_| {
            let first = remember_with_key("test", || 42);
            let second = remember_with_key("test", || 100);
            Text(format!("{first}/{second}"))
        });

        let root = Root::new(comp, Props::new());
        assert_eq!(root.view().text(), "42/42");
    }

    #[test]
    fn test_remember_outside_render_does_not_persist() {
        let a = remember(|| 1);
        let b = remember(|| 2);
        assert_eq!((*a, *b), (1, 2));
    }

    #[test]
    fn test_use_state_marks_root_dirty() {
        let comp = Component::new(|_| {
            let (count, set_count) = use_state(|| 0i64);
            Button(
                count.to_string(),
                Some(Callback::from_fn(move || set_count.update(|c| *c += 1))),
            )
        });

        let mut root = Root::new(comp, Props::new());
        assert!(!root.is_dirty());
        assert!(!root.flush());

        root.view().find_button("0").expect("button").click();
        assert!(root.is_dirty());
        assert!(root.flush());
        assert_eq!(root.view().text(), "1");
        assert_eq!(root.render_count(), 2);
    }

    #[test]
    fn test_setter_callback_accepts_value_or_updater() {
        let comp = Component::new(|_| {
            let (count, set_count) = use_state(|| 0i64);
            let setter = set_count.into_callback();
            let bump = {
                let setter = setter.clone();
                Callback::from_fn(move || {
                    setter.call(&[PropValue::callback(|args| {
                        PropValue::Int(args[0].as_int().unwrap_or_default() + 1)
                    })]);
                })
            };
            let reset = Callback::from_fn(move || {
                setter.call(&[PropValue::Int(10)]);
            });
            Column(vec![
                Text(count.to_string()),
                Button("+", Some(bump)),
                Button("reset", Some(reset)),
            ])
        });

        let mut root = Root::new(comp, Props::new());
        root.view().find_button("+").expect("+").click();
        root.render();
        assert_eq!(root.view().text(), "1+reset");

        root.view().find_button("reset").expect("reset").click();
        root.render();
        assert_eq!(root.view().text(), "10+reset");
    }

    #[test]
    fn test_setter_callback_ignores_wrong_shape() {
        let comp = Component::new(|_| {
            let (count, set_count) = use_state(|| 5i64);
            let setter = set_count.into_callback();
            Button(
                count.to_string(),
                Some(Callback::from_fn(move || {
                    setter.call(&[PropValue::from("not a number")]);
                })),
            )
        });

        let mut root = Root::new(comp, Props::new());
        root.view().find_button("5").expect("button").click();
        root.render();
        assert_eq!(root.view().text(), "5");
    }

    struct Counter;

    enum CounterEvent {
        Add(i64),
        Reset,
    }

    impl StateHolder for Counter {
        type State = i64;
        type Event = CounterEvent;

        fn initial_state() -> i64 {
            0
        }

        fn reduce(state: &i64, event: CounterEvent) -> i64 {
            match event {
                CounterEvent::Add(n) => state + n,
                CounterEvent::Reset => 0,
            }
        }
    }

    #[test]
    fn test_use_reducer() {
        let dispatch_out: Rc<RefCell<Option<Dispatch<Counter>>>> = Rc::new(RefCell::new(None));
        let out = dispatch_out.clone();
        let comp = Component::new(move |_| {
            let (count, dispatch) = use_reducer::<Counter>();
            *out.borrow_mut() = Some(dispatch);
            Text(count.to_string())
        });

        let mut root = Root::new(comp, Props::new());
        let dispatch = dispatch_out.borrow().clone().expect("dispatch");
        dispatch.dispatch(CounterEvent::Add(3));
        dispatch.dispatch(CounterEvent::Add(4));
        root.flush();
        assert_eq!(root.view().text(), "7");

        dispatch.dispatch(CounterEvent::Reset);
        root.flush();
        assert_eq!(root.view().text(), "0");
    }

    #[derive(Clone, Debug, PartialEq, Default)]
    struct Locale(&'static str);

    #[test]
    fn test_context_nesting() {
        assert_eq!(use_context::<Locale>(), None);
        assert_eq!(use_context_or_default::<Locale>(), Locale(""));

        provide_context(Locale("en"), || {
            assert_eq!(use_context::<Locale>(), Some(Locale("en")));
            provide_context(Locale("fr"), || {
                assert_eq!(use_context::<Locale>(), Some(Locale("fr")));
            });
            assert_eq!(use_context::<Locale>(), Some(Locale("en")));
        });

        assert_eq!(use_context::<Locale>(), None);
    }

    #[test]
    fn test_root_context_signal_rerenders() {
        let locale = signal(Locale("en"));
        let comp = Component::new(|_| {
            let sig = use_context::<Signal<Locale>>().expect("locale provided");
            Text(use_signal(&sig).0)
        });

        let mut root = Root::with_context(
            comp,
            Props::new(),
            ContextFrame::new().with(locale.clone()),
        );
        assert_eq!(root.view().text(), "en");

        locale.set(Locale("de"));
        assert!(root.is_dirty());
        root.flush();
        assert_eq!(root.view().text(), "de");
    }

    #[test]
    fn test_use_signal_unsubscribes_when_root_drops() {
        let locale = signal(Locale("en"));
        let comp = Component::new(|_| {
            let sig = use_context::<Signal<Locale>>().expect("locale provided");
            Text(use_signal(&sig).0)
        });

        for _ in 0..5 {
            let mut root = Root::with_context(
                comp.clone(),
                Props::new(),
                ContextFrame::new().with(locale.clone()),
            );
            root.render();
            assert_eq!(locale.subscriber_count(), 1);
        }
        assert_eq!(locale.subscriber_count(), 0);

        // outside a render pass nothing stays subscribed
        assert_eq!(use_signal(&locale), Locale("en"));
        assert_eq!(locale.subscriber_count(), 0);
    }

    #[test]
    fn test_remember_inside_remember_init() {
        let after_inits = Rc::new(RefCell::new(0));
        let after_inits2 = after_inits.clone();
        let comp = Component::new(move |_| {
            let outer = remember(|| {
                let inner = remember(|| String::from("inner"));
                format!("{inner}+outer")
            });
            let after = remember(|| {
                *after_inits2.borrow_mut() += 1;
                100i64
            });
            Text(format!("{outer}/{after}"))
        });

        let mut root = Root::new(comp, Props::new());
        assert_eq!(root.slot_count(), 3);
        root.render();
        root.render();

        assert_eq!(root.view().text(), "inner+outer/100");
        assert_eq!(root.slot_count(), 3);
        assert_eq!(*after_inits.borrow(), 1);
    }

    #[test]
    fn test_set_props_rerenders_with_new_props() {
        let comp = Component::named("Label", |props: &Props| {
            Text(props.get("label").and_then(PropValue::as_str).unwrap_or("-"))
        });

        let mut root = Root::new(comp, Props::new());
        assert_eq!(root.view().text(), "-");

        root.set_props(props! { "label" => "ok" });
        assert!(root.is_dirty());
        root.flush();
        assert_eq!(root.view().text(), "ok");
        assert_eq!(root.props().len(), 1);
    }

    #[test]
    fn test_text_field_change() {
        let comp = Component::new(|_| {
            let (value, set_value) = use_state(String::new);
            TextField(value, Some(set_value.into_callback()))
        });

        let mut root = Root::new(comp, Props::new());
        assert!(root.view().find_text_field().expect("field").change("typed"));
        root.flush();
        assert_eq!(root.view().text(), "typed");
    }
}
