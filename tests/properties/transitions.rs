//! Property tests for the navigation state machine.

use proptest::prelude::*;

use dropmenu::{MenuRef, Phase};

use crate::common::*;

#[derive(Debug, Clone)]
enum Op {
    Open,
    Close,
    Toggle,
    OpenSubmenu,
    CloseCurrent,
    Complete(usize),
    CompleteAll,
    Reset(bool),
    Select(usize),
}

const LEAVES: &[&str] = &["apple", "banana", "lime", "lemon"];

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => Just(Op::Open),
        3 => Just(Op::Close),
        2 => Just(Op::Toggle),
        2 => Just(Op::OpenSubmenu),
        2 => Just(Op::CloseCurrent),
        4 => (0..4usize).prop_map(Op::Complete),
        1 => Just(Op::CompleteAll),
        1 => any::<bool>().prop_map(Op::Reset),
        2 => (0..LEAVES.len()).prop_map(Op::Select),
    ]
}

fn apply(h: &mut Harness, op: &Op) {
    match op {
        Op::Open => {
            h.dropdown.open();
        }
        Op::Close => {
            h.dropdown.close();
        }
        Op::Toggle => {
            h.dropdown.toggle();
        }
        Op::OpenSubmenu => {
            h.dropdown.select("citrus");
        }
        Op::CloseCurrent => {
            h.dropdown.close_menu(MenuRef::Current);
        }
        Op::Complete(i) => {
            let pending = h.dropdown.pending_transitions();
            if !pending.is_empty() {
                h.dropdown.complete_transition(pending[i % pending.len()]);
            }
        }
        Op::CompleteAll => {
            h.dropdown.complete_all();
        }
        Op::Reset(clear) => {
            h.dropdown.reset(*clear);
        }
        Op::Select(i) => {
            h.dropdown.select(LEAVES[*i]);
        }
    }
}

fn check_pairing(h: &Harness) -> Result<(), TestCaseError> {
    for name in ["dropdown.open", "dropdown.close"] {
        let before = h.sink.count(&format!("{}:before", name));
        let after = h.sink.count(name);
        prop_assert!(after <= before, "{} settled more often than it started", name);
        prop_assert!(before - after <= 1, "{} started twice without settling", name);
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every settled notification has exactly one `:before`.
    #[test]
    fn property_notifications_pair_up(ops in proptest::collection::vec(op(), 1..32)) {
        let mut h = Harness::manual(Default::default(), fruit_items());
        for op in &ops {
            apply(&mut h, op);
            check_pairing(&h)?;

            let opening = h.sink.count("dropdown.open:before") > h.sink.count("dropdown.open");
            prop_assert_eq!(opening, h.dropdown.phase() == Phase::Opening, "after {:?}", op);
            let closing = h.sink.count("dropdown.close:before") > h.sink.count("dropdown.close");
            prop_assert_eq!(closing, h.dropdown.phase() == Phase::Closing, "after {:?}", op);
        }
    }

    /// PROPERTY: once every transition settles the widget is at rest.
    #[test]
    fn property_settles_to_a_resting_state(ops in proptest::collection::vec(op(), 0..32)) {
        let mut h = Harness::manual(Default::default(), fruit_items());
        for op in &ops {
            apply(&mut h, op);
        }
        h.dropdown.complete_all();

        prop_assert!(matches!(h.dropdown.phase(), Phase::Open | Phase::Closed));
        prop_assert!(h.dropdown.menu_transition().is_none());
        prop_assert!(!h.dropdown.is_resizing());
        prop_assert!(h.dropdown.pending_transitions().is_empty());
        prop_assert!(h.dropdown.current_menu().is_some());
        prop_assert_eq!(h.sink.count("dropdown.open:before"), h.sink.count("dropdown.open"));
        prop_assert_eq!(h.sink.count("dropdown.close:before"), h.sink.count("dropdown.close"));
    }
}
