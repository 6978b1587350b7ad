//! Transition contracts
//!
//! - A `:before` notification fires before motion starts; its plain
//!   counterpart fires only once the transition settles
//! - An operation repeated while its marker is set is rejected
//! - Completing a transition twice changes nothing
//! - A settled close resets to the main menu

use std::sync::Arc;

use dropmenu::infrastructure::RecordingEventSink;
use dropmenu::{Dropdown, MenuId, Phase};

use crate::common::*;

fn citrus_menu(h: &Harness) -> MenuId {
    h.dropdown
        .get_item("citrus")
        .and_then(|item| item.submenu().cloned())
        .expect("citrus opens a submenu")
}

mod widget {
    use super::*;

    /// CONTRACT: two opens in a row produce one open cycle
    #[test]
    fn contract_open_is_not_reentrant() {
        let mut h = Harness::manual(Default::default(), fruit_items());

        assert!(h.dropdown.open());
        assert!(!h.dropdown.open());
        assert!(h.settle());

        assert_eq!(h.sink.count("dropdown.open:before"), 1);
        assert_eq!(h.sink.count("dropdown.open"), 1);
        assert_eq!(h.dropdown.phase(), Phase::Open);
    }

    /// CONTRACT: post-notifications wait for completion
    #[test]
    fn contract_open_settles_on_completion_only() {
        let mut h = Harness::manual(Default::default(), fruit_items());

        h.dropdown.open();
        assert_eq!(h.dropdown.phase(), Phase::Opening);
        assert!(!h.dropdown.is_open());
        assert_eq!(h.sink.count("dropdown.open"), 0);

        h.settle();
        assert!(h.dropdown.is_open());
        assert_eq!(h.sink.count("dropdown.open"), 1);
    }

    /// CONTRACT: a handle completes once
    #[test]
    fn contract_completion_is_idempotent() {
        let mut h = Harness::manual(Default::default(), fruit_items());
        h.dropdown.open();
        let handle = h.animator.last_handle().expect("open started a transition");

        assert!(h.dropdown.complete_transition(handle));
        assert!(!h.dropdown.complete_transition(handle));
        assert_eq!(h.sink.count("dropdown.open"), 1);
    }

    /// CONTRACT: close cannot start until the widget has settled open
    #[test]
    fn contract_close_waits_for_open() {
        let mut h = Harness::manual(Default::default(), fruit_items());
        h.dropdown.open();

        assert!(!h.dropdown.close());
        h.settle();
        assert!(h.dropdown.close());
        assert_eq!(h.dropdown.phase(), Phase::Closing);
        assert!(!h.dropdown.close());

        h.settle();
        assert_eq!(h.dropdown.phase(), Phase::Closed);
        assert_eq!(h.sink.count("dropdown.close:before"), 1);
        assert_eq!(h.sink.count("dropdown.close"), 1);
    }

    /// CONTRACT: open waits until a close has settled
    #[test]
    fn contract_open_waits_for_close() {
        let mut h = Harness::manual(Default::default(), fruit_items());
        h.dropdown.open();
        h.settle();
        h.dropdown.close();

        assert!(!h.dropdown.open());
        assert!(!h.dropdown.toggle());
        assert_eq!(h.dropdown.phase(), Phase::Closing);
        assert_eq!(h.dropdown.pending_transitions().len(), 1);

        h.settle();
        assert_eq!(h.dropdown.phase(), Phase::Closed);
        assert!(h.dropdown.open());
        h.settle();
        assert_eq!(h.sink.count("dropdown.open"), 2);
        assert_eq!(h.sink.count("dropdown.close"), 1);
        assert!(h.dropdown.is_open());
    }

    /// CONTRACT: init builds the main menu before announcing itself
    #[test]
    fn contract_init_notifies_last() {
        let sink = RecordingEventSink::new();
        let _dropdown = Dropdown::builder(Default::default())
            .items(fruit_items())
            .sink(Arc::new(sink.clone()))
            .build();

        assert_eq!(
            sink.names(),
            vec![
                "dropdown.open.menu:before",
                "dropdown.resize:before",
                "dropdown.resize",
                "dropdown.open.menu",
                "dropdown.init",
            ]
        );
    }

    /// CONTRACT: every `:before` precedes its plain notification
    #[test]
    fn contract_before_precedes_after() {
        let mut h = Harness::manual(Default::default(), fruit_items());
        h.dropdown.open();
        h.settle();
        h.dropdown.close();
        h.settle();

        let names = h.sink.names();
        for name in ["dropdown.open", "dropdown.close"] {
            let before = format!("{}:before", name);
            let pre = names.iter().position(|n| *n == before).expect("pre");
            let post = names.iter().position(|n| n == &name).expect("post");
            assert!(pre < post, "{} must fire before {}", before, name);
        }
    }
}

mod menus {
    use super::*;

    /// CONTRACT: one menu transition at a time
    #[test]
    fn contract_menu_transitions_do_not_overlap() {
        let mut h = Harness::manual(Default::default(), fruit_items());
        let citrus = citrus_menu(&h);

        assert!(h.dropdown.open_menu(&citrus));
        assert!(!h.dropdown.close_menu(&citrus));
        assert!(!h.dropdown.open_menu("main"));
        assert_eq!(h.sink.count("dropdown.open.menu:before"), 1);

        h.settle();
        assert_eq!(h.dropdown.current_menu(), Some(&citrus));
        assert!(h.dropdown.close_menu(&citrus));
    }

    /// CONTRACT: the current menu changes when the slide settles
    #[test]
    fn contract_current_menu_flips_on_completion() {
        let mut h = Harness::manual(Default::default(), fruit_items());
        let main = h.dropdown.main_menu().cloned().expect("main menu");
        let citrus = citrus_menu(&h);

        h.dropdown.open_menu(&citrus);
        assert_eq!(h.dropdown.current_menu(), Some(&main));

        h.settle();
        assert_eq!(h.dropdown.current_menu(), Some(&citrus));
        assert!(h.dropdown.get_menu(&citrus).is_some_and(|m| m.open));
        assert!(h.dropdown.get_menu(&main).is_some_and(|m| !m.open));
    }

    /// CONTRACT: a settled close returns to the main menu
    #[test]
    fn contract_close_resets_to_main() {
        let mut h = Harness::instant(instant_options(), fruit_items());
        let main = h.dropdown.main_menu().cloned().expect("main menu");
        let citrus = citrus_menu(&h);

        h.dropdown.open();
        h.dropdown.open_menu(&citrus);
        assert_eq!(h.dropdown.current_menu(), Some(&citrus));

        h.dropdown.close();

        assert_eq!(h.dropdown.current_menu(), Some(&main));
        let open: Vec<_> = h.dropdown.store().menus().filter(|m| m.open).collect();
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].id, main);
        assert_eq!(h.sink.names().last(), Some(&"dropdown.close"));
        assert_eq!(h.sink.count("dropdown.reset"), 1);
    }

    /// CONTRACT: menus stay put while the widget opens or closes
    #[test]
    fn contract_menus_wait_for_the_widget() {
        let mut h = Harness::manual(Default::default(), fruit_items());
        let citrus = citrus_menu(&h);

        h.dropdown.open();
        assert!(!h.dropdown.select("citrus"));
        assert!(!h.dropdown.open_menu(&citrus));
        assert!(h.dropdown.menu_transition().is_none());

        h.settle();
        assert!(h.dropdown.open_menu(&citrus));
        h.settle();
        h.dropdown.close();
        assert!(!h.dropdown.close_menu(&citrus));
        assert_eq!(h.sink.count("dropdown.open.menu:before"), 1);
        assert_eq!(h.sink.count("dropdown.close.menu:before"), 0);
    }

    /// CONTRACT: reset drops menu transitions in flight
    #[test]
    fn contract_reset_cancels_menu_motion() {
        let mut h = Harness::manual(Default::default(), fruit_items());
        let main = h.dropdown.main_menu().cloned().expect("main menu");
        let citrus = citrus_menu(&h);

        h.dropdown.open_menu(&citrus);
        let handle = h.animator.last_handle().expect("menu transition");
        h.dropdown.reset(false);

        assert!(h.dropdown.menu_transition().is_none());
        assert!(!h.dropdown.complete_transition(handle));
        assert_eq!(h.dropdown.current_menu(), Some(&main));
        assert_eq!(h.sink.count("dropdown.open.menu"), 0);
    }
}
