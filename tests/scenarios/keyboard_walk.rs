//! Scenario: Keyboard Walk
//!
//! Journey: A user tabs onto the toggle and picks a nested item without
//! touching the pointer, while a second dropdown on the page stays put.
//!
//! Steps:
//! 1. Focus lands on the toggle control
//! 2. Down opens the widget and focuses the first item
//! 3. Down twice reaches the parent item, Right enters its submenu
//! 4. Enter selects the focused leaf
//! 5. A pointer press outside closes whatever is still open
//!
//! Success Criteria:
//! - The nested leaf ends up selected and its parent marked
//! - The widget closes after the pick and returns to the main menu
//! - Outside presses only close auto-closing instances

use dropmenu::{Dispatcher, Dropdown, InstanceId, Key, Options, Phase, SelectionValue};

use crate::common::*;

/// SCENARIO: pick a nested leaf with the keyboard alone
#[test]
fn scenario_keyboard_picks_nested_leaf() {
    let mut h = Harness::instant(instant_options(), fruit_items());
    let main = h.dropdown.main_menu().cloned().expect("main menu");

    // Step 1: keys are ignored until the toggle has focus
    assert!(!h.dropdown.handle_key(Key::Down));
    h.dropdown.set_toggle_focus(true);

    // Step 2: Down opens and focuses the first item
    assert!(h.dropdown.handle_key(Key::Down));
    assert_eq!(h.dropdown.phase(), Phase::Open);
    assert_eq!(h.dropdown.focused().map(|id| id.as_str()), Some("apple"));

    // Step 3: walk to the parent and enter its submenu
    h.dropdown.handle_key(Key::Down);
    h.dropdown.handle_key(Key::Down);
    assert_eq!(h.dropdown.focused().map(|id| id.as_str()), Some("citrus"));
    assert!(h.dropdown.handle_key(Key::Right));
    assert_eq!(h.dropdown.focused().map(|id| id.as_str()), Some("lime"));
    assert_ne!(h.dropdown.current_menu(), Some(&main));

    // Step 4: Enter selects and the widget closes
    assert!(h.dropdown.handle_key(Key::Enter));

    assert_eq!(h.dropdown.value(), SelectionValue::Single(Some("Lime".to_string())));
    assert!(h.is_selected("citrus"));
    assert_eq!(h.dropdown.phase(), Phase::Closed);
    assert_eq!(h.dropdown.current_menu(), Some(&main));
    assert_eq!(h.dropdown.focused(), None);
}

/// SCENARIO: Left backs out of a submenu onto its parent item
#[test]
fn scenario_keyboard_backs_out_of_submenu() {
    let mut h = Harness::instant(instant_options(), fruit_items());
    let main = h.dropdown.main_menu().cloned().expect("main menu");
    h.dropdown.open();
    h.dropdown.focus("citrus");

    h.dropdown.handle_key(Key::Right);
    assert!(h.dropdown.handle_key(Key::Left));

    assert_eq!(h.dropdown.current_menu(), Some(&main));
    assert_eq!(h.dropdown.focused().map(|id| id.as_str()), Some("citrus"));

    // Escape closes from anywhere
    assert!(h.dropdown.handle_key(Key::Escape));
    assert!(!h.dropdown.is_open());
}

/// SCENARIO: an outside press closes the open widgets that auto-close
#[test]
fn scenario_outside_press_closes_other_widgets() {
    let mut sticky = instant_options();
    sticky.auto_close = false;

    let mut dispatcher = Dispatcher::new();
    let a = dispatcher.register(dropdown_with_uid("a", instant_options()));
    let b = dispatcher.register(dropdown_with_uid("b", instant_options()));
    let c = dispatcher.register(dropdown_with_uid("c", sticky));

    for uid in [&a, &b, &c] {
        dispatcher.get_mut(uid).expect("registered").open();
    }

    // Step 5: the press lands inside `a`
    let closed = dispatcher.pointer_down(Some(&a));

    assert_eq!(closed, vec![InstanceId::from("b")]);
    assert!(dispatcher.get(&a).is_some_and(|d| d.is_open()));
    assert!(dispatcher.get(&c).is_some_and(|d| d.is_open()));

    // and a press outside every widget closes `a` too
    assert_eq!(dispatcher.pointer_down(None), vec![a.clone()]);
}

fn dropdown_with_uid(uid: &str, options: Options) -> Dropdown {
    Dropdown::builder(options)
        .uid(uid)
        .items(fruit_items())
        .build()
}
