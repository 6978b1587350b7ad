//! Selection contracts
//!
//! - Single-select holds at most one selected leaf
//! - A parent is selected exactly when one of its children is
//! - Multi-select sequences stay free of duplicates
//! - A value of "0" is a real value

use dropmenu::{ItemId, ItemSpec, SelectionValue};

use crate::common::*;

mod single_select {
    use super::*;

    /// CONTRACT: selecting a second leaf deselects the first
    #[test]
    fn contract_single_select_is_exclusive() {
        let mut h = Harness::instant(instant_options(), fruit_items());

        assert!(h.dropdown.select("apple"));
        assert!(h.dropdown.select("lime"));

        assert_eq!(h.selected_leaves(), vec!["lime".to_string()]);
        assert_eq!(h.dropdown.selected(), &[ItemId::new("lime")]);
        assert!(!h.is_selected("apple"));
    }

    /// CONTRACT: the previous item is reported with the new selection
    #[test]
    fn contract_select_reports_previous() {
        let mut h = Harness::instant(instant_options(), fruit_items());
        h.dropdown.select("apple");
        h.sink.clear();

        h.dropdown.select("banana");

        let events = h.sink.events();
        let select = events
            .iter()
            .find(|e| e.name() == "dropdown.select")
            .expect("select notification");
        assert_eq!(
            select,
            &dropmenu::DropdownEvent::Select {
                item: ItemId::new("banana"),
                previous: Some(ItemId::new("apple")),
            }
        );
    }

    /// CONTRACT: reselecting the selected item keeps it selected
    #[test]
    fn contract_reselect_is_stable() {
        let mut h = Harness::instant(instant_options(), fruit_items());
        h.dropdown.select("banana");
        h.dropdown.select("banana");

        assert_eq!(h.selected_leaves(), vec!["banana".to_string()]);
        assert_eq!(h.dropdown.value(), SelectionValue::Single(Some("2".to_string())));
    }
}

mod propagation {
    use super::*;

    fn assert_parents_consistent(h: &Harness) {
        for (parent, children) in DEEP_PARENTS {
            let any_child = children.iter().any(|c| h.is_selected(c));
            assert_eq!(
                h.is_selected(parent),
                any_child,
                "parent '{}' must be selected exactly when a child is",
                parent
            );
        }
    }

    /// CONTRACT: selecting a deep leaf marks every ancestor
    #[test]
    fn contract_selection_reaches_every_ancestor() {
        let mut h = Harness::instant(multi_options(), deep_items());

        h.dropdown.select("pear");

        assert!(h.is_selected("fruit"));
        assert!(h.is_selected("food"));
        assert!(!h.is_selected("bread"));
        assert_parents_consistent(&h);
    }

    /// CONTRACT: a parent stays selected while any child still is
    #[test]
    fn contract_parent_follows_remaining_children() {
        let mut h = Harness::instant(multi_options(), deep_items());
        h.dropdown.select("apple");
        h.dropdown.select("cheese");

        h.dropdown.deselect("apple");
        assert!(!h.is_selected("fruit"));
        assert!(h.is_selected("food"));
        assert_parents_consistent(&h);

        h.dropdown.deselect("cheese");
        assert!(!h.is_selected("food"));
        assert_parents_consistent(&h);
    }

    /// CONTRACT: deselecting a parent clears its whole subtree
    #[test]
    fn contract_deselect_parent_clears_subtree() {
        let mut h = Harness::instant(multi_options(), deep_items());
        h.dropdown.select("apple");
        h.dropdown.select("pear");
        h.dropdown.select("cheese");

        assert!(h.dropdown.deselect("food"));

        assert!(h.selected_leaves().is_empty());
        assert!(h.dropdown.selected().is_empty());
        assert_parents_consistent(&h);
    }

    /// CONTRACT: single-select moves the ancestor marks with the selection
    #[test]
    fn contract_single_select_moves_ancestor_marks() {
        let mut h = Harness::instant(instant_options(), deep_items());
        h.dropdown.select("apple");
        h.dropdown.select("bread");

        assert!(!h.is_selected("fruit"));
        assert!(!h.is_selected("food"));
        assert_parents_consistent(&h);
    }
}

mod multi_select {
    use super::*;

    /// CONTRACT: toggling never duplicates ids or values
    #[test]
    fn contract_multi_sequences_have_no_duplicates() {
        let mut h = Harness::instant(multi_options(), fruit_items());

        h.dropdown.select("apple");
        h.dropdown.select_by_value("1", false);
        h.dropdown.select("banana");
        h.dropdown.select_by_value(["1", "2"], false);

        assert_eq!(
            h.dropdown.selected(),
            &[ItemId::new("apple"), ItemId::new("banana")]
        );
        assert_eq!(
            h.dropdown.value(),
            SelectionValue::Multi(vec!["1".to_string(), "2".to_string()])
        );
    }

    /// CONTRACT: selecting twice is the same as selecting then deselecting
    #[test]
    fn contract_multi_select_toggles() {
        let mut twice = Harness::instant(multi_options(), fruit_items());
        twice.dropdown.select("banana");
        twice.dropdown.select("banana");

        let mut explicit = Harness::instant(multi_options(), fruit_items());
        explicit.dropdown.select("banana");
        explicit.dropdown.deselect("banana");

        assert_eq!(twice.dropdown.selected(), explicit.dropdown.selected());
        assert_eq!(twice.dropdown.value(), explicit.dropdown.value());
        assert!(!twice.is_selected("banana"));
    }

    /// CONTRACT: the value sequence tracks the id sequence
    #[test]
    fn contract_values_follow_items() {
        let mut h = Harness::instant(multi_options(), fruit_items());
        h.dropdown.select("lemon");
        h.dropdown.select("apple");
        h.dropdown.select("lemon");

        assert_eq!(h.dropdown.selected(), &[ItemId::new("apple")]);
        assert_eq!(h.dropdown.value(), SelectionValue::Multi(vec!["1".to_string()]));
    }
}

mod values {
    use super::*;

    /// CONTRACT: "0" is selectable by value and reported as "0"
    #[test]
    fn contract_zero_is_a_value() {
        let items = vec![
            ItemSpec::new("None").with_id("none").with_value("0"),
            ItemSpec::new("One").with_id("one").with_value("1"),
        ];
        let mut h = Harness::instant(instant_options(), items);

        assert!(h.dropdown.select_by_value("0", false));

        assert!(h.is_selected("none"));
        assert_eq!(h.dropdown.value(), SelectionValue::Single(Some("0".to_string())));
        assert_eq!(h.dropdown.item_value("none").as_deref(), Some("0"));
    }

    /// CONTRACT: a text of "0" without a value resolves to "0"
    #[test]
    fn contract_zero_text_resolves_to_zero() {
        let items = vec![ItemSpec::new("0").with_id("zero")];
        let mut h = Harness::instant(instant_options(), items);

        h.dropdown.select("zero");

        assert_eq!(h.dropdown.value(), SelectionValue::Single(Some("0".to_string())));
    }

    /// CONTRACT: an item without a value answers with its text
    #[test]
    fn contract_value_falls_back_to_text() {
        let mut h = Harness::instant(instant_options(), fruit_items());
        h.dropdown.select("lime");

        assert_eq!(h.dropdown.value(), SelectionValue::Single(Some("Lime".to_string())));
    }

    /// CONTRACT: select_by_value only ever selects leaves
    #[test]
    fn contract_select_by_value_skips_parents() {
        let mut h = Harness::instant(multi_options(), fruit_items());

        h.dropdown.select_by_value("Citrus", false);

        assert!(h.dropdown.selected().is_empty());
        assert!(!h.is_selected("citrus"));
    }
}
