//! Test fixtures: item trees, source documents and instance harnesses.

use std::sync::Arc;

use dropmenu::config::Options;
use dropmenu::domain::entities::ItemSpec;
use dropmenu::infrastructure::{ManualAnimator, RecordingEventSink};
use dropmenu::Dropdown;

/// Two leaves and a parent with two children.
///
/// ```text
/// apple  = 1
/// banana = 2
/// citrus -> lime, lemon
/// ```
pub fn fruit_items() -> Vec<ItemSpec> {
    vec![
        ItemSpec::new("Apple").with_id("apple").with_value("1"),
        ItemSpec::new("Banana").with_id("banana").with_value("2"),
        ItemSpec::parent(
            "Citrus",
            vec![
                ItemSpec::new("Lime").with_id("lime"),
                ItemSpec::new("Lemon").with_id("lemon"),
            ],
        )
        .with_id("citrus"),
    ]
}

/// Three levels: food -> fruit -> (apple, pear), and a bread leaf.
pub fn deep_items() -> Vec<ItemSpec> {
    vec![
        ItemSpec::parent(
            "Food",
            vec![
                ItemSpec::parent(
                    "Fruit",
                    vec![
                        ItemSpec::new("Apple").with_id("apple"),
                        ItemSpec::new("Pear").with_id("pear"),
                    ],
                )
                .with_id("fruit"),
                ItemSpec::new("Cheese").with_id("cheese"),
            ],
        )
        .with_id("food"),
        ItemSpec::new("Bread").with_id("bread"),
    ]
}

/// Ids of every leaf in [`deep_items`]
pub const DEEP_LEAVES: &[&str] = &["apple", "pear", "cheese", "bread"];

/// Parents of [`deep_items`] with their direct children
pub const DEEP_PARENTS: &[(&str, &[&str])] = &[
    ("food", &["fruit", "cheese"]),
    ("fruit", &["apple", "pear"]),
];

/// Single-select native control with a group and a pre-selected option.
pub const SELECT_SOURCE: &str = r#"
title = "Fruit"

[options]
speed = 0

[select]
multiple = false

[[select.options]]
text = "Apple"
value = "1"

[[select.options]]
text = "Banana"
value = "2"
selected = true

[[select.options]]
label = "Citrus"
options = [{ text = "Lime", id = "lime" }, { text = "Lemon", id = "lemon" }]
"#;

/// Nested list with a link, a divider and an explicit submenu id.
pub const LIST_SOURCE: &str = r#"
title = "Site"

[[list.items]]
id = "home"
link = { text = "Home", href = "/" }

[[list.items]]
id = "docs"
text = "Docs"
data_value = "docs"
dropdown = { divider = "bottom" }

[[list.items]]
id = "more"
text = "More"
dropdown = { menu = "more-menu", title = "More" }

[[list.items.children]]
id = "about"
text = "About"

[[list.items.children]]
id = "zero"
text = "Nothing"
data_value = "0"
"#;

pub fn instant_options() -> Options {
    Options {
        speed: 0,
        ..Options::default()
    }
}

pub fn multi_options() -> Options {
    Options {
        speed: 0,
        multi: Some(true),
        ..Options::default()
    }
}

/// An instance with a recording sink and, optionally, a manual animator.
///
/// The recorder starts empty: notifications emitted while building are dropped.
pub struct Harness {
    pub dropdown: Dropdown,
    pub sink: RecordingEventSink,
    pub animator: ManualAnimator,
}

impl Harness {
    /// Transitions settle immediately
    pub fn instant(options: Options, items: Vec<ItemSpec>) -> Self {
        let sink = RecordingEventSink::new();
        let dropdown = Dropdown::builder(options)
            .uid("harness")
            .items(items)
            .sink(Arc::new(sink.clone()))
            .build();
        sink.clear();
        Self {
            dropdown,
            sink,
            animator: ManualAnimator::new(),
        }
    }

    /// Non-instant transitions wait for `complete_transition`
    pub fn manual(options: Options, items: Vec<ItemSpec>) -> Self {
        let sink = RecordingEventSink::new();
        let animator = ManualAnimator::new();
        let dropdown = Dropdown::builder(options)
            .uid("harness")
            .items(items)
            .animator(animator.clone())
            .sink(Arc::new(sink.clone()))
            .build();
        sink.clear();
        Self {
            dropdown,
            sink,
            animator,
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.dropdown.get_item(id).is_some_and(|item| item.selected)
    }

    /// Ids of every selected leaf, in store order
    pub fn selected_leaves(&self) -> Vec<String> {
        self.dropdown
            .store()
            .items()
            .filter(|item| item.selected && !item.is_parent())
            .map(|item| item.id.to_string())
            .collect()
    }

    /// Settle the most recent transition
    pub fn settle(&mut self) -> bool {
        match self.animator.last_handle() {
            Some(handle) => self.dropdown.complete_transition(handle),
            None => false,
        }
    }
}
