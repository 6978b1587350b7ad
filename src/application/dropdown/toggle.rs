//! Toggle control label

use super::Dropdown;

/// Label shown on the toggle control.
///
/// Single-select shows one text. Multi-select keeps the texts of selected
/// items in selection order and joins them with ", ".
#[derive(Debug, Clone)]
pub(super) struct ToggleLabel {
    original: String,
    texts: Vec<String>,
    text: String,
}

impl ToggleLabel {
    pub(super) fn new(original: String) -> Self {
        Self {
            text: original.clone(),
            original,
            texts: Vec::new(),
        }
    }

    pub(super) fn text(&self) -> &str {
        &self.text
    }

    fn set(&mut self, text: Option<&str>) {
        self.text = text.unwrap_or(&self.original).to_string();
    }

    fn clear(&mut self) {
        self.texts.clear();
        self.text = self.original.clone();
    }

    fn add(&mut self, text: &str) {
        if !self.texts.iter().any(|t| t == text) {
            self.texts.push(text.to_string());
        }
        self.join();
    }

    fn remove(&mut self, text: &str) {
        self.texts.retain(|t| t != text);
        self.join();
    }

    fn toggle(&mut self, text: &str) {
        if self.texts.iter().any(|t| t == text) {
            self.remove(text);
        } else {
            self.add(text);
        }
    }

    fn join(&mut self) {
        self.text = if self.texts.is_empty() {
            self.original.clone()
        } else {
            self.texts.join(", ")
        };
    }
}

impl Dropdown {
    /// Set the toggle label, or restore the original one with `None`
    pub fn toggle_text(&mut self, text: Option<&str>) {
        self.toggle.set(text);
        self.surface.set_toggle_text(self.toggle.text());
    }

    /// Toggle `text` in the multi-select label; `None` clears it
    pub fn toggle_text_multi(&mut self, text: Option<&str>) {
        match text {
            Some(text) => self.toggle.toggle(text),
            None => self.toggle.clear(),
        }
        self.surface.set_toggle_text(self.toggle.text());
    }

    pub(super) fn toggle_label_added(&mut self, text: &str) {
        if self.selection.is_multi() {
            self.toggle.add(text);
        } else {
            self.toggle.set(Some(text));
        }
        self.surface.set_toggle_text(self.toggle.text());
    }

    pub(super) fn toggle_label_removed(&mut self, text: &str) {
        if self.selection.is_multi() {
            self.toggle.remove(text);
        } else {
            self.toggle.set(None);
        }
        self.surface.set_toggle_text(self.toggle.text());
    }

    pub(super) fn toggle_label_reset(&mut self) {
        self.toggle.clear();
        self.surface.set_toggle_text(self.toggle.text());
    }
}
