//! Host control model.
//!
//! The widget never talks to a real DOM. A [`Control`] is the string-level
//! view of the host element a controller is bound to: its data attributes,
//! its CSS class list, and the HTML fragment currently rendered inside it.
//! String ids come in through attributes; rendered fragments go out
//! through [`Control::set_html`].

use std::collections::{BTreeMap, BTreeSet};

/// A host-side element the widget binds to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Control {
    attrs: BTreeMap<String, String>,
    classes: BTreeSet<String>,
    html: String,
}

impl Control {
    /// Create an empty control.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style attribute setter.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Read an attribute.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// The HTML fragment currently rendered inside the control.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Replace the control's inner HTML.
    pub fn set_html(&mut self, html: impl Into<String>) {
        self.html = html.into();
    }

    /// Whether the control carries `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Add `class` to the class list.
    pub fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    /// Remove `class` from the class list.
    pub fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    /// Add or remove `class` depending on `on`.
    pub fn set_class(&mut self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    /// The class list as a space-separated attribute value, in stable
    /// order.
    pub fn class_attr(&self) -> String {
        self.classes
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attr_round_trip() {
        let control = Control::new().with_attr("data-lesson", "lesson4");
        assert_eq!(control.attr("data-lesson"), Some("lesson4"));
        assert_eq!(control.attr("data-other"), None);
    }

    #[test]
    fn set_html_replaces_fragment() {
        let mut control = Control::new();
        control.set_html("<b>hi</b>");
        assert_eq!(control.html(), "<b>hi</b>");
        control.set_html("plain");
        assert_eq!(control.html(), "plain");
    }

    #[test]
    fn class_toggling() {
        let mut control = Control::new();
        control.add_class("favorited");
        assert!(control.has_class("favorited"));
        control.remove_class("favorited");
        assert!(!control.has_class("favorited"));

        control.set_class("favorited", true);
        assert!(control.has_class("favorited"));
        control.set_class("favorited", false);
        assert!(!control.has_class("favorited"));
    }

    #[test]
    fn duplicate_class_is_kept_once() {
        let mut control = Control::new();
        control.add_class("btn");
        control.add_class("btn");
        assert_eq!(control.class_attr(), "btn");
    }

    #[test]
    fn class_attr_is_stable() {
        let mut control = Control::new();
        control.add_class("favorite-btn");
        control.add_class("btn");
        assert_eq!(control.class_attr(), "btn favorite-btn");
    }
}
