use std::collections::{BTreeMap, BTreeSet};

/// A node in the rendered page, identified by a fixed id string.
///
/// Class membership is the only modeled attribute: a sidebar is "open"
/// exactly when its element carries the `open` class.
#[derive(Debug, Clone)]
pub(crate) struct Element {
    id: String,
    classes: BTreeSet<String>,
}

impl Element {
    /// Create an element with the given id and no classes.
    pub(crate) fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            classes: BTreeSet::new(),
        }
    }

    /// Return the element id.
    pub(crate) fn id(&self) -> &str {
        &self.id
    }

    /// Return whether the class is currently present.
    pub(crate) fn has_class(&self, name: &str) -> bool {
        self.classes.contains(name)
    }

    /// Flip class membership and return whether it is present afterwards.
    ///
    /// The class is only ever flipped, never set absolutely.
    pub(crate) fn toggle_class(&mut self, name: &str) -> bool {
        if self.classes.remove(name) {
            false
        } else {
            self.classes.insert(name.to_string());
            true
        }
    }
}

/// The root container of rendered elements, addressed by id.
///
/// Lookups return typed optionals; a missing id is an expected outcome,
/// not an error.
#[derive(Debug, Clone, Default)]
pub(crate) struct Document {
    elements: BTreeMap<String, Element>,
}

impl Document {
    /// Insert an element, replacing any previous element with the same id.
    pub(crate) fn insert(&mut self, element: Element) {
        self.elements.insert(element.id().to_string(), element);
    }

    /// Look up an element by id.
    pub(crate) fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    /// Look up an element by id for mutation.
    pub(crate) fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.get_mut(id)
    }

    /// Return whether an element with the given id exists.
    pub(crate) fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }
}

#[cfg(test)]
mod tests {
    use super::{Document, Element};

    #[test]
    fn given_absent_class_when_toggled_then_class_becomes_present() {
        let mut element = Element::new("left-sidebar");

        let present = element.toggle_class("open");

        assert!(present);
        assert!(element.has_class("open"));
    }

    #[test]
    fn given_present_class_when_toggled_then_class_is_removed() {
        let mut element = Element::new("left-sidebar");
        element.toggle_class("open");

        let present = element.toggle_class("open");

        assert!(!present);
        assert!(!element.has_class("open"));
    }

    #[test]
    fn given_two_toggles_when_applied_then_original_state_is_restored() {
        let mut element = Element::new("bottom-sidebar");

        element.toggle_class("open");
        element.toggle_class("open");

        assert!(!element.has_class("open"));
    }

    #[test]
    fn given_unknown_id_when_looked_up_then_lookup_returns_none() {
        let document = Document::default();

        assert!(document.element("right-sidebar").is_none());
        assert!(!document.contains("right-sidebar"));
    }

    #[test]
    fn given_inserted_element_when_mutated_then_document_sees_the_change() {
        let mut document = Document::default();
        document.insert(Element::new("left-sidebar"));

        document
            .element_mut("left-sidebar")
            .expect("element should exist")
            .toggle_class("open");

        let element =
            document.element("left-sidebar").expect("element should exist");
        assert!(element.has_class("open"));
    }

    #[test]
    fn given_duplicate_insert_when_applied_then_element_is_replaced() {
        let mut document = Document::default();
        let mut first = Element::new("left-sidebar");
        first.toggle_class("open");
        document.insert(first);

        document.insert(Element::new("left-sidebar"));

        let element =
            document.element("left-sidebar").expect("element should exist");
        assert!(!element.has_class("open"));
    }
}
