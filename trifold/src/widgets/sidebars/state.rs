use super::model::{OPEN_CLASS, SidebarSlot, SidebarsViewModel, SlotViewModel};
use crate::document::Document;

/// Internal state for the sidebars widget: the page document plus the
/// slots that were successfully wired at initialization.
#[derive(Debug)]
pub(super) struct SidebarsState {
    document: Document,
    wired: Vec<SidebarSlot>,
}

impl SidebarsState {
    /// Wire each slot whose sidebar and button both exist in the document.
    ///
    /// A slot with either element missing is skipped without wiring,
    /// logging, or any other side effect.
    pub(super) fn initialize(document: Document) -> Self {
        let mut wired = Vec::new();
        for slot in SidebarSlot::ALL {
            let sidebar = document.element(slot.sidebar_id());
            let button = document.element(slot.button_id());
            if sidebar.is_some() && button.is_some() {
                wired.push(slot);
            }
        }

        Self { document, wired }
    }

    /// Return whether the slot was wired at initialization.
    pub(super) fn is_wired(&self, slot: SidebarSlot) -> bool {
        self.wired.contains(&slot)
    }

    /// Return whether the slot's sidebar element carries the open class.
    pub(super) fn is_open(&self, slot: SidebarSlot) -> bool {
        self.document
            .element(slot.sidebar_id())
            .is_some_and(|element| element.has_class(OPEN_CLASS))
    }

    /// Flip the open class on a wired slot's sidebar element.
    ///
    /// Presses on unwired slots are silent no-ops; no other slot is ever
    /// touched.
    pub(super) fn toggle(&mut self, slot: SidebarSlot) {
        if !self.is_wired(slot) {
            return;
        }

        if let Some(element) = self.document.element_mut(slot.sidebar_id()) {
            element.toggle_class(OPEN_CLASS);
        }
    }

    /// Drop all wired bindings; the document itself is left untouched.
    pub(super) fn dispose(&mut self) {
        self.wired.clear();
    }

    /// Build a read-only snapshot of every slot.
    pub(super) fn vm(&self) -> SidebarsViewModel {
        SidebarsViewModel {
            slots: SidebarSlot::ALL.map(|slot| SlotViewModel {
                slot,
                sidebar_present: self.document.contains(slot.sidebar_id()),
                button_present: self.document.contains(slot.button_id()),
                is_wired: self.is_wired(slot),
                is_open: self.is_open(slot),
            }),
        }
    }
}
