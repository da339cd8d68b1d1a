/// Class name toggled on a sidebar element to open or close it.
pub(crate) const OPEN_CLASS: &str = "open";

/// One of the three fixed sidebar/button pairs on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SidebarSlot {
    Left,
    Right,
    Bottom,
}

impl SidebarSlot {
    /// Static pairing table, iterated once at initialization.
    pub(crate) const ALL: [SidebarSlot; 3] =
        [SidebarSlot::Left, SidebarSlot::Right, SidebarSlot::Bottom];

    /// Return the id of the sidebar element for this slot.
    pub(crate) fn sidebar_id(self) -> &'static str {
        match self {
            SidebarSlot::Left => "left-sidebar",
            SidebarSlot::Right => "right-sidebar",
            SidebarSlot::Bottom => "bottom-sidebar",
        }
    }

    /// Return the id of the trigger button element for this slot.
    pub(crate) fn button_id(self) -> &'static str {
        match self {
            SidebarSlot::Left => "left-sidebar-button",
            SidebarSlot::Right => "right-sidebar-button",
            SidebarSlot::Bottom => "bottom-sidebar-button",
        }
    }

    /// Return the label shown on the trigger button.
    pub(crate) fn title(self) -> &'static str {
        match self {
            SidebarSlot::Left => "Left",
            SidebarSlot::Right => "Right",
            SidebarSlot::Bottom => "Bottom",
        }
    }
}

/// Read-only snapshot of one slot for the presentation layer.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SlotViewModel {
    pub(crate) slot: SidebarSlot,
    /// The sidebar element exists in the document.
    pub(crate) sidebar_present: bool,
    /// The trigger button element exists in the document.
    pub(crate) button_present: bool,
    /// Both elements existed at initialization, so the pair is wired.
    pub(crate) is_wired: bool,
    /// The sidebar element currently carries the `open` class.
    pub(crate) is_open: bool,
}

/// Read-only view model for the sidebars widget.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SidebarsViewModel {
    pub(crate) slots: [SlotViewModel; 3],
}
