use super::model::SidebarSlot;

/// Commands accepted by the sidebars reducer.
#[derive(Debug, Clone)]
pub(crate) enum SidebarsCommand {
    /// A slot's trigger button was pressed. Carries nothing beyond the
    /// slot; the handler reads no other event data.
    ButtonPressed(SidebarSlot),
}
