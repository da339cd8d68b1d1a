mod command;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use command::SidebarsCommand;
use iced::Task;
use model::SidebarsViewModel;
use state::SidebarsState;

use crate::document::Document;

/// Sidebars widget: wires each sidebar/button pair present in the page
/// document and toggles the `open` class on press.
pub(crate) struct SidebarsWidget {
    state: SidebarsState,
}

impl SidebarsWidget {
    /// Wire the widget against an explicit page document.
    ///
    /// Pairs with a missing element are skipped silently; the remaining
    /// pairs are wired for the lifetime of the widget.
    pub(crate) fn initialize(document: Document) -> Self {
        Self {
            state: SidebarsState::initialize(document),
        }
    }

    /// Reduce a command into state updates.
    pub(crate) fn reduce(
        &mut self,
        command: SidebarsCommand,
    ) -> Task<SidebarsCommand> {
        reducer::reduce(&mut self.state, command)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self) -> SidebarsViewModel {
        self.state.vm()
    }

    /// Drop all wired bindings; later presses become silent no-ops.
    pub(crate) fn dispose(&mut self) {
        self.state.dispose();
    }

    /// Return whether the slot's sidebar currently carries the open class.
    #[cfg(test)]
    pub(crate) fn is_open(&self, slot: model::SidebarSlot) -> bool {
        self.state.is_open(slot)
    }
}
