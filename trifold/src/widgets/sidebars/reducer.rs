use iced::Task;

use super::command::SidebarsCommand;
use super::state::SidebarsState;

/// Reduce a sidebars command into state updates.
///
/// The widget produces no effects: a button press either flips its own
/// slot's open class or, for an unwired slot, does nothing at all.
pub(super) fn reduce(
    state: &mut SidebarsState,
    command: SidebarsCommand,
) -> Task<SidebarsCommand> {
    match command {
        SidebarsCommand::ButtonPressed(slot) => {
            state.toggle(slot);
            Task::none()
        },
    }
}

#[cfg(test)]
mod tests {
    use crate::document::{Document, Element};
    use crate::widgets::sidebars::model::SidebarSlot;
    use crate::widgets::sidebars::{SidebarsCommand, SidebarsWidget};

    fn full_page() -> Document {
        let mut document = Document::default();
        for slot in SidebarSlot::ALL {
            document.insert(Element::new(slot.sidebar_id()));
            document.insert(Element::new(slot.button_id()));
        }
        document
    }

    fn press(widget: &mut SidebarsWidget, slot: SidebarSlot) {
        let _task = widget.reduce(SidebarsCommand::ButtonPressed(slot));
    }

    #[test]
    fn given_closed_left_sidebar_when_button_pressed_then_sidebar_opens() {
        let mut widget = SidebarsWidget::initialize(full_page());

        press(&mut widget, SidebarSlot::Left);

        assert!(widget.is_open(SidebarSlot::Left));
    }

    #[test]
    fn given_open_left_sidebar_when_button_pressed_then_sidebar_closes() {
        let mut widget = SidebarsWidget::initialize(full_page());
        press(&mut widget, SidebarSlot::Left);

        press(&mut widget, SidebarSlot::Left);

        assert!(!widget.is_open(SidebarSlot::Left));
    }

    #[test]
    fn given_three_presses_when_reduced_then_original_state_is_flipped() {
        let mut widget = SidebarsWidget::initialize(full_page());

        press(&mut widget, SidebarSlot::Bottom);
        press(&mut widget, SidebarSlot::Bottom);
        press(&mut widget, SidebarSlot::Bottom);

        assert!(widget.is_open(SidebarSlot::Bottom));
    }

    #[test]
    fn given_one_slot_pressed_when_reduced_then_other_slots_are_untouched()
    {
        let mut widget = SidebarsWidget::initialize(full_page());

        press(&mut widget, SidebarSlot::Right);

        assert!(widget.is_open(SidebarSlot::Right));
        assert!(!widget.is_open(SidebarSlot::Left));
        assert!(!widget.is_open(SidebarSlot::Bottom));
    }

    #[test]
    fn given_missing_right_button_when_pressed_then_no_class_mutation_occurs()
    {
        let mut document = full_page();
        let mut without_button = Document::default();
        for slot in SidebarSlot::ALL {
            if let Some(element) = document.element(slot.sidebar_id()) {
                without_button.insert(element.clone());
            }
            if slot != SidebarSlot::Right {
                if let Some(element) = document.element(slot.button_id()) {
                    without_button.insert(element.clone());
                }
            }
        }
        let mut widget = SidebarsWidget::initialize(without_button);

        press(&mut widget, SidebarSlot::Right);

        assert!(!widget.is_open(SidebarSlot::Right));
    }

    #[test]
    fn given_partially_wired_page_when_wired_slot_pressed_then_it_still_toggles()
    {
        let mut document = Document::default();
        document.insert(Element::new(SidebarSlot::Left.sidebar_id()));
        document.insert(Element::new(SidebarSlot::Left.button_id()));
        document.insert(Element::new(SidebarSlot::Bottom.sidebar_id()));
        let mut widget = SidebarsWidget::initialize(document);

        press(&mut widget, SidebarSlot::Left);
        press(&mut widget, SidebarSlot::Bottom);

        assert!(widget.is_open(SidebarSlot::Left));
        assert!(!widget.is_open(SidebarSlot::Bottom));
    }
}
