#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use iced::{Element, Subscription, Task, Theme};

use crate::config::{self, UiConfig};
use crate::document::{Document, Element as PageElement};
use crate::shared::ui::theme::AppTheme;
use crate::widgets::Widgets;
use crate::widgets::sidebars::model::SidebarSlot;
use crate::widgets::sidebars::{SidebarsCommand, SidebarsWidget};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 640.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// App-wide events that drive the root update loop.
#[derive(Clone)]
pub(crate) enum AppEvent {
    // Sidebars widget
    Sidebars(SidebarsCommand),
    // Window lifecycle
    Window(iced::window::Event),
}

/// Root application state.
pub(crate) struct App {
    pub(crate) config: UiConfig,
    pub(crate) theme: AppTheme,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    ///
    /// The page document is built once here; the sidebars widget acquires
    /// its element references at this point and never re-acquires them.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let config = config::load_initial_config();
        let theme = AppTheme::from_choice(config.theme);

        let widgets = Widgets {
            sidebars: SidebarsWidget::initialize(page_document()),
        };

        let app = App {
            config,
            theme,
            widgets,
        };

        (app, Task::none())
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        String::from("Trifold")
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}

/// Build the rendered page: three sidebar elements and their trigger
/// buttons.
fn page_document() -> Document {
    let mut document = Document::default();
    for slot in SidebarSlot::ALL {
        document.insert(PageElement::new(slot.sidebar_id()));
        document.insert(PageElement::new(slot.button_id()));
    }
    document
}

#[cfg(test)]
mod tests {
    use super::page_document;
    use crate::widgets::sidebars::model::SidebarSlot;

    #[test]
    fn given_page_document_when_built_then_all_six_elements_exist() {
        let document = page_document();

        for slot in SidebarSlot::ALL {
            assert!(document.contains(slot.sidebar_id()));
            assert!(document.contains(slot.button_id()));
        }
    }
}
