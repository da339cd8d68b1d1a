use iced::{Task, window};

use super::{App, AppEvent};
use crate::routers;

/// Thin dispatch: route each event to its owning router or handler.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        // Sidebars widget
        AppEvent::Sidebars(command) => routers::sidebars::route(app, command),
        // Window lifecycle
        AppEvent::Window(window::Event::Closed) => {
            // The document context is gone; wired listeners go with it.
            app.widgets.sidebars.dispose();
            Task::none()
        },
        AppEvent::Window(_) => Task::none(),
    }
}
