use iced::{Subscription, window};

use crate::app::{App, AppEvent};

/// Build the active subscription set.
pub(super) fn subscription(_app: &App) -> Subscription<AppEvent> {
    window::events().map(|(_id, event)| AppEvent::Window(event))
}
