use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::sidebars::SidebarsCommand;

/// Route a sidebars command through widget reduction.
pub(crate) fn route(
    app: &mut App,
    command: SidebarsCommand,
) -> Task<AppEvent> {
    app.widgets.sidebars.reduce(command).map(AppEvent::Sidebars)
}
