use iced::widget::{Space, column, container, text};
use iced::{Element, Length, Theme, alignment};

use super::{App, AppEvent};
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::sidebars::view as sidebars_view;

const HEADER_HEIGHT: f32 = 34.0;
const HEADER_TITLE_SIZE: f32 = 13.0;
const HEADER_PADDING_X: f32 = 12.0;
const HEADER_SEPARATOR_HEIGHT: f32 = 1.0;
const SEPARATOR_ALPHA: f32 = 0.3;

/// Render the root application view.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let theme_props = ThemeProps::new(&app.theme);

    let header = view_header(app, theme_props);

    let body = sidebars_view::view(sidebars_view::SidebarsViewProps {
        vm: app.widgets.sidebars.vm(),
        geometry: &app.config.panels,
        theme: theme_props,
    })
    .map(AppEvent::Sidebars);

    column![header, body]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Render the header: title bar + separator.
fn view_header<'a>(
    app: &'a App,
    theme_props: ThemeProps<'a>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let surface = theme_props.theme.surface;
    let foreground = theme_props.theme.foreground;
    let mut separator_color = theme_props.theme.dim_foreground;
    separator_color.a = SEPARATOR_ALPHA;

    let title = container(
        text(app.title()).size(HEADER_TITLE_SIZE).color(foreground),
    )
    .width(Length::Fill)
    .height(Length::Fixed(HEADER_HEIGHT))
    .padding([0.0, HEADER_PADDING_X])
    .align_y(alignment::Vertical::Center)
    .style(move |_| iced::widget::container::Style {
        background: Some(surface.into()),
        ..Default::default()
    });

    let separator = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(HEADER_SEPARATOR_HEIGHT))
        .style(move |_| iced::widget::container::Style {
            background: Some(separator_color.into()),
            ..Default::default()
        });

    column![title, separator]
        .width(Length::Fill)
        .height(Length::Shrink)
        .into()
}
