use iced::widget::{Column, Row, button, container, text};
use iced::{Border, Element, Length, Theme, alignment};

use super::command::SidebarsCommand;
use super::model::{SidebarsViewModel, SlotViewModel};
use crate::config::PanelGeometry;
use crate::shared::ui::theme::ThemeProps;

const TRIGGER_BAR_HEIGHT: f32 = 40.0;
const TRIGGER_BAR_SPACING: f32 = 8.0;
const TRIGGER_BAR_PADDING: f32 = 8.0;
const TRIGGER_LABEL_SIZE: f32 = 13.0;
const PANEL_LABEL_SIZE: f32 = 13.0;
const PANEL_PADDING: f32 = 12.0;
const UNWIRED_LABEL_ALPHA: f32 = 0.4;

/// Props for the sidebars view.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SidebarsViewProps<'a> {
    pub(crate) vm: SidebarsViewModel,
    pub(crate) geometry: &'a PanelGeometry,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the trigger bar plus the three panel regions.
///
/// Panel geometry is driven solely by the `open` class on each sidebar
/// element: open panels take their configured size, closed or absent
/// panels collapse to nothing.
pub(crate) fn view(
    props: SidebarsViewProps<'_>,
) -> Element<'_, SidebarsCommand, Theme, iced::Renderer> {
    let trigger_bar = view_trigger_bar(props);
    let body = view_body(props);

    Column::new()
        .push(trigger_bar)
        .push(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Render one trigger button per button element present on the page.
fn view_trigger_bar(
    props: SidebarsViewProps<'_>,
) -> Element<'_, SidebarsCommand, Theme, iced::Renderer> {
    let surface = props.theme.theme.surface;

    let mut bar = Row::new()
        .spacing(TRIGGER_BAR_SPACING)
        .align_y(alignment::Vertical::Center);

    for slot_vm in props.vm.slots {
        if slot_vm.button_present {
            bar = bar.push(trigger_button(slot_vm, props.theme));
        }
    }

    container(bar)
        .width(Length::Fill)
        .height(Length::Fixed(TRIGGER_BAR_HEIGHT))
        .padding(TRIGGER_BAR_PADDING)
        .align_y(alignment::Vertical::Center)
        .style(move |_| iced::widget::container::Style {
            background: Some(surface.into()),
            ..Default::default()
        })
        .into()
}

fn trigger_button<'a>(
    slot_vm: SlotViewModel,
    theme: ThemeProps<'a>,
) -> Element<'a, SidebarsCommand, Theme, iced::Renderer> {
    let accent = theme.theme.accent;
    let foreground = theme.theme.foreground;
    let panel = theme.theme.panel;

    let mut label_color = if slot_vm.is_open { accent } else { foreground };
    if !slot_vm.is_wired {
        // Present button whose sidebar is missing: pressable, muted, inert.
        label_color.a = UNWIRED_LABEL_ALPHA;
    }

    button(text(slot_vm.slot.title()).size(TRIGGER_LABEL_SIZE))
        .on_press(SidebarsCommand::ButtonPressed(slot_vm.slot))
        .style(move |_, status| {
            let background =
                if matches!(status, iced::widget::button::Status::Hovered) {
                    Some(panel.into())
                } else {
                    None
                };

            iced::widget::button::Style {
                background,
                text_color: label_color,
                border: Border::default(),
                ..Default::default()
            }
        })
        .into()
}

/// Render the side panels, content area, and bottom panel.
fn view_body(
    props: SidebarsViewProps<'_>,
) -> Element<'_, SidebarsCommand, Theme, iced::Renderer> {
    let [left_vm, right_vm, bottom_vm] = props.vm.slots;

    let mut middle = Row::new().width(Length::Fill).height(Length::Fill);

    if let Some(panel) = side_panel(
        left_vm,
        Length::Fixed(props.geometry.left_width),
        Length::Fill,
        props.theme,
    ) {
        middle = middle.push(panel);
    }

    middle = middle.push(content_area(props.theme));

    if let Some(panel) = side_panel(
        right_vm,
        Length::Fixed(props.geometry.right_width),
        Length::Fill,
        props.theme,
    ) {
        middle = middle.push(panel);
    }

    let mut body = Column::new().width(Length::Fill).height(Length::Fill);
    body = body.push(middle);

    if let Some(panel) = side_panel(
        bottom_vm,
        Length::Fill,
        Length::Fixed(props.geometry.bottom_height),
        props.theme,
    ) {
        body = body.push(panel);
    }

    body.into()
}

/// Render one panel region, or nothing when it is closed or absent.
fn side_panel<'a>(
    slot_vm: SlotViewModel,
    width: Length,
    height: Length,
    theme: ThemeProps<'a>,
) -> Option<Element<'a, SidebarsCommand, Theme, iced::Renderer>> {
    if !slot_vm.sidebar_present || !slot_vm.is_open {
        return None;
    }

    let panel = theme.theme.panel;
    let dim = theme.theme.dim_foreground;

    let label = text(format!("{} sidebar", slot_vm.slot.title()))
        .size(PANEL_LABEL_SIZE)
        .color(dim);

    Some(
        container(label)
            .width(width)
            .height(height)
            .padding(PANEL_PADDING)
            .style(move |_| iced::widget::container::Style {
                background: Some(panel.into()),
                ..Default::default()
            })
            .into(),
    )
}

/// Render the main content placeholder between the panels.
fn content_area<'a>(
    theme: ThemeProps<'a>,
) -> Element<'a, SidebarsCommand, Theme, iced::Renderer> {
    let background = theme.theme.background;
    let dim = theme.theme.dim_foreground;

    container(text("Content").size(PANEL_LABEL_SIZE).color(dim))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(move |_| iced::widget::container::Style {
            background: Some(background.into()),
            ..Default::default()
        })
        .into()
}
