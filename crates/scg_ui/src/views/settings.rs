//! Settings page view.

use iced::widget::{button, checkbox, column, container, horizontal_space, row, text, text_input};
use iced::{Alignment, Element, Length};

use scg_core::api::DEFAULT_ENDPOINT;

use crate::app::{App, Message};
use crate::theme::{self, colors, font, spacing};

/// Build the settings page.
pub fn settings_page(app: &App) -> Element<'_, Message> {
    let endpoint_row = row![
        text("Analysis Endpoint:").size(font::NORMAL).width(Length::Fixed(210.0)),
        text_input(DEFAULT_ENDPOINT, &app.pending_endpoint)
            .on_input(Message::EndpointChanged)
            .width(Length::Fill)
            .size(font::NORMAL),
    ]
    .spacing(spacing::SM)
    .align_y(Alignment::Center);

    let autoscroll = checkbox("Auto-scroll the log panel", app.pending_autoscroll)
        .on_toggle(Message::AutoscrollToggled)
        .size(font::NORMAL);

    let buttons = row![
        horizontal_space(),
        button(text("Cancel").size(font::NORMAL)).on_press(Message::CancelSettings),
        button(text("Save").size(font::NORMAL))
            .style(button::primary)
            .on_press(Message::SaveSettings),
    ]
    .spacing(spacing::SM);

    let form = column![
        text("Settings").size(font::XL),
        endpoint_row,
        text("Full URL of the swing analysis service, including the /api/swings path.")
            .size(font::SM)
            .color(colors::TEXT_MUTED),
        autoscroll,
        buttons,
    ]
    .spacing(spacing::MD);

    container(
        container(form)
            .padding(spacing::LG)
            .width(Length::Fill)
            .style(theme::card),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::LG)
    .into()
}
