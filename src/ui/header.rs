use iced::widget::{button, column, container, row, text, Space};
use iced::{Color, Element, Length, Padding};

use crate::app::Message;
use crate::theme;

/// Page title with an optional primary action on the right.
pub fn page_header<'a>(
    title: &'a str,
    subtitle: &'a str,
    action: Option<(&'a str, Message)>,
) -> Element<'a, Message> {
    let heading = column![
        text(title).size(26).color(theme::TEXT_PRIMARY),
        text(subtitle).size(13).color(theme::TEXT_SECONDARY),
    ]
    .spacing(4);

    let mut bar = row![heading, Space::new().width(Length::Fill)].align_y(iced::Alignment::Center);

    if let Some((label, msg)) = action {
        bar = bar.push(
            button(text(label).size(13).color(theme::TEXT_PRIMARY))
                .padding(Padding::from([8, 16]))
                .style(theme::primary_button)
                .on_press(msg),
        );
    }

    container(bar).width(Length::Fill).into()
}

/// One summary figure, e.g. "Published 12".
pub fn stat_card(label: &str, value: String, accent: Color) -> Element<'static, Message> {
    container(
        column![
            text(label.to_string()).size(12).color(theme::TEXT_MUTED),
            text(value).size(24).color(accent),
        ]
        .spacing(4),
    )
    .padding(16)
    .width(Length::Fill)
    .style(theme::card)
    .into()
}

pub fn stat_row(cards: Vec<Element<'static, Message>>) -> Element<'static, Message> {
    row(cards).spacing(16).width(Length::Fill).into()
}
