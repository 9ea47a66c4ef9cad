use iced::widget::{container, row, text, text_input, Space};
use iced::{Element, Length, Padding};

use crate::app::Message;
use crate::theme;

/// Search box with a result counter. Filtering runs on every keystroke.
pub fn search_bar<'a>(
    placeholder: &'a str,
    query: &'a str,
    shown: usize,
    total: usize,
    on_input: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    let search = text_input(placeholder, query)
        .on_input(on_input)
        .width(320)
        .size(13)
        .padding(Padding::from([6, 10]))
        .style(theme::input);

    let counter = if query.is_empty() {
        format!("{total} total")
    } else {
        format!("{shown} of {total}")
    };

    container(
        row![
            search,
            Space::new().width(Length::Fill),
            text(counter).size(12).color(theme::TEXT_MUTED),
        ]
        .align_y(iced::Alignment::Center),
    )
    .width(Length::Fill)
    .padding(Padding::from([8, 0]))
    .into()
}
