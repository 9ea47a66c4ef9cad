use iced::widget::{button, column, container, row, text, Space};
use iced::{Border, Element, Length, Padding, Theme};

use crate::app::{Message, Page};
use crate::theme;

const SIDEBAR_WIDTH: f32 = 220.0;

pub fn sidebar(active: Page) -> Element<'static, Message> {
    let brand = row![
        text("Reel").size(20).color(theme::ACCENT),
        text("Admin").size(20).color(theme::TEXT_PRIMARY),
    ]
    .spacing(0);

    let nav = column(
        Page::ALL
            .iter()
            .map(|&page| nav_button(page, page == active)),
    )
    .spacing(4);

    container(
        column![
            container(brand).padding(Padding::from([16, 12])),
            nav,
            Space::new().height(Length::Fill),
            text("Catalog admin · in-memory session")
                .size(11)
                .color(theme::TEXT_MUTED),
        ]
        .spacing(12)
        .padding(12),
    )
    .width(SIDEBAR_WIDTH)
    .height(Length::Fill)
    .style(|_: &Theme| container::Style {
        background: Some(theme::BG_SECONDARY.into()),
        border: Border {
            color: theme::BORDER,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    })
    .into()
}

fn nav_button(page: Page, active: bool) -> Element<'static, Message> {
    let color = if active {
        theme::TEXT_PRIMARY
    } else {
        theme::TEXT_SECONDARY
    };

    button(text(page.label()).size(14).color(color))
        .padding(Padding::from([8, 12]))
        .width(Length::Fill)
        .style(move |_, status| {
            let bg = match (active, status) {
                (true, _) => Some(theme::ACCENT_DIM.into()),
                (false, button::Status::Hovered) => Some(theme::BG_HOVER.into()),
                _ => None,
            };
            button::Style {
                background: bg,
                text_color: color,
                border: Border::default().rounded(6),
                ..Default::default()
            }
        })
        .on_press(Message::Navigate(page))
        .into()
}
