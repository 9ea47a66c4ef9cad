use iced::widget::{container, text};
use iced::{Border, Color, Element, Padding, Theme};

use crate::app::Message;
use crate::catalog::schema::{EntryStatus, Role, UserStatus};
use crate::theme;

fn badge(label: String, color: Color) -> Element<'static, Message> {
    container(text(label).size(11).color(theme::TEXT_PRIMARY))
        .padding(Padding::from([2, 8]))
        .style(move |_: &Theme| container::Style {
            background: Some(color.into()),
            border: Border::default().rounded(4),
            ..Default::default()
        })
        .into()
}

pub fn entry_status_badge(status: EntryStatus) -> Element<'static, Message> {
    badge(status.as_str().to_string(), theme::entry_status_color(status))
}

pub fn user_status_badge(status: UserStatus) -> Element<'static, Message> {
    badge(status.as_str().to_string(), theme::user_status_color(status))
}

pub fn role_badge(role: Role) -> Element<'static, Message> {
    badge(role.as_str().to_string(), theme::role_color(role))
}

/// Neutral badge for categories and counts.
pub fn label_badge(label: impl Into<String>) -> Element<'static, Message> {
    badge(label.into(), theme::BG_TERTIARY)
}
