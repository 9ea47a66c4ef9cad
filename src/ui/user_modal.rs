use iced::widget::{button, column, container, row, text, Space};
use iced::{Border, Element, Length, Padding, Theme};

use crate::app::Message;
use crate::catalog::schema::{User, UserStatus};
use crate::core::users::{format_date, format_watch_time};
use crate::theme;
use crate::ui::badges;
use crate::ui::entry_form::backdrop;
use crate::ui::users_table::avatar;

/// Read-only profile of one user, with the status toggle.
pub fn user_modal(user: &User) -> Element<'_, Message> {
    let toggle_label = match user.status {
        UserStatus::Active => "Deactivate User",
        UserStatus::Inactive => "Activate User",
    };

    let content = column![
        row![
            avatar(&user.username, 56.0),
            column![
                text(&user.username).size(18).color(theme::TEXT_PRIMARY),
                text(&user.email).size(13).color(theme::TEXT_SECONDARY),
                row![badges::role_badge(user.role), badges::user_status_badge(user.status)]
                    .spacing(6),
            ]
            .spacing(4),
            Space::new().width(Length::Fill),
            button(text("✕").size(14).color(theme::TEXT_SECONDARY))
                .padding(Padding::from([2, 8]))
                .style(theme::ghost_button)
                .on_press(Message::CloseUserView),
        ]
        .spacing(16),
        detail("User ID", user.id.to_string()),
        detail("Total Watch Time", format_watch_time(user.watch_time_minutes)),
        detail("Join Date", format_date(user.join_date)),
        detail("Last Login", format_date(user.last_login)),
        row![
            Space::new().width(Length::Fill),
            button(text("Close").size(13).color(theme::TEXT_PRIMARY))
                .padding(Padding::from([8, 20]))
                .style(theme::secondary_button)
                .on_press(Message::CloseUserView),
            button(text(toggle_label).size(13).color(theme::TEXT_PRIMARY))
                .padding(Padding::from([8, 20]))
                .style(theme::primary_button)
                .on_press(Message::ToggleUserStatus(user.id)),
        ]
        .spacing(8),
    ]
    .spacing(14)
    .padding(24)
    .width(460);

    let modal = container(content).style(|_: &Theme| container::Style {
        background: Some(theme::BG_SECONDARY.into()),
        border: Border {
            color: theme::BORDER,
            width: 1.0,
            radius: 12.0.into(),
        },
        ..Default::default()
    });

    backdrop(modal.into(), Message::CloseUserView)
}

fn detail(label: &str, value: String) -> Element<'_, Message> {
    row![
        text(label).size(13).color(theme::TEXT_MUTED),
        Space::new().width(Length::Fill),
        text(value).size(13).color(theme::TEXT_PRIMARY),
    ]
    .into()
}
