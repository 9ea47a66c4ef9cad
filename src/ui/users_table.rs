use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Border, Element, Length, Padding, Theme};

use crate::app::Message;
use crate::catalog::schema::{User, UserStatus};
use crate::core::users::{format_date, format_watch_time, initials};
use crate::theme;
use crate::ui::badges;

pub fn users_table<'a>(users: Vec<&'a User>) -> Element<'a, Message> {
    let header = container(
        row![
            container(text("User").size(12).color(theme::TEXT_MUTED)).width(Length::Fill),
            container(text("Role").size(12).color(theme::TEXT_MUTED)).width(80),
            container(text("Status").size(12).color(theme::TEXT_MUTED)).width(80),
            container(text("Watch Time").size(12).color(theme::TEXT_MUTED)).width(100),
            container(text("Joined").size(12).color(theme::TEXT_MUTED)).width(110),
            container(text("Last Login").size(12).color(theme::TEXT_MUTED)).width(110),
            container(text("Actions").size(12).color(theme::TEXT_MUTED)).width(160),
        ]
        .spacing(8)
        .align_y(iced::Alignment::Center)
        .padding(Padding::from([8, 16])),
    )
    .width(Length::Fill)
    .style(|_: &Theme| container::Style {
        background: Some(theme::BG_SECONDARY.into()),
        border: Border {
            color: theme::BORDER,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    });

    let mut rows: Vec<Element<'a, Message>> = users.into_iter().map(user_row).collect();

    if rows.is_empty() {
        rows.push(
            container(text("No users match the search.").size(14).color(theme::TEXT_MUTED))
                .width(Length::Fill)
                .padding(40)
                .center_x(Length::Fill)
                .into(),
        );
    }

    column![
        header,
        scrollable(column(rows).width(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill),
    ]
    .width(Length::Fill)
    .into()
}

/// Round initials placeholder; the avatar image itself is never fetched.
pub fn avatar(username: &str, size: f32) -> Element<'static, Message> {
    container(text(initials(username)).size(size * 0.4).color(theme::TEXT_PRIMARY))
        .width(size)
        .height(size)
        .center_x(size)
        .center_y(size)
        .style(move |_: &Theme| container::Style {
            background: Some(theme::ACCENT_DIM.into()),
            border: Border::default().rounded(size / 2.0),
            ..Default::default()
        })
        .into()
}

fn user_row(user: &User) -> Element<'_, Message> {
    let id = user.id;

    let toggle_label = match user.status {
        UserStatus::Active => "Deactivate",
        UserStatus::Inactive => "Activate",
    };
    let toggle_color = match user.status {
        UserStatus::Active => theme::WARNING,
        UserStatus::Inactive => theme::SUCCESS,
    };

    let identity = row![
        avatar(&user.username, 32.0),
        column![
            text(&user.username).size(13).color(theme::TEXT_PRIMARY),
            text(&user.email).size(11).color(theme::TEXT_MUTED),
        ]
        .spacing(2),
    ]
    .spacing(10)
    .align_y(iced::Alignment::Center);

    let actions = row![
        button(text("View").size(12).color(theme::ACCENT))
            .padding(Padding::from([3, 8]))
            .style(theme::ghost_button)
            .on_press(Message::ViewUser(id)),
        button(text(toggle_label).size(12).color(toggle_color))
            .padding(Padding::from([3, 8]))
            .style(theme::ghost_button)
            .on_press(Message::ToggleUserStatus(id)),
    ]
    .spacing(4);

    container(
        row![
            container(identity).width(Length::Fill),
            container(badges::role_badge(user.role)).width(80),
            container(badges::user_status_badge(user.status)).width(80),
            container(
                text(format_watch_time(user.watch_time_minutes))
                    .size(12)
                    .color(theme::TEXT_SECONDARY)
            )
            .width(100),
            container(text(format_date(user.join_date)).size(12).color(theme::TEXT_SECONDARY))
                .width(110),
            container(text(format_date(user.last_login)).size(12).color(theme::TEXT_SECONDARY))
                .width(110),
            container(actions).width(160),
        ]
        .spacing(8)
        .align_y(iced::Alignment::Center)
        .padding(Padding::from([8, 16])),
    )
    .width(Length::Fill)
    .into()
}
