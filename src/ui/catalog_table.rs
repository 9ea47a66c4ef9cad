use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Border, Element, Length, Padding, Theme};

use crate::app::Message;
use crate::catalog::schema::*;
use crate::theme;
use crate::ui::badges;

pub fn catalog_table<'a>(kind: MediaKind, entries: Vec<&'a CatalogEntry>) -> Element<'a, Message> {
    let extra_header = match kind {
        MediaKind::Movie => "Providers",
        MediaKind::Series => "Seasons",
    };

    let header = container(
        row![
            container(text("Title").size(12).color(theme::TEXT_MUTED)).width(Length::Fill),
            container(text("Year").size(12).color(theme::TEXT_MUTED)).width(60),
            container(text("Rating").size(12).color(theme::TEXT_MUTED)).width(60),
            container(text("Category").size(12).color(theme::TEXT_MUTED)).width(110),
            container(text("Language").size(12).color(theme::TEXT_MUTED)).width(90),
            container(text(extra_header).size(12).color(theme::TEXT_MUTED)).width(110),
            container(text("Status").size(12).color(theme::TEXT_MUTED)).width(90),
            container(text("Actions").size(12).color(theme::TEXT_MUTED)).width(110),
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

    let mut rows: Vec<Element<'a, Message>> = entries.into_iter().map(entry_row).collect();

    if rows.is_empty() {
        rows.push(
            container(
                text(format!("No {} match the search.", plural(kind)))
                    .size(14)
                    .color(theme::TEXT_MUTED),
            )
            .width(Length::Fill)
            .padding(40)
            .center_x(Length::Fill)
            .into(),
        );
    }

    let body = scrollable(column(rows).width(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill);

    column![header, body].width(Length::Fill).into()
}

fn plural(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Movie => "movies",
        MediaKind::Series => "series",
    }
}

fn entry_row(entry: &CatalogEntry) -> Element<'_, Message> {
    let kind = entry.kind();
    let id = entry.id;
    let d = &entry.details;

    let title = column![text(&d.title).size(13).color(theme::TEXT_PRIMARY)].spacing(2);
    let title = if d.tagline.is_empty() {
        title
    } else {
        title.push(text(&d.tagline).size(11).color(theme::TEXT_MUTED))
    };

    let rating: Element<'_, Message> = match d.rating {
        Some(r) => text(format!("★ {r:.1}"))
            .size(12)
            .color(theme::rating_color(r))
            .into(),
        None => text("-").size(12).color(theme::TEXT_MUTED).into(),
    };

    let extra = match &entry.media {
        Media::Movie { providers } => format!("{} offering(s)", providers.len()),
        Media::Series { .. } => format!(
            "{} · {} eps",
            entry.media.season_count(),
            entry.media.episode_count()
        ),
    };

    let actions = row![
        button(text("Edit").size(12).color(theme::ACCENT))
            .padding(Padding::from([3, 8]))
            .style(theme::ghost_button)
            .on_press(Message::OpenEdit(kind, id)),
        button(text("Delete").size(12).color(theme::ERROR))
            .padding(Padding::from([3, 8]))
            .style(theme::ghost_button)
            .on_press(Message::DeleteEntry(kind, id)),
    ]
    .spacing(4);

    container(
        row![
            container(title).width(Length::Fill),
            container(text(d.release_year.to_string()).size(12).color(theme::TEXT_SECONDARY)).width(60),
            container(rating).width(60),
            container(badges::label_badge(d.category.as_str())).width(110),
            container(text(d.language.as_str()).size(12).color(theme::TEXT_SECONDARY)).width(90),
            container(text(extra).size(12).color(theme::TEXT_SECONDARY)).width(110),
            container(badges::entry_status_badge(entry.status)).width(90),
            container(actions).width(110),
        ]
        .spacing(8)
        .align_y(iced::Alignment::Center)
        .padding(Padding::from([8, 16])),
    )
    .width(Length::Fill)
    .style(|_: &Theme| container::Style {
        background: Some(theme::BG_PRIMARY.into()),
        border: Border {
            color: theme::BORDER,
            width: 0.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    })
    .into()
}
