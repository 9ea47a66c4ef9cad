use iced::widget::{
    button, column, container, mouse_area, opaque, pick_list, row, scrollable, text, text_input,
    Space,
};
use iced::{Border, Element, Length, Padding, Theme};

use crate::app::Message;
use crate::catalog::schema::*;
use crate::core::collection::{EpisodeEdit, ProviderEdit, SeasonEdit};
use crate::core::draft::{DraftField, EntryDraft};
use crate::core::session::EditorSession;
use crate::theme;

/// Modal editor for one movie or series draft.
pub fn entry_form(session: &EditorSession) -> Element<'_, Message> {
    let draft = &session.draft;
    let kind = session.kind();

    let title = if session.is_create() {
        format!("Add {kind}")
    } else {
        format!("Edit {kind}")
    };

    let heading = row![
        text(title).size(18).color(theme::TEXT_PRIMARY),
        Space::new().width(Length::Fill),
        button(text("✕").size(14).color(theme::TEXT_SECONDARY))
            .padding(Padding::from([2, 8]))
            .style(theme::ghost_button)
            .on_press(Message::CancelEditor),
    ]
    .align_y(iced::Alignment::Center);

    let basics = column![
        section_title("Basic Information"),
        text_field("Title *", "Enter title", draft, DraftField::Title),
        row![
            text_field("Release Year *", "2024", draft, DraftField::ReleaseYear),
            text_field("Rating", "0.0 - 10.0", draft, DraftField::Rating),
        ]
        .spacing(12),
        row![
            labeled(
                "Category *",
                pick_list(Category::ALL, draft.category(), Message::CategorySelected)
                    .placeholder("Select category")
                    .width(Length::Fill)
                    .text_size(13)
                    .padding(Padding::from([6, 10]))
                    .into(),
            ),
            labeled(
                "Language *",
                pick_list(Language::ALL, draft.language(), Message::LanguageSelected)
                    .placeholder("Select language")
                    .width(Length::Fill)
                    .text_size(13)
                    .padding(Padding::from([6, 10]))
                    .into(),
            ),
        ]
        .spacing(12),
        text_field("Tagline", "Short tagline", draft, DraftField::Tagline),
        text_field("Overview", "Plot summary", draft, DraftField::Overview),
    ]
    .spacing(10);

    let artwork = column![
        section_title("Artwork"),
        text_field("Poster URL", "https://", draft, DraftField::PosterUrl),
        text_field("Backdrop URL", "https://", draft, DraftField::BackdropUrl),
        text_field("Large Backdrop URL", "https://", draft, DraftField::BackdropLargeUrl),
    ]
    .spacing(10);

    let media: Element<'_, Message> = match kind {
        MediaKind::Movie => providers_section(draft.providers()),
        MediaKind::Series => seasons_section(session, draft.seasons()),
    };

    let missing = draft.missing_required();
    let hint: Element<'_, Message> = if missing.is_empty() {
        Space::new().width(0).into()
    } else {
        text(format!(
            "Required: {}",
            missing
                .iter()
                .map(|f| f.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        ))
        .size(12)
        .color(theme::WARNING)
        .into()
    };

    let footer = row![
        hint,
        Space::new().width(Length::Fill),
        button(text("Cancel").size(13).color(theme::TEXT_PRIMARY))
            .padding(Padding::from([8, 20]))
            .style(theme::secondary_button)
            .on_press(Message::CancelEditor),
        button(text("Save").size(13).color(theme::TEXT_PRIMARY))
            .padding(Padding::from([8, 20]))
            .style(theme::primary_button)
            .on_press(Message::SaveEditor),
    ]
    .spacing(8)
    .align_y(iced::Alignment::Center);

    let content = column![heading, basics, artwork, media]
        .spacing(20)
        .padding(24)
        .width(Length::Fill);

    let modal = container(
        column![
            scrollable(content).height(Length::Fill),
            container(footer).padding(Padding::from([12, 24])),
        ]
        .width(720),
    )
    .max_height(720)
    .style(|_: &Theme| container::Style {
        background: Some(theme::BG_SECONDARY.into()),
        border: Border {
            color: theme::BORDER,
            width: 1.0,
            radius: 12.0.into(),
        },
        ..Default::default()
    });

    backdrop(modal.into(), Message::CancelEditor)
}

/// Dim the page behind `modal`; a click outside it sends `on_dismiss`.
pub fn backdrop<'a>(modal: Element<'a, Message>, on_dismiss: Message) -> Element<'a, Message> {
    mouse_area(
        container(opaque(modal))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .style(|_: &Theme| container::Style {
                background: Some(iced::Color::from_rgba(0.0, 0.0, 0.0, 0.6).into()),
                ..Default::default()
            }),
    )
    .on_press(on_dismiss)
    .into()
}

// ── Providers ──

fn providers_section(providers: &[ProviderOffering]) -> Element<'_, Message> {
    let removable = providers.len() > 1;

    let cards = providers
        .iter()
        .enumerate()
        .map(|(i, p)| provider_card(i, p, removable));

    column![
        section_title("Streaming Providers"),
        column(cards).spacing(10),
        add_button("+ Add Provider", Message::AddProvider),
    ]
    .spacing(10)
    .into()
}

fn provider_card(index: usize, offering: &ProviderOffering, removable: bool) -> Element<'_, Message> {
    let heading = item_heading(
        format!("Provider {}", index + 1),
        removable.then_some(Message::RemoveProvider(index)),
    );

    let body = column![
        heading,
        row![
            input(
                "Display Name",
                "e.g. Netflix 4K",
                &offering.display_name,
                move |v| Message::ProviderChanged(index, ProviderEdit::DisplayName(v)),
            ),
            labeled(
                "Provider",
                pick_list(Provider::ALL, offering.provider, move |p| {
                    Message::ProviderChanged(index, ProviderEdit::Provider(p))
                })
                .placeholder("Select provider")
                .width(Length::Fill)
                .text_size(13)
                .padding(Padding::from([6, 10]))
                .into(),
            ),
            labeled(
                "Quality",
                pick_list(Quality::ALL, offering.quality, move |q| {
                    Message::ProviderChanged(index, ProviderEdit::Quality(q))
                })
                .placeholder("Quality")
                .width(Length::Fill)
                .text_size(13)
                .padding(Padding::from([6, 10]))
                .into(),
            ),
        ]
        .spacing(12),
        input("Video Link", "https://", &offering.video_link, move |v| {
            Message::ProviderChanged(index, ProviderEdit::VideoLink(v))
        }),
        input("Subtitle Link", "https://", &offering.subtitle_link, move |v| {
            Message::ProviderChanged(index, ProviderEdit::SubtitleLink(v))
        }),
    ]
    .spacing(8);

    item_card(body.into())
}

// ── Seasons and episodes ──

fn seasons_section<'a>(session: &'a EditorSession, seasons: &'a [Season]) -> Element<'a, Message> {
    let removable = seasons.len() > 1;

    let blocks = seasons.iter().enumerate().map(|(i, season)| {
        season_block(i, season, session.expansion.is_expanded(i), removable)
    });

    column![
        section_title("Seasons"),
        column(blocks).spacing(10),
        add_button("+ Add Season", Message::AddSeason),
    ]
    .spacing(10)
    .into()
}

fn season_block(index: usize, season: &Season, expanded: bool, removable: bool) -> Element<'_, Message> {
    let chevron = if expanded { "▾" } else { "▸" };
    let count = season.episodes.len();

    let mut header = row![
        button(
            row![
                text(chevron).size(13).color(theme::TEXT_SECONDARY),
                text(format!("Season {}", season.season_number))
                    .size(14)
                    .color(theme::TEXT_PRIMARY),
                text(format!(
                    "{count} episode{}",
                    if count == 1 { "" } else { "s" }
                ))
                .size(12)
                .color(theme::TEXT_MUTED),
            ]
            .spacing(8)
            .align_y(iced::Alignment::Center),
        )
        .padding(Padding::from([4, 8]))
        .style(theme::ghost_button)
        .on_press(Message::ToggleSeason(index)),
        text_input("Season title", &season.title)
            .on_input(move |v| Message::SeasonChanged(index, SeasonEdit::Title(v)))
            .width(Length::Fill)
            .size(13)
            .padding(Padding::from([6, 10]))
            .style(theme::input),
    ]
    .spacing(8)
    .align_y(iced::Alignment::Center);

    if removable {
        header = header.push(remove_button(Message::RemoveSeason(index)));
    }

    let mut body = column![header].spacing(10);

    if expanded {
        let episodes_removable = season.episodes.len() > 1;
        let episodes = season
            .episodes
            .iter()
            .enumerate()
            .map(|(e, ep)| episode_card(index, e, ep, episodes_removable));

        body = body
            .push(column(episodes).spacing(8).padding(Padding::ZERO.left(20)))
            .push(
                container(add_button("+ Add Episode", Message::AddEpisode(index)))
                    .padding(Padding::ZERO.left(20)),
            );
    }

    item_card(body.into())
}

fn episode_card(
    season: usize,
    index: usize,
    episode: &Episode,
    removable: bool,
) -> Element<'_, Message> {
    let heading = item_heading(
        format!("Episode {}", episode.episode_number),
        removable.then_some(Message::RemoveEpisode(season, index)),
    );

    let body = column![
        heading,
        input("Title", "Episode title", &episode.title, move |v| {
            Message::EpisodeChanged(season, index, EpisodeEdit::Title(v))
        }),
        row![
            labeled(
                "Quality",
                pick_list(Quality::ALL, episode.quality, move |q| {
                    Message::EpisodeChanged(season, index, EpisodeEdit::Quality(q))
                })
                .placeholder("Quality")
                .width(Length::Fill)
                .text_size(13)
                .padding(Padding::from([6, 10]))
                .into(),
            ),
            labeled(
                "Provider",
                pick_list(Provider::ALL, episode.provider, move |p| {
                    Message::EpisodeChanged(season, index, EpisodeEdit::Provider(p))
                })
                .placeholder("Select provider")
                .width(Length::Fill)
                .text_size(13)
                .padding(Padding::from([6, 10]))
                .into(),
            ),
        ]
        .spacing(12),
        input("Video Link", "https://", &episode.video_link, move |v| {
            Message::EpisodeChanged(season, index, EpisodeEdit::VideoLink(v))
        }),
        input("Subtitle Link", "https://", &episode.subtitle_link, move |v| {
            Message::EpisodeChanged(season, index, EpisodeEdit::SubtitleLink(v))
        }),
    ]
    .spacing(8);

    container(body)
        .padding(12)
        .width(Length::Fill)
        .style(|_: &Theme| container::Style {
            background: Some(theme::BG_PRIMARY.into()),
            border: Border {
                color: theme::BORDER_LIGHT,
                width: 1.0,
                radius: 6.0.into(),
            },
            ..Default::default()
        })
        .into()
}

// ── Small pieces ──

fn section_title(label: &str) -> Element<'_, Message> {
    text(label).size(14).color(theme::ACCENT_HOVER).into()
}

fn labeled<'a>(label: &'a str, control: Element<'a, Message>) -> Element<'a, Message> {
    column![text(label).size(12).color(theme::TEXT_SECONDARY), control]
        .spacing(4)
        .width(Length::Fill)
        .into()
}

fn input<'a>(
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    on_input: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    labeled(
        label,
        text_input(placeholder, value)
            .on_input(on_input)
            .size(13)
            .padding(Padding::from([6, 10]))
            .style(theme::input)
            .into(),
    )
}

fn text_field<'a>(
    label: &'a str,
    placeholder: &'a str,
    draft: &'a EntryDraft,
    field: DraftField,
) -> Element<'a, Message> {
    input(label, placeholder, draft.field(field), move |v| {
        Message::FieldChanged(field, v)
    })
}

fn item_heading(label: String, on_remove: Option<Message>) -> Element<'static, Message> {
    let mut heading = row![
        text(label).size(13).color(theme::TEXT_PRIMARY),
        Space::new().width(Length::Fill),
    ]
    .align_y(iced::Alignment::Center);

    if let Some(msg) = on_remove {
        heading = heading.push(remove_button(msg));
    }

    heading.into()
}

fn remove_button(msg: Message) -> Element<'static, Message> {
    button(text("Remove").size(12).color(theme::ERROR))
        .padding(Padding::from([3, 8]))
        .style(theme::ghost_button)
        .on_press(msg)
        .into()
}

fn add_button(label: &str, msg: Message) -> Element<'_, Message> {
    button(text(label).size(13).color(theme::ACCENT_HOVER))
        .padding(Padding::from([6, 12]))
        .style(theme::secondary_button)
        .on_press(msg)
        .into()
}

fn item_card(body: Element<'_, Message>) -> Element<'_, Message> {
    container(body)
        .padding(12)
        .width(Length::Fill)
        .style(theme::card)
        .into()
}
