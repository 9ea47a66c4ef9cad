use chrono::Utc;
use iced::widget::{column, container, row, scrollable, text, Space};
use iced::{Element, Length};

use crate::app::Message;
use crate::catalog::schema::{CatalogEntry, MediaKind};
use crate::core::activity::{time_ago, ActivityLog};
use crate::core::stats::CatalogStats;
use crate::core::users::UserStats;
use crate::theme;
use crate::ui::header::{page_header, stat_card, stat_row};

pub fn dashboard<'a>(
    movies: CatalogStats,
    series: CatalogStats,
    users: UserStats,
    top: Vec<CatalogEntry>,
    activity: &'a ActivityLog,
) -> Element<'a, Message> {
    let cards = stat_row(vec![
        stat_card("Total Movies", movies.total.to_string(), theme::media_kind_color(MediaKind::Movie)),
        stat_card("Total Series", series.total.to_string(), theme::media_kind_color(MediaKind::Series)),
        stat_card("Total Users", users.total.to_string(), theme::ACCENT_HOVER),
        stat_card("Active Users", users.active.to_string(), theme::WARNING),
    ]);

    let overview = container(
        column![
            text("Catalog Overview").size(16).color(theme::TEXT_PRIMARY),
            overview_line("Published movies", movies.published.to_string()),
            overview_line("Draft movies", movies.drafts.to_string()),
            overview_line("Average movie rating", movies.average_label()),
            overview_line("Published series", series.published.to_string()),
            overview_line("Draft series", series.drafts.to_string()),
            overview_line("Seasons", series.seasons.to_string()),
            overview_line("Episodes", series.episodes.to_string()),
            overview_line("Average series rating", series.average_label()),
            overview_line("Administrators", users.admins.to_string()),
            overview_line("Inactive users", users.inactive.to_string()),
        ]
        .spacing(10),
    )
    .padding(20)
    .width(Length::Fill)
    .style(theme::card);

    let top_rated = container(
        column![
            text("Top Rated").size(16).color(theme::TEXT_PRIMARY),
            column(top.into_iter().map(top_line)).spacing(10),
        ]
        .spacing(12),
    )
    .padding(20)
    .width(Length::Fill)
    .style(theme::card);

    let recent = container(
        column![
            row![
                text("Recent Activity").size(16).color(theme::TEXT_PRIMARY),
                Space::new().width(Length::Fill),
                text(format!("{} recorded", activity.len()))
                    .size(11)
                    .color(theme::TEXT_MUTED),
            ]
            .align_y(iced::Alignment::Center),
            activity_list(activity),
        ]
        .spacing(12),
    )
    .padding(20)
    .width(Length::FillPortion(3))
    .height(Length::Fill)
    .style(theme::card);

    column![
        page_header("Dashboard", "Overview of the catalog and its users", None),
        cards,
        row![
            column![overview, top_rated]
                .spacing(16)
                .width(Length::FillPortion(2)),
            recent,
        ]
        .spacing(16)
        .height(Length::Fill),
    ]
    .spacing(20)
    .into()
}

fn overview_line(label: &str, value: String) -> Element<'_, Message> {
    row![
        text(label).size(13).color(theme::TEXT_SECONDARY),
        Space::new().width(Length::Fill),
        text(value).size(13).color(theme::TEXT_PRIMARY),
    ]
    .into()
}

fn top_line(entry: CatalogEntry) -> Element<'static, Message> {
    let kind = entry.kind();
    let rating = entry.details.rating.unwrap_or_default();
    row![
        text(entry.details.title).size(13).color(theme::TEXT_PRIMARY),
        text(kind.as_str()).size(11).color(theme::media_kind_color(kind)),
        Space::new().width(Length::Fill),
        text(format!("★ {rating:.1}"))
            .size(12)
            .color(theme::rating_color(rating)),
    ]
    .spacing(8)
    .align_y(iced::Alignment::Center)
    .into()
}

fn activity_list(activity: &ActivityLog) -> Element<'_, Message> {
    if activity.is_empty() {
        return text("Nothing has changed yet this session.")
            .size(13)
            .color(theme::TEXT_MUTED)
            .into();
    }

    let now = Utc::now();
    let items = activity.iter().map(|a| -> Element<'_, Message> {
        let color = theme::activity_color(a.kind);
        row![
            container(Space::new().width(8).height(8)).style(move |_: &iced::Theme| {
                container::Style {
                    background: Some(color.into()),
                    border: iced::Border::default().rounded(4),
                    ..Default::default()
                }
            }),
            column![
                text(&a.action).size(13).color(theme::TEXT_PRIMARY),
                text(&a.item).size(12).color(theme::TEXT_SECONDARY),
            ]
            .spacing(2),
            Space::new().width(Length::Fill),
            text(time_ago(a.at, now)).size(11).color(theme::TEXT_MUTED),
        ]
        .spacing(10)
        .align_y(iced::Alignment::Center)
        .into()
    });

    scrollable(column(items).spacing(12)).height(Length::Fill).into()
}
