use iced::widget::{column, container, mouse_area, row, text};
use iced::{Border, Color, Element, Length, Padding, Theme};
use std::time::{Duration, Instant};

use crate::app::Message;
use crate::theme;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastType {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastType {
    /// Problems stay on screen longer than confirmations.
    fn lifetime(self) -> Duration {
        match self {
            Self::Success | Self::Info => Duration::from_secs(3),
            Self::Warning => Duration::from_secs(5),
            Self::Error => Duration::from_secs(8),
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Error => "✕",
            Self::Warning => "!",
            Self::Info => "i",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub toast_type: ToastType,
    pub created_at: Instant,
}

impl Toast {
    pub fn new(id: u64, message: String, toast_type: ToastType) -> Self {
        Self {
            id,
            message,
            toast_type,
            created_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.toast_type.lifetime()
    }
}

fn accent(tt: ToastType) -> Color {
    match tt {
        ToastType::Success => theme::SUCCESS,
        ToastType::Error => theme::ERROR,
        ToastType::Warning => theme::WARNING,
        ToastType::Info => theme::INFO,
    }
}

/// Render the toast stack (bottom-right, overlaid via Stack). Click a toast
/// to dismiss it early.
pub fn toast_container(toasts: &[Toast]) -> Element<'_, Message> {
    let toast_views: Vec<Element<'_, Message>> = toasts
        .iter()
        .map(|t| {
            let color = accent(t.toast_type);
            let id = t.id;

            mouse_area(
                container(
                    row![
                        text(t.toast_type.glyph()).size(13).color(color),
                        text(&t.message).size(13).color(theme::TEXT_PRIMARY),
                    ]
                    .spacing(10),
                )
                .padding(Padding::from([10, 16]))
                .width(340)
                .style(move |_: &Theme| container::Style {
                    background: Some(theme::BG_SECONDARY.into()),
                    border: Border {
                        color,
                        width: 1.0,
                        radius: 8.0.into(),
                    },
                    ..Default::default()
                }),
            )
            .on_press(Message::DismissToast(id))
            .into()
        })
        .collect();

    container(column(toast_views).spacing(8))
        .padding(16)
        .width(Length::Shrink)
        .into()
}
