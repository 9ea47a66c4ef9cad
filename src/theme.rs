use iced::widget::{button, container, text_input};
use iced::{Border, Color, Theme};

use crate::catalog::schema::{EntryStatus, MediaKind, Role, UserStatus};
use crate::core::activity::ActivityKind;

// ── Background colors ──
pub const BG_PRIMARY: Color = Color::from_rgb(
    0x0c as f32 / 255.0,
    0x0f as f32 / 255.0,
    0x1a as f32 / 255.0,
);
pub const BG_SECONDARY: Color = Color::from_rgb(
    0x14 as f32 / 255.0,
    0x18 as f32 / 255.0,
    0x29 as f32 / 255.0,
);
pub const BG_TERTIARY: Color = Color::from_rgb(
    0x1c as f32 / 255.0,
    0x20 as f32 / 255.0,
    0x39 as f32 / 255.0,
);
pub const BG_HOVER: Color = Color::from_rgb(
    0x25 as f32 / 255.0,
    0x2a as f32 / 255.0,
    0x45 as f32 / 255.0,
);

// ── Border colors ──
pub const BORDER: Color = Color::from_rgb(
    0x2a as f32 / 255.0,
    0x2f as f32 / 255.0,
    0x4a as f32 / 255.0,
);
pub const BORDER_LIGHT: Color = Color::from_rgb(
    0x3a as f32 / 255.0,
    0x3f as f32 / 255.0,
    0x5a as f32 / 255.0,
);

// ── Text colors ──
pub const TEXT_PRIMARY: Color = Color::from_rgb(
    0xe8 as f32 / 255.0,
    0xea as f32 / 255.0,
    0xf0 as f32 / 255.0,
);
pub const TEXT_SECONDARY: Color = Color::from_rgb(
    0x9d as f32 / 255.0,
    0xa3 as f32 / 255.0,
    0xb8 as f32 / 255.0,
);
pub const TEXT_MUTED: Color = Color::from_rgb(
    0x6b as f32 / 255.0,
    0x71 as f32 / 255.0,
    0x94 as f32 / 255.0,
);

// ── Accent ──
pub const ACCENT: Color = Color::from_rgb(
    0x63 as f32 / 255.0,
    0x66 as f32 / 255.0,
    0xf1 as f32 / 255.0,
);
pub const ACCENT_HOVER: Color = Color::from_rgb(
    0x81 as f32 / 255.0,
    0x8c as f32 / 255.0,
    0xf8 as f32 / 255.0,
);
pub const ACCENT_DIM: Color = Color::from_rgb(
    0x43 as f32 / 255.0,
    0x38 as f32 / 255.0,
    0xca as f32 / 255.0,
);

// ── Semantic ──
pub const SUCCESS: Color = Color::from_rgb(
    0x22 as f32 / 255.0,
    0xc5 as f32 / 255.0,
    0x5e as f32 / 255.0,
);
pub const WARNING: Color = Color::from_rgb(
    0xf5 as f32 / 255.0,
    0x9e as f32 / 255.0,
    0x0b as f32 / 255.0,
);
pub const ERROR: Color = Color::from_rgb(
    0xef as f32 / 255.0,
    0x44 as f32 / 255.0,
    0x44 as f32 / 255.0,
);
pub const INFO: Color = Color::from_rgb(
    0x3b as f32 / 255.0,
    0x82 as f32 / 255.0,
    0xf6 as f32 / 255.0,
);

// ── Status colors ──
pub const STATUS_PUBLISHED: Color = SUCCESS;
pub const STATUS_DRAFT: Color = WARNING;
pub const STATUS_INACTIVE: Color = Color::from_rgb(
    0x6b as f32 / 255.0,
    0x72 as f32 / 255.0,
    0x80 as f32 / 255.0,
);

// ── Semantic colors ──

pub fn entry_status_color(status: EntryStatus) -> Color {
    match status {
        EntryStatus::Published => STATUS_PUBLISHED,
        EntryStatus::Draft => STATUS_DRAFT,
    }
}

pub fn user_status_color(status: UserStatus) -> Color {
    match status {
        UserStatus::Active => SUCCESS,
        UserStatus::Inactive => STATUS_INACTIVE,
    }
}

pub fn role_color(role: Role) -> Color {
    match role {
        Role::Admin => ACCENT,
        Role::User => BG_TERTIARY,
    }
}

pub fn media_kind_color(kind: MediaKind) -> Color {
    match kind {
        MediaKind::Movie => INFO,
        MediaKind::Series => SUCCESS,
    }
}

pub fn activity_color(kind: ActivityKind) -> Color {
    match kind {
        ActivityKind::Movie => INFO,
        ActivityKind::Series => SUCCESS,
        ActivityKind::User => ACCENT_HOVER,
    }
}

/// Rating color: green >= 8, yellow >= 6, red below.
pub fn rating_color(rating: f32) -> Color {
    if rating >= 8.0 {
        SUCCESS
    } else if rating >= 6.0 {
        WARNING
    } else {
        ERROR
    }
}

// ── Shared widget styles ──

pub fn input(_: &Theme, _: text_input::Status) -> text_input::Style {
    text_input::Style {
        background: BG_TERTIARY.into(),
        border: Border {
            color: BORDER,
            width: 1.0,
            radius: 6.0.into(),
        },
        icon: TEXT_MUTED,
        placeholder: TEXT_MUTED,
        value: TEXT_PRIMARY,
        selection: ACCENT,
    }
}

pub fn primary_button(_: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Hovered => ACCENT_HOVER,
        _ => ACCENT,
    };
    button::Style {
        background: Some(bg.into()),
        text_color: TEXT_PRIMARY,
        border: Border::default().rounded(6),
        ..Default::default()
    }
}

pub fn secondary_button(_: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Hovered => BG_HOVER,
        _ => BG_TERTIARY,
    };
    button::Style {
        background: Some(bg.into()),
        text_color: TEXT_PRIMARY,
        border: Border {
            color: BORDER,
            width: 1.0,
            radius: 6.0.into(),
        },
        ..Default::default()
    }
}

pub fn ghost_button(_: &Theme, status: button::Status) -> button::Style {
    button::Style {
        background: match status {
            button::Status::Hovered => Some(BG_HOVER.into()),
            _ => None,
        },
        text_color: TEXT_SECONDARY,
        border: Border::default().rounded(4),
        ..Default::default()
    }
}

pub fn card(_: &Theme) -> container::Style {
    container::Style {
        background: Some(BG_SECONDARY.into()),
        border: Border {
            color: BORDER,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}
