use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

pub type EntryId = i64;
pub type UserId = i64;

// ── Enums ──

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum EntryStatus {
    Published,
    #[default]
    Draft,
}

impl EntryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Published => "Published",
            Self::Draft => "Draft",
        }
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaKind {
    Movie,
    Series,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Movie => "Movie",
            Self::Series => "Series",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Action,
    Adventure,
    Comedy,
    Drama,
    Horror,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    Thriller,
    Romance,
    Documentary,
    Animation,
    Fantasy,
    Crime,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Action => "Action",
            Self::Adventure => "Adventure",
            Self::Comedy => "Comedy",
            Self::Drama => "Drama",
            Self::Horror => "Horror",
            Self::SciFi => "Sci-Fi",
            Self::Thriller => "Thriller",
            Self::Romance => "Romance",
            Self::Documentary => "Documentary",
            Self::Animation => "Animation",
            Self::Fantasy => "Fantasy",
            Self::Crime => "Crime",
        }
    }

    pub const ALL: &[Category] = &[
        Self::Action,
        Self::Adventure,
        Self::Comedy,
        Self::Drama,
        Self::Horror,
        Self::SciFi,
        Self::Thriller,
        Self::Romance,
        Self::Documentary,
        Self::Animation,
        Self::Fantasy,
        Self::Crime,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    English,
    Spanish,
    French,
    German,
    Italian,
    Portuguese,
    Japanese,
    Korean,
    Chinese,
    Hindi,
    Arabic,
    Russian,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Spanish => "Spanish",
            Self::French => "French",
            Self::German => "German",
            Self::Italian => "Italian",
            Self::Portuguese => "Portuguese",
            Self::Japanese => "Japanese",
            Self::Korean => "Korean",
            Self::Chinese => "Chinese",
            Self::Hindi => "Hindi",
            Self::Arabic => "Arabic",
            Self::Russian => "Russian",
        }
    }

    pub const ALL: &[Language] = &[
        Self::English,
        Self::Spanish,
        Self::French,
        Self::German,
        Self::Italian,
        Self::Portuguese,
        Self::Japanese,
        Self::Korean,
        Self::Chinese,
        Self::Hindi,
        Self::Arabic,
        Self::Russian,
    ];
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quality {
    #[serde(rename = "480p")]
    Sd480,
    #[serde(rename = "720p")]
    Hd720,
    #[serde(rename = "1080p")]
    Hd1080,
    #[serde(rename = "4K")]
    Uhd4k,
}

impl Quality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sd480 => "480p",
            Self::Hd720 => "720p",
            Self::Hd1080 => "1080p",
            Self::Uhd4k => "4K",
        }
    }

    pub const ALL: &[Quality] = &[Self::Sd480, Self::Hd720, Self::Hd1080, Self::Uhd4k];
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Provider {
    Netflix,
    #[serde(rename = "Amazon Prime")]
    AmazonPrime,
    Hulu,
    #[serde(rename = "Disney+")]
    DisneyPlus,
    #[serde(rename = "HBO Max")]
    HboMax,
    Custom,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Netflix => "Netflix",
            Self::AmazonPrime => "Amazon Prime",
            Self::Hulu => "Hulu",
            Self::DisneyPlus => "Disney+",
            Self::HboMax => "HBO Max",
            Self::Custom => "Custom",
        }
    }

    pub const ALL: &[Provider] = &[
        Self::Netflix,
        Self::AmazonPrime,
        Self::Hulu,
        Self::DisneyPlus,
        Self::HboMax,
        Self::Custom,
    ];
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Admin => "Admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Inactive,
            Self::Inactive => Self::Active,
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Nested collection items ──

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProviderOffering {
    pub display_name: String,
    pub provider: Option<Provider>,
    pub video_link: String,
    pub subtitle_link: String,
    pub quality: Option<Quality>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    pub episode_number: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub video_link: String,
    #[serde(default)]
    pub subtitle_link: String,
    #[serde(default)]
    pub quality: Option<Quality>,
    #[serde(default)]
    pub provider: Option<Provider>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    pub season_number: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub episodes: Vec<Episode>,
}

// ── Catalog entries ──

/// The nested collection an entry carries, one case per entry kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Media {
    Movie { providers: Vec<ProviderOffering> },
    Series { seasons: Vec<Season> },
}

impl Media {
    pub fn kind(&self) -> MediaKind {
        match self {
            Self::Movie { .. } => MediaKind::Movie,
            Self::Series { .. } => MediaKind::Series,
        }
    }

    pub fn season_count(&self) -> usize {
        match self {
            Self::Movie { .. } => 0,
            Self::Series { seasons } => seasons.len(),
        }
    }

    pub fn episode_count(&self) -> usize {
        match self {
            Self::Movie { .. } => 0,
            Self::Series { seasons } => seasons.iter().map(|s| s.episodes.len()).sum(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryDetails {
    pub title: String,
    #[serde(default)]
    pub poster_url: String,
    #[serde(default)]
    pub backdrop_url: String,
    #[serde(default)]
    pub backdrop_large_url: String,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub overview: String,
    pub release_year: i32,
    pub category: Category,
    pub language: Language,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: EntryId,
    #[serde(default)]
    pub status: EntryStatus,
    #[serde(flatten)]
    pub details: EntryDetails,
    pub media: Media,
}

impl CatalogEntry {
    pub fn kind(&self) -> MediaKind {
        self.media.kind()
    }
}

// ── Users ──

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub status: UserStatus,
    #[serde(default)]
    pub watch_time_minutes: u32,
    pub join_date: NaiveDate,
    pub last_login: NaiveDate,
    #[serde(default)]
    pub avatar_url: String,
}
