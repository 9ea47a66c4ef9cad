//! The edit buffer behind the movie and series forms.

use std::fmt;
use thiserror::Error;

use super::collection::{self, EpisodeEdit, ListItem, ProviderEdit, SeasonEdit};
use crate::catalog::schema::*;

/// Text inputs of the entry form. Numeric inputs are kept as typed and only
/// parsed by [`EntryDraft::finalize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    PosterUrl,
    BackdropUrl,
    BackdropLargeUrl,
    Rating,
    Tagline,
    Overview,
    ReleaseYear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Title,
    ReleaseYear,
    Category,
    Language,
}

impl RequiredField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::ReleaseYear => "Release Year",
            Self::Category => "Category",
            Self::Language => "Language",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DraftError {
    #[error("Missing required fields: {}", join_fields(.0))]
    Incomplete(Vec<RequiredField>),

    #[error("Release year is not a number: {0:?}")]
    InvalidYear(String),

    #[error("Rating is not a finite number: {0:?}")]
    InvalidRating(String),

    #[error("{actual} draft has no {expected} fields")]
    KindMismatch {
        expected: MediaKind,
        actual: MediaKind,
    },
}

fn join_fields(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(RequiredField::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A draft that passed the submit gate, ready to be committed.
#[derive(Debug, Clone, PartialEq)]
pub struct FinishedDraft {
    pub id: Option<EntryId>,
    pub details: EntryDetails,
    pub media: Media,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntryDraft {
    id: Option<EntryId>,
    title: String,
    poster_url: String,
    backdrop_url: String,
    backdrop_large_url: String,
    rating: String,
    tagline: String,
    overview: String,
    release_year: String,
    category: Option<Category>,
    language: Option<Language>,
    media: Media,
}

impl EntryDraft {
    /// Empty draft with one blank provider, or Season 1 holding Episode 1.
    pub fn new(kind: MediaKind) -> Self {
        let media = match kind {
            MediaKind::Movie => Media::Movie {
                providers: collection::append(&[]),
            },
            MediaKind::Series => Media::Series {
                seasons: collection::append(&[]),
            },
        };

        Self {
            id: None,
            title: String::new(),
            poster_url: String::new(),
            backdrop_url: String::new(),
            backdrop_large_url: String::new(),
            rating: String::new(),
            tagline: String::new(),
            overview: String::new(),
            release_year: String::new(),
            category: None,
            language: None,
            media,
        }
    }

    /// Draft seeded from a published entry. The draft owns its copy; nothing
    /// done to it shows up in the entry until it is committed.
    pub fn from_entry(entry: &CatalogEntry) -> Self {
        let d = &entry.details;
        let media = match &entry.media {
            Media::Movie { providers } => Media::Movie {
                providers: non_empty(providers),
            },
            Media::Series { seasons } => Media::Series {
                seasons: non_empty(seasons)
                    .into_iter()
                    .map(|mut s| {
                        s.episodes = non_empty(&s.episodes);
                        s
                    })
                    .collect(),
            },
        };

        Self {
            id: Some(entry.id),
            title: d.title.clone(),
            poster_url: d.poster_url.clone(),
            backdrop_url: d.backdrop_url.clone(),
            backdrop_large_url: d.backdrop_large_url.clone(),
            rating: d.rating.map(|r| r.to_string()).unwrap_or_default(),
            tagline: d.tagline.clone(),
            overview: d.overview.clone(),
            release_year: d.release_year.to_string(),
            category: Some(d.category),
            language: Some(d.language),
            media,
        }
    }

    pub fn kind(&self) -> MediaKind {
        self.media.kind()
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::PosterUrl => &self.poster_url,
            DraftField::BackdropUrl => &self.backdrop_url,
            DraftField::BackdropLargeUrl => &self.backdrop_large_url,
            DraftField::Rating => &self.rating,
            DraftField::Tagline => &self.tagline,
            DraftField::Overview => &self.overview,
            DraftField::ReleaseYear => &self.release_year,
        }
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn language(&self) -> Option<Language> {
        self.language
    }

    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Title => self.title = value,
            DraftField::PosterUrl => self.poster_url = value,
            DraftField::BackdropUrl => self.backdrop_url = value,
            DraftField::BackdropLargeUrl => self.backdrop_large_url = value,
            DraftField::Rating => self.rating = value,
            DraftField::Tagline => self.tagline = value,
            DraftField::Overview => self.overview = value,
            DraftField::ReleaseYear => self.release_year = value,
        }
    }

    pub fn set_category(&mut self, category: Category) {
        self.category = Some(category);
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = Some(language);
    }

    // ── Providers ──

    pub fn providers(&self) -> &[ProviderOffering] {
        match &self.media {
            Media::Movie { providers } => providers,
            Media::Series { .. } => &[],
        }
    }

    pub fn add_provider(&mut self) -> Result<(), DraftError> {
        let providers = self.providers_slot()?;
        *providers = collection::append(providers);
        Ok(())
    }

    pub fn remove_provider(&mut self, index: usize) -> Result<(), DraftError> {
        let providers = self.providers_slot()?;
        *providers = collection::remove(providers, index);
        Ok(())
    }

    pub fn update_provider(&mut self, index: usize, edit: ProviderEdit) -> Result<(), DraftError> {
        let providers = self.providers_slot()?;
        *providers = collection::update(providers, index, edit);
        Ok(())
    }

    // ── Seasons ──

    pub fn seasons(&self) -> &[Season] {
        match &self.media {
            Media::Series { seasons } => seasons,
            Media::Movie { .. } => &[],
        }
    }

    pub fn add_season(&mut self) -> Result<(), DraftError> {
        let seasons = self.seasons_slot()?;
        *seasons = collection::append(seasons);
        Ok(())
    }

    pub fn remove_season(&mut self, index: usize) -> Result<(), DraftError> {
        let seasons = self.seasons_slot()?;
        *seasons = collection::remove(seasons, index);
        Ok(())
    }

    pub fn update_season(&mut self, index: usize, edit: SeasonEdit) -> Result<(), DraftError> {
        let seasons = self.seasons_slot()?;
        *seasons = collection::update(seasons, index, edit);
        Ok(())
    }

    // ── Episodes ──

    pub fn add_episode(&mut self, season: usize) -> Result<(), DraftError> {
        let seasons = self.seasons_slot()?;
        *seasons = with_episodes(seasons, season, |eps| collection::append(eps));
        Ok(())
    }

    pub fn remove_episode(&mut self, season: usize, episode: usize) -> Result<(), DraftError> {
        let seasons = self.seasons_slot()?;
        *seasons = with_episodes(seasons, season, |eps| collection::remove(eps, episode));
        Ok(())
    }

    pub fn update_episode(
        &mut self,
        season: usize,
        episode: usize,
        edit: EpisodeEdit,
    ) -> Result<(), DraftError> {
        let seasons = self.seasons_slot()?;
        *seasons = with_episodes(seasons, season, |eps| collection::update(eps, episode, edit));
        Ok(())
    }

    // ── Submit gate ──

    pub fn missing_required(&self) -> Vec<RequiredField> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push(RequiredField::Title);
        }
        if self.release_year.trim().is_empty() {
            missing.push(RequiredField::ReleaseYear);
        }
        if self.category.is_none() {
            missing.push(RequiredField::Category);
        }
        if self.language.is_none() {
            missing.push(RequiredField::Language);
        }
        missing
    }

    /// Check the required fields and parse the numeric inputs.
    pub fn finalize(&self) -> Result<FinishedDraft, DraftError> {
        let missing = self.missing_required();
        let (Some(category), Some(language)) = (self.category, self.language) else {
            return Err(DraftError::Incomplete(missing));
        };
        if !missing.is_empty() {
            return Err(DraftError::Incomplete(missing));
        }

        let year = self.release_year.trim();
        let release_year: i32 = year
            .parse()
            .map_err(|_| DraftError::InvalidYear(year.to_string()))?;

        let rating = self.rating.trim();
        let rating = if rating.is_empty() {
            None
        } else {
            match rating.parse::<f32>() {
                Ok(value) if value.is_finite() => Some(value),
                _ => return Err(DraftError::InvalidRating(rating.to_string())),
            }
        };

        Ok(FinishedDraft {
            id: self.id,
            details: EntryDetails {
                title: self.title.clone(),
                poster_url: self.poster_url.clone(),
                backdrop_url: self.backdrop_url.clone(),
                backdrop_large_url: self.backdrop_large_url.clone(),
                rating,
                tagline: self.tagline.clone(),
                overview: self.overview.clone(),
                release_year,
                category,
                language,
            },
            media: self.media.clone(),
        })
    }

    fn providers_slot(&mut self) -> Result<&mut Vec<ProviderOffering>, DraftError> {
        match &mut self.media {
            Media::Movie { providers } => Ok(providers),
            Media::Series { .. } => Err(DraftError::KindMismatch {
                expected: MediaKind::Movie,
                actual: MediaKind::Series,
            }),
        }
    }

    fn seasons_slot(&mut self) -> Result<&mut Vec<Season>, DraftError> {
        match &mut self.media {
            Media::Series { seasons } => Ok(seasons),
            Media::Movie { .. } => Err(DraftError::KindMismatch {
                expected: MediaKind::Series,
                actual: MediaKind::Movie,
            }),
        }
    }
}

/// The list itself when it has items, otherwise a one-item list built from
/// the template.
fn non_empty<T: ListItem>(list: &[T]) -> Vec<T> {
    if list.is_empty() {
        collection::append(list)
    } else {
        list.to_vec()
    }
}

/// Rebuild `seasons` with season `index`'s episode list replaced by `f`'s
/// result.
fn with_episodes(
    seasons: &[Season],
    index: usize,
    f: impl FnOnce(&[Episode]) -> Vec<Episode>,
) -> Vec<Season> {
    assert!(
        index < seasons.len(),
        "season index {index} out of bounds for {} seasons",
        seasons.len()
    );

    let mut next = seasons.to_vec();
    next[index].episodes = f(&seasons[index].episodes);
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(draft: &EntryDraft, season: usize) -> Vec<u32> {
        draft.seasons()[season]
            .episodes
            .iter()
            .map(|e| e.episode_number)
            .collect()
    }

    fn filled(kind: MediaKind) -> EntryDraft {
        let mut draft = EntryDraft::new(kind);
        draft.set_field(DraftField::Title, "Dune");
        draft.set_field(DraftField::ReleaseYear, "2021");
        draft.set_category(Category::SciFi);
        draft.set_language(Language::English);
        draft
    }

    #[test]
    fn test_new_drafts_are_seeded() {
        let movie = EntryDraft::new(MediaKind::Movie);
        assert_eq!(movie.providers().len(), 1);
        assert_eq!(movie.providers()[0], ProviderOffering::default());

        let series = EntryDraft::new(MediaKind::Series);
        assert_eq!(series.seasons().len(), 1);
        assert_eq!(series.seasons()[0].season_number, 1);
        assert_eq!(series.seasons()[0].title, "Season 1");
        assert_eq!(numbers(&series, 0), vec![1]);
    }

    #[test]
    fn test_episodes_keep_creation_numbers() {
        let mut draft = EntryDraft::new(MediaKind::Series);
        draft.add_episode(0).unwrap();
        draft.add_episode(0).unwrap();
        assert_eq!(numbers(&draft, 0), vec![1, 2, 3]);

        draft.remove_episode(0, 0).unwrap();
        assert_eq!(numbers(&draft, 0), vec![2, 3]);
    }

    #[test]
    fn test_update_episode_only_touches_target() {
        let mut draft = EntryDraft::new(MediaKind::Series);
        draft.add_season().unwrap();
        draft.add_episode(1).unwrap();
        let before = draft.clone();

        draft
            .update_episode(1, 1, EpisodeEdit::Title("Finale".to_string()))
            .unwrap();

        assert_eq!(draft.seasons()[1].episodes[1].title, "Finale");
        assert_eq!(draft.seasons()[1].episodes[0], before.seasons()[1].episodes[0]);
        assert_eq!(draft.seasons()[0], before.seasons()[0]);
    }

    #[test]
    fn test_kind_mismatch_is_an_error() {
        let mut movie = EntryDraft::new(MediaKind::Movie);
        assert_eq!(
            movie.add_season(),
            Err(DraftError::KindMismatch {
                expected: MediaKind::Series,
                actual: MediaKind::Movie,
            })
        );
        let mut series = EntryDraft::new(MediaKind::Series);
        assert!(series.add_provider().is_err());
        assert!(series.providers().is_empty());
    }

    #[test]
    #[should_panic(expected = "last remaining")]
    fn test_removing_only_provider_panics() {
        let mut movie = EntryDraft::new(MediaKind::Movie);
        let _ = movie.remove_provider(0);
    }

    #[test]
    fn test_missing_required_fields() {
        let draft = EntryDraft::new(MediaKind::Movie);
        assert_eq!(
            draft.missing_required(),
            vec![
                RequiredField::Title,
                RequiredField::ReleaseYear,
                RequiredField::Category,
                RequiredField::Language,
            ]
        );

        let err = draft.finalize().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required fields: Title, Release Year, Category, Language"
        );
    }

    #[test]
    fn test_finalize_parses_numbers() {
        let mut draft = filled(MediaKind::Movie);
        draft.set_field(DraftField::Rating, " 8.1 ");
        let finished = draft.finalize().unwrap();
        assert_eq!(finished.id, None);
        assert_eq!(finished.details.release_year, 2021);
        assert_eq!(finished.details.rating, Some(8.1));

        draft.set_field(DraftField::Rating, "");
        assert_eq!(draft.finalize().unwrap().details.rating, None);

        draft.set_field(DraftField::ReleaseYear, "twenty");
        assert_eq!(
            draft.finalize(),
            Err(DraftError::InvalidYear("twenty".to_string()))
        );
    }

    #[test]
    fn test_finalize_rejects_non_finite_rating() {
        let mut draft = filled(MediaKind::Movie);
        for raw in ["NaN", "inf", "-infinity"] {
            draft.set_field(DraftField::Rating, raw);
            assert_eq!(
                draft.finalize(),
                Err(DraftError::InvalidRating(raw.to_string()))
            );
        }

        draft.set_field(DraftField::Rating, "9.0");
        assert_eq!(draft.finalize().unwrap().details.rating, Some(9.0));
    }

    #[test]
    fn test_whitespace_title_counts_as_missing() {
        let mut draft = filled(MediaKind::Series);
        draft.set_field(DraftField::Title, "   ");
        assert_eq!(draft.missing_required(), vec![RequiredField::Title]);
    }

    #[test]
    fn test_from_entry_fills_empty_lists() {
        let entry = CatalogEntry {
            id: 9,
            status: EntryStatus::Published,
            details: EntryDetails {
                title: "Heat".to_string(),
                poster_url: String::new(),
                backdrop_url: String::new(),
                backdrop_large_url: String::new(),
                rating: Some(8.3),
                tagline: String::new(),
                overview: String::new(),
                release_year: 1995,
                category: Category::Crime,
                language: Language::English,
            },
            media: Media::Movie {
                providers: Vec::new(),
            },
        };

        let draft = EntryDraft::from_entry(&entry);
        assert_eq!(draft.field(DraftField::ReleaseYear), "1995");
        assert_eq!(draft.field(DraftField::Rating), "8.3");
        assert_eq!(draft.providers().len(), 1);
        assert!(draft.missing_required().is_empty());
        assert_eq!(draft.finalize().unwrap().id, Some(9));
    }
}
