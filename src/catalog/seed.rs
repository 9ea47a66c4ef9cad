use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use super::schema::{CatalogEntry, MediaKind, User};

const BUILTIN_SEED: &str = include_str!("../../assets/seed.json");

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed seed data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{kind} list contains a {found} entry (id {id})")]
    WrongKind {
        kind: MediaKind,
        found: MediaKind,
        id: i64,
    },

    #[error("{kind} {id} has a rating that is not a finite number")]
    InvalidRating { kind: MediaKind, id: i64 },

    #[error("Duplicate {kind} id {id}")]
    DuplicateId { kind: &'static str, id: i64 },
}

/// Everything the admin pages start from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogData {
    #[serde(default)]
    pub movies: Vec<CatalogEntry>,
    #[serde(default)]
    pub series: Vec<CatalogEntry>,
    #[serde(default)]
    pub users: Vec<User>,
}

/// Load the fixture catalog, from `seed_file` when given, otherwise the
/// built-in fixtures.
pub fn load_catalog(seed_file: Option<&Path>) -> Result<CatalogData, SeedError> {
    let data = match seed_file {
        Some(path) => {
            let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            let data = parse_catalog(&raw)?;
            info!("Seed data loaded from {}", path.display());
            data
        }
        None => {
            let data = parse_catalog(BUILTIN_SEED)?;
            info!("Built-in seed data loaded");
            data
        }
    };

    info!(
        "{} movies, {} series, {} users",
        data.movies.len(),
        data.series.len(),
        data.users.len()
    );
    Ok(data)
}

pub fn parse_catalog(raw: &str) -> Result<CatalogData, SeedError> {
    let data: CatalogData = serde_json::from_str(raw)?;
    check_entries(&data.movies, MediaKind::Movie)?;
    check_entries(&data.series, MediaKind::Series)?;

    let mut seen = std::collections::HashSet::new();
    for user in &data.users {
        if !seen.insert(user.id) {
            return Err(SeedError::DuplicateId {
                kind: "user",
                id: user.id,
            });
        }
    }
    Ok(data)
}

fn check_entries(entries: &[CatalogEntry], kind: MediaKind) -> Result<(), SeedError> {
    let mut seen = std::collections::HashSet::new();
    for entry in entries {
        if entry.kind() != kind {
            return Err(SeedError::WrongKind {
                kind,
                found: entry.kind(),
                id: entry.id,
            });
        }
        if entry.details.rating.is_some_and(|r| !r.is_finite()) {
            return Err(SeedError::InvalidRating { kind, id: entry.id });
        }
        if !seen.insert(entry.id) {
            return Err(SeedError::DuplicateId {
                kind: match kind {
                    MediaKind::Movie => "movie",
                    MediaKind::Series => "series",
                },
                id: entry.id,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::schema::*;

    #[test]
    fn test_builtin_seed_parses() {
        let data = parse_catalog(BUILTIN_SEED).unwrap();
        assert_eq!(data.movies.len(), 3);
        assert_eq!(data.series.len(), 3);
        assert_eq!(data.users.len(), 5);

        let interstellar = &data.movies[0];
        assert_eq!(interstellar.details.title, "Interstellar");
        assert_eq!(interstellar.details.category, Category::SciFi);
        assert_eq!(interstellar.status, EntryStatus::Published);
        match &interstellar.media {
            Media::Movie { providers } => {
                assert_eq!(providers[0].provider, Some(Provider::Netflix));
                assert_eq!(providers[0].quality, Some(Quality::Uhd4k));
            }
            other => panic!("expected movie, got {other:?}"),
        }

        assert_eq!(data.series[1].media.episode_count(), 3);
        assert_eq!(data.users[1].role, Role::Admin);
    }

    #[test]
    fn test_labels_round_trip_through_json() {
        let json = serde_json::to_string(&Provider::DisneyPlus).unwrap();
        assert_eq!(json, "\"Disney+\"");
        let q: Quality = serde_json::from_str("\"480p\"").unwrap();
        assert_eq!(q, Quality::Sd480);
        let c: Category = serde_json::from_str("\"Sci-Fi\"").unwrap();
        assert_eq!(c, Category::SciFi);
        assert!(serde_json::from_str::<Language>("\"Klingon\"").is_err());
    }

    #[test]
    fn test_series_in_movie_list_rejected() {
        let raw = r#"{
            "movies": [{
                "id": 7, "title": "Oops", "releaseYear": 2020,
                "category": "Drama", "language": "French",
                "media": { "kind": "series", "seasons": [] }
            }]
        }"#;
        let err = parse_catalog(raw).unwrap_err();
        assert!(matches!(err, SeedError::WrongKind { id: 7, .. }));
    }

    #[test]
    fn test_overflowing_rating_rejected() {
        let raw = r#"{
            "movies": [{
                "id": 4, "title": "Too Good", "releaseYear": 2020, "rating": 1e39,
                "category": "Drama", "language": "French",
                "media": { "kind": "movie", "providers": [] }
            }]
        }"#;
        let err = parse_catalog(raw).unwrap_err();
        assert!(matches!(err, SeedError::InvalidRating { id: 4, .. }));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let raw = r#"{
            "users": [
                { "id": 1, "username": "a", "email": "a@x", "joinDate": "2023-01-01", "lastLogin": "2023-01-02" },
                { "id": 1, "username": "b", "email": "b@x", "joinDate": "2023-01-01", "lastLogin": "2023-01-02" }
            ]
        }"#;
        let err = parse_catalog(raw).unwrap_err();
        assert!(matches!(err, SeedError::DuplicateId { kind: "user", id: 1 }));
    }

    #[test]
    fn test_missing_seed_file() {
        let err = load_catalog(Some(Path::new("/definitely/not/here.json"))).unwrap_err();
        assert!(matches!(err, SeedError::Read { .. }));
    }
}
