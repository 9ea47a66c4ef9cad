use crate::catalog::schema::{CatalogEntry, EntryStatus};

/// Figures shown on the stat cards above a catalog table.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CatalogStats {
    pub total: usize,
    pub published: usize,
    pub drafts: usize,
    /// Mean over the rated entries only.
    pub average_rating: Option<f32>,
    pub seasons: usize,
    pub episodes: usize,
}

impl CatalogStats {
    pub fn from_entries(entries: &[CatalogEntry]) -> Self {
        let ratings: Vec<f32> = entries.iter().filter_map(|e| e.details.rating).collect();
        let average_rating = if ratings.is_empty() {
            None
        } else {
            Some(ratings.iter().sum::<f32>() / ratings.len() as f32)
        };

        Self {
            total: entries.len(),
            published: entries
                .iter()
                .filter(|e| e.status == EntryStatus::Published)
                .count(),
            drafts: entries
                .iter()
                .filter(|e| e.status == EntryStatus::Draft)
                .count(),
            average_rating,
            seasons: entries.iter().map(|e| e.media.season_count()).sum(),
            episodes: entries.iter().map(|e| e.media.episode_count()).sum(),
        }
    }

    /// Average rating with one decimal, or a dash when nothing is rated.
    pub fn average_label(&self) -> String {
        self.average_rating
            .map(|r| format!("{r:.1}"))
            .unwrap_or_else(|| "-".to_string())
    }
}

/// The `limit` best rated entries, highest first. Unrated entries are left
/// out; ties keep their input order.
pub fn top_rated<'a>(
    entries: impl IntoIterator<Item = &'a CatalogEntry>,
    limit: usize,
) -> Vec<CatalogEntry> {
    let mut rated: Vec<(&CatalogEntry, f32)> = entries
        .into_iter()
        .filter_map(|e| e.details.rating.map(|r| (e, r)))
        .collect();
    rated.sort_by(|a, b| b.1.total_cmp(&a.1));
    rated.into_iter().take(limit).map(|(e, _)| e.clone()).collect()
}
