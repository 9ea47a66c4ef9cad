//! The published list of one entry kind and the reconciliation of finished
//! drafts back into it.

use std::sync::Arc;
use tracing::{debug, info, warn};

use super::draft::FinishedDraft;
use super::session::EditorSession;
use super::stats::CatalogStats;
use crate::catalog::schema::{CatalogEntry, EntryId, EntryStatus, MediaKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    Created(EntryId),
    Updated(EntryId),
    /// The entry being edited was removed while its editor was open.
    Discarded(EntryId),
}

#[derive(Debug, Clone)]
pub struct CatalogListController {
    kind: MediaKind,
    entries: Arc<[CatalogEntry]>,
    next_id: EntryId,
}

impl CatalogListController {
    pub fn new(kind: MediaKind, entries: Vec<CatalogEntry>) -> Self {
        let next_id = entries.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        Self {
            kind,
            entries: entries.into(),
            next_id,
        }
    }

    /// The current snapshot. Later mutations replace the list instead of
    /// changing it, so a snapshot never moves under its holder.
    pub fn entries(&self) -> Arc<[CatalogEntry]> {
        Arc::clone(&self.entries)
    }

    pub fn get(&self, id: EntryId) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Entries whose title or category contains `term`, ignoring case.
    pub fn search(&self, term: &str) -> Vec<&CatalogEntry> {
        let needle = term.to_lowercase();
        self.entries
            .iter()
            .filter(|e| {
                e.details.title.to_lowercase().contains(&needle)
                    || e.details.category.as_str().to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn begin_create(&self) -> EditorSession {
        EditorSession::create(self.kind)
    }

    pub fn begin_edit(&self, id: EntryId) -> Option<EditorSession> {
        self.get(id).map(EditorSession::edit)
    }

    /// Merge a finished draft into the list.
    ///
    /// A draft with an id replaces that entry and keeps its status; a draft
    /// without one becomes a new entry with a fresh id in `Draft` status.
    ///
    /// # Panics
    ///
    /// If the draft is of the other entry kind.
    pub fn commit(&mut self, finished: FinishedDraft) -> CommitOutcome {
        assert_eq!(
            finished.media.kind(),
            self.kind,
            "committed a draft of the wrong kind"
        );

        match finished.id {
            Some(id) => {
                if self.get(id).is_none() {
                    warn!("{} {id} no longer exists, edit discarded", self.kind);
                    return CommitOutcome::Discarded(id);
                }

                self.entries = self
                    .entries
                    .iter()
                    .map(|e| {
                        if e.id == id {
                            CatalogEntry {
                                id,
                                status: e.status,
                                details: finished.details.clone(),
                                media: finished.media.clone(),
                            }
                        } else {
                            e.clone()
                        }
                    })
                    .collect();

                info!("{} {id} updated", self.kind);
                CommitOutcome::Updated(id)
            }
            None => {
                let id = self.next_id;
                self.next_id += 1;

                let entry = CatalogEntry {
                    id,
                    status: EntryStatus::Draft,
                    details: finished.details,
                    media: finished.media,
                };
                self.entries = self
                    .entries
                    .iter()
                    .cloned()
                    .chain(std::iter::once(entry))
                    .collect();

                info!("{} {id} created", self.kind);
                CommitOutcome::Created(id)
            }
        }
    }

    /// Remove an entry, returning it. Unknown ids change nothing.
    pub fn remove(&mut self, id: EntryId) -> Option<CatalogEntry> {
        let removed = self.get(id).cloned();
        match &removed {
            Some(_) => {
                self.entries = self.entries.iter().filter(|e| e.id != id).cloned().collect();
                info!("{} {id} removed", self.kind);
            }
            None => debug!("{} {id} not found, nothing removed", self.kind),
        }
        removed
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats::from_entries(&self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::schema::*;
    use crate::core::collection::ProviderEdit;
    use crate::core::draft::DraftField;

    fn movie(id: EntryId, title: &str, category: Category, status: EntryStatus) -> CatalogEntry {
        CatalogEntry {
            id,
            status,
            details: EntryDetails {
                title: title.to_string(),
                poster_url: String::new(),
                backdrop_url: String::new(),
                backdrop_large_url: String::new(),
                rating: Some(8.0),
                tagline: String::new(),
                overview: String::new(),
                release_year: 2014,
                category,
                language: Language::English,
            },
            media: Media::Movie {
                providers: vec![ProviderOffering {
                    display_name: "Main".to_string(),
                    provider: Some(Provider::Netflix),
                    video_link: "https://example.com/v.mp4".to_string(),
                    subtitle_link: String::new(),
                    quality: Some(Quality::Hd1080),
                }],
            },
        }
    }

    fn movies() -> CatalogListController {
        CatalogListController::new(
            MediaKind::Movie,
            vec![
                movie(1, "Interstellar", Category::SciFi, EntryStatus::Published),
                movie(2, "The Dark Knight", Category::Action, EntryStatus::Published),
                movie(3, "Inception", Category::Thriller, EntryStatus::Draft),
            ],
        )
    }

    fn ids(entries: &[&CatalogEntry]) -> Vec<EntryId> {
        entries.iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_search_title_and_category() {
        let ctl = movies();
        assert_eq!(ids(&ctl.search("")), vec![1, 2, 3]);
        assert_eq!(ids(&ctl.search("INTER")), vec![1]);
        assert_eq!(ids(&ctl.search("sci")), vec![1]);
        assert_eq!(ids(&ctl.search("thr")), vec![3]);
        assert_eq!(ids(&ctl.search("n")), vec![1, 2, 3]);
        assert!(ctl.search("zzz").is_empty());
    }

    #[test]
    fn test_edit_title_keeps_status() {
        let mut ctl = CatalogListController::new(
            MediaKind::Movie,
            vec![movie(1, "Interstellar", Category::SciFi, EntryStatus::Published)],
        );

        let mut session = ctl.begin_edit(1).unwrap();
        session.draft.set_field(DraftField::Title, "Interstellar (2014)");
        let outcome = ctl.commit(session.draft.finalize().unwrap());

        assert_eq!(outcome, CommitOutcome::Updated(1));
        let entries = ctl.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, 1);
        assert_eq!(entries[0].details.title, "Interstellar (2014)");
        assert_eq!(entries[0].status, EntryStatus::Published);
    }

    #[test]
    fn test_unchanged_edit_is_identity() {
        let mut ctl = movies();
        let before = ctl.get(3).cloned().unwrap();
        let session = ctl.begin_edit(3).unwrap();
        ctl.commit(session.draft.finalize().unwrap());
        assert_eq!(ctl.get(3), Some(&before));
    }

    #[test]
    fn test_draft_is_isolated_until_commit() {
        let ctl = movies();
        let mut session = ctl.begin_edit(1).unwrap();
        session
            .draft
            .update_provider(0, ProviderEdit::DisplayName("Changed".to_string()))
            .unwrap();
        session.draft.add_provider().unwrap();

        match &ctl.get(1).unwrap().media {
            Media::Movie { providers } => {
                assert_eq!(providers.len(), 1);
                assert_eq!(providers[0].display_name, "Main");
            }
            other => panic!("expected movie, got {other:?}"),
        }
    }

    #[test]
    fn test_create_appends_draft_with_fresh_id() {
        let mut ctl = movies();
        let mut session = ctl.begin_create();
        session.draft.set_field(DraftField::Title, "Tenet");
        session.draft.set_field(DraftField::ReleaseYear, "2020");
        session.draft.set_category(Category::Action);
        session.draft.set_language(Language::English);

        let outcome = ctl.commit(session.draft.finalize().unwrap());

        assert_eq!(outcome, CommitOutcome::Created(4));
        let entries = ctl.entries();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[3].details.title, "Tenet");
        assert_eq!(entries[3].status, EntryStatus::Draft);
    }

    #[test]
    fn test_ids_are_never_reused() {
        let mut ctl = movies();
        assert!(ctl.remove(3).is_some());

        let mut session = ctl.begin_create();
        session.draft.set_field(DraftField::Title, "Memento");
        session.draft.set_field(DraftField::ReleaseYear, "2000");
        session.draft.set_category(Category::Thriller);
        session.draft.set_language(Language::English);

        assert_eq!(ctl.commit(session.draft.finalize().unwrap()), CommitOutcome::Created(4));
    }

    #[test]
    fn test_snapshots_do_not_change() {
        let mut ctl = movies();
        let snapshot = ctl.entries();
        ctl.remove(1);
        let mut session = ctl.begin_edit(2).unwrap();
        session.draft.set_field(DraftField::Title, "The Dark Knight Rises");
        ctl.commit(session.draft.finalize().unwrap());
        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot[1].details.title, "The Dark Knight");
        assert_eq!(ctl.entries().len(), 2);
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut ctl = movies();
        assert!(ctl.remove(42).is_none());
        assert_eq!(ctl.entries().len(), 3);
        assert!(ctl.begin_edit(42).is_none());
    }

    #[test]
    fn test_commit_after_removal_is_discarded() {
        let mut ctl = movies();
        let session = ctl.begin_edit(2).unwrap();
        ctl.remove(2);
        let outcome = ctl.commit(session.draft.finalize().unwrap());
        assert_eq!(outcome, CommitOutcome::Discarded(2));
        assert_eq!(ctl.entries().len(), 2);
    }

    #[test]
    fn test_series_episode_scenario() {
        let mut ctl = CatalogListController::new(MediaKind::Series, Vec::new());
        let mut session = ctl.begin_create();
        session.draft.add_episode(0).unwrap();
        session.draft.add_episode(0).unwrap();
        session.draft.remove_episode(0, 0).unwrap();
        session.draft.set_field(DraftField::Title, "Dark");
        session.draft.set_field(DraftField::ReleaseYear, "2017");
        session.draft.set_category(Category::SciFi);
        session.draft.set_language(Language::German);

        assert_eq!(ctl.commit(session.draft.finalize().unwrap()), CommitOutcome::Created(1));

        let entries = ctl.entries();
        let Media::Series { seasons } = &entries[0].media else {
            panic!("expected series");
        };
        let numbers: Vec<u32> = seasons[0].episodes.iter().map(|e| e.episode_number).collect();
        assert_eq!(numbers, vec![2, 3]);
    }

    #[test]
    #[should_panic(expected = "wrong kind")]
    fn test_commit_wrong_kind_panics() {
        let mut ctl = movies();
        let mut session = EditorSession::create(MediaKind::Series);
        session.draft.set_field(DraftField::Title, "Dark");
        session.draft.set_field(DraftField::ReleaseYear, "2017");
        session.draft.set_category(Category::SciFi);
        session.draft.set_language(Language::German);
        ctl.commit(session.draft.finalize().unwrap());
    }

    #[test]
    fn test_stats() {
        let ctl = movies();
        let stats = ctl.stats();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.published, 2);
        assert_eq!(stats.drafts, 1);
        assert_eq!(stats.average_label(), "8.0");
    }
}
