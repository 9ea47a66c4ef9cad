use super::draft::{DraftError, EntryDraft};
use super::expansion::ExpansionState;
use crate::catalog::schema::{CatalogEntry, EntryId, MediaKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit(EntryId),
}

/// One open editor dialog: the draft being edited and the UI state that
/// lives exactly as long as it.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorSession {
    pub mode: EditorMode,
    pub draft: EntryDraft,
    pub expansion: ExpansionState,
}

impl EditorSession {
    pub fn create(kind: MediaKind) -> Self {
        Self {
            mode: EditorMode::Create,
            draft: EntryDraft::new(kind),
            expansion: ExpansionState::for_create(),
        }
    }

    pub fn edit(entry: &CatalogEntry) -> Self {
        Self {
            mode: EditorMode::Edit(entry.id),
            draft: EntryDraft::from_entry(entry),
            expansion: ExpansionState::for_edit(),
        }
    }

    pub fn kind(&self) -> MediaKind {
        self.draft.kind()
    }

    pub fn is_create(&self) -> bool {
        self.mode == EditorMode::Create
    }

    /// Remove a season and keep the expanded seasons expanded.
    pub fn remove_season(&mut self, index: usize) -> Result<(), DraftError> {
        self.draft.remove_season(index)?;
        self.expansion.forget(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_session_expands_first_season() {
        let session = EditorSession::create(MediaKind::Series);
        assert!(session.is_create());
        assert!(session.expansion.is_expanded(0));
        assert_eq!(session.draft.seasons().len(), 1);
    }

    #[test]
    fn test_remove_season_follows_expansion() {
        let mut session = EditorSession::create(MediaKind::Series);
        session.draft.add_season().unwrap();
        session.draft.add_season().unwrap();
        session.expansion.toggle(2);

        session.remove_season(0).unwrap();

        assert_eq!(session.draft.seasons().len(), 2);
        assert_eq!(session.draft.seasons()[0].season_number, 2);
        assert!(!session.expansion.is_expanded(0));
        assert!(session.expansion.is_expanded(1));
    }

    #[test]
    fn test_remove_season_on_movie_leaves_expansion() {
        let mut session = EditorSession::create(MediaKind::Movie);
        assert!(session.remove_season(0).is_err());
        assert!(session.expansion.is_expanded(0));
    }
}
