//! Copy-on-write editing of the ordered lists nested inside a catalog entry
//! (a movie's providers, a series' seasons, a season's episodes).
//!
//! Every operation borrows the current list and returns the next one; the
//! input is never touched, so a caller holding the previous list still sees
//! the previous values.

use crate::catalog::schema::{Episode, Provider, ProviderOffering, Quality, Season};

/// An element of a nested list that can be created from a template and
/// edited one field at a time.
pub trait ListItem: Clone {
    /// One field of the item together with its new value.
    type Edit;

    /// A blank item for position `number` (1-based).
    fn template(number: u32) -> Self;

    fn apply(&mut self, edit: Self::Edit);
}

/// Append a blank item numbered `len + 1`.
///
/// # Panics
///
/// If the list already holds `u32::MAX` items.
pub fn append<T: ListItem>(list: &[T]) -> Vec<T> {
    let number = u32::try_from(list.len() + 1).expect("nested lists stay below u32::MAX items");
    let mut next = Vec::with_capacity(list.len() + 1);
    next.extend_from_slice(list);
    next.push(T::template(number));
    next
}

/// Remove the item at `index`.
///
/// # Panics
///
/// If the list holds a single item (nested lists never become empty while
/// edited) or `index` is out of bounds.
pub fn remove<T: Clone>(list: &[T], index: usize) -> Vec<T> {
    assert!(list.len() > 1, "cannot remove the last remaining item");
    assert!(
        index < list.len(),
        "remove index {index} out of bounds for list of {}",
        list.len()
    );

    list.iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, item)| item.clone())
        .collect()
}

/// Apply `edit` to the item at `index`, leaving every other item as it was.
///
/// # Panics
///
/// If `index` is out of bounds.
pub fn update<T: ListItem>(list: &[T], index: usize, edit: T::Edit) -> Vec<T> {
    assert!(
        index < list.len(),
        "update index {index} out of bounds for list of {}",
        list.len()
    );

    let mut next = list.to_vec();
    next[index].apply(edit);
    next
}

// ── Item edits ──

#[derive(Debug, Clone, PartialEq)]
pub enum ProviderEdit {
    DisplayName(String),
    Provider(Provider),
    VideoLink(String),
    SubtitleLink(String),
    Quality(Quality),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SeasonEdit {
    Title(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum EpisodeEdit {
    Title(String),
    VideoLink(String),
    SubtitleLink(String),
    Quality(Quality),
    Provider(Provider),
}

impl ListItem for ProviderOffering {
    type Edit = ProviderEdit;

    fn template(_number: u32) -> Self {
        Self::default()
    }

    fn apply(&mut self, edit: ProviderEdit) {
        match edit {
            ProviderEdit::DisplayName(v) => self.display_name = v,
            ProviderEdit::Provider(v) => self.provider = Some(v),
            ProviderEdit::VideoLink(v) => self.video_link = v,
            ProviderEdit::SubtitleLink(v) => self.subtitle_link = v,
            ProviderEdit::Quality(v) => self.quality = Some(v),
        }
    }
}

impl ListItem for Episode {
    type Edit = EpisodeEdit;

    fn template(number: u32) -> Self {
        Self {
            episode_number: number,
            title: String::new(),
            video_link: String::new(),
            subtitle_link: String::new(),
            quality: None,
            provider: None,
        }
    }

    fn apply(&mut self, edit: EpisodeEdit) {
        match edit {
            EpisodeEdit::Title(v) => self.title = v,
            EpisodeEdit::VideoLink(v) => self.video_link = v,
            EpisodeEdit::SubtitleLink(v) => self.subtitle_link = v,
            EpisodeEdit::Quality(v) => self.quality = Some(v),
            EpisodeEdit::Provider(v) => self.provider = Some(v),
        }
    }
}

impl ListItem for Season {
    type Edit = SeasonEdit;

    /// A new season comes with its first episode already in place.
    fn template(number: u32) -> Self {
        Self {
            season_number: number,
            title: format!("Season {number}"),
            episodes: vec![Episode::template(1)],
        }
    }

    fn apply(&mut self, edit: SeasonEdit) {
        match edit {
            SeasonEdit::Title(v) => self.title = v,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn episodes(n: u32) -> Vec<Episode> {
        (1..=n)
            .map(|i| {
                let mut ep = Episode::template(i);
                ep.title = format!("Episode {i}");
                ep
            })
            .collect()
    }

    #[test]
    fn test_append_numbers_from_length() {
        let list = episodes(2);
        let next = append(&list);
        assert_eq!(next.len(), 3);
        assert_eq!(next[2].episode_number, 3);
        assert_eq!(next[2].title, "");
        assert_eq!(next[2].quality, None);
        // Input untouched
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_append_after_removal_reuses_length() {
        let list = remove(&episodes(3), 0);
        let next = append(&list);
        let numbers: Vec<u32> = next.iter().map(|e| e.episode_number).collect();
        assert_eq!(numbers, vec![2, 3, 3]);
    }

    #[test]
    fn test_remove_keeps_order_and_values() {
        let list = episodes(4);
        let next = remove(&list, 1);
        assert_eq!(next.len(), 3);
        assert_eq!(next[0], list[0]);
        assert_eq!(next[1], list[2]);
        assert_eq!(next[2], list[3]);
    }

    #[test]
    #[should_panic(expected = "last remaining")]
    fn test_remove_last_item_panics() {
        let list = episodes(1);
        let _ = remove(&list, 0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_remove_out_of_bounds_panics() {
        let list = episodes(2);
        let _ = remove(&list, 5);
    }

    #[test]
    fn test_update_touches_one_field() {
        let list = episodes(3);
        let next = update(&list, 1, EpisodeEdit::Quality(Quality::Hd720));
        assert_eq!(next[1].quality, Some(Quality::Hd720));
        assert_eq!(next[1].title, list[1].title);
        assert_eq!(next[1].episode_number, list[1].episode_number);
        assert_eq!(next[0], list[0]);
        assert_eq!(next[2], list[2]);
        assert_eq!(list[1].quality, None);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_update_out_of_bounds_panics() {
        let list = episodes(1);
        let _ = update(&list, 1, EpisodeEdit::Title("x".to_string()));
    }

    #[test]
    fn test_provider_edits() {
        let list = append::<ProviderOffering>(&[]);
        let list = update(&list, 0, ProviderEdit::DisplayName("Main".to_string()));
        let list = update(&list, 0, ProviderEdit::Provider(Provider::Hulu));
        let list = update(&list, 0, ProviderEdit::VideoLink("https://v".to_string()));
        assert_eq!(list[0].display_name, "Main");
        assert_eq!(list[0].provider, Some(Provider::Hulu));
        assert_eq!(list[0].video_link, "https://v");
        assert_eq!(list[0].subtitle_link, "");
    }

    #[test]
    fn test_season_template() {
        let seasons = append::<Season>(&[Season::template(1)]);
        assert_eq!(seasons[1].season_number, 2);
        assert_eq!(seasons[1].title, "Season 2");
        assert_eq!(seasons[1].episodes.len(), 1);
        assert_eq!(seasons[1].episodes[0].episode_number, 1);

        let renamed = update(&seasons, 1, SeasonEdit::Title("Finale".to_string()));
        assert_eq!(renamed[1].title, "Finale");
        assert_eq!(renamed[0], seasons[0]);
    }
}
