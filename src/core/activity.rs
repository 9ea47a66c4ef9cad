use chrono::{DateTime, Utc};
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Movie,
    Series,
    User,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub kind: ActivityKind,
    pub action: String,
    pub item: String,
    pub at: DateTime<Utc>,
}

/// Recent changes for the dashboard, newest first.
#[derive(Debug, Clone)]
pub struct ActivityLog {
    entries: VecDeque<Activity>,
    capacity: usize,
}

impl ActivityLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn record(&mut self, kind: ActivityKind, action: impl Into<String>, item: impl Into<String>) {
        self.record_at(kind, action, item, Utc::now());
    }

    pub fn record_at(
        &mut self,
        kind: ActivityKind,
        action: impl Into<String>,
        item: impl Into<String>,
        at: DateTime<Utc>,
    ) {
        self.entries.push_front(Activity {
            kind,
            action: action.into(),
            item: item.into(),
            at,
        });
        self.entries.truncate(self.capacity);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// "just now", "5 minutes ago", "2 hours ago", "3 days ago".
pub fn time_ago(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(at);
    let (value, unit) = if elapsed.num_minutes() < 1 {
        return "just now".to_string();
    } else if elapsed.num_hours() < 1 {
        (elapsed.num_minutes(), "minute")
    } else if elapsed.num_days() < 1 {
        (elapsed.num_hours(), "hour")
    } else {
        (elapsed.num_days(), "day")
    };

    if value == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{value} {unit}s ago")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_newest_first_and_bounded() {
        let mut log = ActivityLog::new(2);
        log.record(ActivityKind::Movie, "New movie added", "Interstellar");
        log.record(ActivityKind::Series, "Series updated", "Breaking Bad");
        log.record(ActivityKind::Movie, "Movie deleted", "Old Movie");

        assert_eq!(log.len(), 2);
        let items: Vec<&str> = log.iter().map(|a| a.item.as_str()).collect();
        assert_eq!(items, vec!["Old Movie", "Breaking Bad"]);
    }

    #[test]
    fn test_time_ago_labels() {
        let now = Utc::now();
        assert_eq!(time_ago(now - Duration::seconds(20), now), "just now");
        assert_eq!(time_ago(now - Duration::minutes(1), now), "1 minute ago");
        assert_eq!(time_ago(now - Duration::minutes(42), now), "42 minutes ago");
        assert_eq!(time_ago(now - Duration::hours(4), now), "4 hours ago");
        assert_eq!(time_ago(now - Duration::days(3), now), "3 days ago");
    }
}
