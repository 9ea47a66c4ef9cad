use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, info};

use crate::catalog::schema::{Role, User, UserId, UserStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UserStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    pub admins: usize,
}

/// The user-management list. Same replace-on-write handling as the catalog
/// lists.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    users: Arc<[User]>,
}

impl UserDirectory {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: users.into(),
        }
    }

    pub fn get(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Users whose username, email or role contains `term`, ignoring case.
    pub fn search(&self, term: &str) -> Vec<&User> {
        let needle = term.to_lowercase();
        self.users
            .iter()
            .filter(|u| {
                u.username.to_lowercase().contains(&needle)
                    || u.email.to_lowercase().contains(&needle)
                    || u.role.as_str().to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Flip a user between Active and Inactive, returning the new status.
    pub fn toggle_user_status(&mut self, id: UserId) -> Option<UserStatus> {
        let Some(current) = self.get(id).map(|u| u.status) else {
            debug!("user {id} not found, status unchanged");
            return None;
        };
        let next = current.toggled();

        self.users = self
            .users
            .iter()
            .map(|u| {
                if u.id == id {
                    User {
                        status: next,
                        ..u.clone()
                    }
                } else {
                    u.clone()
                }
            })
            .collect();

        info!("user {id} is now {next}");
        Some(next)
    }

    pub fn stats(&self) -> UserStats {
        UserStats {
            total: self.users.len(),
            active: self
                .users
                .iter()
                .filter(|u| u.status == UserStatus::Active)
                .count(),
            inactive: self
                .users
                .iter()
                .filter(|u| u.status == UserStatus::Inactive)
                .count(),
            admins: self.users.iter().filter(|u| u.role == Role::Admin).count(),
        }
    }
}

/// `245h 30m`
pub fn format_watch_time(minutes: u32) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// `Jan 15, 2023`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// First two characters of the username, upper-cased, for the avatar
/// placeholder.
pub fn initials(username: &str) -> String {
    username.chars().take(2).collect::<String>().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: UserId, username: &str, role: Role, status: UserStatus) -> User {
        User {
            id,
            username: username.to_string(),
            email: format!("{username}@email.com"),
            role,
            status,
            watch_time_minutes: 90,
            join_date: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
            last_login: NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
            avatar_url: String::new(),
        }
    }

    fn directory() -> UserDirectory {
        UserDirectory::new(vec![
            user(1, "john_doe", Role::User, UserStatus::Active),
            user(2, "sarah_wilson", Role::Admin, UserStatus::Active),
            user(3, "mike_chen", Role::User, UserStatus::Inactive),
        ])
    }

    #[test]
    fn test_search_fields() {
        let dir = directory();
        let ids = |term: &str| dir.search(term).iter().map(|u| u.id).collect::<Vec<_>>();
        assert_eq!(ids(""), vec![1, 2, 3]);
        assert_eq!(ids("SARAH"), vec![2]);
        assert_eq!(ids("admin"), vec![2]);
        assert_eq!(ids("user"), vec![1, 3]);
        assert_eq!(ids("chen@"), vec![3]);
    }

    #[test]
    fn test_toggle_status() {
        let mut dir = directory();
        let before = dir.clone();

        assert_eq!(dir.toggle_user_status(1), Some(UserStatus::Inactive));
        assert_eq!(dir.toggle_user_status(3), Some(UserStatus::Active));
        assert_eq!(dir.toggle_user_status(9), None);

        assert_eq!(dir.get(1).unwrap().status, UserStatus::Inactive);
        assert_eq!(dir.get(1).unwrap().username, "john_doe");
        assert_eq!(before.get(1).unwrap().status, UserStatus::Active);
    }

    #[test]
    fn test_stats() {
        let stats = directory().stats();
        assert_eq!(
            stats,
            UserStats {
                total: 3,
                active: 2,
                inactive: 1,
                admins: 1,
            }
        );
    }

    #[test]
    fn test_formatting() {
        assert_eq!(format_watch_time(14730), "245h 30m");
        assert_eq!(format_watch_time(45), "0h 45m");
        assert_eq!(
            format_date(NaiveDate::from_ymd_opt(2023, 1, 5).unwrap()),
            "Jan 5, 2023"
        );
        assert_eq!(initials("sarah_wilson"), "SA");
        assert_eq!(initials("x"), "X");
    }
}
