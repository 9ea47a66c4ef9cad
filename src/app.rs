use iced::widget::{column, container, row, stack, text};
use iced::{Element, Length, Subscription, Task, Theme};
use tracing::{info, warn};

use crate::catalog::schema::*;
use crate::catalog::{self, CatalogData};
use crate::config::AppConfig;
use crate::core::activity::{ActivityKind, ActivityLog};
use crate::core::collection::{EpisodeEdit, ProviderEdit, SeasonEdit};
use crate::core::controller::{CatalogListController, CommitOutcome};
use crate::core::draft::{DraftError, DraftField};
use crate::core::session::EditorSession;
use crate::core::stats::top_rated;
use crate::core::users::UserDirectory;
use crate::theme as app_theme;
use crate::ui;
use crate::ui::toast::{Toast, ToastType};

// ── Pages ──

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Movies,
    Series,
    Users,
}

impl Page {
    pub const ALL: &[Page] = &[Self::Dashboard, Self::Movies, Self::Series, Self::Users];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Movies => "Movies",
            Self::Series => "Series",
            Self::Users => "Users",
        }
    }

    /// The catalog list a page shows, if any.
    pub fn media_kind(&self) -> Option<MediaKind> {
        match self {
            Self::Movies => Some(MediaKind::Movie),
            Self::Series => Some(MediaKind::Series),
            Self::Dashboard | Self::Users => None,
        }
    }
}

// ── Message enum ──

#[derive(Debug, Clone)]
pub enum Message {
    // Init
    Loaded(Result<CatalogData, String>),

    // Navigation
    Navigate(Page),

    // Catalog lists
    SearchChanged(MediaKind, String),
    OpenCreate(MediaKind),
    OpenEdit(MediaKind, EntryId),
    DeleteEntry(MediaKind, EntryId),

    // Editor
    FieldChanged(DraftField, String),
    CategorySelected(Category),
    LanguageSelected(Language),
    AddProvider,
    RemoveProvider(usize),
    ProviderChanged(usize, ProviderEdit),
    AddSeason,
    RemoveSeason(usize),
    SeasonChanged(usize, SeasonEdit),
    ToggleSeason(usize),
    AddEpisode(usize),
    RemoveEpisode(usize, usize),
    EpisodeChanged(usize, usize, EpisodeEdit),
    SaveEditor,
    CancelEditor,

    // Users
    UserSearchChanged(String),
    ViewUser(UserId),
    CloseUserView,
    ToggleUserStatus(UserId),

    // Toast
    DismissToast(u64),
    TickToasts,

    // Keyboard
    KeyPressed(iced::keyboard::Key, iced::keyboard::Modifiers),
}

// ── App state ──

pub struct App {
    pub loading: bool,
    pub page: Page,

    // Data
    pub movies: CatalogListController,
    pub series: CatalogListController,
    pub users: UserDirectory,
    pub activity: ActivityLog,

    // Filters
    pub movie_search: String,
    pub series_search: String,
    pub user_search: String,

    // Dialogs
    pub editor: Option<EditorSession>,
    pub viewing_user: Option<UserId>,

    // Toast
    pub toasts: Vec<Toast>,
    pub next_toast_id: u64,
}

fn activity_kind(kind: MediaKind) -> ActivityKind {
    match kind {
        MediaKind::Movie => ActivityKind::Movie,
        MediaKind::Series => ActivityKind::Series,
    }
}

impl App {
    fn add_toast(&mut self, message: String, toast_type: ToastType) {
        let id = self.next_toast_id;
        self.next_toast_id += 1;
        self.toasts.push(Toast::new(id, message, toast_type));
    }

    fn controller(&self, kind: MediaKind) -> &CatalogListController {
        match kind {
            MediaKind::Movie => &self.movies,
            MediaKind::Series => &self.series,
        }
    }

    fn controller_mut(&mut self, kind: MediaKind) -> &mut CatalogListController {
        match kind {
            MediaKind::Movie => &mut self.movies,
            MediaKind::Series => &mut self.series,
        }
    }

    fn search_query(&self, kind: MediaKind) -> &str {
        match kind {
            MediaKind::Movie => &self.movie_search,
            MediaKind::Series => &self.series_search,
        }
    }

    /// Apply one change to the open draft. A rejected change leaves the
    /// draft as it was.
    fn edit_session(&mut self, change: impl FnOnce(&mut EditorSession) -> Result<(), DraftError>) {
        let Some(session) = self.editor.as_mut() else {
            return;
        };
        if let Err(e) = change(session) {
            warn!("Editor change rejected: {e}");
            self.add_toast(e.to_string(), ToastType::Error);
        }
    }

    fn save_editor(&mut self) {
        let Some(session) = &self.editor else {
            return;
        };
        let kind = session.kind();

        let finished = match session.draft.finalize() {
            Ok(finished) => finished,
            Err(e) => {
                info!("Save blocked: {e}");
                self.add_toast(e.to_string(), ToastType::Warning);
                return;
            }
        };

        self.editor = None;
        let title = finished.details.title.clone();
        let outcome = self.controller_mut(kind).commit(finished);

        match outcome {
            CommitOutcome::Created(_) => {
                self.activity
                    .record(activity_kind(kind), format!("New {} added", kind.as_str().to_lowercase()), &title);
                self.add_toast(format!("\"{title}\" created"), ToastType::Success);
            }
            CommitOutcome::Updated(_) => {
                self.activity
                    .record(activity_kind(kind), format!("{kind} updated"), &title);
                self.add_toast(format!("\"{title}\" saved"), ToastType::Success);
            }
            CommitOutcome::Discarded(_) => {
                self.add_toast(
                    format!("\"{title}\" was deleted while being edited; changes discarded"),
                    ToastType::Warning,
                );
            }
        }
    }

    fn close_dialog(&mut self) {
        if self.editor.take().is_some() {
            info!("Editor closed without saving");
        } else {
            self.viewing_user = None;
        }
    }
}

impl App {
    pub fn new(config: AppConfig) -> (Self, Task<Message>) {
        let seed_file = config.seed_file.clone();

        let init_task = Task::perform(
            async move {
                tokio::task::spawn_blocking(move || {
                    catalog::load_catalog(seed_file.as_deref()).map_err(|e| e.to_string())
                })
                .await
                .map_err(|e| format!("Init error: {e}"))?
            },
            Message::Loaded,
        );

        let app = App {
            loading: true,
            page: Page::Dashboard,
            movies: CatalogListController::new(MediaKind::Movie, Vec::new()),
            series: CatalogListController::new(MediaKind::Series, Vec::new()),
            users: UserDirectory::new(Vec::new()),
            activity: ActivityLog::new(config.activity_capacity),
            movie_search: String::new(),
            series_search: String::new(),
            user_search: String::new(),
            editor: None,
            viewing_user: None,
            toasts: Vec::new(),
            next_toast_id: 1,
        };

        (app, init_task)
    }

    pub fn title(&self) -> String {
        match self.page {
            Page::Dashboard => "ReelAdmin".to_string(),
            page => format!("ReelAdmin · {}", page.label()),
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let mut subs = vec![];

        // Toast auto-dismiss ticker
        if !self.toasts.is_empty() {
            subs.push(iced::time::every(std::time::Duration::from_millis(100)).map(|_| Message::TickToasts));
        }

        subs.push(iced::keyboard::listen().map(|event| match event {
            iced::keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Message::KeyPressed(key, modifiers)
            }
            _ => Message::TickToasts,
        }));

        Subscription::batch(subs)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Loaded(Ok(data)) => {
                info!("Catalog ready");
                self.movies = CatalogListController::new(MediaKind::Movie, data.movies);
                self.series = CatalogListController::new(MediaKind::Series, data.series);
                self.users = UserDirectory::new(data.users);
                self.loading = false;
                Task::none()
            }
            Message::Loaded(Err(e)) => {
                self.loading = false;
                warn!("Catalog failed to load: {e}");
                self.add_toast(format!("Load error: {e}"), ToastType::Error);
                Task::none()
            }

            Message::Navigate(page) => {
                self.page = page;
                Task::none()
            }

            // ── Catalog lists ──
            Message::SearchChanged(kind, query) => {
                match kind {
                    MediaKind::Movie => self.movie_search = query,
                    MediaKind::Series => self.series_search = query,
                }
                Task::none()
            }
            Message::OpenCreate(kind) => {
                self.viewing_user = None;
                self.editor = Some(self.controller(kind).begin_create());
                Task::none()
            }
            Message::OpenEdit(kind, id) => {
                match self.controller(kind).begin_edit(id) {
                    Some(session) => {
                        self.viewing_user = None;
                        self.editor = Some(session);
                    }
                    None => self.add_toast(format!("{kind} {id} no longer exists"), ToastType::Warning),
                }
                Task::none()
            }
            Message::DeleteEntry(kind, id) => {
                if let Some(removed) = self.controller_mut(kind).remove(id) {
                    let title = removed.details.title;
                    self.activity
                        .record(activity_kind(kind), format!("{kind} deleted"), &title);
                    self.add_toast(format!("\"{title}\" deleted"), ToastType::Info);
                }
                Task::none()
            }

            // ── Editor ──
            Message::FieldChanged(field, value) => {
                self.edit_session(|s| {
                    s.draft.set_field(field, value);
                    Ok(())
                });
                Task::none()
            }
            Message::CategorySelected(category) => {
                self.edit_session(|s| {
                    s.draft.set_category(category);
                    Ok(())
                });
                Task::none()
            }
            Message::LanguageSelected(language) => {
                self.edit_session(|s| {
                    s.draft.set_language(language);
                    Ok(())
                });
                Task::none()
            }
            Message::AddProvider => {
                self.edit_session(|s| s.draft.add_provider());
                Task::none()
            }
            Message::RemoveProvider(index) => {
                self.edit_session(|s| s.draft.remove_provider(index));
                Task::none()
            }
            Message::ProviderChanged(index, edit) => {
                self.edit_session(|s| s.draft.update_provider(index, edit));
                Task::none()
            }
            Message::AddSeason => {
                self.edit_session(|s| s.draft.add_season());
                Task::none()
            }
            Message::RemoveSeason(index) => {
                self.edit_session(|s| s.remove_season(index));
                Task::none()
            }
            Message::SeasonChanged(index, edit) => {
                self.edit_session(|s| s.draft.update_season(index, edit));
                Task::none()
            }
            Message::ToggleSeason(index) => {
                self.edit_session(|s| {
                    s.expansion.toggle(index);
                    Ok(())
                });
                Task::none()
            }
            Message::AddEpisode(season) => {
                self.edit_session(|s| s.draft.add_episode(season));
                Task::none()
            }
            Message::RemoveEpisode(season, episode) => {
                self.edit_session(|s| s.draft.remove_episode(season, episode));
                Task::none()
            }
            Message::EpisodeChanged(season, episode, edit) => {
                self.edit_session(|s| s.draft.update_episode(season, episode, edit));
                Task::none()
            }
            Message::SaveEditor => {
                self.save_editor();
                Task::none()
            }
            Message::CancelEditor => {
                self.editor = None;
                Task::none()
            }

            // ── Users ──
            Message::UserSearchChanged(query) => {
                self.user_search = query;
                Task::none()
            }
            Message::ViewUser(id) => {
                self.viewing_user = Some(id);
                Task::none()
            }
            Message::CloseUserView => {
                self.viewing_user = None;
                Task::none()
            }
            Message::ToggleUserStatus(id) => {
                if let Some(status) = self.users.toggle_user_status(id) {
                    let username = self
                        .users
                        .get(id)
                        .map(|u| u.username.clone())
                        .unwrap_or_default();
                    let action = match status {
                        UserStatus::Active => "User activated",
                        UserStatus::Inactive => "User deactivated",
                    };
                    self.activity.record(ActivityKind::User, action, &username);
                    self.add_toast(format!("{username} is now {status}"), ToastType::Success);
                }
                Task::none()
            }

            // ── Toast ──
            Message::DismissToast(id) => {
                self.toasts.retain(|t| t.id != id);
                Task::none()
            }
            Message::TickToasts => {
                self.toasts.retain(|t| !t.is_expired());
                Task::none()
            }

            // ── Keyboard ──
            Message::KeyPressed(key, modifiers) => {
                use iced::keyboard::Key;

                match key {
                    Key::Named(iced::keyboard::key::Named::Escape) => {
                        self.close_dialog();
                        Task::none()
                    }
                    Key::Character(c) if modifiers.command() && c.as_str() == "n" => {
                        match self.page.media_kind() {
                            Some(kind) if self.editor.is_none() => self.update(Message::OpenCreate(kind)),
                            _ => Task::none(),
                        }
                    }
                    _ => Task::none(),
                }
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let content: Element<'_, Message> = if self.loading {
            container(text("Loading catalog…").size(14).color(app_theme::TEXT_MUTED))
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into()
        } else {
            match self.page {
                Page::Dashboard => ui::dashboard::dashboard(
                    self.movies.stats(),
                    self.series.stats(),
                    self.users.stats(),
                    top_rated(self.movies.entries().iter().chain(self.series.entries().iter()), 5),
                    &self.activity,
                ),
                Page::Movies => self.catalog_page(MediaKind::Movie),
                Page::Series => self.catalog_page(MediaKind::Series),
                Page::Users => self.users_page(),
            }
        };

        // Base layout
        let base = container(
            row![
                ui::sidebar::sidebar(self.page),
                container(content)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .padding(24),
            ]
            .width(Length::Fill)
            .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_: &Theme| container::Style {
            background: Some(app_theme::BG_PRIMARY.into()),
            ..Default::default()
        });

        // Stack for overlays (modals, toasts)
        let mut layers: Vec<Element<'_, Message>> = vec![base.into()];

        if let Some(session) = &self.editor {
            layers.push(ui::entry_form::entry_form(session));
        } else if let Some(user) = self.viewing_user.and_then(|id| self.users.get(id)) {
            layers.push(ui::user_modal::user_modal(user));
        }

        // Toasts
        if !self.toasts.is_empty() {
            let toast_view = ui::toast::toast_container(&self.toasts);
            layers.push(
                container(toast_view)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(iced::alignment::Horizontal::Right)
                    .align_y(iced::alignment::Vertical::Bottom)
                    .into(),
            );
        }

        stack(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn catalog_page(&self, kind: MediaKind) -> Element<'_, Message> {
        let controller = self.controller(kind);
        let stats = controller.stats();
        let query = self.search_query(kind);
        let shown = controller.search(query);

        let (title, subtitle, action, placeholder) = match kind {
            MediaKind::Movie => (
                "Movies",
                "Manage the movie catalog and its streaming providers",
                "+ Add Movie",
                "Search movies by title or category...",
            ),
            MediaKind::Series => (
                "Series",
                "Manage series, seasons and episodes",
                "+ Add Series",
                "Search series by title or category...",
            ),
        };

        let mut cards = vec![
            ui::header::stat_card("Total", stats.total.to_string(), app_theme::TEXT_PRIMARY),
            ui::header::stat_card("Published", stats.published.to_string(), app_theme::STATUS_PUBLISHED),
            ui::header::stat_card("Drafts", stats.drafts.to_string(), app_theme::STATUS_DRAFT),
        ];
        match kind {
            MediaKind::Movie => cards.push(ui::header::stat_card(
                "Avg. Rating",
                stats.average_label(),
                app_theme::WARNING,
            )),
            MediaKind::Series => {
                cards.push(ui::header::stat_card("Seasons", stats.seasons.to_string(), app_theme::INFO));
                cards.push(ui::header::stat_card("Episodes", stats.episodes.to_string(), app_theme::INFO));
            }
        }

        let total = stats.total;
        let count = shown.len();

        column![
            ui::header::page_header(title, subtitle, Some((action, Message::OpenCreate(kind)))),
            ui::header::stat_row(cards),
            ui::filters::search_bar(placeholder, query, count, total, move |q| {
                Message::SearchChanged(kind, q)
            }),
            container(ui::catalog_table::catalog_table(kind, shown))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(app_theme::card),
        ]
        .spacing(16)
        .into()
    }

    fn users_page(&self) -> Element<'_, Message> {
        let stats = self.users.stats();
        let shown = self.users.search(&self.user_search);
        let count = shown.len();

        column![
            ui::header::page_header("Users", "Manage user accounts and access", None),
            ui::header::stat_row(vec![
                ui::header::stat_card("Total Users", stats.total.to_string(), app_theme::TEXT_PRIMARY),
                ui::header::stat_card("Active", stats.active.to_string(), app_theme::SUCCESS),
                ui::header::stat_card("Inactive", stats.inactive.to_string(), app_theme::STATUS_INACTIVE),
                ui::header::stat_card("Admins", stats.admins.to_string(), app_theme::ACCENT_HOVER),
            ]),
            ui::filters::search_bar(
                "Search users by name, email or role...",
                &self.user_search,
                count,
                stats.total,
                Message::UserSearchChanged,
            ),
            container(ui::users_table::users_table(shown))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(app_theme::card),
        ]
        .spacing(16)
        .into()
    }
}
