use std::fmt;

use crate::fallback::fallback_for;
use crate::policy::{EmptyResults, FailureMode, FetchPolicy};
use crate::view_model::{build_card, AppViewModel, NavItemView};

/// A news article. Identity is the `url` field; articles are value records
/// and are never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub url_to_image: Option<String>,
}

impl Article {
    pub fn new(
        title: impl Into<String>,
        description: Option<&str>,
        url: impl Into<String>,
        url_to_image: Option<&str>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.map(ToOwned::to_owned),
            url: url.into(),
            url_to_image: url_to_image.map(ToOwned::to_owned),
        }
    }

    /// Whether the article qualifies for display: non-empty title and a
    /// present, non-empty image URL.
    pub(crate) fn is_displayable(&self) -> bool {
        !self.title.is_empty()
            && self
                .url_to_image
                .as_deref()
                .is_some_and(|image| !image.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Trending,
    Favorites,
}

impl View {
    pub fn heading(self) -> &'static str {
        match self {
            View::Home => "Personalized Feed",
            View::Trending => "Trending Now",
            View::Favorites => "Your Saved Stories",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Trending => "Trending",
            View::Favorites => "Favorites",
        }
    }
}

/// A fetch failure as seen by the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    /// Network-level failure (connection, timeout, decode). Carries the
    /// underlying detail for the log.
    Network(String),
    /// The API answered with a non-"ok" status and a message.
    Api { message: String },
    /// The API answered "ok" but returned zero articles.
    NoArticles,
}

impl FetchFailure {
    /// The string shown in the error banner under strict failure mode.
    pub fn user_message(&self) -> String {
        match self {
            FetchFailure::Network(_) => "Network error. Please try again.".to_string(),
            FetchFailure::Api { message } => message.clone(),
            FetchFailure::NoArticles => "No articles returned.".to_string(),
        }
    }
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchFailure::Network(detail) => write!(f, "network error: {detail}"),
            FetchFailure::Api { message } => write!(f, "api error: {message}"),
            FetchFailure::NoArticles => write!(f, "no articles returned"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    view: View,
    articles: Vec<Article>,
    favorites: Vec<Article>,
    search: String,
    loading: bool,
    error: String,
    cursor: usize,
    request_seq: u64,
    policy: FetchPolicy,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: FetchPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn current_view(&self) -> View {
        self.view
    }

    pub fn favorites(&self) -> &[Article] {
        &self.favorites
    }

    /// Returns the dirty flag and clears it. The render loop only redraws
    /// when a message actually changed observable state.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn view(&self) -> AppViewModel {
        let list = self.display_list();
        let cursor = clamp_cursor(self.cursor, list.len());
        let cards = list
            .iter()
            .map(|article| build_card(article, &self.favorites))
            .collect::<Vec<_>>();
        let empty_message = if !self.loading && cards.is_empty() {
            Some(match self.view {
                View::Favorites => "No favorited articles found.",
                _ => "No articles found.",
            })
        } else {
            None
        };
        AppViewModel {
            view: self.view,
            heading: self.view.heading(),
            nav: nav_items(self.view),
            search: self.search.clone(),
            loading: self.loading,
            error: self.error.clone(),
            cards,
            cursor,
            empty_message,
        }
    }

    /// The articles eligible for display: favorites in the Favorites view,
    /// the fetched list otherwise, narrowed by the display filter and the
    /// case-insensitive title search.
    fn display_list(&self) -> Vec<&Article> {
        let source = match self.view {
            View::Favorites => &self.favorites,
            _ => &self.articles,
        };
        let needle = self.search.to_lowercase();
        source
            .iter()
            .filter(|article| {
                article.is_displayable() && article.title.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub(crate) fn selected_article(&self) -> Option<&Article> {
        let list = self.display_list();
        if list.is_empty() {
            return None;
        }
        list.get(clamp_cursor(self.cursor, list.len())).copied()
    }

    pub(crate) fn switch_view(&mut self, view: View) {
        self.view = view;
        self.search.clear();
        self.error.clear();
        self.cursor = 0;
        if view == View::Favorites {
            self.loading = false;
        }
        self.dirty = true;
    }

    /// Starts a fetch: sets the loading flag and hands out the next request
    /// sequence number.
    pub(crate) fn begin_fetch(&mut self) -> u64 {
        self.loading = true;
        self.error.clear();
        self.request_seq += 1;
        self.dirty = true;
        self.request_seq
    }

    pub(crate) fn is_latest_request(&self, seq: u64) -> bool {
        seq == self.request_seq
    }

    pub(crate) fn set_search(&mut self, text: String) {
        if self.search != text {
            self.search = text;
            self.cursor = 0;
            self.dirty = true;
        }
    }

    /// Removes the favorite with the same url if present, otherwise appends.
    /// Self-inverse; favorites never hold two entries with the same url.
    pub(crate) fn toggle_favorite(&mut self, article: Article) {
        let existing = self.favorites.iter().position(|fav| fav.url == article.url);
        match existing {
            Some(index) => {
                self.favorites.remove(index);
            }
            None => self.favorites.push(article),
        }
        self.dirty = true;
    }

    pub(crate) fn restore_favorites(&mut self, favorites: Vec<Article>) {
        self.favorites.clear();
        for article in favorites {
            if !self.favorites.iter().any(|fav| fav.url == article.url) {
                self.favorites.push(article);
            }
        }
        self.dirty = true;
    }

    pub(crate) fn move_cursor(&mut self, delta: i64) {
        let len = self.display_list().len();
        let current = clamp_cursor(self.cursor, len);
        let moved = current.saturating_add_signed(delta as isize);
        let next = clamp_cursor(moved, len);
        if next != self.cursor {
            self.cursor = next;
            self.dirty = true;
        }
    }

    pub(crate) fn finish_fetch(&mut self, result: Result<Vec<Article>, FetchFailure>) {
        self.loading = false;
        self.dirty = true;
        match result {
            Ok(articles) if !articles.is_empty() => {
                self.replace_articles(articles);
            }
            Ok(_) => match self.policy.empty_results {
                EmptyResults::Accept => self.replace_articles(Vec::new()),
                EmptyResults::TreatAsFailure => self.apply_failure(&FetchFailure::NoArticles),
            },
            Err(failure) => self.apply_failure(&failure),
        }
    }

    fn replace_articles(&mut self, articles: Vec<Article>) {
        self.articles = articles;
        self.error.clear();
        self.cursor = 0;
    }

    fn apply_failure(&mut self, failure: &FetchFailure) {
        match self.policy.failure_mode {
            FailureMode::Strict => {
                self.error = failure.user_message();
            }
            FailureMode::Graceful => {
                let fallback = fallback_for(self.view, self.policy.fallback_size);
                self.replace_articles(fallback);
            }
        }
    }
}

fn clamp_cursor(cursor: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        cursor.min(len - 1)
    }
}

fn nav_items(active: View) -> Vec<NavItemView> {
    let mut items = [View::Home, View::Trending, View::Favorites]
        .into_iter()
        .map(|view| NavItemView {
            label: view.label(),
            target: Some(view),
            active: view == active,
        })
        .collect::<Vec<_>>();
    // Placeholder entry with no behavior behind it.
    items.push(NavItemView {
        label: "Settings",
        target: None,
        active: false,
    });
    items
}
