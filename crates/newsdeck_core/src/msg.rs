use crate::{Article, FetchFailure, View};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Application start: issue the initial fetch for the startup view.
    Started,
    /// User selected a navigation entry.
    ViewSelected(View),
    /// User edited the search box text.
    SearchChanged(String),
    /// User toggled the favorite marker on an article.
    FavoriteToggled(Article),
    /// Toggle the favorite marker on the article under the cursor.
    ToggleSelectedFavorite,
    /// Move the card cursor down.
    SelectNext,
    /// Move the card cursor up.
    SelectPrev,
    /// Restore previously persisted favorites at startup.
    FavoritesRestored(Vec<Article>),
    /// A fetch issued for request `seq` completed.
    FetchCompleted {
        seq: u64,
        result: Result<Vec<Article>, FetchFailure>,
    },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
