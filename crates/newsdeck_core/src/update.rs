use crate::{AppState, Effect, Msg, View};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => {
            let view = state.current_view();
            if view == View::Favorites {
                Vec::new()
            } else {
                let seq = state.begin_fetch();
                vec![Effect::FetchArticles { seq, view }]
            }
        }
        Msg::ViewSelected(view) => {
            // Selecting the already-active entry re-issues nothing.
            if view == state.current_view() {
                return (state, Vec::new());
            }
            state.switch_view(view);
            if view == View::Favorites {
                Vec::new()
            } else {
                let seq = state.begin_fetch();
                vec![Effect::FetchArticles { seq, view }]
            }
        }
        Msg::SearchChanged(text) => {
            state.set_search(text);
            Vec::new()
        }
        Msg::FavoriteToggled(article) => {
            state.toggle_favorite(article);
            vec![Effect::PersistFavorites(state.favorites().to_vec())]
        }
        Msg::ToggleSelectedFavorite => match state.selected_article().cloned() {
            Some(article) => {
                state.toggle_favorite(article);
                vec![Effect::PersistFavorites(state.favorites().to_vec())]
            }
            None => Vec::new(),
        },
        Msg::SelectNext => {
            state.move_cursor(1);
            Vec::new()
        }
        Msg::SelectPrev => {
            state.move_cursor(-1);
            Vec::new()
        }
        Msg::FavoritesRestored(favorites) => {
            state.restore_favorites(favorites);
            Vec::new()
        }
        Msg::FetchCompleted { seq, result } => {
            // Ordering guard: a response for anything but the latest issued
            // request is dropped without touching state.
            if !state.is_latest_request(seq) {
                return (state, Vec::new());
            }
            state.finish_fetch(result);
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
