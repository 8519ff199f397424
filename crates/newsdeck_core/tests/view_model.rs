use newsdeck_core::{
    update, AppState, Article, Effect, Msg, View, DESCRIPTION_PREVIEW_LEN,
};
use pretty_assertions::assert_eq;

fn loaded_state(articles: Vec<Article>) -> AppState {
    let (state, effects) = update(AppState::new(), Msg::Started);
    let seq = effects
        .iter()
        .find_map(|effect| match effect {
            Effect::FetchArticles { seq, .. } => Some(*seq),
            _ => None,
        })
        .expect("fetch effect");
    let (state, _) = update(
        state,
        Msg::FetchCompleted {
            seq,
            result: Ok(articles),
        },
    );
    state
}

#[test]
fn search_narrows_by_case_insensitive_title_match() {
    let state = loaded_state(vec![
        Article::new(
            "Understanding React Development",
            Some("components"),
            "https://news.example/react",
            Some("x"),
        ),
        Article::new("Cooking", Some("stew"), "https://news.example/cooking", Some("y")),
    ]);

    let (state, _) = update(state, Msg::SearchChanged("react".to_string()));
    let view = state.view();

    assert_eq!(view.cards.len(), 1);
    assert_eq!(view.cards[0].title, "Understanding React Development");
}

#[test]
fn articles_without_title_or_image_are_hidden() {
    let state = loaded_state(vec![
        Article::new("", Some("no title"), "https://news.example/1", Some("x")),
        Article::new("No image", Some("text"), "https://news.example/2", None),
        Article::new("Empty image", Some("text"), "https://news.example/3", Some("")),
        Article::new("Shown", Some("text"), "https://news.example/4", Some("x")),
    ]);

    let view = state.view();
    assert_eq!(view.cards.len(), 1);
    assert_eq!(view.cards[0].title, "Shown");
}

#[test]
fn long_description_is_truncated_with_ellipsis() {
    let long = "x".repeat(200);
    let state = loaded_state(vec![Article::new(
        "Long",
        Some(long.as_str()),
        "https://news.example/long",
        Some("img"),
    )]);

    let summary = &state.view().cards[0].summary;
    assert!(summary.ends_with("..."));
    assert_eq!(summary.len(), DESCRIPTION_PREVIEW_LEN + 3);
    assert_eq!(&summary[..DESCRIPTION_PREVIEW_LEN], &long[..DESCRIPTION_PREVIEW_LEN]);
}

#[test]
fn missing_description_uses_placeholder() {
    let state = loaded_state(vec![
        Article::new("None", None, "https://news.example/none", Some("img")),
        Article::new("Empty", Some(""), "https://news.example/empty", Some("img")),
    ]);

    let view = state.view();
    assert_eq!(view.cards[0].summary, "No description available.");
    assert_eq!(view.cards[1].summary, "No description available.");
}

#[test]
fn empty_state_message_is_view_specific() {
    let state = loaded_state(vec![Article::new(
        "Only story",
        None,
        "https://news.example/only",
        Some("img"),
    )]);

    // A search with no hits leaves the filtered list empty.
    let (state, _) = update(state, Msg::SearchChanged("zzz".to_string()));
    assert_eq!(state.view().empty_message, Some("No articles found."));

    let (state, _) = update(state, Msg::ViewSelected(View::Favorites));
    assert_eq!(
        state.view().empty_message,
        Some("No favorited articles found.")
    );
}

#[test]
fn no_empty_state_message_while_loading() {
    let (state, _) = update(AppState::new(), Msg::Started);
    let view = state.view();

    assert!(view.loading);
    assert_eq!(view.empty_message, None);
}

#[test]
fn nav_marks_active_view_and_keeps_settings_placeholder() {
    let state = loaded_state(Vec::new());
    let (state, _) = update(state, Msg::ViewSelected(View::Trending));
    let view = state.view();

    let labels: Vec<&str> = view.nav.iter().map(|item| item.label).collect();
    assert_eq!(labels, vec!["Home", "Trending", "Favorites", "Settings"]);

    let active: Vec<&str> = view
        .nav
        .iter()
        .filter(|item| item.active)
        .map(|item| item.label)
        .collect();
    assert_eq!(active, vec!["Trending"]);

    let settings = view.nav.last().expect("settings entry");
    assert_eq!(settings.target, None);
}

#[test]
fn cursor_is_clamped_to_filtered_list() {
    let state = loaded_state(vec![
        Article::new("Alpha", None, "https://news.example/a", Some("x")),
        Article::new("Beta", None, "https://news.example/b", Some("x")),
    ]);

    let (state, _) = update(state, Msg::SelectNext);
    assert_eq!(state.view().cursor, 1);

    // Moving past the end stays on the last card.
    let (state, _) = update(state, Msg::SelectNext);
    assert_eq!(state.view().cursor, 1);

    // Narrowing the list pulls the cursor back in range.
    let (state, _) = update(state, Msg::SearchChanged("alpha".to_string()));
    assert_eq!(state.view().cursor, 0);

    let (state, _) = update(state, Msg::SelectPrev);
    assert_eq!(state.view().cursor, 0);
}
