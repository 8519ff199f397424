use crate::{Article, View};

/// Number of description characters shown on a card before the ellipsis.
pub const DESCRIPTION_PREVIEW_LEN: usize = 85;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub view: View,
    pub heading: &'static str,
    pub nav: Vec<NavItemView>,
    pub search: String,
    pub loading: bool,
    pub error: String,
    pub cards: Vec<CardView>,
    pub cursor: usize,
    pub empty_message: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItemView {
    pub label: &'static str,
    /// `None` for placeholder entries that do not navigate anywhere.
    pub target: Option<View>,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub title: String,
    pub summary: String,
    pub url: String,
    pub image_url: String,
    pub is_favorite: bool,
}

pub(crate) fn build_card(article: &Article, favorites: &[Article]) -> CardView {
    CardView {
        title: article.title.clone(),
        summary: summarize(article.description.as_deref()),
        url: article.url.clone(),
        // Filtering guarantees the image is present for displayed cards.
        image_url: article.url_to_image.clone().unwrap_or_default(),
        is_favorite: favorites.iter().any(|fav| fav.url == article.url),
    }
}

fn summarize(description: Option<&str>) -> String {
    match description.filter(|text| !text.is_empty()) {
        Some(text) => {
            let preview: String = text.chars().take(DESCRIPTION_PREVIEW_LEN).collect();
            format!("{preview}...")
        }
        None => "No description available.".to_string(),
    }
}
