//! Durable favorites slot.
//!
//! One slot named `favs`, stored as `favs.json` in the data directory,
//! holding the JSON-encoded article sequence. Load failures fall back to an
//! empty set; write failures are logged and not surfaced.

use std::fs;
use std::path::{Path, PathBuf};

use deck_logging::{deck_error, deck_info, deck_warn};
use newsdeck_core::Article;
use newsdeck_engine::AtomicFileWriter;
use serde::{Deserialize, Serialize};

const FAVS_SLOT: &str = "favs";

fn slot_path(data_dir: &Path) -> PathBuf {
    data_dir.join(format!("{FAVS_SLOT}.json"))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedArticle {
    title: String,
    description: Option<String>,
    url: String,
    #[serde(rename = "urlToImage")]
    url_to_image: Option<String>,
}

pub(crate) fn load_favorites(data_dir: &Path) -> Vec<Article> {
    let path = slot_path(data_dir);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Vec::new();
        }
        Err(err) => {
            deck_warn!("Failed to read favorites from {:?}: {}", path, err);
            return Vec::new();
        }
    };

    let persisted: Vec<PersistedArticle> = match serde_json::from_str(&content) {
        Ok(persisted) => persisted,
        Err(err) => {
            deck_warn!("Failed to parse favorites from {:?}: {}", path, err);
            return Vec::new();
        }
    };

    deck_info!("Loaded {} favorites from {:?}", persisted.len(), path);
    persisted
        .into_iter()
        .map(|article| Article {
            title: article.title,
            description: article.description,
            url: article.url,
            url_to_image: article.url_to_image,
        })
        .collect()
}

pub(crate) fn save_favorites(data_dir: &Path, favorites: &[Article]) {
    let persisted: Vec<PersistedArticle> = favorites
        .iter()
        .map(|article| PersistedArticle {
            title: article.title.clone(),
            description: article.description.clone(),
            url: article.url.clone(),
            url_to_image: article.url_to_image.clone(),
        })
        .collect();

    let content = match serde_json::to_string_pretty(&persisted) {
        Ok(text) => text,
        Err(err) => {
            deck_error!("Failed to serialize favorites: {}", err);
            return;
        }
    };

    let writer = AtomicFileWriter::new(data_dir.to_path_buf());
    if let Err(err) = writer.write(&format!("{FAVS_SLOT}.json"), &content) {
        deck_error!("Failed to write favorites to {:?}: {}", data_dir, err);
    }
}
