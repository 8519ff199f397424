use crate::{Article, View};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue a network fetch for the given view. `seq` tags the request so
    /// that only the response matching the latest sequence number is applied.
    FetchArticles { seq: u64, view: View },
    /// Write the current favorites to the durable slot.
    PersistFavorites(Vec<Article>),
}
