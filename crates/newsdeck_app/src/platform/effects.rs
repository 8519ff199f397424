use std::path::PathBuf;
use std::sync::mpsc::{self, TryRecvError};
use std::thread;
use std::time::Duration;

use deck_logging::{deck_info, deck_warn};
use newsdeck_core::{Article, Effect, FetchFailure, Msg, View};
use newsdeck_engine::{
    EngineEvent, EngineHandle, FailureKind, FetchError, FetchSettings, QueryKind, RequestId,
};

use super::persistence;

pub struct EffectRunner {
    fetch_tx: mpsc::Sender<(RequestId, QueryKind)>,
    data_dir: PathBuf,
}

impl EffectRunner {
    pub fn new(
        settings: FetchSettings,
        data_dir: PathBuf,
        msg_tx: mpsc::Sender<Msg>,
    ) -> Result<Self, FetchError> {
        let engine = EngineHandle::new(settings)?;
        let (fetch_tx, fetch_rx) = mpsc::channel::<(RequestId, QueryKind)>();
        spawn_event_loop(engine, fetch_rx, msg_tx);
        Ok(Self { fetch_tx, data_dir })
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchArticles { seq, view } => {
                    let query = query_for(view);
                    deck_info!("FetchArticles seq={} endpoint={}", seq, query.path());
                    let _ = self.fetch_tx.send((seq, query));
                }
                Effect::PersistFavorites(favorites) => {
                    persistence::save_favorites(&self.data_dir, &favorites);
                }
            }
        }
    }
}

/// Fixed query templates per view. Favorites never reaches this point.
fn query_for(view: View) -> QueryKind {
    match view {
        View::Trending => QueryKind::TopHeadlines {
            country: "us".to_string(),
        },
        _ => QueryKind::Everything {
            query: "india".to_string(),
        },
    }
}

fn spawn_event_loop(
    engine: EngineHandle,
    fetch_rx: mpsc::Receiver<(RequestId, QueryKind)>,
    msg_tx: mpsc::Sender<Msg>,
) {
    thread::spawn(move || loop {
        let mut idle = true;
        loop {
            match fetch_rx.try_recv() {
                Ok((request_id, query)) => {
                    engine.fetch(request_id, query);
                    idle = false;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => return,
            }
        }
        while let Some(event) = engine.try_recv() {
            let EngineEvent::FetchCompleted { request_id, result } = event;
            let msg = Msg::FetchCompleted {
                seq: request_id,
                result: map_result(request_id, result),
            };
            if msg_tx.send(msg).is_err() {
                return;
            }
            idle = false;
        }
        if idle {
            thread::sleep(Duration::from_millis(20));
        }
    });
}

fn map_result(
    request_id: RequestId,
    result: Result<Vec<newsdeck_engine::Article>, FetchError>,
) -> Result<Vec<Article>, FetchFailure> {
    match result {
        Ok(articles) => Ok(articles.into_iter().map(map_article).collect()),
        Err(err) => {
            deck_warn!("Fetch {} failed: {}", request_id, err.kind);
            Err(map_failure(err))
        }
    }
}

fn map_article(article: newsdeck_engine::Article) -> Article {
    Article {
        title: article.title.unwrap_or_default(),
        description: article.description,
        url: article.url.unwrap_or_default(),
        url_to_image: article.url_to_image,
    }
}

fn map_failure(err: FetchError) -> FetchFailure {
    match err.kind {
        FailureKind::Api { message } => FetchFailure::Api { message },
        // Everything else collapses to a network-level failure as far as
        // the state machine is concerned.
        _ => FetchFailure::Network(err.message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trending_maps_to_us_headlines() {
        assert_eq!(
            query_for(View::Trending),
            QueryKind::TopHeadlines {
                country: "us".to_string()
            }
        );
    }

    #[test]
    fn home_maps_to_india_search() {
        assert_eq!(
            query_for(View::Home),
            QueryKind::Everything {
                query: "india".to_string()
            }
        );
    }

    #[test]
    fn api_failures_keep_their_message() {
        let failure = map_failure(FetchError {
            kind: FailureKind::Api {
                message: "rate limited".to_string(),
            },
            message: "rate limited".to_string(),
        });
        assert_eq!(
            failure,
            FetchFailure::Api {
                message: "rate limited".to_string()
            }
        );
    }

    #[test]
    fn http_failures_collapse_to_network() {
        let failure = map_failure(FetchError {
            kind: FailureKind::HttpStatus(500),
            message: "500 Internal Server Error".to_string(),
        });
        assert!(matches!(failure, FetchFailure::Network(_)));
    }
}
