//! Newsdeck engine: news API IO and persistence primitives.
mod engine;
mod fetch;
mod persist;
mod query;
mod types;

pub use engine::EngineHandle;
pub use fetch::{FetchSettings, NewsFetcher, ReqwestFetcher, DEFAULT_BASE_URL};
pub use persist::{ensure_data_dir, AtomicFileWriter, PersistError};
pub use query::{build_url, QueryKind};
pub use types::{Article, EngineEvent, FailureKind, FetchError, NewsResponse, RequestId};
