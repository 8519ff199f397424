use std::sync::{mpsc, Arc};
use std::thread;

use crate::fetch::{FetchSettings, NewsFetcher, ReqwestFetcher};
use crate::query::QueryKind;
use crate::{EngineEvent, FetchError, RequestId};

enum EngineCommand {
    Fetch {
        request_id: RequestId,
        query: QueryKind,
    },
}

/// Handle to the IO engine: a background thread owning a tokio runtime.
/// Commands go in over a channel, completion events come back out.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let fetcher = Arc::new(ReqwestFetcher::new(settings)?);
        Ok(Self::with_fetcher(fetcher))
    }

    pub fn with_fetcher(fetcher: Arc<dyn NewsFetcher>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel::<EngineEvent>();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    deck_logging::deck_error!("tokio runtime creation failed: {err}");
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn fetch(&self, request_id: RequestId, query: QueryKind) {
        let _ = self.cmd_tx.send(EngineCommand::Fetch { request_id, query });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    fetcher: &dyn NewsFetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Fetch { request_id, query } => {
            let result = fetcher.fetch(request_id, &query).await;
            let _ = event_tx.send(EngineEvent::FetchCompleted { request_id, result });
        }
    }
}
