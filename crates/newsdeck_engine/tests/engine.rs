use std::sync::Arc;
use std::time::{Duration, Instant};

use newsdeck_engine::{
    Article, EngineEvent, EngineHandle, FailureKind, FetchError, NewsFetcher, QueryKind, RequestId,
};

struct ScriptedFetcher;

#[async_trait::async_trait]
impl NewsFetcher for ScriptedFetcher {
    async fn fetch(
        &self,
        request_id: RequestId,
        _query: &QueryKind,
    ) -> Result<Vec<Article>, FetchError> {
        if request_id == 1 {
            Ok(vec![Article {
                title: Some("Scripted".to_string()),
                description: None,
                url: Some("https://news.example/scripted".to_string()),
                url_to_image: Some("https://img.example/s.jpg".to_string()),
            }])
        } else {
            Err(FetchError {
                kind: FailureKind::Network,
                message: "scripted failure".to_string(),
            })
        }
    }
}

fn wait_for_event(handle: &EngineHandle) -> EngineEvent {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if let Some(event) = handle.try_recv() {
            return event;
        }
        assert!(Instant::now() < deadline, "no engine event within deadline");
        std::thread::sleep(Duration::from_millis(10));
    }
}

#[test]
fn engine_reports_completion_with_request_id() {
    let handle = EngineHandle::with_fetcher(Arc::new(ScriptedFetcher));
    handle.fetch(
        1,
        QueryKind::TopHeadlines {
            country: "us".to_string(),
        },
    );

    let EngineEvent::FetchCompleted { request_id, result } = wait_for_event(&handle);
    assert_eq!(request_id, 1);
    let articles = result.expect("scripted success");
    assert_eq!(articles[0].title.as_deref(), Some("Scripted"));
}

#[test]
fn engine_forwards_failures() {
    let handle = EngineHandle::with_fetcher(Arc::new(ScriptedFetcher));
    handle.fetch(
        2,
        QueryKind::Everything {
            query: "india".to_string(),
        },
    );

    let EngineEvent::FetchCompleted { request_id, result } = wait_for_event(&handle);
    assert_eq!(request_id, 2);
    assert_eq!(result.unwrap_err().kind, FailureKind::Network);
}
