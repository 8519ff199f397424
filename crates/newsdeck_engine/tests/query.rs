use newsdeck_engine::{build_url, QueryKind, DEFAULT_BASE_URL};
use pretty_assertions::assert_eq;

#[test]
fn top_headlines_url_matches_template() {
    let query = QueryKind::TopHeadlines {
        country: "us".to_string(),
    };
    assert_eq!(
        build_url(DEFAULT_BASE_URL, &query, "secret"),
        "https://newsapi.org/v2/top-headlines?country=us&apiKey=secret"
    );
}

#[test]
fn everything_url_matches_template() {
    let query = QueryKind::Everything {
        query: "india".to_string(),
    };
    assert_eq!(
        build_url(DEFAULT_BASE_URL, &query, "secret"),
        "https://newsapi.org/v2/everything?q=india&apiKey=secret"
    );
}

#[test]
fn trailing_slash_in_base_is_tolerated() {
    let query = QueryKind::TopHeadlines {
        country: "us".to_string(),
    };
    assert_eq!(
        build_url("http://127.0.0.1:9/", &query, "k"),
        "http://127.0.0.1:9/top-headlines?country=us&apiKey=k"
    );
}
