/// Query templates understood by the news API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryKind {
    /// `top-headlines` filtered by country.
    TopHeadlines { country: String },
    /// `everything` keyword search.
    Everything { query: String },
}

impl QueryKind {
    /// Endpoint path without parameters, safe for logging.
    pub fn path(&self) -> &'static str {
        match self {
            QueryKind::TopHeadlines { .. } => "top-headlines",
            QueryKind::Everything { .. } => "everything",
        }
    }
}

/// Builds the request URL for a query. The credential is appended as the
/// trailing `apiKey` parameter.
pub fn build_url(base: &str, query: &QueryKind, api_key: &str) -> String {
    let base = base.trim_end_matches('/');
    match query {
        QueryKind::TopHeadlines { country } => {
            format!("{base}/top-headlines?country={country}&apiKey={api_key}")
        }
        QueryKind::Everything { query } => {
            format!("{base}/everything?q={query}&apiKey={api_key}")
        }
    }
}
