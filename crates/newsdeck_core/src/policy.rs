/// How a fetch failure is surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailureMode {
    /// Substitute the built-in fallback dataset and keep the error banner empty.
    #[default]
    Graceful,
    /// Show the failure message and leave the article list unchanged.
    Strict,
}

/// How an "ok" response with zero articles is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyResults {
    /// Handle it like any other fetch failure.
    #[default]
    TreatAsFailure,
    /// Accept the empty list and show the empty-state message.
    Accept,
}

/// Size of the built-in fallback datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackSize {
    #[default]
    Full,
    /// Truncate each dataset to its first three entries.
    Minimal,
}

/// Knobs controlling how fetch outcomes are applied to state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FetchPolicy {
    pub failure_mode: FailureMode,
    pub empty_results: EmptyResults,
    pub fallback_size: FallbackSize,
}
