//! Newsdeck core: pure state machine and view-model helpers.
mod effect;
mod fallback;
mod msg;
mod policy;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use fallback::fallback_for;
pub use msg::Msg;
pub use policy::{EmptyResults, FailureMode, FallbackSize, FetchPolicy};
pub use state::{AppState, Article, FetchFailure, View};
pub use update::update;
pub use view_model::{AppViewModel, CardView, NavItemView, DESCRIPTION_PREVIEW_LEN};
