use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Layout is stateless; the state only carries request defaults and limits.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}
