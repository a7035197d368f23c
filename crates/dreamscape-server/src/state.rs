use std::sync::Arc;

use crate::service::ReportService;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ReportService>,
}
