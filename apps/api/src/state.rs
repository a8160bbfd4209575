use std::sync::Arc;

use crate::card::controller::VibeCardController;
use crate::card::html::HtmlCardPresenter;
use crate::card::launcher::RetakeSignal;
use crate::card::ports::AssessmentAccessor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub card: Arc<VibeCardController>,
    /// Same presenter the controller renders into; read back by `GET /card`.
    pub presenter: Arc<HtmlCardPresenter>,
    /// Same launcher the controller binds for retakes.
    pub retake_signal: Arc<RetakeSignal>,
}

impl AppState {
    pub fn new(accessor: Arc<dyn AssessmentAccessor>) -> Self {
        let presenter = Arc::new(HtmlCardPresenter::new());
        let retake_signal = Arc::new(RetakeSignal::new());
        let card = Arc::new(VibeCardController::new(
            accessor,
            presenter.clone(),
            retake_signal.clone(),
        ));

        Self {
            card,
            presenter,
            retake_signal,
        }
    }
}
