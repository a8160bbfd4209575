//! Vibe card controller: fetch, infer, present, and keep a single retake binding.
//!
//! State machine: `Unloaded → Loading → {Populated, Empty}`. A failed fetch
//! restores the last settled render and skips the presenter entirely, unless a
//! newer refresh has started since. Overlapping refreshes are not serialized;
//! the last render to finish wins.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::card::ports::{
    AccessorError, AssessmentAccessor, AssessmentFlowLauncher, LaunchError, PresentationAdapter,
};
use crate::vibe::{infer, Placeholder, VibeDescriptor};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "descriptor", rename_all = "snake_case")]
pub enum CardState {
    Unloaded,
    Loading,
    Populated(VibeDescriptor),
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RefreshOutcome {
    Populated,
    Empty,
    /// The fetch failed and the previous state was kept.
    Retained,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStatus {
    Completed,
    NotStarted,
}

/// Everything a refresh publishes, guarded together so the view, the state
/// and the retake binding never disagree.
struct CardSlot {
    state: CardState,
    /// Last `Populated`/`Empty` result (or `Unloaded`). Failed fetches never
    /// write it.
    settled: CardState,
    /// Bumped each time a refresh starts.
    generation: u64,
    /// At most one bound retake action. Replaced, never stacked.
    retake: Option<Arc<dyn AssessmentFlowLauncher>>,
}

pub struct VibeCardController {
    accessor: Arc<dyn AssessmentAccessor>,
    presenter: Arc<dyn PresentationAdapter>,
    launcher: Arc<dyn AssessmentFlowLauncher>,
    slot: Mutex<CardSlot>,
}

impl VibeCardController {
    pub fn new(
        accessor: Arc<dyn AssessmentAccessor>,
        presenter: Arc<dyn PresentationAdapter>,
        launcher: Arc<dyn AssessmentFlowLauncher>,
    ) -> Self {
        Self {
            accessor,
            presenter,
            launcher,
            slot: Mutex::new(CardSlot {
                state: CardState::Unloaded,
                settled: CardState::Unloaded,
                generation: 0,
                retake: None,
            }),
        }
    }

    /// Reloads the assessment and re-renders the card.
    ///
    /// Never fails: accessor errors are logged and the card keeps its last
    /// settled render until the next explicit refresh. A failure never
    /// overwrites a render published by an overlapping refresh.
    pub async fn refresh(&self) -> RefreshOutcome {
        let generation = {
            let mut slot = self.slot.lock().await;
            slot.generation += 1;
            slot.state = CardState::Loading;
            slot.generation
        };

        let record = match self.accessor.get_assessment().await {
            Ok(record) => record,
            Err(e) => {
                warn!("Failed to load personality assessment, keeping vibe card: {e}");
                let mut slot = self.slot.lock().await;
                // a newer refresh owns the state now
                if slot.generation == generation {
                    slot.state = slot.settled.clone();
                }
                return RefreshOutcome::Retained;
            }
        };

        let mut slot = self.slot.lock().await;
        match record.filter(|r| !r.is_empty()) {
            Some(record) => {
                let descriptor = infer(&record);
                debug!(tagline = %descriptor.tagline, "Rendering populated vibe card");

                self.presenter.show_populated(&descriptor).await;
                slot.retake = Some(Arc::clone(&self.launcher));
                slot.settled = CardState::Populated(descriptor);
                slot.state = slot.settled.clone();
                RefreshOutcome::Populated
            }
            None => {
                debug!("No assessment yet, rendering placeholder vibe card");

                self.presenter.show_empty(&Placeholder::default()).await;
                slot.retake = None;
                slot.settled = CardState::Empty;
                slot.state = CardState::Empty;
                RefreshOutcome::Empty
            }
        }
    }

    pub async fn state(&self) -> CardState {
        self.slot.lock().await.state.clone()
    }

    /// Fires the bound retake action. Returns `false` when the current view
    /// offers no retake (nothing rendered yet, or the placeholder is showing).
    pub async fn retake(&self) -> Result<bool, LaunchError> {
        let bound = self.slot.lock().await.retake.clone();
        match bound {
            Some(launcher) => {
                info!("Retake requested, launching personality assessment");
                launcher.launch().await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Whether the user has a stored assessment (drives start vs retake UI).
    pub async fn assessment_status(&self) -> Result<AssessmentStatus, AccessorError> {
        let record = self.accessor.get_assessment().await?;
        if record.is_some_and(|r| !r.is_empty()) {
            Ok(AssessmentStatus::Completed)
        } else {
            Ok(AssessmentStatus::NotStarted)
        }
    }
}
