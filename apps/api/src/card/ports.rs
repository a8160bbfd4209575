#![allow(dead_code)]

//! Collaborator seams for the vibe card. The controller fetches, renders and
//! relaunches only through these traits, so it runs without a real store or view.
//! `AppState` carries each as an `Arc<dyn ...>`, chosen at startup.

use async_trait::async_trait;
use thiserror::Error;

use crate::vibe::{AssessmentRecord, Placeholder, VibeDescriptor};

#[derive(Debug, Error)]
pub enum AccessorError {
    #[error("assessment store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("assessment store is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("assessment store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("assessment flow unavailable: {0}")]
    Unavailable(String),
}

/// Source of the user's stored assessment.
///
/// `Ok(None)` means no assessment has been taken yet; `Err` means the store
/// could not be read. The controller treats these very differently.
#[async_trait]
pub trait AssessmentAccessor: Send + Sync {
    async fn get_assessment(&self) -> Result<Option<AssessmentRecord>, AccessorError>;
}

/// Presentation target for the card. Owns all markup concerns.
#[async_trait]
pub trait PresentationAdapter: Send + Sync {
    async fn show_populated(&self, descriptor: &VibeDescriptor);
    async fn show_empty(&self, placeholder: &Placeholder);
}

/// Starts the (externally owned) questionnaire when the user asks to retake it.
#[async_trait]
pub trait AssessmentFlowLauncher: Send + Sync {
    async fn launch(&self) -> Result<(), LaunchError>;
}
