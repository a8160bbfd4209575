use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::info;

use crate::card::ports::{AssessmentFlowLauncher, LaunchError};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RetakeRequests {
    pub count: u64,
    pub last_requested_at: Option<DateTime<Utc>>,
}

/// Records retake requests for the client to pick up. The questionnaire itself
/// runs client-side, so launching only signals intent.
#[derive(Debug, Default)]
pub struct RetakeSignal {
    requests: RwLock<RetakeRequests>,
}

impl RetakeSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn requests(&self) -> RetakeRequests {
        self.requests.read().await.clone()
    }
}

#[async_trait]
impl AssessmentFlowLauncher for RetakeSignal {
    async fn launch(&self) -> Result<(), LaunchError> {
        let mut requests = self.requests.write().await;
        requests.count += 1;
        requests.last_requested_at = Some(Utc::now());
        info!(count = requests.count, "Personality assessment retake requested");
        Ok(())
    }
}
