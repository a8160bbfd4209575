//! Assessment accessors: the desktop app's JSON data file, and an in-memory store.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use crate::card::ports::{AccessorError, AssessmentAccessor};
use crate::vibe::AssessmentRecord;

/// Reads the assessment out of the app's JSON data file on every call.
///
/// The record is looked up under `personality_assessment`, then under
/// `userProfile.personality_data`. The profile column stores JSON as text, so
/// a string value is parsed a second time.
#[derive(Debug, Clone)]
pub struct JsonFileAssessmentStore {
    path: PathBuf,
}

impl JsonFileAssessmentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl AssessmentAccessor for JsonFileAssessmentStore {
    async fn get_assessment(&self) -> Result<Option<AssessmentRecord>, AccessorError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No data file at {}, no assessment yet", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let data: Value = serde_json::from_str(&raw)?;
        extract_assessment(data)
    }
}

fn extract_assessment(mut data: Value) -> Result<Option<AssessmentRecord>, AccessorError> {
    let mut stored = data
        .get_mut("personality_assessment")
        .map(Value::take)
        .unwrap_or(Value::Null);

    if stored.is_null() {
        stored = data
            .pointer_mut("/userProfile/personality_data")
            .map(Value::take)
            .unwrap_or(Value::Null);
    }

    // an unset TEXT column comes through as a blank string
    let stored = match stored {
        Value::String(text) if text.trim().is_empty() => Value::Null,
        Value::String(text) => serde_json::from_str(&text)?,
        other => other,
    };

    match stored {
        Value::Null => Ok(None),
        Value::Object(sections) => Ok(Some(AssessmentRecord::new(sections))),
        other => {
            warn!("Stored personality assessment is not an object, ignoring: {other}");
            Ok(None)
        }
    }
}

/// Holds the assessment in memory. Test double for the file store.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct InMemoryAssessmentStore {
    assessment: tokio::sync::RwLock<Option<Value>>,
}

#[cfg(test)]
impl InMemoryAssessmentStore {
    pub fn new(assessment: Option<Value>) -> Self {
        Self {
            assessment: tokio::sync::RwLock::new(assessment),
        }
    }

    pub async fn set(&self, assessment: Value) {
        *self.assessment.write().await = Some(assessment);
    }

    pub async fn clear(&self) {
        *self.assessment.write().await = None;
    }
}

#[cfg(test)]
#[async_trait]
impl AssessmentAccessor for InMemoryAssessmentStore {
    async fn get_assessment(&self) -> Result<Option<AssessmentRecord>, AccessorError> {
        Ok(self
            .assessment
            .read()
            .await
            .clone()
            .map(AssessmentRecord::from_value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn write_data(value: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(value.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_missing_file_is_no_assessment() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileAssessmentStore::new(dir.path().join("latchai-data.json"));
        assert!(store.get_assessment().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_reads_top_level_assessment() {
        let file = write_data(
            &json!({
                "userProfile": null,
                "personality_assessment": {
                    "values": { "relationship_goal": "Serious relationship" }
                }
            })
            .to_string(),
        );
        let store = JsonFileAssessmentStore::new(file.path());
        let record = store.get_assessment().await.unwrap().unwrap();
        assert!(!record.is_empty());
    }

    #[tokio::test]
    async fn test_reads_profile_text_column() {
        let assessment = json!({ "interests": { "hobbies": ["Nature / Hiking"] } }).to_string();
        let file = write_data(
            &json!({
                "userProfile": { "id": 1, "personality_data": assessment },
                "matches": []
            })
            .to_string(),
        );
        let store = JsonFileAssessmentStore::new(file.path());
        let record = store.get_assessment().await.unwrap().unwrap();
        assert_eq!(
            crate::vibe::engine::lifestyle_trait(&record).text,
            "Adventure seeker"
        );
    }

    #[tokio::test]
    async fn test_blank_profile_text_column_is_none() {
        for blank in ["", "   ", "\n"] {
            let file = write_data(
                &json!({ "userProfile": { "id": 1, "personality_data": blank } }).to_string(),
            );
            let store = JsonFileAssessmentStore::new(file.path());
            assert!(
                store.get_assessment().await.unwrap().is_none(),
                "blank column {blank:?} should mean no assessment"
            );
        }
    }

    #[tokio::test]
    async fn test_no_assessment_keys_is_none() {
        let file = write_data(r#"{"userProfile": {"id": 1}, "matches": []}"#);
        let store = JsonFileAssessmentStore::new(file.path());
        assert!(store.get_assessment().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_non_object_assessment_is_none() {
        let file = write_data(r#"{"personality_assessment": [1, 2, 3]}"#);
        let store = JsonFileAssessmentStore::new(file.path());
        assert!(store.get_assessment().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_parse_error() {
        let file = write_data("{ not json");
        let store = JsonFileAssessmentStore::new(file.path());
        let err = store.get_assessment().await.unwrap_err();
        assert!(matches!(err, AccessorError::Parse(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_unreadable_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        // a directory cannot be read as a file
        let store = JsonFileAssessmentStore::new(dir.path());
        let err = store.get_assessment().await.unwrap_err();
        assert!(matches!(err, AccessorError::Io(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_in_memory_store_set_and_clear() {
        let store = InMemoryAssessmentStore::default();
        assert!(store.get_assessment().await.unwrap().is_none());

        store.set(json!({ "values": {} })).await;
        assert!(store.get_assessment().await.unwrap().is_some());

        store.clear().await;
        assert!(store.get_assessment().await.unwrap().is_none());
    }
}
