//! Production scenario directory.
//!
//! Scenario CRUD is owned by the surrounding service; the grading engine
//! only ever needs a scenario's current title, looked up at report-read
//! time so renames are reflected in old reports.

use aws_sdk_s3::Client;
use serde::Deserialize;
use uuid::Uuid;

use oscesim_core::s3_keys;
use oscesim_grading::GradingError;
use oscesim_grading::read::ScenarioDirectory;

use crate::error::StorageError;
use crate::state;

/// The slice of a scenario row this crate cares about.
#[derive(Debug, Deserialize)]
struct ScenarioRow {
    #[serde(default)]
    title: String,
}

/// S3-backed [`ScenarioDirectory`].
pub struct S3ScenarioDirectory {
    client: Client,
    bucket: String,
}

impl S3ScenarioDirectory {
    pub fn new(config: &aws_config::SdkConfig, bucket: impl Into<String>) -> S3ScenarioDirectory {
        S3ScenarioDirectory {
            client: Client::new(config),
            bucket: bucket.into(),
        }
    }
}

impl ScenarioDirectory for S3ScenarioDirectory {
    async fn scenario_title(&self, scenario_id: Uuid) -> Result<Option<String>, GradingError> {
        let key = s3_keys::scenario(scenario_id);
        match state::load_state::<ScenarioRow>(&self.client, &self.bucket, &key).await {
            Ok((row, _etag)) => Ok(Some(row.title)),
            Err(StorageError::NotFound { .. }) => Ok(None),
            Err(e) => Err(GradingError::Storage(e.to_string())),
        }
    }
}
