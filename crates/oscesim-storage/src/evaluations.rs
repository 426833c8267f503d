//! Production evaluation store.
//!
//! One JSON row per session under `evaluations/{session_id}.json`. Saving
//! again for the same session overwrites the row — re-grading replaces the
//! report wholesale.

use aws_sdk_s3::Client;
use tracing::info;
use uuid::Uuid;

use oscesim_core::models::evaluation::{SessionContext, StoredEvaluation};
use oscesim_core::models::report::EvaluationReport;
use oscesim_core::s3_keys;
use oscesim_grading::GradingError;
use oscesim_grading::persist::EvaluationStore;

use crate::error::StorageError;
use crate::state;

/// S3-backed [`EvaluationStore`].
pub struct S3EvaluationStore {
    client: Client,
    bucket: String,
}

impl S3EvaluationStore {
    pub fn new(config: &aws_config::SdkConfig, bucket: impl Into<String>) -> S3EvaluationStore {
        S3EvaluationStore {
            client: Client::new(config),
            bucket: bucket.into(),
        }
    }
}

impl EvaluationStore for S3EvaluationStore {
    async fn save_evaluation(
        &self,
        ctx: &SessionContext,
        report: &EvaluationReport,
    ) -> Result<(), GradingError> {
        let row = StoredEvaluation {
            session_id: ctx.session_id,
            scenario_id: ctx.scenario_id,
            student_id: ctx.student_id,
            report: report.clone(),
            created_at: jiff::Timestamp::now(),
        };

        let key = s3_keys::evaluation(ctx.session_id);
        state::save_state(&self.client, &self.bucket, &key, &row)
            .await
            .map_err(|e| GradingError::Storage(e.to_string()))?;

        info!(session_id = %ctx.session_id, key = %key, "evaluation row written");
        Ok(())
    }

    async fn load_evaluation(
        &self,
        session_id: Uuid,
    ) -> Result<Option<StoredEvaluation>, GradingError> {
        let key = s3_keys::evaluation(session_id);
        match state::load_state::<StoredEvaluation>(&self.client, &self.bucket, &key).await {
            Ok((row, _etag)) => Ok(Some(row)),
            Err(StorageError::NotFound { .. }) => Ok(None),
            Err(e) => Err(GradingError::Storage(e.to_string())),
        }
    }
}
