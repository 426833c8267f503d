//! Stored-report reading.
//!
//! The inverse direction of the grading pipeline: given a session
//! identifier, rebuild a display-ready view from the persisted row. The
//! scenario title is looked up at read time (a scenario rename is
//! reflected); evidence comes from the persisted report, never recomputed
//! from a live transcript, so repeated views are stable.

use std::future::Future;

use oscesim_core::models::report::EvaluationReport;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::GradingError;
use crate::persist::EvaluationStore;

/// Scenario lookup collaborator, used only to re-resolve display titles.
pub trait ScenarioDirectory: Send + Sync {
    fn scenario_title(
        &self,
        scenario_id: Uuid,
    ) -> impl Future<Output = Result<Option<String>, GradingError>> + Send;
}

/// A stored evaluation reconstructed for display.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReportView {
    pub session_id: Uuid,
    pub scenario_id: Uuid,
    /// Resolved live at read time; empty when the scenario no longer
    /// exists.
    pub scenario_title: String,
    pub report: EvaluationReport,
    pub created_at: jiff::Timestamp,
}

/// Load the evaluation stored for a session, if any.
pub async fn read_report<S: EvaluationStore, D: ScenarioDirectory>(
    store: &S,
    scenarios: &D,
    session_id: Uuid,
) -> Result<Option<ReportView>, GradingError> {
    let Some(stored) = store.load_evaluation(session_id).await? else {
        return Ok(None);
    };

    let scenario_title = scenarios
        .scenario_title(stored.scenario_id)
        .await?
        .unwrap_or_default();

    Ok(Some(ReportView {
        session_id: stored.session_id,
        scenario_id: stored.scenario_id,
        scenario_title,
        report: stored.report,
        created_at: stored.created_at,
    }))
}
