use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnalysisStatus {
    Queued,
    #[serde(rename = "In progress")]
    InProgress,
    Error,
    Finished,
}

impl AnalysisStatus {
    /// Whether the analysis will not change its status anymore.
    pub fn is_terminal(&self) -> bool {
        matches!(self, AnalysisStatus::Error | AnalysisStatus::Finished)
    }
}

/// An analysis job as reported by the api after a submission
/// and by status lookups.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub uuid: String,
    pub api_version: String,
    pub mythril_version: String,
    pub harvey_version: String,
    pub maru_version: String,
    /// Milliseconds spent in the queue.
    pub queue_time: u64,
    /// Milliseconds spent running.
    pub run_time: u64,
    pub status: AnalysisStatus,
    pub submitted_at: DateTime<Utc>,
    pub submitted_by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_tool_name: Option<String>,
}
