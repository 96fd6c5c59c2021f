use super::issue::{Issue, Severity, SourceFormat, SourceType};
use crate::{codec, ValidationError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Issues found in one group of sources of an analysis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct IssueReport {
    pub issues: Vec<Issue>,
    pub source_type: SourceType,
    pub source_format: SourceFormat,
    pub source_list: Vec<String>,
    #[serde(rename = "meta")]
    pub meta_data: Map<String, Value>,
}

impl IssueReport {
    pub fn from_value(value: Value) -> Result<Self, ValidationError> {
        codec::from_value(value)
    }

    /// Parses raw reports received from the api.
    ///
    /// Fails on the first element which does not match the schema;
    /// the error path starts with the index of that element.
    pub fn parse_list(raw: &[Value]) -> Result<Vec<Self>, ValidationError> {
        let reports: Vec<Self> = codec::from_values(raw)?;
        tracing::trace!(
            reports = reports.len(),
            issues = reports.iter().map(|r| r.issues.len()).sum::<usize>(),
            "issue reports decoded"
        );
        Ok(reports)
    }

    /// The report keyed by the api field names.
    pub fn to_dict(&self) -> Result<Map<String, Value>, ValidationError> {
        codec::to_map(self)
    }
}

/// Response of the detected issues endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DetectedIssuesResponse {
    pub reports: Vec<IssueReport>,
}

impl DetectedIssuesResponse {
    pub fn from_json(text: &str) -> Result<Self, ValidationError> {
        codec::from_json_str(text)
    }

    pub fn from_value(value: Value) -> Result<Self, ValidationError> {
        codec::from_value(value)
    }

    pub fn to_value(&self) -> Result<Value, ValidationError> {
        codec::to_value(self)
    }

    pub fn to_json(&self) -> Result<String, ValidationError> {
        codec::to_json_string(self)
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IssueReport> {
        self.reports.iter()
    }

    /// Total number of issues over all reports.
    pub fn issue_count(&self) -> usize {
        self.reports.iter().map(|report| report.issues.len()).sum()
    }

    pub fn contains_swc(&self, swc_id: &str) -> bool {
        self.issues().any(|issue| issue.swc_id == swc_id)
    }

    pub fn issues_with_severity_at_least(
        &self,
        severity: Severity,
    ) -> impl Iterator<Item = &Issue> + '_ {
        self.issues().filter(move |issue| issue.severity >= severity)
    }

    fn issues(&self) -> impl Iterator<Item = &Issue> + '_ {
        self.reports.iter().flat_map(|report| report.issues.iter())
    }
}

impl From<Vec<IssueReport>> for DetectedIssuesResponse {
    fn from(reports: Vec<IssueReport>) -> Self {
        Self { reports }
    }
}

impl IntoIterator for DetectedIssuesResponse {
    type Item = IssueReport;
    type IntoIter = std::vec::IntoIter<IssueReport>;

    fn into_iter(self) -> Self::IntoIter {
        self.reports.into_iter()
    }
}

impl<'a> IntoIterator for &'a DetectedIssuesResponse {
    type Item = &'a IssueReport;
    type IntoIter = std::slice::Iter<'a, IssueReport>;

    fn into_iter(self) -> Self::IntoIter {
        self.reports.iter()
    }
}
