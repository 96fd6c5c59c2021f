mod analysis;
mod issue;
mod issue_report;

pub use analysis::{Analysis, AnalysisStatus};
pub use issue::{
    DecodedLocation, Issue, IssueDescription, LineLocation, Severity, SourceFormat,
    SourceLocation, SourceType,
};
pub use issue_report::{DetectedIssuesResponse, IssueReport};
