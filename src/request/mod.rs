mod analysis_lookup;
mod analysis_mode;
mod analysis_submission;

pub use analysis_lookup::{AnalysisStatusRequest, DetectedIssuesRequest};
pub use analysis_mode::AnalysisMode;
pub use analysis_submission::{AnalysisSubmissionRequest, SourceFile};
