pub mod codec;
mod endpoint;
mod error;
pub mod request;
pub mod response;
mod settings;

pub use endpoint::{serialize_query, Endpoint};
pub use error::ValidationError;
pub use request::{
    AnalysisMode, AnalysisStatusRequest, AnalysisSubmissionRequest, DetectedIssuesRequest,
    SourceFile,
};
pub use response::{DetectedIssuesResponse, Issue, IssueReport};
pub use settings::{ApiSettings, Settings, DEFAULT_API_URL};
