use crate::{
    response::{Analysis, DetectedIssuesResponse},
    Endpoint,
};

/// Fetches the issues detected by a finished analysis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetectedIssuesRequest {
    pub uuid: String,
}

impl DetectedIssuesRequest {
    pub fn new(uuid: impl Into<String>) -> Self {
        Self { uuid: uuid.into() }
    }
}

impl Endpoint for DetectedIssuesRequest {
    type Response = DetectedIssuesResponse;

    fn method(&self) -> reqwest::Method {
        reqwest::Method::GET
    }

    fn path(&self) -> String {
        format!("v1/analyses/{}/issues", self.uuid)
    }
}

/// Fetches the current status of a submitted analysis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisStatusRequest {
    pub uuid: String,
}

impl AnalysisStatusRequest {
    pub fn new(uuid: impl Into<String>) -> Self {
        Self { uuid: uuid.into() }
    }
}

impl Endpoint for AnalysisStatusRequest {
    type Response = Analysis;

    fn method(&self) -> reqwest::Method {
        reqwest::Method::GET
    }

    fn path(&self) -> String {
        format!("v1/analyses/{}", self.uuid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use url::Url;

    const UUID: &str = "ab9092f7-54d0-480f-9b63-1bb1508280e2";

    #[test]
    fn detected_issues_url() {
        let base = Url::parse("https://api.mythx.io/").unwrap();
        let request = DetectedIssuesRequest::new(UUID);
        assert_eq!(request.method(), reqwest::Method::GET);
        assert_eq!(
            request.url(&base).unwrap().as_str(),
            format!("https://api.mythx.io/v1/analyses/{UUID}/issues")
        );
        assert_eq!(request.body().unwrap(), None);
    }

    #[test]
    fn analysis_status_url() {
        let base = Url::parse("https://api.mythx.io/").unwrap();
        let request = AnalysisStatusRequest::new(UUID);
        assert_eq!(
            request.url(&base).unwrap().as_str(),
            format!("https://api.mythx.io/v1/analyses/{UUID}")
        );
    }

    #[test]
    fn detected_issues_response_is_parsed() {
        let request = DetectedIssuesRequest::new(UUID);
        let response = request
            .parse_response(
                r#"[{"issues": [], "sourceType": "raw-bytecode", "sourceFormat": "evm-byzantium-bytecode", "sourceList": [], "meta": {}}]"#,
            )
            .unwrap();
        assert_eq!(response.len(), 1);
        assert_eq!(response.issue_count(), 0);
    }
}
