use serde::{Deserialize, Serialize};
use std::{convert::Infallible, fmt, str::FromStr};

/// Intensity level of a requested scan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    #[default]
    Quick,
    #[serde(alias = "full")]
    Standard,
    Deep,
}

impl AnalysisMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisMode::Quick => "quick",
            AnalysisMode::Standard => "standard",
            AnalysisMode::Deep => "deep",
        }
    }
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalysisMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quick" => Ok(AnalysisMode::Quick),
            // legacy name of the standard mode
            "standard" | "full" => Ok(AnalysisMode::Standard),
            "deep" => Ok(AnalysisMode::Deep),
            other => Err(format!("unrecognized analysis mode: {other}")),
        }
    }
}

/// Mode as it was assigned to a request. Unrecognized values are kept
/// until the request is validated.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) enum RequestedMode {
    Known(AnalysisMode),
    Unrecognized(String),
}

impl RequestedMode {
    pub fn as_str(&self) -> &str {
        match self {
            RequestedMode::Known(mode) => mode.as_str(),
            RequestedMode::Unrecognized(value) => value,
        }
    }
}

impl Default for RequestedMode {
    fn default() -> Self {
        RequestedMode::Known(AnalysisMode::default())
    }
}

impl fmt::Display for RequestedMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestedMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(AnalysisMode::from_str(s)
            .map(RequestedMode::Known)
            .unwrap_or_else(|_| RequestedMode::Unrecognized(s.to_string())))
    }
}

impl From<AnalysisMode> for RequestedMode {
    fn from(mode: AnalysisMode) -> Self {
        RequestedMode::Known(mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("quick", AnalysisMode::Quick)]
    #[case("standard", AnalysisMode::Standard)]
    #[case("full", AnalysisMode::Standard)]
    #[case("deep", AnalysisMode::Deep)]
    fn parses_known_modes(#[case] value: &str, #[case] expected: AnalysisMode) {
        assert_eq!(AnalysisMode::from_str(value).unwrap(), expected);
        assert_eq!(
            RequestedMode::from_str(value).unwrap(),
            RequestedMode::Known(expected)
        );
    }

    #[rstest]
    #[case("invalid")]
    #[case("Quick")]
    #[case("FULL")]
    #[case("")]
    fn keeps_unrecognized_modes(#[case] value: &str) {
        assert!(AnalysisMode::from_str(value).is_err());
        let requested = RequestedMode::from_str(value).unwrap();
        assert_eq!(requested, RequestedMode::Unrecognized(value.to_string()));
        assert_eq!(requested.as_str(), value);
    }

    #[test]
    fn full_is_displayed_as_standard() {
        let requested = RequestedMode::from_str("full").unwrap();
        assert_eq!(requested.to_string(), "standard");
    }

    #[test]
    fn serde_accepts_legacy_name() {
        let mode: AnalysisMode = serde_json::from_str("\"full\"").unwrap();
        assert_eq!(mode, AnalysisMode::Standard);
        assert_eq!(serde_json::to_string(&mode).unwrap(), "\"standard\"");
    }
}
