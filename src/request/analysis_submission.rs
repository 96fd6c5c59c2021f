use super::analysis_mode::{AnalysisMode, RequestedMode};
use crate::{codec, response::Analysis, Endpoint, ValidationError};
use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};
use serde_json::{json, Map, Value};
use serde_with::{serde_as, DisplayFromStr};
use std::{collections::BTreeMap, str::FromStr};

/// A single entry of the `sources` mapping.
///
/// Keys not known to the model are preserved as they are.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SourceFile {
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub ast: Option<Value>,
    #[serde(rename = "legacyAST", default)]
    pub legacy_ast: Option<Value>,
    /// Written after the typed fields. `source`, `ast` and `legacyAST` entries
    /// are never written from here; the typed fields own those keys.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

const SOURCE_FILE_KEYS: [&str; 3] = ["source", "ast", "legacyAST"];

impl Serialize for SourceFile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if let Some(source) = &self.source {
            map.serialize_entry("source", source)?;
        }
        if let Some(ast) = &self.ast {
            map.serialize_entry("ast", ast)?;
        }
        if let Some(legacy_ast) = &self.legacy_ast {
            map.serialize_entry("legacyAST", legacy_ast)?;
        }
        for (key, value) in &self.extra {
            if !SOURCE_FILE_KEYS.contains(&key.as_str()) {
                map.serialize_entry(key, value)?;
            }
        }
        map.end()
    }
}

impl SourceFile {
    pub fn from_source(source: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            ..Default::default()
        }
    }
}

/// A contract analysis job to be submitted to the API.
///
/// Construction never fails; the request is validated every time it is
/// turned into its wire form ([`to_dict`](Self::to_dict),
/// [`to_json`](Self::to_json), [`payload`](Endpoint::payload)).
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSubmissionRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    contract_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    bytecode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    main_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source_map: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    deployed_bytecode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    deployed_source_map: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    sources: BTreeMap<String, SourceFile>,
    #[serde(rename = "version", default, skip_serializing_if = "Option::is_none")]
    solc_version: Option<String>,
    #[serde_as(as = "DisplayFromStr")]
    #[serde(default)]
    analysis_mode: RequestedMode,
}

impl AnalysisSubmissionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(text: &str) -> Result<Self, ValidationError> {
        let request: Self = codec::from_json_str(text)?;
        request.validate()?;
        Ok(request)
    }

    pub fn from_dict(dict: Map<String, Value>) -> Result<Self, ValidationError> {
        let request: Self = codec::from_value(Value::Object(dict))?;
        request.validate()?;
        Ok(request)
    }

    pub fn to_dict(&self) -> Result<Map<String, Value>, ValidationError> {
        self.validate()?;
        codec::to_map(self)
    }

    pub fn to_json(&self) -> Result<String, ValidationError> {
        codec::to_json_string(&self.to_dict()?)
    }

    /// Checks the request invariants and returns the effective analysis mode.
    pub fn validate(&self) -> Result<AnalysisMode, ValidationError> {
        let mode = match &self.analysis_mode {
            RequestedMode::Known(mode) => *mode,
            RequestedMode::Unrecognized(value) => {
                tracing::debug!(mode = %value, "analysis submission rejected: unrecognized mode");
                return Err(ValidationError::InvalidAnalysisMode(value.clone()));
            }
        };

        let has_bytecode = self.bytecode.as_deref().is_some_and(|b| !b.is_empty());
        if !has_bytecode && self.sources.is_empty() {
            tracing::debug!("analysis submission rejected: neither bytecode nor sources are set");
            return Err(ValidationError::MissingInput);
        }

        Ok(mode)
    }
}

impl AnalysisSubmissionRequest {
    pub fn with_contract_name(mut self, value: impl Into<String>) -> Self {
        self.contract_name = Some(value.into());
        self
    }

    pub fn with_bytecode(mut self, value: impl Into<String>) -> Self {
        self.bytecode = Some(value.into());
        self
    }

    pub fn with_main_source(mut self, value: impl Into<String>) -> Self {
        self.main_source = Some(value.into());
        self
    }

    pub fn with_source_map(mut self, value: impl Into<String>) -> Self {
        self.source_map = Some(value.into());
        self
    }

    pub fn with_deployed_bytecode(mut self, value: impl Into<String>) -> Self {
        self.deployed_bytecode = Some(value.into());
        self
    }

    pub fn with_deployed_source_map(mut self, value: impl Into<String>) -> Self {
        self.deployed_source_map = Some(value.into());
        self
    }

    pub fn with_sources(mut self, sources: BTreeMap<String, SourceFile>) -> Self {
        self.sources = sources;
        self
    }

    pub fn with_source(mut self, key: impl Into<String>, file: SourceFile) -> Self {
        self.sources.insert(key.into(), file);
        self
    }

    pub fn with_solc_version(mut self, value: impl Into<String>) -> Self {
        self.solc_version = Some(value.into());
        self
    }

    /// Any value is accepted here; unrecognized ones fail on validation.
    pub fn with_analysis_mode(mut self, value: impl AsRef<str>) -> Self {
        self.set_analysis_mode(value);
        self
    }

    pub fn set_analysis_mode(&mut self, value: impl AsRef<str>) {
        self.analysis_mode = match RequestedMode::from_str(value.as_ref()) {
            Ok(mode) => mode,
            Err(infallible) => match infallible {},
        };
    }
}

impl AnalysisSubmissionRequest {
    pub fn contract_name(&self) -> Option<&str> {
        self.contract_name.as_deref()
    }

    pub fn bytecode(&self) -> Option<&str> {
        self.bytecode.as_deref()
    }

    pub fn main_source(&self) -> Option<&str> {
        self.main_source.as_deref()
    }

    pub fn source_map(&self) -> Option<&str> {
        self.source_map.as_deref()
    }

    pub fn deployed_bytecode(&self) -> Option<&str> {
        self.deployed_bytecode.as_deref()
    }

    pub fn deployed_source_map(&self) -> Option<&str> {
        self.deployed_source_map.as_deref()
    }

    pub fn sources(&self) -> &BTreeMap<String, SourceFile> {
        &self.sources
    }

    pub fn sources_mut(&mut self) -> &mut BTreeMap<String, SourceFile> {
        &mut self.sources
    }

    pub fn solc_version(&self) -> Option<&str> {
        self.solc_version.as_deref()
    }

    /// The mode as it will be sent: `quick` when not set, `standard` for legacy `full`.
    pub fn analysis_mode(&self) -> &str {
        self.analysis_mode.as_str()
    }
}

impl Endpoint for AnalysisSubmissionRequest {
    type Response = Analysis;

    fn method(&self) -> reqwest::Method {
        reqwest::Method::POST
    }

    fn path(&self) -> String {
        "v1/analyses".to_string()
    }

    fn payload(&self) -> Result<Option<Value>, ValidationError> {
        Ok(Some(json!({ "data": self.to_dict()? })))
    }
}
