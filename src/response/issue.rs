use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Severity of a detected issue, ordered from the least to the most severe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    None,
    Unknown,
    Low,
    Medium,
    High,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceType {
    RawBytecode,
    EthereumAddress,
    SolidityContract,
    SolidityFile,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceFormat {
    #[serde(rename = "text")]
    Text,
    #[serde(rename = "solc-ast-legacy-json")]
    SolcAstLegacyJson,
    #[serde(rename = "solc-ast-compact-json")]
    SolcAstCompactJson,
    #[serde(rename = "evm-byzantium-bytecode")]
    EvmByzantiumBytecode,
    #[serde(rename = "evm-petersburg-bytecode")]
    EvmPetersburgBytecode,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IssueDescription {
    pub head: String,
    pub tail: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SourceLocation {
    /// `offset:length:file_index` triple in the solc source map format.
    pub source_map: String,
    pub source_type: SourceType,
    pub source_format: SourceFormat,
    pub source_list: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LineLocation {
    pub line: u64,
    pub column: u64,
}

/// Start and end of an issue in the source text; encoded as a two element array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedLocation(pub LineLocation, pub LineLocation);

impl DecodedLocation {
    pub fn start(&self) -> &LineLocation {
        &self.0
    }

    pub fn end(&self) -> &LineLocation {
        &self.1
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Issue {
    #[serde(rename = "swcID")]
    pub swc_id: String,
    #[serde(rename = "swcTitle")]
    pub swc_title: String,
    pub description: IssueDescription,
    pub severity: Severity,
    pub locations: Vec<SourceLocation>,
    pub extra: Map<String, Value>,
    /// Absent key is `None`; an explicit `null` is `Some(None)` and is written back as `null`.
    #[serde(
        rename = "decodedLocations",
        default,
        with = "::serde_with::rust::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub decoded_locations: Option<Option<Vec<DecodedLocation>>>,
}

impl Issue {
    pub fn decoded_locations(&self) -> &[DecodedLocation] {
        self.decoded_locations
            .as_ref()
            .and_then(Option::as_deref)
            .unwrap_or_default()
    }
}
