use anyhow::anyhow;
use config::{Config, File};
use serde::{de::IgnoredAny, Deserialize};
use url::Url;

pub const DEFAULT_API_URL: &str = "https://api.mythx.io/";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub api: ApiSettings,

    pub config: IgnoredAny,
}

/// Location of the analysis API, used by the transport to resolve
/// [`Endpoint::url`](crate::Endpoint::url).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiSettings {
    pub url: Url,
    /// Request timeout in seconds.
    pub request_timeout: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            url: Url::parse(DEFAULT_API_URL).expect("valid url"),
            request_timeout: 30,
        }
    }
}

impl Settings {
    pub fn new() -> anyhow::Result<Self> {
        let config_path = std::env::var("ANALYSIS_MODELS__CONFIG");

        let mut builder = Config::builder();
        if let Ok(config_path) = config_path {
            builder = builder.add_source(File::with_name(&config_path));
        };
        builder = builder
            .add_source(config::Environment::with_prefix("ANALYSIS_MODELS").separator("__"));

        builder
            .build()?
            .try_deserialize()
            .map_err(|err| anyhow!(err))
    }
}
