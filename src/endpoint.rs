use crate::{codec, ValidationError};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::{borrow::Cow, collections::BTreeMap, fmt::Debug};
use url::Url;

/// Describes how an API call should be sent by a transport client and
/// how its response body should be decoded.
///
/// Models only describe the call; sending it is up to the caller.
pub trait Endpoint {
    type Response: DeserializeOwned + Debug;

    /// The HTTP Method used for this endpoint (e.g. GET, POST)
    fn method(&self) -> reqwest::Method;

    /// The relative URL path for this endpoint
    fn path(&self) -> String;

    /// The set of headers to be sent with request. Defaults to empty.
    #[inline]
    fn headers(&self) -> reqwest::header::HeaderMap {
        reqwest::header::HeaderMap::new()
    }

    /// Query parameters of the request. Defaults to empty.
    #[inline]
    fn parameters(&self) -> BTreeMap<String, String> {
        BTreeMap::new()
    }

    /// The json document sent as the request body. Defaults to `None`.
    ///
    /// Models that have to be validated before being sent return
    /// the validation failure here.
    #[inline]
    fn payload(&self) -> Result<Option<Value>, ValidationError> {
        Ok(None)
    }

    /// The encoded request body.
    ///
    /// Implementors generally do not need to override this.
    fn body(&self) -> Result<Option<String>, ValidationError> {
        self.payload()?
            .map(|payload| codec::to_json_string(&payload))
            .transpose()
    }

    /// Builds and returns a formatted full URL, including query, for the endpoint.
    ///
    /// Implementors should generally not override this.
    fn url(&self, base_url: &Url) -> Result<Url, url::ParseError> {
        let mut url = base_url.join(&self.path())?;
        let parameters = self.parameters();
        if !parameters.is_empty() {
            url.set_query(serialize_query(&parameters).as_deref());
        }
        Ok(url)
    }

    /// If `body` is populated, indicates the body MIME type (defaults to JSON).
    fn content_type(&self) -> Cow<'static, str> {
        Cow::Borrowed("application/json")
    }

    /// Decodes a raw response body received by the transport.
    fn parse_response(&self, body: &str) -> Result<Self::Response, ValidationError> {
        codec::from_json_str(body)
    }
}

/// A utility function for serializing parameters into a URL query string.
#[inline]
pub fn serialize_query<Q: Serialize>(q: &Q) -> Option<String> {
    serde_urlencoded::to_string(q).ok()
}
