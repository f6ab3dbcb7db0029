//! HTTP transport for MFL requests.

use reqwest::{
    header::{HeaderMap, HeaderValue, COOKIE},
    Client,
};
use serde_json::Value;
use tracing::debug;

use crate::Result;


const USER_AGENT: &str = "mfl-api/0.1";

/// Status code and body of one HTTP exchange, exactly as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    status_code: u16,
    body: String,
}

impl RawResponse {
    pub fn new(status_code: u16, body: impl Into<String>) -> Self {
        Self {
            status_code,
            body: body.into(),
        }
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Parse the body as JSON. Parsed fresh on every call.
    pub fn json(&self) -> Result<Value> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Anything that can POST a form to MFL.
///
/// The session only depends on this contract, so tests can swap the network
/// out for a canned responder.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post(
        &self,
        url: &str,
        form: &[(String, String)],
        cookies: &[(String, String)],
    ) -> Result<RawResponse>;
}

/// Build a `Cookie` header from name/value pairs.
///
/// Returns an empty map when there are no cookies (unauthenticated requests).
pub fn cookie_header_map(cookies: &[(String, String)]) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    if cookies.is_empty() {
        return Ok(h);
    }
    let cookie = cookies
        .iter()
        .map(|(name, value)| format!("{}={}", name, value))
        .collect::<Vec<_>>()
        .join("; ");
    h.insert(COOKIE, HeaderValue::from_str(&cookie)?);
    Ok(h)
}

/// reqwest-backed transport used outside of tests.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }

    /// Use a caller-configured client (timeouts, proxies, user agent).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    async fn post(
        &self,
        url: &str,
        form: &[(String, String)],
        cookies: &[(String, String)],
    ) -> Result<RawResponse> {
        let headers = cookie_header_map(cookies)?;
        let fields: Vec<&str> = form.iter().map(|(k, _)| k.as_str()).collect();
        debug!(url, ?fields, authenticated = !cookies.is_empty(), "POST");

        let response = self
            .client
            .post(url)
            .headers(headers)
            .form(form)
            .send()
            .await?;
        let status_code = response.status().as_u16();
        let body = response.text().await?;

        debug!(status_code, bytes = body.len(), "MFL response received");
        Ok(RawResponse::new(status_code, body))
    }
}
