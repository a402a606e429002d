//! Request and response descriptors passed through the pipeline.

use finbrain_types::QueryParams;
use std::fmt;
use std::time::Duration;

/// Name of the query parameter carrying the API token.
pub const TOKEN_PARAM: &str = "token";

/// HTTP method of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    /// `GET`, used by every FinBrain endpoint.
    #[default]
    Get,
}

impl Method {
    /// Get the method name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
        }
    }
}

/// A call to one endpoint: method, relative path and query parameters.
///
/// The path is already assembled and percent-encoded, e.g.
/// `sentiments/S%26P%20500/AMZN`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    method: Method,
    path: String,
    params: QueryParams,
}

impl Request {
    /// Create a `GET` request without query parameters.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            params: QueryParams::new(),
        }
    }

    /// Replace the query parameters.
    #[must_use]
    pub fn with_params(mut self, params: QueryParams) -> Self {
        self.params = params;
        self
    }

    /// The HTTP method.
    pub const fn method(&self) -> Method {
        self.method
    }

    /// The path relative to the base URL.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The caller's query parameters.
    pub const fn params(&self) -> &QueryParams {
        &self.params
    }
}

/// A request resolved against the client configuration.
///
/// This is what a transport receives: the absolute URL, the caller's query
/// parameters, the credential and the timeout.
#[derive(Clone)]
pub struct PreparedRequest {
    pub(crate) method: Method,
    pub(crate) url: String,
    pub(crate) path: String,
    pub(crate) params: QueryParams,
    pub(crate) token: String,
    pub(crate) timeout: Duration,
}

impl PreparedRequest {
    /// The HTTP method.
    pub const fn method(&self) -> Method {
        self.method
    }

    /// The absolute URL without query string.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The path relative to the base URL.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The caller's query parameters, without the credential.
    pub const fn params(&self) -> &QueryParams {
        &self.params
    }

    /// The API token sent with the request.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Timeout for the whole request.
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Every query pair to send, credential last.
    pub fn query_pairs(&self) -> Vec<(&str, &str)> {
        self.params
            .iter()
            .chain(std::iter::once((TOKEN_PARAM, self.token.as_str())))
            .collect()
    }
}

impl fmt::Debug for PreparedRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreparedRequest")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("params", &self.params)
            .field("token", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Raw HTTP response as returned by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    status: u16,
    body: String,
    retry_after: Option<Duration>,
}

impl HttpResponse {
    /// Create a response from a status code and body text.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            retry_after: None,
        }
    }

    /// Attach the delay from a `Retry-After` header.
    #[must_use]
    pub const fn with_retry_after(mut self, retry_after: Option<Duration>) -> Self {
        self.retry_after = retry_after;
        self
    }

    /// HTTP status code.
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Body text.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Delay requested by the server, if any.
    pub const fn retry_after(&self) -> Option<Duration> {
        self.retry_after
    }

    pub(crate) fn into_parts(self) -> (u16, String, Option<Duration>) {
        (self.status, self.body, self.retry_after)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let mut params = QueryParams::new();
        params.insert("days", "10");
        let request = Request::get("sentiments/sp500/AMZN").with_params(params);

        assert_eq!(request.method(), Method::Get);
        assert_eq!(request.path(), "sentiments/sp500/AMZN");
        assert_eq!(request.params().get("days"), Some("10"));
    }

    #[test]
    fn test_query_pairs_end_with_token() {
        let mut params = QueryParams::new();
        params.insert("dateTo", "2024-02-02");
        params.insert("dateFrom", "2024-01-01");
        let prepared = PreparedRequest {
            method: Method::Get,
            url: "https://api.finbrain.tech/v1/housetrades/sp500/AMZN".to_string(),
            path: "housetrades/sp500/AMZN".to_string(),
            params,
            token: "secret".to_string(),
            timeout: Duration::from_secs(5),
        };

        assert_eq!(
            prepared.query_pairs(),
            vec![
                ("dateFrom", "2024-01-01"),
                ("dateTo", "2024-02-02"),
                ("token", "secret"),
            ]
        );
        assert!(!format!("{prepared:?}").contains("secret"));
    }

    #[test]
    fn test_method_conversion() {
        assert_eq!(reqwest::Method::from(Method::Get), reqwest::Method::GET);
        assert_eq!(Method::Get.to_string(), "GET");
    }
}
