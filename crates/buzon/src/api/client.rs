//! JSON-over-HTTP client implementation.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};

use crate::auth::AccessToken;
use crate::error::{Error, InvalidInputError, ParseError, ServerError, TransportError};
use crate::types::BaseUrl;

use super::endpoints::JSON_UTF8;

/// HTTP client for the message server.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base: BaseUrl,
    timeout: Option<Duration>,
}

impl ApiClient {
    /// Create a new client for the given base URL.
    ///
    /// With `timeout` set to `None` requests may wait indefinitely.
    pub fn new(base: BaseUrl, timeout: Option<Duration>) -> Result<Self, Error> {
        let mut builder =
            reqwest::Client::builder().user_agent(concat!("buzon/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base,
            timeout,
        })
    }

    /// Returns the base URL this client is configured for.
    pub fn base(&self) -> &BaseUrl {
        &self.base
    }

    /// POST a JSON body without credentials and decode a 200 JSON response.
    ///
    /// The body is not recorded in the span; it carries the login secret.
    #[instrument(skip(self, body), fields(base = %self.base))]
    pub async fn post_json<B, R>(&self, path: &'static str, body: &B) -> Result<R, Error>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let url = self.base.endpoint(path);
        debug!(%url, "POST");

        let body = serde_json::to_vec(body).map_err(|e| InvalidInputError::Other {
            message: format!("request body could not be encoded: {e}"),
        })?;

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, JSON_UTF8)
            .body(body)
            .send()
            .await
            .map_err(|e| self.transport(e))?;

        self.handle_response(path, response).await
    }

    /// GET with a bearer token and query parameters, decoding a 200 JSON response.
    #[instrument(skip(self, token), fields(base = %self.base))]
    pub async fn get_authed<Q, R>(
        &self,
        path: &'static str,
        params: &Q,
        token: &AccessToken,
    ) -> Result<R, Error>
    where
        Q: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        let url = self.base.endpoint(path);
        debug!(%url, "authenticated GET");
        trace!(?params, "query parameters");

        let response = self
            .client
            .get(&url)
            .query(params)
            .headers(auth_headers(token)?)
            .send()
            .await
            .map_err(|e| self.transport(e))?;

        self.handle_response(path, response).await
    }

    /// Turn a 200 response into `R`, anything else into the matching error.
    async fn handle_response<R: DeserializeOwned>(
        &self,
        path: &'static str,
        response: reqwest::Response,
    ) -> Result<R, Error> {
        let status = response.status();
        trace!(status = %status, "response");

        let text = response.text().await.map_err(|e| self.transport(e))?;

        match status {
            StatusCode::OK => {
                serde_json::from_str(&text).map_err(|e| Error::from(ParseError::new(path, e)))
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(Error::Unauthorized {
                status: status.as_u16(),
            }),
            _ => Err(ServerError::new(status.as_u16(), text).into()),
        }
    }

    fn transport(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            TransportError::Timeout {
                duration_ms: self.timeout.map_or(0, |t| t.as_millis() as u64),
            }
            .into()
        } else {
            err.into()
        }
    }
}

/// Create the headers for an authenticated request.
fn auth_headers(token: &AccessToken) -> Result<HeaderMap, Error> {
    let mut headers = HeaderMap::new();
    let auth_value = HeaderValue::from_str(&token.bearer()).map_err(|_| InvalidInputError::Token)?;
    headers.insert(AUTHORIZATION, auth_value);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_UTF8));
    Ok(headers)
}
