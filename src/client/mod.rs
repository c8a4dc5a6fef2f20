//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use serde_json::{Map, Value};
use tracing::{debug, warn};
use url::Url;

use crate::domain::{
    AccessToken, GatewayResponse, MessageId, PublicKey, SmsPayload, ValidationError,
};

const DEFAULT_BASE_URL: &str = "https://jusibe.com";
const CREDITS_PATH: &str = "smsapi/get_credits";
const SEND_SMS_PATH: &str = "smsapi/send_sms";
const DELIVERY_STATUS_PATH: &str = "smsapi/delivery_status";

const PUBLIC_KEY_ENV: &str = "JUSIBE_PUBLIC_KEY";
const ACCESS_TOKEN_ENV: &str = "JUSIBE_ACCESS_TOKEN";
const BASE_URL_ENV: &str = "JUSIBE_BASE_URL";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HttpMethod {
    Get,
    Post,
}

/// One outgoing call. Not `Debug`: it carries the access token.
#[derive(Clone)]
struct HttpRequest {
    method: HttpMethod,
    url: Url,
    query: Vec<(String, String)>,
    body: Option<Map<String, Value>>,
    username: String,
    password: String,
}

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn send<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn send<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let HttpRequest {
                method,
                url,
                query,
                body,
                username,
                password,
            } = request;

            let mut builder = match method {
                HttpMethod::Get => self.client.get(url),
                HttpMethod::Post => self.client.post(url),
            };
            if !query.is_empty() {
                builder = builder.query(&query);
            }
            if let Some(body) = body.as_ref() {
                builder = builder.json(body);
            }

            let response = builder
                .basic_auth(username, Some(password))
                .header(reqwest::header::ACCEPT, "application/json")
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Jusibe basic-auth credentials: public key as username, access token as password.
///
/// Both parts are required; construction fails with [`ValidationError::Missing`]
/// naming the absent part.
pub struct Credentials {
    public_key: PublicKey,
    access_token: AccessToken,
}

impl Credentials {
    /// Create validated credentials.
    pub fn new(
        public_key: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            public_key: PublicKey::new(public_key)?,
            access_token: AccessToken::new(access_token)?,
        })
    }

    /// Read `JUSIBE_PUBLIC_KEY` and `JUSIBE_ACCESS_TOKEN`, loading a `.env` file first if
    /// one is present. Unset variables count as missing.
    pub fn from_env() -> Result<Self, ValidationError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(env_var)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ValidationError> {
        Self::new(
            lookup(PUBLIC_KEY_ENV).unwrap_or_default(),
            lookup(ACCESS_TOKEN_ENV).unwrap_or_default(),
        )
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    pub fn access_token(&self) -> &AccessToken {
        &self.access_token
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`JusibeClient`].
///
/// Validation failures happen before any request is made. Everything else
/// comes from the HTTP exchange itself. A gateway answer carrying `error` or
/// `invalid_message_id` is not an error here; it is returned verbatim.
pub enum JusibeError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Response body was not a JSON object.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// The configured base URL could not be parsed.
    #[error("invalid base URL {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The base URL parses but cannot take endpoint paths (e.g. `mailto:`).
    #[error("base URL {url:?} cannot be used as a base for endpoint paths")]
    UnusableBaseUrl { url: String },

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone)]
/// Builder for [`JusibeClient`].
///
/// Use this when you need to customize the base URL, timeout, or user-agent.
pub struct JusibeClientBuilder {
    credentials: Credentials,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl JusibeClientBuilder {
    /// Create a builder with the default base URL and no timeout/user-agent override.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the gateway base URL.
    ///
    /// Endpoint paths are appended to its path; a query string is kept on every
    /// request and a fragment is dropped.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`JusibeClient`].
    pub fn build(self) -> Result<JusibeClient, JusibeError> {
        let base_url = normalize_base_url(&self.base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| JusibeError::Transport(Box::new(err)))?;

        Ok(JusibeClient::with_transport(
            self.credentials,
            base_url,
            Arc::new(ReqwestTransport { client }),
        ))
    }
}

fn parse_base_url(raw: &str) -> Result<Url, JusibeError> {
    let parsed = Url::parse(raw.trim()).map_err(|source| JusibeError::InvalidBaseUrl {
        url: raw.to_owned(),
        source,
    })?;
    if parsed.cannot_be_a_base() {
        return Err(JusibeError::UnusableBaseUrl {
            url: raw.to_owned(),
        });
    }
    Ok(parsed)
}

fn normalize_base_url(raw: &str) -> Result<String, JusibeError> {
    let mut parsed = parse_base_url(raw)?;
    parsed.set_fragment(None);
    Ok(parsed.into())
}

/// Append `path` segments to the base URL's path, keeping its query.
fn endpoint_url(base_url: &str, path: &str) -> Result<Url, JusibeError> {
    let mut url = parse_base_url(base_url)?;
    url.set_fragment(None);
    url.path_segments_mut()
        .map_err(|()| JusibeError::UnusableBaseUrl {
            url: base_url.to_owned(),
        })?
        .pop_if_empty()
        .extend(path.split('/').filter(|segment| !segment.is_empty()));
    Ok(url)
}

#[derive(Clone)]
/// High-level Jusibe client.
///
/// Every call sends the credentials as HTTP basic auth, performs exactly one
/// request, and returns the gateway's JSON object verbatim. The last parsed
/// response is also kept and can be read back with [`JusibeClient::response`];
/// clones share that slot.
pub struct JusibeClient {
    credentials: Credentials,
    base_url: String,
    http: Arc<dyn HttpTransport>,
    last_response: Arc<Mutex<Option<GatewayResponse>>>,
}

impl JusibeClient {
    /// Production gateway base URL.
    pub const BASE_URL: &'static str = DEFAULT_BASE_URL;

    /// Create a client using the default base URL.
    ///
    /// For more customization, use [`JusibeClient::builder`].
    pub fn new(credentials: Credentials) -> Self {
        Self::with_transport(
            credentials,
            DEFAULT_BASE_URL.to_owned(),
            Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        )
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> JusibeClientBuilder {
        JusibeClientBuilder::new(credentials)
    }

    /// Create a client from the environment (see [`Credentials::from_env`]).
    ///
    /// `JUSIBE_BASE_URL`, when set to a non-blank value, overrides the base URL.
    pub fn from_env() -> Result<Self, JusibeError> {
        let _ = dotenvy::dotenv();
        Self::builder_from_lookup(env_var)?.build()
    }

    fn builder_from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<JusibeClientBuilder, JusibeError> {
        let mut builder = Self::builder(Credentials::from_lookup(&lookup)?);
        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|it| !it.trim().is_empty()) {
            builder = builder.base_url(base_url);
        }
        Ok(builder)
    }

    fn with_transport(
        credentials: Credentials,
        base_url: String,
        http: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            credentials,
            base_url,
            http,
            last_response: Arc::new(Mutex::new(None)),
        }
    }

    pub fn public_key(&self) -> &PublicKey {
        self.credentials.public_key()
    }

    pub fn access_token(&self) -> &AccessToken {
        self.credentials.access_token()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Last successfully parsed gateway response, if any call has completed.
    pub fn response(&self) -> Option<GatewayResponse> {
        self.last_response.lock().clone()
    }

    /// Check the SMS credits left on the account (`sms_credits`).
    pub async fn check_available_credits(&self) -> Result<GatewayResponse, JusibeError> {
        self.execute(HttpMethod::Get, CREDITS_PATH, Vec::new(), None).await
    }

    /// Send one SMS as a JSON body. The response carries `status`, `message_id`,
    /// and `sms_credits_used`.
    pub async fn send_sms(&self, payload: &SmsPayload) -> Result<GatewayResponse, JusibeError> {
        let body = crate::transport::encode_send_sms_body(payload);
        self.execute(HttpMethod::Post, SEND_SMS_PATH, Vec::new(), Some(body)).await
    }

    /// Look up delivery status for a sent message.
    ///
    /// Unknown ids are reported by the gateway through `invalid_message_id`.
    pub async fn check_delivery_status(
        &self,
        message_id: &MessageId,
    ) -> Result<GatewayResponse, JusibeError> {
        let query = crate::transport::encode_delivery_status_query(message_id);
        self.execute(HttpMethod::Get, DELIVERY_STATUS_PATH, query, None).await
    }

    async fn execute(
        &self,
        method: HttpMethod,
        path: &'static str,
        query: Vec<(String, String)>,
        body: Option<Map<String, Value>>,
    ) -> Result<GatewayResponse, JusibeError> {
        let url = endpoint_url(&self.base_url, path)?;
        debug!(?method, %url, "sending gateway request");

        let request = HttpRequest {
            method,
            url,
            query,
            body,
            username: self.credentials.public_key().as_str().to_owned(),
            password: self.credentials.access_token().as_str().to_owned(),
        };

        let response = self.http.send(request).await.map_err(|err| {
            warn!(path, error = %err, "gateway request failed");
            JusibeError::Transport(err)
        })?;

        if !(200..=299).contains(&response.status) {
            warn!(status = response.status, path, "gateway returned non-success status");
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(JusibeError::HttpStatus {
                status: response.status,
                body,
            });
        }

        let parsed = crate::transport::decode_json_response(&response.body).map_err(|err| {
            warn!(path, error = %err, "gateway response could not be parsed");
            JusibeError::Parse(Box::new(err))
        })?;

        if parsed.is_error() {
            debug!(path, "gateway answered with an error object");
        }

        *self.last_response.lock() = Some(parsed.clone());
        Ok(parsed)
    }
}
