use crate::error::{DeserializationError, HttpError, SyncError, TransportError};
use reqwest::header::HeaderName;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use snafu::ResultExt;
use std::time::Duration;

/// Every outbound call is bounded; a marketplace that stops answering must
/// not hang the caller indefinitely.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone, Debug)]
pub enum RequestAuth {
    Basic { user: String, password: String },
    Bearer(String),
}

#[derive(Clone, Debug)]
pub enum RequestBody {
    Json(Value),
    Form(Vec<(&'static str, String)>),
    Empty,
}

#[derive(Clone, Debug)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub auth: RequestAuth,
    pub headers: Vec<(&'static str, String)>,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn new(method: Method, url: String, auth: RequestAuth) -> ApiRequest {
        ApiRequest {
            method,
            url,
            auth,
            headers: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn with_json(mut self, body: Value) -> ApiRequest {
        self.body = RequestBody::Json(body);
        self
    }

    pub fn with_form(mut self, fields: Vec<(&'static str, String)>) -> ApiRequest {
        self.body = RequestBody::Form(fields);
        self
    }

    pub fn with_header(mut self, name: &'static str, value: String) -> ApiRequest {
        self.headers.push((name, value));
        self
    }
}

#[derive(Clone, Debug)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, SyncError> {
        serde_json::from_str(&self.body).context(DeserializationError {
            body: self.body.clone(),
        })
    }

    /// Raw JSON view of the body. Endpoints that acknowledge with an empty
    /// body (inventory upsert and delete) yield `Value::Null`.
    pub fn json_value(&self) -> Result<Value, SyncError> {
        if self.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        self.json()
    }
}

/// Seam between the clients and the wire. Production code goes through
/// `HttpTransport`; tests substitute `TestTransport` to script responses and
/// record the calls that were made.
pub trait Transport {
    fn dispatch(&self, request: ApiRequest) -> Result<ApiResponse, SyncError>;

    fn box_clone(&self) -> Box<dyn Transport + Send + Sync>;
}

impl Clone for Box<dyn Transport + Send + Sync> {
    fn clone(&self) -> Self {
        self.box_clone()
    }
}

#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<HttpTransport, SyncError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context(TransportError)?;
        Ok(HttpTransport { client })
    }
}

impl Transport for HttpTransport {
    fn dispatch(&self, request: ApiRequest) -> Result<ApiResponse, SyncError> {
        let ApiRequest {
            method,
            url,
            auth,
            headers,
            body,
        } = request;

        let mut builder = self.client.request(method, &url);
        builder = match auth {
            RequestAuth::Basic { user, password } => builder.basic_auth(user, Some(password)),
            RequestAuth::Bearer(token) => builder.bearer_auth(token),
        };
        for (name, value) in headers {
            builder = builder.header(HeaderName::from_static(name), value.as_str());
        }
        builder = match body {
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Form(fields) => builder.form(&fields),
            RequestBody::Empty => builder,
        };

        let mut response = builder.send().context(HttpError { url: url.clone() })?;
        let status = response.status();
        let body = response.text().context(HttpError { url })?;
        Ok(ApiResponse { status, body })
    }

    fn box_clone(&self) -> Box<dyn Transport + Send + Sync> {
        Box::new(self.clone())
    }
}
