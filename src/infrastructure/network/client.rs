use crate::domain::error::{ApiError, ErrorResponse};
use crate::domain::traits::{RequestInterceptor, ResponseInterceptor};
use crate::infrastructure::config::ClientSettings;
use crate::infrastructure::network::http::create_client;
use crate::infrastructure::network::interceptors::{Passthrough, StatusLogger};
use reqwest::{Client, Method, Request, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// HTTP client bound to one base URL, with request and response hooks
/// around every call.
///
/// Cloning is cheap and clones share the connection pool.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    timeout: Duration,
    request_hooks: Vec<Arc<dyn RequestInterceptor>>,
    response_hooks: Vec<Arc<dyn ResponseInterceptor>>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("request_hooks", &self.request_hooks.len())
            .field("response_hooks", &self.response_hooks.len())
            .finish()
    }
}

pub struct ApiClientBuilder {
    settings: ClientSettings,
    default_hooks: bool,
    request_hooks: Vec<Arc<dyn RequestInterceptor>>,
    response_hooks: Vec<Arc<dyn ResponseInterceptor>>,
}

impl ApiClientBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.settings.timeout = timeout;
        self
    }

    /// Hooks run in registration order, after the default passthrough.
    pub fn request_interceptor(mut self, hook: impl RequestInterceptor + 'static) -> Self {
        self.request_hooks.push(Arc::new(hook));
        self
    }

    pub fn response_interceptor(mut self, hook: impl ResponseInterceptor + 'static) -> Self {
        self.response_hooks.push(Arc::new(hook));
        self
    }

    /// Drop the passthrough request hook and the status logger.
    pub fn without_default_interceptors(mut self) -> Self {
        self.default_hooks = false;
        self
    }

    pub fn build(self) -> Result<ApiClient, ApiError> {
        let http = create_client(&self.settings)?;

        let mut request_hooks: Vec<Arc<dyn RequestInterceptor>> = Vec::new();
        let mut response_hooks: Vec<Arc<dyn ResponseInterceptor>> = Vec::new();
        if self.default_hooks {
            request_hooks.push(Arc::new(Passthrough));
            response_hooks.push(Arc::new(StatusLogger));
        }
        request_hooks.extend(self.request_hooks);
        response_hooks.extend(self.response_hooks);

        Ok(ApiClient {
            http,
            base_url: self.settings.base_url,
            timeout: self.settings.timeout,
            request_hooks,
            response_hooks,
        })
    }
}

impl ApiClient {
    /// Client with the default hooks: passthrough request, status logger.
    pub fn new(settings: ClientSettings) -> Result<Self, ApiError> {
        Self::builder(settings).build()
    }

    pub fn builder(settings: ClientSettings) -> ApiClientBuilder {
        ApiClientBuilder {
            settings,
            default_hooks: true,
            request_hooks: Vec::new(),
            response_hooks: Vec::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Join `path` onto the base URL. Absolute URLs are used as given.
    pub fn url_for(&self, path: &str) -> Result<Url, ApiError> {
        let full = if is_absolute_url(path) {
            path.to_string()
        } else if path.is_empty() {
            self.base_url.clone()
        } else {
            format!(
                "{}/{}",
                self.base_url.trim_end_matches('/'),
                path.trim_start_matches('/')
            )
        };

        Url::parse(&full).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", full, e)))
    }

    /// Start a request against `path` for callers that need query
    /// parameters or extra headers. Send it with [`ApiClient::send`].
    pub fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        Ok(self.http.request(method, self.url_for(path)?))
    }

    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        self.execute(builder.build()?).await
    }

    pub async fn get(&self, path: &str) -> Result<Response, ApiError> {
        self.send(self.request(Method::GET, path)?).await
    }

    pub async fn delete(&self, path: &str) -> Result<Response, ApiError> {
        self.send(self.request(Method::DELETE, path)?).await
    }

    pub async fn head(&self, path: &str) -> Result<Response, ApiError> {
        self.send(self.request(Method::HEAD, path)?).await
    }

    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Response, ApiError> {
        self.send(self.request(Method::POST, path)?.json(body)).await
    }

    pub async fn put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Response, ApiError> {
        self.send(self.request(Method::PUT, path)?.json(body)).await
    }

    pub async fn patch<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Response, ApiError> {
        self.send(self.request(Method::PATCH, path)?.json(body)).await
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.get(path).await?;
        self.decode(response).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.post(path, body).await?;
        self.decode(response).await
    }

    async fn decode<T: DeserializeOwned>(&self, response: Response) -> Result<T, ApiError> {
        let body = response.bytes().await.map_err(|e| self.transport_error(e))?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Run a prepared request through the hooks and the network.
    pub async fn execute(&self, request: Request) -> Result<Response, ApiError> {
        let outcome = match self.prepare(request).await {
            Ok(request) => self.dispatch(request).await,
            Err(err) => {
                debug!(error = %err, "request rejected before dispatch");
                Err(err)
            }
        };

        self.complete(outcome).await
    }

    async fn prepare(&self, mut request: Request) -> Result<Request, ApiError> {
        for hook in &self.request_hooks {
            request = hook.on_request(request).await?;
        }
        Ok(request)
    }

    async fn dispatch(&self, request: Request) -> Result<Response, ApiError> {
        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, %url, "sending request");

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        debug!(%method, %url, status = status.as_u16(), "received response");

        if status.is_success() {
            Ok(response)
        } else {
            Err(error_response(response).await)
        }
    }

    async fn complete(&self, mut outcome: Result<Response, ApiError>) -> Result<Response, ApiError> {
        for hook in &self.response_hooks {
            outcome = match outcome {
                Ok(response) => hook.on_response(response).await,
                Err(err) => Err(hook.on_error(err).await),
            };
        }
        outcome
    }

    fn transport_error(&self, e: reqwest::Error) -> ApiError {
        if e.is_timeout() {
            ApiError::Timeout {
                timeout: self.timeout,
                source: e,
            }
        } else {
            ApiError::Http(e)
        }
    }
}

async fn error_response(response: Response) -> ApiError {
    let status = response.status();
    let url = response.url().clone();
    let headers = response.headers().clone();
    let body = match response.bytes().await {
        Ok(bytes) => bytes.to_vec(),
        Err(e) => {
            warn!(%url, error = %e, "failed to read error response body");
            Vec::new()
        }
    };

    ApiError::Status(Box::new(ErrorResponse {
        status,
        url,
        headers,
        body,
    }))
}

// `scheme://` or protocol-relative `//`
fn is_absolute_url(path: &str) -> bool {
    if path.starts_with("//") {
        return true;
    }
    match path.split_once("://") {
        Some((scheme, _)) => {
            let mut chars = scheme.chars();
            chars.next().is_some_and(|c| c.is_ascii_alphabetic())
                && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}
