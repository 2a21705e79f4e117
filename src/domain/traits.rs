use crate::domain::error::ApiError;
use async_trait::async_trait;
use reqwest::{Request, Response};

/// Hook run on every outgoing request before it is dispatched.
///
/// Returning an error aborts the call: the request is never sent and the
/// error is handed to the response error hooks, then to the caller.
#[async_trait]
pub trait RequestInterceptor: Send + Sync {
    async fn on_request(&self, request: Request) -> Result<Request, ApiError>;
}

/// Hook run on every completed call.
///
/// `on_response` sees 2xx responses only. `on_error` sees every failure
/// (non-2xx status, transport error, timeout, request hook failure) and
/// must hand an error back, so a hook can never turn a failure into a
/// success.
#[async_trait]
pub trait ResponseInterceptor: Send + Sync {
    async fn on_response(&self, response: Response) -> Result<Response, ApiError> {
        Ok(response)
    }

    async fn on_error(&self, error: ApiError) -> ApiError {
        error
    }
}
