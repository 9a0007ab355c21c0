//! HTTP API client wrapping `gloo-net` for the status and logs endpoints.

use std::future::Future;

use botdash_app::config::ApiConfig;
use botdash_app::error::{Endpoint, FetchError};
use botdash_app::ports::DashboardApi;
use botdash_domain::log::LogBatch;
use botdash_domain::status::StatusSnapshot;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

/// [`DashboardApi`] backed by the browser `fetch`.
#[derive(Debug, Clone)]
pub struct HttpApi {
    status_endpoint: String,
    logs_endpoint: String,
}

impl HttpApi {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            status_endpoint: config.status_endpoint.clone(),
            logs_endpoint: config.logs_endpoint.clone(),
        }
    }
}

impl DashboardApi for HttpApi {
    fn fetch_status(&self) -> impl Future<Output = Result<StatusSnapshot, FetchError>> {
        let url = self.status_endpoint.clone();
        async move { get_json(&url, Endpoint::Status).await }
    }

    fn fetch_logs(&self) -> impl Future<Output = Result<LogBatch, FetchError>> {
        let url = self.logs_endpoint.clone();
        async move { get_json(&url, Endpoint::Logs).await }
    }
}

/// Check the HTTP response status; anything outside 2xx is a failure.
fn check_response(resp: Response, endpoint: Endpoint) -> Result<Response, FetchError> {
    if resp.ok() {
        return Ok(resp);
    }
    Err(FetchError::Status {
        endpoint,
        code: resp.status(),
    })
}

async fn get_json<T: DeserializeOwned>(url: &str, endpoint: Endpoint) -> Result<T, FetchError> {
    let resp = Request::get(url)
        .send()
        .await
        .map_err(|err| FetchError::Network {
            endpoint,
            message: err.to_string(),
        })?;
    let resp = check_response(resp, endpoint)?;
    resp.json::<T>().await.map_err(|err| FetchError::Decode {
        endpoint,
        message: err.to_string(),
    })
}
