use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use crate::client::FetchError;
use crate::models::SystemRecord;
use crate::{API_BASE_URL, DEFAULT_FETCH_TIMEOUT_MS};
use std::fs::OpenOptions;
use std::io::Write;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Clone)]
pub struct SystemIntelClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
    api_logging: bool,
    api_log_path: String,
}

impl SystemIntelClient {
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| FetchError::InvalidRequest(e.to_string()))?;

        Ok(SystemIntelClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_millis(DEFAULT_FETCH_TIMEOUT_MS),
            api_logging: false,
            api_log_path: "api_debug.log".to_string(),
        })
    }

    /// Client against the public intel API
    pub fn public() -> Result<Self, FetchError> {
        Self::new(API_BASE_URL)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn set_api_logging(&mut self, logging: bool, log_path: &str) {
        self.api_logging = logging;
        self.api_log_path = log_path.to_string();
    }

    /// `{base}/system/{name}` with the name inserted as given.
    pub fn system_url(&self, system_name: &str) -> String {
        format!("{}/system/{}", self.base_url, system_name)
    }

    fn log_api_call(&self, method: &str, url: &str, response_status: u16, response_body: Option<&str>) {
        if !self.api_logging {
            return;
        }

        let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
        let log_entry = format!(
            "\n=== API CALL [{timestamp}] ===\n\
             Method: {method}\n\
             URL: {url}\n\
             Response Status: {response_status}\n\
             Response Body: {response_body}\n\
             ========================================\n",
            timestamp = timestamp,
            method = method,
            url = url,
            response_status = response_status,
            response_body = response_body.unwrap_or("Not captured")
        );

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.api_log_path)
        {
            Ok(mut file) => {
                if let Err(e) = file.write_all(log_entry.as_bytes()) {
                    warn!("could not write API log {}: {}", self.api_log_path, e);
                }
            }
            Err(e) => warn!("could not open API log {}: {}", self.api_log_path, e),
        }
    }

    /// GET `url`, giving up once `timeout` elapses before a response arrives.
    ///
    /// Elapsing drops the in-flight request. Any status is returned as-is; the
    /// caller decides what a non-2xx response means.
    pub async fn fetch_with_timeout(&self, url: &str, timeout: Duration) -> Result<reqwest::Response, FetchError> {
        debug!("GET {} (timeout {}ms)", url, timeout.as_millis());

        match tokio::time::timeout(timeout, self.client.get(url).send()).await {
            Ok(Ok(response)) => Ok(response),
            Ok(Err(e)) => {
                let err = FetchError::from_transport(e);
                warn!("GET {} failed: {:?}", url, err);
                Err(err)
            }
            Err(_) => {
                warn!("GET {} aborted after {}ms", url, timeout.as_millis());
                Err(FetchError::Timeout)
            }
        }
    }

    // System operations
    pub async fn get_system(&self, system_name: &str) -> Result<SystemRecord, FetchError> {
        let url = self.system_url(system_name);
        let response = self.fetch_with_timeout(&url, self.timeout).await?;
        let status = response.status().as_u16();

        if !response.status().is_success() {
            let error_body = response.text().await.unwrap_or_else(|_| "Could not read response".to_string());
            self.log_api_call("GET", &url, status, Some(&error_body));
            return Err(FetchError::HttpStatus(status));
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| FetchError::DecodeFailure(e.to_string()))?;
        self.log_api_call("GET", &url, status, Some(&response_text));

        let record: SystemRecord = serde_json::from_str(&response_text)?;
        debug!("decoded system {} ({})", record.system_name, record.system_id);
        Ok(record)
    }
}
