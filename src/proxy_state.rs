use crate::backend::BackendInfo;
use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde_json::{Value, json};

#[derive(Debug, Clone)]
pub struct ProxyConfig {
    pub host: String,
    pub port: u16,
    pub backend_url: String,
    pub timeout: u64,
}

#[derive(Debug, Clone)]
pub struct ProxyState {
    pub backend: BackendInfo,
    pub client: reqwest::Client,
}

/// The fixed response for anything unexpected: unreachable backend, malformed
/// JSON in either direction. Callers only ever see the generic message.
pub fn internal_error() -> HttpResponse {
    HttpResponse::InternalServerError().json(json!({ "error": "Internal server error" }))
}

impl ProxyState {
    pub fn new(config: ProxyConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            backend: BackendInfo::new(config.backend_url),
            client,
        })
    }

    /// Issues the single outbound POST and maps the outcome to the gateway's
    /// response contract: backend status passthrough with a wrapping message
    /// on non-success, verbatim JSON relay on success, generic 500 otherwise.
    pub async fn forward(&self, api_path: &str, request: &Value) -> HttpResponse {
        let url = self.backend.api_path(api_path);
        let resp = match self.client.post(&url).json(request).send().await {
            Ok(resp) => resp,
            Err(e) => {
                log::error!("Failed to reach backend at {}: {}", url, e);
                return internal_error();
            }
        };
        let status = resp.status();
        if !status.is_success() {
            let error_text = resp.text().await.unwrap_or_default();
            log::error!("Backend error on {}: {} {}", api_path, status, error_text);
            let status = StatusCode::from_u16(status.as_u16())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            return HttpResponse::build(status).json(json!({
                "error": format!(
                    "Backend error: {} {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("")
                )
            }));
        }
        match resp.json::<Value>().await {
            Ok(data) => HttpResponse::Ok().json(data),
            Err(e) => {
                log::error!("Failed to parse backend response on {}: {}", api_path, e);
                internal_error()
            }
        }
    }
}
