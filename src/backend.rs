/// Address of the external legal-AI service. The gateway never inspects what
/// the backend returns beyond status and JSON well-formedness.
#[derive(Debug, Clone)]
pub struct BackendInfo {
    pub url: String,
}

impl BackendInfo {
    pub fn new(url: String) -> Self {
        BackendInfo {
            url: url.trim_end_matches('/').to_string(),
        }
    }

    pub fn api_path(&self, api_path: &str) -> String {
        if api_path.starts_with("/") {
            format!("{}{}", self.url, api_path)
        } else {
            format!("{}/{}", self.url, api_path)
        }
    }
}

impl std::fmt::Display for BackendInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.url)
    }
}
