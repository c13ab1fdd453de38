use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde::Serialize;
use serde_json::{Map, Value, json};

#[derive(Debug)]
pub struct ValidationError(String);

impl ValidationError {
    pub fn new(msg: &str) -> Self {
        ValidationError(msg.to_string())
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl actix_web::ResponseError for ValidationError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::BadRequest().json(json!({ "error": self.0 }))
    }
}

// Mirrors the UI contract: empty strings count as absent.
fn non_empty_string(body: &Value, field: &str) -> Option<String> {
    match body.get(field).and_then(Value::as_str) {
        Some(s) if !s.is_empty() => Some(s.to_string()),
        _ => None,
    }
}

#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(rename = "chatHistory")]
    pub chat_history: Vec<Value>,
    pub feature: String,
    pub language: String,
    pub image_url: Option<String>,
    pub document_url: Option<String>,
}

impl ChatRequest {
    /// Validates the inbound body and fills in defaults. The returned request
    /// always serializes every field, with absent attachments as nulls.
    pub fn from_value(body: &Value) -> Result<Self, ValidationError> {
        let message = match non_empty_string(body, "message") {
            Some(s) => s,
            None => {
                return Err(ValidationError::new(
                    "Message is required and must be a string",
                ));
            }
        };
        let chat_history = match body.get("chatHistory").and_then(Value::as_array) {
            Some(history) => history.clone(),
            None => {
                return Err(ValidationError::new(
                    "Chat history is required and must be an array",
                ));
            }
        };
        Ok(ChatRequest {
            message,
            chat_history,
            feature: non_empty_string(body, "feature").unwrap_or_else(|| "chat".to_string()),
            language: non_empty_string(body, "language").unwrap_or_else(|| "english".to_string()),
            image_url: non_empty_string(body, "image_url"),
            document_url: non_empty_string(body, "document_url"),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct DraftRequest {
    pub document_type: String,
    pub subject: String,
    pub parties: Vec<Value>,
    pub key_terms: Map<String, Value>,
    pub jurisdiction: String,
    pub language: String,
    pub additional_context: Option<String>,
}

impl DraftRequest {
    pub fn from_value(body: &Value) -> Result<Self, ValidationError> {
        let document_type = match non_empty_string(body, "document_type") {
            Some(s) => s,
            None => {
                return Err(ValidationError::new(
                    "Document type is required and must be a string",
                ));
            }
        };
        let subject = match non_empty_string(body, "subject") {
            Some(s) => s,
            None => {
                return Err(ValidationError::new(
                    "Subject is required and must be a string",
                ));
            }
        };
        let parties = match body.get("parties").and_then(Value::as_array) {
            Some(parties) => parties.clone(),
            None => {
                return Err(ValidationError::new(
                    "Parties is required and must be an array",
                ));
            }
        };
        let key_terms = match body.get("key_terms").and_then(Value::as_object) {
            Some(terms) => terms.clone(),
            None => {
                return Err(ValidationError::new(
                    "Key terms is required and must be an object",
                ));
            }
        };
        Ok(DraftRequest {
            document_type,
            subject,
            parties,
            key_terms,
            jurisdiction: non_empty_string(body, "jurisdiction")
                .unwrap_or_else(|| "India".to_string()),
            language: non_empty_string(body, "language").unwrap_or_else(|| "english".to_string()),
            additional_context: non_empty_string(body, "additional_context"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_rejects_missing_message() {
        let body = json!({ "chatHistory": [] });
        let err = ChatRequest::from_value(&body).unwrap_err();
        assert!(err.to_string().contains("Message"));
    }

    #[test]
    fn chat_rejects_non_string_message() {
        let body = json!({ "message": 42, "chatHistory": [] });
        assert!(ChatRequest::from_value(&body).is_err());
    }

    #[test]
    fn chat_rejects_missing_history() {
        let body = json!({ "message": "hello" });
        let err = ChatRequest::from_value(&body).unwrap_err();
        assert!(err.to_string().contains("Chat history"));
    }

    #[test]
    fn chat_rejects_non_array_history() {
        let body = json!({ "message": "hello", "chatHistory": "oops" });
        assert!(ChatRequest::from_value(&body).is_err());
    }

    #[test]
    fn chat_fills_defaults_and_nulls() {
        let body = json!({ "message": "hello", "chatHistory": [] });
        let req = ChatRequest::from_value(&body).unwrap();
        let normalized = serde_json::to_value(&req).unwrap();
        assert_eq!(normalized["feature"], "chat");
        assert_eq!(normalized["language"], "english");
        assert_eq!(normalized["image_url"], Value::Null);
        assert_eq!(normalized["document_url"], Value::Null);
        assert_eq!(normalized["chatHistory"], json!([]));
    }

    #[test]
    fn chat_passes_explicit_fields_through() {
        let body = json!({
            "message": "क्या किरायेदार को नोटिस चाहिए?",
            "chatHistory": [{ "role": "user", "content": "hi" }],
            "feature": "research",
            "language": "hindi",
            "image_url": "data:image/png;base64,AAAA"
        });
        let req = ChatRequest::from_value(&body).unwrap();
        assert_eq!(req.feature, "research");
        assert_eq!(req.language, "hindi");
        assert_eq!(req.image_url.as_deref(), Some("data:image/png;base64,AAAA"));
        assert!(req.document_url.is_none());
    }

    #[test]
    fn draft_rejects_each_missing_field() {
        let full = json!({
            "document_type": "rental_agreement",
            "subject": "Flat lease",
            "parties": ["A", "B"],
            "key_terms": { "rent": "15000" }
        });
        for (field, expect) in [
            ("document_type", "Document type"),
            ("subject", "Subject"),
            ("parties", "Parties"),
            ("key_terms", "Key terms"),
        ] {
            let mut body = full.clone();
            body.as_object_mut().unwrap().remove(field);
            let err = DraftRequest::from_value(&body).unwrap_err();
            assert!(err.to_string().contains(expect), "field {}", field);
        }
    }

    #[test]
    fn draft_rejects_array_key_terms() {
        let body = json!({
            "document_type": "nda",
            "subject": "Vendor NDA",
            "parties": ["A", "B"],
            "key_terms": ["term", "2 years"]
        });
        assert!(DraftRequest::from_value(&body).is_err());
    }

    #[test]
    fn draft_fills_defaults() {
        let body = json!({
            "document_type": "nda",
            "subject": "Vendor NDA",
            "parties": ["A", "B"],
            "key_terms": { "term": "2 years" }
        });
        let req = DraftRequest::from_value(&body).unwrap();
        let normalized = serde_json::to_value(&req).unwrap();
        assert_eq!(normalized["jurisdiction"], "India");
        assert_eq!(normalized["language"], "english");
        assert_eq!(normalized["additional_context"], Value::Null);
    }
}
