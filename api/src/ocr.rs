//! # Document analysis — structured field extraction from a scanned image
//!
//! A thin single-shot client over the hosted Gemini `generateContent`
//! endpoint. One request carries the image bytes plus a fixed instruction
//! and asks for a strictly-typed JSON object back; one [`OcrResult`] comes
//! out. No retry, no timeout beyond the transport defaults, no rate
//! limiting — the caller surfaces failures to the user and leaves its draft
//! untouched.
//!
//! [`parse_payload`] is split from the transport so the schema-failure path
//! is testable without a network.

use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
const ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

const INSTRUCTION: &str = "Analyze this official document and extract the information with very high accuracy. If a field cannot be determined, leave its value empty.";

/// Fields extracted from one document image. The response schema requires
/// every key, but any individual value may be empty.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OcrResult {
    pub applicant_name: String,
    pub recipient: String,
    pub subject: String,
    /// `YYYY-MM-DD`, when the model could read one.
    pub date: String,
    pub full_text: String,
}

#[derive(Debug, Error)]
pub enum OcrError {
    #[error("document analysis failed: GEMINI_API_KEY is not set")]
    MissingApiKey,
    #[error("document analysis failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("document analysis failed: the service returned no candidate text")]
    EmptyResponse,
    #[error("document analysis failed: the response was not the expected JSON object")]
    Parse(#[source] serde_json::Error),
}

/// Response envelope for `generateContent`. Only the fields we read.
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Single-shot client for the hosted vision model.
#[derive(Clone, Debug)]
pub struct OcrClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl OcrClient {
    pub fn new(api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Build a client from the `GEMINI_API_KEY` environment variable.
    pub fn from_env() -> Result<Self, OcrError> {
        std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .map(Self::new)
            .ok_or(OcrError::MissingApiKey)
    }

    /// Extract the structured fields from one image, supplied as a data URI
    /// (a bare base64 payload is also accepted).
    pub async fn extract(&self, image: &str) -> Result<OcrResult, OcrError> {
        let payload = strip_data_uri(image);
        tracing::info!(model = %self.model, "requesting document analysis");

        let url = format!("{ENDPOINT}/{}:generateContent", self.model);
        let response: GenerateContentResponse = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body(payload))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let text = response
            .candidates
            .into_iter()
            .find_map(|candidate| {
                candidate
                    .content
                    .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
            })
            .ok_or(OcrError::EmptyResponse)?;

        parse_payload(&text)
    }
}

/// Strip the `data:<mime>;base64,` header from a data URI.
fn strip_data_uri(image: &str) -> &str {
    image.split_once(',').map(|(_, data)| data).unwrap_or(image)
}

/// The fixed request: one image part, one instruction part, and a response
/// schema of five required string fields.
fn request_body(image_base64: &str) -> serde_json::Value {
    json!({
        "contents": [{
            "parts": [
                { "inline_data": { "mime_type": "image/jpeg", "data": image_base64 } },
                { "text": INSTRUCTION }
            ]
        }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "applicantName": { "type": "STRING", "description": "Full name of the applicant" },
                    "recipient": { "type": "STRING", "description": "Authority the request is addressed to" },
                    "subject": { "type": "STRING", "description": "Subject of the letter or request" },
                    "date": { "type": "STRING", "description": "Date of the letter, formatted YYYY-MM-DD" },
                    "fullText": { "type": "STRING", "description": "Complete text extracted from the image" }
                },
                "required": ["applicantName", "recipient", "subject", "date", "fullText"]
            }
        }
    })
}

/// Parse the model's candidate text into an [`OcrResult`].
fn parse_payload(text: &str) -> Result<OcrResult, OcrError> {
    serde_json::from_str(text).map_err(OcrError::Parse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_payload_full_object() {
        let text = r#"{
            "applicantName": "Alice Karim",
            "recipient": "Ministry of Transport",
            "subject": "Road access permit",
            "date": "2026-01-15",
            "fullText": "To whom it may concern"
        }"#;
        let result = parse_payload(text).unwrap();
        assert_eq!(result.applicant_name, "Alice Karim");
        assert_eq!(result.date, "2026-01-15");
        assert_eq!(result.full_text, "To whom it may concern");
    }

    #[test]
    fn test_parse_payload_missing_fields_default_to_empty() {
        let result = parse_payload(r#"{"subject": "Permit"}"#).unwrap();
        assert_eq!(result.subject, "Permit");
        assert_eq!(result.applicant_name, "");
        assert_eq!(result.full_text, "");
    }

    #[test]
    fn test_parse_payload_rejects_invalid_json() {
        let err = parse_payload("I could not read the document").unwrap_err();
        assert!(matches!(err, OcrError::Parse(_)));
        assert!(err.to_string().starts_with("document analysis failed"));
    }

    #[test]
    fn test_strip_data_uri() {
        assert_eq!(strip_data_uri("data:image/jpeg;base64,QUJD"), "QUJD");
        assert_eq!(strip_data_uri("QUJD"), "QUJD");
    }

    #[test]
    fn test_request_body_schema_requires_five_strings() {
        let body = request_body("QUJD");
        let required = body["generationConfig"]["responseSchema"]["required"]
            .as_array()
            .unwrap();
        assert_eq!(required.len(), 5);
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(body["contents"][0]["parts"][0]["inline_data"]["data"], "QUJD");
    }
}
