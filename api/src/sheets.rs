//! Best-effort mirroring of saved records to a spreadsheet webhook.

use store::Record;

/// POST `record` as JSON to the configured webhook endpoint.
///
/// An advisory task with no return channel: an empty endpoint is a no-op,
/// the response body is never inspected, and transport failures are logged
/// at debug level and dropped. Local persistence is the durability
/// boundary — callers must never gate a save on this call.
pub async fn forward_record(endpoint: &str, record: &Record) {
    if endpoint.is_empty() {
        return;
    }

    let client = reqwest::Client::new();
    match client.post(endpoint).json(record).send().await {
        Ok(response) => {
            tracing::debug!(status = %response.status(), id = %record.id, "record forwarded");
        }
        Err(err) => {
            tracing::debug!(id = %record.id, "record forward dropped: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_endpoint_is_a_no_op() {
        let record = Record {
            id: "1".to_string(),
            applicant_name: String::new(),
            recipient: String::new(),
            subject: String::new(),
            date: String::new(),
            notes: String::new(),
            ocr_text: String::new(),
            image_uri: "data:image/jpeg;base64,AAAA".to_string(),
            created_at: String::new(),
        };
        // Returns without attempting any request.
        forward_record("", &record).await;
    }
}
