//! # Domain models for the archive
//!
//! The three persisted shapes and the transient helpers around them. All
//! structs are `Serialize + Deserialize` with camelCase wire names, so the
//! same serialization serves the persisted files and the webhook body.
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Record`] | One archived request: extracted metadata, free-text notes, the full OCR reading, and the source scan as a data URI. Immutable once created. |
//! | [`SessionUser`] | The authenticated actor — display label plus [`Role`]. Zero or one exists at a time. |
//! | [`AppSettings`] | UI configuration — sync endpoint, accent color, system name, auto-fill flag. Exactly one exists; defaults apply when nothing usable is persisted. |

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// One archived request entry with its extracted metadata and source image.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Opaque, time-based identifier, unique within the collection.
    pub id: String,
    pub applicant_name: String,
    /// Authority the request is addressed to.
    pub recipient: String,
    pub subject: String,
    /// Calendar date of the request, `YYYY-MM-DD`.
    pub date: String,
    pub notes: String,
    /// Full text read from the scan by the vision model.
    pub ocr_text: String,
    /// Source scan as a `data:` URI. Required before a record may be created.
    pub image_uri: String,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

impl Record {
    /// Case-insensitive substring match over the searchable fields:
    /// applicant, subject, OCR text, recipient.
    pub fn matches_query(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.applicant_name.to_lowercase().contains(&q)
            || self.subject.to_lowercase().contains(&q)
            || self.ocr_text.to_lowercase().contains(&q)
            || self.recipient.to_lowercase().contains(&q)
    }
}

/// Filter a collection by a search query. An empty query returns the whole
/// collection, preserving order.
pub fn search_records<'a>(records: &'a [Record], query: &str) -> Vec<&'a Record> {
    if query.is_empty() {
        return records.iter().collect();
    }
    records.iter().filter(|r| r.matches_query(query)).collect()
}

/// Role tag carried by a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Staff,
}

impl Role {
    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin)
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Staff => "staff",
        }
    }
}

/// The currently authenticated actor. At most one session exists at a time;
/// it is created on a credential match and destroyed on logout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub username: String,
    pub role: Role,
}

pub const DEFAULT_ACCENT_COLOR: &str = "#10b981";
pub const DEFAULT_SYSTEM_NAME: &str = "Ministerial Archive System";

/// UI configuration. Replaced wholesale on every save; a missing or
/// unparsable persisted value is equivalent to [`AppSettings::default`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    /// Spreadsheet webhook endpoint. Empty disables remote sync.
    pub sheets_url: String,
    /// Accent color as a `#rrggbb` hex string.
    pub accent_color: String,
    /// Display name shown across the UI.
    pub system_name: String,
    /// Whether the add screen offers AI auto-fill.
    pub auto_fill: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            sheets_url: String::new(),
            accent_color: DEFAULT_ACCENT_COLOR.to_string(),
            system_name: DEFAULT_SYSTEM_NAME.to_string(),
            auto_fill: true,
        }
    }
}

impl AppSettings {
    /// Semi-transparent tint of the accent color for subtle backgrounds.
    /// Falls back to a neutral slate tint when the hex value does not parse.
    pub fn accent_soft(&self) -> String {
        parse_hex_color(&self.accent_color)
            .map(|(r, g, b)| format!("rgba({r}, {g}, {b}, 0.12)"))
            .unwrap_or_else(|| "rgba(100, 116, 139, 0.12)".to_string())
    }
}

fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Allocate an identifier for a new record: millisecond-resolution wall
/// clock, matching the time-based ids already in the collection.
pub fn next_record_id() -> String {
    Utc::now().timestamp_millis().to_string()
}

/// Today's calendar date in the `YYYY-MM-DD` form used by record dates.
pub fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Creation timestamp for a new record.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339()
}

/// Date portion of an RFC 3339 timestamp, for display. Returns the input
/// unchanged when it does not parse.
pub fn date_of_timestamp(ts: &str) -> String {
    DateTime::parse_from_rfc3339(ts)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| ts.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(applicant: &str, subject: &str, ocr: &str, recipient: &str) -> Record {
        Record {
            id: "1700000000000".to_string(),
            applicant_name: applicant.to_string(),
            recipient: recipient.to_string(),
            subject: subject.to_string(),
            date: "2026-01-15".to_string(),
            notes: String::new(),
            ocr_text: ocr.to_string(),
            image_uri: "data:image/jpeg;base64,AAAA".to_string(),
            created_at: "2026-01-15T10:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn test_search_matches_each_field() {
        let records = vec![
            record("Alice Karim", "Road permit", "full text one", "Ministry of Transport"),
            record("Bassam Noor", "Water supply", "pipeline inspection", "City Council"),
        ];

        assert_eq!(search_records(&records, "alice").len(), 1);
        assert_eq!(search_records(&records, "WATER").len(), 1);
        assert_eq!(search_records(&records, "pipeline").len(), 1);
        assert_eq!(search_records(&records, "transport").len(), 1);
        assert!(search_records(&records, "nothing here").is_empty());
    }

    #[test]
    fn test_search_empty_query_returns_all_in_order() {
        let records = vec![
            record("Newest", "a", "b", "c"),
            record("Oldest", "a", "b", "c"),
        ];
        let all = search_records(&records, "");
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].applicant_name, "Newest");
    }

    #[test]
    fn test_record_wire_shape_is_camel_case() {
        let value = serde_json::to_value(record("A", "B", "C", "D")).unwrap();
        assert!(value.get("applicantName").is_some());
        assert!(value.get("ocrText").is_some());
        assert!(value.get("imageUri").is_some());
        assert!(value.get("createdAt").is_some());
        assert!(value.get("applicant_name").is_none());
    }

    #[test]
    fn test_settings_defaults() {
        let settings = AppSettings::default();
        assert_eq!(settings.sheets_url, "");
        assert_eq!(settings.accent_color, "#10b981");
        assert_eq!(settings.system_name, "Ministerial Archive System");
        assert!(settings.auto_fill);
    }

    #[test]
    fn test_accent_soft_from_hex() {
        let settings = AppSettings {
            accent_color: "#10b981".to_string(),
            ..AppSettings::default()
        };
        assert_eq!(settings.accent_soft(), "rgba(16, 185, 129, 0.12)");
    }

    #[test]
    fn test_accent_soft_survives_bad_hex() {
        for bad in ["", "#abc", "not-a-color", "#zzzzzz", "#漢字漢字漢字"] {
            let settings = AppSettings {
                accent_color: bad.to_string(),
                ..AppSettings::default()
            };
            assert_eq!(settings.accent_soft(), "rgba(100, 116, 139, 0.12)");
        }
    }

    #[test]
    fn test_date_of_timestamp() {
        assert_eq!(date_of_timestamp("2026-02-03T09:30:00+00:00"), "2026-02-03");
        assert_eq!(date_of_timestamp("garbage"), "garbage");
    }
}
