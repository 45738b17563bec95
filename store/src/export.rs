//! Export rendering for a single archived record.
//!
//! Pure string builders; the detail screen decides where the bytes land.

use crate::models::Record;

/// Byte-order mark so spreadsheet tools detect UTF-8.
const BOM: &str = "\u{feff}";

const CSV_HEADER: [&str; 7] = [
    "Id",
    "Applicant",
    "Recipient",
    "Subject",
    "Date",
    "Notes",
    "Extracted Text",
];

/// Render a record as a one-row CSV document with the fixed 7-column header.
/// Newlines in the extracted text are flattened to spaces.
pub fn record_csv(record: &Record) -> String {
    let ocr_text = record.ocr_text.replace('\n', " ");
    let row = [
        record.id.as_str(),
        record.applicant_name.as_str(),
        record.recipient.as_str(),
        record.subject.as_str(),
        record.date.as_str(),
        record.notes.as_str(),
        ocr_text.as_str(),
    ]
    .iter()
    .map(|field| csv_quote(field))
    .collect::<Vec<_>>()
    .join(",");

    format!("{BOM}{}\n{row}\n", CSV_HEADER.join(","))
}

fn csv_quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Render a record as a plain-text document headed by the system name.
pub fn record_text(system_name: &str, record: &Record) -> String {
    format!(
        "{system_name}\n\
         ------------------------------------------\n\
         Request details:\n\
         Applicant: {}\n\
         Recipient: {}\n\
         Subject: {}\n\
         Date: {}\n\
         Notes: {}\n\
         \n\
         Extracted text (OCR):\n\
         {}\n",
        record.applicant_name,
        record.recipient,
        record.subject,
        record.date,
        record.notes,
        record.ocr_text,
    )
}

/// File stem for a record's exports: the applicant name reduced to
/// filesystem-safe characters, falling back to the record id.
pub fn export_file_stem(record: &Record) -> String {
    let applicant: String = record
        .applicant_name
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();
    let applicant = applicant.trim_matches('_');
    if applicant.is_empty() {
        format!("request_{}", record.id)
    } else {
        format!("request_{applicant}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        Record {
            id: "1700000000123".to_string(),
            applicant_name: "Alice \"Ally\" Karim".to_string(),
            recipient: "Ministry of Transport".to_string(),
            subject: "Road access permit".to_string(),
            date: "2026-01-15".to_string(),
            notes: "urgent".to_string(),
            ocr_text: "line one\nline two".to_string(),
            image_uri: "data:image/jpeg;base64,AAAA".to_string(),
            created_at: "2026-01-15T10:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn test_csv_shape() {
        let csv = record_csv(&sample());
        assert!(csv.starts_with('\u{feff}'));
        assert!(csv.contains("Id,Applicant,Recipient,Subject,Date,Notes,Extracted Text\n"));
        // Newlines flattened, quotes doubled.
        assert!(csv.contains("\"line one line two\""));
        assert!(csv.contains("\"Alice \"\"Ally\"\" Karim\""));
        assert_eq!(csv.lines().count(), 2);
    }

    #[test]
    fn test_text_document_headed_by_system_name() {
        let text = record_text("Front Desk Archive", &sample());
        assert!(text.starts_with("Front Desk Archive\n"));
        assert!(text.contains("Applicant: Alice \"Ally\" Karim"));
        assert!(text.contains("Extracted text (OCR):\nline one\nline two"));
    }

    #[test]
    fn test_export_file_stem_sanitized() {
        assert_eq!(export_file_stem(&sample()), "request_Alice__Ally__Karim");

        let mut unnamed = sample();
        unnamed.applicant_name = "!!!".to_string();
        assert_eq!(export_file_stem(&unnamed), "request_1700000000123");
    }
}
