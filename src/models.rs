//! Frontend Models
//!
//! Data structures matching the qrm-service wire shape.

use serde::{Deserialize, Serialize};

/// Linked content cell payload (label + target URL)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkedContent {
    pub text: String,
    pub url: String,
}

/// QR generation status (status string, optional timestamp, optional note)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QrStatus {
    pub status: String,
    pub time: Option<String>,
    pub note: Option<String>,
}

/// Download status (status string, optional timestamp)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DownloadStatus {
    pub status: String,
    pub time: Option<String>,
}

/// One QR profile as served by the API.
///
/// The wire shape is camelCase JSON; the edit fields are local-only and
/// never serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRow {
    pub id: String,
    pub qr_display_name: String,
    pub short_code: String,
    pub stand_no: String,
    pub location: String,
    pub linked_content: LinkedContent,
    pub qr_status: QrStatus,
    pub download_status: DownloadStatus,
    pub format: String,
    /// Transient per-row edit flag, local-only
    #[serde(skip)]
    pub is_edit_mode: bool,
    /// Pristine copy taken when entering edit mode, restored on cancel
    #[serde(skip)]
    pristine: Option<Box<ProfileRow>>,
}

impl ProfileRow {
    /// Enter edit mode, snapshotting the current field values.
    /// No-op if the row is already being edited.
    pub fn begin_edit(&mut self) {
        if self.is_edit_mode {
            return;
        }
        self.pristine = Some(Box::new(self.clone()));
        self.is_edit_mode = true;
    }

    /// Leave edit mode keeping the edited values.
    ///
    /// Local commit only: the API has no write endpoint yet, so nothing
    /// is transmitted.
    pub fn save_edit(&mut self) {
        self.pristine = None;
        self.is_edit_mode = false;
    }

    /// Leave edit mode discarding edits, restoring the pristine snapshot.
    pub fn cancel_edit(&mut self) {
        if let Some(pristine) = self.pristine.take() {
            *self = *pristine;
        } else {
            self.is_edit_mode = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_row(id: &str) -> ProfileRow {
        ProfileRow {
            id: id.to_string(),
            qr_display_name: format!("Profile {}", id),
            short_code: format!("SC-{}", id),
            stand_no: "A-12".to_string(),
            location: "At Stand".to_string(),
            linked_content: LinkedContent {
                text: "Brochure".to_string(),
                url: "https://example.com/brochure".to_string(),
            },
            qr_status: QrStatus {
                status: "Generated".to_string(),
                time: Some("2024-03-01T10:00:00Z".to_string()),
                note: None,
            },
            download_status: DownloadStatus {
                status: "Not Downloaded".to_string(),
                time: None,
            },
            format: "PNG".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_cancel_restores_pre_edit_values() {
        let mut row = make_row("p1");
        let before = row.clone();

        row.begin_edit();
        assert!(row.is_edit_mode);
        row.location = "At Entrance Foyer".to_string();
        row.linked_content.text = "Changed".to_string();

        row.cancel_edit();
        assert_eq!(row, before);
        assert!(!row.is_edit_mode);
    }

    #[test]
    fn test_save_keeps_edits_locally() {
        let mut row = make_row("p1");
        row.begin_edit();
        row.download_status.status = "Downloaded".to_string();
        row.save_edit();

        assert!(!row.is_edit_mode);
        assert_eq!(row.download_status.status, "Downloaded");
    }

    #[test]
    fn test_begin_edit_is_idempotent() {
        let mut row = make_row("p1");
        row.begin_edit();
        row.location = "Product Feature Zone".to_string();
        // A second begin_edit must not re-snapshot the edited values
        row.begin_edit();
        row.cancel_edit();
        assert_eq!(row.location, "At Stand");
    }

    #[test]
    fn test_decodes_camel_case_wire_rows() {
        let json = r#"{
            "id": "p7",
            "qrDisplayName": "Hall B Banner",
            "shortCode": "HB-7",
            "standNo": "B-03",
            "location": "At Entrance Foyer",
            "linkedContent": { "text": "Catalogue", "url": "https://example.com/c" },
            "qrStatus": { "status": "Generated", "time": "2024-03-02T09:30:00Z" },
            "downloadStatus": { "status": "Downloaded", "time": "2024-03-02T10:00:00Z" },
            "format": "SVG"
        }"#;

        let row: ProfileRow = serde_json::from_str(json).expect("row should decode");
        assert_eq!(row.qr_display_name, "Hall B Banner");
        assert_eq!(row.qr_status.note, None);
        assert_eq!(row.download_status.status, "Downloaded");
        assert!(!row.is_edit_mode);
    }
}
