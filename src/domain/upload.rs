//! Upload record domain model.
//!
//! Uploads are inert scaffolding in the current scope: the store exposes list
//! management operations ([`crate::app::AppStore::add_upload`] and friends) but no
//! reachable action drives status transitions. The shape is specified for
//! completeness and kept no-op-safe.

use serde::{Deserialize, Serialize};

/// Processing status of an uploaded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadStatus {
    /// Transfer in progress.
    Uploading,

    /// Transfer complete, content being processed.
    Processing,

    /// Processed and available.
    Indexed,

    /// Transfer or processing failed; see the record's `error` field.
    Failed,
}

/// One tracked upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadRecord {
    /// Unique identifier of the upload.
    pub id: String,

    /// Original file name.
    pub name: String,

    /// File size in bytes.
    pub size: u64,

    /// MIME type of the file.
    pub content_type: String,

    /// Current processing status.
    pub status: UploadStatus,

    /// Progress in `[0, 100]`.
    pub progress: f32,

    /// Failure description when `status` is [`UploadStatus::Failed`].
    #[serde(default)]
    pub error: Option<String>,
}

/// Partial update applied to an [`UploadRecord`] by id.
///
/// Unspecified fields retain their prior value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadUpdate {
    /// New status, if supplied.
    pub status: Option<UploadStatus>,

    /// New progress value, if supplied.
    pub progress: Option<f32>,

    /// New failure description, if supplied.
    pub error: Option<String>,
}

impl UploadRecord {
    /// Applies a partial update in place.
    pub fn apply(&mut self, update: UploadUpdate) {
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(progress) = update.progress {
            self.progress = progress;
        }
        if let Some(error) = update.error {
            self.error = Some(error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_merges_supplied_fields_only() {
        let mut record = UploadRecord {
            id: "u1".to_string(),
            name: "report.pdf".to_string(),
            size: 1024,
            content_type: "application/pdf".to_string(),
            status: UploadStatus::Uploading,
            progress: 10.0,
            error: None,
        };

        record.apply(UploadUpdate {
            progress: Some(55.0),
            ..UploadUpdate::default()
        });

        assert_eq!(record.status, UploadStatus::Uploading);
        assert!((record.progress - 55.0).abs() < f32::EPSILON);
        assert!(record.error.is_none());
    }
}
