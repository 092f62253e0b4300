//! Compare API response body.

use changed_files_core::{ChangedFile, Comparison};
use serde::Deserialize;

/// The fields of a compare response the step looks at.
///
/// Every field is optional: error bodies (`{"message": "Not Found"}`) decode
/// too, with no status and no files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CompareResponse {
    /// `ahead`, `behind`, `diverged` or `identical`.
    #[serde(default)]
    pub status: Option<String>,

    /// Changed files, in the order GitHub lists them.
    #[serde(default)]
    pub files: Option<Vec<ChangedFile>>,

    /// Error message of a failed request.
    #[serde(default)]
    pub message: Option<String>,
}

impl CompareResponse {
    /// Parses a response body.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not a JSON object of the expected shape.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }

    /// Pairs the body with its HTTP status.
    #[must_use]
    pub fn into_comparison(self, http_status: u16) -> Comparison {
        Comparison {
            http_status,
            status: self.status,
            files: self.files,
        }
    }
}

#[cfg(test)]
mod tests {
    use changed_files_core::FileStatus;

    use super::*;

    #[test]
    fn test_decode_compare_body() {
        let body = br#"{
            "url": "https://api.github.com/repos/octocat/Hello-World/compare/main...topic",
            "status": "ahead",
            "ahead_by": 1,
            "behind_by": 0,
            "total_commits": 1,
            "commits": [],
            "files": [
                {"sha": "bbcd538c", "filename": "file1.txt", "status": "added", "additions": 103},
                {"sha": "a1b2c3d4", "filename": "docs/old name.md", "status": "renamed", "previous_filename": "docs/old.md"}
            ]
        }"#;

        let response = CompareResponse::from_slice(body).unwrap();
        assert_eq!(response.status.as_deref(), Some("ahead"));

        let files = response.files.unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].filename, "file1.txt");
        assert_eq!(files[1].status, FileStatus::Renamed);
    }

    #[test]
    fn test_decode_error_body() {
        let body = br#"{"message": "Not Found", "documentation_url": "https://docs.github.com/rest"}"#;

        let response = CompareResponse::from_slice(body).unwrap();
        assert_eq!(response.message.as_deref(), Some("Not Found"));
        assert_eq!(response.into_comparison(404).files, None);
    }

    #[test]
    fn test_null_files_are_absent() {
        let response = CompareResponse::from_slice(br#"{"status": "ahead", "files": null}"#).unwrap();
        assert_eq!(response.files, None);
    }

    #[test]
    fn test_into_comparison() {
        let response = CompareResponse {
            status: Some("behind".to_string()),
            files: Some(vec![]),
            message: None,
        };

        let comparison = response.into_comparison(200);
        assert_eq!(comparison.http_status, 200);
        assert_eq!(comparison.status.as_deref(), Some("behind"));
        assert_eq!(comparison.files, Some(vec![]));
    }

    #[test]
    fn test_decode_rejects_non_object() {
        assert!(CompareResponse::from_slice(br#""ahead""#).is_err());
        assert!(CompareResponse::from_slice(b"<html>").is_err());
    }
}
