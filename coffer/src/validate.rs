//! Pure upload validation predicates.
//!
//! Validation is an explicit step separate from storage: the request layer
//! runs [`validate`] per file before calling
//! [`UploadStore::save_files`](crate::store::UploadStore::save_files). The
//! store itself never validates, and the base64 path has no validation at
//! all.

use crate::config::UploadConfig;
use crate::errors::{Error, Result};
use crate::types::UploadedFile;
use std::path::Path;

/// True when `file_name` carries an extension on the `allowed` whitelist.
///
/// Comparison is case-insensitive and includes the leading dot, so an allowed
/// entry written without one can never match. A name without any extension
/// never validates. Total: no input causes a failure.
pub fn is_valid_extension(file_name: &str, allowed: &[String]) -> bool {
    let Some(ext) = Path::new(file_name).extension().and_then(|ext| ext.to_str()) else {
        return false;
    };
    let ext = format!(".{}", ext.to_lowercase());
    allowed.iter().any(|entry| entry.to_lowercase() == ext)
}

/// True iff `0 < len <= max_bytes`
pub fn is_valid_size(len: u64, max_bytes: u64) -> bool {
    len > 0 && len <= max_bytes
}

/// Check a file against both rules, reporting the first one violated.
pub fn validate(file: &UploadedFile, config: &UploadConfig) -> Result<()> {
    if !is_valid_extension(&file.name, &config.allowed_extensions) {
        return Err(Error::Validation {
            message: format!("file type of {} is not allowed", file.name),
        });
    }

    if !is_valid_size(file.len(), config.max_file_size) {
        return Err(Error::Validation {
            message: format!(
                "file size must be between 1 and {} bytes",
                config.max_file_size
            ),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allowed() -> Vec<String> {
        UploadConfig::default().allowed_extensions
    }

    #[test]
    fn whitelisted_extensions_validate_case_insensitively() {
        for name in [
            "photo.jpeg",
            "photo.JPEG",
            "photo.jpg",
            "PHOTO.JPG",
            "photo.png",
            "photo.Png",
            "clip.mp4",
            "clip.MP4",
        ] {
            assert!(is_valid_extension(name, &allowed()), "{name} should validate");
        }
    }

    #[test]
    fn other_extensions_are_rejected() {
        for name in ["photo.gif", "photo.bmp", "archive.tar.gz", "script.png.exe"] {
            assert!(!is_valid_extension(name, &allowed()), "{name} should be rejected");
        }
    }

    #[test]
    fn names_without_an_extension_are_rejected() {
        assert!(!is_valid_extension("README", &allowed()));
        assert!(!is_valid_extension("", &allowed()));
        assert!(!is_valid_extension(".gitignore", &allowed()));
    }

    #[test]
    fn entries_missing_their_leading_dot_never_match() {
        let dotless = vec!["mp4".to_string()];
        assert!(!is_valid_extension("clip.mp4", &dotless));
    }

    #[test]
    fn size_bounds_are_half_open() {
        assert!(!is_valid_size(0, 100));
        assert!(is_valid_size(1, 100));
        assert!(is_valid_size(100, 100));
        assert!(!is_valid_size(101, 100));
    }

    #[test]
    fn validate_reports_the_violated_rule() {
        let config = UploadConfig::default();

        let bad_type = UploadedFile::new("virus.exe", &b"xx"[..]);
        let err = validate(&bad_type, &config).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("virus.exe"));

        let empty = UploadedFile::new("photo.png", Vec::new());
        let err = validate(&empty, &config).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains(&config.max_file_size.to_string()));

        let ok = UploadedFile::new("photo.png", &b"content"[..]);
        assert!(validate(&ok, &config).is_ok());
    }
}
