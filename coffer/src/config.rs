//! Upload store configuration.
//!
//! Configuration is loaded from a YAML file with environment variable
//! overrides.
//!
//! ## Loading Priority
//!
//! Sources are merged in the following order (later sources override earlier
//! ones):
//!
//! 1. **YAML config file** - Base configuration
//! 2. **Environment variables** - Variables prefixed with `COFFER_` override
//!    YAML values
//!
//! For nested config values, use double underscores in environment variables.
//! For example, `COFFER_UPLOADS__MAX_FILE_SIZE=1048576` sets the
//! `uploads.max_file_size` field.
//!
//! ## Usage
//!
//! ```no_run
//! use coffer::Config;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::load("config.yaml")?;
//! println!("uploads land in {:?}", config.upload_dir());
//! # Ok(())
//! # }
//! ```

use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration.
///
/// All fields have defaults defined in the `Default` implementation, so an
/// absent or empty config file yields a working configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory served to clients as the public web root. Relative paths
    /// returned by the store are rooted here.
    pub web_root: PathBuf,
    /// Upload acceptance and storage settings
    pub uploads: UploadConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            web_root: PathBuf::from("wwwroot"),
            uploads: UploadConfig::default(),
        }
    }
}

/// Settings governing what uploads are accepted and how they are stored.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct UploadConfig {
    /// Subdirectory of the web root where all artifacts are written, flat
    /// with no nesting. Created lazily on first write.
    pub folder: String,
    /// Extension given to every stored artifact, regardless of the uploaded
    /// file's declared name.
    pub default_extension: String,
    /// Maximum accepted payload size in bytes. Zero-length payloads are
    /// always rejected.
    pub max_file_size: u64,
    /// Accepted file extensions, leading dot included. Compared
    /// case-insensitively against the declared filename's extension.
    pub allowed_extensions: Vec<String>,
    /// Output dimensions for thumbnails derived from inline image uploads
    pub thumbnail: ThumbnailConfig,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            folder: "Uploads".to_string(),
            default_extension: "png".to_string(),
            max_file_size: 5 * 1024 * 1024,
            allowed_extensions: [".jpeg", ".jpg", ".png", ".mp4"]
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            thumbnail: ThumbnailConfig::default(),
        }
    }
}

/// Fixed output size for derived thumbnails. The resize is exact: the source
/// aspect ratio is not preserved.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThumbnailConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self { width: 100, height: 100 }
    }
}

impl Config {
    /// Load configuration from a YAML file, then apply `COFFER_`-prefixed
    /// environment overrides. A missing file is not an error; defaults and
    /// environment variables still apply.
    pub fn load(path: &str) -> crate::errors::Result<Self> {
        let config = Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed("COFFER_").split("__"))
            .extract()?;
        Ok(config)
    }

    /// Absolute location of the upload folder under the web root
    pub fn upload_dir(&self) -> PathBuf {
        self.web_root.join(&self.uploads.folder)
    }
}
