//! Filesystem-backed upload store.
//!
//! All artifacts land flat in one folder under the web root; there are no
//! subdirectories and no metadata sidecars. The filesystem is the source of
//! truth: nothing is tracked in memory, and artifacts are never updated or
//! deleted once stored (the only exception is the cleanup of a raw image
//! whose thumbnail step failed).
//!
//! ## Contract rules
//!
//! - Every stored artifact is named `<generated>.<default_extension>`,
//!   regardless of the uploaded file's declared name or format.
//! - [`UploadStore::save_files`] does not validate; callers run
//!   [`validate`](crate::validate::validate) per file first.
//! - Concurrent saves never collide: generated names are unique, so no
//!   locking is needed. Folder creation tolerates concurrent attempts.
//! - Each artifact is written to a `.part` temp name and renamed into place,
//!   so a visible file is always complete. A process killed between write
//!   and rename can leave a `.part` file behind; nothing sweeps these.

use crate::config::{Config, UploadConfig};
use crate::errors::{Error, Result};
use crate::naming;
use crate::thumbnail;
use crate::types::{SavedImage, UploadedFile};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use scopeguard::ScopeGuard;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, instrument, warn};

/// Stateful access point for persisting uploads.
///
/// Construct one per process with the environment-derived web root and hand
/// it (or clones of it) to callers; there is no global instance.
#[derive(Debug, Clone)]
pub struct UploadStore {
    web_root: PathBuf,
    config: UploadConfig,
}

impl UploadStore {
    pub fn new(web_root: impl Into<PathBuf>, config: UploadConfig) -> Self {
        Self {
            web_root: web_root.into(),
            config,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.web_root.clone(), config.uploads.clone())
    }

    /// The upload settings this store was built with
    pub fn config(&self) -> &UploadConfig {
        &self.config
    }

    /// Persist a batch of raw file payloads, in order.
    ///
    /// Returns one relative path per input, in input order, only after all
    /// writes succeed. An empty batch returns an empty vec and touches
    /// nothing on disk. On failure the remaining files are not attempted and
    /// artifacts stored by earlier iterations stay on disk: callers must
    /// treat a failed call as possibly having stored a prefix of the inputs.
    #[instrument(skip_all, fields(count = files.len()))]
    pub async fn save_files(&self, files: &[UploadedFile]) -> Result<Vec<String>> {
        if files.is_empty() {
            return Ok(Vec::new());
        }

        let dir = self.ensure_upload_dir().await?;

        let mut relative_paths = Vec::with_capacity(files.len());
        for file in files {
            let file_name = format!(
                "{}.{}",
                naming::generate_name(),
                self.config.default_extension
            );
            self.write_artifact(&dir, &file_name, &file.data).await?;

            debug!(
                declared = %file.name,
                stored = %file_name,
                bytes = file.data.len(),
                "Stored upload"
            );
            relative_paths.push(self.relative_path(&file_name));
        }

        info!(count = relative_paths.len(), "Stored multi-file upload");
        Ok(relative_paths)
    }

    /// Persist a base64-encoded image payload together with a derived
    /// thumbnail.
    ///
    /// The decoded bytes are written verbatim; the thumbnail is produced by
    /// independently decoding the payload as an image and resizing it to the
    /// configured dimensions. Both paths are returned together, only after
    /// both writes succeed. If the thumbnail step fails, the raw artifact
    /// written moments earlier is removed, so a failed call leaves nothing
    /// behind.
    ///
    /// No extension or size validation applies to this path.
    #[instrument(skip_all, fields(encoded_len = payload.len()))]
    pub async fn save_base64(&self, payload: &str) -> Result<SavedImage> {
        let bytes = BASE64.decode(payload)?;

        let name = naming::generate_name();
        let file_name = format!("{}.{}", name, self.config.default_extension);
        let thumb_name = format!("{}_thumb.{}", name, self.config.default_extension);

        let dir = self.ensure_upload_dir().await?;
        self.write_artifact(&dir, &file_name, &bytes).await?;

        let thumb = match self.derive_thumbnail(bytes).await {
            Ok(thumb) => thumb,
            Err(err) => {
                self.remove_artifact(&dir.join(&file_name)).await;
                return Err(err);
            }
        };
        if let Err(err) = self.write_artifact(&dir, &thumb_name, &thumb).await {
            self.remove_artifact(&dir.join(&file_name)).await;
            return Err(err);
        }

        info!(path = %file_name, thumbnail = %thumb_name, "Stored inline image");
        Ok(SavedImage {
            path: self.relative_path(&file_name),
            thumbnail_path: self.relative_path(&thumb_name),
        })
    }

    /// Run the CPU-bound decode/resize/encode on a blocking worker so it
    /// never stalls the async scheduler.
    async fn derive_thumbnail(&self, bytes: Vec<u8>) -> Result<Vec<u8>> {
        let (width, height) = (self.config.thumbnail.width, self.config.thumbnail.height);
        tokio::task::spawn_blocking(move || thumbnail::render_thumbnail(&bytes, width, height))
            .await
            .map_err(|err| Error::Storage {
                message: format!("thumbnail task failed: {err}"),
            })?
    }

    /// Create the upload folder if missing. `create_dir_all` treats an
    /// existing directory as success, so concurrent creation cannot fail.
    async fn ensure_upload_dir(&self) -> Result<PathBuf> {
        let dir = self.web_root.join(&self.config.folder);
        fs::create_dir_all(&dir).await?;
        Ok(dir)
    }

    /// Write `data` under a temporary name, then rename into place. The temp
    /// file is removed if anything fails before the rename completes.
    async fn write_artifact(&self, dir: &Path, file_name: &str, data: &[u8]) -> Result<()> {
        let tmp_path = dir.join(format!("{file_name}.part"));
        let cleanup = scopeguard::guard(tmp_path.clone(), |path| {
            let _ = std::fs::remove_file(path);
        });

        let mut file = fs::File::create(&tmp_path).await?;
        file.write_all(data).await?;
        file.sync_all().await?;
        drop(file);

        fs::rename(&tmp_path, dir.join(file_name)).await?;

        // Renamed away; nothing left to clean up
        ScopeGuard::into_inner(cleanup);
        Ok(())
    }

    async fn remove_artifact(&self, path: &Path) {
        if let Err(err) = fs::remove_file(path).await {
            warn!(
                path = %path.display(),
                error = %err,
                "Failed to remove artifact after aborted save"
            );
        }
    }

    /// Path callers record and serve, rooted at the web root. Always uses a
    /// forward slash: this is a URL fragment, not an OS path.
    fn relative_path(&self, file_name: &str) -> String {
        format!("{}/{}", self.config.folder, file_name)
    }
}
