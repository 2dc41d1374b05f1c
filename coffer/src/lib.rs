//! # coffer: filesystem-backed upload store
//!
//! `coffer` accepts user-submitted media (raw file payloads or a single
//! base64-encoded image), validates it, and persists it under a public web
//! root with collision-resistant generated names. Inline image submissions
//! additionally get a fixed-size thumbnail stored next to the original.
//!
//! ## Overview
//!
//! The crate is the storage core behind a media upload endpoint. The web
//! layer in front of it (routing, multipart parsing, authentication,
//! response mapping) is an external collaborator: it hands over payloads
//! with declared filenames, runs validation on the multi-file path, and
//! records the relative paths the store returns. Those paths are rooted at
//! the web root and suitable for appending to a public base URL; the store
//! never constructs absolute URLs and never serves files back.
//!
//! Two save paths exist. The **multi-file path** takes an ordered batch of
//! raw payloads and returns one relative path per input, in input order. The
//! **base64 path** takes a single encoded image and returns the stored
//! original together with a thumbnail resized to exactly the configured
//! dimensions. Every stored artifact is renamed to a generated name with the
//! configured default extension; the declared filename only ever influences
//! validation.
//!
//! ## Storage model
//!
//! Artifacts live flat in one folder under the web root, created lazily on
//! first write. The filesystem is the only registry: the filename itself
//! encodes creation time, and artifacts are create-once, append-only. Writes
//! go to a temporary name and are renamed into place, so concurrent readers
//! never observe a partial file. There is no cross-file transaction: a
//! failed batch may have stored a prefix of its inputs.
//!
//! Collision freedom comes from name generation (a second-resolution
//! timestamp plus a 122-bit random token), not from locking; any number of
//! tasks may save concurrently.
//!
//! ## Quick start
//!
//! ```no_run
//! use coffer::{Config, UploadStore, UploadedFile};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config.yaml")?;
//!     coffer::telemetry::init_telemetry()?;
//!
//!     let store = UploadStore::from_config(&config);
//!
//!     let file = UploadedFile::new("photo.jpg", std::fs::read("photo.jpg")?);
//!     coffer::validate::validate(&file, store.config())?;
//!
//!     let paths = store.save_files(&[file]).await?;
//!     println!("stored at {}", paths[0]);
//!     Ok(())
//! }
//! ```
//!
//! ## Failure semantics
//!
//! [`Error::Validation`] is raised before storage and never leaves partial
//! state. [`Error::Storage`] covers I/O, base64-decode, and image codec
//! failures and carries the underlying cause's message; on the base64 path a
//! failed thumbnail step removes the raw artifact written moments earlier.
//! The store performs no retries. See the [`errors`] module.

pub mod config;
pub mod errors;
pub mod naming;
pub mod store;
pub mod telemetry;
pub mod thumbnail;
pub mod types;
pub mod validate;

pub use config::Config;
pub use errors::{Error, Result};
pub use store::UploadStore;
pub use types::{SavedImage, UploadedFile};
