// astris-build: AdAstris Engine Build Configurator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Workspace bootstrap.
//!
//! ```text
//! <root>/build                       created if absent
//! <root>/bin                         created if absent
//! <root>/build/intermediate/cache    created with parents if absent
//! ```
//!
//! Bootstrapping is idempotent: present directories are left untouched and
//! reported, never cleared.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::PathsConfig;
use crate::error::{FsError, Result};

/// Directories the configure step expects to exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    build: PathBuf,
    bin: PathBuf,
    cache: PathBuf,
}

/// Outcome of [`Workspace::bootstrap`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootstrapReport {
    created: Vec<PathBuf>,
    existing: Vec<PathBuf>,
}

impl BootstrapReport {
    /// Directories created by this run (or that would be, in dry-run mode).
    #[must_use]
    pub fn created(&self) -> &[PathBuf] {
        &self.created
    }

    #[must_use]
    pub fn existing(&self) -> &[PathBuf] {
        &self.existing
    }
}

impl Workspace {
    #[must_use]
    pub fn new(
        build: impl Into<PathBuf>,
        bin: impl Into<PathBuf>,
        cache: impl Into<PathBuf>,
    ) -> Self {
        Self {
            build: build.into(),
            bin: bin.into(),
            cache: cache.into(),
        }
    }

    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` if `paths` was not resolved.
    pub fn from_paths(paths: &PathsConfig) -> Result<Self> {
        Ok(Self::new(paths.build()?, paths.bin()?, paths.cache()?))
    }

    #[must_use]
    pub fn build(&self) -> &Path {
        &self.build
    }

    #[must_use]
    pub fn bin(&self) -> &Path {
        &self.bin
    }

    #[must_use]
    pub fn cache(&self) -> &Path {
        &self.cache
    }

    /// Creates every missing workspace directory.
    ///
    /// # Errors
    ///
    /// Returns `FsError::NotADirectory` if a workspace path is taken by a
    /// non-directory, and `FsError::IoError` if a path cannot be inspected or
    /// created. Directories created before the failure are kept.
    pub async fn bootstrap(&self, dry_run: bool) -> Result<BootstrapReport> {
        let mut report = BootstrapReport::default();

        for dir in [&self.build, &self.bin, &self.cache] {
            match tokio::fs::metadata(dir).await {
                Ok(meta) if meta.is_dir() => {
                    debug!(path = %dir.display(), "directory already present");
                    report.existing.push(dir.clone());
                    continue;
                }
                Ok(_) => {
                    return Err(FsError::NotADirectory {
                        path: dir.display().to_string(),
                    }
                    .into());
                }
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(source) => {
                    return Err(FsError::IoError {
                        path: dir.display().to_string(),
                        source,
                    }
                    .into());
                }
            }

            if dry_run {
                info!(path = %dir.display(), "[dry-run] Would create directory");
            } else {
                tokio::fs::create_dir_all(dir)
                    .await
                    .map_err(|source| FsError::IoError {
                        path: dir.display().to_string(),
                        source,
                    })?;
                info!(path = %dir.display(), "created directory");
            }
            report.created.push(dir.clone());
        }

        Ok(report)
    }
}
