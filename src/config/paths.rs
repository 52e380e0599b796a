// astris-build: AdAstris Engine Build Configurator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Path configuration.
//!
//! ```text
//! root/                       (default: current directory)
//!   CMakeLists.txt            (source, default: root)
//!   build/                    (CMake build tree)
//!     intermediate/cache/     (intermediate artifacts)
//!   bin/                      (binary output)
//! ```
//!
//! Relative paths are resolved against `root`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Workspace paths configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Project root; everything else is relative to it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
    /// Directory holding the top-level `CMakeLists.txt` (default: root).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,
    /// CMake build tree (default: root/build).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build: Option<PathBuf>,
    /// Binary output directory (default: root/bin).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bin: Option<PathBuf>,
    /// Intermediate artifact cache (default: root/build/intermediate/cache).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache: Option<PathBuf>,
}

impl PathsConfig {
    /// Fill in defaults and make every path absolute against `root`.
    ///
    /// `default_root` is used when `root` is not set.
    pub fn resolve(&mut self, default_root: &Path) {
        // An empty string means "use the default".
        for path in [
            &mut self.root,
            &mut self.source,
            &mut self.build,
            &mut self.bin,
            &mut self.cache,
        ] {
            *path = path.take().filter(|p| !p.as_os_str().is_empty());
        }

        let root = match self.root.take() {
            Some(p) if p.is_relative() => default_root.join(p),
            Some(p) => p,
            None => default_root.to_path_buf(),
        };

        let resolve = |path: &mut Option<PathBuf>, default: &str| match path {
            Some(p) if p.is_relative() => *path = Some(root.join(&*p)),
            None => *path = Some(root.join(default)),
            _ => {}
        };

        match &self.source {
            Some(p) if p.is_relative() => self.source = Some(root.join(p)),
            None => self.source = Some(root.clone()),
            _ => {}
        }
        resolve(&mut self.build, "build");
        resolve(&mut self.bin, "bin");
        resolve(&mut self.cache, "build/intermediate/cache");

        self.root = Some(root);
    }

    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` if paths were not resolved.
    pub fn root(&self) -> Result<&Path> {
        required(self.root.as_deref(), "root")
    }

    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` if paths were not resolved.
    pub fn source(&self) -> Result<&Path> {
        required(self.source.as_deref(), "source")
    }

    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` if paths were not resolved.
    pub fn build(&self) -> Result<&Path> {
        required(self.build.as_deref(), "build")
    }

    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` if paths were not resolved.
    pub fn bin(&self) -> Result<&Path> {
        required(self.bin.as_deref(), "bin")
    }

    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` if paths were not resolved.
    pub fn cache(&self) -> Result<&Path> {
        required(self.cache.as_deref(), "cache")
    }
}

fn required<'a>(path: Option<&'a Path>, key: &str) -> Result<&'a Path> {
    path.ok_or_else(|| {
        ConfigError::MissingKey {
            section: "paths".to_string(),
            key: key.to_string(),
        }
        .into()
    })
}
