// astris-build: AdAstris Engine Build Configurator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for astris-build.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. astris.toml (cwd, optional)
//! 3. --ini FILE (repeatable)
//! 4. ASTRIS_* env vars
//! 5. --set section/key=value and CLI flags
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! ASTRIS_GLOBAL__DRY=true               → global.dry = true
//! ASTRIS_GLOBAL__UNKNOWN_MODULES=ignore → global.unknown_modules = "ignore"
//! ASTRIS_CMAKE__GENERATOR=ninja         → cmake.generator = "ninja"
//! ```

pub mod loader;
pub mod paths;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::Result;

pub use loader::ConfigLoader;
pub use paths::PathsConfig;
pub use types::{CmakeConfig, GlobalConfig};

/// Default configuration file looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "astris.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "ASTRIS";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// `CMake` options.
    pub cmake: CmakeConfig,
    /// Workspace paths.
    pub paths: PathsConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use astris_build::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("astris.toml")
    ///     .with_env_prefix("ASTRIS")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Format configuration options for display, sorted by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_cmake_options(&mut options);
        self.format_paths_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("global.dry".into(), self.global.dry.to_string());
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            fmt_path(self.global.log_file.as_ref()),
        );
        options.insert(
            "global.log_format".into(),
            format!("{:?}", self.global.log_format).to_lowercase(),
        );
        options.insert(
            "global.unknown_modules".into(),
            format!("{:?}", self.global.unknown_modules).to_lowercase(),
        );
    }

    fn format_cmake_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "cmake.executable".into(),
            self.cmake.executable.display().to_string(),
        );
        options.insert(
            "cmake.generator".into(),
            self.cmake.generator.cmake_name().to_string(),
        );
        options.insert("cmake.fresh".into(), self.cmake.fresh.to_string());
    }

    fn format_paths_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("paths.root".into(), fmt_path(self.paths.root.as_ref()));
        options.insert("paths.source".into(), fmt_path(self.paths.source.as_ref()));
        options.insert("paths.build".into(), fmt_path(self.paths.build.as_ref()));
        options.insert("paths.bin".into(), fmt_path(self.paths.bin.as_ref()));
        options.insert("paths.cache".into(), fmt_path(self.paths.cache.as_ref()));
    }
}

fn fmt_path(path: Option<&PathBuf>) -> String {
    path.map_or_else(String::new, |p| p.display().to_string())
}
