// astris-build: AdAstris Engine Build Configurator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration section types.
//!
//! ```text
//! Config: GlobalConfig, CmakeConfig, PathsConfig
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::cmake::Generator;
use crate::logging::{LogFormat, LogLevel};
use crate::module::UnknownModulePolicy;

/// Global options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log commands instead of running them; create no directories.
    pub dry: bool,
    /// Log level for console output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file; no file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    /// Format of the log file.
    pub log_format: LogFormat,
    /// Handling of module names the registry does not know.
    pub unknown_modules: UnknownModulePolicy,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            dry: false,
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
            log_format: LogFormat::Text,
            unknown_modules: UnknownModulePolicy::Fail,
        }
    }
}

/// CMake invocation options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CmakeConfig {
    /// Path to the cmake executable; searched in PATH when empty.
    pub executable: PathBuf,
    /// Generator used when no generator flag is given.
    pub generator: Generator,
    /// Run the reset pass with `--fresh`, discarding the previous cache.
    pub fresh: bool,
}

impl Default for CmakeConfig {
    fn default() -> Self {
        Self {
            executable: PathBuf::new(),
            generator: Generator::default(),
            fresh: true,
        }
    }
}
