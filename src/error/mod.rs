// astris-build: AdAstris Engine Build Configurator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!          AstrisError (~24 bytes)
//!                  |
//!   +------+-------+-------+------+-----+
//!   |      |       |       |      |     |
//!   v      v       v       v      v     v
//! Module Config Process   Fs     Io   Other
//!  Box    Box     Box     Box    Box  Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Module  UnknownModule, DuplicateModule, OverlappingClass
//!   Config  MissingKey, InvalidValue, InvalidOverride
//!   Process ExecutableNotFound, SpawnFailed, NonZeroExit
//!   Fs      IoError, NotADirectory
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`AstrisError`].
pub type AstrisResult<T> = std::result::Result<T, AstrisError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum AstrisError {
    /// Module resolution failed.
    #[error("module error: {0}")]
    Module(#[from] Box<ModuleError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// External process failed.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for AstrisError {
                fn from(err: $error) -> Self {
                    AstrisError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ModuleError => Module,
    ConfigError => Config,
    ProcessError => Process,
    FsError => Fs,
    std::io::Error => Io,
}

// --- Module Errors ---

/// Module registry and resolution errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModuleError {
    /// Requested identifier is not in the registry.
    #[error("unknown module '{0}'")]
    UnknownModule(String),

    /// Registry table declares the same identifier twice.
    #[error("module '{0}' is registered more than once")]
    DuplicateModule(String),

    /// Identifier is both fully and partially dependent.
    #[error("module '{0}' cannot be both fully and partially dependent")]
    OverlappingClass(String),

    /// Classified or prerequisite identifier is missing from the registry.
    #[error("module '{0}' is classified but not registered")]
    UnregisteredPrerequisite(String),
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// `--set` argument not of the form `section/key=value`.
    #[error("invalid override '{0}', expected 'section/key=value'")]
    InvalidOverride(String),
}

// --- Process Errors ---

/// External process errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with a code outside its success set.
    #[error("process '{command}' exited with code {code}")]
    NonZeroExit { command: String, code: i32 },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{path}' exists but is not a directory")]
    NotADirectory { path: String },
}

#[cfg(test)]
mod tests;
