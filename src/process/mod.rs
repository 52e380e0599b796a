// astris-build: AdAstris Engine Build Configurator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning.
//!
//! ```text
//! ProcessBuilder::which("cmake")
//!   .args() .name()
//!   .run()
//!       --> tokio::process::Command
//!           stdout/stderr line readers forwarding to tracing
//!       --> ProcessOutput { exit_code }
//! ```
//!
//! Runs are fail-fast: any non-zero exit code is an error.
//! There is no timeout and no cancellation.

pub mod builder;
mod runner;

#[cfg(test)]
mod tests;

pub use builder::{ProcessBuilder, ProcessOutput};
