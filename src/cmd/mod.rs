// astris-build: AdAstris Engine Build Configurator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   configure, reset-cache   (workspace + cmake)
//!   directives, list         (module catalog only)
//!   options, inis            (config)
//! ```

pub mod config;
pub mod configure;
pub mod list;
