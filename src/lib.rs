// astris-build: AdAstris Engine Build Configurator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!      cli (clap + legacy)      cmd (handlers)
//!                |       configure / directives / list
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, env, overrides    |
//!              '--+-----------+--------+---'
//!                 |           |        |
//!                 v           v        v
//!              module       cmake   workspace
//!         registry/classify  invoker  bootstrap
//!         resolve/directive    |
//!                              v
//!   +-----------------------------------------+
//!   |  process   tokio::process builder/run   |
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmake;
pub mod cmd;
pub mod config;
pub mod error;
pub mod logging;
pub mod module;
pub mod process;
pub mod workspace;
