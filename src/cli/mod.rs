// astris-build: AdAstris Engine Build Configurator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for astris using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! astris [global options] <command>
//! configure [modules...] [--all] [generator]
//! reset-cache [generator]
//! directives [modules...] [--all]
//! list [--json]
//! options | inis | version
//! ```
//!
//! The legacy single-dash form (`astris -renderer -vs2019`) is rewritten by
//! [`legacy::translate_args`] before parsing.

pub mod configure;
pub mod global;
pub mod legacy;


use crate::cli::configure::{ConfigureArgs, DirectivesArgs, ListArgs, ResetCacheArgs};
use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// `AdAstris` Engine Build Configurator
///
/// Resolves engine module dependencies and configures the `CMake` build tree.
#[derive(Debug, Parser)]
#[command(
    name = "astris",
    author,
    version,
    about = "AdAstris Engine Build Configurator",
    long_about = "astris-build Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Resolves engine module dependencies and configures the CMake\n\
                  build tree.\n\n\
                  Do `astris configure <module>...` to enable specific modules\n\
                  together with their prerequisites, or `astris configure --all`\n\
                  for everything. The old form `astris -renderer -vs2019` is\n\
                  still accepted.",
    after_help = "CONFIG FILES:\n\n\
                  astris looks for `astris.toml` in the current directory.\n\
                  Additional files can be given with --ini and are loaded after\n\
                  it. ASTRIS_SECTION__KEY environment variables and --set\n\
                  override file values."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Lists all options and their values.
    Options,

    /// Lists the config files used by astris.
    Inis,

    /// Configures the build tree for the given modules.
    #[command(after_help = configure::MODULES_HELP)]
    Configure(ConfigureArgs),

    /// Regenerates the build tree without any cached options.
    #[command(name = "reset-cache")]
    ResetCache(ResetCacheArgs),

    /// Prints the resolved modules and CMake directives without running CMake.
    Directives(DirectivesArgs),

    /// Lists the known modules.
    List(ListArgs),
}

/// Parses the process arguments, translating the legacy form first.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse_from(legacy::translate_args(std::env::args()))
}
