// astris-build: AdAstris Engine Build Configurator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configure and reset-cache commands.
//!
//! ```text
//! configure:   resolve --> bootstrap workspace --> cmake reset --> cmake enable
//! reset-cache: bootstrap workspace --> cmake --fresh
//! ```
//!
//! A resolution error aborts before any directory is created.

use clap::CommandFactory;
use tracing::info;

use crate::cli::Cli;
use crate::cli::configure::{ConfigureArgs, ResetCacheArgs};
use crate::cmake::CmakeInvoker;
use crate::config::Config;
use crate::error::Result;
use crate::module::{ConfigurePlan, ModuleCatalog};
use crate::workspace::Workspace;

/// Main handler for the configure command.
///
/// Without modules the command help is printed and nothing is resolved.
///
/// # Errors
///
/// Returns an error if a module is unknown (under the `fail` policy), a
/// workspace directory cannot be created, or `CMake` exits non-zero.
pub async fn run_configure_command(args: &ConfigureArgs, config: &Config) -> Result<()> {
    if args.selection.is_empty() {
        return print_configure_usage();
    }

    let plan = ConfigurePlan::new(
        ModuleCatalog::builtin(),
        &args.selection.request(),
        config.global.unknown_modules,
    )?;

    bootstrap(config).await?;
    CmakeInvoker::from_config(config, args.generator.generator())?
        .apply(&plan)
        .await
}

/// Main handler for the reset-cache command.
///
/// # Errors
///
/// Returns an error if a workspace directory cannot be created or `CMake`
/// exits non-zero.
pub async fn run_reset_cache_command(args: &ResetCacheArgs, config: &Config) -> Result<()> {
    bootstrap(config).await?;
    CmakeInvoker::from_config(config, args.generator.generator())?
        .reset_cache()
        .await
}

async fn bootstrap(config: &Config) -> Result<()> {
    let report = Workspace::from_paths(&config.paths)?
        .bootstrap(config.global.dry)
        .await?;
    info!(
        created = report.created().len(),
        existing = report.existing().len(),
        "Workspace ready"
    );
    Ok(())
}

fn print_configure_usage() -> Result<()> {
    let mut command = Cli::command();
    match command.find_subcommand_mut("configure") {
        Some(configure) => configure.print_help()?,
        None => command.print_help()?,
    }
    Ok(())
}
