// astris-build: AdAstris Engine Build Configurator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! legacy::translate_args --> cli::parse --> Config --> Logging --> Command Dispatch
//!   Configure | ResetCache | Directives | List | Options | Inis
//! ```

use std::process::ExitCode;

use astris_build::cli::global::GlobalOptions;
use astris_build::cli::{self, Command};
use astris_build::cmd::config::{run_inis_command, run_options_command};
use astris_build::cmd::configure::{run_configure_command, run_reset_cache_command};
use astris_build::cmd::list::{run_directives_command, run_list_command};
use astris_build::config::{Config, ConfigLoader, DEFAULT_CONFIG_FILE, ENV_PREFIX};
use astris_build::error::Result;
use astris_build::logging::{LogConfig, init_logging};

use clap::CommandFactory;
use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    if matches!(cli.command, Some(Command::Version)) {
        handle_version_command();
        return ExitCode::SUCCESS;
    }

    let (config, config_files) = match load_config(&cli.global) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match init_logging(&build_log_config(&config)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config, &config_files).await
}

fn build_log_config(config: &Config) -> LogConfig {
    LogConfig::builder()
        .with_console_level(config.global.output_log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(
            config
                .global
                .log_file
                .as_ref()
                .map(|p| p.display().to_string()),
        )
        .with_file_format(config.global.log_format)
        .build()
}

async fn dispatch_command(cli: &cli::Cli, config: &Config, config_files: &[String]) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            run_options_command(config);
            Ok(())
        }
        Some(Command::Inis) => {
            run_inis_command(config_files);
            Ok(())
        }
        Some(Command::Configure(args)) => run_configure_command(args, config).await,
        Some(Command::ResetCache(args)) => run_reset_cache_command(args, config).await,
        Some(Command::Directives(args)) => run_directives_command(args, config),
        Some(Command::List(args)) => run_list_command(args),
        None => print_usage(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// An empty command line prints usage, like `--help`.
fn print_usage() -> Result<()> {
    cli::Cli::command().print_help()?;
    println!();
    Ok(())
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> Result<ConfigLoader> {
    let mut loader = ConfigLoader::new().add_toml_file_optional(DEFAULT_CONFIG_FILE);
    for ini_path in &global.inis {
        loader = loader.add_toml_file(ini_path);
    }
    loader
        .with_env_prefix(ENV_PREFIX)
        .with_overrides(global.to_config_overrides())
}

fn load_config(global: &GlobalOptions) -> Result<(Config, Vec<String>)> {
    let loader = build_config_loader(global)?;
    let files = loader.format_loaded_files();
    Ok((loader.build()?, files))
}
