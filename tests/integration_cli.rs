// astris-build: AdAstris Engine Build Configurator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns,
//! including the legacy single-dash form.

use astris_build::cli::legacy::translate_args;
use astris_build::cli::{Cli, Command};
use astris_build::cmake::Generator;
use astris_build::module::{ModuleCatalog, ModuleRequest, UnknownModulePolicy, resolve};
use clap::Parser;

fn parse_legacy(args: &[&str]) -> Cli {
    Cli::try_parse_from(translate_args(args.iter().copied())).unwrap()
}

// =============================================================================
// Version Command
// =============================================================================

#[test]
fn cli_version_command() {
    let cli = Cli::try_parse_from(["astris", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_version_has_no_short_alias() {
    assert!(Cli::try_parse_from(translate_args(["astris", "-v"])).is_err());
}

#[test]
fn cli_no_command() {
    let cli = Cli::try_parse_from(["astris"]).unwrap();
    assert!(cli.command.is_none());
}

#[test]
fn cli_binary_without_arguments_prints_usage() {
    let dir = tempfile::tempdir().unwrap();
    let output = std::process::Command::new(env!("CARGO_BIN_EXE_astris"))
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Usage: astris"));
    assert!(stdout.contains("configure"));
    assert!(std::fs::read_dir(dir.path()).unwrap().next().is_none());
}

// =============================================================================
// Legacy Form
// =============================================================================

#[test]
fn cli_legacy_modules_resolve() {
    let cli = parse_legacy(&["astris", "-app", "-renderer", "-vs2019"]);
    let Some(Command::Configure(args)) = cli.command else {
        panic!("expected configure");
    };

    assert_eq!(args.generator.generator(), Some(Generator::Vs2019));
    let resolved = resolve(
        ModuleCatalog::builtin(),
        &args.selection.request(),
        UnknownModulePolicy::Fail,
    )
    .unwrap();
    let ids: Vec<&str> = resolved.iter().map(|id| id.as_str()).collect();
    assert_eq!(ids, ["renderer", "app", "third_party"]);
}

#[test]
fn cli_legacy_all() {
    let cli = parse_legacy(&["astris", "-all"]);
    let Some(Command::Configure(args)) = cli.command else {
        panic!("expected configure");
    };
    assert_eq!(args.selection.request(), ModuleRequest::All);
}

#[test]
fn cli_legacy_reset_cache() {
    let cli = parse_legacy(&["astris", "-reset_cache"]);
    assert!(matches!(cli.command, Some(Command::ResetCache(_))));
}

#[test]
fn cli_legacy_help_is_a_help_request() {
    let err = Cli::try_parse_from(translate_args(["astris", "-help"])).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}

#[test]
fn cli_legacy_generator_conflict() {
    let err = Cli::try_parse_from(translate_args(["astris", "-engine", "-vs2017", "-vs2022"]))
        .unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
}

// =============================================================================
// Subcommands
// =============================================================================

#[test]
fn cli_directives_with_globals() {
    let cli = Cli::try_parse_from([
        "astris",
        "--ini",
        "a.toml",
        "--ini",
        "b.toml",
        "directives",
        "vulkan_rhi",
        "tests",
    ])
    .unwrap();

    assert_eq!(cli.global.inis.len(), 2);
    let Some(Command::Directives(args)) = cli.command else {
        panic!("expected directives");
    };
    assert_eq!(args.selection.modules, ["vulkan_rhi", "tests"]);
}

#[test]
fn cli_configure_help_lists_modules() {
    let err = Cli::try_parse_from(["astris", "configure", "--help"]).unwrap_err();
    let help = err.to_string();
    assert!(help.contains("MODULES:"));
    assert!(help.contains("vulkan_rhi"));
    assert!(help.contains("--vs2019"));
}

#[test]
fn cli_options_and_inis() {
    assert!(matches!(
        Cli::try_parse_from(["astris", "options"]).unwrap().command,
        Some(Command::Options)
    ));
    assert!(matches!(
        Cli::try_parse_from(["astris", "inis"]).unwrap().command,
        Some(Command::Inis)
    ));
}

#[test]
fn cli_unknown_subcommand() {
    assert!(Cli::try_parse_from(["astris", "build"]).is_err());
}
