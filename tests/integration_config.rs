// astris-build: AdAstris Engine Build Configurator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests layering of TOML files, `--ini` files and CLI overrides.

use astris_build::cli::Cli;
use astris_build::cmake::{CmakeInvoker, Generator};
use astris_build::config::{Config, ConfigLoader};
use astris_build::logging::LogLevel;
use astris_build::module::UnknownModulePolicy;
use clap::Parser;
use std::path::Path;

// =============================================================================
// Loading from TOML files
// =============================================================================

#[test]
fn config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("astris.toml");
    std::fs::write(
        &path,
        format!(
            "[paths]\nroot = \"{}\"\n\n[cmake]\ngenerator = \"vs2017\"\n",
            dir.path().display()
        ),
    )
    .unwrap();

    let config = Config::from_file(&path).unwrap();

    assert_eq!(config.cmake.generator, Generator::Vs2017);
    assert_eq!(config.paths.build().unwrap(), dir.path().join("build"));
}

#[test]
fn config_missing_required_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Config::from_file(dir.path().join("nope.toml")).is_err());
}

#[test]
fn config_later_files_override_earlier() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("base.toml");
    let local = dir.path().join("local.toml");
    std::fs::write(&base, "[global]\nunknown_modules = \"ignore\"\noutput_log_level = 2\n").unwrap();
    std::fs::write(&local, "[global]\noutput_log_level = 4\n").unwrap();

    let config = ConfigLoader::new()
        .add_toml_file(&base)
        .add_toml_file(&local)
        .with_default_root(dir.path())
        .build()
        .unwrap();

    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(config.global.unknown_modules, UnknownModulePolicy::Ignore);
}

// =============================================================================
// CLI overrides
// =============================================================================

#[test]
fn config_cli_flags_override_files() {
    let cli = Cli::try_parse_from([
        "astris",
        "--dry",
        "-l",
        "1",
        "-d",
        "/srv/engine",
        "-s",
        "cmake/fresh=false",
        "list",
    ])
    .unwrap();

    let config = ConfigLoader::new()
        .add_toml_str("[global]\ndry = false\noutput_log_level = 5\n[paths]\nroot = \"/other\"\n")
        .with_overrides(cli.global.to_config_overrides())
        .unwrap()
        .build()
        .unwrap();

    assert!(config.global.dry);
    assert_eq!(config.global.output_log_level, LogLevel::ERROR);
    assert_eq!(config.global.file_log_level, LogLevel::ERROR);
    assert!(!config.cmake.fresh);
    assert_eq!(config.paths.root().unwrap(), Path::new("/srv/engine"));
}

#[test]
fn config_drives_cmake_invoker() {
    let config = ConfigLoader::new()
        .add_toml_str("[global]\ndry = true\n[cmake]\ngenerator = \"ninja\"\n")
        .with_default_root("/engine")
        .build()
        .unwrap();

    let configured = CmakeInvoker::from_config(&config, None).unwrap();
    assert_eq!(configured.selected_generator(), Generator::Ninja);
    assert!(configured.is_dry_run());

    // An explicit generator flag wins over the configured one.
    let flagged = CmakeInvoker::from_config(&config, Some(Generator::Vs2019)).unwrap();
    assert_eq!(flagged.selected_generator(), Generator::Vs2019);

    // Paths must be resolved first.
    assert!(CmakeInvoker::from_config(&Config::default(), None).is_err());
}
