// astris-build: AdAstris Engine Build Configurator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::loader::parse_override;
use super::{Config, ConfigLoader, PathsConfig};
use crate::cmake::Generator;
use crate::error::ConfigError;
use crate::logging::{LogFormat, LogLevel};
use crate::module::UnknownModulePolicy;
use std::path::{Path, PathBuf};

fn load(toml: &str) -> Config {
    ConfigLoader::new()
        .add_toml_str(toml)
        .with_default_root("/engine")
        .build()
        .unwrap()
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert!(!config.global.dry);
    assert_eq!(config.global.output_log_level, LogLevel::INFO);
    assert_eq!(config.global.file_log_level, LogLevel::TRACE);
    assert_eq!(config.global.log_format, LogFormat::Text);
    assert_eq!(config.global.unknown_modules, UnknownModulePolicy::Fail);
    assert_eq!(config.cmake.generator, Generator::Vs2022);
    assert!(config.cmake.fresh);
    assert!(config.cmake.executable.as_os_str().is_empty());
}

#[test]
fn test_parse_full_config() {
    let config = load(
        r#"
[global]
dry = true
output_log_level = 4
log_file = "logs/astris.log"
log_format = "json"
unknown_modules = "ignore"

[cmake]
executable = "/opt/cmake/bin/cmake"
generator = "ninja"
fresh = false

[paths]
build = "out"
"#,
    );

    assert!(config.global.dry);
    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(config.global.log_file, Some(PathBuf::from("logs/astris.log")));
    assert_eq!(config.global.log_format, LogFormat::Json);
    assert_eq!(config.global.unknown_modules, UnknownModulePolicy::Ignore);
    assert_eq!(config.cmake.executable, PathBuf::from("/opt/cmake/bin/cmake"));
    assert_eq!(config.cmake.generator, Generator::Ninja);
    assert!(!config.cmake.fresh);
    assert_eq!(config.paths.build().unwrap(), Path::new("/engine/out"));
}

#[test]
fn test_paths_defaults_resolve_against_root() {
    let config = load("");

    assert_eq!(config.paths.root().unwrap(), Path::new("/engine"));
    assert_eq!(config.paths.source().unwrap(), Path::new("/engine"));
    assert_eq!(config.paths.build().unwrap(), Path::new("/engine/build"));
    assert_eq!(config.paths.bin().unwrap(), Path::new("/engine/bin"));
    assert_eq!(
        config.paths.cache().unwrap(),
        Path::new("/engine/build/intermediate/cache")
    );
}

#[test]
fn test_paths_empty_strings_use_defaults() {
    let config = load("[paths]\nsource = \"\"\nbin = \"\"\n");

    assert_eq!(config.paths.source().unwrap(), Path::new("/engine"));
    assert_eq!(config.paths.bin().unwrap(), Path::new("/engine/bin"));
}

#[test]
fn test_paths_relative_root() {
    let config = load("[paths]\nroot = \"game\"\nsource = \"code\"\ncache = \"/tmp/cache\"\n");

    assert_eq!(config.paths.root().unwrap(), Path::new("/engine/game"));
    assert_eq!(config.paths.source().unwrap(), Path::new("/engine/game/code"));
    assert_eq!(config.paths.cache().unwrap(), Path::new("/tmp/cache"));
}

#[test]
fn test_unresolved_paths_report_missing_key() {
    let err = PathsConfig::default().bin().unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"missing required config key 'bin' in section '[paths]'");
}

#[test]
fn test_overrides_win_over_files() {
    let config = ConfigLoader::new()
        .add_toml_str("[cmake]\ngenerator = \"vs2019\"\n[global]\ndry = false\n")
        .with_default_root("/engine")
        .with_overrides([
            "cmake/generator=ninja",
            "global/dry=true",
            "global/output_log_level=5",
        ])
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.cmake.generator, Generator::Ninja);
    assert!(config.global.dry);
    assert_eq!(config.global.output_log_level, LogLevel::TRACE);
}

#[test]
fn test_invalid_override_entry() {
    let Err(err) = ConfigLoader::new().with_overrides(["generator=ninja"]) else {
        panic!("override without section must fail");
    };
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::InvalidOverride(entry)) if entry == "generator=ninja"
    ));
}

#[test]
fn test_parse_override() {
    assert_eq!(
        parse_override("paths/root = /tmp/engine"),
        Some(("paths.root".to_string(), "/tmp/engine".to_string()))
    );
    assert_eq!(
        parse_override("global/log_file=a=b.log"),
        Some(("global.log_file".to_string(), "a=b.log".to_string()))
    );
    assert_eq!(parse_override("global/dry"), None);
    assert_eq!(parse_override("/dry=true"), None);
    assert_eq!(parse_override("global/=true"), None);
}

#[test]
fn test_invalid_generator_rejected() {
    assert!(Config::parse("[cmake]\ngenerator = \"xcode\"\n").is_err());
}

#[test]
fn test_invalid_unknown_module_policy_rejected() {
    assert!(Config::parse("[global]\nunknown_modules = \"warn\"\n").is_err());
}

#[test]
fn test_log_level_out_of_range_rejected() {
    assert!(Config::parse("[global]\noutput_log_level = 9\n").is_err());
}

#[test]
fn test_unknown_fields_rejected() {
    assert!(Config::parse("[cmake]\ngenrator = \"ninja\"\n").is_err());
    assert!(Config::parse("[task]\nmo_org = \"x\"\n").is_err());
}

#[test]
fn test_format_options() {
    let options = load("[cmake]\ngenerator = \"ninja\"\n").format_options();

    assert!(options.iter().any(|line| line == "cmake.generator         = Ninja"));
    assert!(options.iter().any(|line| line == "global.unknown_modules  = fail"));
    assert!(options.iter().any(|line| line == "paths.build             = /engine/build"));
    let keys: Vec<&str> = options
        .iter()
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    let mut sorted = keys.clone();
    sorted.sort_unstable();
    assert_eq!(keys, sorted);
}

#[test]
fn test_loaded_files_listing() {
    let dir = tempfile::tempdir().unwrap();
    let ini = dir.path().join("extra.toml");
    std::fs::write(&ini, "[global]\ndry = true\n").unwrap();

    let loader = ConfigLoader::new()
        .add_toml_file_optional(dir.path().join("missing.toml"))
        .add_toml_file(&ini)
        .with_default_root(dir.path());
    let files = loader.format_loaded_files();

    assert_eq!(files, [format!("1. [file] {}", ini.display())]);
    assert!(loader.build().unwrap().global.dry);
}
