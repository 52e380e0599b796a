// astris-build: AdAstris Engine Build Configurator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{AstrisError, AstrisResult, ConfigError, FsError, ModuleError, ProcessError};

#[test]
fn test_config_error_display() {
    let err = ConfigError::MissingKey {
        section: "paths".to_string(),
        key: "root".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @"missing required config key 'root' in section '[paths]'");
}

#[test]
fn test_module_error_display() {
    let err: AstrisError = ModuleError::UnknownModule("physics".to_string()).into();
    insta::assert_snapshot!(err.to_string(), @"module error: unknown module 'physics'");
}

#[test]
fn test_external_tool_failure_display() {
    let err: AstrisError = ProcessError::NonZeroExit {
        command: "cmake".to_string(),
        code: 1,
    }
    .into();
    insta::assert_snapshot!(err.to_string(), @"process error: process 'cmake' exited with code 1");
}

#[test]
fn test_not_a_directory_display() {
    let err: AstrisError = FsError::NotADirectory {
        path: "/project/build".to_string(),
    }
    .into();
    insta::assert_snapshot!(err.to_string(), @"filesystem error: '/project/build' exists but is not a directory");
}

#[test]
fn test_astris_error_size() {
    let size = std::mem::size_of::<AstrisError>();
    assert!(size <= 24, "AstrisError is {size} bytes, expected <= 24");
}

#[test]
fn test_astris_result_size() {
    let size = std::mem::size_of::<AstrisResult<()>>();
    assert!(size <= 24, "AstrisResult<()> is {size} bytes, expected <= 24");
}
