// astris-build: AdAstris Engine Build Configurator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::builder::ProcessBuilder;
use crate::error::ProcessError;

#[test]
fn test_command_line_quotes_spaces() {
    let builder = ProcessBuilder::new("cmake")
        .arg("-G")
        .arg("Visual Studio 17 2022")
        .arg("-DBUILD_TESTS=ON");
    insta::assert_snapshot!(builder.command_line(), @r#"cmake -G "Visual Studio 17 2022" -DBUILD_TESTS=ON"#);
}

#[test]
fn test_display_name() {
    assert_eq!(ProcessBuilder::new("/usr/bin/cmake").display_name(), "cmake");
    assert_eq!(
        ProcessBuilder::new("/usr/bin/cmake").name("configure").display_name(),
        "configure"
    );
}

#[test]
fn test_executable_lookup_not_found() {
    let program = "nonexistent_program_12345";

    let err = ProcessBuilder::which(program).unwrap_err();
    assert!(matches!(err, ProcessError::ExecutableNotFound { ref name } if name == program));
    assert!(ProcessBuilder::find(program).is_none());
}

#[cfg(unix)]
#[tokio::test]
async fn test_process_success_with_output() {
    let output = ProcessBuilder::new("/bin/sh")
        .args(["-c", "echo configured; echo warning >&2"])
        .run()
        .await
        .expect("shell should succeed");

    assert_eq!(output.exit_code(), 0);
}

#[cfg(unix)]
#[tokio::test]
async fn test_process_non_zero_exit_is_error() {
    let err = ProcessBuilder::new("/bin/sh")
        .args(["-c", "exit 3"])
        .name("configure")
        .run()
        .await
        .unwrap_err();

    let process_err = err
        .downcast_ref::<ProcessError>()
        .expect("should be a ProcessError");
    assert!(matches!(
        process_err,
        ProcessError::NonZeroExit { code: 3, command } if command == "configure"
    ));
}

#[tokio::test]
async fn test_process_spawn_failure() {
    let err = ProcessBuilder::new("/definitely/not/a/program")
        .run()
        .await
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ProcessError>(),
        Some(ProcessError::SpawnFailed { .. })
    ));
}
