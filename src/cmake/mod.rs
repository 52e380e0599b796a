// astris-build: AdAstris Engine Build Configurator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `CMake` invoker for the configure and cache reset passes.
//!
//! ```text
//! configure(directive)
//!   cmake -S <src> -B <build> -G <gen> -D<TOKEN> ...
//!
//! apply(plan)
//!   1. cmake [--fresh] -S <src> -B <build> -G <gen> -D<SYMBOL>=OFF ...   (reset)
//!   2. cmake           -S <src> -B <build> -G <gen> -D<SYMBOL>=ON  ...   (enable)
//!
//! reset_cache()
//!   cmake --fresh -S <src> -B <build> -G <gen>
//! ```
//!
//! Each pass is fail-fast: the first non-zero exit aborts the run.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::module::{ConfigurePlan, Directive};
use crate::process::ProcessBuilder;

/// `CMake` generator used for the build tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Generator {
    Vs2017,
    Vs2019,
    #[default]
    Vs2022,
    Ninja,
    UnixMakefiles,
}

impl Generator {
    /// Name passed to `cmake -G`.
    #[must_use]
    pub const fn cmake_name(self) -> &'static str {
        match self {
            Self::Vs2017 => "Visual Studio 15 2017",
            Self::Vs2019 => "Visual Studio 16 2019",
            Self::Vs2022 => "Visual Studio 17 2022",
            Self::Ninja => "Ninja",
            Self::UnixMakefiles => "Unix Makefiles",
        }
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.cmake_name())
    }
}

/// Runs `cmake` against one source/build directory pair.
#[derive(Debug, Clone)]
pub struct CmakeInvoker {
    executable: Option<PathBuf>,
    source_dir: PathBuf,
    build_dir: PathBuf,
    generator: Generator,
    fresh: bool,
    dry_run: bool,
}

impl CmakeInvoker {
    #[must_use]
    pub fn new(source_dir: impl AsRef<Path>, build_dir: impl AsRef<Path>) -> Self {
        Self {
            executable: None,
            source_dir: source_dir.as_ref().to_path_buf(),
            build_dir: build_dir.as_ref().to_path_buf(),
            generator: Generator::default(),
            fresh: false,
            dry_run: false,
        }
    }

    /// Creates an invoker from resolved configuration.
    ///
    /// `generator` takes precedence over `cmake.generator`.
    ///
    /// # Errors
    ///
    /// Returns an error if the source or build path is not resolved.
    pub fn from_config(config: &Config, generator: Option<Generator>) -> Result<Self> {
        let mut invoker = Self::new(config.paths.source()?, config.paths.build()?)
            .generator(generator.unwrap_or(config.cmake.generator))
            .fresh(config.cmake.fresh)
            .dry_run(config.global.dry);
        if !config.cmake.executable.as_os_str().is_empty() {
            invoker = invoker.executable(&config.cmake.executable);
        }
        Ok(invoker)
    }

    #[must_use]
    pub fn executable(mut self, path: impl AsRef<Path>) -> Self {
        self.executable = Some(path.as_ref().to_path_buf());
        self
    }

    #[must_use]
    pub const fn generator(mut self, generator: Generator) -> Self {
        self.generator = generator;
        self
    }

    /// Whether the reset pass discards the existing cache with `--fresh`.
    #[must_use]
    pub const fn fresh(mut self, fresh: bool) -> Self {
        self.fresh = fresh;
        self
    }

    #[must_use]
    pub const fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    #[must_use]
    pub const fn selected_generator(&self) -> Generator {
        self.generator
    }

    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Switches every module off, then on for the resolved set.
    ///
    /// # Errors
    ///
    /// Returns the first pass's error, typically `ProcessError::NonZeroExit`;
    /// the enable pass is not run when the reset pass fails.
    pub async fn apply(&self, plan: &ConfigurePlan) -> Result<()> {
        info!(
            generator = %self.generator,
            modules = ?plan.resolved().as_slice(),
            "Configuring build tree"
        );

        self.run_pass(self.configure_command(plan.reset(), self.fresh)?, "reset")
            .await?;
        self.configure(plan.enable()).await?;

        info!(build = %self.build_dir.display(), "CMake configure completed successfully");
        Ok(())
    }

    /// Runs one configure pass with the directive's tokens as `-D` definitions.
    ///
    /// # Errors
    ///
    /// Returns an error if `cmake` cannot be found or exits non-zero.
    pub async fn configure(&self, directive: &Directive) -> Result<()> {
        self.run_pass(self.configure_command(directive, false)?, "configure")
            .await
    }

    /// Regenerates the build tree from scratch, keeping no cached options.
    ///
    /// # Errors
    ///
    /// Returns an error if `cmake` cannot be found or exits non-zero.
    pub async fn reset_cache(&self) -> Result<()> {
        let command = self.base_command(true)?;
        self.run_pass(command, "reset-cache").await?;
        info!(build = %self.build_dir.display(), "CMake cache reset");
        Ok(())
    }

    fn cmake_builder(&self) -> Result<ProcessBuilder> {
        if let Some(path) = &self.executable {
            return Ok(ProcessBuilder::new(path));
        }
        match ProcessBuilder::which("cmake") {
            Ok(builder) => Ok(builder),
            // A dry run only prints the command line.
            Err(_) if self.dry_run => Ok(ProcessBuilder::new("cmake")),
            Err(e) => Err(e).context("cmake executable not found"),
        }
    }

    fn base_command(&self, fresh: bool) -> Result<ProcessBuilder> {
        let mut builder = self.cmake_builder()?.name("cmake");
        if fresh {
            builder = builder.arg("--fresh");
        }
        Ok(builder
            .arg("-S")
            .arg(&self.source_dir)
            .arg("-B")
            .arg(&self.build_dir)
            .arg("-G")
            .arg(self.generator.cmake_name()))
    }

    fn configure_command(&self, directive: &Directive, fresh: bool) -> Result<ProcessBuilder> {
        let builder = self.base_command(fresh)?;
        Ok(builder.args(directive.tokens().map(|token| format!("-D{token}"))))
    }

    async fn run_pass(&self, command: ProcessBuilder, pass: &str) -> Result<()> {
        if self.dry_run {
            info!(pass, cmd = %command.command_line(), "[dry-run] Would run CMake");
            return Ok(());
        }

        command
            .run()
            .await
            .with_context(|| format!("CMake {pass} pass failed"))?;
        Ok(())
    }
}
