// astris-build: AdAstris Engine Build Configurator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the module-selecting commands.
//!
//! ```text
//! configure  [MODULE]... [--all] [--vs2017|--vs2019|--vs2022|--ninja]
//! directives [MODULE]... [--all]
//! reset-cache            [--vs2017|--vs2019|--vs2022|--ninja]
//! list       [--json]
//! ```

use clap::{ArgAction, Args};

use crate::cmake::Generator;
use crate::module::ModuleRequest;

/// Appended to the `configure` help.
pub const MODULES_HELP: &str = "MODULES:\n\n\
    app, third_party, project_launcher, vulkan_rhi, renderer, render_core,\n\
    engine, tests\n\n\
    Full modules also enable app and third_party; project_launcher and\n\
    vulkan_rhi also enable third_party. See `astris list` for the CMake\n\
    symbols.";

/// Module selection shared by `configure` and `directives`.
#[derive(Debug, Clone, Default, Args)]
pub struct ModuleArgs {
    /// Selects every registered module.
    #[arg(long, action = ArgAction::SetTrue)]
    pub all: bool,

    /// Modules to enable, e.g. 'renderer' or 'vulkan_rhi'.
    /// Prerequisites are added automatically.
    #[arg(value_name = "MODULE")]
    pub modules: Vec<String>,
}

impl ModuleArgs {
    /// Returns true when neither modules nor `--all` were given.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !self.all && self.modules.is_empty()
    }

    #[must_use]
    pub fn request(&self) -> ModuleRequest {
        ModuleRequest::from_tokens(self.all, &self.modules)
    }
}

/// `CMake` generator selection. At most one flag may be given.
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct GeneratorArgs {
    /// Generates a Visual Studio 2017 solution.
    #[arg(long, action = ArgAction::SetTrue, conflicts_with_all = ["vs2019", "vs2022", "ninja"])]
    pub vs2017: bool,

    /// Generates a Visual Studio 2019 solution.
    #[arg(long, action = ArgAction::SetTrue, conflicts_with_all = ["vs2017", "vs2022", "ninja"])]
    pub vs2019: bool,

    /// Generates a Visual Studio 2022 solution.
    #[arg(long, action = ArgAction::SetTrue, conflicts_with_all = ["vs2017", "vs2019", "ninja"])]
    pub vs2022: bool,

    /// Generates Ninja build files.
    #[arg(long, action = ArgAction::SetTrue, conflicts_with_all = ["vs2017", "vs2019", "vs2022"])]
    pub ninja: bool,
}

impl GeneratorArgs {
    /// Generator chosen on the command line, if any.
    #[must_use]
    pub const fn generator(&self) -> Option<Generator> {
        if self.vs2017 {
            Some(Generator::Vs2017)
        } else if self.vs2019 {
            Some(Generator::Vs2019)
        } else if self.vs2022 {
            Some(Generator::Vs2022)
        } else if self.ninja {
            Some(Generator::Ninja)
        } else {
            None
        }
    }
}

/// Arguments for the `configure` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ConfigureArgs {
    #[command(flatten)]
    pub selection: ModuleArgs,

    #[command(flatten)]
    pub generator: GeneratorArgs,
}

/// Arguments for the `reset-cache` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ResetCacheArgs {
    #[command(flatten)]
    pub generator: GeneratorArgs,
}

/// Arguments for the `directives` command.
#[derive(Debug, Clone, Default, Args)]
pub struct DirectivesArgs {
    #[command(flatten)]
    pub selection: ModuleArgs,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Prints the module table as JSON.
    #[arg(long)]
    pub json: bool,
}
