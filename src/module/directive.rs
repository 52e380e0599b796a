// astris-build: AdAstris Engine Build Configurator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Directive compiler.
//!
//! ```text
//! [renderer, app, third_party]
//!   --> "BUILD_RENDERER=ON BUILD_ENGINE_CORE=ON BUILD_THIRD_PARTY=ON "
//!
//! registry (all modules)
//!   --> "BUILD_ENGINE_CORE=OFF BUILD_THIRD_PARTY=OFF ... BUILD_TESTS=OFF "
//! ```
//!
//! Every token is followed by exactly one space. Duplicates in the resolved
//! set are rendered as-is.

use std::fmt::{self, Write as _};

use super::{ModuleRegistry, ResolvedSet};
use crate::error::ModuleError;

/// Space-joined `SYMBOL=ON` / `SYMBOL=OFF` tokens for the build configurator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directive(String);

impl Directive {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterates over the individual `SYMBOL=VALUE` tokens.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy)]
enum Switch {
    On,
    Off,
}

impl Switch {
    const fn as_str(self) -> &'static str {
        match self {
            Self::On => "ON",
            Self::Off => "OFF",
        }
    }
}

fn render<'a>(symbols: impl IntoIterator<Item = &'a str>, switch: Switch) -> Directive {
    let mut out = String::new();
    for symbol in symbols {
        let _ = write!(out, "{symbol}={} ", switch.as_str());
    }
    Directive(out)
}

/// Renders the enable directive for a resolved set, in order.
///
/// # Errors
///
/// Returns [`ModuleError::UnknownModule`] if the set names a module the
/// registry does not know.
pub fn compile_enable(
    registry: &ModuleRegistry,
    resolved: &ResolvedSet,
) -> Result<Directive, ModuleError> {
    let symbols = resolved
        .iter()
        .map(|id| registry.lookup(id.as_str()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(render(symbols, Switch::On))
}

/// Renders a directive switching off every registered module.
#[must_use]
pub fn compile_disable_all(registry: &ModuleRegistry) -> Directive {
    render(
        registry.descriptors().iter().map(|d| d.symbol()),
        Switch::Off,
    )
}
