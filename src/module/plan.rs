// astris-build: AdAstris Engine Build Configurator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configure plan: the resolved set plus both directives.

use super::{
    Directive, ModuleCatalog, ModuleRequest, ResolvedSet, UnknownModulePolicy,
    compile_disable_all, compile_enable, resolve,
};
use crate::error::ModuleError;

/// Everything the `CMake` invoker needs for one configure run.
///
/// `reset` always switches off every registered module so that a previous
/// selective run cannot leak options into this one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurePlan {
    resolved: ResolvedSet,
    reset: Directive,
    enable: Directive,
}

impl ConfigurePlan {
    /// Resolves `request` and compiles both directives.
    ///
    /// # Errors
    ///
    /// Returns [`ModuleError::UnknownModule`] if resolution rejects a module.
    pub fn new(
        catalog: &ModuleCatalog,
        request: &ModuleRequest,
        policy: UnknownModulePolicy,
    ) -> Result<Self, ModuleError> {
        let resolved = resolve(catalog, request, policy)?;
        let enable = compile_enable(catalog.registry(), &resolved)?;
        let reset = compile_disable_all(catalog.registry());
        Ok(Self {
            resolved,
            reset,
            enable,
        })
    }

    #[must_use]
    pub const fn resolved(&self) -> &ResolvedSet {
        &self.resolved
    }

    #[must_use]
    pub const fn reset(&self) -> &Directive {
        &self.reset
    }

    #[must_use]
    pub const fn enable(&self) -> &Directive {
        &self.enable
    }
}
