// astris-build: AdAstris Engine Build Configurator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Module registry: module identifier to `CMake` option symbol.
//!
//! ```text
//! app         --> BUILD_ENGINE_CORE
//! third_party --> BUILD_THIRD_PARTY
//! renderer    --> BUILD_RENDERER
//! ...
//! ```
//!
//! Enumeration always follows table order, never hash order.

use std::collections::BTreeSet;

use serde::Serialize;

use super::ModuleId;
use crate::error::ModuleError;

/// A module and the configuration symbol `CMake` knows it by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleDescriptor {
    id: ModuleId,
    symbol: String,
}

impl ModuleDescriptor {
    pub fn new(id: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            id: ModuleId::new(id),
            symbol: symbol.into(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> &ModuleId {
        &self.id
    }

    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}

/// Ordered, read-only table of known modules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleRegistry {
    descriptors: Vec<ModuleDescriptor>,
}

impl ModuleRegistry {
    /// Creates a registry from descriptors in enumeration order.
    ///
    /// # Errors
    ///
    /// Returns [`ModuleError::DuplicateModule`] if an identifier appears twice.
    pub fn new(
        descriptors: impl IntoIterator<Item = ModuleDescriptor>,
    ) -> Result<Self, ModuleError> {
        let descriptors: Vec<_> = descriptors.into_iter().collect();
        let mut seen = BTreeSet::new();
        for descriptor in &descriptors {
            if !seen.insert(descriptor.id()) {
                return Err(ModuleError::DuplicateModule(descriptor.id().to_string()));
            }
        }
        Ok(Self { descriptors })
    }

    pub(super) const fn from_descriptors_unchecked(descriptors: Vec<ModuleDescriptor>) -> Self {
        Self { descriptors }
    }

    /// Returns the configuration symbol for a module.
    ///
    /// # Errors
    ///
    /// Returns [`ModuleError::UnknownModule`] if the module is not registered.
    pub fn lookup(&self, id: &str) -> Result<&str, ModuleError> {
        self.descriptor(id)
            .map(ModuleDescriptor::symbol)
            .ok_or_else(|| ModuleError::UnknownModule(id.to_string()))
    }

    #[must_use]
    pub fn descriptor(&self, id: &str) -> Option<&ModuleDescriptor> {
        self.descriptors.iter().find(|d| d.id == *id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.descriptor(id).is_some()
    }

    /// Returns every registered identifier in table order.
    pub fn all_ids(&self) -> impl ExactSizeIterator<Item = &ModuleId> {
        self.descriptors.iter().map(ModuleDescriptor::id)
    }

    #[must_use]
    pub fn descriptors(&self) -> &[ModuleDescriptor] {
        &self.descriptors
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.descriptors.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
