// astris-build: AdAstris Engine Build Configurator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Engine module catalog and dependency resolution.
//!
//! ```text
//! ModuleRequest ["renderer", "vulkan_rhi"]
//!        |
//!        v
//! resolve(catalog)  classify: Full | Partial | Independent
//!        |          synthesize app / third_party at most once
//!        v
//! ResolvedSet [renderer, app, third_party, vulkan_rhi]
//!        |
//!        v
//! compile_enable()       BUILD_RENDERER=ON BUILD_ENGINE_CORE=ON ...
//! compile_disable_all()  BUILD_ENGINE_CORE=OFF BUILD_THIRD_PARTY=OFF ...
//! ```
//!
//! The built-in catalog is immutable and shared for the whole process.

pub mod classify;
pub mod directive;
pub mod plan;
pub mod registry;
pub mod resolve;


use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::OnceLock;

use crate::error::ModuleError;

pub use classify::{DependencyClass, DependencyClassifier};
pub use directive::{Directive, compile_disable_all, compile_enable};
pub use plan::ConfigurePlan;
pub use registry::{ModuleDescriptor, ModuleRegistry};
pub use resolve::{ModuleRequest, ResolvedSet, UnknownModulePolicy, resolve};

/// Identifier of the core application module.
pub const CORE_APP: &str = "app";

/// Identifier of the bundled third-party libraries module.
pub const THIRD_PARTY: &str = "third_party";

/// Built-in modules in their fixed enumeration order.
const BUILTIN_MODULES: &[(&str, &str)] = &[
    (CORE_APP, "BUILD_ENGINE_CORE"),
    (THIRD_PARTY, "BUILD_THIRD_PARTY"),
    ("project_launcher", "BUILD_PROJECT_LAUNCHER"),
    ("vulkan_rhi", "BUILD_VULKAN_RHI"),
    ("renderer", "BUILD_RENDERER"),
    ("render_core", "BUILD_RENDER_CORE"),
    ("engine", "BUILD_LOW_LEVEL_ENGINE"),
    ("tests", "BUILD_TESTS"),
];

/// Modules that need both the core application and third-party libraries.
const FULLY_DEPENDENT: &[&str] = &["render_core", "engine", "renderer", CORE_APP, "tests"];

/// Modules that need only the third-party libraries.
const PARTIALLY_DEPENDENT: &[&str] = &["project_launcher", "vulkan_rhi"];

static BUILTIN: OnceLock<ModuleCatalog> = OnceLock::new();

/// Identifier of an engine module, e.g. `renderer` or `vulkan_rhi`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleId(String);

impl ModuleId {
    /// Creates an identifier from its canonical name.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Creates an identifier from a command-line token.
    ///
    /// Leading dashes are stripped so `-renderer` and `renderer` are the
    /// same module.
    #[must_use]
    pub fn from_flag(flag: &str) -> Self {
        Self::new(flag.trim_start_matches('-'))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ModuleId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl Borrow<str> for ModuleId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ModuleId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ModuleId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A registry paired with the classifier that describes its dependencies.
#[derive(Debug, Clone)]
pub struct ModuleCatalog {
    registry: ModuleRegistry,
    classifier: DependencyClassifier,
}

impl ModuleCatalog {
    /// Validates and pairs a registry with a classifier.
    ///
    /// # Errors
    ///
    /// Returns [`ModuleError::OverlappingClass`] if a module is both fully
    /// and partially dependent, or [`ModuleError::UnregisteredPrerequisite`]
    /// if a classified module or a designated prerequisite is missing from
    /// the registry.
    pub fn new(
        registry: ModuleRegistry,
        classifier: DependencyClassifier,
    ) -> Result<Self, ModuleError> {
        if let Some(id) = classifier.overlapping().next() {
            return Err(ModuleError::OverlappingClass(id.to_string()));
        }

        let prerequisites = [classifier.core_app(), classifier.third_party()];
        if let Some(id) = classifier
            .classified()
            .chain(prerequisites)
            .find(|id| !registry.contains(id.as_str()))
        {
            return Err(ModuleError::UnregisteredPrerequisite(id.to_string()));
        }

        Ok(Self {
            registry,
            classifier,
        })
    }

    /// Returns the process-wide built-in catalog.
    #[must_use]
    pub fn builtin() -> &'static Self {
        BUILTIN.get_or_init(|| Self {
            registry: builtin_registry(),
            classifier: builtin_classifier(),
        })
    }

    #[must_use]
    pub const fn registry(&self) -> &ModuleRegistry {
        &self.registry
    }

    #[must_use]
    pub const fn classifier(&self) -> &DependencyClassifier {
        &self.classifier
    }
}

pub(crate) fn builtin_registry() -> ModuleRegistry {
    ModuleRegistry::from_descriptors_unchecked(
        BUILTIN_MODULES
            .iter()
            .map(|(id, symbol)| ModuleDescriptor::new(*id, *symbol))
            .collect(),
    )
}

pub(crate) fn builtin_classifier() -> DependencyClassifier {
    DependencyClassifier::new(CORE_APP, THIRD_PARTY)
        .with_full(FULLY_DEPENDENT.iter().copied())
        .with_partial(PARTIALLY_DEPENDENT.iter().copied())
}

pub(crate) fn id_set<I, S>(ids: I) -> BTreeSet<ModuleId>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ids.into_iter().map(ModuleId::new).collect()
}
