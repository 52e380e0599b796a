// astris-build: AdAstris Engine Build Configurator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Dependency classification.
//!
//! ```text
//! Full        needs app + third_party   (renderer, engine, ...)
//! Partial     needs third_party only    (vulkan_rhi, project_launcher)
//! Independent needs nothing             (everything else)
//! ```

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use super::{ModuleId, id_set};

/// How a module depends on the two prerequisite modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyClass {
    Full,
    Partial,
    Independent,
}

impl fmt::Display for DependencyClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => write!(f, "full"),
            Self::Partial => write!(f, "partial"),
            Self::Independent => write!(f, "independent"),
        }
    }
}

/// Classifies modules by static membership in two sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyClassifier {
    core_app: ModuleId,
    third_party: ModuleId,
    full: BTreeSet<ModuleId>,
    partial: BTreeSet<ModuleId>,
}

impl DependencyClassifier {
    /// Creates a classifier with the designated prerequisite modules and
    /// empty classification sets.
    pub fn new(core_app: impl Into<String>, third_party: impl Into<String>) -> Self {
        Self {
            core_app: ModuleId::new(core_app),
            third_party: ModuleId::new(third_party),
            full: BTreeSet::new(),
            partial: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn with_full<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.full.extend(id_set(ids));
        self
    }

    #[must_use]
    pub fn with_partial<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.partial.extend(id_set(ids));
        self
    }

    #[must_use]
    pub fn classify(&self, id: &str) -> DependencyClass {
        if self.full.contains(id) {
            DependencyClass::Full
        } else if self.partial.contains(id) {
            DependencyClass::Partial
        } else {
            DependencyClass::Independent
        }
    }

    /// The core application module, synthesized for fully dependent modules.
    #[must_use]
    pub const fn core_app(&self) -> &ModuleId {
        &self.core_app
    }

    /// The third-party module, synthesized for fully and partially dependent modules.
    #[must_use]
    pub const fn third_party(&self) -> &ModuleId {
        &self.third_party
    }

    pub(super) fn overlapping(&self) -> impl Iterator<Item = &ModuleId> {
        self.full.intersection(&self.partial)
    }

    pub(super) fn classified(&self) -> impl Iterator<Item = &ModuleId> {
        self.full.iter().chain(self.partial.iter())
    }
}
