// astris-build: AdAstris Engine Build Configurator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Closure resolution: requested modules plus implied prerequisites.
//!
//! ```text
//! for id in request (input order):
//!   unknown?      Fail -> error | Ignore -> warn, skip
//!   id == app     not emitted directly
//!   otherwise     emit id (third_party only once)
//!   Full          emit app, third_party   (each at most once)
//!   Partial       emit third_party        (at most once)
//!
//! All --> registry order, every module exactly once
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::{DependencyClass, ModuleCatalog, ModuleId};
use crate::error::ModuleError;

/// What to do with a requested module the registry does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownModulePolicy {
    /// Abort resolution with [`ModuleError::UnknownModule`].
    #[default]
    Fail,
    /// Drop the module and log a warning.
    Ignore,
}

/// Modules requested for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleRequest {
    /// Every registered module.
    All,
    /// Explicit modules in command-line order.
    Modules(Vec<ModuleId>),
}

impl ModuleRequest {
    /// Builds a request from command-line tokens.
    ///
    /// A literal `all` token anywhere (dashed or not) turns the request into
    /// [`ModuleRequest::All`].
    pub fn from_tokens<I, S>(all: bool, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ids: Vec<ModuleId> = tokens
            .into_iter()
            .map(|t| ModuleId::from_flag(t.as_ref()))
            .collect();

        if all || ids.iter().any(|id| id == "all") {
            Self::All
        } else {
            Self::Modules(ids)
        }
    }

    /// Returns true when nothing was requested.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Modules(ids) if ids.is_empty())
    }
}

/// Ordered modules to enable for one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolvedSet(Vec<ModuleId>);

impl ResolvedSet {
    pub fn iter(&self) -> std::slice::Iter<'_, ModuleId> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[ModuleId] {
        &self.0
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|m| m == id)
    }

    /// Number of times a module appears.
    #[must_use]
    pub fn occurrences(&self, id: &str) -> usize {
        self.0.iter().filter(|m| *m == id).count()
    }
}

impl<'a> IntoIterator for &'a ResolvedSet {
    type Item = &'a ModuleId;
    type IntoIter = std::slice::Iter<'a, ModuleId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Tracks which prerequisites were already emitted during one resolution.
#[derive(Debug, Default)]
struct ResolutionState {
    app_enabled: bool,
    third_party_enabled: bool,
}

/// Resolves a request into the full ordered set of modules to enable.
///
/// # Errors
///
/// Returns [`ModuleError::UnknownModule`] for an unregistered module when
/// `policy` is [`UnknownModulePolicy::Fail`].
pub fn resolve(
    catalog: &ModuleCatalog,
    request: &ModuleRequest,
    policy: UnknownModulePolicy,
) -> Result<ResolvedSet, ModuleError> {
    let resolved = match request {
        ModuleRequest::All => ResolvedSet(catalog.registry().all_ids().cloned().collect()),
        ModuleRequest::Modules(ids) => resolve_modules(catalog, ids, policy)?,
    };

    info!(modules = ?resolved.as_slice(), "Resolved modules");
    Ok(resolved)
}

fn resolve_modules(
    catalog: &ModuleCatalog,
    requested: &[ModuleId],
    policy: UnknownModulePolicy,
) -> Result<ResolvedSet, ModuleError> {
    let registry = catalog.registry();
    let classifier = catalog.classifier();
    let core_app = classifier.core_app();
    let third_party = classifier.third_party();

    let mut out = Vec::with_capacity(requested.len() + 2);
    let mut state = ResolutionState::default();

    for id in requested {
        if !registry.contains(id.as_str()) {
            match policy {
                UnknownModulePolicy::Fail => {
                    return Err(ModuleError::UnknownModule(id.to_string()));
                }
                UnknownModulePolicy::Ignore => {
                    warn!(module = %id, "Ignoring unknown module");
                    continue;
                }
            }
        }

        if id == third_party {
            if !state.third_party_enabled {
                out.push(id.clone());
                state.third_party_enabled = true;
            }
        } else if id != core_app {
            out.push(id.clone());
        }

        match classifier.classify(id.as_str()) {
            DependencyClass::Full if !state.app_enabled => {
                debug!(module = %id, prerequisite = %core_app, "Adding prerequisite");
                out.push(core_app.clone());
                state.app_enabled = true;

                if !state.third_party_enabled {
                    debug!(module = %id, prerequisite = %third_party, "Adding prerequisite");
                    out.push(third_party.clone());
                    state.third_party_enabled = true;
                }
            }
            DependencyClass::Partial if !state.third_party_enabled => {
                debug!(module = %id, prerequisite = %third_party, "Adding prerequisite");
                out.push(third_party.clone());
                state.third_party_enabled = true;
            }
            _ => {}
        }
    }

    Ok(ResolvedSet(out))
}
