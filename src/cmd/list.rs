// astris-build: AdAstris Engine Build Configurator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! List and directives commands.

use serde::Serialize;

use crate::cli::configure::{DirectivesArgs, ListArgs};
use crate::config::Config;
use crate::error::Result;
use crate::module::{ConfigurePlan, DependencyClass, ModuleCatalog, ModuleId};

/// One row of `astris list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleRow<'a> {
    pub id: &'a ModuleId,
    pub symbol: &'a str,
    pub class: DependencyClass,
}

/// Rows for every registered module, in registry order.
#[must_use]
pub fn module_rows(catalog: &ModuleCatalog) -> Vec<ModuleRow<'_>> {
    catalog
        .registry()
        .descriptors()
        .iter()
        .map(|d| ModuleRow {
            id: d.id(),
            symbol: d.symbol(),
            class: catalog.classifier().classify(d.id().as_str()),
        })
        .collect()
}

/// Renders the module table as aligned text.
#[must_use]
pub fn format_module_table(rows: &[ModuleRow<'_>]) -> Vec<String> {
    let id_width = rows.iter().map(|r| r.id.as_str().len()).max().unwrap_or(0);
    let symbol_width = rows.iter().map(|r| r.symbol.len()).max().unwrap_or(0);
    rows.iter()
        .map(|r| {
            format!(
                "{:<id_width$}  {:<symbol_width$}  {}",
                r.id.as_str(),
                r.symbol,
                r.class
            )
        })
        .collect()
}

/// Main handler for list command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn run_list_command(args: &ListArgs) -> Result<()> {
    let rows = module_rows(ModuleCatalog::builtin());
    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for line in format_module_table(&rows) {
            println!("{line}");
        }
    }
    Ok(())
}

/// Main handler for directives command.
///
/// Prints the resolved modules and both `CMake` directives.
///
/// # Errors
///
/// Returns an error if a module is unknown under the `fail` policy.
pub fn run_directives_command(args: &DirectivesArgs, config: &Config) -> Result<()> {
    if args.selection.is_empty() {
        println!("No modules requested");
        return Ok(());
    }

    let plan = ConfigurePlan::new(
        ModuleCatalog::builtin(),
        &args.selection.request(),
        config.global.unknown_modules,
    )?;
    for line in format_plan(&plan) {
        println!("{line}");
    }
    Ok(())
}

/// Renders a plan for display, one field per line.
#[must_use]
pub fn format_plan(plan: &ConfigurePlan) -> Vec<String> {
    let modules: Vec<&str> = plan.resolved().iter().map(ModuleId::as_str).collect();
    vec![
        format!("modules: {}", modules.join(" ")),
        format!("enable:  {}", plan.enable().as_str().trim_end()),
        format!("reset:   {}", plan.reset().as_str().trim_end()),
    ]
}
