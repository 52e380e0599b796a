// astris-build: AdAstris Engine Build Configurator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Translation of the single-dash command line used by the old build script.
//!
//! ```text
//! astris -renderer -tests       → astris configure renderer tests
//! astris -all -vs2019           → astris configure --vs2019 all
//! astris -reset_cache -ninja    → astris reset-cache --ninja
//! astris -help                  → astris --help
//! astris -l 4 configure app     → unchanged
//! ```
//!
//! Only an argv whose first argument is a single-dash word is translated.
//! Arguments that are not single-dash words are passed through after the
//! subcommand.

const GENERATOR_WORDS: &[&str] = &["vs2017", "vs2019", "vs2022", "ninja"];

/// Returns true for `-word` tokens longer than a short flag like `-l`.
fn is_legacy_word(arg: &str) -> bool {
    arg.strip_prefix('-').is_some_and(|word| {
        word.len() > 1
            && !word.starts_with('-')
            && word.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
    })
}

/// Rewrites a legacy argv into the subcommand form understood by clap.
///
/// The program name is kept as the first element. Argument vectors that do
/// not start with a single-dash word are returned unchanged.
#[must_use]
pub fn translate_args<I, S>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(Into::into).collect();
    let Some((program, rest)) = args.split_first() else {
        return args;
    };
    if !rest.first().is_some_and(|first| is_legacy_word(first)) {
        return args;
    }

    let mut help = false;
    let mut reset_cache = false;
    let mut flags = Vec::new();
    let mut modules = Vec::new();
    let mut passthrough = Vec::new();

    for arg in rest {
        if !is_legacy_word(arg) {
            passthrough.push(arg.clone());
            continue;
        }
        let word = &arg[1..];
        match word {
            "help" => help = true,
            "reset_cache" => reset_cache = true,
            w if GENERATOR_WORDS.contains(&w) => flags.push(format!("--{w}")),
            w => modules.push(w.to_string()),
        }
    }

    let mut translated = vec![program.clone()];
    if help {
        translated.push("--help".to_string());
        return translated;
    }

    if reset_cache {
        translated.push("reset-cache".to_string());
        translated.extend(flags);
    } else {
        translated.push("configure".to_string());
        translated.extend(flags);
        translated.extend(modules);
    }
    translated.extend(passthrough);
    translated
}
