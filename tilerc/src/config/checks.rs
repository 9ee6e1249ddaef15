use anyhow::{bail, Result};
use std::collections::HashSet;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use tilerc_core::config::{Lifecycle, Match};
use tilerc_core::utils::modmask_lookup::is_modifier;
use tilerc_core::{Action, Descriptor};

fn print_errors(errors: &[String]) {
    for error in errors {
        println!("\x1b[1;91mERROR:\x1b[0m\x1b[1m {error} \x1b[0m");
    }
}

fn report(errors: &[String], ok: &str) -> bool {
    if errors.is_empty() {
        println!("\x1b[0;92m    -> {ok} OK\x1b[0m");
        true
    } else {
        print_errors(errors);
        false
    }
}

/// Structural problems a host would refuse to load.
pub fn check_descriptor(descriptor: &Descriptor, verbose: bool) -> bool {
    println!("\x1b[0;94m::\x1b[0m Checking descriptor . . .");
    if verbose {
        println!(
            "{} keys, {} groups, {} layouts, {} screens",
            descriptor.keys.len(),
            descriptor.groups.len(),
            descriptor.layouts.len(),
            descriptor.screens.len()
        );
    }
    let errors: Vec<String> = descriptor
        .validate()
        .err()
        .map(|err| err.to_string())
        .into_iter()
        .collect();
    report(&errors, "Descriptor")
}

/// Modifiers must be known, chords must be unique and widget commands must address a
/// widget that is on some bar.
pub fn check_keybinds(descriptor: &Descriptor, verbose: bool) -> bool {
    println!("\x1b[0;94m::\x1b[0m Checking keybinds . . .");
    let errors = keybind_problems(descriptor, verbose);
    report(&errors, "All keybinds")
}

fn keybind_problems(descriptor: &Descriptor, verbose: bool) -> Vec<String> {
    let mut returns = Vec::new();
    for key in &descriptor.keys {
        if verbose {
            println!("Keybind: {} -> {} action(s)", key.chord(), key.actions.len());
        }
        for modifier in &key.modifiers {
            if !is_modifier(modifier) {
                returns.push(format!(
                    "Modifier `{modifier}` is not valid for keybind {}",
                    key.chord()
                ));
            }
        }
        for action in &key.actions {
            if let Action::Widget { widget, command } = action {
                let on_a_bar = descriptor
                    .screens
                    .iter()
                    .flat_map(|screen| screen.bars())
                    .any(|bar| bar.has_widget(widget));
                if !on_a_bar {
                    returns.push(format!(
                        "Keybind {} calls `{command}` on widget `{widget}`, which is on no bar",
                        key.chord()
                    ));
                }
            }
        }
    }

    for (earlier, later) in descriptor.binding_table().shadowed() {
        returns.push(format!(
            "\x1b[0m\x1b[1mMultiple commands bound to key combination {}:\
            \n\x1b[1;91m    -> {:?}\
            \n    -> {:?}\
            \n\x1b[0mHelp: only the last one is used, change one of the keybindings to something else.\n",
            later.chord(),
            earlier.actions,
            later.actions,
        ));
    }
    returns
}

/// Every group and floating rule must be able to select a window.
pub fn check_matches(descriptor: &Descriptor, verbose: bool) -> bool {
    println!("\x1b[0;94m::\x1b[0m Checking window rules . . .");
    let errors = match_problems(descriptor, verbose);
    report(&errors, "Window rules")
}

fn match_problems(descriptor: &Descriptor, verbose: bool) -> Vec<String> {
    let group_rules = descriptor.groups.iter().flat_map(|group| {
        group
            .matches
            .iter()
            .map(move |rule| (format!("group {}", group.name), rule))
    });
    let float_rules = descriptor
        .floating_layout
        .float_rules
        .iter()
        .map(|rule| ("floating layout".to_owned(), rule));

    let mut seen: HashSet<&Match> = HashSet::new();
    let mut returns = Vec::new();
    for (owner, rule) in group_rules.chain(float_rules) {
        if verbose {
            println!("Rule {rule} of {owner}");
        }
        if !rule.is_well_formed() {
            returns.push(format!("Rule {rule} of {owner} can never match a window"));
        }
        if owner == "floating layout" && !seen.insert(rule) {
            returns.push(format!("Rule {rule} appears twice in the floating layout"));
        }
    }
    returns
}

/// The scripts run by the lifecycle hooks must exist and be executable.
pub fn check_lifecycle(lifecycle: &Lifecycle, verbose: bool) -> bool {
    println!("\x1b[0;94m::\x1b[0m Checking lifecycle scripts . . .");
    let mut errors = Vec::new();
    for script in [&lifecycle.autostart, &lifecycle.theme] {
        if let Err(err) = check_permissions(script, verbose) {
            errors.push(err.to_string());
        }
    }
    if lifecycle.shutdown.is_empty() {
        errors.push("The shutdown command is empty".to_owned());
    }
    report(&errors, "Lifecycle scripts")
}

fn check_permissions(filepath: &Path, verbose: bool) -> Result<()> {
    let Ok(metadata) = fs::metadata(filepath) else {
        bail!("File not found: {}", filepath.display());
    };
    let permissions = metadata.permissions();
    if metadata.is_file() && (permissions.mode() & 0o111 != 0) {
        if verbose {
            println!(
                "Found `{}` with executable permissions",
                filepath.display()
            );
        }
        Ok(())
    } else {
        bail!(
            "Found `{}`, but missing executable permissions!",
            filepath.display(),
        );
    }
}

/// Runs every check, returning whether all of them passed.
pub fn check_all(descriptor: &Descriptor, verbose: bool) -> bool {
    // Evaluate each check so every problem is printed, not only the first.
    let results = [
        check_descriptor(descriptor, verbose),
        check_keybinds(descriptor, verbose),
        check_matches(descriptor, verbose),
        check_lifecycle(&descriptor.lifecycle, verbose),
    ];
    results.iter().all(|ok| *ok)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, ConfigPaths};
    use crate::Palette;
    use tilerc_core::config::Key;
    use tilerc_core::LayoutCommand;

    fn descriptor() -> Descriptor {
        Config::new(ConfigPaths::new("/nonexistent"), Palette::default(), "xterm")
            .build()
            .unwrap()
    }

    #[test]
    fn built_configuration_has_no_keybind_problems() {
        assert!(keybind_problems(&descriptor(), false).is_empty());
        assert!(match_problems(&descriptor(), false).is_empty());
    }

    #[test]
    fn duplicate_chords_are_reported() {
        let mut descriptor = descriptor();
        descriptor.keys.push(Key::new(
            &["control", "mod4"],
            "r",
            vec![Action::Layout(LayoutCommand::Flip)],
        ));
        let problems = keybind_problems(&descriptor, false);
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("Multiple commands"));
    }

    #[test]
    fn unknown_modifier_is_reported() {
        let mut descriptor = descriptor();
        descriptor.keys.push(Key::new(&["hyper"], "x", vec![Action::NextLayout]));
        let problems = keybind_problems(&descriptor, false);
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("`hyper`"));
    }

    #[test]
    fn widget_command_needs_the_widget_on_a_bar() {
        let mut descriptor = descriptor();
        for screen in &mut descriptor.screens {
            if let Some(bar) = screen.top.as_mut() {
                bar.widgets.retain(|w| w.name() != "keyboardlayout");
            }
        }
        let problems = keybind_problems(&descriptor, false);
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("keyboardlayout"));
    }

    #[test]
    fn empty_class_list_never_matches() {
        let mut descriptor = descriptor();
        descriptor.groups[0].matches.push(Match::WmClass(vec![]));
        let problems = match_problems(&descriptor, false);
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("group 1"));
    }

    #[test]
    fn scripts_must_be_executable() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("autostart.sh");
        fs::write(&script, "#!/bin/sh\n").unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o644)).unwrap();
        assert!(check_permissions(&script, false).is_err());
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        assert!(check_permissions(&script, false).is_ok());
        assert!(check_permissions(&dir.path().join("theme.sh"), false).is_err());
    }
}
