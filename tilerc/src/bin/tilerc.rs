use anyhow::{bail, Context, Result};
use clap::{arg, command, value_parser, ArgMatches, Command};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use tilerc::config::checks;
use tilerc::utils::file_handler::{self, Format};
use tilerc::{hooks, CommandHost, Config, ConfigPaths};
use tilerc_core::child_process::Children;
use tilerc_core::{Descriptor, Hooks, LifecycleEvent};

fn main() -> Result<()> {
    let matches = get_command().get_matches();

    let level = matches
        .get_one::<String>("log-level")
        .cloned()
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| "info".to_owned());
    let (subscriber, log_parse_err) = tilerc::utils::log::parse_log_level(&level);
    tracing::subscriber::set_global_default(subscriber)
        .context("Couldn't setup global subscriber (logger)")?;
    if let Some(err) = log_parse_err {
        tracing::warn!("Error parsing log level `{level}`: {err}");
    }

    let paths = match matches.get_one::<String>("config-dir") {
        Some(dir) => ConfigPaths::new(expand(dir)),
        None => ConfigPaths::discover()?,
    };

    match matches.subcommand() {
        Some(("check", sub)) => check(&paths, sub),
        Some(("dump", sub)) => dump(&paths, sub),
        Some(("hook", sub)) => hook(&paths, sub),
        Some(("next-wallpaper", _)) => next_wallpaper(&paths),
        Some(("keys", _)) => {
            print_keys(&Config::load(paths).build()?);
            Ok(())
        }
        _ => unreachable!("a subcommand is required"),
    }
}

fn get_command() -> Command {
    command!("tilerc")
        .about("Builds, checks and runs the hooks of a tiling window manager configuration")
        .help_template(tilerc::utils::get_help_template())
        .subcommand_required(true)
        .args(&[
            arg!(--"config-dir" <DIR> "Directory holding autostart.sh, theme.sh and the palette. Defaults to ~/.config/qtile.")
                .global(true),
            arg!(--"log-level" <LEVEL> "Log filter, e.g. `debug` or `info,tilerc=trace`. Defaults to $RUST_LOG or `info`.")
                .global(true),
        ])
        .subcommands([
            Command::new("check")
                .about("Checks a descriptor and the scripts it runs")
                .args(&[
                    arg!(-v --verbose "Outputs the received descriptor."),
                    arg!([INPUT] "Descriptor file to check. Builds the configuration otherwise."),
                ]),
            Command::new("dump")
                .about("Writes the descriptor for a host to read")
                .args(&[
                    arg!(-f --format <FORMAT> "Output format.")
                        .value_parser(value_parser!(Format))
                        .default_value("ron"),
                    arg!(-o --output <FILE> "File to write. Prints to stdout otherwise."),
                ]),
            Command::new("hook")
                .about("Fires a lifecycle hook")
                .arg(
                    arg!(<EVENT> "The hook to fire.")
                        .value_parser(["startup-once", "startup", "shutdown"]),
                ),
            Command::new("next-wallpaper")
                .about("Switches to the next theme and asks the running window manager to reload"),
            Command::new("keys").about("Lists the effective key bindings"),
        ])
}

fn expand(path: &str) -> PathBuf {
    match shellexpand::full(path) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(err) => {
            tracing::warn!("Could not expand `{path}`: {err}");
            PathBuf::from(path)
        }
    }
}

fn check(paths: &ConfigPaths, matches: &ArgMatches) -> Result<()> {
    let verbose = matches.get_flag("verbose");
    println!(
        "\x1b[0;94m::\x1b[0m tilerc version: {}",
        env!("CARGO_PKG_VERSION")
    );
    println!(
        "\x1b[0;94m::\x1b[0m tilerc git hash: {}",
        git_version::git_version!(fallback = option_env!("GIT_HASH").unwrap_or("NONE"))
    );
    check_enabled_features();

    println!("\x1b[0;94m::\x1b[0m Loading descriptor . . .");
    let descriptor = match matches.get_one::<String>("INPUT") {
        Some(input) => {
            let input = expand(input);
            println!("\x1b[1;35mNote: Using file {} \x1b[0m", input.display());
            file_handler::load_descriptor(input)
        }
        None => Config::load(paths.clone()).build(),
    };
    let descriptor = match descriptor {
        Ok(descriptor) => {
            println!("\x1b[0;92m    -> Descriptor loaded OK \x1b[0m");
            descriptor
        }
        Err(err) => bail!("Descriptor failed. Reason: {err}"),
    };
    if verbose {
        dbg!(&descriptor);
    }

    if !checks::check_all(&descriptor, verbose) {
        bail!("Some checks failed");
    }
    Ok(())
}

fn check_enabled_features() {
    if env!("TILERC_FEATURES").is_empty() {
        println!("\x1b[0;94m::\x1b[0m Built with no enabled features.");
    } else {
        println!(
            "\x1b[0;94m::\x1b[0m Enabled features:{}",
            env!("TILERC_FEATURES")
        );
    }
}

fn dump(paths: &ConfigPaths, matches: &ArgMatches) -> Result<()> {
    let format = matches
        .get_one::<Format>("format")
        .copied()
        .unwrap_or_default();
    let descriptor = Config::load(paths.clone()).build()?;
    match matches.get_one::<String>("output") {
        Some(output) => file_handler::write_to_file(&expand(output), &descriptor, format)?,
        None => println!("{}", file_handler::to_string(&descriptor, format)?),
    }
    Ok(())
}

fn hook(paths: &ConfigPaths, matches: &ArgMatches) -> Result<()> {
    let event = match matches.get_one::<String>("EVENT").map(String::as_str) {
        Some("startup-once") => LifecycleEvent::StartupOnce,
        Some("startup") => LifecycleEvent::Startup,
        Some("shutdown") => LifecycleEvent::Shutdown,
        other => bail!("Unknown hook {other:?}"),
    };
    let children = Rc::new(RefCell::new(Children::new()));
    let mut registry = Hooks::new();
    hooks::register(&mut registry, &paths.lifecycle(), children);
    registry
        .fire(event)
        .with_context(|| format!("The {event} hook failed"))?;
    Ok(())
}

fn next_wallpaper(paths: &ConfigPaths) -> Result<()> {
    let mut host = CommandHost::default();
    hooks::next_wallpaper(&paths.lifecycle(), &mut host).context("Could not switch the theme")
}

fn print_keys(descriptor: &Descriptor) {
    let table = descriptor.binding_table();
    for key in &descriptor.keys {
        // Shadowed entries never fire
        if !table
            .lookup(&key.chord())
            .is_some_and(|effective| std::ptr::eq(effective, key))
        {
            continue;
        }
        let actions: Vec<String> = key.actions.iter().map(ToString::to_string).collect();
        println!(
            "{:<28} {:<48} {}",
            key.chord().to_string(),
            actions.join(", "),
            key.desc.as_deref().unwrap_or_default()
        );
    }
}
