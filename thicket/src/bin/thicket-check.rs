use anyhow::Result;
use clap::{arg, command};
use std::path::PathBuf;
use thicket::Config;

fn main() -> Result<()> {
    let matches = command!("thicket-check")
        .about("Checks syntax of the configuration file")
        .help_template(thicket::utils::get_help_template())
        .args(&[
            arg!(-v --verbose "Outputs received configuration file."),
            arg!([INPUT] "Sets the input file to use. Uses the XDG config file otherwise."),
        ])
        .get_matches();

    let verbose = matches.get_flag("verbose");
    let config_file = matches.get_one::<String>("INPUT").map(PathBuf::from);

    println!(
        "\x1b[0;94m::\x1b[0m thicket version: {}",
        env!("CARGO_PKG_VERSION")
    );
    println!("\x1b[0;94m::\x1b[0m Loading configuration . . .");
    match check_config_file(config_file, verbose) {
        Ok(config) => {
            println!("\x1b[0;92m    -> Configuration loaded OK \x1b[0m");
            if verbose {
                dbg!(&config);
            }
            config.check_window_rules(verbose);
        }
        Err(err) => {
            println!("\x1b[1;91mERROR:\x1b[0m\x1b[1m Configuration failed. Reason: {err:?} \x1b[0m");
            std::process::exit(1);
        }
    }
    Ok(())
}

/// Loads configuration from either specified file (preferred) or default.
/// # Errors
///
/// Errors if the file cannot be read or parsed, or if the configuration is invalid.
fn check_config_file(path: Option<PathBuf>, verbose: bool) -> Result<Config> {
    let path = match path {
        Some(path) => {
            println!("\x1b[1;35mNote: Using file {} \x1b[0m", path.display());
            path
        }
        None => thicket::get_default_path()?,
    };
    if verbose {
        dbg!(&path);
    }
    let config = if path.exists() {
        thicket::load_from_file(&path)?
    } else {
        println!("\x1b[1;93mWARN: {} not found, checking the defaults.\x1b[0m", path.display());
        Config::default()
    };
    config.check()?;
    Ok(config)
}
