//! layout-svg CLI
//!
//! Usage:
//!   layout-svg [OPTIONS] [FILE]
//!
//! Options:
//!   -o, --output <FILE>      Write the SVG here instead of stdout
//!   -s, --stylesheet <FILE>  CSS rules to embed (TOML format)
//!       --no-stylesheet      Embed no stylesheet at all
//!       --log-level <LEVEL>  off, error, warn, info, debug or trace
//!   -h, --help               Print help

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use clap::Parser;
use log::{debug, info, LevelFilter};

use layout_svg::{LayoutDocument, StyleSheet};

#[derive(Parser, Debug)]
#[command(name = "layout-svg")]
#[command(about = "Render positioned box trees to SVG")]
struct Cli {
    /// Layout document (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Stylesheet file with CSS rules (TOML format)
    #[arg(short, long, conflicts_with = "no_stylesheet")]
    stylesheet: Option<PathBuf>,

    /// Do not embed the default stylesheet
    #[arg(long)]
    no_stylesheet: bool,

    /// Log verbosity
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let cli = Cli::parse();

    let log_level = LevelFilter::from_str(&cli.log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {}. Using 'warn' instead.", cli.log_level);
        LevelFilter::Warn
    });
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();
    debug!(cli:?; "Parsed arguments");

    // Load stylesheet
    let stylesheet = if cli.no_stylesheet {
        None
    } else {
        match &cli.stylesheet {
            Some(path) => match StyleSheet::from_file(path) {
                Ok(s) => Some(s),
                Err(e) => {
                    eprintln!("Error loading stylesheet '{}': {}", path.display(), e);
                    process::exit(1);
                }
            },
            None => Some(StyleSheet::default()),
        }
    };

    // Read input
    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    process::exit(1);
                }
            }
        }
    };

    let document = match LayoutDocument::from_str(&source) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("{}", e.format(&source, &filename).trim_end());
            process::exit(1);
        }
    };

    let svg = document.render(stylesheet);

    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, &svg) {
                eprintln!("Error writing file '{}': {}", path.display(), e);
                process::exit(1);
            }
            info!(bytes = svg.len(); "Wrote {}", path.display());
        }
        None => println!("{}", svg),
    }
}
