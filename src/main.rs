use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pwform::errors::FormError;
use pwform::generators::Sampling;
use pwform::password::{ Toggles, submit };
use pwform::settings::Settings;
use pwform::{ clipboard, prompt };

/// Generate a random password from a length and a set of character classes.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Password length, 4 to 16
    #[arg(short = 'L', long, required_unless_present_any = ["interactive", "init_config"])]
    length: Option<String>,

    /// Include lowercase letters
    #[arg(short, long)]
    lower: bool,

    /// Include uppercase letters
    #[arg(short, long)]
    upper: bool,

    /// Include numbers
    #[arg(short, long)]
    numbers: bool,

    /// Include symbols
    #[arg(short, long)]
    symbols: bool,

    #[arg(long, conflicts_with = "lower")]
    no_lower: bool,

    #[arg(long, conflicts_with = "upper")]
    no_upper: bool,

    #[arg(long, conflicts_with = "numbers")]
    no_numbers: bool,

    #[arg(long, conflicts_with = "symbols")]
    no_symbols: bool,

    /// Start from the reset defaults instead of the initial ones
    #[arg(long)]
    reset: bool,

    /// Number of passwords to generate
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    count: u32,

    /// Draw indices from 0..=len; some positions may come out empty
    #[arg(long)]
    legacy_sampling: bool,

    /// Copy the last password to the clipboard
    #[arg(long)]
    copy: bool,

    /// Prompt for the length until it is valid
    #[arg(short, long, conflicts_with = "length")]
    interactive: bool,

    /// Settings file (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write the current settings file with defaults and exit
    #[arg(long)]
    init_config: bool,

    /// More log output, repeat for more
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn toggles(&self, settings: &Settings) -> Toggles {
        let mut toggles = if self.reset { Toggles::reset(settings) } else { settings.initial };

        toggles.lower = (toggles.lower || self.lower) && !self.no_lower;
        toggles.upper = (toggles.upper || self.upper) && !self.no_upper;
        toggles.digits = (toggles.digits || self.numbers) && !self.no_numbers;
        toggles.symbols = (toggles.symbols || self.symbols) && !self.no_symbols;

        toggles
    }

    fn sampling(&self) -> Sampling {
        if self.legacy_sampling { Sampling::Legacy } else { Sampling::Uniform }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let Some(config_path) = cli.config.clone().or_else(Settings::default_path) else {
        eprintln!("Could not determine a config directory. Use --config.");
        return ExitCode::FAILURE;
    };

    if cli.init_config {
        return match Settings::default().save(&config_path) {
            Ok(()) => {
                println!("Wrote {}", config_path.display());
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("{}", e);
                ExitCode::FAILURE
            }
        };
    }

    let settings = match Settings::load(&config_path) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let toggles = cli.toggles(&settings);
    let sampling = cli.sampling();

    let last = if cli.interactive {
        let stdin = io::stdin();
        match prompt::run(stdin.lock(), io::stdout(), &settings, toggles, sampling) {
            Ok(last) => last,
            Err(e) => {
                eprintln!("I/O error: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        let raw = cli.length.as_deref().unwrap_or_default();
        let mut last = None;
        for _ in 0..cli.count {
            match submit(raw, &toggles, sampling) {
                Ok(password) => {
                    println!("{}", password);
                    last = Some(password);
                }
                Err(e) => {
                    eprintln!("{}", e);
                    if let FormError::NoClassesSelected = e {
                        eprintln!("Enable one with --lower, --upper, --numbers or --symbols.");
                    }
                    return ExitCode::from(2);
                }
            }
        }
        last
    };

    if cli.copy {
        if let Some(password) = last {
            if let Err(e) = clipboard::copy(&password) {
                eprintln!("{}", e);
                return ExitCode::FAILURE;
            }
            tracing::info!("copied to clipboard");
        }
    }

    ExitCode::SUCCESS
}
