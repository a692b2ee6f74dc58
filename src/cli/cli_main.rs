use super::summary::print_summary;
use crate::Conversion::convert::Converter;
use crate::Conversion::error::MechError;
use crate::Conversion::library::SerdeLibrary;
use crate::Mechanism::compare::Comparator;
use crate::settings::Settings;
use clap::{Parser, Subcommand};
use log::{LevelFilter, error};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "mechtools")]
#[command(about = "Convert chemical mechanisms between dialects and check them for equivalence")]
#[command(version)]
#[command(
    long_about = "mechtools reads and writes chemical kinetic mechanisms in a native YAML dialect\n\
and a foreign split dialect (mechanism file with thermo and transport companions).\n\
\n\
Examples:\n  \
mechtools convert gri30.yaml -o out/          # native -> out/gri30.inp + companions\n  \
mechtools convert gri30.inp --thermo gri30_thermo.dat\n  \
mechtools compare gri30.yaml out/gri30.yaml   # exit code 0 when equivalent\n  \
mechtools info gri30.yaml"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Settings file (JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a mechanism into the other dialect
    Convert {
        /// Mechanism file; the extension decides the dialect
        model: PathBuf,

        /// Thermo companion of a foreign mechanism
        #[arg(long)]
        thermo: Option<PathBuf>,

        /// Transport companion of a foreign mechanism
        #[arg(long)]
        transport: Option<PathBuf>,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Reject repeated entries and unknown colliders in foreign input
        #[arg(long)]
        strict: bool,
    },

    /// Check two mechanisms for equivalence
    Compare {
        first: PathBuf,
        second: PathBuf,
    },

    /// Print a summary of a mechanism
    Info { model: PathBuf },
}

fn level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub fn init_logger(verbose: u8) {
    // a logger may already be installed when embedded
    let _ = TermLogger::init(
        level(verbose),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
}

fn settings(config: Option<&PathBuf>) -> Result<Settings, MechError> {
    match config {
        Some(path) => Settings::load(path),
        None => Ok(Settings::default()),
    }
}

/// runs a parsed command; Ok(false) means the mechanisms compared unequal
pub fn execute(cli: &Cli) -> Result<bool, MechError> {
    let mut settings = settings(cli.config.as_ref())?;
    match &cli.command {
        Commands::Convert {
            model,
            thermo,
            transport,
            output,
            strict,
        } => {
            if *strict {
                settings.permissive = false;
            }
            let converter = Converter::new(SerdeLibrary, settings);
            let converted =
                converter.convert(model, thermo.as_deref(), transport.as_deref(), output)?;
            for path in converted.paths() {
                println!("{}", path.display());
            }
            Ok(true)
        }
        Commands::Compare { first, second } => {
            let comparator = Comparator::new(settings.tolerance);
            let converter = Converter::new(SerdeLibrary, settings);
            let a = converter.load(first)?;
            let b = converter.load(second)?;
            match comparator.compare(&a, &b) {
                Ok(()) => {
                    println!("equivalent");
                    Ok(true)
                }
                Err(mismatch) => {
                    println!("not equivalent: {}", mismatch);
                    Ok(false)
                }
            }
        }
        Commands::Info { model } => {
            let model = Converter::new(SerdeLibrary, settings).load(model)?;
            print_summary(&model);
            Ok(true)
        }
    }
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    match execute(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::from(2)
        }
    }
}
