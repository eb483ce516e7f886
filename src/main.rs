//! stems-demucs Command Line Interface
//!
//! Split audio files into stems with Demucs.

use clap::{Parser, Subcommand};
use log::{info, warn};
use std::path::{Path, PathBuf};
use stems_demucs::{DemucsCommand, Model, SeparationConfig, Separator, Stem, StemInfo, StemMap};

#[derive(Parser)]
#[command(name = "stems-demucs")]
#[command(about = "Split audio into drums, bass, other and vocals with Demucs", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Separate an audio file into stems
    Separate {
        /// Input audio file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory (a temporary directory if omitted)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Model name
        #[arg(short = 'n', long, default_value_t = Model::default())]
        model: Model,

        /// Device passed to demucs (cpu, cuda, cuda:1, mps)
        #[arg(short, long, default_value = stems_demucs::core::DEFAULT_DEVICE)]
        device: String,

        /// Stems to keep (currently all stems are written)
        #[arg(long, value_delimiter = ',')]
        stems: Option<Vec<Stem>>,

        /// Python interpreter with demucs installed
        #[arg(long, value_name = "PATH")]
        python: Option<PathBuf>,
    },

    /// List the stems in a separated directory
    Stems {
        /// Directory containing <stem>.wav files
        #[arg(value_name = "DIR")]
        dir: PathBuf,
    },

    /// List supported models
    Models,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging
    if cli.verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    info!("stems-demucs {}", stems_demucs::VERSION);

    match cli.command {
        Commands::Separate {
            input,
            output,
            model,
            device,
            stems,
            python,
        } => {
            let mut separator = Separator::from_config(SeparationConfig::from_model(model, device));
            if let Some(python) = python {
                separator = separator.with_command(DemucsCommand::python(python));
            }

            let separated = separator.separate(&input, output.as_deref(), stems.as_deref())?;
            println!("Separated into {}", separated.display());

            let found = separator.get_stems(&separated);
            if found.is_empty() {
                warn!("No stem files found in {}", separated.display());
            }
            print_stems(&found);
        }
        Commands::Stems { dir } => {
            let found = stems_demucs::get_stems(&dir);
            if found.is_empty() {
                println!("No stems in {}", dir.display());
            }
            print_stems(&found);
        }
        Commands::Models => {
            for model in Model::ALL {
                let marker = if model == Model::default() { " (default)" } else { "" };
                println!("{:<12} {}{}", model, model.description(), marker);
            }
        }
    }

    Ok(())
}

fn print_stems(stems: &StemMap) {
    for (stem, path) in stems {
        println!("{:<7} {}{}", stem, path.display(), describe(path));
    }
}

fn describe(path: &Path) -> String {
    match StemInfo::probe(path) {
        Ok(info) => format!(
            "  [{} Hz, {} ch, {}-bit, {:.1}s]",
            info.sample_rate,
            info.channels,
            info.bits_per_sample,
            info.duration().as_secs_f64()
        ),
        Err(e) => {
            warn!("Could not read {}: {}", path.display(), e);
            String::new()
        }
    }
}
