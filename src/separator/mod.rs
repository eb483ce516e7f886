//! Demucs separation orchestration

pub mod command;

pub use command::DemucsCommand;

use crate::core::{DEFAULT_DEVICE, Model, SeparationConfig, Stem, StemMap};
use crate::error::{DemucsError, DemucsResult};
use crate::runner::{CommandRunner, SystemRunner};
use log::{debug, info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Prefix of temporary output directories
pub const TEMP_DIR_PREFIX: &str = "demucs_";

/// Runs demucs on audio files and locates the stems it writes
#[derive(Debug, Clone)]
pub struct Separator<R = SystemRunner> {
    config: SeparationConfig,
    command: DemucsCommand,
    runner: R,
}

impl Separator<SystemRunner> {
    /// Create a separator for a model name and device
    pub fn new(model: &str, device: impl Into<String>) -> DemucsResult<Self> {
        Ok(Separator::from_config(SeparationConfig::new(model, device)?))
    }

    /// Create a separator from a configuration
    pub fn from_config(config: SeparationConfig) -> Self {
        Separator {
            config,
            command: DemucsCommand::default(),
            runner: SystemRunner,
        }
    }
}

impl Default for Separator<SystemRunner> {
    fn default() -> Self {
        Separator::from_config(SeparationConfig::default())
    }
}

impl<R: CommandRunner> Separator<R> {
    /// Use a different way of executing commands
    pub fn with_runner<R2: CommandRunner>(self, runner: R2) -> Separator<R2> {
        Separator {
            config: self.config,
            command: self.command,
            runner,
        }
    }

    /// Use a different demucs launcher
    pub fn with_command(mut self, command: DemucsCommand) -> Self {
        self.command = command;
        self
    }

    /// Get the configuration
    pub fn config(&self) -> &SeparationConfig {
        &self.config
    }

    /// Get the launcher
    pub fn command(&self) -> &DemucsCommand {
        &self.command
    }

    /// Separate an audio file into stems
    ///
    /// Writes into `output_dir`, or into a new temporary directory that is
    /// left on disk for the caller. Returns
    /// `output_dir/<model>/<input file stem>` without checking that demucs
    /// actually produced it; use [`Separator::get_stems`] for that.
    ///
    /// `stems` is accepted for API compatibility and currently ignored.
    pub fn separate<P: AsRef<Path>>(
        &self,
        input_path: P,
        output_dir: Option<&Path>,
        stems: Option<&[Stem]>,
    ) -> DemucsResult<PathBuf> {
        let input_path = input_path.as_ref();
        let input = input_path.canonicalize().map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => DemucsError::InputNotFound(input_path.to_path_buf()),
            _ => DemucsError::Io(e),
        })?;

        if let Some(stems) = stems {
            debug!("Stem selection {:?} is not applied, demucs writes every stem", stems);
        }

        let output_dir = match output_dir {
            Some(dir) => dir.to_path_buf(),
            None => tempfile::Builder::new()
                .prefix(TEMP_DIR_PREFIX)
                .tempdir()?
                .keep(),
        };
        fs::create_dir_all(&output_dir)?;

        let invocation = self.command.invocation(&self.config, &input, &output_dir);
        debug!("Running {}", invocation.display());

        let output = self
            .runner
            .run(&invocation)
            .map_err(|source| DemucsError::Launch {
                program: invocation.program.to_string_lossy().into_owned(),
                source,
            })?;

        if !output.success() {
            return Err(DemucsError::SeparationFailed {
                status: output.status,
                stderr: output.stderr,
            });
        }

        info!("Separation completed: {}", output.stdout);

        let track = input.file_stem().unwrap_or_default();
        Ok(output_dir.join(self.config.model().as_str()).join(track))
    }

    /// Collect the stem files present in a separated directory
    pub fn get_stems<P: AsRef<Path>>(&self, separated_dir: P) -> StemMap {
        get_stems(separated_dir)
    }
}

/// Collect the stem files present in a separated directory
///
/// Only stems whose `<name>.wav` exists are included. Never fails.
pub fn get_stems<P: AsRef<Path>>(separated_dir: P) -> StemMap {
    let separated_dir = separated_dir.as_ref();

    Stem::ALL
        .into_iter()
        .filter_map(|stem| {
            let path = separated_dir.join(stem.file_name());
            if !path.is_file() {
                return None;
            }
            let path = std::path::absolute(&path).unwrap_or(path);
            Some((stem, path))
        })
        .collect()
}

/// Separate a file into a temporary directory and return its stems
///
/// Uses `model` or the default model, on the default device.
pub fn quick_separate<P: AsRef<Path>>(input_file: P, model: Option<&str>) -> DemucsResult<StemMap> {
    quick_separate_with(SystemRunner, input_file, model)
}

/// [`quick_separate`] with a custom command runner
pub fn quick_separate_with<R, P>(
    runner: R,
    input_file: P,
    model: Option<&str>,
) -> DemucsResult<StemMap>
where
    R: CommandRunner,
    P: AsRef<Path>,
{
    let model = model.unwrap_or(Model::default().as_str());
    let separator = Separator::new(model, DEFAULT_DEVICE)?.with_runner(runner);
    let separated = separator.separate(input_file, None, None)?;
    Ok(separator.get_stems(separated))
}
