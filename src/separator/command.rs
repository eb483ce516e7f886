use crate::core::SeparationConfig;
use crate::runner::Invocation;
use std::ffi::OsString;
use std::path::Path;

/// Default interpreter used to launch demucs
pub const DEFAULT_PROGRAM: &str = "python";

/// How the demucs command line tool is launched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemucsCommand {
    program: OsString,
    args: Vec<OsString>,
}

impl DemucsCommand {
    /// Launch demucs as a module of the given interpreter
    pub fn python(interpreter: impl Into<OsString>) -> Self {
        DemucsCommand {
            program: interpreter.into(),
            args: vec!["-m".into(), "demucs".into()],
        }
    }

    /// Replace the program, keeping the leading arguments
    pub fn with_program(mut self, program: impl Into<OsString>) -> Self {
        self.program = program.into();
        self
    }

    /// Replace the leading arguments placed before the demucs options
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Get the program
    pub fn program(&self) -> &OsString {
        &self.program
    }

    /// Build the full invocation for one input file
    ///
    /// `<program> <args..> -n <model> -d <device> -o <output_dir> <input>`
    pub fn invocation(
        &self,
        config: &SeparationConfig,
        input: &Path,
        output_dir: &Path,
    ) -> Invocation {
        Invocation::new(self.program.clone())
            .args(self.args.iter().cloned())
            .arg("-n")
            .arg(config.model().as_str())
            .arg("-d")
            .arg(config.device())
            .arg("-o")
            .arg(output_dir)
            .arg(input)
    }
}

impl Default for DemucsCommand {
    fn default() -> Self {
        DemucsCommand::python(DEFAULT_PROGRAM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_invocation() {
        let config = SeparationConfig::new("mdx_extra", "cuda").unwrap();
        let inv = DemucsCommand::default().invocation(
            &config,
            Path::new("/music/song.flac"),
            Path::new("/tmp/out"),
        );

        assert_eq!(inv.program, "python");
        assert_eq!(
            inv.args,
            vec![
                "-m",
                "demucs",
                "-n",
                "mdx_extra",
                "-d",
                "cuda",
                "-o",
                "/tmp/out",
                "/music/song.flac"
            ]
        );
    }

    #[test]
    fn test_standalone_executable() {
        let command = DemucsCommand::default()
            .with_program("demucs")
            .with_args(Vec::<OsString>::new());
        let inv = command.invocation(
            &SeparationConfig::default(),
            Path::new("a.wav"),
            Path::new("out"),
        );

        assert_eq!(inv.display(), "demucs -n htdemucs_ft -d cpu -o out a.wav");
    }

    #[test]
    fn test_custom_interpreter() {
        let command = DemucsCommand::python("/opt/venv/bin/python3");
        assert_eq!(command.program(), "/opt/venv/bin/python3");
    }
}
