//! External process execution

pub mod system;

pub use system::SystemRunner;

use std::ffi::OsString;
use std::io;

/// A single external command: program plus arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program to execute
    pub program: OsString,
    /// Arguments in order
    pub args: Vec<OsString>,
}

impl Invocation {
    /// Create an invocation with no arguments
    pub fn new(program: impl Into<OsString>) -> Self {
        Invocation {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Render as a shell-like string for logging
    pub fn display(&self) -> String {
        std::iter::once(&self.program)
            .chain(self.args.iter())
            .map(|a| a.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// What a finished command produced
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    /// Exit code, `None` when terminated by a signal
    pub status: Option<i32>,
    /// Captured standard output
    pub stdout: String,
    /// Captured standard error
    pub stderr: String,
}

impl CommandOutput {
    /// Check for a zero exit code
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Runs an invocation to completion and captures its output
///
/// Returns `Err` only when the program could not be started; a non-zero
/// exit is reported through [`CommandOutput::status`].
pub trait CommandRunner {
    /// Execute the invocation, blocking until it exits
    fn run(&self, invocation: &Invocation) -> io::Result<CommandOutput>;
}

impl<F> CommandRunner for F
where
    F: Fn(&Invocation) -> io::Result<CommandOutput>,
{
    fn run(&self, invocation: &Invocation) -> io::Result<CommandOutput> {
        self(invocation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invocation_builder() {
        let inv = Invocation::new("python")
            .args(["-m", "demucs"])
            .arg("-n")
            .arg("htdemucs");
        assert_eq!(inv.program, "python");
        assert_eq!(inv.args, vec!["-m", "demucs", "-n", "htdemucs"]);
        assert_eq!(inv.display(), "python -m demucs -n htdemucs");
    }

    #[test]
    fn test_closure_runner() {
        let runner = |inv: &Invocation| -> io::Result<CommandOutput> {
            Ok(CommandOutput {
                status: Some(0),
                stdout: inv.display(),
                stderr: String::new(),
            })
        };
        let out = runner.run(&Invocation::new("echo").arg("hi")).unwrap();
        assert!(out.success());
        assert_eq!(out.stdout, "echo hi");
    }

    #[test]
    fn test_signal_is_not_success() {
        let out = CommandOutput {
            status: None,
            ..Default::default()
        };
        assert!(!out.success());
    }
}
