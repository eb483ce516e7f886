use super::{CommandOutput, CommandRunner, Invocation};
use std::io;
use std::process::{Command, Stdio};

/// Runs invocations as child processes of the current process
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> io::Result<CommandOutput> {
        let output = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()?;

        Ok(CommandOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_captures_streams_and_status() {
        let inv = Invocation::new("sh")
            .arg("-c")
            .arg("echo out; echo err >&2; exit 3");
        let out = SystemRunner.run(&inv).unwrap();
        assert_eq!(out.status, Some(3));
        assert_eq!(out.stdout, "out\n");
        assert_eq!(out.stderr, "err\n");
    }

    #[test]
    fn test_missing_program() {
        let inv = Invocation::new("/nonexistent/definitely-not-a-program");
        assert!(SystemRunner.run(&inv).is_err());
    }
}
