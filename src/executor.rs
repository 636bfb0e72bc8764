//!
//! The subprocess executor.
//!

use std::process::Command;
use std::process::Stdio;

use crate::error::Error;

///
/// Runs the external commands the build sequence consists of.
///
pub trait Executor {
    ///
    /// Runs the command to completion.
    ///
    /// A spawn failure or a non-zero exit status is an error.
    ///
    fn execute(&mut self, command: &mut Command, description: &str) -> Result<(), Error>;

    ///
    /// Checks whether the `tool` executable can be run.
    ///
    /// Called right before the first command of a stage, so stages with nothing to do need no tools.
    ///
    fn check_presence(&mut self, tool: &str) -> Result<(), Error>;
}

///
/// The executor running commands on the host with inherited standard streams.
///
#[derive(Debug, Default)]
pub struct SystemExecutor;

impl SystemExecutor {
    ///
    /// A shortcut constructor.
    ///
    pub fn new() -> Self {
        Self
    }
}

impl Executor for SystemExecutor {
    fn execute(&mut self, command: &mut Command, description: &str) -> Result<(), Error> {
        let status = command.status().map_err(|error| Error::CommandSpawn {
            description: description.to_owned(),
            source: error,
        })?;
        if !status.success() {
            return Err(Error::CommandFailed {
                description: description.to_owned(),
                status,
            });
        }
        Ok(())
    }

    fn check_presence(&mut self, tool: &str) -> Result<(), Error> {
        check_presence(tool)
    }
}

///
/// Checks whether the `tool` executable can be run.
///
pub fn check_presence(tool: &str) -> Result<(), Error> {
    let status = Command::new(tool)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();
    match status {
        Ok(status) if status.success() => Ok(()),
        _ => Err(Error::ToolMissing(tool.to_owned())),
    }
}

///
/// The executor recording commands instead of running them.
///
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct Recorder {
    /// The recorded invocations.
    pub invocations: Vec<Invocation>,
    /// The program whose invocations fail.
    pub failing_program: Option<String>,
    /// The tools checked for presence.
    pub checked_tools: Vec<String>,
}

///
/// The recorded command invocation.
///
#[cfg(test)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Invocation {
    /// The program name.
    pub program: String,
    /// The program arguments.
    pub arguments: Vec<String>,
    /// The working directory.
    pub directory: Option<std::path::PathBuf>,
}

#[cfg(test)]
impl Executor for Recorder {
    fn execute(&mut self, command: &mut Command, description: &str) -> Result<(), Error> {
        let invocation = Invocation {
            program: command.get_program().to_string_lossy().to_string(),
            arguments: command
                .get_args()
                .map(|argument| argument.to_string_lossy().to_string())
                .collect(),
            directory: command.get_current_dir().map(|path| path.to_owned()),
        };
        let fails = self.failing_program.as_deref() == Some(invocation.program.as_str());
        self.invocations.push(invocation);
        if fails {
            return Err(Error::CommandSpawn {
                description: description.to_owned(),
                source: std::io::Error::new(std::io::ErrorKind::Other, "recorded failure"),
            });
        }
        Ok(())
    }

    fn check_presence(&mut self, tool: &str) -> Result<(), Error> {
        self.checked_tools.push(tool.to_owned());
        Ok(())
    }
}
