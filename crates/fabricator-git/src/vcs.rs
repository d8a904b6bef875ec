//! Seam to the external version-control tool
//!
//! Invocations are fire-and-forget: the outcome is reported back so it can be
//! logged and counted, but a failed or unlaunchable tool never aborts a run.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Result of a single external invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// The tool ran and exited successfully
    Succeeded,

    /// The tool ran and exited unsuccessfully (`code` is None when killed by a signal)
    Failed { code: Option<i32> },

    /// The tool could not be started at all (e.g. not on PATH)
    NotLaunched { reason: String },
}

impl Invocation {
    pub fn is_success(&self) -> bool {
        matches!(self, Invocation::Succeeded)
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Invocation::Succeeded => write!(f, "succeeded"),
            Invocation::Failed { code: Some(code) } => write!(f, "exited with status {}", code),
            Invocation::Failed { code: None } => write!(f, "terminated by signal"),
            Invocation::NotLaunched { reason } => write!(f, "could not be launched: {}", reason),
        }
    }
}

/// Version-control operations needed to record a synthetic commit
pub trait Vcs {
    /// Marks `file` (relative to the working directory) for the next commit
    fn stage(&self, file: &Path) -> Invocation;

    /// Commits the staged changes, using `date` as both author and committer date
    fn commit(&self, message: &str, date: &str) -> Invocation;
}

/// [`Vcs`] backed by the `git` command line, one blocking process per call
#[derive(Debug, Clone)]
pub struct GitCli {
    program: OsString,
    repo_path: PathBuf,
}

impl GitCli {
    /// Runs `git` from PATH inside `repo_path`
    pub fn new<P: AsRef<Path>>(repo_path: P) -> Self {
        Self::with_program("git", repo_path)
    }

    /// Runs `program` instead of `git`
    pub fn with_program<S: Into<OsString>, P: AsRef<Path>>(program: S, repo_path: P) -> Self {
        Self {
            program: program.into(),
            repo_path: repo_path.as_ref().to_path_buf(),
        }
    }

    pub fn repo_path(&self) -> &Path {
        &self.repo_path
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.current_dir(&self.repo_path);
        command
    }

    fn run(&self, mut command: Command, operation: &str) -> Invocation {
        match command.output() {
            Ok(output) if output.status.success() => Invocation::Succeeded,
            Ok(output) => {
                log::debug!(
                    "{:?} {} failed: {}",
                    self.program,
                    operation,
                    String::from_utf8_lossy(&output.stderr).trim()
                );
                Invocation::Failed { code: output.status.code() }
            }
            Err(e) => Invocation::NotLaunched { reason: e.to_string() },
        }
    }
}

impl Vcs for GitCli {
    fn stage(&self, file: &Path) -> Invocation {
        let mut command = self.command();
        command.arg("add").arg(file);
        self.run(command, "add")
    }

    fn commit(&self, message: &str, date: &str) -> Invocation {
        let mut command = self.command();
        command
            .env("GIT_AUTHOR_DATE", date)
            .env("GIT_COMMITTER_DATE", date)
            .args(["commit", "-m", message]);
        self.run(command, "commit")
    }
}
