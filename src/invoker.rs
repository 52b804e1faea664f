//! Configure-step invocation
//!
//! The cmake configure step runs through the host platform's shell: `bash` on
//! Linux, `powershell.exe` on Windows. The [`Configurator`] trait is the seam
//! between the scaffolding pipeline and the external process, so the pipeline
//! can be exercised with a fake in tests.

use std::path::Path;
use std::process::{Command, ExitStatus};
use thiserror::Error;
use tracing::debug;

/// The configure command handed to the platform shell.
const CONFIGURE_COMMAND: &str = "cmake . -B build";

/// The follow-up command the user runs to perform the actual build.
pub const BUILD_COMMAND: &str = "cmake --build build";

/// Invocation errors
#[derive(Debug, Error)]
pub enum InvokeError {
    /// Host OS has no shell mapping
    #[error(
        "\"{0}\" is an unsupported platform! Please make a github issue with your exact os \
         as shown in quotes above or a pull request with your implementation!"
    )]
    UnsupportedPlatform(String),

    /// The shell itself could not be started
    #[error("could not run \"{command}\": {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The configure command ran but exited non-zero
    #[error("could not build cmake config: \"{command}\" failed with {status}")]
    ConfigureFailed { command: String, status: ExitStatus },
}

/// Capability to turn a written descriptor into a configured build directory.
pub trait Configurator {
    /// Runs the configure step synchronously in `project_dir`.
    ///
    /// The subprocess inherits stdio; its output goes straight to the shared
    /// console rather than being captured.
    fn configure(&self, project_dir: &Path) -> Result<(), InvokeError>;

    /// The command line this configurator runs, for logs and diagnostics.
    fn describe(&self) -> String;
}

/// Shell-wrapped `cmake` invocation for the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellConfigurator {
    program: &'static str,
    args: &'static [&'static str],
}

impl ShellConfigurator {
    /// Selects the shell wrapper for the OS this binary was built for.
    pub fn for_host() -> Result<Self, InvokeError> {
        Self::for_os(std::env::consts::OS)
    }

    /// Selects the shell wrapper for a named OS family.
    ///
    /// Factored out of [`Self::for_host`] so the mapping is testable on any
    /// build host.
    pub fn for_os(os: &str) -> Result<Self, InvokeError> {
        match os {
            "linux" => Ok(Self {
                program: "bash",
                args: &["-c", CONFIGURE_COMMAND],
            }),
            "windows" => Ok(Self {
                program: "powershell.exe",
                args: &[CONFIGURE_COMMAND],
            }),
            other => Err(InvokeError::UnsupportedPlatform(other.to_string())),
        }
    }
}

impl Configurator for ShellConfigurator {
    fn configure(&self, project_dir: &Path) -> Result<(), InvokeError> {
        debug!(command = %self.describe(), dir = %project_dir.display(), "running configure step");

        let status = Command::new(self.program)
            .args(self.args)
            .current_dir(project_dir)
            .status()
            .map_err(|source| InvokeError::Spawn {
                command: self.describe(),
                source,
            })?;

        if !status.success() {
            return Err(InvokeError::ConfigureFailed {
                command: self.describe(),
                status,
            });
        }

        Ok(())
    }

    fn describe(&self) -> String {
        let mut parts = vec![self.program];
        parts.extend_from_slice(self.args);
        parts.join(" ")
    }
}
