//! Configuration model for create-cmake
//!
//! This module provides the validated configuration that the rest of the tool
//! consumes: the project name, the CMake and C++ version selections, and the
//! ordered list of source files. Construction goes through [`BuildConfig::new`],
//! which enforces every invariant up front so downstream code never sees a
//! half-valid configuration.
//!
//! # Supported versions
//!
//! - CMake: 3.20 through 3.30, default 3.29
//! - C++ standard: 98, 03, 11, 14, 17, 20, 23, 26, default 11

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// CMake versions accepted by `--cmake-version`, oldest to newest.
pub const CMAKE_VERSIONS: [&str; 11] = [
    "3.20", "3.21", "3.22", "3.23", "3.24", "3.25", "3.26", "3.27", "3.28", "3.29", "3.30",
];

/// C++ standards accepted by `--cxx-version`.
pub const CXX_STANDARDS: [&str; 8] = ["98", "03", "11", "14", "17", "20", "23", "26"];

/// Default minimum CMake version written into the descriptor.
pub const DEFAULT_CMAKE_VERSION: &str = "3.29";

/// Default C++ standard written into the descriptor.
pub const DEFAULT_CXX_STANDARD: &str = "11";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Project name was empty or whitespace-only
    #[error("project-name cannot be blank")]
    BlankProjectName,

    /// CMake version outside the supported set
    #[error("unsupported cmake version: {0}. Valid options: 3.20 through 3.30")]
    UnsupportedCmakeVersion(String),

    /// C++ standard outside the supported set
    #[error("unsupported cxx version: {0}. Valid options: 98, 03, 11, 14, 17, 20, 23, 26")]
    UnsupportedCxxStandard(String),

    /// No source files were given
    #[error("must provide at least one source file")]
    NoSources,

    /// A source file path does not exist on disk
    #[error("source file \"{}\" does not exist", .0.display())]
    SourceNotFound(PathBuf),
}

/// Validated configuration for one scaffolding run
///
/// Holds everything needed to render the descriptor and echo the resolved
/// configuration back to the user. Built fresh per invocation and discarded
/// once the descriptor is written; nothing is persisted across runs.
#[derive(Debug, Clone, Serialize)]
pub struct BuildConfig {
    /// Name used in the generated `project()` declaration
    pub project_name: String,

    /// Minimum CMake version for `cmake_minimum_required()`
    pub cmake_version: String,

    /// C++ standard for `set(CMAKE_CXX_STANDARD ...)`
    pub cxx_version: String,

    /// Source files listed in the descriptor, in the order they were given
    pub source_files: Vec<PathBuf>,
}

impl BuildConfig {
    /// Creates a configuration, enforcing every invariant
    ///
    /// The CLI layer already rejects bad values at parse time; this
    /// re-validates so that non-CLI callers get the same guarantees.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` on a blank project name, a version value outside
    /// the supported set, or an empty source list.
    pub fn new(
        project_name: impl Into<String>,
        cmake_version: impl Into<String>,
        cxx_version: impl Into<String>,
        source_files: Vec<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let project_name = project_name.into();
        let cmake_version = cmake_version.into();
        let cxx_version = cxx_version.into();

        if project_name.trim().is_empty() {
            return Err(ConfigError::BlankProjectName);
        }
        if !CMAKE_VERSIONS.contains(&cmake_version.as_str()) {
            return Err(ConfigError::UnsupportedCmakeVersion(cmake_version));
        }
        if !CXX_STANDARDS.contains(&cxx_version.as_str()) {
            return Err(ConfigError::UnsupportedCxxStandard(cxx_version));
        }
        if source_files.is_empty() {
            return Err(ConfigError::NoSources);
        }

        Ok(Self {
            project_name,
            cmake_version,
            cxx_version,
            source_files,
        })
    }

    /// Verifies that every source file exists on disk
    ///
    /// Relative paths are resolved against `base` (the project directory).
    /// Fails on the first missing path, naming it.
    pub fn check_sources(&self, base: &Path) -> Result<(), ConfigError> {
        for source in &self.source_files {
            let resolved = if source.is_absolute() {
                source.clone()
            } else {
                base.join(source)
            };
            if !resolved.exists() {
                return Err(ConfigError::SourceNotFound(source.clone()));
            }
        }
        Ok(())
    }
}

impl fmt::Display for BuildConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Project Name: {}", self.project_name)?;
        writeln!(f, "CMake Version: {}", self.cmake_version)?;
        writeln!(f, "Cxx Version: {}", self.cxx_version)?;
        writeln!(f, "Source files:")?;
        for source in &self.source_files {
            writeln!(f, "\t{}", source.display())?;
        }
        Ok(())
    }
}
