//! Descriptor rendering and writing
//!
//! Renders a [`BuildConfig`] into the `CMakeLists.txt` text and writes it to
//! the project directory. The template is fixed: a minimum-version
//! declaration, the project declaration, the C++ standard pair, the quoted
//! source list, and the executable target.

use crate::config::BuildConfig;
use std::fmt::Write as _;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the generated descriptor.
pub const DESCRIPTOR_FILE: &str = "CMakeLists.txt";

/// Descriptor write errors
#[derive(Debug, Error)]
pub enum DescriptorError {
    /// The descriptor file could not be created
    #[error("could not create {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The descriptor contents could not be written
    #[error("could not write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Renders the descriptor text for the given configuration.
///
/// Each source file is quoted on its own line, the first on the
/// `set(SOURCES` line itself, and the target declaration references the
/// `PROJECT_NAME` and `SOURCES` variables rather than repeating the values.
pub fn render(config: &BuildConfig) -> String {
    let mut out = String::new();

    // Infallible: writing to a String cannot fail.
    let _ = writeln!(
        out,
        "cmake_minimum_required(VERSION {})",
        config.cmake_version
    );
    let _ = writeln!(out, "project({})\n", config.project_name);
    let _ = writeln!(out, "set(CMAKE_CXX_STANDARD {})", config.cxx_version);
    let _ = writeln!(out, "set(CMAKE_CXX_STANDARD_REQUIRED True)\n");

    out.push_str("set(SOURCES ");
    for source in &config.source_files {
        let _ = writeln!(out, "\"{}\"", source.display());
    }
    out.push_str(")\n\n");
    out.push_str("add_executable(${PROJECT_NAME} ${SOURCES})");

    out
}

/// Creates (or truncates) `<dir>/CMakeLists.txt` and writes the rendered
/// descriptor into it, returning the written path.
///
/// A create or write failure is fatal to the run; the caller must not go on
/// to the configure step without a fresh descriptor on disk.
pub fn write(config: &BuildConfig, dir: &Path) -> Result<PathBuf, DescriptorError> {
    let path = dir.join(DESCRIPTOR_FILE);

    let mut file = File::create(&path).map_err(|source| DescriptorError::Create {
        path: path.clone(),
        source,
    })?;

    file.write_all(render(config).as_bytes())
        .map_err(|source| DescriptorError::Write {
            path: path.clone(),
            source,
        })?;

    Ok(path)
}
