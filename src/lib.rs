//! create-cmake - CMake project scaffolding tool
//!
//! This library generates a `CMakeLists.txt` build descriptor from a small,
//! validated configuration and kicks off the initial cmake configure step
//! through the host platform's shell.
//!
//! # Core Concepts
//!
//! - **Build configuration**: a validated [`BuildConfig`] holding the project
//!   name, the CMake and C++ version selections, and the ordered source list
//! - **Descriptor**: the generated `CMakeLists.txt`, rendered from a fixed
//!   template and written to the project directory
//! - **Configure step**: the external `cmake . -B build` invocation that
//!   turns the descriptor into a ready-to-build directory
//!
//! # Example Usage
//!
//! ```no_run
//! use create_cmake::{BuildConfig, Configurator, ShellConfigurator};
//! use create_cmake::descriptor;
//! use std::path::{Path, PathBuf};
//!
//! fn scaffold(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
//!     let config = BuildConfig::new(
//!         "demo",
//!         "3.29",
//!         "11",
//!         vec![PathBuf::from("main.cpp")],
//!     )?;
//!     config.check_sources(dir)?;
//!
//!     descriptor::write(&config, dir)?;
//!
//!     let configurator = ShellConfigurator::for_host()?;
//!     configurator.configure(dir)?;
//!     Ok(())
//! }
//! ```
//!
//! # Project Structure
//!
//! - [`cli`]: argument surface, orchestration, and output formatting
//! - [`config`]: the validated build configuration
//! - [`descriptor`]: descriptor rendering and writing
//! - [`invoker`]: the configure-step capability and its shell implementation
//! - [`prompt`]: the overwrite confirmation state machine

// Public modules
pub mod cli;
pub mod config;
pub mod descriptor;
pub mod invoker;
pub mod prompt;

// Re-export key types for convenient access
pub use cli::output::{OutputFormat, OutputFormatter};
pub use config::{BuildConfig, ConfigError};
pub use descriptor::DescriptorError;
pub use invoker::{Configurator, InvokeError, ShellConfigurator};
pub use prompt::Decision;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
