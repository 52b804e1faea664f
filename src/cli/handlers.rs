//! Command orchestration
//!
//! [`handle_scaffold`] wires the real process environment (stdin, TTY
//! detection, the host shell) into [`run_scaffold`], which holds the actual
//! pipeline: confirm overwrite, validate sources, echo the configuration,
//! write the descriptor, run the configure step. The pipeline takes its
//! prompt input and configurator as injected dependencies so integration
//! tests can drive it end to end with fakes.

use anyhow::{bail, Result};
use std::io::{self, BufRead};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::cli::commands::CliArgs;
use crate::cli::output::OutputFormatter;
use crate::config::BuildConfig;
use crate::descriptor;
use crate::invoker::{Configurator, InvokeError, ShellConfigurator, BUILD_COMMAND};
use crate::prompt::{self, Decision};

/// Terminal states of a scaffolding run that are not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Descriptor written (and configure step run, unless skipped)
    Scaffolded,
    /// User declined to overwrite an existing descriptor
    Cancelled,
}

/// Runs the scaffold pipeline against the real environment and maps the
/// result to a process exit code.
pub fn handle_scaffold(args: &CliArgs) -> i32 {
    let stdin = io::stdin();
    let interactive = atty::is(atty::Stream::Stdin);

    let result = run_scaffold(args, stdin.lock(), interactive, || {
        ShellConfigurator::for_host().map(|c| Box::new(c) as Box<dyn Configurator>)
    });

    match result {
        Ok(Outcome::Scaffolded) => 0,
        Ok(Outcome::Cancelled) => {
            eprintln!("Aborting...");
            0
        }
        Err(err) => {
            eprintln!("ERROR: {:#}", err);
            1
        }
    }
}

/// The scaffold pipeline with injected prompt input and configurator.
///
/// `interactive` reports whether prompt input is attached to a terminal; with
/// an existing descriptor, no `--yes`, and a non-interactive stdin the run
/// fails instead of blocking on a pipe that will never answer.
pub fn run_scaffold<R, F>(
    args: &CliArgs,
    mut prompt_input: R,
    interactive: bool,
    select_configurator: F,
) -> Result<Outcome>
where
    R: BufRead,
    F: FnOnce() -> Result<Box<dyn Configurator>, InvokeError>,
{
    let project_dir = args
        .project_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));

    let config = BuildConfig::new(
        args.project_name.clone(),
        args.cmake_version.clone(),
        args.cxx_version.clone(),
        args.sources.clone(),
    )?;

    let descriptor_path = project_dir.join(descriptor::DESCRIPTOR_FILE);
    if descriptor_path.exists() && !args.yes {
        if !interactive {
            bail!(
                "{} already exists and stdin is not a terminal; pass --yes to overwrite",
                descriptor::DESCRIPTOR_FILE
            );
        }
        let stdout = io::stdout();
        if prompt::confirm_overwrite(&mut prompt_input, stdout.lock())? == Decision::Declined {
            return Ok(Outcome::Cancelled);
        }
    }

    config.check_sources(&project_dir)?;

    let formatter = OutputFormatter::new(args.format.into());
    println!("{}", formatter.format_config(&config)?);

    let path = descriptor::write(&config, &project_dir)?;
    debug!(path = %path.display(), "descriptor written");
    println!("Created {}", descriptor::DESCRIPTOR_FILE);

    if args.skip_configure {
        info!("configure step skipped on request");
        return Ok(Outcome::Scaffolded);
    }

    println!(
        "{} OS detected. Attempting to build cmake config",
        std::env::consts::OS
    );
    let configurator = select_configurator()?;
    configurator.configure(&project_dir)?;

    println!("Cmake config built. Build project with \"{}\"", BUILD_COMMAND);

    Ok(Outcome::Scaffolded)
}
