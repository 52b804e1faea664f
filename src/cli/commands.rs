use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{CMAKE_VERSIONS, CXX_STANDARDS, DEFAULT_CMAKE_VERSION, DEFAULT_CXX_STANDARD};

/// CMake project scaffolding tool
#[derive(Parser, Debug)]
#[command(
    name = "create-cmake",
    about = "Generates a CMakeLists.txt for a C++ project and runs the cmake configure step",
    version,
    long_about = "create-cmake renders a CMakeLists.txt from a project name, a minimum CMake \
                  version, a C++ standard, and a list of existing source files, then invokes \
                  cmake through the platform shell to produce a build directory.\n\n\
                  Examples:\n  \
                  create-cmake --project-name demo main.cpp\n  \
                  create-cmake --project-name demo --cxx-version 17 src/main.cpp src/util.cpp\n  \
                  create-cmake --project-name demo --skip-configure main.cpp"
)]
pub struct CliArgs {
    #[arg(
        long,
        value_name = "NAME",
        value_parser = parse_project_name,
        help = "Project name used in the generated project() declaration"
    )]
    pub project_name: String,

    #[arg(
        long,
        value_name = "VERSION",
        default_value = DEFAULT_CMAKE_VERSION,
        value_parser = parse_cmake_version,
        help = "Minimum CMake version {3.20, 3.21, 3.22, 3.23, 3.24, 3.25, 3.26, 3.27, 3.28, [3.29], 3.30}"
    )]
    pub cmake_version: String,

    #[arg(
        long,
        value_name = "STANDARD",
        default_value = DEFAULT_CXX_STANDARD,
        value_parser = parse_cxx_standard,
        help = "C++ standard {98, 03, [11], 14, 17, 20, 23, 26}"
    )]
    pub cxx_version: String,

    #[arg(
        value_name = "SOURCES",
        required = true,
        num_args = 1..,
        help = "Existing source files to list in the descriptor"
    )]
    pub sources: Vec<PathBuf>,

    #[arg(
        short = 'y',
        long,
        help = "Overwrite an existing CMakeLists.txt without prompting"
    )]
    pub yes: bool,

    #[arg(long, help = "Write the descriptor but skip the cmake configure step")]
    pub skip_configure: bool,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Format of the resolved configuration echo"
    )]
    pub format: OutputFormatArg,

    #[arg(
        long,
        value_name = "DIR",
        help = "Directory to scaffold into (defaults to the current directory)"
    )]
    pub project_dir: Option<PathBuf>,

    #[arg(long, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, help = "Increase verbosity")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}

fn parse_project_name(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("project-name cannot be blank".to_string())
    } else {
        Ok(s.to_string())
    }
}

fn parse_cmake_version(s: &str) -> Result<String, String> {
    if CMAKE_VERSIONS.contains(&s) {
        Ok(s.to_string())
    } else {
        Err(format!(
            "unsupported cmake version: {}. Valid options: {}",
            s,
            CMAKE_VERSIONS.join(", ")
        ))
    }
}

fn parse_cxx_standard(s: &str) -> Result<String, String> {
    if CXX_STANDARDS.contains(&s) {
        Ok(s.to_string())
    } else {
        Err(format!(
            "unsupported cxx version: {}. Valid options: {}",
            s,
            CXX_STANDARDS.join(", ")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_args_verify() {
        // Verify that CLI structure is valid
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_minimal_invocation_gets_defaults() {
        let args =
            CliArgs::parse_from(["create-cmake", "--project-name", "demo", "main.cpp"]);

        assert_eq!(args.project_name, "demo");
        assert_eq!(args.cmake_version, "3.29");
        assert_eq!(args.cxx_version, "11");
        assert_eq!(args.sources, vec![PathBuf::from("main.cpp")]);
        assert_eq!(args.format, OutputFormatArg::Human);
        assert!(!args.yes);
        assert!(!args.skip_configure);
        assert!(args.project_dir.is_none());
    }

    #[test]
    fn test_full_invocation() {
        let args = CliArgs::parse_from([
            "create-cmake",
            "--project-name",
            "widget",
            "--cmake-version",
            "3.24",
            "--cxx-version",
            "17",
            "--format",
            "json",
            "--project-dir",
            "/tmp/widget",
            "--skip-configure",
            "-y",
            "a.cpp",
            "b.cpp",
        ]);

        assert_eq!(args.project_name, "widget");
        assert_eq!(args.cmake_version, "3.24");
        assert_eq!(args.cxx_version, "17");
        assert_eq!(
            args.sources,
            vec![PathBuf::from("a.cpp"), PathBuf::from("b.cpp")]
        );
        assert_eq!(args.format, OutputFormatArg::Json);
        assert_eq!(args.project_dir, Some(PathBuf::from("/tmp/widget")));
        assert!(args.yes);
        assert!(args.skip_configure);
    }

    #[test]
    fn test_project_name_is_required() {
        let result = CliArgs::try_parse_from(["create-cmake", "main.cpp"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_blank_project_name_rejected() {
        let result = CliArgs::try_parse_from(["create-cmake", "--project-name", "  ", "main.cpp"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_duplicate_project_name_rejected() {
        let result = CliArgs::try_parse_from([
            "create-cmake",
            "--project-name",
            "one",
            "--project-name",
            "two",
            "main.cpp",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_at_least_one_source_required() {
        let result = CliArgs::try_parse_from(["create-cmake", "--project-name", "demo"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unsupported_cmake_version_rejected() {
        let result = CliArgs::try_parse_from([
            "create-cmake",
            "--project-name",
            "demo",
            "--cmake-version",
            "3.19",
            "main.cpp",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unsupported_cxx_standard_rejected() {
        let result = CliArgs::try_parse_from([
            "create-cmake",
            "--project-name",
            "demo",
            "--cxx-version",
            "12",
            "main.cpp",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_source_order_is_preserved() {
        let args = CliArgs::parse_from([
            "create-cmake",
            "--project-name",
            "demo",
            "z.cpp",
            "a.cpp",
            "m.cpp",
        ]);
        assert_eq!(
            args.sources,
            vec![
                PathBuf::from("z.cpp"),
                PathBuf::from("a.cpp"),
                PathBuf::from("m.cpp")
            ]
        );
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        let result = CliArgs::try_parse_from([
            "create-cmake",
            "--project-name",
            "demo",
            "-v",
            "-q",
            "main.cpp",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_log_level_flag() {
        let args = CliArgs::parse_from([
            "create-cmake",
            "--project-name",
            "demo",
            "--log-level",
            "debug",
            "main.cpp",
        ]);
        assert_eq!(args.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_help_exits_zero() {
        let err = CliArgs::try_parse_from(["create-cmake", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
