use clap::Parser;
use serde::Serialize;
use std::ffi::OsString;

#[derive(Debug, Clone, Serialize, Parser)]
#[command(name = "deploy")]
#[command(about = "Deploy to production environment")]
#[command(disable_help_flag = true)]
pub struct DeployArgs {
    /// Target environment name
    #[arg(default_value = "staging", allow_hyphen_values = true)]
    pub env: String,

    /// Ignored trailing arguments
    #[arg(hide = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Parser)]
#[command(name = "build_project")]
#[command(about = "Build the project with specified configuration")]
#[command(disable_help_flag = true)]
pub struct BuildArgs {
    /// Build configuration
    #[arg(default_value = "debug", allow_hyphen_values = true)]
    pub config: String,

    /// Output directory
    #[arg(default_value = "dist", allow_hyphen_values = true)]
    pub output: String,

    /// Ignored trailing arguments
    #[arg(hide = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Parser)]
#[command(name = "run_tests")]
#[command(about = "Run tests")]
#[command(infer_long_args = true, args_override_self = true)]
pub struct RunTestsArgs {
    #[arg(
        long,
        value_name = "VERBOSE",
        allow_negative_numbers = true,
        help = "Enable verbose output"
    )]
    pub verbose: Option<String>,

    #[arg(
        long,
        value_name = "FILTER",
        allow_negative_numbers = true,
        help = "Filter tests by pattern"
    )]
    pub filter: Option<String>,
}

/// Parses a script whose arguments are read purely by position.
///
/// Every token after the program name is a value, `--` and `--help`
/// included: an end-of-options marker is inserted ahead of the user's
/// tokens, so clap never interprets them as flags.
pub fn parse_positional<P, I, T>(argv: I) -> Result<P, clap::Error>
where
    P: Parser,
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut argv = argv.into_iter().map(Into::into);
    let program = argv.next().unwrap_or_default();

    P::try_parse_from(
        std::iter::once(program)
            .chain(std::iter::once(OsString::from("--")))
            .chain(argv),
    )
}
