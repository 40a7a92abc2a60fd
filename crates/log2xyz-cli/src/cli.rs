use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Tony Kan, Ted Yu, William A. Goddard III, Victor Wai Tak Kam",
    version,
    about = "log2xyz - Extract energies and final geometries from Gaussian log files into a multi-frame XYZ file.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Directory containing the Gaussian job (.gjf) and log (.log) files.
    #[arg(short, long, required = true, value_name = "DIR")]
    pub input: PathBuf,

    /// Path for the output XYZ file [default: output.xyz].
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output and the progress bar
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
