mod proc_errors;

use clap::{
    Args,
    Parser,
    Subcommand,
    ValueEnum,
};
use strum::{Display, EnumIter};

pub use proc_errors::{
    ArgError,
    ProcResult,
    err_str,
};

/// Plane point model toolkit.
#[derive(Debug, Parser)]
#[command(name = "point2d")]
pub struct PointCli {
    #[clap(subcommand)]
    pub command: Command,
}

/// Parser for the subcommands of the point2d binary using clap.
#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(name = "demo")]
    /// Run a demo scenario, printing its results.
    Demo(DemoArgs),

    #[command(name = "point")]
    /// Build a single point and print it with its distance from the origin.
    Point(PointArgs),

    #[command(name = "sort")]
    /// Sort the points of a point-set file by distance from the origin.
    Sort(SortArgs),

    #[command(name = "example")]
    /// Print an example config file for a demo scenario.
    Example(ExampleArgs),
}

/// Arguments for the demo command. Compiled with clap.
#[derive(Debug, Args)]
pub struct DemoArgs {
    /// Name of the demo scenario (run `point2d example` to list them).
    pub name: String,

    #[arg(short, long = "cfg")]
    /// Path to a config file for the scenario (json, toml or yaml).
    pub cfg_file: Option<String>,
}

/// Arguments for the point command. Compiled with clap.
#[derive(Debug, Args)]
pub struct PointArgs {
    #[arg(allow_negative_numbers = true)]
    /// The x coordinate.
    pub x: String,

    #[arg(allow_negative_numbers = true)]
    /// The y coordinate.
    pub y: String,

    #[arg(short, long)]
    /// Color of the point. Without a color, a plain point is built.
    pub color: Option<String>,

    #[arg(short, long)]
    /// Only accept colors allowed by the palette.
    pub restricted: bool,

    #[command(flatten)]
    pub palette_args: PaletteArgs,
}

/// Arguments for the sort command. Compiled with clap.
#[derive(Debug, Args)]
pub struct SortArgs {
    /// Path to the point-set file (json, toml or yaml).
    pub input_path: String,

    #[arg(short, long = "output")]
    /// Path to write the sorted points to (format from the extension).
    pub output_path: Option<String>,

    #[command(flatten)]
    pub palette_args: PaletteArgs,
}

/// Palette arguments, shared by the commands that build restricted points. Compiled with clap.
#[derive(Debug, Args)]
pub struct PaletteArgs {
    #[arg(short, long = "palette")]
    /// Path to a palette file replacing the default colors.
    pub palette_file: Option<String>,

    #[arg(short, long = "add-color")]
    /// Extra color to allow (repeatable).
    pub add_colors: Vec<String>,
}

/// Arguments for the example command. Compiled with clap.
#[derive(Debug, Args)]
pub struct ExampleArgs {
    /// Name of the demo scenario. Lists the scenarios if omitted.
    pub name: Option<String>,

    #[arg(short, long, value_enum, default_value_t = Format::Yaml)]
    /// Format of the printed config.
    pub format: Format,
}

/// Config file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Format {
    Json,
    Toml,
    Yaml,
}
impl Format {
    /// Get the format from the extension of a path.
    pub fn from_path(path: &str) -> Option<Format> {
        match path.rsplit('.').next() {
            Some("json") => Some(Format::Json),
            Some("toml") => Some(Format::Toml),
            Some("yaml") | Some("yml") => Some(Format::Yaml),
            _ => None,
        }
    }
}

/// Parse the command line arguments for the point2d binary.
pub fn parse_cli_args() -> PointCli {
    PointCli::parse()
}
