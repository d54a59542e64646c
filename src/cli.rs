use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "grout-editor")]
#[command(version)]
#[command(about = "Render Grout record schemas as HTML summary lists")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Append the summary of a parameter document to a container
    Render(RenderArgs),
    /// Report which properties lack definitions or metadata
    Check(CheckArgs),
    /// Manage grout-editor configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Parameter document (JSON, or YAML for .yaml/.yml)
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,
    /// Existing container file; its content is kept and the summary appended
    #[arg(long = "container")]
    pub container: Option<PathBuf>,
    /// Output file (default: the container file if given, otherwise stdout)
    #[arg(short = 'o', long = "out")]
    pub out: Option<PathBuf>,
    /// Output format
    #[arg(long = "format", value_enum, default_value = "html")]
    pub format: OutputFormatArg,
    /// Indent nested elements, one node per line
    #[arg(long = "pretty")]
    pub pretty: bool,
    /// Text shown for absent description/title/plural_title values
    #[arg(long = "placeholder")]
    pub placeholder: Option<String>,
    /// Fail when a property has no definition instead of skipping it
    #[arg(long = "strict")]
    pub strict: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Parameter document (JSON, or YAML for .yaml/.yml)
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,
    /// Emit the report as JSON
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Html,
    Text,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Set a key in grout-editor config (e.g. render.placeholder)
    Set(ConfigSetArgs),
}

#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Config key path (e.g. render.labels.description)
    pub key: String,
    /// Value to assign; `true`/`false` and integers keep their type
    pub value: String,
    /// Override config file path (default: existing $XDG_CONFIG_HOME/grout-editor/config.toml, else ~/.grout/config.toml)
    #[arg(long = "file")]
    pub file: Option<PathBuf>,
}
