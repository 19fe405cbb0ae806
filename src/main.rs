use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotracks::{cli, config, output::OutputFormat, warning};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Export the tracks of a playlist
    Playlist(PlaylistOptions),

    /// Export the tracks listed in a file of track URLs
    Tracks(TracksOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistOptions {
    /// Playlist URI, URL or ID
    source: String,

    #[clap(flatten)]
    output: OutputOptions,
}

#[derive(Parser, Debug, Clone)]
pub struct TracksOptions {
    /// Text file with one track URL per line
    file: PathBuf,

    #[clap(flatten)]
    output: OutputOptions,
}

#[derive(clap::Args, Debug, Clone)]
pub struct OutputOptions {
    /// Output format
    #[clap(long, short, value_enum, default_value_t = OutputFormat::Console)]
    format: OutputFormat,

    /// File to write to (text, json and csv only); defaults to the playlist or file name
    #[clap(long, short)]
    output: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Playlist(opt) => {
            cli::playlist(opt.source, opt.output.format, opt.output.output).await
        }
        Command::Tracks(opt) => cli::tracks(opt.file, opt.output.format, opt.output.output).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
