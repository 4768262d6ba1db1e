//! # Command Line Interface
//!
//! Defines the CLI structure and command handlers for the keydefs tool.

mod check;
mod example;
mod generate;

use std::process::ExitCode;

use anyhow::Result;
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Parser, Subcommand};
use keydefs_core::ColorMode;

pub use self::check::CheckArgs;
pub use self::generate::GenerateArgs;

/// Exit status used when the operator cancels the prompts
pub const EXIT_ABORTED: u8 = 130;

/// Top-level CLI command for the keydefs tool
#[derive(Parser)]
#[command(name = "keydefs")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(about = "Generate the exchange API credential header (keydefs.h)")]
#[command(
  long_about = "Keydefs asks for the API key and secret of each supported exchange and writes\n\
        them into daemon/keydefs.h so they are compiled into the trading daemon.\n\n\
        Running keydefs without a command is the same as 'keydefs generate'. An existing\n\
        header is never overwritten; remove or move it to generate a new one."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
#[command(disable_help_subcommand = true)]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    global = true,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Controls when colored output is used
  #[arg(
    long,
    value_enum,
    ignore_case = true,
    global = true,
    default_value_t = ColorMode::Auto,
  )]
  pub colors: ColorMode,

  /// Subcommands
  #[command(subcommand)]
  pub command: Option<Commands>,
}

/// Subcommands for the keydefs tool
#[derive(Subcommand)]
pub enum Commands {
  /// Prompt for credentials and write the header (default)
  #[command(long_about = "Prompts for the key and secret of every supported exchange and writes the header.\n\n\
            Press enter at any prompt to leave that value blank; blank values can be supplied\n\
            later with 'setkeyandsecret <key> <secret>' when the bot starts. Press CTRL-C to\n\
            abort without writing anything. Nothing happens if the header already exists.")]
  #[command(alias = "gen")]
  Generate(GenerateArgs),

  /// Report which credentials an existing header defines
  #[command(long_about = "Reads an existing header and reports, for each exchange, whether the key and\n\
            the secret are set, blank or missing. Secret values are never printed.")]
  Check(CheckArgs),

  /// Print a header template with every value blank
  #[command(long_about = "Prints the header with every key and secret left blank, for operators who\n\
            prefer to paste their keys into the file by hand. Nothing is written to disk.")]
  Example,
}

pub fn handle_cli(cli: Cli) -> Result<ExitCode> {
  // Set global color override based on --colors argument
  cli.colors.apply();

  match cli.command {
    None => generate::handle_generate_command(GenerateArgs::default()),
    Some(Commands::Generate(generate)) => generate::handle_generate_command(generate),
    Some(Commands::Check(check)) => check::handle_check_command(check),
    Some(Commands::Example) => example::handle_example_command(),
  }
}
