//! amount-pad: numeric entry keypad on the command line
//!
//! ## Usage
//!
//! ```bash
//! amount-pad replay --amount 12 + 3 =     # Replay keys, print the result
//! amount-pad replay -f json "1 0 - 4 ="   # Same, as a JSON report
//! amount-pad interactive                  # Drive the pad from the keyboard
//! amount-pad layout -v                    # Print the keypad with element ids
//! ```

use std::process::ExitCode;

use amount_pad::layout::Keypad;
use amount_pad_cli::{
    interactive::run_interactive, logging::init_logging, render_layout, replay::run_replay, Cli,
    CliConfig, CliResult, ColorChoice, Commands, Verbosity,
};
use clap::Parser;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli);
    init_logging(&config);

    match cli.command {
        Commands::Replay(args) => run_replay(&config, &args),
        Commands::Interactive(args) => run_interactive(&config, &args),
        Commands::Layout => {
            print!("{}", render_layout(&Keypad::new(), config.verbosity.is_verbose()));
            Ok(())
        }
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let color: ColorChoice = cli.color.into();
    CliConfig::new()
        .with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose))
        .with_color(color)
}
