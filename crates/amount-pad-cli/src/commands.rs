//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};

/// amount-pad: numeric entry keypad for transaction amounts
#[derive(Parser, Debug)]
#[command(name = "amount-pad")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay a key script against a fresh pad
    ///
    /// Keys: 0-9 . +/- del + - * = close done
    Replay(ReplayArgs),

    /// Drive the pad from the keyboard in a raw terminal session
    ///
    /// Digits, `.`, `+`, `-`, `*`, `=`/Enter and Backspace as on the web pad;
    /// `_` toggles the sign, Tab is done, Esc closes, Ctrl+C quits.
    Interactive(InteractiveArgs),

    /// Print the keypad grid
    Layout,
}

/// Arguments for the replay command
#[derive(Parser, Debug)]
pub struct ReplayArgs {
    /// Amount the pad is mounted with (defaults to the empty expense "-0")
    #[arg(short, long, env = "AMOUNT_PAD_AMOUNT", allow_hyphen_values = true)]
    pub amount: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReplayFormat,

    /// Keys to press, in order
    #[arg(required = true, allow_hyphen_values = true, num_args = 1..)]
    pub keys: Vec<String>,
}

/// Arguments for the interactive command
#[derive(Parser, Debug)]
pub struct InteractiveArgs {
    /// Amount the pad is mounted with (defaults to the empty expense "-0")
    #[arg(short, long, env = "AMOUNT_PAD_AMOUNT", allow_hyphen_values = true)]
    pub amount: Option<String>,
}

/// Replay output format
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReplayFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// JSON report
    Json,
}

/// Color argument for CLI
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::config::ColorChoice;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("amount-pad").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_verify() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_replay_keys_with_hyphens() {
        let cli = parse(&["replay", "--amount", "10", "-", "4", "+/-", "="]);
        let Commands::Replay(args) = cli.command else {
            panic!("expected replay");
        };
        assert_eq!(args.amount.as_deref(), Some("10"));
        assert_eq!(args.keys, ["-", "4", "+/-", "="]);
        assert_eq!(args.format, ReplayFormat::Text);
    }

    #[test]
    fn test_replay_negative_amount() {
        let cli = parse(&["replay", "-a", "-12.5", "del"]);
        let Commands::Replay(args) = cli.command else {
            panic!("expected replay");
        };
        assert_eq!(args.amount.as_deref(), Some("-12.5"));
    }

    #[test]
    fn test_replay_requires_keys() {
        let result = Cli::try_parse_from(["amount-pad", "replay"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_replay_json_format() {
        let cli = parse(&["replay", "--format", "json", "5"]);
        let Commands::Replay(args) = cli.command else {
            panic!("expected replay");
        };
        assert_eq!(args.format, ReplayFormat::Json);
    }

    #[test]
    fn test_global_flags() {
        let cli = parse(&["-vv", "--color", "never", "layout"]);
        assert_eq!(cli.verbose, 2);
        assert!(!cli.quiet);
        assert_eq!(ColorChoice::from(cli.color), ColorChoice::Never);
        assert!(matches!(cli.command, Commands::Layout));
    }

    #[test]
    fn test_interactive_amount() {
        let cli = parse(&["interactive", "--amount", "3.50"]);
        let Commands::Interactive(args) = cli.command else {
            panic!("expected interactive");
        };
        assert_eq!(args.amount.as_deref(), Some("3.50"));
    }

    #[test]
    fn test_color_arg_conversion() {
        assert_eq!(ColorChoice::from(ColorArg::Auto), ColorChoice::Auto);
        assert_eq!(ColorChoice::from(ColorArg::Always), ColorChoice::Always);
        assert_eq!(ColorChoice::from(ColorArg::Never), ColorChoice::Never);
    }
}
