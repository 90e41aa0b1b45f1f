//! CLI argument definitions.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;

use practic::greeter;

#[derive(Parser)]
#[command(name = "practic")]
#[command(about = "Prints a fixed greeting")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Accepted and ignored; the greeting never depends on arguments
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub ignored: Vec<String>,
}

impl Cli {
    pub fn execute(&self) -> Result<()> {
        tracing::debug!(ignored = self.ignored.len(), "writing greeting");

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        greeter::greet(&mut out).context("Failed to write greeting")?;
        out.flush().context("Failed to flush stdout")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_accepts_no_arguments() {
        assert!(Cli::try_parse_from(["practic"]).is_ok());
    }

    #[test]
    fn test_cli_ignores_any_arguments() {
        let cli =
            Cli::try_parse_from(["practic", "foo", "--bogus", "-x", "--help", "--version"]).unwrap();
        assert_eq!(cli.ignored, ["foo", "--bogus", "-x", "--help", "--version"]);
    }

    #[test]
    fn test_cli_leading_flag_is_ignored() {
        let cli = Cli::try_parse_from(["practic", "--help"]).unwrap();
        assert_eq!(cli.ignored, ["--help"]);
    }
}
