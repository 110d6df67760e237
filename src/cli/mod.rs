// CLI module for running and inspecting the service

use clap::{Parser, Subcommand};

/// Paramlab CLI
#[derive(Parser)]
#[command(name = "paramlab")]
#[command(about = "Parameter binding and validation demo backend", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server
    Serve,

    /// Print the generated OpenAPI document as JSON
    Openapi,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_is_accepted() {
        let cli = Cli::try_parse_from(["paramlab"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_openapi_subcommand_parses() {
        let cli = Cli::try_parse_from(["paramlab", "openapi"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Openapi)));
    }
}
