use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// `Scene Machine` - practice vivid writing with an AI coach.
#[derive(Parser, Debug)]
#[command(name = "scene-machine")]
#[command(version)]
#[command(about = "Practice vivid writing with an AI coach.", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the four-step writing wizard in the terminal
    Practice,

    /// Start the chat relay the wizard talks to
    Serve {
        /// Port to listen on (use 0 for random available port)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
    },

    /// Print a saved vivid example with its highlights colored
    Render {
        /// JSON file holding `vividText` and `highlights`
        file: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_flags_are_optional() {
        let cli = Cli::try_parse_from(["scene-machine", "serve"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Serve {
                port: None,
                host: None
            }
        );

        let cli =
            Cli::try_parse_from(["scene-machine", "serve", "-p", "0", "--host", "::1"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Serve {
                port: Some(0),
                host: Some("::1".into())
            }
        );
    }

    #[test]
    fn render_requires_a_file() {
        assert!(Cli::try_parse_from(["scene-machine", "render"]).is_err());
        let cli = Cli::try_parse_from(["scene-machine", "render", "ex.json"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Render {
                file: PathBuf::from("ex.json")
            }
        );
    }
}
