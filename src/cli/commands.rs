use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "agentpro")]
#[command(author, version, about = "Keyword-routed tool orchestration demo", long_about = None)]
pub struct Cli {
    /// Settings file to load instead of config/{CONFIG_ENV}
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Runs the demo when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate code for a prompt, then route a sample prompt through the tools
    Demo,

    /// Route a single prompt to one tool
    Dispatch {
        prompt: String,

        /// Print the tool output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the one-shot code generator
    Generate { prompt: String },

    /// Start the echo chat loop (type 'exit' to leave)
    Chat,

    /// List registered tools and the routing table
    Tools,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_is_demo() {
        let cli = Cli::try_parse_from(["agentpro"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_dispatch_args() {
        let cli =
            Cli::try_parse_from(["agentpro", "dispatch", "make a slide", "--json", "-c", "x.toml"])
                .unwrap();

        match cli.command {
            Some(Commands::Dispatch { prompt, json }) => {
                assert_eq!(prompt, "make a slide");
                assert!(json);
            }
            _ => panic!("expected dispatch"),
        }
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
    }

    #[test]
    fn test_generate_requires_prompt() {
        assert!(Cli::try_parse_from(["agentpro", "generate"]).is_err());
    }
}
