use clap::{Parser, Subcommand};

/// `burrow` - sandbox-side runner and request tools for a chat agent.
#[derive(Parser, Debug)]
#[command(name = "burrow")]
#[command(version)]
#[command(about = "Run a sandboxed chat agent and broker its requests to the host.", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run one agent turn: read a run request on stdin, print the result block
    Run,

    /// Invoke one request tool and print the text the agent would see
    Tool {
        /// Tool name (see `burrow tools`)
        name: String,

        /// Tool arguments as a JSON object
        #[arg(default_value = "{}")]
        args: String,
    },

    /// Print every request tool spec as JSON
    Tools,

    /// List entries waiting in the message and task queues
    Drain {
        /// Remove each decoded entry after printing it
        #[arg(long)]
        ack: bool,
    },
}
