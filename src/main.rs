use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::engine::ArgValueCompleter;
use clap_complete::{shells, CompleteEnv};

mod cli;
mod error;
mod git;
mod identity;
mod ssh_config;
mod store;
mod ui;

pub use error::{GhidError, Result};

use cli::completions::{IdentityCompleter, ShellType};

#[derive(Parser)]
#[command(name = "ghid")]
#[command(about = "GitHub SSH identity manager")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List identities and show which one is active
    List,

    /// Add a new identity
    Add,

    /// Edit an identity by name
    Edit {
        /// Identity name
        #[arg(add = ArgValueCompleter::new(IdentityCompleter))]
        name: String,
    },

    /// Delete an identity by name
    Remove {
        /// Identity name
        #[arg(add = ArgValueCompleter::new(IdentityCompleter))]
        name: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Make an identity's key the active one for github.com
    Use {
        /// Identity name
        #[arg(add = ArgValueCompleter::new(IdentityCompleter))]
        name: String,
    },

    /// Open an SSH session to github.com with an identity's key
    Connect {
        /// Identity name (defaults to the active identity)
        #[arg(add = ArgValueCompleter::new(IdentityCompleter))]
        name: Option<String>,
    },

    /// Show file locations and the active identity
    Status,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate for
        #[arg(value_enum)]
        shell: ShellType,
    },
}

fn main() -> anyhow::Result<()> {
    CompleteEnv::with_factory(Cli::command).complete();

    let cli = Cli::parse();

    match cli.command {
        Commands::List => {
            cli::commands::list::execute()?;
            Ok(())
        }
        Commands::Add => {
            cli::commands::add::execute()?;
            Ok(())
        }
        Commands::Edit { name } => {
            cli::commands::edit::execute(name)?;
            Ok(())
        }
        Commands::Remove { name, force } => {
            cli::commands::remove::execute(name, force)?;
            Ok(())
        }
        Commands::Use { name } => {
            cli::commands::activate::execute(name)?;
            Ok(())
        }
        Commands::Connect { name } => {
            cli::commands::connect::execute(name)?;
            Ok(())
        }
        Commands::Status => {
            cli::commands::status::execute()?;
            Ok(())
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            match shell {
                ShellType::Bash => {
                    clap_complete::generate(shells::Bash, &mut cmd, "ghid", &mut std::io::stdout())
                }
                ShellType::Zsh => {
                    clap_complete::generate(shells::Zsh, &mut cmd, "ghid", &mut std::io::stdout())
                }
                ShellType::Fish => {
                    clap_complete::generate(shells::Fish, &mut cmd, "ghid", &mut std::io::stdout())
                }
            }
            Ok(())
        }
    }
}
