use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use relnotes::Result;
use std::io;

#[derive(Parser)]
#[command(name = "relnotes")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Assemble release-note fragments into a distributable message set", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Project root holding relnotes.toml and the message directories (default: current directory)
    #[arg(short = 'C', long, global = true)]
    project_root: Option<String>,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the message set, VERSION, PRE_RELEASE and manifest (default)
    Build,

    /// Show fragments in release order without building
    List,

    /// Print the release body of a built version
    Notes {
        /// Version to print (default: contents of the built VERSION file)
        version: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let project_root = cli.project_root.as_deref();

    match cli.command.unwrap_or(Commands::Build) {
        Commands::Build => {
            relnotes::cli::build::run(project_root, cli.quiet)?;
        }

        Commands::List => {
            relnotes::cli::list::run(project_root)?;
        }

        Commands::Notes { version } => {
            relnotes::cli::notes::run(project_root, version.as_deref())?;
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "relnotes", &mut io::stdout());
        }
    }

    Ok(())
}
