//! # gdeps CLI Entry Point
//!
//! Parses arguments with clap and routes each command to its handler in
//! [`gdeps::commands`].

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use colored::*;

use gdeps::commands;
use gdeps::config::GdepsConfig;
use gdeps::package_manager::Bower;
use gdeps::ui::ConsoleTerminal;

#[derive(Parser)]
#[command(name = "gdeps")]
#[command(
    about = "A dependency manager for GDevelop built on top of bower.",
    version = env!("CARGO_PKG_VERSION")
)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create bower.json and gdeps.json in the current directory
    Init,
    /// Install a package
    Install {
        /// Bower package (name, name#version, owner/repo or URL)
        package: String,
    },
    /// Register a local source file in gdeps.json
    Register {
        /// Path to the file, relative to the project directory
        file: String,
    },
    /// List external source files of the project
    List,
    /// Generate shell completion scripts
    Completion { shell: Shell },
}

fn run(cli: Cli) -> Result<()> {
    let root = std::env::current_dir()?;
    let config = GdepsConfig::load(&root);
    let mut term = ConsoleTerminal;

    match cli.command {
        Commands::Init => {
            let bower = Bower::new(&root, &config);
            commands::init::init(&root, &bower, &mut term).map(|_| ())
        }
        Commands::Install { package } => {
            let bower = Bower::new(&root, &config);
            commands::install::install(&root, &package, &config, &bower, &mut term).map(|_| ())
        }
        Commands::Register { file } => commands::register::register(&root, &file),
        Commands::List => commands::list::list(&root, &mut term),
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let bin_name = cmd.get_name().to_string();
            generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "x".red(), e);
        std::process::exit(1);
    }
}
