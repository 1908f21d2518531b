//! # refetch CLI Entry Point
//!
//! This is the main executable for the `rf` command-line tool.
//! It parses CLI arguments using clap and routes commands to the appropriate handlers.
//!
//! ## Command Structure
//!
//! - **Setup**: `init`
//! - **Fetch**: `fetch`, `build`
//! - **Inspect**: `list`
//! - **Cleanup**: `clean`

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use colored::*;
use std::fs;
use std::path::Path;

use refetch::clean;
use refetch::compile;
use refetch::config;
use refetch::fetch;
use refetch::layout::Layout;
use refetch::status;
use refetch::tools::SystemTools;
use refetch::ui;

#[derive(Parser)]
#[command(name = "rf")]
#[command(about = "Fetch and stage C/C++ reference libraries", version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch all enabled dependencies and stage their headers
    Fetch,
    /// Compile configured translation units into the lib directory
    Build,
    /// Write a starter refs.toml in the current directory
    Init,
    /// Show configured dependencies and their pipeline state
    List,
    /// Remove clone residue left by fetch
    Clean {
        /// Remove the entire staging tree, staged headers included
        #[arg(long)]
        all: bool,
    },
    /// Generate shell completion scripts
    Completion { shell: Shell },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Fetch) => {
            let config = config::load_config()?;
            let layout = current_layout(&config)?;
            fetch::fetch_references(&config, &layout, &SystemTools)
        }

        Some(Commands::Build) => {
            let config = config::load_config()?;
            let layout = current_layout(&config)?;
            compile::build_objects(&config, &layout, &SystemTools)
        }

        Some(Commands::Init) => init_config(),

        Some(Commands::List) => {
            let config = config::load_config()?;
            let layout = current_layout(&config)?;
            status::list(&config, &layout)
        }

        Some(Commands::Clean { all }) => {
            let config = config::load_config()?;
            let layout = current_layout(&config)?;
            clean::clean(&config, &layout, *all)
        }

        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let bin_name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, bin_name, &mut std::io::stdout());
            Ok(())
        }

        None => {
            print_splash();
            Ok(())
        }
    }
}

fn current_layout(config: &config::RefsConfig) -> Result<Layout> {
    Ok(Layout::new(&std::env::current_dir()?, config.root()))
}

fn init_config() -> Result<()> {
    if Path::new(config::CONFIG_FILE).exists() {
        println!(
            "{} Error: {} already exists in this directory.",
            "x".red(),
            config::CONFIG_FILE
        );
        return Ok(());
    }

    fs::write(config::CONFIG_FILE, config::STARTER_CONFIG)?;
    println!(
        "{} Created {}. Run {} to fetch the references.",
        "✓".green(),
        config::CONFIG_FILE,
        "rf fetch".bold().white()
    );
    Ok(())
}

fn print_splash() {
    println!();
    println!("   {}", "refetch".bold().cyan());
    println!(
        "   {}",
        "Fetch and stage C/C++ reference libraries".dimmed().italic()
    );
    println!("   {}", format!("v{}", env!("CARGO_PKG_VERSION")).green());
    println!();

    let mut table = ui::Table::new(&["Category", "Commands"]);
    table.add_row(vec![
        "Setup".bold().green().to_string(),
        "init".cyan().to_string(),
    ]);
    table.add_row(vec![
        "Fetch".bold().yellow().to_string(),
        format!("{}, {}", "fetch".cyan(), "build".cyan()),
    ]);
    table.add_row(vec![
        "Inspect".bold().blue().to_string(),
        "list".cyan().to_string(),
    ]);
    table.add_row(vec![
        "Cleanup".bold().magenta().to_string(),
        "clean".cyan().to_string(),
    ]);
    table.print();

    println!();
    println!("   Run {} for detailed usage.", "rf --help".white().bold());
    println!();
}
