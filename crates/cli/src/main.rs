mod cmd;
mod logging;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "mdsplice", version, about = "Capture formatted content into markdown documents")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print resolved paths
    Doctor,

    /// Run a capture, splicing rendered content into its target file
    Capture(CaptureArgs),
}

#[derive(Debug, Args)]
pub struct CaptureArgs {
    /// Logical capture name (e.g. "inbox" or "work/standup")
    pub name: Option<String>,

    /// Variable assignment, repeatable: --var key=value
    #[arg(long = "var", value_name = "KEY=VALUE", value_parser = parse_key_val)]
    pub vars: Vec<(String, String)>,

    /// List discovered captures instead of running one
    #[arg(long)]
    pub list: bool,

    /// Render and print the block without touching the target file
    #[arg(long)]
    pub dry_run: bool,
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) =
        s.split_once('=').ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))?;
    Ok((key.to_string(), value.to_string()))
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Doctor => cmd::doctor::run(cli.config.as_deref(), cli.profile.as_deref()),
        Commands::Capture(args) => {
            if args.list {
                cmd::capture::list(cli.config.as_deref(), cli.profile.as_deref());
            } else if let Some(name) = args.name {
                cmd::capture::run(
                    cli.config.as_deref(),
                    cli.profile.as_deref(),
                    &name,
                    &args.vars,
                    args.dry_run,
                );
            } else {
                eprintln!("capture name required unless --list is given");
                std::process::exit(2);
            }
        }
    }
}
