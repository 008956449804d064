//! Kickstarter CLI - TCA table scaffolding for TYPO3 extensions

use anyhow::Result;
use clap::{Parser, Subcommand};
use kickstarter_core::tui::TableArgs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "kickstarter")]
#[command(about = "CLI for scaffolding TCA tables in TYPO3 extensions")]
#[command(version)]
pub struct Args {
    /// Print debug logs to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new TCA table in an extension
    Table(CliTableArgs),
}

#[derive(Parser, Debug, Default)]
pub struct CliTableArgs {
    /// Extension key you want to extend
    pub extension_key: Option<String>,

    /// Directory containing the extensions (default: packages)
    #[arg(long = "extensions-dir")]
    pub extensions_dir: Option<PathBuf>,

    /// Read the table definition from a YAML file instead of asking
    #[arg(long = "from")]
    pub definition: Option<PathBuf>,

    /// Show the generated files without writing them
    #[arg(long)]
    pub dry_run: bool,

    /// Auto-confirm table name prefix suggestions (with --from)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliTableArgs> for TableArgs {
    fn from(args: CliTableArgs) -> Self {
        TableArgs {
            extension_key: args.extension_key,
            extensions_dir: args.extensions_dir,
            definition: args.definition,
            dry_run: args.dry_run,
            yes: args.yes,
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    init_logging(args.verbose);

    // No subcommand provided, default to the table command (interactive mode)
    let table_args = match args.command {
        Some(Command::Table(table_args)) => table_args,
        None => CliTableArgs::default(),
    };

    let result = kickstarter_core::run(table_args.into());

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_table_command() {
        let args = Args::parse_from([
            "kickstarter",
            "table",
            "my_extension",
            "--from",
            "table.yaml",
            "--dry-run",
            "-y",
        ]);
        let Some(Command::Table(table)) = args.command else {
            panic!("expected the table command");
        };
        let table: TableArgs = table.into();
        assert_eq!(table.extension_key.as_deref(), Some("my_extension"));
        assert_eq!(table.definition, Some(PathBuf::from("table.yaml")));
        assert!(table.dry_run);
        assert!(table.yes);
    }

    #[test]
    fn test_no_subcommand() {
        let args = Args::parse_from(["kickstarter", "--verbose"]);
        assert!(args.command.is_none());
        assert!(args.verbose);
    }
}
