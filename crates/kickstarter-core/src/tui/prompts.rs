//! Interactive table command

use super::prompter::CliclackPrompter;
use crate::builder::TableDefinitionBuilder;
use crate::config::Settings;
use crate::creator::{
    CreatorInformation, FsWriter, MemoryWriter, ModificationKind, TableCreator,
};
use crate::definition::TableDefinitionFile;
use crate::extension::DirectoryLocator;
use crate::table::TableDescription;
use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Arguments for the table command
#[derive(Debug, Clone, Default)]
pub struct TableArgs {
    /// Extension to add the table to; asked for when missing
    pub extension_key: Option<String>,

    /// Overrides the configured extensions directory
    pub extensions_dir: Option<PathBuf>,

    /// Read the table from a definition file instead of asking
    pub definition: Option<PathBuf>,

    /// Show the generated files without writing them
    pub dry_run: bool,

    /// Adopt suggested table name prefixes without asking (definition files)
    pub yes: bool,
}

/// Run the table command with interactive prompts
pub fn run(args: TableArgs) -> Result<()> {
    cliclack::intro("TYPO3 Extension Kickstarter")?;

    // Step 1: Settings
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut settings = Settings::load(&current_dir)?;
    if let Some(dir) = &args.extensions_dir {
        settings.extensions_dir = dir.clone();
    }
    let locator = DirectoryLocator::new(&settings.extensions_dir);
    cliclack::log::info(format!(
        "Looking for extensions in {}",
        locator.base().display()
    ))?;

    // Step 2: Describe the table
    let table = describe_table(&args, &locator)?;
    cliclack::log::success(format!(
        "Table {} with {} column(s)",
        table.table_name(),
        table.column_names().len()
    ))?;

    // Step 3: Create files
    let extension_path = table.extension().path.clone();
    let options = settings.creator_options();
    let information = if args.dry_run {
        let mut creator = TableCreator::new(MemoryWriter::overlay(&extension_path), options);
        let information = creator.create(table)?;
        print_dry_run(creator.writer(), &information)?;
        information
    } else {
        TableCreator::new(FsWriter::new(&extension_path), options).create(table)?
    };

    // Step 4: Report
    print_creator_information(&information, &extension_path, args.dry_run)?;

    Ok(())
}

fn describe_table(args: &TableArgs, locator: &DirectoryLocator) -> Result<TableDescription> {
    let extension_key = args.extension_key.as_deref();

    if let Some(path) = &args.definition {
        cliclack::log::info(format!("Using table definition from {}", path.display()))?;
        let definition = TableDefinitionFile::from_path(path)?;
        return Ok(definition.into_description(locator, extension_key, args.yes)?);
    }

    cliclack::log::info(
        "We are here to assist you in creating a new TCA table.\n\
         Now, we will ask you a few questions to customize the table according to your needs.\n\
         Please take your time to answer them.",
    )?;

    let mut prompter = CliclackPrompter;
    let table = TableDefinitionBuilder::new(&mut prompter).build(locator, extension_key)?;
    Ok(table)
}

fn print_dry_run(writer: &MemoryWriter, information: &CreatorInformation) -> Result<()> {
    for (path, contents) in writer.files() {
        if information.contains(path) {
            cliclack::note(path.display(), contents)?;
        }
    }
    Ok(())
}

fn print_creator_information(
    information: &CreatorInformation,
    extension_path: &Path,
    dry_run: bool,
) -> Result<()> {
    println!();
    if dry_run {
        println!("  {}", "Dry run, nothing was written".yellow());
    } else {
        println!("  {}", "File modifications".bold());
    }
    println!();

    for modification in information.file_modifications() {
        let kind = match modification.kind {
            ModificationKind::Created => modification.kind.as_str().green(),
            ModificationKind::Appended => modification.kind.as_str().yellow(),
            ModificationKind::Merged => modification.kind.as_str().cyan(),
        };
        println!(
            "  {}  {}",
            kind,
            extension_path.join(&modification.path).display()
        );
    }

    cliclack::outro("Table ready. Flush caches and run the database analyzer.")?;

    Ok(())
}
