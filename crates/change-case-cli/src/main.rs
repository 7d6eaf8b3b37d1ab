//! `change-case` - convert identifiers in files between case conventions.
//!
//! # Usage
//!
//! ```bash
//! # List available conversions, or preview them on a word
//! change-case list
//! change-case list --preview fooBarBaz
//!
//! # Convert selections (LINE:COL for a caret, LINE:COL-LINE:COL for a range, zero-based)
//! change-case convert src/lib.rs --to snake --select 3:8 --select 10:4-10:17
//!
//! # Rename a file by converting its stem
//! change-case rename src/userProfile.test.ts --to kebab
//! ```
//!
//! Logging is controlled with `RUST_LOG` (default: `warn`).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use change_case_core::{
    CaseCommands, CaseConfig, MemoryBuffer, Position, Selection, TextBuffer, TransformRegistry,
};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "change-case", version, about = "Convert text between case conventions")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List available conversions
    List {
        /// Show each conversion applied to this text instead of its description
        #[arg(long)]
        preview: Option<String>,
    },
    /// Convert the text under selections in a file
    Convert {
        /// File to edit
        file: PathBuf,
        /// Conversion label (see `list`)
        #[arg(long = "to")]
        label: String,
        /// Selection as LINE:COL or LINE:COL-LINE:COL; repeatable. Defaults to the whole file
        #[arg(long = "select", value_parser = parse_selection)]
        selections: Vec<Selection>,
        /// Treat `.` as part of the word around a caret
        #[arg(long)]
        include_dot: bool,
        /// Settings JSON file (`changeCase.includeDotInCurrentWord`)
        #[arg(long)]
        settings: Option<PathBuf>,
        /// Write the result back to the file instead of stdout
        #[arg(long)]
        in_place: bool,
    },
    /// Rename a file by converting its stem
    Rename {
        /// File to rename
        file: PathBuf,
        /// Conversion label (see `list`)
        #[arg(long = "to")]
        label: String,
        /// Print the new name without renaming
        #[arg(long)]
        dry_run: bool,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::List { preview } => list(preview.as_deref()),
        Commands::Convert {
            file,
            label,
            selections,
            include_dot,
            settings,
            in_place,
        } => {
            let mut config = match settings {
                Some(path) => CaseConfig::load(&path)
                    .with_context(|| format!("failed to load settings from {}", path.display()))?,
                None => CaseConfig::default(),
            };
            config.include_dot_in_current_word |= include_dot;
            convert(&file, &label, selections, config, in_place)
        }
        Commands::Rename {
            file,
            label,
            dry_run,
        } => rename(&file, &label, dry_run),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn list(preview: Option<&str>) -> Result<()> {
    let registry = TransformRegistry::builtin();
    let width = registry.labels().map(str::len).max().unwrap_or(0);
    for entry in registry.iter() {
        let description = match preview {
            Some(text) => entry.apply(text),
            None => entry.description.clone(),
        };
        println!("{:width$}  {}", entry.label, description);
    }
    Ok(())
}

/// Converted document text and the selections left on it.
#[derive(Debug, PartialEq)]
struct Conversion {
    text: String,
    edits_applied: usize,
    selections: Vec<Selection>,
}

fn convert(
    file: &Path,
    label: &str,
    selections: Vec<Selection>,
    config: CaseConfig,
    in_place: bool,
) -> Result<()> {
    let text =
        fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))?;
    let conversion = convert_text(&text, label, selections, config)
        .with_context(|| format!("failed to convert {}", file.display()))?;
    tracing::info!(
        edits = conversion.edits_applied,
        selections = conversion.selections.len(),
        "converted {}",
        file.display()
    );

    if in_place {
        write_in_place(file, &conversion)?;
    } else {
        print!("{}", conversion.text);
    }

    for selection in &conversion.selections {
        eprintln!("{}", format_selection(selection));
    }
    Ok(())
}

/// Run `label` over `selections` in `text`; no selections means the whole document.
fn convert_text(
    text: &str,
    label: &str,
    selections: Vec<Selection>,
    config: CaseConfig,
) -> Result<Conversion> {
    let commands = CaseCommands::new(TransformRegistry::builtin(), config);
    if !commands.registry().contains(label) {
        bail!("unknown conversion '{label}' (see `change-case list`)");
    }

    let mut buffer = MemoryBuffer::new(text);
    let selections = if selections.is_empty() {
        vec![Selection::from_range(buffer.full_range())]
    } else {
        selections
    };
    buffer.set_selections(selections);

    let outcome = commands.try_run(label, &mut buffer)?;
    Ok(Conversion {
        text: buffer.text(),
        edits_applied: outcome.edits_applied,
        selections: buffer.selections(),
    })
}

/// Write the converted text back to `file`. Returns `false` when nothing was edited.
fn write_in_place(file: &Path, conversion: &Conversion) -> Result<bool> {
    if conversion.edits_applied == 0 {
        tracing::debug!(file = %file.display(), "no edits, leaving file untouched");
        return Ok(false);
    }
    fs::write(file, &conversion.text)
        .with_context(|| format!("failed to write {}", file.display()))?;
    Ok(true)
}

fn rename(file: &Path, label: &str, dry_run: bool) -> Result<()> {
    let commands = CaseCommands::default();
    let target = if dry_run {
        change_case_core::renamed_path(file, label, commands.registry())?
    } else {
        commands
            .rename_file(file, label)
            .with_context(|| format!("failed to rename {}", file.display()))?
    };
    println!("{}", target.display());
    Ok(())
}

fn parse_position(s: &str) -> Result<Position, String> {
    let (line, column) = s
        .split_once(':')
        .ok_or_else(|| format!("expected LINE:COL, got '{s}'"))?;
    let line = line
        .trim()
        .parse()
        .map_err(|e| format!("invalid line '{line}': {e}"))?;
    let column = column
        .trim()
        .parse()
        .map_err(|e| format!("invalid column '{column}': {e}"))?;
    Ok(Position::new(line, column))
}

fn parse_selection(s: &str) -> Result<Selection, String> {
    match s.split_once('-') {
        Some((anchor, active)) => Ok(Selection::new(
            parse_position(anchor)?,
            parse_position(active)?,
        )),
        None => Ok(Selection::cursor(parse_position(s)?)),
    }
}

fn format_selection(selection: &Selection) -> String {
    let range = selection.range();
    if range.is_empty() {
        format!("{}:{}", range.start.line, range.start.column)
    } else {
        format!(
            "{}:{}-{}:{}",
            range.start.line, range.start.column, range.end.line, range.end.column
        )
    }
}
