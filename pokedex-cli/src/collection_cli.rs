//! Pokedex collection CLI commands
//!
//! Every command renders from the value the collection manager returns.
//! Not-found and no-op outcomes are ordinary results and only storage
//! faults make a command fail.

use anyhow::{Context, Result};
use clap::Subcommand;
use std::io::Write;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

use pokedex_core::{
    Collection, CollectionError, CollectionManager, CreatureRecord, ErrorKind, Removal,
};

#[derive(Subcommand, Debug)]
pub enum CollectionCommand {
    /// List the pokemon in your collection
    List {
        /// Output as JSON
        #[clap(long)]
        json: bool,
    },

    /// Show details of the pokemon at an index
    Show {
        /// Position in the collection (as shown by `list`)
        index: usize,

        /// Output the full catalog record as JSON
        #[clap(long)]
        json: bool,
    },

    /// Look up a pokemon by name and add it to the collection
    Add {
        /// Pokemon name (case-insensitive)
        name: Option<String>,
    },

    /// Remove the pokemon at an index
    Remove {
        /// Position in the collection (as shown by `list`)
        index: usize,
    },

    /// Replace the pokemon at an index with its next evolution
    Evolve {
        /// Position in the collection (as shown by `list`)
        index: usize,
    },

    /// Delete the stored collection
    Clear,
}

impl CollectionCommand {
    pub async fn execute(self, manager: &CollectionManager, out: &mut impl Write) -> Result<()> {
        match self {
            CollectionCommand::List { json } => execute_list(manager, json, out),
            CollectionCommand::Show { index, json } => execute_show(manager, index, json, out),
            CollectionCommand::Add { name } => {
                execute_add(manager, name.as_deref().unwrap_or(""), out).await
            }
            CollectionCommand::Remove { index } => execute_remove(manager, index, out),
            CollectionCommand::Evolve { index } => execute_evolve(manager, index, out).await,
            CollectionCommand::Clear => execute_clear(manager, out),
        }
    }
}

/// Print a recoverable outcome, propagate storage faults
fn report(err: CollectionError, out: &mut impl Write) -> Result<()> {
    if err.kind() == ErrorKind::Storage {
        return Err(err).context("Failed to save the collection");
    }

    writeln!(out, "{err}")?;
    Ok(())
}

/// Table row for the collection listing
#[derive(Tabled)]
struct CollectionRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Id")]
    id: u32,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Stats")]
    stats: String,
}

/// `hp 45, attack 49, ...` in catalog order
fn stats_summary(record: &CreatureRecord) -> String {
    record
        .stats
        .iter()
        .map(|s| format!("{} {}", s.stat.name, s.base_stat))
        .collect::<Vec<_>>()
        .join(", ")
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let kept: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        text.to_string()
    }
}

fn render_table(collection: &Collection) -> String {
    let rows: Vec<CollectionRow> = collection
        .iter()
        .enumerate()
        .map(|(index, record)| CollectionRow {
            index,
            id: record.id,
            name: record.name.clone(),
            stats: truncate(&stats_summary(record), 60),
        })
        .collect();

    Table::new(&rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string()
}

fn execute_list(manager: &CollectionManager, json_output: bool, out: &mut impl Write) -> Result<()> {
    let collection = manager.load();

    if json_output {
        let entries: Vec<serde_json::Value> = collection
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let stats: serde_json::Map<String, serde_json::Value> = record
                    .stats
                    .iter()
                    .map(|s| (s.stat.name.clone(), s.base_stat.into()))
                    .collect();

                serde_json::json!({
                    "index": index,
                    "id": record.id,
                    "name": record.name,
                    "artwork": record.artwork(),
                    "stats": stats,
                })
            })
            .collect();

        writeln!(out, "{}", serde_json::to_string_pretty(&entries)?)?;
        return Ok(());
    }

    if collection.is_empty() {
        writeln!(out, "Your collection is empty. Add one with `pokedex add <name>`.")?;
        return Ok(());
    }

    writeln!(out, "{} pokemon in your collection:\n", collection.len())?;
    writeln!(out, "{}", render_table(&collection))?;
    Ok(())
}

fn execute_show(
    manager: &CollectionManager,
    index: usize,
    json_output: bool,
    out: &mut impl Write,
) -> Result<()> {
    let collection = manager.load();

    let Some(record) = collection.get(index) else {
        return report(
            CollectionError::IndexOutOfRange {
                index,
                len: collection.len(),
            },
            out,
        );
    };

    if json_output {
        writeln!(out, "{}", serde_json::to_string_pretty(record)?)?;
        return Ok(());
    }

    writeln!(out, "Pokemon: {} (#{})", record.name, record.id)?;
    if let Some(artwork) = record.artwork() {
        writeln!(out, "Artwork: {artwork}")?;
    }

    writeln!(out)?;
    writeln!(out, "Stats:")?;
    for stat in &record.stats {
        writeln!(out, "  {}: {}", stat.stat.name, stat.base_stat)?;
    }

    Ok(())
}

async fn execute_add(manager: &CollectionManager, name: &str, out: &mut impl Write) -> Result<()> {
    match manager.add(name).await {
        Ok(record) => {
            writeln!(out, "Added {} (#{}) to your collection", record.name, record.id)?;
            Ok(())
        }
        Err(err) => report(err, out),
    }
}

fn execute_remove(manager: &CollectionManager, index: usize, out: &mut impl Write) -> Result<()> {
    match manager.remove_at(index) {
        Ok(Removal::Removed {
            removed,
            collection,
        }) => {
            writeln!(
                out,
                "Removed {} ({} left in your collection)",
                removed.name,
                collection.len()
            )?;
            Ok(())
        }
        Ok(Removal::NoOp) => {
            writeln!(out, "Nothing to remove at index {index}")?;
            Ok(())
        }
        Err(err) => report(err, out),
    }
}

async fn execute_evolve(
    manager: &CollectionManager,
    index: usize,
    out: &mut impl Write,
) -> Result<()> {
    let before = manager.load().get(index).map(|r| r.name.clone());

    match manager.evolve_at(index).await {
        Ok(collection) => {
            let evolved = collection
                .get(index)
                .map(|r| r.name.as_str())
                .unwrap_or_default();
            writeln!(
                out,
                "{} evolved into {}!",
                before.as_deref().unwrap_or("Your pokemon"),
                evolved
            )?;
            Ok(())
        }
        Err(err) => report(err, out),
    }
}

fn execute_clear(manager: &CollectionManager, out: &mut impl Write) -> Result<()> {
    manager
        .store()
        .clear()
        .context("Failed to clear the collection")?;

    writeln!(out, "Cleared your collection")?;
    Ok(())
}
