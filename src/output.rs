//! Table and JSON output formatting for CLI commands.

use serde::Serialize;
use tabled::{Table, Tabled};

use catalog_core::types::format_size;
use catalog_entity::{CatalogStats, DirectoryEntry};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// One directory entry as a table row
#[derive(Debug, Serialize, Tabled)]
pub struct EntryRow {
    /// Name
    pub name: String,
    /// Type
    #[tabled(rename = "type")]
    pub kind: String,
    /// Size
    pub size: String,
    /// Path
    pub path: String,
    /// Identifier
    pub id: String,
}

impl From<&DirectoryEntry> for EntryRow {
    fn from(entry: &DirectoryEntry) -> Self {
        let size = if entry.is_folder() {
            "Folder".to_string()
        } else {
            format_size(entry.size)
        };
        let id = if entry.synthesized {
            format!("({})", entry.id)
        } else {
            entry.id.clone()
        };
        Self {
            name: entry.name.clone(),
            kind: entry.kind.to_string(),
            size,
            path: entry.path.clone(),
            id,
        }
    }
}

/// Print directory entries in the selected format
pub fn print_entries(entries: &[DirectoryEntry], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if entries.is_empty() {
                println!("No results found.");
            } else {
                let rows: Vec<EntryRow> = entries.iter().map(EntryRow::from).collect();
                println!("{}", Table::new(rows));
            }
        }
        OutputFormat::Json => print_json(&entries),
    }
}

/// Print catalog statistics in the selected format
pub fn print_stats(stats: &CatalogStats, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            print_kv("Total items", &stats.total_items.to_string());
            print_kv("Version", stats.version.as_deref().unwrap_or("unknown"));
            if stats.sample_paths.is_empty() {
                println!("  No items found in table.");
            } else {
                println!("  Sample paths:");
                for path in &stats.sample_paths {
                    println!("    '{}'", path);
                }
            }
        }
        OutputFormat::Json => print_json(stats),
    }
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(item: &T) {
    let json = serde_json::to_string_pretty(item).unwrap_or_else(|_| "null".to_string());
    println!("{}", json);
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {}", msg);
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {}", msg);
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<24} {}", format!("{}:", key), value);
}
