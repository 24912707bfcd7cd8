//! Item type tag.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The `type` column of a catalog row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// A regular file.
    File,
    /// A folder.
    Folder,
}

impl ItemKind {
    /// Return the tag as stored in the catalog.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Folder => "folder",
        }
    }

    /// Check if this is a folder.
    pub fn is_folder(&self) -> bool {
        matches!(self, Self::Folder)
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = catalog_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "file" => Ok(Self::File),
            "folder" => Ok(Self::Folder),
            _ => Err(catalog_core::AppError::validation(format!(
                "Invalid item type: '{s}'. Expected one of: file, folder"
            ))),
        }
    }
}
