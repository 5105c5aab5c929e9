//! Configuration type definitions.

use serde::{Deserialize, Serialize};

/// Top-level schema description loaded from YAML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaConfig {
    /// Connection settings for the target database.
    pub database: DatabaseConfig,
    /// Tables carrying chemistry columns.
    #[serde(default)]
    pub tables: Vec<TableConfig>,
}

/// PostgreSQL connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub database: String,
    pub username: String,
    #[serde(default)]
    pub password: String,
    /// Maximum pool size.
    #[serde(default = "default_pool_size")]
    pub pool_size: usize,
}

fn default_port() -> u16 {
    5432
}

fn default_pool_size() -> usize {
    8
}

/// A table with one or more chemistry columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableConfig {
    pub name: String,
    pub columns: Vec<ColumnConfig>,
    #[serde(default)]
    pub indexes: Vec<IndexConfig>,
}

/// Which cartridge a column belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cartridge {
    Bingo,
    Rdkit,
}

impl std::fmt::Display for Cartridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cartridge::Bingo => f.write_str("bingo"),
            Cartridge::Rdkit => f.write_str("rdkit"),
        }
    }
}

/// The chemistry payload a column stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChemKind {
    Mol,
    BinaryMol,
    Reaction,
    BinaryReaction,
    BitFingerprint,
    SparseFingerprint,
}

/// A chemistry column declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnConfig {
    pub name: String,
    pub cartridge: Cartridge,
    pub kind: ChemKind,
    /// Decode format for read expressions. Interpreted lazily when the
    /// column is first read, not at load time.
    #[serde(default)]
    pub return_format: Option<String>,
    /// Bingo binary molecule storage option.
    #[serde(default)]
    pub preserve_position: bool,
}

/// An index declaration attached to a table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    pub name: String,
    /// Columns covered by the index. Bingo indexes take exactly one.
    pub columns: Vec<String>,
}
