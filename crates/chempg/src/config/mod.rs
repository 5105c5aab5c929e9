//! YAML schema configuration.
//!
//! A [`SchemaConfig`] describes the chemistry tables of a database:
//! connection settings, columns with their cartridge and storage kind, and
//! index declarations. Loading and validation are separate steps so callers
//! can inspect or amend a parsed config before committing to it.
//!
//! Validation covers structure only: identifiers, cartridge/kind
//! combinations and index shapes. Return formats are left to the lazy
//! check that runs when a read expression is built.

mod types;

pub use types::{
    Cartridge, ChemKind, ColumnConfig, DatabaseConfig, IndexConfig, SchemaConfig, TableConfig,
};

use std::path::Path;

use tracing::info;

use crate::bingo::types::{BingoBinaryMol, BingoBinaryReaction, BingoMol, BingoReaction};
use crate::core::column::{ChemColumn, ChemType};
use crate::core::identifier::validate_identifier;
use crate::error::{ChemError, Result};
use crate::rdkit::types::{
    RdkitBitFingerprint, RdkitMol, RdkitReaction, RdkitSparseFingerprint,
};

impl SchemaConfig {
    /// Load and validate a schema config from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&contents)?;
        config.validate()?;
        info!(
            path = %path.display(),
            tables = config.tables.len(),
            "loaded schema configuration"
        );
        Ok(config)
    }

    /// Parse a schema config from a YAML string without validating it.
    pub fn from_yaml(contents: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Check structural invariants.
    ///
    /// # Errors
    ///
    /// `ChemError::Config` describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        for table in &self.tables {
            validate_identifier(&table.name)?;
            if table.columns.is_empty() {
                return Err(ChemError::config(format!(
                    "Table {:?} declares no columns",
                    table.name
                )));
            }
            for column in &table.columns {
                validate_identifier(&column.name)?;
                column.check_combination(&table.name)?;
            }
            for index in &table.indexes {
                validate_identifier(&index.name)?;
                table.check_index(index)?;
            }
        }
        Ok(())
    }

    /// Look up a table by name.
    pub fn table(&self, name: &str) -> Option<&TableConfig> {
        self.tables.iter().find(|t| t.name == name)
    }
}

impl TableConfig {
    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&ColumnConfig> {
        self.columns.iter().find(|c| c.name == name)
    }

    fn check_index(&self, index: &IndexConfig) -> Result<()> {
        if index.columns.is_empty() {
            return Err(ChemError::config(format!(
                "Index {:?} declares no columns",
                index.name
            )));
        }
        let mut cartridges = Vec::new();
        for name in &index.columns {
            let column = self.column(name).ok_or_else(|| {
                ChemError::config(format!(
                    "Index {:?} references unknown column {:?} in table {:?}",
                    index.name, name, self.name
                ))
            })?;
            cartridges.push(column.cartridge);
        }
        if cartridges.iter().any(|c| *c != cartridges[0]) {
            return Err(ChemError::config(format!(
                "Index {:?} mixes cartridges",
                index.name
            )));
        }
        if cartridges[0] == Cartridge::Bingo && index.columns.len() > 1 {
            return Err(ChemError::config(format!(
                "Index {:?}: bingo indexes cover exactly one column",
                index.name
            )));
        }
        Ok(())
    }
}

impl ColumnConfig {
    fn check_combination(&self, table: &str) -> Result<()> {
        let supported = match self.cartridge {
            Cartridge::Bingo => matches!(
                self.kind,
                ChemKind::Mol | ChemKind::BinaryMol | ChemKind::Reaction | ChemKind::BinaryReaction
            ),
            Cartridge::Rdkit => matches!(
                self.kind,
                ChemKind::Mol
                    | ChemKind::Reaction
                    | ChemKind::BitFingerprint
                    | ChemKind::SparseFingerprint
            ),
        };
        if !supported {
            return Err(ChemError::config(format!(
                "Column {:?} in table {:?}: {:?} is not supported by the {} cartridge",
                self.name, table, self.kind, self.cartridge
            )));
        }
        if self.preserve_position
            && !matches!(self.kind, ChemKind::BinaryMol | ChemKind::BinaryReaction)
        {
            return Err(ChemError::config(format!(
                "Column {:?} in table {:?}: preserve_position applies only to binary storage",
                self.name, table
            )));
        }
        Ok(())
    }

    /// Build the type marker this declaration describes.
    pub fn to_chem_type(&self) -> Result<ChemType> {
        let format = self.return_format.clone();
        let marker = match (self.cartridge, self.kind) {
            (Cartridge::Bingo, ChemKind::Mol) => ChemType::from(BingoMol),
            (Cartridge::Bingo, ChemKind::BinaryMol) => ChemType::from(BingoBinaryMol::new(
                self.preserve_position,
                format.unwrap_or_else(|| "smiles".to_string()),
            )),
            (Cartridge::Bingo, ChemKind::Reaction) => ChemType::from(BingoReaction),
            (Cartridge::Bingo, ChemKind::BinaryReaction) => {
                ChemType::from(BingoBinaryReaction::new(
                    self.preserve_position,
                    format.unwrap_or_else(|| "smiles".to_string()),
                ))
            }
            (Cartridge::Rdkit, ChemKind::Mol) => ChemType::from(RdkitMol::new(
                format.unwrap_or_else(|| "smiles".to_string()),
            )),
            (Cartridge::Rdkit, ChemKind::Reaction) => ChemType::from(RdkitReaction::new(
                format.unwrap_or_else(|| "smiles".to_string()),
            )),
            (Cartridge::Rdkit, ChemKind::BitFingerprint) => {
                ChemType::from(RdkitBitFingerprint)
            }
            (Cartridge::Rdkit, ChemKind::SparseFingerprint) => {
                ChemType::from(RdkitSparseFingerprint)
            }
            (cartridge, kind) => {
                return Err(ChemError::config(format!(
                    "Column {:?}: {:?} is not supported by the {} cartridge",
                    self.name, kind, cartridge
                )))
            }
        };
        Ok(marker)
    }

    /// Build a table-qualified [`ChemColumn`] from this declaration.
    pub fn to_column(&self, table: &str) -> Result<ChemColumn> {
        ChemColumn::with_table(table, &self.name, self.to_chem_type()?)
    }
}
