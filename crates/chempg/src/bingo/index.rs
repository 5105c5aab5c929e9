//! Bingo index declarations.
//!
//! Bingo installs a single index method, `bingo_idx`, with one operator
//! class per storage representation. A declaration fixes the method and
//! operator class at construction; callers only choose the index name and
//! the column.

use tracing::debug;

use crate::core::column::{ChemColumn, ColumnKind};
use crate::core::identifier::quote;
use crate::error::{ChemError, Result};

/// Index method registered by the Bingo cartridge.
pub const BINGO_INDEX_METHOD: &str = "bingo_idx";

/// Operator class for text molecule columns.
pub const MOLECULE_OPS: &str = "bingo.molecule";
/// Operator class for binary molecule columns.
pub const BINARY_MOLECULE_OPS: &str = "bingo.bmolecule";
/// Operator class for text reaction columns.
pub const REACTION_OPS: &str = "bingo.reaction";
/// Operator class for binary reaction columns.
pub const BINARY_REACTION_OPS: &str = "bingo.breaction";

/// A `bingo_idx` index declaration for one chemistry column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BingoIndex {
    name: String,
    table: String,
    column: String,
    operator_class: &'static str,
    ddl: String,
}

impl BingoIndex {
    fn build(
        name: impl Into<String>,
        table: impl Into<String>,
        column: impl Into<String>,
        operator_class: &'static str,
    ) -> Result<Self> {
        let name = name.into();
        let table = table.into();
        let column = column.into();
        // Identifiers are validated and the DDL rendered at declaration
        // time, so to_sql cannot fail later.
        let ddl = format!(
            "CREATE INDEX {} ON {} USING {} ({} {})",
            quote(&name)?,
            quote(&table)?,
            BINGO_INDEX_METHOD,
            quote(&column)?,
            operator_class,
        );
        Ok(Self {
            name,
            table,
            column,
            operator_class,
            ddl,
        })
    }

    /// Index over a text molecule column (`bingo.molecule`).
    pub fn molecule(
        name: impl Into<String>,
        table: impl Into<String>,
        column: impl Into<String>,
    ) -> Result<Self> {
        Self::build(name, table, column, MOLECULE_OPS)
    }

    /// Index over a binary molecule column (`bingo.bmolecule`).
    pub fn binary_molecule(
        name: impl Into<String>,
        table: impl Into<String>,
        column: impl Into<String>,
    ) -> Result<Self> {
        Self::build(name, table, column, BINARY_MOLECULE_OPS)
    }

    /// Index over a text reaction column (`bingo.reaction`).
    pub fn reaction(
        name: impl Into<String>,
        table: impl Into<String>,
        column: impl Into<String>,
    ) -> Result<Self> {
        Self::build(name, table, column, REACTION_OPS)
    }

    /// Index over a binary reaction column (`bingo.breaction`).
    pub fn binary_reaction(
        name: impl Into<String>,
        table: impl Into<String>,
        column: impl Into<String>,
    ) -> Result<Self> {
        Self::build(name, table, column, BINARY_REACTION_OPS)
    }

    /// Derive the declaration from a column's type marker.
    ///
    /// The column must be table-qualified and carry a Bingo marker.
    ///
    /// # Errors
    ///
    /// `ChemError::Config` for an unqualified column; `ChemError::ColumnType`
    /// for RDKit-typed columns.
    pub fn for_column(name: impl Into<String>, column: &ChemColumn) -> Result<Self> {
        let table = column.table().ok_or_else(|| {
            ChemError::config(format!(
                "Index declaration requires a table-qualified column, got {:?}",
                column.name()
            ))
        })?;

        let operator_class = match column.kind() {
            ColumnKind::BingoMol => MOLECULE_OPS,
            ColumnKind::BingoBinaryMol => BINARY_MOLECULE_OPS,
            ColumnKind::BingoReaction => REACTION_OPS,
            ColumnKind::BingoBinaryReaction => BINARY_REACTION_OPS,
            other => {
                return Err(ChemError::column_type(
                    "BingoMol, BingoBinaryMol, BingoReaction or BingoBinaryReaction",
                    other.to_string(),
                ))
            }
        };

        Self::build(name, table, column.name(), operator_class)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    /// Always [`BINGO_INDEX_METHOD`].
    pub fn method(&self) -> &'static str {
        BINGO_INDEX_METHOD
    }

    /// The operator class fixed by the constructor used.
    pub fn operator_class(&self) -> &'static str {
        self.operator_class
    }

    /// The `CREATE INDEX` statement.
    pub fn to_sql(&self) -> String {
        debug!(index = %self.name, table = %self.table, "rendered bingo index DDL");
        self.ddl.clone()
    }
}
