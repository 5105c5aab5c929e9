//! RDKit index declarations.
//!
//! The RDKit cartridge ships GiST operator classes as the defaults for its
//! types, so declarations fix the method (`gist`) and list columns bare.
//! Multiple columns are allowed (e.g. a `mol` and a `bfp` in one index).

use tracing::debug;

use crate::core::column::{ChemColumn, ColumnKind};
use crate::core::identifier::quote;
use crate::error::{ChemError, Result};

/// Index method used for all RDKit cartridge types.
pub const RDKIT_INDEX_METHOD: &str = "gist";

/// A GiST index declaration over RDKit-typed columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RdkitIndex {
    name: String,
    table: String,
    columns: Vec<String>,
    ddl: String,
}

impl RdkitIndex {
    /// Declare an index by name over one or more columns.
    ///
    /// # Errors
    ///
    /// `ChemError::Config` for invalid identifiers or an empty column list.
    pub fn new(
        name: impl Into<String>,
        table: impl Into<String>,
        columns: &[&str],
    ) -> Result<Self> {
        let name = name.into();
        let table = table.into();
        if columns.is_empty() {
            return Err(ChemError::config(format!(
                "Index {:?} declares no columns",
                name
            )));
        }
        // Identifiers are validated and the DDL rendered up front, so
        // to_sql cannot fail later.
        let quoted = columns
            .iter()
            .map(|c| quote(c))
            .collect::<Result<Vec<_>>>()?;
        let ddl = format!(
            "CREATE INDEX {} ON {} USING {} ({})",
            quote(&name)?,
            quote(&table)?,
            RDKIT_INDEX_METHOD,
            quoted.join(", "),
        );
        Ok(Self {
            name,
            table,
            columns: columns.iter().map(|c| c.to_string()).collect(),
            ddl,
        })
    }

    /// Declare an index from typed columns, checking each carries an RDKit
    /// marker. All columns must be qualified with the same table.
    ///
    /// # Errors
    ///
    /// `ChemError::ColumnType` for non-RDKit markers, `ChemError::Config`
    /// for unqualified or mixed-table columns.
    pub fn for_columns(name: impl Into<String>, columns: &[&ChemColumn]) -> Result<Self> {
        let name = name.into();
        let mut table: Option<&str> = None;
        let mut names = Vec::with_capacity(columns.len());

        for col in columns {
            match col.kind() {
                ColumnKind::RdkitMol
                | ColumnKind::RdkitBitFingerprint
                | ColumnKind::RdkitSparseFingerprint
                | ColumnKind::RdkitReaction => {}
                other => {
                    return Err(ChemError::column_type(
                        "RdkitMol, RdkitBitFingerprint, RdkitSparseFingerprint or RdkitReaction",
                        other.to_string(),
                    ))
                }
            }
            let col_table = col.table().ok_or_else(|| {
                ChemError::config(format!(
                    "Index declaration requires table-qualified columns, got {:?}",
                    col.name()
                ))
            })?;
            match table {
                None => table = Some(col_table),
                Some(t) if t == col_table => {}
                Some(t) => {
                    return Err(ChemError::config(format!(
                        "Index {:?} mixes columns from tables {:?} and {:?}",
                        name, t, col_table
                    )))
                }
            }
            names.push(col.name());
        }

        let table = table
            .ok_or_else(|| ChemError::config(format!("Index {:?} declares no columns", name)))?;
        Self::new(name, table, &names)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Always [`RDKIT_INDEX_METHOD`].
    pub fn method(&self) -> &'static str {
        RDKIT_INDEX_METHOD
    }

    /// The `CREATE INDEX` statement.
    pub fn to_sql(&self) -> String {
        debug!(index = %self.name, table = %self.table, "rendered rdkit index DDL");
        self.ddl.clone()
    }
}
