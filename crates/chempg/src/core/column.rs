//! Chemistry-aware column references.
//!
//! A [`ChemColumn`] pairs a (validated, quoted) column reference with the
//! type marker that tells the layer how values are stored and decoded. The
//! marker set is closed: every column kind and its operation family is known
//! at compile time, so there is no dynamic dispatch or attribute forwarding
//! anywhere in the crate.

use std::fmt;

use crate::bingo::types::{BingoBinaryMol, BingoBinaryReaction, BingoMol, BingoReaction};
use crate::core::expr::SqlExpr;
use crate::core::identifier;
use crate::error::Result;
use crate::rdkit::types::{
    RdkitBitFingerprint, RdkitMol, RdkitReaction, RdkitSparseFingerprint,
};

/// The closed set of column type markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChemType {
    BingoMol(BingoMol),
    BingoBinaryMol(BingoBinaryMol),
    BingoReaction(BingoReaction),
    BingoBinaryReaction(BingoBinaryReaction),
    RdkitMol(RdkitMol),
    RdkitBitFingerprint(RdkitBitFingerprint),
    RdkitSparseFingerprint(RdkitSparseFingerprint),
    RdkitReaction(RdkitReaction),
}

impl ChemType {
    /// The PostgreSQL column type this marker is stored as.
    pub fn col_spec(&self) -> &'static str {
        match self {
            ChemType::BingoMol(t) => t.col_spec(),
            ChemType::BingoBinaryMol(t) => t.col_spec(),
            ChemType::BingoReaction(t) => t.col_spec(),
            ChemType::BingoBinaryReaction(t) => t.col_spec(),
            ChemType::RdkitMol(t) => t.col_spec(),
            ChemType::RdkitBitFingerprint(t) => t.col_spec(),
            ChemType::RdkitSparseFingerprint(t) => t.col_spec(),
            ChemType::RdkitReaction(t) => t.col_spec(),
        }
    }

    /// The flat discriminant, used by validators and index derivation.
    pub fn kind(&self) -> ColumnKind {
        match self {
            ChemType::BingoMol(_) => ColumnKind::BingoMol,
            ChemType::BingoBinaryMol(_) => ColumnKind::BingoBinaryMol,
            ChemType::BingoReaction(_) => ColumnKind::BingoReaction,
            ChemType::BingoBinaryReaction(_) => ColumnKind::BingoBinaryReaction,
            ChemType::RdkitMol(_) => ColumnKind::RdkitMol,
            ChemType::RdkitBitFingerprint(_) => ColumnKind::RdkitBitFingerprint,
            ChemType::RdkitSparseFingerprint(_) => ColumnKind::RdkitSparseFingerprint,
            ChemType::RdkitReaction(_) => ColumnKind::RdkitReaction,
        }
    }

    /// Wrap a value being bound into a query in the marker's encode call.
    pub fn bind_expression(&self, value: SqlExpr) -> SqlExpr {
        match self {
            ChemType::BingoBinaryMol(t) => t.bind_expression(value),
            ChemType::BingoBinaryReaction(t) => t.bind_expression(value),
            // Text and cartridge-native markers pass values through unchanged.
            _ => value,
        }
    }

    /// Wrap a column read in the marker's decode call.
    ///
    /// # Errors
    ///
    /// Returns `ChemError::Config` when a binary marker carries an
    /// unrecognized return format. The format is deliberately validated
    /// here, not at marker construction.
    pub fn column_expression(&self, col: SqlExpr) -> Result<SqlExpr> {
        match self {
            ChemType::BingoBinaryMol(t) => t.column_expression(col),
            ChemType::BingoBinaryReaction(t) => t.column_expression(col),
            ChemType::RdkitMol(t) => t.column_expression(col),
            ChemType::RdkitReaction(t) => t.column_expression(col),
            _ => Ok(col),
        }
    }
}

macro_rules! impl_from_marker {
    ($($marker:ident),* $(,)?) => {
        $(impl From<$marker> for ChemType {
            fn from(marker: $marker) -> Self {
                ChemType::$marker(marker)
            }
        })*
    };
}

impl_from_marker!(
    BingoMol,
    BingoBinaryMol,
    BingoReaction,
    BingoBinaryReaction,
    RdkitMol,
    RdkitBitFingerprint,
    RdkitSparseFingerprint,
    RdkitReaction,
);

/// Flat discriminant for the marker set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    BingoMol,
    BingoBinaryMol,
    BingoReaction,
    BingoBinaryReaction,
    RdkitMol,
    RdkitBitFingerprint,
    RdkitSparseFingerprint,
    RdkitReaction,
}

impl ColumnKind {
    /// True for the Bingo marker family.
    pub fn is_bingo(self) -> bool {
        matches!(
            self,
            ColumnKind::BingoMol
                | ColumnKind::BingoBinaryMol
                | ColumnKind::BingoReaction
                | ColumnKind::BingoBinaryReaction
        )
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnKind::BingoMol => "BingoMol",
            ColumnKind::BingoBinaryMol => "BingoBinaryMol",
            ColumnKind::BingoReaction => "BingoReaction",
            ColumnKind::BingoBinaryReaction => "BingoBinaryReaction",
            ColumnKind::RdkitMol => "RdkitMol",
            ColumnKind::RdkitBitFingerprint => "RdkitBitFingerprint",
            ColumnKind::RdkitSparseFingerprint => "RdkitSparseFingerprint",
            ColumnKind::RdkitReaction => "RdkitReaction",
        };
        f.write_str(name)
    }
}

/// A column reference carrying a chemistry type marker.
///
/// Identifiers are validated and quoted at construction, so rendering the
/// reference later is infallible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChemColumn {
    table: Option<String>,
    name: String,
    rendered: String,
    ty: ChemType,
}

impl ChemColumn {
    /// Create an unqualified column reference.
    pub fn new(name: impl Into<String>, ty: impl Into<ChemType>) -> Result<Self> {
        let name = name.into();
        let rendered = identifier::quote(&name)?;
        Ok(Self {
            table: None,
            name,
            rendered,
            ty: ty.into(),
        })
    }

    /// Create a table-qualified column reference.
    pub fn with_table(
        table: impl Into<String>,
        name: impl Into<String>,
        ty: impl Into<ChemType>,
    ) -> Result<Self> {
        let table = table.into();
        let name = name.into();
        let rendered = identifier::qualify(&table, &name)?;
        Ok(Self {
            table: Some(table),
            name,
            rendered,
            ty: ty.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    pub fn chem_type(&self) -> &ChemType {
        &self.ty
    }

    pub fn kind(&self) -> ColumnKind {
        self.ty.kind()
    }

    /// The quoted (and table-qualified, if applicable) SQL reference.
    pub fn expr(&self) -> SqlExpr {
        SqlExpr::raw(self.rendered.clone())
    }

    /// The expression to select this column through its decode format.
    pub fn read_expression(&self) -> Result<SqlExpr> {
        self.ty.column_expression(self.expr())
    }

    /// Wrap a literal value in this column's encode call, for INSERT/UPDATE
    /// statements assembled by hand.
    pub fn bind_literal(&self, value: &str) -> SqlExpr {
        let literal = SqlExpr::raw(crate::core::expr::quote_literal(value));
        self.ty.bind_expression(literal)
    }
}
