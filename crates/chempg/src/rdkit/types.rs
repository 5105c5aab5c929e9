//! Column type markers for the RDKit cartridge.
//!
//! Unlike Bingo, the RDKit cartridge registers first-class PostgreSQL types
//! (`mol`, `bfp`, `sfp`, `reaction`) and installs its functions into the
//! search path, so col specs here are the cartridge-native type names and
//! function calls carry no schema qualifier.
//!
//! Decode formats are `smiles` (the server's text rendering of the native
//! type) and `bytes` (the `send` wire form). A rich in-process molecule
//! object is deliberately not offered; asking for one is a configuration
//! error, reported when the read expression is built.

use crate::core::expr::SqlExpr;
use crate::core::functions::vendor_call;
use crate::error::{ChemError, Result};

/// Decode formats recognized by the RDKit markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RdkitFormat {
    Smiles,
    Bytes,
}

impl RdkitFormat {
    pub const ALLOWED: &'static [&'static str] = &["smiles", "bytes"];

    /// Parse a format string.
    ///
    /// # Errors
    ///
    /// `ChemError::Config` naming the allowed values.
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "smiles" => Ok(RdkitFormat::Smiles),
            "bytes" => Ok(RdkitFormat::Bytes),
            other => Err(ChemError::config(format!(
                "Invalid return format: {:?}. Available options are {}.",
                other,
                Self::ALLOWED.join(", ")
            ))),
        }
    }
}

/// Molecule stored as the cartridge-native `mol` type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RdkitMol {
    return_format: String,
}

impl Default for RdkitMol {
    fn default() -> Self {
        Self {
            return_format: "smiles".to_string(),
        }
    }
}

impl RdkitMol {
    /// Create a `mol` marker with the given decode format (`smiles` or
    /// `bytes`). The string is validated when the read expression is built.
    pub fn new(return_format: impl Into<String>) -> Self {
        Self {
            return_format: return_format.into(),
        }
    }

    pub fn col_spec(&self) -> &'static str {
        "mol"
    }

    pub fn return_format(&self) -> &str {
        &self.return_format
    }

    /// Decode path: `smiles` reads the column as-is (the server renders
    /// `mol` as SMILES text), `bytes` wraps it in `mol_send`.
    ///
    /// # Errors
    ///
    /// `ChemError::Config` for an unrecognized format string.
    pub fn column_expression(&self, col: SqlExpr) -> Result<SqlExpr> {
        match RdkitFormat::parse(&self.return_format)? {
            RdkitFormat::Smiles => Ok(col),
            RdkitFormat::Bytes => Ok(vendor_call(None, "mol_send", &[col])),
        }
    }
}

/// Bit-vector fingerprint column (`bfp`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RdkitBitFingerprint;

impl RdkitBitFingerprint {
    pub fn col_spec(&self) -> &'static str {
        "bfp"
    }
}

/// Sparse count-vector fingerprint column (`sfp`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RdkitSparseFingerprint;

impl RdkitSparseFingerprint {
    pub fn col_spec(&self) -> &'static str {
        "sfp"
    }
}

/// Reaction stored as the cartridge-native `reaction` type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RdkitReaction {
    return_format: String,
}

impl Default for RdkitReaction {
    fn default() -> Self {
        Self {
            return_format: "smiles".to_string(),
        }
    }
}

impl RdkitReaction {
    /// Create a `reaction` marker with the given decode format (`smiles`
    /// or `bytes`).
    pub fn new(return_format: impl Into<String>) -> Self {
        Self {
            return_format: return_format.into(),
        }
    }

    pub fn col_spec(&self) -> &'static str {
        "reaction"
    }

    pub fn return_format(&self) -> &str {
        &self.return_format
    }

    /// Decode path, mirroring [`RdkitMol::column_expression`].
    ///
    /// # Errors
    ///
    /// `ChemError::Config` for an unrecognized format string.
    pub fn column_expression(&self, col: SqlExpr) -> Result<SqlExpr> {
        match RdkitFormat::parse(&self.return_format)? {
            RdkitFormat::Smiles => Ok(col),
            RdkitFormat::Bytes => Ok(vendor_call(None, "reaction_send", &[col])),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_col_specs() {
        assert_eq!(RdkitMol::default().col_spec(), "mol");
        assert_eq!(RdkitBitFingerprint.col_spec(), "bfp");
        assert_eq!(RdkitSparseFingerprint.col_spec(), "sfp");
        assert_eq!(RdkitReaction::default().col_spec(), "reaction");
    }

    #[test]
    fn test_mol_smiles_passthrough() {
        let marker = RdkitMol::default();
        let read = marker.column_expression(SqlExpr::raw("\"m\"")).unwrap();
        assert_eq!(read.as_str(), "\"m\"");
    }

    #[test]
    fn test_mol_bytes_wraps_in_send() {
        let marker = RdkitMol::new("bytes");
        let read = marker.column_expression(SqlExpr::raw("\"m\"")).unwrap();
        assert_eq!(read.as_str(), "mol_send(\"m\")");
    }

    #[test]
    fn test_mol_rich_object_format_rejected_at_build() {
        // "mol" was the rich in-process object format upstream; it is not
        // part of this layer's contract.
        let marker = RdkitMol::new("mol");
        assert_eq!(marker.return_format(), "mol");
        let err = marker.column_expression(SqlExpr::raw("\"m\"")).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("\"mol\""));
        assert!(message.contains("smiles, bytes"));
    }

    #[test]
    fn test_reaction_formats() {
        let smiles = RdkitReaction::default();
        assert_eq!(
            smiles.column_expression(SqlExpr::raw("\"r\"")).unwrap().as_str(),
            "\"r\""
        );
        let bytes = RdkitReaction::new("bytes");
        assert_eq!(
            bytes.column_expression(SqlExpr::raw("\"r\"")).unwrap().as_str(),
            "reaction_send(\"r\")"
        );
        assert!(RdkitReaction::new("rxnfile")
            .column_expression(SqlExpr::raw("\"r\""))
            .is_err());
    }
}
