//! Column type markers for the Bingo cartridge.
//!
//! Text markers store structures as `varchar` (SMILES, Molfile, reaction
//! SMILES, Rxnfile) and pass values through untouched. Binary markers store
//! Bingo's compact form as `bytea`: writes are wrapped in
//! `bingo.compactmolecule`/`bingo.compactreaction` and reads are wrapped in
//! the conversion function selected by the marker's return format.
//!
//! The return format is kept as a raw string (it usually arrives from
//! configuration) and validated only when a decode expression is built.
//! Constructing a marker never touches the database.

use crate::core::expr::SqlExpr;
use crate::core::functions::vendor_call;
use crate::error::{ChemError, Result};

/// Schema all Bingo functions and operator classes live in.
pub const BINGO_SCHEMA: &str = "bingo";

/// Decode formats recognized by the binary molecule marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BingoMolFormat {
    Smiles,
    Molfile,
    Cml,
    Bytes,
}

impl BingoMolFormat {
    /// The accepted format spellings, in error-message order.
    pub const ALLOWED: &'static [&'static str] = &["smiles", "molfile", "cml", "bytes"];

    /// Parse a format string.
    ///
    /// # Errors
    ///
    /// `ChemError::Config` naming the allowed values.
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "smiles" => Ok(BingoMolFormat::Smiles),
            "molfile" => Ok(BingoMolFormat::Molfile),
            "cml" => Ok(BingoMolFormat::Cml),
            "bytes" => Ok(BingoMolFormat::Bytes),
            other => Err(ChemError::config(format!(
                "Invalid return format: {:?}. Available options are {}.",
                other,
                Self::ALLOWED.join(", ")
            ))),
        }
    }
}

/// Decode formats recognized by the binary reaction marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BingoRxnFormat {
    Smiles,
    Rxnfile,
    Cml,
    Bytes,
}

impl BingoRxnFormat {
    pub const ALLOWED: &'static [&'static str] = &["smiles", "rxnfile", "cml", "bytes"];

    /// Parse a format string.
    ///
    /// # Errors
    ///
    /// `ChemError::Config` naming the allowed values.
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "smiles" => Ok(BingoRxnFormat::Smiles),
            "rxnfile" => Ok(BingoRxnFormat::Rxnfile),
            "cml" => Ok(BingoRxnFormat::Cml),
            "bytes" => Ok(BingoRxnFormat::Bytes),
            other => Err(ChemError::config(format!(
                "Invalid return format: {:?}. Available options are {}.",
                other,
                Self::ALLOWED.join(", ")
            ))),
        }
    }
}

/// Molecule stored as text (`varchar`): SMILES or Molfile.
///
/// Values pass through unchanged in both directions; Bingo's search
/// operators accept the textual forms directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BingoMol;

impl BingoMol {
    pub fn col_spec(&self) -> &'static str {
        "varchar"
    }
}

/// Molecule stored in Bingo's compact binary form (`bytea`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BingoBinaryMol {
    preserve_position: bool,
    return_format: String,
}

impl Default for BingoBinaryMol {
    fn default() -> Self {
        Self {
            preserve_position: false,
            return_format: "smiles".to_string(),
        }
    }
}

impl BingoBinaryMol {
    /// Create a binary molecule marker.
    ///
    /// `preserve_position` keeps atom coordinates in the compact form;
    /// `return_format` selects the decode target (`smiles`, `molfile`,
    /// `cml` or `bytes`). The format string is not checked here — an
    /// unrecognized value fails when the read expression is built.
    pub fn new(preserve_position: bool, return_format: impl Into<String>) -> Self {
        Self {
            preserve_position,
            return_format: return_format.into(),
        }
    }

    pub fn col_spec(&self) -> &'static str {
        "bytea"
    }

    pub fn preserve_position(&self) -> bool {
        self.preserve_position
    }

    pub fn return_format(&self) -> &str {
        &self.return_format
    }

    /// Encode path: wrap a bound value in `bingo.compactmolecule`.
    pub fn bind_expression(&self, value: SqlExpr) -> SqlExpr {
        let flag = SqlExpr::raw(if self.preserve_position { "true" } else { "false" });
        vendor_call(Some(BINGO_SCHEMA), "compactmolecule", &[value, flag])
    }

    /// Decode path: wrap a column read in the conversion for the selected
    /// return format.
    ///
    /// # Errors
    ///
    /// `ChemError::Config` for an unrecognized format string.
    pub fn column_expression(&self, col: SqlExpr) -> Result<SqlExpr> {
        let call = match BingoMolFormat::parse(&self.return_format)? {
            BingoMolFormat::Smiles => vendor_call(Some(BINGO_SCHEMA), "smiles", &[col]),
            BingoMolFormat::Molfile => vendor_call(Some(BINGO_SCHEMA), "molfile", &[col]),
            BingoMolFormat::Cml => vendor_call(Some(BINGO_SCHEMA), "cml", &[col]),
            BingoMolFormat::Bytes => col,
        };
        Ok(call)
    }
}

/// Reaction stored as text (`varchar`): reaction SMILES or Rxnfile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BingoReaction;

impl BingoReaction {
    pub fn col_spec(&self) -> &'static str {
        "varchar"
    }
}

/// Reaction stored in Bingo's compact binary form (`bytea`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BingoBinaryReaction {
    preserve_position: bool,
    return_format: String,
}

impl Default for BingoBinaryReaction {
    fn default() -> Self {
        Self {
            preserve_position: false,
            return_format: "smiles".to_string(),
        }
    }
}

impl BingoBinaryReaction {
    /// Create a binary reaction marker. Same deferred-validation contract
    /// as [`BingoBinaryMol::new`]; formats are `smiles`, `rxnfile`, `cml`
    /// or `bytes`.
    pub fn new(preserve_position: bool, return_format: impl Into<String>) -> Self {
        Self {
            preserve_position,
            return_format: return_format.into(),
        }
    }

    pub fn col_spec(&self) -> &'static str {
        "bytea"
    }

    pub fn preserve_position(&self) -> bool {
        self.preserve_position
    }

    pub fn return_format(&self) -> &str {
        &self.return_format
    }

    /// Encode path: wrap a bound value in `bingo.compactreaction`.
    pub fn bind_expression(&self, value: SqlExpr) -> SqlExpr {
        let flag = SqlExpr::raw(if self.preserve_position { "true" } else { "false" });
        vendor_call(Some(BINGO_SCHEMA), "compactreaction", &[value, flag])
    }

    /// Decode path for the selected return format.
    ///
    /// # Errors
    ///
    /// `ChemError::Config` for an unrecognized format string.
    pub fn column_expression(&self, col: SqlExpr) -> Result<SqlExpr> {
        let call = match BingoRxnFormat::parse(&self.return_format)? {
            BingoRxnFormat::Smiles => vendor_call(Some(BINGO_SCHEMA), "rsmiles", &[col]),
            BingoRxnFormat::Rxnfile => vendor_call(Some(BINGO_SCHEMA), "rxnfile", &[col]),
            BingoRxnFormat::Cml => vendor_call(Some(BINGO_SCHEMA), "rcml", &[col]),
            BingoRxnFormat::Bytes => col,
        };
        Ok(call)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_col_specs() {
        assert_eq!(BingoMol.col_spec(), "varchar");
        assert_eq!(BingoBinaryMol::default().col_spec(), "bytea");
        assert_eq!(BingoReaction.col_spec(), "varchar");
        assert_eq!(BingoBinaryReaction::default().col_spec(), "bytea");
    }

    #[test]
    fn test_binary_mol_bind_expression() {
        let marker = BingoBinaryMol::new(true, "smiles");
        let bound = marker.bind_expression(SqlExpr::raw("'CCO'"));
        assert_eq!(bound.as_str(), "bingo.compactmolecule('CCO', true)");

        let marker = BingoBinaryMol::default();
        let bound = marker.bind_expression(SqlExpr::raw("'CCO'"));
        assert_eq!(bound.as_str(), "bingo.compactmolecule('CCO', false)");
    }

    #[test]
    fn test_binary_mol_decode_formats() {
        let col = || SqlExpr::raw("\"structure\"");

        let smiles = BingoBinaryMol::new(false, "smiles");
        assert_eq!(
            smiles.column_expression(col()).unwrap().as_str(),
            "bingo.smiles(\"structure\")"
        );

        let molfile = BingoBinaryMol::new(false, "molfile");
        assert_eq!(
            molfile.column_expression(col()).unwrap().as_str(),
            "bingo.molfile(\"structure\")"
        );

        let cml = BingoBinaryMol::new(false, "cml");
        assert_eq!(
            cml.column_expression(col()).unwrap().as_str(),
            "bingo.cml(\"structure\")"
        );

        let bytes = BingoBinaryMol::new(false, "bytes");
        assert_eq!(bytes.column_expression(col()).unwrap().as_str(), "\"structure\"");
    }

    #[test]
    fn test_binary_mol_invalid_format_fails_at_build_not_construction() {
        // Construction accepts anything.
        let marker = BingoBinaryMol::new(false, "sdf");
        assert_eq!(marker.return_format(), "sdf");

        // Building the decode expression is where it fails.
        let err = marker
            .column_expression(SqlExpr::raw("\"structure\""))
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("sdf"));
        assert!(message.contains("smiles, molfile, cml, bytes"));
    }

    #[test]
    fn test_binary_reaction_bind_and_decode() {
        let marker = BingoBinaryReaction::new(true, "rxnfile");
        let bound = marker.bind_expression(SqlExpr::raw("'CCO>>CC=O'"));
        assert_eq!(bound.as_str(), "bingo.compactreaction('CCO>>CC=O', true)");

        let read = marker.column_expression(SqlExpr::raw("\"rxn\"")).unwrap();
        assert_eq!(read.as_str(), "bingo.rxnfile(\"rxn\")");
    }

    #[test]
    fn test_binary_reaction_invalid_format() {
        let marker = BingoBinaryReaction::new(false, "molfile");
        let err = marker.column_expression(SqlExpr::raw("\"rxn\"")).unwrap_err();
        assert!(err.to_string().contains("smiles, rxnfile, cml, bytes"));
    }
}
