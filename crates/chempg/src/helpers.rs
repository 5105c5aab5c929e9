//! Typed column accessors.
//!
//! Each helper checks that a column carries a marker from the expected
//! family and hands it back unchanged, so call sites can assert the
//! operation family they are about to use. The error names the accepted
//! set and the marker actually found.

use crate::core::column::{ChemColumn, ColumnKind};
use crate::error::{ChemError, Result};

fn check<'a>(
    col: &'a ChemColumn,
    accepted: &[ColumnKind],
    expected: &str,
) -> Result<&'a ChemColumn> {
    if accepted.contains(&col.kind()) {
        Ok(col)
    } else {
        Err(ChemError::column_type(expected, col.kind().to_string()))
    }
}

/// Assert a column holds a Bingo molecule (text or binary storage).
pub fn bingo_mol_col(col: &ChemColumn) -> Result<&ChemColumn> {
    check(
        col,
        &[ColumnKind::BingoMol, ColumnKind::BingoBinaryMol],
        "BingoMol or BingoBinaryMol",
    )
}

/// Assert a column holds a Bingo reaction (text or binary storage).
pub fn bingo_rxn_col(col: &ChemColumn) -> Result<&ChemColumn> {
    check(
        col,
        &[ColumnKind::BingoReaction, ColumnKind::BingoBinaryReaction],
        "BingoReaction or BingoBinaryReaction",
    )
}

/// Assert a column holds an RDKit `mol`.
pub fn rdkit_mol_col(col: &ChemColumn) -> Result<&ChemColumn> {
    check(col, &[ColumnKind::RdkitMol], "RdkitMol")
}

/// Assert a column holds an RDKit fingerprint (`bfp` or `sfp`).
pub fn rdkit_fp_col(col: &ChemColumn) -> Result<&ChemColumn> {
    check(
        col,
        &[
            ColumnKind::RdkitBitFingerprint,
            ColumnKind::RdkitSparseFingerprint,
        ],
        "RdkitBitFingerprint or RdkitSparseFingerprint",
    )
}

/// Assert a column holds an RDKit `reaction`.
pub fn rdkit_rxn_col(col: &ChemColumn) -> Result<&ChemColumn> {
    check(col, &[ColumnKind::RdkitReaction], "RdkitReaction")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bingo::types::{BingoBinaryMol, BingoMol, BingoReaction};
    use crate::rdkit::types::{RdkitBitFingerprint, RdkitMol, RdkitSparseFingerprint};

    #[test]
    fn test_accepts_matching_marker() {
        let col = ChemColumn::new("m", BingoMol).unwrap();
        let validated = bingo_mol_col(&col).unwrap();
        assert_eq!(validated.name(), "m");
    }

    #[test]
    fn test_accepts_either_storage() {
        let text = ChemColumn::new("a", BingoMol).unwrap();
        let binary = ChemColumn::new("b", BingoBinaryMol::default()).unwrap();
        assert!(bingo_mol_col(&text).is_ok());
        assert!(bingo_mol_col(&binary).is_ok());
    }

    #[test]
    fn test_rejects_wrong_family() {
        let col = ChemColumn::new("m", RdkitMol::default()).unwrap();
        let err = bingo_mol_col(&col).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("BingoMol or BingoBinaryMol"));
        assert!(msg.contains("RdkitMol"));
    }

    #[test]
    fn test_rejects_cross_kind_within_cartridge() {
        let col = ChemColumn::new("rxn", BingoReaction).unwrap();
        assert!(bingo_mol_col(&col).is_err());
        assert!(bingo_rxn_col(&col).is_ok());
    }

    #[test]
    fn test_fingerprint_accepts_both_widths() {
        let bfp = ChemColumn::new("fp", RdkitBitFingerprint).unwrap();
        let sfp = ChemColumn::new("fp", RdkitSparseFingerprint).unwrap();
        assert!(rdkit_fp_col(&bfp).is_ok());
        assert!(rdkit_fp_col(&sfp).is_ok());
        assert!(rdkit_mol_col(&bfp).is_err());
    }
}
