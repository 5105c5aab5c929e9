//! Molecule search, conversion and descriptor expressions for the RDKit
//! cartridge.
//!
//! Search uses the cartridge's native operators on `mol` columns:
//! `@>` (has substructure), `<@` (is substructure), `@=` (exact match).
//! Query literals are passed as text and cast server-side by the operator's
//! implicit input conversion.

use crate::core::column::ChemColumn;
use crate::core::expr::{quote_literal, SqlExpr};
use crate::core::functions::vendor_call;

/// Substructure operator: left contains right.
pub const CONTAINS_OP: &str = "@>";
/// Substructure operator: left is contained in right.
pub const CONTAINED_OP: &str = "<@";
/// Exact-match operator.
pub const EQUALS_OP: &str = "@=";

/// Exact structure match: `col @= 'query'`.
pub fn equals(col: &ChemColumn, query: &str) -> SqlExpr {
    SqlExpr::binary(col.expr(), EQUALS_OP, SqlExpr::raw(quote_literal(query)))
}

/// Substructure search: `col @> 'query'`.
pub fn has_substructure(col: &ChemColumn, query: &str) -> SqlExpr {
    SqlExpr::binary(col.expr(), CONTAINS_OP, SqlExpr::raw(quote_literal(query)))
}

/// Inverse substructure search: `col <@ 'query'`.
pub fn is_substructure(col: &ChemColumn, query: &str) -> SqlExpr {
    SqlExpr::binary(col.expr(), CONTAINED_OP, SqlExpr::raw(quote_literal(query)))
}

/// Parse a SMILES literal into a `mol`: `mol_from_smiles('CCO'::cstring)`.
///
/// The cartridge's `mol_from_smiles` takes `cstring`, hence the cast.
pub fn from_smiles(smiles: &str) -> SqlExpr {
    let arg = SqlExpr::raw(format!("{}::cstring", quote_literal(smiles)));
    vendor_call(None, "mol_from_smiles", &[arg])
}

/// Rebuild a `mol` from its pickled form: `mol_from_pkl(col)`.
pub fn from_pkl(col: &ChemColumn) -> SqlExpr {
    vendor_call(None, "mol_from_pkl", &[col.expr()])
}

/// Wire binary form: `mol_send(col)`.
pub fn to_binary(col: &ChemColumn) -> SqlExpr {
    vendor_call(None, "mol_send", &[col.expr()])
}

/// RDKit pickle: `mol_to_pkl(col)`.
pub fn to_pkl(col: &ChemColumn) -> SqlExpr {
    vendor_call(None, "mol_to_pkl", &[col.expr()])
}

/// SMARTS rendering: `mol_to_smarts(col)`.
pub fn to_smarts(col: &ChemColumn) -> SqlExpr {
    vendor_call(None, "mol_to_smarts", &[col.expr()])
}

/// CXSMILES rendering: `mol_to_cxsmiles(col)`.
pub fn to_cxsmiles(col: &ChemColumn) -> SqlExpr {
    vendor_call(None, "mol_to_cxsmiles", &[col.expr()])
}

/// CommonChem JSON rendering: `mol_to_json(col)`.
pub fn to_json(col: &ChemColumn) -> SqlExpr {
    vendor_call(None, "mol_to_json", &[col.expr()])
}

/// Average molecular weight: `mol_amw(col)`.
pub fn amw(col: &ChemColumn) -> SqlExpr {
    vendor_call(None, "mol_amw", &[col.expr()])
}

/// Topological polar surface area: `mol_tpsa(col)`.
pub fn tpsa(col: &ChemColumn) -> SqlExpr {
    vendor_call(None, "mol_tpsa", &[col.expr()])
}

/// Wildman-Crippen logP: `mol_logp(col)`.
pub fn logp(col: &ChemColumn) -> SqlExpr {
    vendor_call(None, "mol_logp", &[col.expr()])
}

/// Heavy atom count: `mol_numatoms(col)`.
pub fn num_atoms(col: &ChemColumn) -> SqlExpr {
    vendor_call(None, "mol_numatoms", &[col.expr()])
}

/// Hydrogen-bond acceptor count: `mol_hba(col)`.
pub fn hba(col: &ChemColumn) -> SqlExpr {
    vendor_call(None, "mol_hba", &[col.expr()])
}

/// Hydrogen-bond donor count: `mol_hbd(col)`.
pub fn hbd(col: &ChemColumn) -> SqlExpr {
    vendor_call(None, "mol_hbd", &[col.expr()])
}

/// Molecular formula: `mol_formula(col)`.
pub fn formula(col: &ChemColumn) -> SqlExpr {
    vendor_call(None, "mol_formula", &[col.expr()])
}

/// Bemis-Murcko scaffold: `mol_murckoscaffold(col)`.
pub fn murcko_scaffold(col: &ChemColumn) -> SqlExpr {
    vendor_call(None, "mol_murckoscaffold", &[col.expr()])
}

/// SMILES validity probe: `is_valid_smiles('query')`.
pub fn is_valid_smiles(smiles: &str) -> SqlExpr {
    vendor_call(None, "is_valid_smiles", &[SqlExpr::raw(quote_literal(smiles))])
}

/// SMARTS validity probe: `is_valid_smarts('query')`.
pub fn is_valid_smarts(smarts: &str) -> SqlExpr {
    vendor_call(None, "is_valid_smarts", &[SqlExpr::raw(quote_literal(smarts))])
}
