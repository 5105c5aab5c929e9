//! Molecule search and conversion expressions for the Bingo cartridge.
//!
//! The search family binds a column against a literal tuple cast to one of
//! Bingo's composite query types:
//!
//! ```sql
//! structure @ ('c1ccccc1', '')::bingo.sub
//! structure % ('CCO', 0.7, 1.0, 'Tanimoto')::bingo.sim
//! ```
//!
//! Query strings and option strings are opaque to this layer. Option strings
//! are comma-separated flags interpreted by the cartridge (`"TAU"`,
//! `"RES"`, ...); nothing here parses or validates them.

use crate::bingo::types::BINGO_SCHEMA;
use crate::core::column::ChemColumn;
use crate::core::expr::{format_float, quote_literal, SqlExpr};
use crate::core::functions::vendor_call;

/// Composite cast for substructure queries.
pub const SUB_CAST: &str = "bingo.sub";
/// Composite cast for SMARTS queries.
pub const SMARTS_CAST: &str = "bingo.smarts";
/// Composite cast for exact-match queries.
pub const EXACT_CAST: &str = "bingo.exact";
/// Composite cast for similarity queries.
pub const SIM_CAST: &str = "bingo.sim";
/// Composite cast for gross-formula queries.
pub const GROSS_CAST: &str = "bingo.gross";

/// Operator used by the comparison query kinds.
pub const MATCH_OP: &str = "@";
/// Operator used by similarity queries.
pub const SIM_OP: &str = "%";

/// Similarity search bounds and metric.
///
/// Bounds are conventionally in `[0.0, 1.0]` but are passed through
/// unchecked; the cartridge rejects (or tolerates) out-of-range values.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityOptions {
    pub bottom: f64,
    pub top: f64,
    pub metric: String,
}

impl Default for SimilarityOptions {
    fn default() -> Self {
        Self {
            bottom: 0.0,
            top: 1.0,
            metric: "Tanimoto".to_string(),
        }
    }
}

/// Which weight `bingo.getweight` computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightKind {
    MolecularWeight,
    MostAbundantMass,
    Monoisotopic,
}

impl WeightKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightKind::MolecularWeight => "molecular-weight",
            WeightKind::MostAbundantMass => "most-abundant-mass",
            WeightKind::Monoisotopic => "monoisotopic",
        }
    }
}

fn match_tuple(col: &ChemColumn, op: &str, tuple: String, cast: &str) -> SqlExpr {
    SqlExpr::binary(col.expr(), op, SqlExpr::raw(format!("({})::{}", tuple, cast)))
}

/// Substructure search: `col @ ('query', 'parameters')::bingo.sub`.
pub fn has_substructure(col: &ChemColumn, query: &str, parameters: &str) -> SqlExpr {
    let tuple = format!("{}, {}", quote_literal(query), quote_literal(parameters));
    match_tuple(col, MATCH_OP, tuple, SUB_CAST)
}

/// SMARTS pattern match: `col @ ('query', 'parameters')::bingo.smarts`.
pub fn matches_smarts(col: &ChemColumn, query: &str, parameters: &str) -> SqlExpr {
    let tuple = format!("{}, {}", quote_literal(query), quote_literal(parameters));
    match_tuple(col, MATCH_OP, tuple, SMARTS_CAST)
}

/// Exact structure match: `col @ ('query', 'parameters')::bingo.exact`.
pub fn equals(col: &ChemColumn, query: &str, parameters: &str) -> SqlExpr {
    let tuple = format!("{}, {}", quote_literal(query), quote_literal(parameters));
    match_tuple(col, MATCH_OP, tuple, EXACT_CAST)
}

/// Similarity search:
/// `col % ('query', bottom, top, 'Metric')::bingo.sim`.
///
/// Use `SimilarityOptions::default()` for the conventional
/// `0.0`/`1.0`/`Tanimoto` search window.
pub fn similarity(col: &ChemColumn, query: &str, options: &SimilarityOptions) -> SqlExpr {
    let tuple = format!(
        "{}, {}, {}, {}",
        quote_literal(query),
        format_float(options.bottom),
        format_float(options.top),
        quote_literal(&options.metric)
    );
    match_tuple(col, SIM_OP, tuple, SIM_CAST)
}

/// Gross formula match: `col @ ('C6 H6')::bingo.gross`.
pub fn has_gross_formula(col: &ChemColumn, formula: &str) -> SqlExpr {
    match_tuple(col, MATCH_OP, quote_literal(formula), GROSS_CAST)
}

/// Canonical SMILES: `bingo.cansmiles(col)`.
pub fn to_canonical(col: &ChemColumn) -> SqlExpr {
    vendor_call(Some(BINGO_SCHEMA), "cansmiles", &[col.expr()])
}

/// SMILES rendering of any stored form: `bingo.smiles(col)`.
pub fn to_smiles(col: &ChemColumn) -> SqlExpr {
    vendor_call(Some(BINGO_SCHEMA), "smiles", &[col.expr()])
}

/// Molfile rendering with 2D coordinates: `bingo.molfile(col)`.
pub fn to_molfile(col: &ChemColumn) -> SqlExpr {
    vendor_call(Some(BINGO_SCHEMA), "molfile", &[col.expr()])
}

/// CML rendering: `bingo.cml(col)`.
pub fn to_cml(col: &ChemColumn) -> SqlExpr {
    vendor_call(Some(BINGO_SCHEMA), "cml", &[col.expr()])
}

/// InChI rendering: `bingo.inchi(col, options)`.
pub fn to_inchi(col: &ChemColumn, options: &str) -> SqlExpr {
    let opts = SqlExpr::raw(quote_literal(options));
    vendor_call(Some(BINGO_SCHEMA), "inchi", &[col.expr(), opts])
}

/// InChIKey derived from an InChI string: `bingo.inchikey(inchi)`.
pub fn inchikey(inchi: SqlExpr) -> SqlExpr {
    vendor_call(Some(BINGO_SCHEMA), "inchikey", &[inchi])
}

/// Compact binary form: `bingo.compactmolecule(col, preserve_position)`.
pub fn to_binary(col: &ChemColumn, preserve_position: bool) -> SqlExpr {
    let flag = SqlExpr::raw(if preserve_position { "true" } else { "false" });
    vendor_call(Some(BINGO_SCHEMA), "compactmolecule", &[col.expr(), flag])
}

/// Molecular weight: `bingo.getweight(col, 'molecular-weight')`.
pub fn get_weight(col: &ChemColumn, kind: WeightKind) -> SqlExpr {
    let kind = SqlExpr::raw(quote_literal(kind.as_str()));
    vendor_call(Some(BINGO_SCHEMA), "getweight", &[col.expr(), kind])
}

/// Mass of the molecule: `bingo.getmass(col)`.
pub fn get_mass(col: &ChemColumn) -> SqlExpr {
    vendor_call(Some(BINGO_SCHEMA), "getmass", &[col.expr()])
}

/// Gross formula string: `bingo.gross(col)`.
pub fn gross_formula(col: &ChemColumn) -> SqlExpr {
    vendor_call(Some(BINGO_SCHEMA), "gross", &[col.expr()])
}

/// Validity check. Returns NULL for valid molecules and an error message
/// for invalid ones: `bingo.checkmolecule(col)`.
pub fn check_molecule(col: &ChemColumn) -> SqlExpr {
    vendor_call(Some(BINGO_SCHEMA), "checkmolecule", &[col.expr()])
}

/// Fingerprint build: `bingo.fingerprint(col, 'options')`.
///
/// Options select the fingerprint parts, e.g. `"sim"` or `"sub"`.
pub fn fingerprint(col: &ChemColumn, options: &str) -> SqlExpr {
    let opts = SqlExpr::raw(quote_literal(options));
    vendor_call(Some(BINGO_SCHEMA), "fingerprint", &[col.expr(), opts])
}

/// Standardized structure: `bingo.standardize(col, 'options')`.
pub fn standardize(col: &ChemColumn, options: &str) -> SqlExpr {
    let opts = SqlExpr::raw(quote_literal(options));
    vendor_call(Some(BINGO_SCHEMA), "standardize", &[col.expr(), opts])
}
