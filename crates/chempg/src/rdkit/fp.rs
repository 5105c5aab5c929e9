//! Fingerprint generation and similarity expressions for the RDKit
//! cartridge.
//!
//! Similarity *filters* use the cartridge operators (`%` Tanimoto, `#`
//! Dice), which respect the session threshold GUCs and can use a GiST
//! index. Similarity *scores* use `tanimoto_sml`/`dice_sml` directly.

use crate::core::column::ChemColumn;
use crate::core::expr::SqlExpr;
use crate::core::functions::vendor_call;

/// Tanimoto similarity filter operator.
pub const TANIMOTO_OP: &str = "%";
/// Dice similarity filter operator.
pub const DICE_OP: &str = "#";

/// MACCS keys fingerprint: `maccs_fp(col)`.
pub fn maccs(col: &ChemColumn) -> SqlExpr {
    vendor_call(None, "maccs_fp", &[col.expr()])
}

/// Sparse Morgan fingerprint: `morgan_fp(col, radius)`.
pub fn morgan(col: &ChemColumn, radius: u32) -> SqlExpr {
    let radius = SqlExpr::raw(radius.to_string());
    vendor_call(None, "morgan_fp", &[col.expr(), radius])
}

/// Bit-vector Morgan fingerprint: `morganbv_fp(col, radius)`.
pub fn morgan_bv(col: &ChemColumn, radius: u32) -> SqlExpr {
    let radius = SqlExpr::raw(radius.to_string());
    vendor_call(None, "morganbv_fp", &[col.expr(), radius])
}

/// Topological torsion fingerprint: `torsion_fp(col)`.
pub fn torsion(col: &ChemColumn) -> SqlExpr {
    vendor_call(None, "torsion_fp", &[col.expr()])
}

/// Tanimoto threshold filter: `col % other`.
pub fn tanimoto_similar(col: &ChemColumn, other: SqlExpr) -> SqlExpr {
    SqlExpr::binary(col.expr(), TANIMOTO_OP, other)
}

/// Dice threshold filter: `col # other`.
pub fn dice_similar(col: &ChemColumn, other: SqlExpr) -> SqlExpr {
    SqlExpr::binary(col.expr(), DICE_OP, other)
}

/// Tanimoto similarity score: `tanimoto_sml(a, b)`.
pub fn tanimoto(a: SqlExpr, b: SqlExpr) -> SqlExpr {
    vendor_call(None, "tanimoto_sml", &[a, b])
}

/// Dice similarity score: `dice_sml(a, b)`.
pub fn dice(a: SqlExpr, b: SqlExpr) -> SqlExpr {
    vendor_call(None, "dice_sml", &[a, b])
}
