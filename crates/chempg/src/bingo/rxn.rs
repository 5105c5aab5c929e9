//! Reaction search and conversion expressions for the Bingo cartridge.
//!
//! Mirrors the molecule family one-for-one with the reaction-specific
//! composite casts (`bingo.rsub`, `bingo.rsmarts`, `bingo.rexact`) and
//! conversion functions (`rsmiles`, `rxnfile`, `rcml`, `compactreaction`).

use crate::bingo::types::BINGO_SCHEMA;
use crate::core::column::ChemColumn;
use crate::core::expr::{quote_literal, SqlExpr};
use crate::core::functions::vendor_call;

use super::mol::MATCH_OP;

/// Composite cast for reaction substructure queries.
pub const RSUB_CAST: &str = "bingo.rsub";
/// Composite cast for reaction SMARTS queries.
pub const RSMARTS_CAST: &str = "bingo.rsmarts";
/// Composite cast for reaction exact-match queries.
pub const REXACT_CAST: &str = "bingo.rexact";

fn match_tuple(col: &ChemColumn, query: &str, parameters: &str, cast: &str) -> SqlExpr {
    let tuple = format!("{}, {}", quote_literal(query), quote_literal(parameters));
    SqlExpr::binary(
        col.expr(),
        MATCH_OP,
        SqlExpr::raw(format!("({})::{}", tuple, cast)),
    )
}

/// Reaction substructure search: `col @ ('query', 'parameters')::bingo.rsub`.
pub fn has_substructure(col: &ChemColumn, query: &str, parameters: &str) -> SqlExpr {
    match_tuple(col, query, parameters, RSUB_CAST)
}

/// Reaction SMARTS match: `col @ ('query', 'parameters')::bingo.rsmarts`.
pub fn matches_smarts(col: &ChemColumn, query: &str, parameters: &str) -> SqlExpr {
    match_tuple(col, query, parameters, RSMARTS_CAST)
}

/// Exact reaction match: `col @ ('query', 'parameters')::bingo.rexact`.
pub fn equals(col: &ChemColumn, query: &str, parameters: &str) -> SqlExpr {
    match_tuple(col, query, parameters, REXACT_CAST)
}

/// Reaction SMILES rendering: `bingo.rsmiles(col)`.
pub fn to_smiles(col: &ChemColumn) -> SqlExpr {
    vendor_call(Some(BINGO_SCHEMA), "rsmiles", &[col.expr()])
}

/// Rxnfile rendering: `bingo.rxnfile(col)`.
pub fn to_rxnfile(col: &ChemColumn) -> SqlExpr {
    vendor_call(Some(BINGO_SCHEMA), "rxnfile", &[col.expr()])
}

/// CML rendering: `bingo.rcml(col)`.
pub fn to_cml(col: &ChemColumn) -> SqlExpr {
    vendor_call(Some(BINGO_SCHEMA), "rcml", &[col.expr()])
}

/// Compact binary form: `bingo.compactreaction(col, preserve_position)`.
pub fn to_binary(col: &ChemColumn, preserve_position: bool) -> SqlExpr {
    let flag = SqlExpr::raw(if preserve_position { "true" } else { "false" });
    vendor_call(Some(BINGO_SCHEMA), "compactreaction", &[col.expr(), flag])
}

/// Validity check. NULL for valid reactions, an error message otherwise:
/// `bingo.checkreaction(col)`.
pub fn check_reaction(col: &ChemColumn) -> SqlExpr {
    vendor_call(Some(BINGO_SCHEMA), "checkreaction", &[col.expr()])
}

/// Atom-to-atom mapping: `bingo.aam(col, 'strategy')`.
///
/// Strategies are cartridge-defined (`"DISCARD"`, `"KEEP"`, `"ALTER"`,
/// `"CLEAR"`) and passed through verbatim.
pub fn automap(col: &ChemColumn, strategy: &str) -> SqlExpr {
    let strategy = SqlExpr::raw(quote_literal(strategy));
    vendor_call(Some(BINGO_SCHEMA), "aam", &[col.expr(), strategy])
}

/// Reaction fingerprint: `bingo.rfingerprint(col, 'options')`.
pub fn fingerprint(col: &ChemColumn, options: &str) -> SqlExpr {
    let opts = SqlExpr::raw(quote_literal(options));
    vendor_call(Some(BINGO_SCHEMA), "rfingerprint", &[col.expr(), opts])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bingo::types::BingoReaction;

    fn rxn() -> ChemColumn {
        ChemColumn::with_table("reactions", "rxn", BingoReaction).unwrap()
    }

    #[test]
    fn test_has_substructure() {
        let sql = has_substructure(&rxn(), "[OH]>>[O]", "");
        assert_eq!(
            sql.as_str(),
            "\"reactions\".\"rxn\" @ ('[OH]>>[O]', '')::bingo.rsub"
        );
    }

    #[test]
    fn test_matches_smarts() {
        let sql = matches_smarts(&rxn(), "C=C>>CC", "");
        assert!(sql.as_str().contains("bingo.rsmarts"));
        assert!(sql.as_str().contains("C=C>>CC"));
    }

    #[test]
    fn test_equals() {
        let sql = equals(&rxn(), "CCO>>CC=O", "AAM");
        assert!(sql.as_str().contains("bingo.rexact"));
        assert!(sql.as_str().contains("CCO>>CC=O"));
        assert!(sql.as_str().contains("AAM"));
    }

    #[test]
    fn test_conversions() {
        let col = rxn();
        assert_eq!(to_smiles(&col).as_str(), "bingo.rsmiles(\"reactions\".\"rxn\")");
        assert_eq!(to_rxnfile(&col).as_str(), "bingo.rxnfile(\"reactions\".\"rxn\")");
        assert_eq!(to_cml(&col).as_str(), "bingo.rcml(\"reactions\".\"rxn\")");
        assert_eq!(
            check_reaction(&col).as_str(),
            "bingo.checkreaction(\"reactions\".\"rxn\")"
        );
    }

    #[test]
    fn test_automap() {
        let sql = automap(&rxn(), "DISCARD");
        assert_eq!(sql.as_str(), "bingo.aam(\"reactions\".\"rxn\", 'DISCARD')");
    }

    #[test]
    fn test_to_binary() {
        let sql = to_binary(&rxn(), false);
        assert_eq!(
            sql.as_str(),
            "bingo.compactreaction(\"reactions\".\"rxn\", false)"
        );
    }
}
