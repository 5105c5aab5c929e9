//! Reaction expressions for the RDKit cartridge.
//!
//! Reaction substructure uses the cartridge's `?>` operator; exact match
//! shares `@=` with molecules.

use crate::core::column::ChemColumn;
use crate::core::expr::{quote_literal, SqlExpr};
use crate::core::functions::vendor_call;

use super::mol::EQUALS_OP;

/// Reaction substructure operator.
pub const RSUB_OP: &str = "?>";

/// Exact reaction match: `col @= 'query'`.
pub fn equals(col: &ChemColumn, query: &str) -> SqlExpr {
    SqlExpr::binary(col.expr(), EQUALS_OP, SqlExpr::raw(quote_literal(query)))
}

/// Reaction substructure search: `col ?> 'query'`.
pub fn has_substructure(col: &ChemColumn, query: &str) -> SqlExpr {
    SqlExpr::binary(col.expr(), RSUB_OP, SqlExpr::raw(quote_literal(query)))
}

/// Parse a reaction SMILES literal:
/// `reaction_from_smiles('CCO>>CC=O'::cstring)`.
pub fn from_smiles(smiles: &str) -> SqlExpr {
    let arg = SqlExpr::raw(format!("{}::cstring", quote_literal(smiles)));
    vendor_call(None, "reaction_from_smiles", &[arg])
}

/// Wire binary form: `reaction_send(col)`.
pub fn to_binary(col: &ChemColumn) -> SqlExpr {
    vendor_call(None, "reaction_send", &[col.expr()])
}

/// Reactant count: `reaction_numreactants(col)`.
pub fn num_reactants(col: &ChemColumn) -> SqlExpr {
    vendor_call(None, "reaction_numreactants", &[col.expr()])
}

/// Product count: `reaction_numproducts(col)`.
pub fn num_products(col: &ChemColumn) -> SqlExpr {
    vendor_call(None, "reaction_numproducts", &[col.expr()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdkit::types::RdkitReaction;

    fn rxn() -> ChemColumn {
        ChemColumn::with_table("reactions", "rxn", RdkitReaction::default()).unwrap()
    }

    #[test]
    fn test_has_substructure() {
        let sql = has_substructure(&rxn(), "C=C>>CC");
        assert_eq!(sql.as_str(), "\"reactions\".\"rxn\" ?> 'C=C>>CC'");
    }

    #[test]
    fn test_equals() {
        let sql = equals(&rxn(), "CCO>>CC=O");
        assert_eq!(sql.as_str(), "\"reactions\".\"rxn\" @= 'CCO>>CC=O'");
    }

    #[test]
    fn test_from_smiles() {
        let sql = from_smiles("CCO>>CC=O");
        assert_eq!(sql.as_str(), "reaction_from_smiles('CCO>>CC=O'::cstring)");
    }

    #[test]
    fn test_counts() {
        let col = rxn();
        assert_eq!(
            num_reactants(&col).as_str(),
            "reaction_numreactants(\"reactions\".\"rxn\")"
        );
        assert_eq!(
            num_products(&col).as_str(),
            "reaction_numproducts(\"reactions\".\"rxn\")"
        );
    }
}
