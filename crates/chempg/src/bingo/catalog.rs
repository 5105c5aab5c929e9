//! Data table of the full `bingo.*` function surface.
//!
//! One entry per SQL function registered by the cartridge, replacing the
//! generated one-wrapper-per-function stubs the upstream catalog implies.
//! Call sites that want a function outside the typed wrappers go through
//! [`call`], which checks the name and arity and nothing else.

use crate::core::expr::SqlExpr;
use crate::core::functions::{Catalog, FunctionSpec, ReturnKind};
use crate::error::Result;

const fn spec(name: &'static str, min_args: usize, max_args: usize, returns: ReturnKind) -> FunctionSpec {
    FunctionSpec {
        schema: Some("bingo"),
        name,
        min_args,
        max_args,
        returns,
    }
}

/// Every function the Bingo cartridge registers in the `bingo` schema.
pub static BINGO_FUNCTIONS: Catalog = Catalog::new(
    "bingo",
    &[
        spec("aam", 2, 2, ReturnKind::Text),
        spec("cansmiles", 1, 1, ReturnKind::Text),
        spec("checkmolecule", 1, 1, ReturnKind::NullableText),
        spec("checkreaction", 1, 1, ReturnKind::NullableText),
        spec("cml", 1, 1, ReturnKind::Text),
        spec("compactmolecule", 2, 2, ReturnKind::Bytes),
        spec("compactreaction", 2, 2, ReturnKind::Bytes),
        spec("exportrdf", 4, 4, ReturnKind::Void),
        spec("exportsdf", 4, 4, ReturnKind::Void),
        spec("filetoblob", 1, 1, ReturnKind::Bytes),
        spec("filetotext", 1, 1, ReturnKind::Text),
        spec("fingerprint", 2, 2, ReturnKind::Bytes),
        spec("getblockcount", 1, 1, ReturnKind::Integer),
        spec("getindexstructurescount", 0, 0, ReturnKind::Integer),
        spec("getmass", 1, 1, ReturnKind::Real),
        spec("getname", 1, 1, ReturnKind::Text),
        spec("getsimilarity", 3, 3, ReturnKind::Real),
        spec("getstructurescount", 1, 1, ReturnKind::Integer),
        spec("getversion", 0, 0, ReturnKind::Text),
        spec("getweight", 2, 2, ReturnKind::Real),
        spec("gross", 1, 1, ReturnKind::Text),
        spec("importrdf", 4, 4, ReturnKind::Void),
        spec("importsdf", 4, 4, ReturnKind::Void),
        spec("importsmiles", 4, 4, ReturnKind::Void),
        spec("inchi", 2, 2, ReturnKind::Text),
        spec("inchikey", 1, 1, ReturnKind::Text),
        spec("matchexact", 2, 3, ReturnKind::Boolean),
        spec("matchgross", 2, 2, ReturnKind::Boolean),
        spec("matchrexact", 2, 3, ReturnKind::Boolean),
        spec("matchrsmarts", 2, 3, ReturnKind::Boolean),
        spec("matchrsub", 2, 3, ReturnKind::Boolean),
        spec("matchsim", 2, 3, ReturnKind::Boolean),
        spec("matchsmarts", 2, 3, ReturnKind::Boolean),
        spec("matchsub", 2, 3, ReturnKind::Boolean),
        spec("molfile", 1, 1, ReturnKind::Text),
        spec("precachedatabase", 2, 2, ReturnKind::Void),
        spec("rcml", 1, 1, ReturnKind::Text),
        spec("rfingerprint", 2, 2, ReturnKind::Bytes),
        spec("rsmiles", 1, 1, ReturnKind::Text),
        spec("rxnfile", 1, 1, ReturnKind::Text),
        spec("smiles", 1, 1, ReturnKind::Text),
        spec("standardize", 2, 2, ReturnKind::Text),
    ],
);

/// Build a `bingo.*` call by name with arity checking.
///
/// # Errors
///
/// `ChemError::Config` for an unknown function name or wrong argument count.
pub fn call(name: &str, args: &[SqlExpr]) -> Result<SqlExpr> {
    BINGO_FUNCTIONS.call(name, args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::expr::quote_literal;

    #[test]
    fn test_catalog_covers_conversions() {
        for name in ["cansmiles", "smiles", "molfile", "cml", "gross", "inchikey"] {
            let spec = BINGO_FUNCTIONS.lookup(name).unwrap();
            assert_eq!(spec.min_args, 1);
            assert_eq!(spec.returns, ReturnKind::Text);
        }
    }

    #[test]
    fn test_validity_checks_use_null_channel() {
        assert_eq!(
            BINGO_FUNCTIONS.lookup("checkmolecule").unwrap().returns,
            ReturnKind::NullableText
        );
        assert_eq!(
            BINGO_FUNCTIONS.lookup("checkreaction").unwrap().returns,
            ReturnKind::NullableText
        );
    }

    #[test]
    fn test_call_version() {
        let sql = call("getversion", &[]).unwrap();
        assert_eq!(sql.as_str(), "bingo.getversion()");
    }

    #[test]
    fn test_call_case_insensitive() {
        let sql = call("CanSMILES", &[SqlExpr::raw(quote_literal("CCO"))]).unwrap();
        assert_eq!(sql.as_str(), "bingo.cansmiles('CCO')");
    }

    #[test]
    fn test_call_unknown_function() {
        let err = call("canonicalize", &[]).unwrap_err();
        assert!(err.to_string().contains("Unknown bingo function"));
    }

    #[test]
    fn test_call_arity_checked() {
        let err = call("getversion", &[SqlExpr::raw("1")]).unwrap_err();
        assert!(err.to_string().contains("bingo.getversion"));
    }

    #[test]
    fn test_bulk_io_functions_take_four_args() {
        let args: Vec<SqlExpr> = ["tbl", "col", "other", "path"]
            .iter()
            .map(|a| SqlExpr::raw(quote_literal(a)))
            .collect();
        for name in ["exportsdf", "exportrdf", "importsdf", "importrdf", "importsmiles"] {
            let sql = call(name, &args).unwrap();
            assert_eq!(sql.as_str(), format!("bingo.{}('tbl', 'col', 'other', 'path')", name));
            assert!(call(name, &args[..3]).is_err());
        }
    }
}
