//! Data table of the RDKit cartridge function surface used by this layer.
//!
//! RDKit installs into the search path, so entries carry no schema
//! qualifier. Same contract as the Bingo table: [`call`] checks name and
//! arity, never argument values.

use crate::core::expr::SqlExpr;
use crate::core::functions::{Catalog, FunctionSpec, ReturnKind};
use crate::error::Result;

const fn spec(name: &'static str, min_args: usize, max_args: usize, returns: ReturnKind) -> FunctionSpec {
    FunctionSpec {
        schema: None,
        name,
        min_args,
        max_args,
        returns,
    }
}

/// RDKit cartridge functions reachable through this binding.
pub static RDKIT_FUNCTIONS: Catalog = Catalog::new(
    "rdkit",
    &[
        spec("mol_from_smiles", 1, 1, ReturnKind::Mol),
        spec("mol_from_smarts", 1, 1, ReturnKind::Mol),
        spec("mol_from_pkl", 1, 1, ReturnKind::Mol),
        spec("mol_to_smiles", 1, 1, ReturnKind::Text),
        spec("mol_to_cxsmiles", 1, 1, ReturnKind::Text),
        spec("mol_to_smarts", 1, 1, ReturnKind::Text),
        spec("mol_to_pkl", 1, 1, ReturnKind::Bytes),
        spec("mol_to_json", 1, 1, ReturnKind::Text),
        spec("mol_send", 1, 1, ReturnKind::Bytes),
        spec("mol_amw", 1, 1, ReturnKind::Real),
        spec("mol_tpsa", 1, 1, ReturnKind::Real),
        spec("mol_logp", 1, 1, ReturnKind::Real),
        spec("mol_numatoms", 1, 1, ReturnKind::Integer),
        spec("mol_hba", 1, 1, ReturnKind::Integer),
        spec("mol_hbd", 1, 1, ReturnKind::Integer),
        spec("mol_formula", 1, 1, ReturnKind::Text),
        spec("mol_inchi", 1, 1, ReturnKind::Text),
        spec("mol_inchikey", 1, 1, ReturnKind::Text),
        spec("mol_murckoscaffold", 1, 1, ReturnKind::Mol),
        spec("is_valid_smiles", 1, 1, ReturnKind::Boolean),
        spec("is_valid_smarts", 1, 1, ReturnKind::Boolean),
        spec("maccs_fp", 1, 1, ReturnKind::Fingerprint),
        spec("morgan_fp", 1, 2, ReturnKind::Fingerprint),
        spec("morganbv_fp", 1, 2, ReturnKind::Fingerprint),
        spec("torsion_fp", 1, 1, ReturnKind::Fingerprint),
        spec("tanimoto_sml", 2, 2, ReturnKind::Real),
        spec("dice_sml", 2, 2, ReturnKind::Real),
        spec("reaction_from_smiles", 1, 1, ReturnKind::Reaction),
        spec("reaction_to_smiles", 1, 1, ReturnKind::Text),
        spec("reaction_send", 1, 1, ReturnKind::Bytes),
        spec("reaction_numreactants", 1, 1, ReturnKind::Integer),
        spec("reaction_numproducts", 1, 1, ReturnKind::Integer),
        spec("rdkit_version", 0, 0, ReturnKind::Text),
    ],
);

/// Build an RDKit cartridge call by name with arity checking.
///
/// # Errors
///
/// `ChemError::Config` for an unknown function name or wrong argument count.
pub fn call(name: &str, args: &[SqlExpr]) -> Result<SqlExpr> {
    RDKIT_FUNCTIONS.call(name, args)
}
