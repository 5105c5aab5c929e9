//! RDKit cartridge bindings.
//!
//! Column markers for the native `mol`/`bfp`/`sfp`/`reaction` types,
//! expression builders over the cartridge operators and functions, and
//! GiST index declarations.

pub mod catalog;
pub mod fp;
pub mod index;
pub mod mol;
pub mod rxn;
pub mod types;

pub use index::{RdkitIndex, RDKIT_INDEX_METHOD};
pub use types::{RdkitBitFingerprint, RdkitMol, RdkitReaction, RdkitSparseFingerprint};
