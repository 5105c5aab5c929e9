//! Bindings for the Bingo PostgreSQL cartridge.
//!
//! Bingo installs its functions and operator classes into a `bingo` schema
//! and matches structures stored as text (`varchar`) or in its compact
//! binary form (`bytea`).

pub mod catalog;
pub mod index;
pub mod mol;
pub mod rxn;
pub mod types;

pub use index::BingoIndex;
pub use mol::{SimilarityOptions, WeightKind};
pub use types::{
    BingoBinaryMol, BingoBinaryReaction, BingoMol, BingoMolFormat, BingoReaction,
    BingoRxnFormat, BINGO_SCHEMA,
};
