//! PostgreSQL chemistry cartridge bindings.
//!
//! A thin, typed layer over the Bingo and RDKit cartridges: column type
//! markers that know their storage and decode formats, expression builders
//! that render the cartridges' search operators and functions as SQL text,
//! index declarations, and migration helpers driven by a YAML schema
//! config.
//!
//! The layer deliberately performs no chemistry. Query strings (SMILES,
//! SMARTS, Molfile, gross formulas) pass through verbatim and the cartridge
//! reports bad ones when the SQL executes. Errors produced here are
//! structural: bad identifiers, unknown vendor functions, wrong arity,
//! unrecognized return formats, or a column of the wrong marker family.
//!
//! ```no_run
//! use chempg::bingo::{self, SimilarityOptions};
//! use chempg::core::ChemColumn;
//!
//! # fn main() -> chempg::error::Result<()> {
//! let col = ChemColumn::with_table("compounds", "structure", chempg::bingo::BingoMol)?;
//! let filter = bingo::mol::has_substructure(&col, "c1ccccc1", "")
//!     .and(bingo::mol::similarity(&col, "CCO", &SimilarityOptions::default()));
//! assert!(filter.as_str().contains("bingo.sub"));
//! # Ok(())
//! # }
//! ```

pub mod bingo;
pub mod config;
pub mod core;
pub mod error;
pub mod helpers;
pub mod migration;
pub mod rdkit;

pub use config::SchemaConfig;
pub use core::{ChemColumn, ChemType, ColumnKind, SqlExpr};
pub use error::{ChemError, Result};
