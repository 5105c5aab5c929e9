//! Core building blocks shared by both cartridge bindings.

pub mod column;
pub mod expr;
pub mod functions;
pub mod identifier;

pub use column::{ChemColumn, ChemType, ColumnKind};
pub use expr::SqlExpr;
pub use functions::{Catalog, FunctionSpec, ReturnKind};
