//! Generic vendor function-call machinery.
//!
//! Each cartridge exposes a flat surface of SQL functions. Instead of one
//! hand-written wrapper per function, the full surface lives in a static
//! data table ([`Catalog`]) and calls are built by name with arity checking.
//! The typed wrappers in `bingo::mol`, `bingo::rxn`, `rdkit::mol` and
//! friends all bottom out in [`vendor_call`].
//!
//! Argument *values* are never inspected: a syntactically valid call with a
//! garbage SMILES string renders fine and fails in the cartridge.

use crate::core::expr::SqlExpr;
use crate::error::{ChemError, Result};

/// What a vendor function returns, for documentation and result handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnKind {
    /// Text value (SMILES, Molfile, InChI, formula, version strings).
    Text,
    /// Text that is NULL on success — the validity-check error channel.
    NullableText,
    Integer,
    Real,
    Boolean,
    /// Raw bytes (compact binary forms, fingerprints).
    Bytes,
    /// Cartridge-native `mol` value.
    Mol,
    /// Cartridge-native fingerprint value (`bfp`/`sfp`).
    Fingerprint,
    /// Cartridge-native `reaction` value.
    Reaction,
    /// Side-effecting administrative call.
    Void,
}

/// One entry in a cartridge's function table.
#[derive(Debug, Clone, Copy)]
pub struct FunctionSpec {
    /// Schema the function lives in (`Some("bingo")`), or `None` for
    /// functions installed into the search path (RDKit cartridge).
    pub schema: Option<&'static str>,
    pub name: &'static str,
    pub min_args: usize,
    pub max_args: usize,
    pub returns: ReturnKind,
}

impl FunctionSpec {
    /// The schema-qualified name as it appears in SQL.
    pub fn qualified_name(&self) -> String {
        match self.schema {
            Some(schema) => format!("{}.{}", schema, self.name),
            None => self.name.to_string(),
        }
    }
}

/// A cartridge's static function table.
#[derive(Debug)]
pub struct Catalog {
    label: &'static str,
    entries: &'static [FunctionSpec],
}

impl Catalog {
    pub const fn new(label: &'static str, entries: &'static [FunctionSpec]) -> Self {
        Self { label, entries }
    }

    /// Look up a function by name, case-insensitively (PostgreSQL folds
    /// unquoted function names).
    pub fn lookup(&self, name: &str) -> Option<&FunctionSpec> {
        self.entries
            .iter()
            .find(|spec| spec.name.eq_ignore_ascii_case(name))
    }

    /// All entries, for introspection and doc generation.
    pub fn entries(&self) -> &'static [FunctionSpec] {
        self.entries
    }

    /// Build a call expression for a cataloged function.
    ///
    /// # Errors
    ///
    /// `ChemError::Config` for an unknown name or an argument count outside
    /// the function's declared range.
    pub fn call(&self, name: &str, args: &[SqlExpr]) -> Result<SqlExpr> {
        let spec = self.lookup(name).ok_or_else(|| {
            ChemError::config(format!(
                "Unknown {} function: {:?}",
                self.label, name
            ))
        })?;

        if args.len() < spec.min_args || args.len() > spec.max_args {
            let expected = if spec.min_args == spec.max_args {
                format!("{}", spec.min_args)
            } else {
                format!("{}..={}", spec.min_args, spec.max_args)
            };
            return Err(ChemError::config(format!(
                "{} takes {} argument(s), got {}",
                spec.qualified_name(),
                expected,
                args.len()
            )));
        }

        Ok(vendor_call(spec.schema, spec.name, args))
    }
}

/// Render a vendor function call: `schema.name(arg, arg, ...)`.
///
/// Vendor schema and function names are fixed strings from the catalogs or
/// the typed wrappers, never user input, so they are emitted unquoted —
/// exactly the spelling the installed cartridge registered.
pub fn vendor_call(schema: Option<&str>, name: &str, args: &[SqlExpr]) -> SqlExpr {
    let rendered_args = args
        .iter()
        .map(|a| a.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    match schema {
        Some(schema) => SqlExpr::raw(format!("{}.{}({})", schema, name, rendered_args)),
        None => SqlExpr::raw(format!("{}({})", name, rendered_args)),
    }
}
