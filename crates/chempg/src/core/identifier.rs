//! Identifier validation and quoting for dynamic SQL.
//!
//! SQL identifiers (table names, column names, index names) cannot be bound
//! as statement parameters, so every identifier that ends up in generated SQL
//! goes through validation and PostgreSQL double-quoting here.

use crate::error::{ChemError, Result};

/// Maximum identifier length. PostgreSQL truncates at 63 bytes; anything
/// longer is a caller mistake we surface instead of letting the server
/// silently truncate.
const MAX_IDENTIFIER_LENGTH: usize = 63;

/// Validate an identifier for use in generated SQL.
///
/// Rejects:
/// - Empty identifiers
/// - Identifiers containing null bytes (injection vector)
/// - Identifiers exceeding PostgreSQL's length limit
///
/// # Errors
///
/// Returns `ChemError::Config` with a descriptive message.
pub fn validate_identifier(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ChemError::Config(
            "Identifier cannot be empty".to_string(),
        ));
    }

    if name.contains('\0') {
        return Err(ChemError::Config(format!(
            "Identifier contains null byte (possible injection attempt): {:?}",
            name
        )));
    }

    if name.len() > MAX_IDENTIFIER_LENGTH {
        return Err(ChemError::Config(format!(
            "Identifier exceeds maximum length of {} bytes (got {} bytes): {:?}",
            MAX_IDENTIFIER_LENGTH,
            name.len(),
            name
        )));
    }

    Ok(())
}

/// Quote a PostgreSQL identifier.
///
/// Escapes double quotes by doubling them and wraps in double quotes.
/// Validates the identifier before quoting.
///
/// # Examples
///
/// ```
/// # use chempg::core::identifier::quote;
/// assert_eq!(quote("molecules").unwrap(), "\"molecules\"");
/// assert_eq!(quote("odd\"name").unwrap(), "\"odd\"\"name\"");
/// ```
pub fn quote(name: &str) -> Result<String> {
    validate_identifier(name)?;
    Ok(format!("\"{}\"", name.replace('"', "\"\"")))
}

/// Qualify a column with its table name.
///
/// Returns `"table"."column"` with proper quoting.
pub fn qualify(table: &str, column: &str) -> Result<String> {
    Ok(format!("{}.{}", quote(table)?, quote(column)?))
}
