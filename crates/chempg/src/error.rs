//! Error types for the cartridge binding layer.

use thiserror::Error;

/// Main error type for expression building and schema operations.
///
/// Chemistry-level errors (bad SMILES, unknown similarity metrics, malformed
/// SMARTS) are never represented here: this layer passes query strings through
/// verbatim and lets the cartridge report them when the SQL executes.
#[derive(Error, Debug)]
pub enum ChemError {
    /// Configuration error (invalid return format, unknown vendor function,
    /// bad identifier, malformed YAML schema, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// A column with the wrong type marker was passed to a typed accessor
    /// or index declaration.
    #[error("Column type error: expected {expected}, got {actual}")]
    ColumnType { expected: String, actual: String },

    /// Database connection or statement error from the PostgreSQL driver.
    #[error("Database error: {0}")]
    Database(#[from] tokio_postgres::Error),

    /// Connection pool error with context
    #[error("Pool error: {message}\n  Context: {context}")]
    Pool { message: String, context: String },

    /// IO error (reading config files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl ChemError {
    /// Create a Config error.
    pub fn config(message: impl Into<String>) -> Self {
        ChemError::Config(message.into())
    }

    /// Create a ColumnType error naming the accepted set and the actual kind.
    pub fn column_type(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        ChemError::ColumnType {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create a Pool error with context about where it occurred
    pub fn pool(message: impl Into<String>, context: impl Into<String>) -> Self {
        ChemError::Pool {
            message: message.into(),
            context: context.into(),
        }
    }
}

/// Result type alias for binding-layer operations.
pub type Result<T> = std::result::Result<T, ChemError>;
