//! Schema migration helpers.
//!
//! DDL rendering for chemistry tables and indexes, plus the [`Cartridge`]
//! installer trait that brings a database up to a usable state. DDL
//! builders are pure string renderers; only the trait methods touch the
//! database.

use async_trait::async_trait;
use deadpool_postgres::{Config as PoolConfig, Pool, Runtime};
use tokio_postgres::{Client, NoTls};
use tracing::{debug, info};

use crate::bingo::index::BingoIndex;
use crate::bingo::types::BINGO_SCHEMA;
use crate::config::{Cartridge as CartridgeKind, DatabaseConfig, IndexConfig, TableConfig};
use crate::core::column::ChemType;
use crate::core::identifier::quote;
use crate::error::{ChemError, Result};
use crate::rdkit::index::RdkitIndex;

/// Render idempotent `CREATE EXTENSION` DDL.
pub fn create_extension_sql(name: &str) -> Result<String> {
    Ok(format!("CREATE EXTENSION IF NOT EXISTS {}", quote(name)?))
}

/// Render idempotent `DROP EXTENSION` DDL.
pub fn drop_extension_sql(name: &str) -> Result<String> {
    Ok(format!("DROP EXTENSION IF EXISTS {}", quote(name)?))
}

/// Source text needed to recreate a type marker in a generated migration
/// file: the item to import and the constructor expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedType {
    pub import: String,
    pub constructor: String,
}

/// Render the import path and constructor for a marker, for migration
/// generators that emit Rust source. Total over the marker set.
pub fn render_type(ty: &ChemType) -> RenderedType {
    let (module, constructor) = match ty {
        ChemType::BingoMol(_) => ("bingo", "BingoMol".to_string()),
        ChemType::BingoBinaryMol(t) => (
            "bingo",
            format!(
                "BingoBinaryMol::new({}, {:?})",
                t.preserve_position(),
                t.return_format()
            ),
        ),
        ChemType::BingoReaction(_) => ("bingo", "BingoReaction".to_string()),
        ChemType::BingoBinaryReaction(t) => (
            "bingo",
            format!(
                "BingoBinaryReaction::new({}, {:?})",
                t.preserve_position(),
                t.return_format()
            ),
        ),
        ChemType::RdkitMol(t) => (
            "rdkit",
            format!("RdkitMol::new({:?})", t.return_format()),
        ),
        ChemType::RdkitBitFingerprint(_) => ("rdkit", "RdkitBitFingerprint".to_string()),
        ChemType::RdkitSparseFingerprint(_) => {
            ("rdkit", "RdkitSparseFingerprint".to_string())
        }
        ChemType::RdkitReaction(t) => (
            "rdkit",
            format!("RdkitReaction::new({:?})", t.return_format()),
        ),
    };
    let type_name = constructor
        .split("::")
        .next()
        .unwrap_or(&constructor)
        .to_string();
    RenderedType {
        import: format!("chempg::{}::{}", module, type_name),
        constructor,
    }
}

/// Render `CREATE TABLE` DDL for a configured chemistry table.
///
/// Column types come from each marker's `col_spec`, so the same config
/// renders `varchar`/`bytea` for Bingo storage and the native `mol`/`bfp`/
/// `sfp`/`reaction` types for RDKit.
pub fn create_table_sql(table: &TableConfig) -> Result<String> {
    let mut columns = Vec::with_capacity(table.columns.len());
    for column in &table.columns {
        let marker = column.to_chem_type()?;
        columns.push(format!("{} {}", quote(&column.name)?, marker.col_spec()));
    }
    let sql = format!(
        "CREATE TABLE IF NOT EXISTS {} ({})",
        quote(&table.name)?,
        columns.join(", ")
    );
    debug!(table = %table.name, "rendered table DDL");
    Ok(sql)
}

/// Render `DROP TABLE` DDL for a configured table.
pub fn drop_table_sql(table: &TableConfig) -> Result<String> {
    Ok(format!("DROP TABLE IF EXISTS {}", quote(&table.name)?))
}

/// Render `CREATE INDEX` DDL for an index declaration.
///
/// The cartridge is taken from the indexed columns: Bingo columns get a
/// `bingo_idx` index with the opclass derived from the marker, RDKit
/// columns a GiST index.
pub fn create_index_sql(table: &TableConfig, index: &IndexConfig) -> Result<String> {
    let mut columns = Vec::with_capacity(index.columns.len());
    for name in &index.columns {
        let column = table.column(name).ok_or_else(|| {
            ChemError::config(format!(
                "Index {:?} references unknown column {:?} in table {:?}",
                index.name, name, table.name
            ))
        })?;
        columns.push(column.to_column(&table.name)?);
    }
    let first = columns.first().ok_or_else(|| {
        ChemError::config(format!("Index {:?} declares no columns", index.name))
    })?;

    let sql = if first.kind().is_bingo() {
        if columns.len() > 1 {
            return Err(ChemError::config(format!(
                "Index {:?}: bingo indexes cover exactly one column",
                index.name
            )));
        }
        BingoIndex::for_column(&index.name, first)?.to_sql()
    } else {
        let refs: Vec<&_> = columns.iter().collect();
        RdkitIndex::for_columns(&index.name, &refs)?.to_sql()
    };
    Ok(sql)
}

/// Render `DROP INDEX` DDL.
pub fn drop_index_sql(index: &IndexConfig) -> Result<String> {
    Ok(format!("DROP INDEX IF EXISTS {}", quote(&index.name)?))
}

/// Build a connection pool from database settings.
pub fn connect_pool(config: &DatabaseConfig) -> Result<Pool> {
    let mut pool_config = PoolConfig::new();
    pool_config.host = Some(config.host.clone());
    pool_config.port = Some(config.port);
    pool_config.dbname = Some(config.database.clone());
    pool_config.user = Some(config.username.clone());
    pool_config.password = Some(config.password.clone());
    pool_config.pool = Some(deadpool_postgres::PoolConfig::new(config.pool_size));

    pool_config
        .create_pool(Some(Runtime::Tokio1), NoTls)
        .map_err(|e| {
            ChemError::pool(
                e.to_string(),
                format!("creating pool for {}:{}", config.host, config.port),
            )
        })
}

/// A chemistry cartridge that can be installed into and probed on a
/// database.
#[async_trait]
pub trait Cartridge: Send + Sync {
    /// The cartridge this installer manages.
    fn kind(&self) -> CartridgeKind;

    /// Install the cartridge if it is not already present. Idempotent.
    async fn ensure_installed(&self, client: &Client) -> Result<()>;

    /// Report the installed cartridge version.
    async fn version(&self, client: &Client) -> Result<String>;
}

/// Installer for the RDKit cartridge, which ships as a regular extension.
pub struct RdkitCartridge;

#[async_trait]
impl Cartridge for RdkitCartridge {
    fn kind(&self) -> CartridgeKind {
        CartridgeKind::Rdkit
    }

    async fn ensure_installed(&self, client: &Client) -> Result<()> {
        client
            .batch_execute("CREATE EXTENSION IF NOT EXISTS rdkit")
            .await?;
        info!("rdkit extension present");
        Ok(())
    }

    async fn version(&self, client: &Client) -> Result<String> {
        let row = client.query_one("SELECT rdkit_version()", &[]).await?;
        Ok(row.get(0))
    }
}

/// Installer for the Bingo cartridge.
///
/// Bingo installs via its own SQL script rather than `CREATE EXTENSION`,
/// so installation here only verifies the `bingo` schema exists and
/// reports a usable error when it does not.
pub struct BingoCartridge;

#[async_trait]
impl Cartridge for BingoCartridge {
    fn kind(&self) -> CartridgeKind {
        CartridgeKind::Bingo
    }

    async fn ensure_installed(&self, client: &Client) -> Result<()> {
        let row = client
            .query_one(
                "SELECT EXISTS (SELECT 1 FROM information_schema.schemata WHERE schema_name = $1)",
                &[&BINGO_SCHEMA],
            )
            .await?;
        let present: bool = row.get(0);
        if !present {
            return Err(ChemError::config(
                "Bingo cartridge is not installed: run the bingo setup script against this database first",
            ));
        }
        info!("bingo schema present");
        Ok(())
    }

    async fn version(&self, client: &Client) -> Result<String> {
        let row = client.query_one("SELECT bingo.getversion()", &[]).await?;
        Ok(row.get(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SchemaConfig;

    const SAMPLE: &str = r#"
database: {host: localhost, database: chem, username: app}
tables:
  - name: compounds
    columns:
      - {name: structure, cartridge: bingo, kind: binary_mol}
      - {name: m, cartridge: rdkit, kind: mol}
      - {name: fp, cartridge: rdkit, kind: bit_fingerprint}
    indexes:
      - {name: idx_structure, columns: [structure]}
      - {name: idx_mol_fp, columns: [m, fp]}
"#;

    fn sample() -> SchemaConfig {
        SchemaConfig::from_yaml(SAMPLE).unwrap()
    }

    #[test]
    fn test_create_table_sql_mixes_cartridge_col_specs() {
        let config = sample();
        let sql = create_table_sql(&config.tables[0]).unwrap();
        assert_eq!(
            sql,
            "CREATE TABLE IF NOT EXISTS \"compounds\" (\"structure\" bytea, \"m\" mol, \"fp\" bfp)"
        );
    }

    #[test]
    fn test_drop_table_sql() {
        let config = sample();
        let sql = drop_table_sql(&config.tables[0]).unwrap();
        assert_eq!(sql, "DROP TABLE IF EXISTS \"compounds\"");
    }

    #[test]
    fn test_bingo_index_sql() {
        let config = sample();
        let table = &config.tables[0];
        let sql = create_index_sql(table, &table.indexes[0]).unwrap();
        assert_eq!(
            sql,
            "CREATE INDEX \"idx_structure\" ON \"compounds\" USING bingo_idx (\"structure\" bingo.bmolecule)"
        );
    }

    #[test]
    fn test_rdkit_index_sql() {
        let config = sample();
        let table = &config.tables[0];
        let sql = create_index_sql(table, &table.indexes[1]).unwrap();
        assert_eq!(
            sql,
            "CREATE INDEX \"idx_mol_fp\" ON \"compounds\" USING gist (\"m\", \"fp\")"
        );
    }

    #[test]
    fn test_drop_index_sql() {
        let config = sample();
        let sql = drop_index_sql(&config.tables[0].indexes[0]).unwrap();
        assert_eq!(sql, "DROP INDEX IF EXISTS \"idx_structure\"");
    }

    #[test]
    fn test_installer_kinds() {
        assert_eq!(RdkitCartridge.kind(), CartridgeKind::Rdkit);
        assert_eq!(BingoCartridge.kind(), CartridgeKind::Bingo);
    }

    #[test]
    fn test_extension_ddl() {
        assert_eq!(
            create_extension_sql("rdkit").unwrap(),
            "CREATE EXTENSION IF NOT EXISTS \"rdkit\""
        );
        assert_eq!(
            drop_extension_sql("rdkit").unwrap(),
            "DROP EXTENSION IF EXISTS \"rdkit\""
        );
        assert!(create_extension_sql("").is_err());
    }

    #[test]
    fn test_render_type_unit_markers() {
        use crate::bingo::types::BingoMol;

        let rendered = render_type(&ChemType::from(BingoMol));
        assert_eq!(rendered.import, "chempg::bingo::BingoMol");
        assert_eq!(rendered.constructor, "BingoMol");
    }

    #[test]
    fn test_render_type_configured_markers() {
        use crate::bingo::types::BingoBinaryMol;
        use crate::rdkit::types::RdkitMol;

        let rendered = render_type(&ChemType::from(BingoBinaryMol::new(true, "molfile")));
        assert_eq!(rendered.import, "chempg::bingo::BingoBinaryMol");
        assert_eq!(
            rendered.constructor,
            "BingoBinaryMol::new(true, \"molfile\")"
        );

        let rendered = render_type(&ChemType::from(RdkitMol::new("bytes")));
        assert_eq!(rendered.import, "chempg::rdkit::RdkitMol");
        assert_eq!(rendered.constructor, "RdkitMol::new(\"bytes\")");
    }

    #[tokio::test]
    async fn test_connect_pool_builds_without_connecting() {
        // Pool creation is lazy; no server needs to be listening.
        let config = sample().database;
        let pool = connect_pool(&config).unwrap();
        assert_eq!(pool.status().max_size, config.pool_size);
    }
}
