//! Composition tests: chemistry predicates combined with the boolean
//! helpers must keep every operator, cast and literal fragment intact.

use chempg::bingo::{self, BingoBinaryMol, BingoMol, SimilarityOptions};
use chempg::core::{ChemColumn, SqlExpr};
use chempg::rdkit::{self, RdkitBitFingerprint, RdkitMol};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn bingo_col() -> ChemColumn {
    ChemColumn::with_table("compounds", "structure", BingoMol).unwrap()
}

fn rdkit_col() -> ChemColumn {
    ChemColumn::with_table("compounds", "m", RdkitMol::default()).unwrap()
}

#[test]
fn and_keeps_both_fragments() {
    init_tracing();
    let sub = bingo::mol::has_substructure(&bingo_col(), "c1ccccc1", "");
    let sim = bingo::mol::similarity(&bingo_col(), "CCO", &SimilarityOptions::default());
    let combined = sub.and(sim);

    let sql = combined.as_str();
    assert!(sql.contains("bingo.sub"));
    assert!(sql.contains("bingo.sim"));
    assert!(sql.contains("'c1ccccc1'"));
    assert!(sql.contains("'CCO'"));
    assert!(sql.contains("0.0"));
    assert!(sql.contains("1.0"));
    assert!(sql.contains("'Tanimoto'"));
    assert!(sql.contains(" AND "));
}

#[test]
fn or_and_not_compose() {
    let exact = bingo::mol::equals(&bingo_col(), "CCO", "");
    let gross = bingo::mol::has_gross_formula(&bingo_col(), "C6 H6");
    let combined = exact.or(gross.not());

    let sql = combined.as_str();
    assert!(sql.contains("bingo.exact"));
    assert!(sql.contains("bingo.gross"));
    assert!(sql.contains(" OR "));
    assert!(sql.contains("NOT "));
}

#[test]
fn cross_cartridge_filters_combine() {
    init_tracing();
    let bingo_side = bingo::mol::matches_smarts(&bingo_col(), "[#6]=[#8]", "");
    let rdkit_side = rdkit::mol::has_substructure(&rdkit_col(), "c1ccccc1");
    let combined = bingo_side.and(rdkit_side);

    let sql = combined.as_str();
    assert!(sql.contains("bingo.smarts"));
    assert!(sql.contains("@>"));
    assert!(sql.contains("\"compounds\".\"structure\""));
    assert!(sql.contains("\"compounds\".\"m\""));
}

#[test]
fn fingerprint_filter_composes_with_descriptor_comparison() {
    let fp = ChemColumn::with_table("compounds", "fp", RdkitBitFingerprint).unwrap();
    let query_fp = SqlExpr::raw("morganbv_fp(mol_from_smiles('CCO'::cstring), 2)");
    let similar = rdkit::fp::tanimoto_similar(&fp, query_fp);

    let light = SqlExpr::binary(rdkit::mol::amw(&rdkit_col()), "<", SqlExpr::raw("300"));
    let combined = similar.and(light);

    let sql = combined.as_str();
    assert!(sql.contains(" % "));
    assert!(sql.contains("morganbv_fp"));
    assert!(sql.contains("mol_amw"));
    assert!(sql.contains("< 300"));
}

#[test]
fn binary_storage_round_trip_expressions_compose() {
    init_tracing();
    let col = ChemColumn::with_table(
        "compounds",
        "structure",
        BingoBinaryMol::new(true, "molfile"),
    )
    .unwrap();

    let read = col.read_expression().unwrap();
    assert_eq!(
        read.as_str(),
        "bingo.molfile(\"compounds\".\"structure\")"
    );

    let bound = col.bind_literal("CCO");
    assert_eq!(bound.as_str(), "bingo.compactmolecule('CCO', true)");

    // Search still runs against the raw column reference.
    let filter = bingo::mol::has_substructure(&col, "CC", "");
    assert!(filter
        .as_str()
        .starts_with("\"compounds\".\"structure\" @"));
}

#[test]
fn nested_composition_parenthesizes() {
    let a = bingo::mol::equals(&bingo_col(), "A", "");
    let b = bingo::mol::equals(&bingo_col(), "B", "");
    let c = bingo::mol::equals(&bingo_col(), "C", "");
    let combined = a.or(b).and(c);

    let sql = combined.as_str();
    // The OR group must be bound tighter than the AND.
    assert!(sql.contains("("));
    assert!(sql.contains(" OR "));
    assert!(sql.contains(" AND "));
    assert!(sql.contains("'A'"));
    assert!(sql.contains("'B'"));
    assert!(sql.contains("'C'"));
}
