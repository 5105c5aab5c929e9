//! SQL expression fragments.
//!
//! Every builder in this crate produces a [`SqlExpr`]: an owned, fully
//! rendered SQL fragment. Fragments compose with [`SqlExpr::and`],
//! [`SqlExpr::or`] and [`SqlExpr::not`]; composition is lossless because each
//! operand is parenthesized before joining.
//!
//! Query literals (SMILES, SMARTS, option strings) are embedded with
//! single-quote escaping only. No chemistry-level validation or parsing
//! happens here; malformed patterns surface as errors from the cartridge
//! when the statement executes.

use std::fmt;

/// An owned SQL fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlExpr {
    sql: String,
}

impl SqlExpr {
    /// Wrap an already-rendered SQL fragment.
    pub fn raw(sql: impl Into<String>) -> Self {
        Self { sql: sql.into() }
    }

    /// The rendered SQL text.
    pub fn as_str(&self) -> &str {
        &self.sql
    }

    /// Consume the fragment, returning the SQL text.
    pub fn into_sql(self) -> String {
        self.sql
    }

    /// Build an infix operator expression: `left <op> right`.
    pub fn binary(left: SqlExpr, op: &str, right: SqlExpr) -> SqlExpr {
        SqlExpr::raw(format!("{} {} {}", left.sql, op, right.sql))
    }

    /// Combine with another expression using `AND`.
    ///
    /// Both operands are parenthesized, so nested combinations keep their
    /// operator/cast fragments and literals intact.
    pub fn and(self, other: SqlExpr) -> SqlExpr {
        SqlExpr::raw(format!("({}) AND ({})", self.sql, other.sql))
    }

    /// Combine with another expression using `OR`.
    pub fn or(self, other: SqlExpr) -> SqlExpr {
        SqlExpr::raw(format!("({}) OR ({})", self.sql, other.sql))
    }

    /// Negate the expression.
    pub fn not(self) -> SqlExpr {
        SqlExpr::raw(format!("NOT ({})", self.sql))
    }
}

impl fmt::Display for SqlExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}

/// Render a string as a quoted SQL literal, doubling embedded single quotes.
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Render a float so it always carries a decimal point.
///
/// Similarity bounds default to `0.0`/`1.0` and must appear that way in the
/// generated SQL rather than as bare integers.
pub fn format_float(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_roundtrip() {
        let expr = SqlExpr::raw("a = 1");
        assert_eq!(expr.as_str(), "a = 1");
        assert_eq!(expr.to_string(), "a = 1");
    }

    #[test]
    fn test_binary_operator() {
        let expr = SqlExpr::binary(SqlExpr::raw("col"), "@", SqlExpr::raw("rhs"));
        assert_eq!(expr.as_str(), "col @ rhs");
    }

    #[test]
    fn test_and_parenthesizes_both_sides() {
        let expr = SqlExpr::raw("a = 1").and(SqlExpr::raw("b = 2"));
        assert_eq!(expr.as_str(), "(a = 1) AND (b = 2)");
    }

    #[test]
    fn test_or_parenthesizes_both_sides() {
        let expr = SqlExpr::raw("a = 1").or(SqlExpr::raw("b = 2"));
        assert_eq!(expr.as_str(), "(a = 1) OR (b = 2)");
    }

    #[test]
    fn test_nested_composition_keeps_fragments() {
        let expr = SqlExpr::raw("x @ q1")
            .and(SqlExpr::raw("y % q2"))
            .or(SqlExpr::raw("z = 3"));
        assert_eq!(expr.as_str(), "((x @ q1) AND (y % q2)) OR (z = 3)");
        assert!(expr.as_str().contains("x @ q1"));
        assert!(expr.as_str().contains("y % q2"));
    }

    #[test]
    fn test_not() {
        let expr = SqlExpr::raw("a = 1").not();
        assert_eq!(expr.as_str(), "NOT (a = 1)");
    }

    #[test]
    fn test_quote_literal() {
        assert_eq!(quote_literal("c1ccccc1"), "'c1ccccc1'");
        assert_eq!(quote_literal("it's"), "'it''s'");
        assert_eq!(quote_literal(""), "''");
    }

    #[test]
    fn test_format_float_whole_values() {
        assert_eq!(format_float(0.0), "0.0");
        assert_eq!(format_float(1.0), "1.0");
        assert_eq!(format_float(2.0), "2.0");
    }

    #[test]
    fn test_format_float_fractional_values() {
        assert_eq!(format_float(0.7), "0.7");
        assert_eq!(format_float(0.95), "0.95");
    }
}
