//! SQL conflict statement builder
//!
//! Builds the conflict detector's `SELECT` with SeaQuery for cross-database
//! compatibility. Statement *execution* stays with the host application's
//! ORM or connection pool: slugforge only decides what to ask, never how to
//! reach the database.
//!
//! # Testing Generated SQL
//!
//! When writing tests that check generated SQL strings, account for quoted
//! identifiers and backend-specific function names (`CHAR_LENGTH` on
//! PostgreSQL/MySQL, `LENGTH` on SQLite) by asserting on fragments rather
//! than whole statements.

use sea_query::{Alias, Expr, ExprTrait, Func, LikeExpr, Order, Query, SelectStatement, Value};
use slugforge_core::candidates::CandidateValue;
use slugforge_core::conflict::SlugScope;

/// Convert a scope value to a SeaQuery value
fn scope_value(value: &CandidateValue) -> Value {
	match value {
		// BigInt(None) is used for generic NULL values across all dialects
		CandidateValue::Null => Value::BigInt(None),
		CandidateValue::Integer(n) => Value::BigInt(Some(*n)),
		CandidateValue::Text(s) => Value::String(Some(s.clone())),
		CandidateValue::List(_) => Value::String(value.render()),
	}
}

/// Escape LIKE pattern metacharacters in a slug base
fn escape_like(input: &str) -> String {
	let mut escaped = String::with_capacity(input.len());
	for ch in input.chars() {
		if matches!(ch, '%' | '_' | '\\') {
			escaped.push('\\');
		}
		escaped.push(ch);
	}
	escaped
}

/// Builder for the conflict detector's SELECT statement
///
/// Produces a query returning every stored slug equal to the base or
/// matching `base + separator + <anything>`, scope-filtered, optionally
/// excluding one primary key, ordered (length desc, value desc) the way
/// [`slugforge_core::sequence::next_slug`] expects.
///
/// # Examples
///
/// ```
/// use sea_query::PostgresQueryBuilder;
/// use slugforge_core::conflict::SlugScope;
/// use slugforge_db::sql::ConflictSelect;
///
/// let statement = ConflictSelect::new("restaurants")
///     .build("plaza-diner", '-', &SlugScope::new(), None);
/// let sql = statement.to_string(PostgresQueryBuilder);
///
/// assert!(sql.contains("LIKE"));
/// assert!(sql.contains("plaza-diner"));
/// ```
#[derive(Debug, Clone)]
pub struct ConflictSelect {
	table: String,
	slug_column: String,
	key_column: String,
}

impl ConflictSelect {
	/// Target the given table with the default `slug` and `id` columns
	pub fn new(table: impl Into<String>) -> Self {
		Self {
			table: table.into(),
			slug_column: "slug".to_string(),
			key_column: "id".to_string(),
		}
	}

	/// Override the slug column name
	pub fn slug_column(mut self, column: impl Into<String>) -> Self {
		self.slug_column = column.into();
		self
	}

	/// Override the primary key column name
	pub fn key_column(mut self, column: impl Into<String>) -> Self {
		self.key_column = column.into();
		self
	}

	/// Build the SELECT for a base slug within a scope
	pub fn build(
		&self,
		base: &str,
		separator: char,
		scope: &SlugScope,
		exclude: Option<i64>,
	) -> SelectStatement {
		let slug_col = || Expr::col(Alias::new(&self.slug_column));
		let pattern = format!("{}{separator}%", escape_like(base));

		let mut statement = Query::select();
		statement
			.column(Alias::new(&self.slug_column))
			.from(Alias::new(&self.table))
			.and_where(
				slug_col()
					.eq(Expr::val(base))
					.or(slug_col().like(LikeExpr::new(pattern).escape('\\'))),
			);

		for (column, value) in scope.iter() {
			match value {
				CandidateValue::Null => {
					statement.and_where(Expr::col(Alias::new(column)).is_null());
				}
				other => {
					statement.and_where(
						Expr::col(Alias::new(column)).eq(Expr::val(scope_value(other))),
					);
				}
			}
		}

		if let Some(key) = exclude {
			statement.and_where(Expr::col(Alias::new(&self.key_column)).ne(Expr::val(key)));
		}

		statement
			.order_by_expr(Func::char_length(slug_col()).into(), Order::Desc)
			.order_by(Alias::new(&self.slug_column), Order::Desc);

		statement
	}
}
