//! SELECT statement synthesis from independently edited building blocks.
//!
//! A [`QuerySpec`] owns one projection pair, one [`TermSet`] and one
//! ordering model for a single editing session. The host mutates them in
//! response to user actions and calls [`QuerySpec::synthesize`] to obtain
//! the final SQL text, which it hands to its own executor.

use crate::escape::{like_pattern, quote, string_literal};
use crate::swaplist::{SwapError, SwapList};
use crate::terms::{RelOp, Term, TermSet};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("No table name has been set")]
    IncompleteSpecification,
}

/// The name SQLite gives the schema every connection starts with. A
/// target in this schema is emitted without qualification.
const DEFAULT_SCHEMA: &str = "main";

/// Sort direction of one ORDER BY entry. ASC is the SQL default and is
/// not printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

/// Available/selected column pair for the SELECT column list.
#[derive(Debug, Clone, Default)]
pub struct Projection {
    available: SwapList<String>,
    chosen: SwapList<String>,
}

impl Projection {
    pub fn new(columns: &[String]) -> Self {
        Self {
            available: SwapList::from_unique(columns.iter().cloned()),
            chosen: SwapList::new(),
        }
    }

    pub fn available(&self) -> &SwapList<String> {
        &self.available
    }

    pub fn chosen(&self) -> &SwapList<String> {
        &self.chosen
    }

    pub fn select(&mut self, column: &str) -> Result<(), SwapError> {
        SwapList::move_one(&mut self.available, &mut self.chosen, &column.to_string())
    }

    pub fn select_many(&mut self, columns: &[String]) -> Result<(), SwapError> {
        SwapList::move_selected(&mut self.available, &mut self.chosen, columns)
    }

    pub fn select_all(&mut self) -> Result<(), SwapError> {
        SwapList::move_all(&mut self.available, &mut self.chosen)
    }

    pub fn deselect(&mut self, column: &str) -> Result<(), SwapError> {
        SwapList::move_one(&mut self.chosen, &mut self.available, &column.to_string())
    }

    pub fn deselect_all(&mut self) -> Result<(), SwapError> {
        SwapList::move_all(&mut self.chosen, &mut self.available)
    }
}

/// Available/ordered column pair where each chosen column carries a
/// sort direction, ASC on insertion.
#[derive(Debug, Clone, Default)]
pub struct OrderModel {
    available: SwapList<String>,
    chosen: SwapList<String>,
    directions: Vec<SortDir>,
}

impl OrderModel {
    pub fn new(columns: &[String]) -> Self {
        Self {
            available: SwapList::from_unique(columns.iter().cloned()),
            chosen: SwapList::new(),
            directions: Vec::new(),
        }
    }

    pub fn available(&self) -> &SwapList<String> {
        &self.available
    }

    /// Ordered columns with their directions, in output order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, SortDir)> {
        self.chosen
            .iter()
            .zip(self.directions.iter())
            .map(|(col, dir)| (col.as_str(), *dir))
    }

    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }

    pub fn choose(&mut self, column: &str) -> Result<(), SwapError> {
        SwapList::move_one(&mut self.available, &mut self.chosen, &column.to_string())?;
        self.directions.push(SortDir::Asc);
        Ok(())
    }

    pub fn choose_all(&mut self) -> Result<(), SwapError> {
        let moved = self.available.len();
        SwapList::move_all(&mut self.available, &mut self.chosen)?;
        self.directions
            .extend(std::iter::repeat(SortDir::Asc).take(moved));
        Ok(())
    }

    pub fn unchoose(&mut self, column: &str) -> Result<(), SwapError> {
        let key = column.to_string();
        let index = self.chosen.position(&key).ok_or(SwapError::ItemNotFound)?;
        SwapList::move_one(&mut self.chosen, &mut self.available, &key)?;
        self.directions.remove(index);
        Ok(())
    }

    pub fn unchoose_all(&mut self) -> Result<(), SwapError> {
        SwapList::move_all(&mut self.chosen, &mut self.available)?;
        self.directions.clear();
        Ok(())
    }

    pub fn set_direction(&mut self, column: &str, dir: SortDir) -> Result<(), SwapError> {
        let index = self
            .chosen
            .position(&column.to_string())
            .ok_or(SwapError::ItemNotFound)?;
        self.directions[index] = dir;
        Ok(())
    }
}

/// Editable specification of one SELECT statement.
#[derive(Debug, Clone)]
pub struct QuerySpec {
    schema: Option<String>,
    table: String,
    projection: Projection,
    terms: TermSet,
    order: OrderModel,
}

impl QuerySpec {
    /// Create a spec targeting `table` with no known columns yet.
    /// `allow_empty_terms` is the browse-all policy: when false, the
    /// term set insists on keeping at least one filter row.
    pub fn new(table: &str, allow_empty_terms: bool) -> Self {
        Self {
            schema: None,
            table: table.to_string(),
            projection: Projection::default(),
            terms: TermSet::new(allow_empty_terms),
            order: OrderModel::default(),
        }
    }

    pub fn schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    pub fn set_schema(&mut self, schema: Option<&str>) {
        self.schema = schema.map(|s| s.to_string());
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn set_table(&mut self, table: &str) {
        self.table = table.to_string();
    }

    /// Reseed both column pairs and drop all terms, as the host does
    /// when the user picks a different table. The term policy and the
    /// connective survive the reseed.
    pub fn set_columns(&mut self, columns: &[String]) {
        self.projection = Projection::new(columns);
        self.order = OrderModel::new(columns);
        let mut fresh = TermSet::new(self.terms.allow_empty());
        fresh.set_connective(self.terms.connective());
        self.terms = fresh;
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn projection_mut(&mut self) -> &mut Projection {
        &mut self.projection
    }

    pub fn terms(&self) -> &TermSet {
        &self.terms
    }

    pub fn terms_mut(&mut self) -> &mut TermSet {
        &mut self.terms
    }

    pub fn order(&self) -> &OrderModel {
        &self.order
    }

    pub fn order_mut(&mut self) -> &mut OrderModel {
        &mut self.order
    }

    /// Assemble the final SELECT statement. Deterministic and
    /// side-effect-free; fails only when no table name is set.
    pub fn synthesize(&self) -> Result<String, QueryError> {
        if self.table.is_empty() {
            return Err(QueryError::IncompleteSpecification);
        }

        let mut sql = String::from("SELECT ");

        // Column list: each chosen column quoted on its own, `*` when
        // nothing is chosen.
        if self.projection.chosen.is_empty() {
            sql.push('*');
        } else {
            let cols: Vec<String> = self.projection.chosen.iter().map(|c| quote(c)).collect();
            sql.push_str(&cols.join(", "));
        }

        sql.push_str(" FROM ");
        match &self.schema {
            Some(schema) if !schema.is_empty() && schema != DEFAULT_SCHEMA => {
                sql.push_str(&quote(schema));
                sql.push('.');
            }
            _ => {}
        }
        sql.push_str(&quote(&self.table));

        let predicates: Vec<String> = self.terms.complete_terms().map(render_term).collect();
        if !predicates.is_empty() {
            let joiner = format!(" {} ", self.terms.connective().as_sql());
            sql.push_str(" WHERE ");
            sql.push_str(&predicates.join(&joiner));
        }

        if !self.order.is_empty() {
            let entries: Vec<String> = self
                .order
                .entries()
                .map(|(col, dir)| match dir {
                    SortDir::Asc => quote(col),
                    SortDir::Desc => format!("{} DESC", quote(col)),
                })
                .collect();
            sql.push_str(" ORDER BY ");
            sql.push_str(&entries.join(", "));
        }

        Ok(sql)
    }
}

fn render_term(term: &Term) -> String {
    let column = quote(&term.column);
    let op = term.operator.as_sql();
    match term.operator {
        RelOp::IsNull | RelOp::IsNotNull => format!("{} {}", column, op),
        RelOp::Like | RelOp::NotLike => {
            format!("{} {} {}", column, op, like_pattern(&term.value))
        }
        _ => format!("{} {} {}", column, op, string_literal(&term.value)),
    }
}
