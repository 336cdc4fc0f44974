//! Filter-term rows for WHERE clause editing.
//!
//! A [`TermSet`] holds an ordered list of independently edited filter
//! rows. All rows combine under one shared connective; there is no
//! per-pair mixing of AND and OR.

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TermError {
    #[error("At least one term is required")]
    MinimumTermsViolation,
    #[error("No term at index {0}")]
    ItemNotFound(usize),
}

/// Relational operator of one filter term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    Like,
    NotLike,
    IsNull,
    IsNotNull,
}

impl RelOp {
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "<>",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::Like => "LIKE",
            Self::NotLike => "NOT LIKE",
            Self::IsNull => "IS NULL",
            Self::IsNotNull => "IS NOT NULL",
        }
    }

    /// Parse operator from its SQL spelling.
    pub fn from_sql(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "=" => Some(Self::Eq),
            "<>" | "!=" => Some(Self::Ne),
            "<" => Some(Self::Lt),
            "<=" => Some(Self::Le),
            ">" => Some(Self::Gt),
            ">=" => Some(Self::Ge),
            "LIKE" => Some(Self::Like),
            "NOT LIKE" => Some(Self::NotLike),
            "IS NULL" => Some(Self::IsNull),
            "IS NOT NULL" => Some(Self::IsNotNull),
            _ => None,
        }
    }

    /// Null checks take no right-hand value.
    pub fn is_null_check(self) -> bool {
        matches!(self, Self::IsNull | Self::IsNotNull)
    }
}

/// Connective joining all terms of a set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connective {
    #[default]
    And,
    Or,
}

impl Connective {
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    pub column: String,
    pub operator: RelOp,
    pub value: String,
}

impl Term {
    /// A complete term takes part in synthesis; an incomplete one is a
    /// row still being edited and is skipped silently.
    pub fn is_complete(&self) -> bool {
        !self.column.is_empty() && (self.operator.is_null_check() || !self.value.is_empty())
    }
}

#[derive(Debug, Clone)]
pub struct TermSet {
    terms: Vec<Term>,
    connective: Connective,
    allow_empty: bool,
}

impl TermSet {
    /// With `allow_empty == false`, removing the last remaining term is
    /// rejected; the host adds the first row right after construction.
    pub fn new(allow_empty: bool) -> Self {
        Self {
            terms: Vec::new(),
            connective: Connective::default(),
            allow_empty,
        }
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn allow_empty(&self) -> bool {
        self.allow_empty
    }

    pub fn connective(&self) -> Connective {
        self.connective
    }

    pub fn set_connective(&mut self, connective: Connective) {
        self.connective = connective;
    }

    /// Append a fresh row with the given default column, operator `=`
    /// and an empty value. Returns the new row's index.
    pub fn add_term(&mut self, default_column: &str) -> usize {
        self.terms.push(Term {
            column: default_column.to_string(),
            operator: RelOp::Eq,
            value: String::new(),
        });
        self.terms.len() - 1
    }

    /// Remove the row at `index`, re-indexing the rows after it.
    pub fn remove_term(&mut self, index: usize) -> Result<(), TermError> {
        if index >= self.terms.len() {
            return Err(TermError::ItemNotFound(index));
        }
        if !self.allow_empty && self.terms.len() == 1 {
            return Err(TermError::MinimumTermsViolation);
        }
        self.terms.remove(index);
        Ok(())
    }

    pub fn set_column(&mut self, index: usize, column: &str) -> Result<(), TermError> {
        let term = self.term_mut(index)?;
        term.column = column.to_string();
        Ok(())
    }

    /// Change a row's operator. Switching to a null check clears the
    /// value; switching away leaves the value at its empty default.
    pub fn set_operator(&mut self, index: usize, operator: RelOp) -> Result<(), TermError> {
        let term = self.term_mut(index)?;
        term.operator = operator;
        if operator.is_null_check() {
            term.value.clear();
        }
        Ok(())
    }

    /// Set a row's value. A no-op while the row's operator is a null
    /// check, since the value field is disabled there.
    pub fn set_value(&mut self, index: usize, value: &str) -> Result<(), TermError> {
        let term = self.term_mut(index)?;
        if !term.operator.is_null_check() {
            term.value = value.to_string();
        }
        Ok(())
    }

    /// Whether the value field is editable for the row at `index`.
    pub fn value_enabled(&self, index: usize) -> bool {
        self.terms
            .get(index)
            .is_some_and(|t| !t.operator.is_null_check())
    }

    pub fn complete_terms(&self) -> impl Iterator<Item = &Term> {
        self.terms.iter().filter(|t| t.is_complete())
    }

    fn term_mut(&mut self, index: usize) -> Result<&mut Term, TermError> {
        self.terms
            .get_mut(index)
            .ok_or(TermError::ItemNotFound(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_remove() {
        let mut set = TermSet::new(true);
        set.add_term("id");
        set.add_term("name");
        assert_eq!(set.len(), 2);
        set.remove_term(0).unwrap();
        assert_eq!(set.terms()[0].column, "name");
    }

    #[test]
    fn test_minimum_cardinality() {
        let mut set = TermSet::new(false);
        set.add_term("id");
        let err = set.remove_term(0);
        assert_eq!(err, Err(TermError::MinimumTermsViolation));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut set = TermSet::new(true);
        set.add_term("id");
        assert_eq!(set.remove_term(3), Err(TermError::ItemNotFound(3)));
    }

    #[test]
    fn test_allow_empty_can_drain() {
        let mut set = TermSet::new(true);
        set.add_term("id");
        set.remove_term(0).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_null_check_clears_value() {
        let mut set = TermSet::new(true);
        set.add_term("id");
        set.set_value(0, "5").unwrap();
        set.set_operator(0, RelOp::IsNull).unwrap();
        assert_eq!(set.terms()[0].value, "");
        assert!(!set.value_enabled(0));
        // Value stays disabled until the operator changes back.
        set.set_value(0, "ignored").unwrap();
        assert_eq!(set.terms()[0].value, "");
        set.set_operator(0, RelOp::Eq).unwrap();
        assert!(set.value_enabled(0));
        assert_eq!(set.terms()[0].value, "");
    }

    #[test]
    fn test_completeness() {
        let mut set = TermSet::new(true);
        set.add_term("id");
        // Empty value, binary operator: incomplete.
        assert_eq!(set.complete_terms().count(), 0);
        set.set_value(0, "5").unwrap();
        assert_eq!(set.complete_terms().count(), 1);
        set.set_operator(0, RelOp::IsNotNull).unwrap();
        // Null check needs no value.
        assert_eq!(set.complete_terms().count(), 1);
        set.set_column(0, "").unwrap();
        assert_eq!(set.complete_terms().count(), 0);
    }

    #[test]
    fn test_operator_spelling() {
        assert_eq!(RelOp::Ne.as_sql(), "<>");
        assert_eq!(RelOp::from_sql("not like"), Some(RelOp::NotLike));
        assert_eq!(RelOp::from_sql("!="), Some(RelOp::Ne));
        assert_eq!(RelOp::from_sql("between"), None);
    }
}
