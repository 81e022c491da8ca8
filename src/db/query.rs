//! Query evaluation shared by all store backends
//!
//! A `Query` is an optional single-field predicate plus an offset/limit
//! window. Backends feed their documents (in their natural order) through
//! [`execute`], which validates the predicate, filters, skips and truncates.
//!
//! Comparison rules:
//! - equality and ordering only compare like kinds (numbers with numbers,
//!   strings with strings, booleans with booleans)
//! - a missing field never matches
//! - `array-contains` needs an array field holding the value
//! - `in` matches a field equal to any value of any group
//! - `array-contains-any` matches an array field holding any value of any group

use super::error::StoreError;
use super::types::{Document, Value};
use crate::filters::{FilterPredicate, Operator, TypedValue};
use std::cmp::Ordering;

/// Maximum number of values a single membership group may carry
pub const MAX_MEMBERSHIP_VALUES: usize = 10;

/// A bounded read against one collection
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// Optional filter predicate
    pub filter: Option<FilterPredicate>,
    /// Number of matching documents to skip
    pub offset: usize,
    /// Maximum number of documents to return
    pub limit: usize,
}

impl Query {
    /// Unfiltered scan returning at most `limit` documents
    #[must_use]
    pub const fn scan(limit: usize) -> Self {
        Self {
            filter: None,
            offset: 0,
            limit,
        }
    }

    /// Filtered read returning at most `limit` documents
    #[must_use]
    pub const fn filtered(filter: FilterPredicate, limit: usize) -> Self {
        Self {
            filter: Some(filter),
            offset: 0,
            limit,
        }
    }

    /// Set the number of matching documents to skip
    #[must_use]
    pub const fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }
}

/// Run `query` over `documents`, preserving their order
///
/// # Errors
///
/// Returns `StoreError::InvalidQuery` if the predicate cannot be evaluated,
/// or the first error yielded by `documents`.
pub fn execute<I>(documents: I, query: &Query) -> Result<Vec<Document>, StoreError>
where
    I: IntoIterator<Item = Result<Document, StoreError>>,
{
    if let Some(predicate) = &query.filter {
        validate(predicate)?;
    }

    let mut results = Vec::new();
    if query.limit == 0 {
        return Ok(results);
    }

    let mut skipped = 0;
    for document in documents {
        let document = document?;
        if query
            .filter
            .as_ref()
            .is_some_and(|predicate| !matches(predicate, &document))
        {
            continue;
        }
        if skipped < query.offset {
            skipped += 1;
            continue;
        }
        results.push(document);
        if results.len() >= query.limit {
            break;
        }
    }

    Ok(results)
}

/// Check that a predicate's value fits its operator
///
/// # Errors
///
/// Returns `StoreError::InvalidQuery` when membership operators lack a
/// grouped value, groups are empty or oversized, or a non-membership
/// operator is given groups.
pub fn validate(predicate: &FilterPredicate) -> Result<(), StoreError> {
    match (&predicate.value, predicate.operator.is_membership()) {
        (TypedValue::Chunks(groups), true) => {
            if groups.is_empty() || groups.iter().any(Vec::is_empty) {
                return Err(StoreError::InvalidQuery(format!(
                    "'{}' needs at least one value",
                    predicate.operator
                )));
            }
            if let Some(group) = groups.iter().find(|g| g.len() > MAX_MEMBERSHIP_VALUES) {
                return Err(StoreError::InvalidQuery(format!(
                    "'{}' supports at most {MAX_MEMBERSHIP_VALUES} values per group, got {}",
                    predicate.operator,
                    group.len()
                )));
            }
            Ok(())
        }
        (_, true) => Err(StoreError::InvalidQuery(format!(
            "'{}' requires a list of values",
            predicate.operator
        ))),
        (TypedValue::Chunks(_), false) => Err(StoreError::InvalidQuery(format!(
            "'{}' does not accept a list of values",
            predicate.operator
        ))),
        _ => Ok(()),
    }
}

/// Whether `document` satisfies `predicate`
#[must_use]
pub fn matches(predicate: &FilterPredicate, document: &Document) -> bool {
    let Some(field) = document.get(&predicate.field) else {
        return false;
    };

    match (&predicate.value, predicate.operator) {
        (TypedValue::Chunks(groups), Operator::In) => groups
            .iter()
            .flatten()
            .any(|candidate| field.loosely_equals(&Value::from(candidate.as_str()))),
        (TypedValue::Chunks(groups), Operator::ArrayContainsAny) => match field {
            Value::Array(items) => groups.iter().flatten().any(|candidate| {
                let candidate = Value::from(candidate.as_str());
                items.iter().any(|item| item.loosely_equals(&candidate))
            }),
            _ => false,
        },
        (TypedValue::Chunks(_), _) => false,
        (scalar, operator) => {
            let expected = scalar_value(scalar);
            match operator {
                Operator::Eq => field.loosely_equals(&expected),
                Operator::ArrayContains => match field {
                    Value::Array(items) => items.iter().any(|item| item.loosely_equals(&expected)),
                    _ => false,
                },
                Operator::Lt => field.compare(&expected) == Some(Ordering::Less),
                Operator::Le => matches!(
                    field.compare(&expected),
                    Some(Ordering::Less | Ordering::Equal)
                ),
                Operator::Gt => field.compare(&expected) == Some(Ordering::Greater),
                Operator::Ge => matches!(
                    field.compare(&expected),
                    Some(Ordering::Greater | Ordering::Equal)
                ),
                Operator::In | Operator::ArrayContainsAny => false,
            }
        }
    }
}

fn scalar_value(value: &TypedValue) -> Value {
    match value {
        TypedValue::String(s) => Value::String(s.clone()),
        TypedValue::Float(f) => Value::Float(*f),
        TypedValue::Integer(i) => Value::Integer(*i),
        TypedValue::Chunks(_) => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{DEFAULT_CHUNK_SIZE, coerce_value};
    use serde_json::json;

    fn people() -> Vec<Document> {
        vec![
            Document::from_json("a", json!({"name": "ann", "age": 25, "tags": ["x", "y"]})).unwrap(),
            Document::from_json("b", json!({"name": "bob", "age": 30, "tags": ["y"]})).unwrap(),
            Document::from_json("c", json!({"name": "cat", "age": 100.5, "tags": []})).unwrap(),
            Document::from_json("d", json!({"name": "dan", "age": "40"})).unwrap(),
            Document::from_json("e", json!({"name": "eve"})).unwrap(),
        ]
    }

    fn predicate(field: &str, operator: Operator, raw: &str) -> FilterPredicate {
        FilterPredicate::new(field, operator, coerce_value(raw, operator, DEFAULT_CHUNK_SIZE))
    }

    fn ids(documents: &[Document]) -> Vec<&str> {
        documents.iter().map(|d| d.id.as_str()).collect()
    }

    fn run(query: &Query) -> Vec<Document> {
        execute(people().into_iter().map(Ok), query).unwrap()
    }

    #[test]
    fn test_numeric_ordering_not_lexicographic() {
        let query = Query::filtered(predicate("age", Operator::Ge, "30"), 10);
        // "100.5" would sort before "30" lexicographically; "40" is a string
        assert_eq!(ids(&run(&query)), vec!["b", "c"]);
    }

    #[test]
    fn test_large_integer_compared_exactly() {
        let doc = Document::from_json("big", json!({"n": 9_007_199_254_740_993_i64})).unwrap();

        let above = predicate("n", Operator::Gt, "9007199254740992");
        assert!(matches(&above, &doc));
        assert!(matches(&predicate("n", Operator::Ge, "9007199254740992"), &doc));
        assert!(!matches(&predicate("n", Operator::Le, "9007199254740992"), &doc));
    }

    #[test]
    fn test_string_ordering_fallback() {
        let query = Query::filtered(predicate("name", Operator::Lt, "c"), 10);
        assert_eq!(ids(&run(&query)), vec!["a", "b"]);
    }

    #[test]
    fn test_strict_and_inclusive_bounds() {
        let lt = Query::filtered(predicate("age", Operator::Lt, "30"), 10);
        let le = Query::filtered(predicate("age", Operator::Le, "30"), 10);
        let gt = Query::filtered(predicate("age", Operator::Gt, "30"), 10);
        assert_eq!(ids(&run(&lt)), vec!["a"]);
        assert_eq!(ids(&run(&le)), vec!["a", "b"]);
        assert_eq!(ids(&run(&gt)), vec!["c"]);
    }

    #[test]
    fn test_equality_is_type_strict() {
        let by_name = Query::filtered(predicate("name", Operator::Eq, "bob"), 10);
        let by_text_age = Query::filtered(predicate("age", Operator::Eq, "40"), 10);
        let by_number_age = Query::filtered(predicate("age", Operator::Eq, "30"), 10);
        assert_eq!(ids(&run(&by_name)), vec!["b"]);
        assert_eq!(ids(&run(&by_text_age)), vec!["d"]);
        // equality keeps raw text, so numeric fields never match
        assert!(run(&by_number_age).is_empty());
    }

    #[test]
    fn test_array_contains() {
        let query = Query::filtered(predicate("tags", Operator::ArrayContains, "y"), 10);
        assert_eq!(ids(&run(&query)), vec!["a", "b"]);
    }

    #[test]
    fn test_in_spans_all_groups() {
        let names = "zed,yan,xia,wes,vic,uma,tom,sam,rob,quin,eve";
        let query = Query::filtered(predicate("name", Operator::In, names), 10);
        assert_eq!(ids(&run(&query)), vec!["e"]);
    }

    #[test]
    fn test_array_contains_any() {
        let query = Query::filtered(predicate("tags", Operator::ArrayContainsAny, "q,x"), 10);
        assert_eq!(ids(&run(&query)), vec!["a"]);
    }

    #[test]
    fn test_missing_field_never_matches() {
        let query = Query::filtered(predicate("nickname", Operator::Eq, ""), 10);
        assert!(run(&query).is_empty());
    }

    #[test]
    fn test_offset_and_limit() {
        let query = Query::scan(2).with_offset(1);
        assert_eq!(ids(&run(&query)), vec!["b", "c"]);

        let past_end = Query::scan(2).with_offset(10);
        assert!(run(&past_end).is_empty());

        let filtered = Query::filtered(predicate("age", Operator::Ge, "25"), 1).with_offset(1);
        assert_eq!(ids(&run(&filtered)), vec!["b"]);
    }

    #[test]
    fn test_zero_limit() {
        assert!(run(&Query::scan(0)).is_empty());
    }

    #[test]
    fn test_oversized_group_rejected() {
        let values: Vec<String> = (0..11).map(|i| i.to_string()).collect();
        let predicate = FilterPredicate::new("name", Operator::In, TypedValue::Chunks(vec![values]));
        let result = execute(people().into_iter().map(Ok), &Query::filtered(predicate, 10));
        assert!(matches!(result, Err(StoreError::InvalidQuery(_))));
    }

    #[test]
    fn test_membership_requires_groups() {
        let bad = FilterPredicate::new("name", Operator::In, TypedValue::String("a".into()));
        assert!(validate(&bad).is_err());

        let bad = FilterPredicate::new("name", Operator::Eq, TypedValue::Chunks(vec![vec!["a".into()]]));
        assert!(validate(&bad).is_err());

        let empty = FilterPredicate::new("name", Operator::In, TypedValue::Chunks(vec![]));
        assert!(validate(&empty).is_err());
    }

    #[test]
    fn test_source_error_propagates() {
        let documents = vec![Err(StoreError::InvalidName("bad".into()))];
        assert!(execute(documents, &Query::scan(10)).is_err());
    }
}
