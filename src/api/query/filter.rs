//! Filter-expression composition for collection queries.

use std::fmt;

/// Filterable field restricting applications to those assigned to a user.
pub const USER_ID_FIELD: &str = "user.id";

/// Comparison operators accepted in filter predicates.
///
/// The vocabulary is closed: the API defines a fixed set of comparison
/// tokens, and constructing a predicate outside this set is a type error
/// rather than a malformed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    /// Equality: `field eq "value"`
    Eq,
    /// Not equal: `field ne "value"`
    Ne,
    /// Greater than: `field gt "value"`
    Gt,
    /// Greater than or equal: `field ge "value"`
    Ge,
    /// Less than: `field lt "value"`
    Lt,
    /// Less than or equal: `field le "value"`
    Le,
    /// Starts with: `field sw "value"`
    StartsWith,
    /// Contains: `field co "value"`
    Contains,
}

impl FilterOperator {
    /// Returns the operator token as it appears on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::Ne => "ne",
            Self::Gt => "gt",
            Self::Ge => "ge",
            Self::Lt => "lt",
            Self::Le => "le",
            Self::StartsWith => "sw",
            Self::Contains => "co",
        }
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A filter expression sent as the `filter` query parameter.
///
/// An expression is zero or more predicates of the form `field op "value"`.
/// Composition is append-only: each [`append`](Self::append) returns a new
/// expression with the prior one as a strict prefix. Predicates are joined
/// by a single space; conjunction is implicit, with no grouping or explicit
/// boolean combinators.
///
/// # Example
///
/// ```
/// use okta_client::{FilterExpression, FilterOperator};
///
/// let filter = FilterExpression::new()
///     .append("status", FilterOperator::Eq, "ACTIVE");
/// assert_eq!(filter.as_str(), "status eq \"ACTIVE\"");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterExpression(String);

impl FilterExpression {
    /// Creates an empty expression.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an expression from a raw filter string (escape hatch).
    ///
    /// The string is passed through to the API as-is.
    pub fn raw(filter: impl Into<String>) -> Self {
        Self(filter.into())
    }

    /// Appends a predicate, returning the extended expression.
    ///
    /// The value is wrapped in double quotes; the field is passed through
    /// verbatim. An empty expression yields exactly the new predicate with
    /// no leading separator.
    pub fn append(self, field: &str, operator: FilterOperator, value: &str) -> Self {
        if self.0.is_empty() {
            Self(format!("{field} {operator} \"{value}\""))
        } else {
            Self(format!("{} {field} {operator} \"{value}\"", self.0))
        }
    }

    /// Returns `true` if no predicate has been appended.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the expression as it is sent on the wire.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FilterExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_to_empty() {
        let filter = FilterExpression::new().append(USER_ID_FIELD, FilterOperator::Eq, "abc");
        assert_eq!(filter.as_str(), "user.id eq \"abc\"");
    }

    #[test]
    fn test_append_preserves_prefix() {
        let first = FilterExpression::new().append("status", FilterOperator::Eq, "ACTIVE");
        let prefix = first.as_str().to_string();
        let second = first.append(USER_ID_FIELD, FilterOperator::Eq, "abc");
        assert!(second.as_str().starts_with(&prefix));
        assert_eq!(
            second.as_str(),
            "status eq \"ACTIVE\" user.id eq \"abc\""
        );
    }

    #[test]
    fn test_operator_tokens() {
        assert_eq!(FilterOperator::Eq.as_str(), "eq");
        assert_eq!(FilterOperator::Ne.as_str(), "ne");
        assert_eq!(FilterOperator::Gt.as_str(), "gt");
        assert_eq!(FilterOperator::Ge.as_str(), "ge");
        assert_eq!(FilterOperator::Lt.as_str(), "lt");
        assert_eq!(FilterOperator::Le.as_str(), "le");
        assert_eq!(FilterOperator::StartsWith.as_str(), "sw");
        assert_eq!(FilterOperator::Contains.as_str(), "co");
    }

    #[test]
    fn test_raw_passthrough() {
        let filter = FilterExpression::raw("lastUpdated gt \"2020-01-01T00:00:00.000Z\"");
        assert_eq!(
            filter.as_str(),
            "lastUpdated gt \"2020-01-01T00:00:00.000Z\""
        );
    }

    #[test]
    fn test_empty_expression() {
        assert!(FilterExpression::new().is_empty());
        assert_eq!(FilterExpression::new().as_str(), "");
    }
}
