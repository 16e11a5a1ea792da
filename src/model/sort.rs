//! Server-side ordering specifications for collection fetches.

use std::fmt;

use crate::error::InputError;

/// Direction of a server-side sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// Ascending order.
    Asc,
    /// Descending order.
    Desc,
}

impl SortOrder {
    /// Returns the token used when rendering a sort into a query parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `(field, direction)` entry in a server-side ordering request.
///
/// Each parameter renders to a single query-parameter token, e.g.
/// `name asc`. When a sequence of parameters is supplied to a collection
/// fetch, each becomes one repeated `sort` query parameter and the
/// sequence order is preserved; the server interprets the repetition as a
/// composite ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortParameter {
    field_name: String,
    order: SortOrder,
}

impl SortParameter {
    /// Creates a new sort parameter.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Blank`] if the field name is empty or
    /// whitespace-only.
    pub fn new(field_name: impl Into<String>, order: SortOrder) -> Result<Self, InputError> {
        let field_name = field_name.into();
        if field_name.trim().is_empty() {
            return Err(InputError::Blank {
                field: "Sort field name",
            });
        }
        Ok(Self { field_name, order })
    }

    /// The field being sorted on.
    #[must_use]
    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    /// The sort direction.
    #[must_use]
    pub const fn order(&self) -> SortOrder {
        self.order
    }
}

impl fmt::Display for SortParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field_name, self.order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_parameter_renders_field_and_lowercase_direction() {
        let ascending = SortParameter::new("name", SortOrder::Asc).unwrap();
        assert_eq!(ascending.to_string(), "name asc");

        let descending = SortParameter::new("createdTime", SortOrder::Desc).unwrap();
        assert_eq!(descending.to_string(), "createdTime desc");
    }

    #[test]
    fn test_sort_parameter_rejects_blank_field_names() {
        assert!(SortParameter::new("", SortOrder::Asc).is_err());
        assert!(SortParameter::new("   ", SortOrder::Desc).is_err());
    }

    #[test]
    fn test_accessors_return_constructed_values() {
        let sort = SortParameter::new("name", SortOrder::Desc).unwrap();
        assert_eq!(sort.field_name(), "name");
        assert_eq!(sort.order(), SortOrder::Desc);
    }
}
