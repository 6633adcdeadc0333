//! Sort specification with an allow-list of sortable columns.
//!
//! ORDER BY clauses cannot be parameterized as bind values, so the only
//! defense against injection through sort parameters is this closed
//! enumeration: requested names are matched case-sensitively against the
//! allow-list and rendering only ever emits the mapped column identifiers.

use crate::error::ValidationError;

/// Sortable columns of the search view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Price,
    Name,
    CreatedOn,
    Distance,
}

impl SortField {
    /// Requested name → allow-listed field. Case-sensitive.
    pub fn parse(field: &str) -> Result<Self, ValidationError> {
        match field {
            "price" => Ok(Self::Price),
            "name" => Ok(Self::Name),
            "created_on" => Ok(Self::CreatedOn),
            "distance" => Ok(Self::Distance),
            other => Err(ValidationError::UnknownSortField {
                field: other.to_owned(),
            }),
        }
    }

    /// Column identifier rendered into ORDER BY
    pub fn column(&self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::Name => "name",
            Self::CreatedOn => "created_on",
            Self::Distance => "dropoff_distance",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn parse(direction: &str) -> Result<Self, ValidationError> {
        match direction {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(ValidationError::UnknownSortDirection {
                direction: other.to_owned(),
            }),
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Validated sort specification, a per-request value object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    field: SortField,
    direction: SortDirection,
}

impl SortSpec {
    /// Validate a requested field/direction pair against the allow-lists.
    pub fn new(field: &str, direction: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            field: SortField::parse(field)?,
            direction: SortDirection::parse(direction)?,
        })
    }

    pub fn field(&self) -> SortField {
        self.field
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Render the ORDER BY clause, leading space included.
    pub fn render(&self) -> String {
        format!(
            " ORDER BY {} {}",
            self.field.column(),
            self.direction.keyword()
        )
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            field: SortField::CreatedOn,
            direction: SortDirection::Desc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_allow_listed_fields() {
        let spec = SortSpec::new("price", "asc").unwrap();
        assert_eq!(spec.render(), " ORDER BY price ASC");

        let spec = SortSpec::new("distance", "desc").unwrap();
        assert_eq!(spec.render(), " ORDER BY dropoff_distance DESC");
    }

    #[test]
    fn rejects_unknown_field() {
        let err = SortSpec::new("DROP TABLE Products", "asc").unwrap_err();
        assert!(matches!(err, ValidationError::UnknownSortField { .. }));
    }

    #[test]
    fn rejects_unknown_direction() {
        let err = SortSpec::new("price", "sideways").unwrap_err();
        assert!(matches!(err, ValidationError::UnknownSortDirection { .. }));
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(SortSpec::new("Price", "asc").is_err());
        assert!(SortSpec::new("price", "ASC").is_err());
    }
}
