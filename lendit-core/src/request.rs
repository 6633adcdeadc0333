//! Validated search request models.
//!
//! A request is built once from raw client input, is immutable afterwards,
//! and is discarded with the response. The category-scoped variant resolves
//! its category level to one of exactly three column identifiers through
//! [`CategoryType`]; the requested string never reaches the SQL text.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::ValidationError;
use crate::pagination::{Pagination, DEFAULT_PER_PAGE};
use crate::sorting::SortSpec;

/// Hierarchical category level for scoped searches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryType {
    Major,
    Minor,
    Sub,
}

impl CategoryType {
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        match value {
            "major" => Ok(Self::Major),
            "minor" => Ok(Self::Minor),
            "sub" => Ok(Self::Sub),
            other => Err(ValidationError::UnknownCategoryType {
                value: other.to_owned(),
            }),
        }
    }

    /// The pre-vetted column filtered by this level
    pub fn column(&self) -> &'static str {
        match self {
            Self::Major => "product_categories_major_id",
            Self::Minor => "product_categories_minor_id",
            Self::Sub => "product_categories_sub_id",
        }
    }
}

/// Unscoped product search: availability window near a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    location_id: i64,
    starts_on: NaiveDate,
    ends_on: NaiveDate,
    sorting: SortSpec,
    pagination: Pagination,
}

impl SearchRequest {
    /// `starts_on <= ends_on` is an upstream contract, not checked here.
    pub fn new(
        location_id: i64,
        starts_on: NaiveDate,
        ends_on: NaiveDate,
        sorting: SortSpec,
        pagination: Pagination,
    ) -> Self {
        Self {
            location_id,
            starts_on,
            ends_on,
            sorting,
            pagination,
        }
    }

    /// Validate raw client input into a request; missing required fields
    /// fail before any SQL is rendered.
    pub fn from_params(params: &SearchParams) -> Result<Self, ValidationError> {
        let location_id = params
            .location_id
            .ok_or(ValidationError::MissingField {
                field: "location_id",
            })?;
        let starts_on = params
            .starts_on
            .ok_or(ValidationError::MissingField { field: "starts_on" })?;
        let ends_on = params
            .ends_on
            .ok_or(ValidationError::MissingField { field: "ends_on" })?;

        let sorting = match (&params.sort, &params.order) {
            (Some(field), Some(order)) => SortSpec::new(field, order)?,
            (Some(field), None) => SortSpec::new(field, "asc")?,
            _ => SortSpec::default(),
        };
        let pagination = Pagination::new(
            params.page.unwrap_or(1),
            params.per_page.unwrap_or(DEFAULT_PER_PAGE),
        )?;

        Ok(Self::new(location_id, starts_on, ends_on, sorting, pagination))
    }

    pub fn location_id(&self) -> i64 {
        self.location_id
    }

    pub fn starts_on(&self) -> NaiveDate {
        self.starts_on
    }

    pub fn ends_on(&self) -> NaiveDate {
        self.ends_on
    }

    pub fn sorting(&self) -> &SortSpec {
        &self.sorting
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }
}

/// Category-scoped product search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySearchRequest {
    search: SearchRequest,
    category_type: CategoryType,
    category_id: i64,
}

impl CategorySearchRequest {
    pub fn new(search: SearchRequest, category_type: CategoryType, category_id: i64) -> Self {
        Self {
            search,
            category_type,
            category_id,
        }
    }

    pub fn from_params(params: &SearchParams) -> Result<Self, ValidationError> {
        let search = SearchRequest::from_params(params)?;
        let (category_type, category_id) = match (&params.category_type, params.category_id) {
            (Some(kind), Some(id)) => (CategoryType::parse(kind)?, id),
            (None, None) => return Err(ValidationError::IncompleteCategoryFilter),
            _ => return Err(ValidationError::IncompleteCategoryFilter),
        };

        Ok(Self::new(search, category_type, category_id))
    }

    pub fn search(&self) -> &SearchRequest {
        &self.search
    }

    pub fn category_type(&self) -> CategoryType {
        self.category_type
    }

    pub fn category_id(&self) -> i64 {
        self.category_id
    }
}

/// Raw search input as it arrives from the client, all fields optional.
///
/// Fields stay inline rather than grouped into nested structs: the query
/// string deserializer used by HTTP extractors cannot flatten non-string
/// fields, so a flattened pagination pair would reject every request that
/// set it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    pub location_id: Option<i64>,
    pub starts_on: Option<NaiveDate>,
    pub ends_on: Option<NaiveDate>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub category_type: Option<String>,
    pub category_id: Option<i64>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl SearchParams {
    /// True when either half of the category pair is present
    pub fn has_category_filter(&self) -> bool {
        self.category_type.is_some() || self.category_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn valid_params() -> SearchParams {
        SearchParams {
            location_id: Some(5),
            starts_on: Some(date("2024-01-01")),
            ends_on: Some(date("2024-01-05")),
            sort: Some("price".into()),
            order: Some("asc".into()),
            ..Default::default()
        }
    }

    #[test]
    fn builds_from_complete_params() {
        let request = SearchRequest::from_params(&valid_params()).unwrap();
        assert_eq!(request.location_id(), 5);
        assert_eq!(request.starts_on(), date("2024-01-01"));
        assert_eq!(request.ends_on(), date("2024-01-05"));
    }

    #[test]
    fn missing_location_is_rejected() {
        let mut params = valid_params();
        params.location_id = None;
        let err = SearchRequest::from_params(&params).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingField {
                field: "location_id"
            }
        );
    }

    #[test]
    fn missing_dates_are_rejected() {
        let mut params = valid_params();
        params.ends_on = None;
        assert!(matches!(
            SearchRequest::from_params(&params),
            Err(ValidationError::MissingField { field: "ends_on" })
        ));
    }

    #[test]
    fn parses_from_query_string_with_pagination() {
        // Same deserializer the HTTP layer's Query extractor uses
        let params: SearchParams = serde_urlencoded::from_str(
            "location_id=5&starts_on=2024-01-01&ends_on=2024-01-05&sort=price&order=asc&page=3&per_page=20",
        )
        .unwrap();

        let request = SearchRequest::from_params(&params).unwrap();
        assert_eq!(request.location_id(), 5);
        assert_eq!(request.pagination().page(), 3);
        assert_eq!(request.pagination().per_page(), 20);
        assert_eq!(request.pagination().offset(), 40);
    }

    #[test]
    fn query_string_without_pagination_uses_defaults() {
        let params: SearchParams = serde_urlencoded::from_str(
            "location_id=5&starts_on=2024-01-01&ends_on=2024-01-05",
        )
        .unwrap();

        let request = SearchRequest::from_params(&params).unwrap();
        assert_eq!(request.pagination().page(), 1);
        assert_eq!(request.pagination().per_page(), 20);
    }

    #[test]
    fn category_type_resolves_to_known_columns() {
        assert_eq!(
            CategoryType::parse("major").unwrap().column(),
            "product_categories_major_id"
        );
        assert_eq!(
            CategoryType::parse("minor").unwrap().column(),
            "product_categories_minor_id"
        );
        assert_eq!(
            CategoryType::parse("sub").unwrap().column(),
            "product_categories_sub_id"
        );
    }

    #[test]
    fn unknown_category_type_is_rejected() {
        assert!(matches!(
            CategoryType::parse("mega"),
            Err(ValidationError::UnknownCategoryType { .. })
        ));
    }

    #[test]
    fn category_filter_requires_both_halves() {
        let mut params = valid_params();
        params.category_type = Some("minor".into());
        assert!(matches!(
            CategorySearchRequest::from_params(&params),
            Err(ValidationError::IncompleteCategoryFilter)
        ));

        params.category_type = None;
        params.category_id = Some(9);
        assert!(matches!(
            CategorySearchRequest::from_params(&params),
            Err(ValidationError::IncompleteCategoryFilter)
        ));

        params.category_type = Some("minor".into());
        let request = CategorySearchRequest::from_params(&params).unwrap();
        assert_eq!(request.category_id(), 9);
        assert_eq!(request.category_type(), CategoryType::Minor);
    }
}
