//! Pagination policy: LIMIT/OFFSET math and the count-query rewrite.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Maximum items per page; larger requests are clamped, not rejected,
/// to protect the store from unbounded scans.
pub const MAX_PER_PAGE: u32 = 100;

/// Default items per page when the client sends none
pub const DEFAULT_PER_PAGE: u32 = 20;

/// Validated pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    per_page: u32,
}

impl Pagination {
    /// Create pagination with validation.
    ///
    /// `page < 1` or `per_page < 1` is rejected; `per_page` above
    /// [`MAX_PER_PAGE`] is clamped to the ceiling.
    pub fn new(page: u32, per_page: u32) -> Result<Self, ValidationError> {
        if page < 1 {
            return Err(ValidationError::InvalidPage { page });
        }
        if per_page < 1 {
            return Err(ValidationError::InvalidPageSize { per_page });
        }
        Ok(Self {
            page,
            per_page: per_page.min(MAX_PER_PAGE),
        })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// LIMIT value
    pub fn limit(&self) -> u32 {
        self.per_page
    }

    /// SQL OFFSET value
    pub fn offset(&self) -> u64 {
        (self.page as u64 - 1) * self.per_page as u64
    }

    /// Append the LIMIT/OFFSET clause to a base statement.
    pub fn rows_clause(&self, base: &str) -> String {
        format!("{} LIMIT {} OFFSET {}", base, self.limit(), self.offset())
    }

    /// Rewrite a base statement into its COUNT(*) form, with no
    /// LIMIT/OFFSET. The base is wrapped as a derived table so the rewrite
    /// holds for any well-formed SELECT.
    pub fn count_clause(&self, base: &str) -> String {
        format!("SELECT COUNT(*) AS total FROM ({}) AS search_rows", base)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// Paginated response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    /// Items for the current page
    pub items: Vec<T>,
    /// Total count across all pages
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}

impl<T> Paginated<T> {
    pub fn total_pages(&self) -> u32 {
        if self.total <= 0 {
            1
        } else {
            ((self.total as u32 + self.per_page - 1) / self.per_page).max(1)
        }
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_calculation() {
        let p = Pagination::new(1, 10).unwrap();
        assert_eq!(p.offset(), 0);

        let p = Pagination::new(2, 10).unwrap();
        assert_eq!(p.offset(), 10);

        let p = Pagination::new(3, 25).unwrap();
        assert_eq!(p.offset(), 50);
    }

    #[test]
    fn rejects_page_zero() {
        assert_eq!(
            Pagination::new(0, 10),
            Err(ValidationError::InvalidPage { page: 0 })
        );
    }

    #[test]
    fn rejects_per_page_zero() {
        assert_eq!(
            Pagination::new(1, 0),
            Err(ValidationError::InvalidPageSize { per_page: 0 })
        );
    }

    #[test]
    fn clamps_per_page_to_ceiling() {
        let p = Pagination::new(1, 999).unwrap();
        assert_eq!(p.per_page(), MAX_PER_PAGE);
    }

    #[test]
    fn rows_clause_contains_exact_limit_offset() {
        let p = Pagination::new(3, 20).unwrap();
        let sql = p.rows_clause("SELECT * FROM t");
        assert_eq!(sql, "SELECT * FROM t LIMIT 20 OFFSET 40");
    }

    #[test]
    fn count_clause_has_no_limit() {
        let p = Pagination::new(3, 20).unwrap();
        let sql = p.count_clause("SELECT * FROM t WHERE x = ?");
        assert!(sql.contains("COUNT(*)"));
        assert!(!sql.contains("LIMIT"));
        assert!(!sql.contains("OFFSET"));
    }

    #[test]
    fn envelope_total_pages() {
        let paginated: Paginated<()> = Paginated {
            items: vec![],
            total: 25,
            page: 1,
            per_page: 10,
        };
        assert_eq!(paginated.total_pages(), 3);
        assert!(paginated.has_next());
        assert!(!paginated.has_prev());
    }
}
